// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

//! Plutchik emotional-state classifier.
//!
//! Turns a 4-axis emotional state into an English label such as
//! "mild anxiety" or "intense rage".
//!
//! ```
//! use plutchik_core::EmotionalState;
//!
//! assert_eq!(EmotionalState::new(0.0, 0.0, 0.9, 0.0).describe(), "complete ecstasy");
//! assert_eq!(EmotionalState::new(-0.6, 0.0, -0.5, 0.0).describe(), "despair");
//! assert_eq!(EmotionalState::default().describe(), "nothing");
//! ```

pub mod emotion;
pub mod intensity;
pub mod dyad;
pub mod state;
pub mod classifier;
pub mod config;
pub mod error;
pub mod render;

pub use classifier::{describe_simple_state, Classifier, Description, NOTHING};
pub use config::ClassifierConfig;
pub use dyad::{describe_combined_state, Dyad, DyadStyle, UNKNOWN_COMBINATION};
pub use emotion::{Dimension, Emotion};
pub use error::{Error, Result};
pub use intensity::{describe_by_intensity, intensity_prefix, Ladder, LadderBand, PrefixBand};
pub use render::FaceRenderer;
pub use state::EmotionalState;
