//! Simple-vs-combined decision and text rendering.
//!
//! The two strongest axes decide the description. If the strongest is
//! effectively neutral the state is "nothing"; if the runner-up is weaker
//! than `blend_ratio` of the strongest, only the strongest is described;
//! otherwise the pair is described as a dyad.

use std::fmt;

use serde::Serialize;
use tracing::trace;

use crate::config::ClassifierConfig;
use crate::dyad::{describe_combined_state, Dyad};
use crate::emotion::Emotion;
use crate::intensity::describe_by_intensity;
use crate::state::EmotionalState;

/// Text for a state with no axis outside the neutral band.
pub const NOTHING: &str = "nothing";

/// Outcome of classifying an [`EmotionalState`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Description {
    Nothing,
    Simple {
        emotion: Emotion,
        intensity: f64,
    },
    Combined {
        primary: Emotion,
        secondary: Emotion,
        intensity: f64,
    },
}

impl Description {
    /// Named blend for a combined description, if the pair has one.
    pub fn dyad(&self) -> Option<Dyad> {
        match *self {
            Self::Combined {
                primary, secondary, ..
            } => Dyad::from_pair(primary, secondary),
            _ => None,
        }
    }

    pub fn intensity(&self) -> f64 {
        match *self {
            Self::Nothing => 0.0,
            Self::Simple { intensity, .. } | Self::Combined { intensity, .. } => intensity,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Nothing => "nothing",
            Self::Simple { .. } => "simple",
            Self::Combined { .. } => "combined",
        }
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Nothing => f.write_str(NOTHING),
            Self::Simple { emotion, intensity } => {
                f.write_str(&describe_simple_state(emotion, intensity))
            }
            Self::Combined {
                primary,
                secondary,
                intensity,
            } => f.write_str(&describe_combined_state(primary, secondary, intensity)),
        }
    }
}

/// Describe a single emotion with its 9-band ladder.
pub fn describe_simple_state(emotion: Emotion, intensity: f64) -> String {
    describe_by_intensity(intensity, &emotion.ladder())
}

/// Stateless classifier parameterised by its decision thresholds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn classify(&self, state: &EmotionalState) -> Description {
        let ranked = state.ranked();
        let (primary, primary_value) = ranked[3];
        let (secondary, secondary_value) = ranked[2];

        trace!(
            %primary,
            primary_value,
            %secondary,
            secondary_value,
            "ranked emotional state"
        );

        let cutoff = self.config.neutral_cutoff;
        // An all-zero state is neutral even when the cutoff is zero.
        if primary_value == 0.0 || (primary_value > -cutoff && primary_value < cutoff) {
            return Description::Nothing;
        }

        if secondary_value / primary_value < self.config.blend_ratio {
            return Description::Simple {
                emotion: primary,
                intensity: primary_value,
            };
        }

        Description::Combined {
            primary,
            secondary,
            intensity: primary_value.max(secondary_value),
        }
    }

    pub fn describe(&self, state: &EmotionalState) -> String {
        self.classify(state).to_string()
    }
}
