//! Classifier configuration.
//!
//! The two decision thresholds of the classifier, with presets. The
//! intensity band edges are fixed and are not part of the configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Thresholds used by the simple-vs-combined decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Primary magnitudes strictly inside `(-neutral_cutoff, neutral_cutoff)`
    /// describe as "nothing".
    pub neutral_cutoff: f64,
    /// Minimum secondary/primary magnitude ratio for a blend [0, 1].
    /// Lower = more states described as dyads.
    pub blend_ratio: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            neutral_cutoff: 0.02,
            blend_ratio: 0.35,
        }
    }
}

impl ClassifierConfig {
    /// Reports blends more readily and notices fainter states.
    pub fn sensitive() -> Self {
        Self {
            neutral_cutoff: 0.01,
            blend_ratio: 0.25,
        }
    }

    /// Needs a clearer signal before describing anything or blending.
    pub fn reserved() -> Self {
        Self {
            neutral_cutoff: 0.05,
            blend_ratio: 0.5,
        }
    }

    /// Look up a preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default()),
            "sensitive" => Some(Self::sensitive()),
            "reserved" => Some(Self::reserved()),
            _ => None,
        }
    }

    pub const PRESETS: [&'static str; 3] = ["default", "sensitive", "reserved"];

    /// Validate the configuration, returning any issues found.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !self.neutral_cutoff.is_finite() || self.neutral_cutoff <= 0.0 {
            issues.push(format!(
                "neutral_cutoff {} must be finite and > 0",
                self.neutral_cutoff
            ));
        }

        if !self.blend_ratio.is_finite() || !(0.0..=1.0).contains(&self.blend_ratio) {
            issues.push(format!(
                "blend_ratio {} out of range [0, 1]",
                self.blend_ratio
            ));
        }

        issues
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        let issues = config.validate();
        if !issues.is_empty() {
            return Err(Error::InvalidConfig(issues));
        }
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
