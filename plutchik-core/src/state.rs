//! A single position on Plutchik's wheel, treated as a point in 4 dimensions
//! (in the spirit of the "hourglass of emotions" model).

use serde::{Deserialize, Serialize};

use crate::classifier::{Classifier, Description};
use crate::emotion::{Dimension, Emotion};
use crate::error::{Error, Result};

/// Immutable 4-axis emotional state.
///
/// Each component is a signed scalar, conventionally in `[-1, 1]`: the sign
/// picks the emotion pole and the magnitude its strength. Nothing is clamped;
/// magnitudes above 1 saturate into the strongest wording.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionalState {
    sensitivity: f64,
    attention: f64,
    pleasantness: f64,
    aptitude: f64,
}

impl EmotionalState {
    /// Build a state without validation.
    ///
    /// NaN or infinite components give unspecified (but non-panicking)
    /// descriptions; use [`EmotionalState::try_new`] to reject them.
    pub fn new(sensitivity: f64, attention: f64, pleasantness: f64, aptitude: f64) -> Self {
        Self {
            sensitivity,
            attention,
            pleasantness,
            aptitude,
        }
    }

    /// Build a state, rejecting NaN and infinite components.
    pub fn try_new(sensitivity: f64, attention: f64, pleasantness: f64, aptitude: f64) -> Result<Self> {
        let state = Self::new(sensitivity, attention, pleasantness, aptitude);
        for dimension in Dimension::ALL {
            let value = state.value(dimension);
            if !value.is_finite() {
                return Err(Error::NonFinite { dimension, value });
            }
        }
        Ok(state)
    }

    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    pub fn attention(&self) -> f64 {
        self.attention
    }

    pub fn pleasantness(&self) -> f64 {
        self.pleasantness
    }

    pub fn aptitude(&self) -> f64 {
        self.aptitude
    }

    /// Signed value along one axis.
    pub fn value(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Sensitivity => self.sensitivity,
            Dimension::Attention => self.attention,
            Dimension::Pleasantness => self.pleasantness,
            Dimension::Aptitude => self.aptitude,
        }
    }

    /// Active pole and magnitude along one axis.
    pub fn resolve(&self, dimension: Dimension) -> (Emotion, f64) {
        dimension.resolve(self.value(dimension))
    }

    /// The four active poles sorted by ascending magnitude; the last entry is
    /// the dominant emotion.
    ///
    /// Equal magnitudes keep axis order, so the later axis ranks higher. This
    /// tie order is not part of the contract.
    pub fn ranked(&self) -> [(Emotion, f64); 4] {
        let mut ranked = Dimension::ALL.map(|dimension| self.resolve(dimension));
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked
    }

    /// Structured classification with the default thresholds.
    pub fn classify(&self) -> Description {
        Classifier::default().classify(self)
    }

    /// Human-readable label, e.g. "mild anxiety" or "nothing".
    pub fn describe(&self) -> String {
        self.classify().to_string()
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.sensitivity, self.attention, self.pleasantness, self.aptitude]
    }
}

impl From<[f64; 4]> for EmotionalState {
    fn from(v: [f64; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let state = EmotionalState::new(0.1, -0.2, 0.3, -0.4);
        assert_eq!(state.sensitivity(), 0.1);
        assert_eq!(state.attention(), -0.2);
        assert_eq!(state.pleasantness(), 0.3);
        assert_eq!(state.aptitude(), -0.4);
        assert_eq!(state.value(Dimension::Aptitude), -0.4);
        assert_eq!(EmotionalState::from(state.to_array()), state);
    }

    #[test]
    fn test_resolve_poles() {
        let state = EmotionalState::new(0.9, -0.3, -0.5, 0.0);
        assert_eq!(state.resolve(Dimension::Sensitivity), (Emotion::Anger, 0.9));
        assert_eq!(state.resolve(Dimension::Attention), (Emotion::Surprise, 0.3));
        assert_eq!(state.resolve(Dimension::Pleasantness), (Emotion::Sadness, 0.5));
        assert_eq!(state.resolve(Dimension::Aptitude), (Emotion::Trust, 0.0));
    }

    #[test]
    fn test_ranked_ascending() {
        let ranked = EmotionalState::new(0.2, -0.7, 0.05, -0.4).ranked();
        let emotions: Vec<Emotion> = ranked.iter().map(|(e, _)| *e).collect();
        assert_eq!(
            emotions,
            vec![Emotion::Joy, Emotion::Anger, Emotion::Disgust, Emotion::Surprise]
        );
        assert!(ranked.windows(2).all(|w| w[0].1 <= w[1].1));
    }

    #[test]
    fn test_sign_selects_primary() {
        assert_eq!(EmotionalState::new(0.9, 0.0, 0.0, 0.0).ranked()[3].0, Emotion::Anger);
        assert_eq!(EmotionalState::new(-0.9, 0.0, 0.0, 0.0).ranked()[3].0, Emotion::Fear);
    }

    #[test]
    fn test_ties_keep_axis_order() {
        let ranked = EmotionalState::new(0.5, 0.5, 0.0, 0.0).ranked();
        assert_eq!(ranked[2].0, Emotion::Anger);
        assert_eq!(ranked[3].0, Emotion::Anticipation);
    }

    #[test]
    fn test_try_new_rejects_non_finite() {
        assert!(EmotionalState::try_new(0.1, 0.2, 0.3, 0.4).is_ok());
        match EmotionalState::try_new(0.1, f64::NAN, 0.3, 0.4) {
            Err(Error::NonFinite { dimension, .. }) => assert_eq!(dimension, Dimension::Attention),
            other => panic!("Expected NonFinite, got {:?}", other),
        }
        assert!(EmotionalState::try_new(0.0, 0.0, 0.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_non_finite_does_not_panic() {
        let _ = EmotionalState::new(f64::NAN, 0.5, 0.0, 0.0).describe();
        let _ = EmotionalState::new(f64::INFINITY, f64::NAN, 0.0, 0.0).describe();
    }

    #[test]
    fn test_state_serialization() {
        let state = EmotionalState::new(0.1, -0.2, 0.3, -0.4);
        let json = serde_json::to_value(state).unwrap();
        assert_eq!(json["pleasantness"].as_f64().unwrap(), 0.3);
        let restored: EmotionalState = serde_json::from_value(json).unwrap();
        assert_eq!(restored, state);
    }
}
