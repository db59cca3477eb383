//! Dyads: named blends of two primary emotions.
//!
//! The table is upper-triangular over emotion codes: every dyad is keyed by
//! its component with the lower code first. 25 of the 28 unordered pairs
//! carry a name; the remaining same-axis pairs (Joy + Sadness, Fear + Anger,
//! Surprise + Anticipation) render as [`UNKNOWN_COMBINATION`].

use serde::Serialize;

use crate::emotion::Emotion;
use crate::intensity::{intensity_prefix, Ladder};

/// Text for a pair of emotions with no named blend.
pub const UNKNOWN_COMBINATION: &str = "unknown combination";

/// How a dyad is worded at a given intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DyadStyle {
    /// 3-word ladder, 9 bands.
    Graded(Ladder),
    /// Fixed word behind a 5-band prefix.
    Prefixed(&'static str),
}

/// Named blends of two primaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dyad {
    // Graded
    Love,           // Joy + Trust
    Optimism,       // Joy + Anticipation
    Submission,     // Trust + Fear
    Awe,            // Fear + Surprise
    Disapproval,    // Surprise + Sadness
    Remorse,        // Sadness + Disgust
    Contempt,       // Disgust + Anger
    Aggressiveness, // Anger + Anticipation
    // Prefixed
    Guilt,          // Joy + Fear
    Delight,        // Joy + Surprise
    Morbidness,     // Joy + Disgust
    Pride,          // Joy + Anger
    Curiosity,      // Trust + Surprise
    Sentimentality, // Trust + Sadness
    /// Trust + Disgust, worded as "morbidness".
    Ambivalence,
    /// Trust + Anger, worded as "pride".
    Rivalry,
    Hope,           // Trust + Anticipation
    Despair,        // Fear + Sadness
    Shame,          // Fear + Disgust
    Anxiety,        // Fear + Anticipation
    Unbelief,       // Surprise + Disgust
    Outrage,        // Surprise + Anger
    Envy,           // Sadness + Anger
    Pessimism,      // Sadness + Anticipation
    Cynicism,       // Disgust + Anticipation
}

impl Dyad {
    pub const ALL: [Dyad; 25] = [
        Self::Love,
        Self::Optimism,
        Self::Submission,
        Self::Awe,
        Self::Disapproval,
        Self::Remorse,
        Self::Contempt,
        Self::Aggressiveness,
        Self::Guilt,
        Self::Delight,
        Self::Morbidness,
        Self::Pride,
        Self::Curiosity,
        Self::Sentimentality,
        Self::Ambivalence,
        Self::Rivalry,
        Self::Hope,
        Self::Despair,
        Self::Shame,
        Self::Anxiety,
        Self::Unbelief,
        Self::Outrage,
        Self::Envy,
        Self::Pessimism,
        Self::Cynicism,
    ];

    /// Look up the dyad for an unordered pair of emotions.
    pub fn from_pair(a: Emotion, b: Emotion) -> Option<Self> {
        use Emotion::*;

        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        let dyad = match (first, second) {
            (Joy, Trust) => Self::Love,
            (Joy, Fear) => Self::Guilt,
            (Joy, Surprise) => Self::Delight,
            (Joy, Disgust) => Self::Morbidness,
            (Joy, Anger) => Self::Pride,
            (Joy, Anticipation) => Self::Optimism,
            (Trust, Fear) => Self::Submission,
            (Trust, Surprise) => Self::Curiosity,
            (Trust, Sadness) => Self::Sentimentality,
            (Trust, Disgust) => Self::Ambivalence,
            (Trust, Anger) => Self::Rivalry,
            (Trust, Anticipation) => Self::Hope,
            (Fear, Surprise) => Self::Awe,
            (Fear, Sadness) => Self::Despair,
            (Fear, Disgust) => Self::Shame,
            (Fear, Anticipation) => Self::Anxiety,
            (Surprise, Sadness) => Self::Disapproval,
            (Surprise, Disgust) => Self::Unbelief,
            (Surprise, Anger) => Self::Outrage,
            (Sadness, Disgust) => Self::Remorse,
            (Sadness, Anger) => Self::Envy,
            (Sadness, Anticipation) => Self::Pessimism,
            (Disgust, Anger) => Self::Contempt,
            (Disgust, Anticipation) => Self::Cynicism,
            (Anger, Anticipation) => Self::Aggressiveness,
            _ => return None,
        };
        Some(dyad)
    }

    /// The two primaries, lower code first.
    pub fn components(self) -> (Emotion, Emotion) {
        use Emotion::*;

        match self {
            Self::Love => (Joy, Trust),
            Self::Guilt => (Joy, Fear),
            Self::Delight => (Joy, Surprise),
            Self::Morbidness => (Joy, Disgust),
            Self::Pride => (Joy, Anger),
            Self::Optimism => (Joy, Anticipation),
            Self::Submission => (Trust, Fear),
            Self::Curiosity => (Trust, Surprise),
            Self::Sentimentality => (Trust, Sadness),
            Self::Ambivalence => (Trust, Disgust),
            Self::Rivalry => (Trust, Anger),
            Self::Hope => (Trust, Anticipation),
            Self::Awe => (Fear, Surprise),
            Self::Despair => (Fear, Sadness),
            Self::Shame => (Fear, Disgust),
            Self::Anxiety => (Fear, Anticipation),
            Self::Disapproval => (Surprise, Sadness),
            Self::Unbelief => (Surprise, Disgust),
            Self::Outrage => (Surprise, Anger),
            Self::Remorse => (Sadness, Disgust),
            Self::Envy => (Sadness, Anger),
            Self::Pessimism => (Sadness, Anticipation),
            Self::Contempt => (Disgust, Anger),
            Self::Cynicism => (Disgust, Anticipation),
            Self::Aggressiveness => (Anger, Anticipation),
        }
    }

    pub fn style(self) -> DyadStyle {
        match self {
            Self::Love => DyadStyle::Graded(Ladder::new("acknowledgement", "love", "devotion")),
            Self::Optimism => DyadStyle::Graded(Ladder::new("bemusement", "optimism", "zeal")),
            Self::Submission => {
                DyadStyle::Graded(Ladder::new("acquiescence", "submission", "subservience"))
            }
            Self::Awe => DyadStyle::Graded(Ladder::new("wariness", "awe", "petrification")),
            Self::Disapproval => DyadStyle::Graded(Ladder::new("dismay", "disapproval", "horror")),
            Self::Remorse => DyadStyle::Graded(Ladder::new("listlessness", "remorse", "shame")),
            Self::Contempt => DyadStyle::Graded(Ladder::new("impatience", "contempt", "hatred")),
            Self::Aggressiveness => {
                DyadStyle::Graded(Ladder::new("disfavor", "aggressiveness", "domination"))
            }
            Self::Guilt => DyadStyle::Prefixed("guilt"),
            Self::Delight => DyadStyle::Prefixed("delight"),
            Self::Morbidness | Self::Ambivalence => DyadStyle::Prefixed("morbidness"),
            Self::Pride | Self::Rivalry => DyadStyle::Prefixed("pride"),
            Self::Curiosity => DyadStyle::Prefixed("curiosity"),
            Self::Sentimentality => DyadStyle::Prefixed("sentimentality"),
            Self::Hope => DyadStyle::Prefixed("hope"),
            Self::Despair => DyadStyle::Prefixed("despair"),
            Self::Shame => DyadStyle::Prefixed("shame"),
            Self::Anxiety => DyadStyle::Prefixed("anxiety"),
            Self::Unbelief => DyadStyle::Prefixed("unbelief"),
            Self::Outrage => DyadStyle::Prefixed("outrage"),
            Self::Envy => DyadStyle::Prefixed("envy"),
            Self::Pessimism => DyadStyle::Prefixed("pessimism"),
            Self::Cynicism => DyadStyle::Prefixed("cynisism"),
        }
    }

    pub fn describe(self, intensity: f64) -> String {
        match self.style() {
            DyadStyle::Graded(ladder) => ladder.describe(intensity),
            DyadStyle::Prefixed(word) => format!("{}{}", intensity_prefix(intensity), word),
        }
    }
}

/// Describe a blend of two emotions; argument order does not matter.
pub fn describe_combined_state(a: Emotion, b: Emotion, intensity: f64) -> String {
    match Dyad::from_pair(a, b) {
        Some(dyad) => dyad.describe(intensity),
        None => UNKNOWN_COMBINATION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_round_trip_through_lookup() {
        for dyad in Dyad::ALL {
            let (a, b) = dyad.components();
            assert!(a.code() < b.code(), "{:?} components out of order", dyad);
            assert_eq!(Dyad::from_pair(a, b), Some(dyad));
            assert_eq!(Dyad::from_pair(b, a), Some(dyad));
        }
    }

    #[test]
    fn test_unnamed_pairs() {
        let mut unnamed = Vec::new();
        for (i, &a) in Emotion::ALL.iter().enumerate() {
            for &b in &Emotion::ALL[i + 1..] {
                if Dyad::from_pair(a, b).is_none() {
                    unnamed.push((a, b));
                }
            }
        }
        assert_eq!(
            unnamed,
            vec![
                (Emotion::Joy, Emotion::Sadness),
                (Emotion::Fear, Emotion::Anger),
                (Emotion::Surprise, Emotion::Anticipation),
            ]
        );
        for e in Emotion::ALL {
            assert_eq!(Dyad::from_pair(e, e), None);
        }
    }

    #[test]
    fn test_graded_dyads() {
        assert_eq!(
            describe_combined_state(Emotion::Joy, Emotion::Trust, 0.05),
            "slight acknowledgement"
        );
        assert_eq!(describe_combined_state(Emotion::Trust, Emotion::Joy, 0.5), "love");
        assert_eq!(
            describe_combined_state(Emotion::Anger, Emotion::Disgust, 0.95),
            "complete hatred"
        );
        assert_eq!(
            describe_combined_state(Emotion::Sadness, Emotion::Disgust, 0.75),
            "shame"
        );
    }

    #[test]
    fn test_prefixed_dyads() {
        assert_eq!(describe_combined_state(Emotion::Joy, Emotion::Fear, 0.5), "guilt");
        assert_eq!(
            describe_combined_state(Emotion::Anticipation, Emotion::Fear, 0.2),
            "mild anxiety"
        );
        assert_eq!(
            describe_combined_state(Emotion::Trust, Emotion::Anger, 0.9),
            "intense pride"
        );
        assert_eq!(
            describe_combined_state(Emotion::Disgust, Emotion::Trust, 0.1),
            "slight morbidness"
        );
        assert_eq!(
            describe_combined_state(Emotion::Anticipation, Emotion::Disgust, 0.8),
            "strong cynisism"
        );
    }

    #[test]
    fn test_cynicism_keeps_legacy_word() {
        assert_eq!(Dyad::Cynicism.style(), DyadStyle::Prefixed("cynisism"));
        assert_eq!(Dyad::Cynicism.describe(0.5), "cynisism");
    }

    #[test]
    fn test_lookup_is_symmetric() {
        for a in Emotion::ALL {
            for b in Emotion::ALL {
                for x in [0.1, 0.3, 0.5, 0.75, 0.95] {
                    assert_eq!(
                        describe_combined_state(a, b, x),
                        describe_combined_state(b, a, x)
                    );
                }
            }
        }
    }

    #[test]
    fn test_unknown_combination() {
        assert_eq!(
            describe_combined_state(Emotion::Fear, Emotion::Anger, 0.5),
            UNKNOWN_COMBINATION
        );
        assert_eq!(
            describe_combined_state(Emotion::Joy, Emotion::Joy, 0.5),
            UNKNOWN_COMBINATION
        );
    }
}
