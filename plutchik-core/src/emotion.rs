//! Plutchik's Wheel of Emotions: 8 primary emotions as the poles of 4
//! bipolar axes, each with a 3-word intensity ladder.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::intensity::Ladder;

/// The four bipolar axes of the emotional space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Anger is positive, Fear is negative.
    Sensitivity,
    /// Anticipation is positive, Surprise is negative.
    Attention,
    /// Joy is positive, Sadness is negative.
    Pleasantness,
    /// Trust is positive, Disgust is negative.
    Aptitude,
}

impl Dimension {
    /// Axis order used when resolving and ranking a state.
    pub const ALL: [Dimension; 4] = [
        Self::Sensitivity,
        Self::Attention,
        Self::Pleasantness,
        Self::Aptitude,
    ];

    /// Emotion at the positive end of the axis.
    pub fn positive_pole(self) -> Emotion {
        match self {
            Self::Sensitivity => Emotion::Anger,
            Self::Attention => Emotion::Anticipation,
            Self::Pleasantness => Emotion::Joy,
            Self::Aptitude => Emotion::Trust,
        }
    }

    /// Emotion at the negative end of the axis.
    pub fn negative_pole(self) -> Emotion {
        match self {
            Self::Sensitivity => Emotion::Fear,
            Self::Attention => Emotion::Surprise,
            Self::Pleasantness => Emotion::Sadness,
            Self::Aptitude => Emotion::Disgust,
        }
    }

    /// Resolve a signed axis value to its active pole and magnitude.
    ///
    /// Zero (including negative zero) resolves to the positive pole.
    pub fn resolve(self, value: f64) -> (Emotion, f64) {
        let emotion = if value >= 0.0 {
            self.positive_pole()
        } else {
            self.negative_pole()
        };
        (emotion, value.abs())
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sensitivity => "sensitivity",
            Self::Attention => "attention",
            Self::Pleasantness => "pleasantness",
            Self::Aptitude => "aptitude",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The 8 primary emotions.
///
/// Variant order follows the ordinal codes (Joy = 1 ... Anticipation = 8),
/// which decide which member of a pair comes first in the dyad table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Joy,
    Trust,
    Fear,
    Surprise,
    Sadness,
    Disgust,
    Anger,
    Anticipation,
}

impl Emotion {
    pub const ALL: [Emotion; 8] = [
        Self::Joy,
        Self::Trust,
        Self::Fear,
        Self::Surprise,
        Self::Sadness,
        Self::Disgust,
        Self::Anger,
        Self::Anticipation,
    ];

    /// Ordinal code in `1..=8`.
    pub fn code(self) -> u8 {
        match self {
            Self::Joy => 1,
            Self::Trust => 2,
            Self::Fear => 3,
            Self::Surprise => 4,
            Self::Sadness => 5,
            Self::Disgust => 6,
            Self::Anger => 7,
            Self::Anticipation => 8,
        }
    }

    /// The axis this emotion is a pole of.
    pub fn dimension(self) -> Dimension {
        match self {
            Self::Anger | Self::Fear => Dimension::Sensitivity,
            Self::Anticipation | Self::Surprise => Dimension::Attention,
            Self::Joy | Self::Sadness => Dimension::Pleasantness,
            Self::Trust | Self::Disgust => Dimension::Aptitude,
        }
    }

    pub fn is_positive_pole(self) -> bool {
        matches!(
            self,
            Self::Anger | Self::Anticipation | Self::Joy | Self::Trust
        )
    }

    /// Return the bipolar opposite.
    pub fn opposite(self) -> Self {
        match self {
            Self::Joy => Self::Sadness,
            Self::Sadness => Self::Joy,
            Self::Trust => Self::Disgust,
            Self::Disgust => Self::Trust,
            Self::Fear => Self::Anger,
            Self::Anger => Self::Fear,
            Self::Surprise => Self::Anticipation,
            Self::Anticipation => Self::Surprise,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Joy => "joy",
            Self::Trust => "trust",
            Self::Fear => "fear",
            Self::Surprise => "surprise",
            Self::Sadness => "sadness",
            Self::Disgust => "disgust",
            Self::Anger => "anger",
            Self::Anticipation => "anticipation",
        }
    }

    /// Weak / mid / strong words (Plutchik's 3 concentric rings).
    pub fn ladder(self) -> Ladder {
        match self {
            Self::Joy => Ladder::new("serenity", "joy", "ecstasy"),
            Self::Trust => Ladder::new("acceptance", "trust", "admiration"),
            Self::Fear => Ladder::new("apprehension", "fear", "terror"),
            Self::Surprise => Ladder::new("distraction", "surprise", "amazement"),
            Self::Sadness => Ladder::new("pensiveness", "sadness", "grief"),
            Self::Disgust => Ladder::new("boredom", "disgust", "loathing"),
            Self::Anger => Ladder::new("annoyance", "anger", "rage"),
            Self::Anticipation => Ladder::new("interest", "anticipation", "vigilance"),
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Emotion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownEmotion(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_variant_order() {
        for (i, e) in Emotion::ALL.iter().enumerate() {
            assert_eq!(e.code() as usize, i + 1);
        }
        assert!(Emotion::Joy < Emotion::Anticipation);
    }

    #[test]
    fn test_bipolar_opposites() {
        assert_eq!(Emotion::Joy.opposite(), Emotion::Sadness);
        assert_eq!(Emotion::Trust.opposite(), Emotion::Disgust);
        assert_eq!(Emotion::Fear.opposite(), Emotion::Anger);
        assert_eq!(Emotion::Surprise.opposite(), Emotion::Anticipation);
        for e in Emotion::ALL {
            assert_eq!(e.opposite().opposite(), e);
            assert_eq!(e.opposite().dimension(), e.dimension());
            assert_ne!(e.opposite().is_positive_pole(), e.is_positive_pole());
        }
    }

    #[test]
    fn test_poles_match_dimension() {
        for dim in Dimension::ALL {
            assert_eq!(dim.positive_pole().dimension(), dim);
            assert_eq!(dim.negative_pole().dimension(), dim);
            assert!(dim.positive_pole().is_positive_pole());
            assert!(!dim.negative_pole().is_positive_pole());
        }
    }

    #[test]
    fn test_resolve_sign() {
        assert_eq!(Dimension::Sensitivity.resolve(0.9), (Emotion::Anger, 0.9));
        assert_eq!(Dimension::Sensitivity.resolve(-0.9), (Emotion::Fear, 0.9));
        assert_eq!(Dimension::Attention.resolve(-0.4), (Emotion::Surprise, 0.4));
        assert_eq!(Dimension::Aptitude.resolve(0.0), (Emotion::Trust, 0.0));
        assert_eq!(Dimension::Pleasantness.resolve(-0.0).0, Emotion::Joy);
    }

    #[test]
    fn test_ladders() {
        assert_eq!(Emotion::Joy.ladder(), Ladder::new("serenity", "joy", "ecstasy"));
        assert_eq!(Emotion::Fear.ladder().strong, "terror");
        assert_eq!(Emotion::Anger.ladder().weak, "annoyance");
        assert_eq!(Emotion::Anticipation.ladder().mid, "anticipation");
    }

    #[test]
    fn test_parse_emotion() {
        assert_eq!("Joy".parse::<Emotion>().unwrap(), Emotion::Joy);
        assert_eq!(" ANTICIPATION ".parse::<Emotion>().unwrap(), Emotion::Anticipation);
        assert!("love".parse::<Emotion>().is_err());
    }
}
