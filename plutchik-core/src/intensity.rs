//! Intensity banding.
//!
//! Two independent schemes with their own edges and vocabulary:
//! - [`LadderBand`]: 9 equal bands over `[0, 1]`, rendered from a 3-word [`Ladder`].
//! - [`PrefixBand`]: 5 uneven bands, rendered as a prefix in front of a single word.
//!
//! Magnitudes above 1 land in the top band of either scheme.

use serde::Serialize;

/// Weak / mid / strong words for one emotion or graded dyad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Ladder {
    pub weak: &'static str,
    pub mid: &'static str,
    pub strong: &'static str,
}

impl Ladder {
    pub const fn new(weak: &'static str, mid: &'static str, strong: &'static str) -> Self {
        Self { weak, mid, strong }
    }

    /// Render the ladder at the given intensity.
    pub fn describe(&self, intensity: f64) -> String {
        LadderBand::from_intensity(intensity).render(self)
    }
}

/// One of the 9 bands of the ladder scheme, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LadderBand {
    SlightWeak,
    Weak,
    SignificantWeak,
    ModerateMid,
    Mid,
    SignificantMid,
    Strong,
    IntenseStrong,
    CompleteStrong,
}

impl LadderBand {
    pub const ALL: [LadderBand; 9] = [
        Self::SlightWeak,
        Self::Weak,
        Self::SignificantWeak,
        Self::ModerateMid,
        Self::Mid,
        Self::SignificantMid,
        Self::Strong,
        Self::IntenseStrong,
        Self::CompleteStrong,
    ];

    /// Inclusive upper edges of the first 8 bands; everything above the
    /// last edge is `CompleteStrong`.
    pub const UPPER_EDGES: [f64; 8] = [
        0.1111, 0.2222, 0.3333, 0.4444, 0.5555, 0.6666, 0.7777, 0.8888,
    ];

    pub fn from_intensity(intensity: f64) -> Self {
        Self::UPPER_EDGES
            .iter()
            .position(|&edge| intensity <= edge)
            .map(|i| Self::ALL[i])
            .unwrap_or(Self::CompleteStrong)
    }

    pub fn render(self, ladder: &Ladder) -> String {
        match self {
            Self::SlightWeak => format!("slight {}", ladder.weak),
            Self::Weak => ladder.weak.to_string(),
            Self::SignificantWeak => format!("significant {}", ladder.weak),
            Self::ModerateMid => format!("moderate {}", ladder.mid),
            Self::Mid => ladder.mid.to_string(),
            Self::SignificantMid => format!("significant {}", ladder.mid),
            Self::Strong => ladder.strong.to_string(),
            Self::IntenseStrong => format!("intense {}", ladder.strong),
            Self::CompleteStrong => format!("complete {}", ladder.strong),
        }
    }
}

/// One of the 5 bands of the prefix scheme, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefixBand {
    Slight,
    Mild,
    Plain,
    Strong,
    Intense,
}

impl PrefixBand {
    pub const ALL: [PrefixBand; 5] = [
        Self::Slight,
        Self::Mild,
        Self::Plain,
        Self::Strong,
        Self::Intense,
    ];

    /// Exclusive upper edges of the first 4 bands; everything at or above
    /// the last edge is `Intense`.
    pub const UPPER_EDGES: [f64; 4] = [0.15, 0.35, 0.70, 0.85];

    pub fn from_intensity(intensity: f64) -> Self {
        Self::UPPER_EDGES
            .iter()
            .position(|&edge| intensity < edge)
            .map(|i| Self::ALL[i])
            .unwrap_or(Self::Intense)
    }

    /// Prefix text including its trailing space (empty for `Plain`).
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Slight => "slight ",
            Self::Mild => "mild ",
            Self::Plain => "",
            Self::Strong => "strong ",
            Self::Intense => "intense ",
        }
    }
}

/// Render a 3-word ladder with the 9-band scheme.
pub fn describe_by_intensity(intensity: f64, ladder: &Ladder) -> String {
    ladder.describe(intensity)
}

/// Prefix for a single-word description under the 5-band scheme.
pub fn intensity_prefix(intensity: f64) -> &'static str {
    PrefixBand::from_intensity(intensity).prefix()
}
