use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::metrics::RoundTo;

/// Fixed vocabulary of comparison metrics. The serialized names are what
/// clients display and match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricLabel {
    #[serde(rename = "sets")]
    Sets,
    #[serde(rename = "reps")]
    Reps,
    #[serde(rename = "volume")]
    Volume,
    #[serde(rename = "weight/rep")]
    WeightPerRep,
    #[serde(rename = "Total Duration")]
    TotalDuration,
    #[serde(rename = "Avg Duration/Set")]
    AvgDurationPerSet,
    #[serde(rename = "Total Distance")]
    TotalDistance,
    #[serde(rename = "Avg Dist/Set")]
    AvgDistancePerSet,
}

impl MetricLabel {
    pub const ALL: [MetricLabel; 8] = [
        Self::Sets,
        Self::Reps,
        Self::Volume,
        Self::WeightPerRep,
        Self::TotalDuration,
        Self::AvgDurationPerSet,
        Self::TotalDistance,
        Self::AvgDistancePerSet,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sets => "sets",
            Self::Reps => "reps",
            Self::Volume => "volume",
            Self::WeightPerRep => "weight/rep",
            Self::TotalDuration => "Total Duration",
            Self::AvgDurationPerSet => "Avg Duration/Set",
            Self::TotalDistance => "Total Distance",
            Self::AvgDistancePerSet => "Avg Dist/Set",
        }
    }

    /// Decimal places kept for current/previous/diff. Ratios keep one.
    pub const fn decimals(self) -> u32 {
        match self {
            Self::WeightPerRep | Self::AvgDurationPerSet | Self::AvgDistancePerSet => 1,
            _ => 0,
        }
    }

    /// Colour family per label (text class, background class).
    pub const fn palette(self) -> Palette {
        match self {
            Self::Sets => Palette::new("text-blue-600", "bg-blue-100"),
            Self::Reps => Palette::new("text-green-600", "bg-green-100"),
            Self::Volume => Palette::new("text-purple-600", "bg-purple-100"),
            Self::WeightPerRep => Palette::new("text-orange-600", "bg-orange-100"),
            Self::TotalDuration => Palette::new("text-cyan-600", "bg-cyan-100"),
            Self::AvgDurationPerSet => Palette::new("text-teal-600", "bg-teal-100"),
            Self::TotalDistance => Palette::new("text-indigo-600", "bg-indigo-100"),
            Self::AvgDistancePerSet => Palette::new("text-pink-600", "bg-pink-100"),
        }
    }
}

impl fmt::Display for MetricLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| format!("unknown metric label: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub color: &'static str,
    pub background_color: &'static str,
}

impl Palette {
    pub const fn new(color: &'static str, background_color: &'static str) -> Self {
        Self {
            color,
            background_color,
        }
    }
}

/// One comparison between the current and the previous session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricData {
    pub label: MetricLabel,
    pub current: f64,
    pub previous: f64,
    /// current - previous, rounded from the unrounded difference
    pub diff: f64,
    /// diff as % of previous; 0 when previous is 0. The guard also looks at
    /// the rounded `previous`, so a value shown as 0 never gets a percentage.
    pub percent: f64,
    pub color: &'static str,
    pub background_color: &'static str,
}

impl MetricData {
    /// Build a metric from unrounded session aggregates.
    ///
    /// `current`, `previous` and `diff` are rounded independently to the
    /// label's precision, so `diff` can differ by one unit from
    /// `current - previous` after rounding.
    pub fn compare(label: MetricLabel, current_raw: f64, previous_raw: f64) -> Self {
        let dp = label.decimals();
        let raw_diff = current_raw - previous_raw;
        let previous = previous_raw.round_to(dp);
        let percent = if previous > 0.0 && previous_raw > 0.0 {
            raw_diff / previous_raw * 100.0
        } else {
            0.0
        };
        let palette = label.palette();

        Self {
            label,
            current: current_raw.round_to(dp),
            previous,
            diff: raw_diff.round_to(dp),
            percent,
            color: palette.color,
            background_color: palette.background_color,
        }
    }
}

/// Sign of a metric's diff. Higher is treated as better for every label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Improvement,
    Decline,
    Neutral,
}

impl Direction {
    pub fn of(diff: f64) -> Self {
        if diff > 0.0 {
            Self::Improvement
        } else if diff < 0.0 {
            Self::Decline
        } else {
            Self::Neutral
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Improvement => "↑",
            Self::Decline => "↓",
            Self::Neutral => "→",
        }
    }
}
