use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged set. Only the fields relevant to the movement's tracked
/// quantity are normally populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    pub id: Option<String>,
    #[serde(alias = "movementId")]
    pub movement_id: Option<String>,
    #[serde(alias = "workoutId")]
    pub workout_id: Option<String>,
    pub reps: Option<i64>,
    pub weight: Option<f64>,
    pub duration: Option<f64>, // seconds
    pub distance: Option<f64>,
    #[serde(alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

// A missing value and a logged 0 contribute the same to every aggregate,
// so the accessors below read absent fields as 0.
impl WorkoutSet {
    pub fn reps_or_zero(&self) -> f64 {
        self.reps.map(|r| r as f64).unwrap_or(0.0)
    }

    pub fn weight_or_zero(&self) -> f64 {
        self.weight.unwrap_or(0.0)
    }

    pub fn duration_or_zero(&self) -> f64 {
        self.duration.unwrap_or(0.0)
    }

    pub fn distance_or_zero(&self) -> f64 {
        self.distance.unwrap_or(0.0)
    }

    pub fn weighted(reps: i64, weight: f64) -> Self {
        Self {
            reps: Some(reps),
            weight: Some(weight),
            ..Self::default()
        }
    }

    pub fn reps_only(reps: i64) -> Self {
        Self {
            reps: Some(reps),
            ..Self::default()
        }
    }

    pub fn timed(duration_s: f64) -> Self {
        Self {
            duration: Some(duration_s),
            ..Self::default()
        }
    }

    pub fn distance(distance: f64) -> Self {
        Self {
            distance: Some(distance),
            ..Self::default()
        }
    }

    pub fn at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// What a movement measures. Selects which metrics get computed.
///
/// Values outside the known set are kept verbatim in `Other` so that a
/// newer client can send a quantity this crate does not know yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TrackedQuantity {
    Weight,
    Bodyweight,
    Reps,
    Duration,
    Distance,
    Other(String),
}

impl TrackedQuantity {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Weight => "weight",
            Self::Bodyweight => "bodyweight",
            Self::Reps => "reps",
            Self::Duration => "duration",
            Self::Distance => "distance",
            Self::Other(s) => s.as_str(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for TrackedQuantity {
    fn from(s: String) -> Self {
        match s.as_str() {
            "weight" => Self::Weight,
            "bodyweight" => Self::Bodyweight,
            "reps" => Self::Reps,
            "duration" => Self::Duration,
            "distance" => Self::Distance,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for TrackedQuantity {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<TrackedQuantity> for String {
    fn from(q: TrackedQuantity) -> Self {
        match q {
            TrackedQuantity::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TrackedQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trackable exercise definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(alias = "trackedQuantity", alias = "tracked_type")]
    pub tracked_quantity: TrackedQuantity,
}

impl Movement {
    pub fn new(tracked_quantity: impl Into<TrackedQuantity>) -> Self {
        Self {
            id: None,
            name: None,
            tracked_quantity: tracked_quantity.into(),
        }
    }

    pub fn named(name: &str, tracked_quantity: impl Into<TrackedQuantity>) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::new(tracked_quantity)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    #[serde(alias = "lb")]
    Lbs,
}

impl WeightUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Lbs => "lbs",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kg" => Ok(Self::Kg),
            "lbs" | "lb" => Ok(Self::Lbs),
            other => Err(format!("unknown weight unit: {other} (expected kg or lbs)")),
        }
    }
}

/// User-side display preferences. Stored as JSON, see `storage`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, alias = "weightUnit")]
    pub weight_unit: WeightUnit,
}
