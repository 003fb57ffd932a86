use log::debug;

use crate::models::{Movement, TrackedQuantity, WorkoutSet};
use crate::telemetry;
use crate::types::{MetricData, MetricLabel};

pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    /// Half away from zero: 11.25 -> 11.3, -1.25 -> -1.3.
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 {
            return self.round();
        }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// num / den, or 0 when den is 0.
#[inline]
fn ratio(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}

/// Aggregates for one session (one day group of sets).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionTotals {
    pub sets: f64,
    pub reps: f64,
    pub weight: f64,
    /// sum of reps * weight per set
    pub volume: f64,
    pub duration: f64,
    pub distance: f64,
}

impl SessionTotals {
    pub fn of(sets: &[WorkoutSet]) -> Self {
        sets.iter().fold(
            Self {
                sets: sets.len() as f64,
                ..Self::default()
            },
            |mut acc, s| {
                let reps = s.reps_or_zero();
                let weight = s.weight_or_zero();
                acc.reps += reps;
                acc.weight += weight;
                acc.volume += reps * weight;
                acc.duration += s.duration_or_zero();
                acc.distance += s.distance_or_zero();
                acc
            },
        )
    }

    /// Average load per repetition over the whole session.
    pub fn weight_per_rep(&self) -> f64 {
        ratio(self.weight, self.reps)
    }

    pub fn avg_duration_per_set(&self) -> f64 {
        ratio(self.duration, self.sets)
    }

    pub fn avg_distance_per_set(&self) -> f64 {
        ratio(self.distance, self.sets)
    }
}

/// Compare the current session against the previous one for `movement`.
///
/// Returns an empty list when there is no previous session. Otherwise the
/// first entry is always `sets`, followed by the group selected by the
/// movement's tracked quantity (none for an unknown quantity).
pub fn calculate_metrics(
    current: &[WorkoutSet],
    previous: Option<&[WorkoutSet]>,
    movement: &Movement,
) -> Vec<MetricData> {
    let previous = match previous {
        Some(p) if !p.is_empty() => p,
        _ => {
            telemetry::record_short_circuit();
            return Vec::new();
        }
    };

    let cur = SessionTotals::of(current);
    let prev = SessionTotals::of(previous);

    let mut out = Vec::with_capacity(4);
    out.push(MetricData::compare(MetricLabel::Sets, cur.sets, prev.sets));

    match &movement.tracked_quantity {
        TrackedQuantity::Weight => {
            out.push(MetricData::compare(MetricLabel::Reps, cur.reps, prev.reps));
            out.push(MetricData::compare(MetricLabel::Volume, cur.volume, prev.volume));
            out.push(MetricData::compare(
                MetricLabel::WeightPerRep,
                cur.weight_per_rep(),
                prev.weight_per_rep(),
            ));
        }
        TrackedQuantity::Bodyweight | TrackedQuantity::Reps => {
            out.push(MetricData::compare(MetricLabel::Reps, cur.reps, prev.reps));
        }
        TrackedQuantity::Duration => {
            out.push(MetricData::compare(MetricLabel::TotalDuration, cur.duration, prev.duration));
            out.push(MetricData::compare(
                MetricLabel::AvgDurationPerSet,
                cur.avg_duration_per_set(),
                prev.avg_duration_per_set(),
            ));
        }
        TrackedQuantity::Distance => {
            out.push(MetricData::compare(MetricLabel::TotalDistance, cur.distance, prev.distance));
            out.push(MetricData::compare(
                MetricLabel::AvgDistancePerSet,
                cur.avg_distance_per_set(),
                prev.avg_distance_per_set(),
            ));
        }
        TrackedQuantity::Other(q) => {
            debug!("unrecognised tracked quantity {q:?}, comparing set counts only");
        }
    }

    telemetry::record_calculation(&movement.tracked_quantity);
    debug!(
        "compared {} vs {} sets ({}) -> {} metrics",
        current.len(),
        previous.len(),
        movement.tracked_quantity,
        out.len()
    );
    out
}
