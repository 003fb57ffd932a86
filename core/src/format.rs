//! Display strings and indicators for computed metrics.

use crate::models::WeightUnit;
use crate::types::{Direction, MetricData, MetricLabel};

/// Whole-number display without a "-0".
fn whole(v: f64) -> String {
    let r = v.round();
    if r == 0.0 {
        "0".to_string()
    } else {
        format!("{r}")
    }
}

/// `m:ss`. Seconds that round up to 60 roll into the next minute, so
/// 119.6 prints "2:00" where `floor(v / 60):round(v % 60)` would give "1:60".
fn minutes_seconds(total_s: f64) -> String {
    let mut minutes = (total_s / 60.0).floor() as i64;
    let mut seconds = (total_s % 60.0).round() as i64;
    if seconds == 60 {
        minutes += 1;
        seconds = 0;
    }
    format!("{minutes}:{seconds:02}")
}

fn render(value: f64, label: Option<MetricLabel>, unit: WeightUnit) -> String {
    match label {
        Some(MetricLabel::WeightPerRep) => format!("{value}{unit}"),
        Some(MetricLabel::TotalDuration) => minutes_seconds(value),
        Some(MetricLabel::AvgDurationPerSet) => format!("{value}s"),
        Some(MetricLabel::TotalDistance | MetricLabel::AvgDistancePerSet) => {
            format!("{}m", whole(value))
        }
        Some(MetricLabel::Volume) => format!("{}{unit}", whole(value)),
        Some(MetricLabel::Sets | MetricLabel::Reps) | None => whole(value),
    }
}

/// Format a metric's `current` or `previous` value for display.
pub fn format_value(value: f64, label: MetricLabel, unit: WeightUnit) -> String {
    render(value, Some(label), unit)
}

/// Format a diff. Always unsigned; direction is shown separately.
pub fn format_diff(value: f64, label: MetricLabel, unit: WeightUnit) -> String {
    render(value.abs(), Some(label), unit)
}

/// Like [`format_value`] for a label given by name. Unknown names get the
/// plain rounded form.
pub fn format_value_by_name(value: f64, label: &str, unit: WeightUnit) -> String {
    render(value, label.parse().ok(), unit)
}

pub fn format_diff_by_name(value: f64, label: &str, unit: WeightUnit) -> String {
    render(value.abs(), label.parse().ok(), unit)
}

pub fn direction(metric: &MetricData) -> Direction {
    Direction::of(metric.diff)
}

/// How much of the previous session has been matched, as a bar height in
/// percent clamped to [5, 100].
pub fn progress_bar_height(metric: &MetricData) -> f64 {
    let pct = if metric.previous > 0.0 {
        metric.current / metric.previous * 100.0
    } else {
        100.0
    };
    pct.clamp(5.0, 100.0)
}
