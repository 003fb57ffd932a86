use std::fmt::Write as _;

use crate::format::{direction, format_diff, format_value};
use crate::models::WeightUnit;
use crate::types::MetricData;

/// Plain-text comparison table, one line per metric:
/// label, previous, current, arrow + diff, signed percent.
pub fn render_report(metrics: &[MetricData], unit: WeightUnit) -> String {
    if metrics.is_empty() {
        return "No previous session to compare against.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<18} {:>10} {:>10} {:>12} {:>9}",
        "metric", "previous", "current", "change", "%"
    );
    for m in metrics {
        let diff = format_diff(m.diff, m.label, unit);
        let change = format!("{} {diff}", direction(m).arrow());
        let _ = writeln!(
            out,
            "{:<18} {:>10} {:>10} {:>12} {:>+8.1}%",
            m.label.as_str(),
            format_value(m.previous, m.label, unit),
            format_value(m.current, m.label, unit),
            change,
            m.percent
        );
    }
    out
}

pub fn print_comparison_report(metrics: &[MetricData], unit: WeightUnit) {
    print!("{}", render_report(metrics, unit));
}
