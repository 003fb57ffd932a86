//! RepGraph core: compares a movement's latest session with the one before
//! it and turns the result into display-ready metrics.

pub mod cli;
pub mod error;
pub mod format;
pub mod history;
pub mod json;
pub mod metrics;
pub mod models;
pub mod storage;
pub mod telemetry;
pub mod types;

#[cfg(feature = "python")]
mod py;

pub use cli::{print_comparison_report, render_report};
pub use error::{RepGraphError, Result};
pub use format::{direction, format_diff, format_value, progress_bar_height};
pub use history::{compare_latest, group_by_day, latest_two, DayGroup};
pub use json::{compare_history_json, compare_sessions_json, ComparisonOutput, MetricView};
pub use metrics::{calculate_metrics, RoundTo, SessionTotals};
pub use models::{Movement, Preferences, TrackedQuantity, WeightUnit, WorkoutSet};
pub use storage::{load_preferences, save_preferences};
pub use types::{Direction, MetricData, MetricLabel, Palette};
