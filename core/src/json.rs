//! JSON in / JSON out entry points shared by every client (Python binding,
//! CLI). Input field names are accepted in snake_case or camelCase.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_path_to_error as spte;

use crate::error::{RepGraphError, Result};
use crate::format::{direction, format_diff, format_value, progress_bar_height};
use crate::history::compare_latest;
use crate::metrics::calculate_metrics;
use crate::models::{Movement, WeightUnit, WorkoutSet};
use crate::types::{Direction, MetricData};

/// `{ current, previous?, movement, weight_unit? }`
#[derive(Debug, Clone, Deserialize)]
pub struct ComparePayload {
    #[serde(alias = "currentSets")]
    pub current: Vec<WorkoutSet>,
    #[serde(default, alias = "previousSets")]
    pub previous: Option<Vec<WorkoutSet>>,
    pub movement: Movement,
    #[serde(default, alias = "weightUnit")]
    pub weight_unit: Option<WeightUnit>,
}

/// `{ history, movement, weight_unit? }`
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryPayload {
    #[serde(alias = "sets")]
    pub history: Vec<WorkoutSet>,
    pub movement: Movement,
    #[serde(default, alias = "weightUnit")]
    pub weight_unit: Option<WeightUnit>,
}

/// A metric plus everything a client needs to draw it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricView {
    #[serde(flatten)]
    pub metric: MetricData,
    pub direction: Direction,
    pub display_current: String,
    pub display_previous: String,
    pub display_diff: String,
    pub bar_height: f64,
}

impl MetricView {
    pub fn new(metric: MetricData, unit: WeightUnit) -> Self {
        Self {
            direction: direction(&metric),
            display_current: format_value(metric.current, metric.label, unit),
            display_previous: format_value(metric.previous, metric.label, unit),
            display_diff: format_diff(metric.diff, metric.label, unit),
            bar_height: progress_bar_height(&metric),
            metric,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonOutput {
    pub weight_unit: WeightUnit,
    pub metrics: Vec<MetricView>,
}

impl ComparisonOutput {
    pub fn new(metrics: Vec<MetricData>, unit: WeightUnit) -> Self {
        Self {
            weight_unit: unit,
            metrics: metrics.into_iter().map(|m| MetricView::new(m, unit)).collect(),
        }
    }
}

/// Deserialize with the JSON path of the first failure in the error.
pub fn parse_payload<T: DeserializeOwned>(json_in: &str, context: &'static str) -> Result<T> {
    let mut de = serde_json::Deserializer::from_str(json_in);
    spte::deserialize(&mut de).map_err(|e| RepGraphError::Parse {
        context,
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })
}

/// `fallback` applies when the payload does not name a unit.
pub fn compare_sessions(payload: &ComparePayload, fallback: WeightUnit) -> ComparisonOutput {
    let unit = payload.weight_unit.unwrap_or(fallback);
    let metrics = calculate_metrics(
        &payload.current,
        payload.previous.as_deref(),
        &payload.movement,
    );
    ComparisonOutput::new(metrics, unit)
}

pub fn compare_history(payload: &HistoryPayload, fallback: WeightUnit) -> ComparisonOutput {
    let unit = payload.weight_unit.unwrap_or(fallback);
    ComparisonOutput::new(compare_latest(&payload.history, &payload.movement), unit)
}

pub fn compare_sessions_json(json_in: &str) -> Result<String> {
    let payload: ComparePayload = parse_payload(json_in, "ComparePayload")?;
    let out = compare_sessions(&payload, WeightUnit::default());
    Ok(serde_json::to_string(&out)?)
}

pub fn compare_history_json(json_in: &str) -> Result<String> {
    let payload: HistoryPayload = parse_payload(json_in, "HistoryPayload")?;
    let out = compare_history(&payload, WeightUnit::default());
    Ok(serde_json::to_string(&out)?)
}
