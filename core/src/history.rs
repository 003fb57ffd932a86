use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::{debug, warn};

use crate::metrics::calculate_metrics;
use crate::models::{Movement, WorkoutSet};
use crate::types::MetricData;

/// All sets of one movement logged on one calendar day (UTC).
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub day: NaiveDate,
    pub sets: Vec<WorkoutSet>,
}

/// Group a set history by UTC calendar day, newest day first.
///
/// Sets keep their input order inside a day. Sets without `created_at`
/// cannot be placed on a day and are skipped.
pub fn group_by_day(history: &[WorkoutSet]) -> Vec<DayGroup> {
    let mut by_day: BTreeMap<NaiveDate, Vec<WorkoutSet>> = BTreeMap::new();
    let mut undated = 0usize;

    for s in history {
        match s.created_at {
            Some(ts) => by_day.entry(ts.date_naive()).or_default().push(s.clone()),
            None => undated += 1,
        }
    }
    if undated > 0 {
        warn!("skipped {undated} set(s) without created_at while grouping history");
    }

    by_day
        .into_iter()
        .rev()
        .map(|(day, sets)| DayGroup { day, sets })
        .collect()
}

/// Newest day and the day before it, if any.
pub fn latest_two(groups: &[DayGroup]) -> Option<(&DayGroup, Option<&DayGroup>)> {
    let (current, rest) = groups.split_first()?;
    Some((current, rest.first()))
}

/// Compare the most recent day of `history` with the day before it.
/// Empty when the history covers fewer than two days.
pub fn compare_latest(history: &[WorkoutSet], movement: &Movement) -> Vec<MetricData> {
    let groups = group_by_day(history);
    match latest_two(&groups) {
        Some((current, previous)) => {
            debug!(
                "comparing {} against {:?}",
                current.day,
                previous.map(|p| p.day)
            );
            calculate_metrics(&current.sets, previous.map(|p| p.sets.as_slice()), movement)
        }
        None => Vec::new(),
    }
}
