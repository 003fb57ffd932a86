//! Process-wide counters for comparisons, exported in the prometheus text
//! format. Recording is a no-op if the registry could not be built.

use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::models::TrackedQuantity;

pub struct Telemetry {
    registry: Registry,
    calculations: IntCounterVec,
    short_circuits: IntCounter,
}

impl Telemetry {
    fn new() -> prometheus::Result<Self> {
        let registry = Registry::new_custom(Some("repgraph".into()), None)?;

        let calculations = IntCounterVec::new(
            Opts::new("calculations_total", "Session comparisons computed"),
            &["tracked_quantity"],
        )?;
        let short_circuits = IntCounter::new(
            "short_circuit_total",
            "Comparisons skipped because there was no previous session",
        )?;

        registry.register(Box::new(calculations.clone()))?;
        registry.register(Box::new(short_circuits.clone()))?;

        Ok(Self {
            registry,
            calculations,
            short_circuits,
        })
    }
}

static TELEMETRY: Lazy<Option<Telemetry>> = Lazy::new(|| match Telemetry::new() {
    Ok(t) => Some(t),
    Err(e) => {
        log::warn!("telemetry disabled: {e}");
        None
    }
});

pub fn record_calculation(q: &TrackedQuantity) {
    if let Some(t) = TELEMETRY.as_ref() {
        // unknown quantities share one series to keep label cardinality fixed
        let label = if q.is_known() { q.as_str() } else { "other" };
        t.calculations.with_label_values(&[label]).inc();
    }
}

pub fn record_short_circuit() {
    if let Some(t) = TELEMETRY.as_ref() {
        t.short_circuits.inc();
    }
}

pub fn calculations_total(q: &TrackedQuantity) -> u64 {
    let label = if q.is_known() { q.as_str() } else { "other" };
    TELEMETRY
        .as_ref()
        .map(|t| t.calculations.with_label_values(&[label]).get())
        .unwrap_or(0)
}

pub fn short_circuits_total() -> u64 {
    TELEMETRY.as_ref().map(|t| t.short_circuits.get()).unwrap_or(0)
}

/// Render all counters in the prometheus text exposition format.
pub fn gather_text() -> String {
    let Some(t) = TELEMETRY.as_ref() else {
        return String::new();
    };
    let mut buf = Vec::new();
    if let Err(e) = TextEncoder::new().encode(&t.registry.gather(), &mut buf) {
        log::warn!("failed to encode telemetry: {e}");
        return String::new();
    }
    String::from_utf8(buf).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_move_and_render() {
        let q = TrackedQuantity::Distance;
        let before = calculations_total(&q);
        record_calculation(&q);
        assert!(calculations_total(&q) > before);

        record_calculation(&TrackedQuantity::Other("tempo".into()));
        let text = gather_text();
        assert!(text.contains("repgraph_calculations_total"));
        assert!(text.contains("tracked_quantity=\"other\""));
        assert!(!text.contains("tempo"));
    }
}
