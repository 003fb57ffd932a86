// Python bindings. Everything goes through the same JSON boundary as the
// CLI so that web/mobile backends share one implementation.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::format::{format_diff_by_name, format_value_by_name};
use crate::models::WeightUnit;

fn parse_unit(weight_unit: &str) -> PyResult<WeightUnit> {
    weight_unit.parse().map_err(PyValueError::new_err)
}

/// compare_sessions_json('{"current": [...], "previous": [...], "movement": {...}}') -> str
#[pyfunction]
fn compare_sessions_json(json_in: &str) -> PyResult<String> {
    crate::json::compare_sessions_json(json_in).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// compare_history_json('{"history": [...], "movement": {...}}') -> str
#[pyfunction]
fn compare_history_json(json_in: &str) -> PyResult<String> {
    crate::json::compare_history_json(json_in).map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pyfunction]
#[pyo3(signature = (value, label, weight_unit = "kg"))]
fn format_value(value: f64, label: &str, weight_unit: &str) -> PyResult<String> {
    Ok(format_value_by_name(value, label, parse_unit(weight_unit)?))
}

#[pyfunction]
#[pyo3(signature = (value, label, weight_unit = "kg"))]
fn format_diff(value: f64, label: &str, weight_unit: &str) -> PyResult<String> {
    Ok(format_diff_by_name(value, label, parse_unit(weight_unit)?))
}

#[pyfunction]
fn telemetry_text() -> String {
    crate::telemetry::gather_text()
}

#[pymodule]
fn repgraph_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(compare_sessions_json, m)?)?;
    m.add_function(wrap_pyfunction!(compare_history_json, m)?)?;
    m.add_function(wrap_pyfunction!(format_value, m)?)?;
    m.add_function(wrap_pyfunction!(format_diff, m)?)?;
    m.add_function(wrap_pyfunction!(telemetry_text, m)?)?;
    Ok(())
}
