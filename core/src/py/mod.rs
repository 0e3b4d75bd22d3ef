use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::analyzer::analyze_power_json as analyze_json_core;
use crate::metrics::compute_power_metrics;
use crate::telemetry::METRICS;
use crate::types::PowerMetrics;

fn to_json(metrics: &PowerMetrics) -> PyResult<String> {
    serde_json::to_string(metrics)
        .map_err(|e| PyValueError::new_err(format!("failed to serialize metrics: {e}")))
}

/// Streng inn (`[...]` eller `{"power": [...]}`) → JSON-streng ut.
#[pyfunction]
fn analyze_power_json(json_in: &str) -> PyResult<String> {
    let metrics = analyze_json_core(json_in).map_err(|e| PyValueError::new_err(e.to_string()))?;
    to_json(&metrics)
}

/// Liste med watt inn → dict ut (via Python sin json.loads, unngår pyo3 serde-feature).
#[pyfunction]
fn analyze_power(py: Python<'_>, samples: Vec<f64>) -> PyResult<PyObject> {
    METRICS.power_samples_total().inc_by(samples.len() as u64);
    let out = to_json(&compute_power_metrics(&samples))?;

    let json_mod = py
        .import("json")
        .map_err(|e| PyValueError::new_err(format!("failed to import json: {e}")))?;
    let obj = json_mod
        .call_method1("loads", (out.as_str(),))
        .map_err(|e| PyValueError::new_err(format!("internal JSON parse error via json.loads: {e}")))?;
    Ok(obj.into_py(py))
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-MODUL
// ──────────────────────────────────────────────────────────────────────────────

#[pymodule]
fn metricsbike_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(analyze_power, m)?)?;
    m.add_function(wrap_pyfunction!(analyze_power_json, m)?)?;
    Ok(())
}
