use serde::Deserialize;

use crate::error::{from_json_str, Result};
use crate::metrics::compute_power_metrics;
use crate::types::PowerMetrics;

// Serie som bar liste eller som objekt; null = hull i strømmen
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PowerInput {
    Bare(Vec<Option<f64>>),
    Object {
        #[serde(alias = "watts", alias = "samples")]
        power: Vec<Option<f64>>,
    },
}

/// Parser en kraftserie fra JSON: `[200, 210, null, ...]` eller `{"power": [...]}`.
pub fn parse_power_json(json: &str) -> Result<Vec<f64>> {
    let input: PowerInput = from_json_str(json)?;
    let raw = match input {
        PowerInput::Bare(v) => v,
        PowerInput::Object { power } => power,
    };
    Ok(raw.into_iter().map(|w| w.unwrap_or(0.0)).collect())
}

/// JSON inn → `PowerMetrics` ut.
pub fn analyze_power_json(json: &str) -> Result<PowerMetrics> {
    let samples = parse_power_json(json)?;
    log::debug!("analyze_power_json: {} samples", samples.len());
    Ok(compute_power_metrics(&samples))
}
