use fitparser::profile::MesgNum;
use fitparser::Value;

use crate::error::{DashboardError, Result};

/// Dekoder FIT-bytes til kraftserie: én sample per `record`-melding, i filrekkefølge.
///
/// Records uten `power` blir 0.0 (hull i strømmen). Har ingen record
/// kraftfelt i det hele tatt, returneres en tom serie.
pub fn decode_power(bytes: &[u8]) -> Result<Vec<f64>> {
    let fit_data =
        fitparser::from_bytes(bytes).map_err(|e| DashboardError::Fit(e.to_string()))?;

    let mut raw: Vec<Option<f64>> = Vec::new();
    for record in fit_data {
        if record.kind() != MesgNum::Record {
            continue;
        }
        let power = record
            .fields()
            .iter()
            .find(|f| f.name() == "power")
            .and_then(|f| numeric(f.value()));
        raw.push(power);
    }

    if raw.iter().all(Option::is_none) {
        log::debug!("FIT: {} records, none with power", raw.len());
        return Ok(Vec::new());
    }

    Ok(raw.into_iter().map(|p| p.unwrap_or(0.0)).collect())
}

fn numeric(v: &Value) -> Option<f64> {
    match v {
        Value::UInt8(x) => Some(f64::from(*x)),
        Value::UInt16(x) => Some(f64::from(*x)),
        Value::UInt32(x) => Some(f64::from(*x)),
        Value::SInt8(x) => Some(f64::from(*x)),
        Value::SInt16(x) => Some(f64::from(*x)),
        Value::SInt32(x) => Some(f64::from(*x)),
        Value::Float32(x) => Some(f64::from(*x)),
        Value::Float64(x) => Some(*x),
        _ => None,
    }
}
