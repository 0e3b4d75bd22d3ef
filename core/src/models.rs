use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{from_json_str, DashboardError, Result};
use crate::types::PowerMetrics;

/// Økt-id: tall i dagens API, men strenger forekommer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorkoutId {
    Num(u64),
    Text(String),
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkoutId::Num(n) => write!(f, "{n}"),
            WorkoutId::Text(s) => f.write_str(s),
        }
    }
}

/// Én økt fra workout-listen (kun feltene dashbordet bruker).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workout {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<WorkoutId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub starts: Option<DateTime<Utc>>,
    /// Varighet i minutter
    #[serde(default, deserialize_with = "lenient_f64")]
    pub minutes: Option<f64>,
    #[serde(default)]
    pub workout_summary: Option<WorkoutSummary>,
}

impl Workout {
    pub fn file_url(&self) -> Option<&str> {
        self.workout_summary
            .as_ref()
            .and_then(|s| s.file.as_ref())
            .and_then(|f| f.url.as_deref())
            .filter(|u| !u.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutSummary {
    #[serde(default)]
    pub file: Option<WorkoutFile>,
    /// meter
    #[serde(default, deserialize_with = "lenient_f64")]
    pub distance_accum: Option<f64>,
    /// kcal
    #[serde(default, deserialize_with = "lenient_f64")]
    pub calories_accum: Option<f64>,
    /// bpm
    #[serde(default, deserialize_with = "lenient_f64")]
    pub heart_rate_avg: Option<f64>,
    /// m/s
    #[serde(default, deserialize_with = "lenient_f64")]
    pub speed_avg: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutFile {
    #[serde(default)]
    pub url: Option<String>,
}

/// Økt med ferdig beregnede kraftmetrikker, klar for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzedWorkout {
    #[serde(flatten)]
    pub workout: Workout,
    pub metrics: PowerMetrics,
}

/// Parser workout-listen fra API-et.
///
/// Formen ({items: [...]}, {workouts: [...]} eller bar liste) velges først;
/// deretter parses hver økt for seg, så én rar record ikke skjuler resten.
pub fn parse_workout_listing(json: &str) -> Result<Vec<Workout>> {
    let value: Value = from_json_str(json)?;
    let records = match value {
        Value::Array(list) => list,
        Value::Object(mut obj) => match (obj.remove("items"), obj.remove("workouts")) {
            (Some(Value::Array(list)), _) | (None, Some(Value::Array(list))) => list,
            _ => return Err(DashboardError::UnexpectedResponse),
        },
        _ => return Err(DashboardError::UnexpectedResponse),
    };

    let total = records.len();
    let mut out = Vec::with_capacity(total);
    for (i, rec) in records.into_iter().enumerate() {
        match serde_json::from_value::<Workout>(rec) {
            Ok(w) => out.push(w),
            Err(e) => log::warn!("workout listing: dropping record #{i}: {e}"),
        }
    }
    if out.len() < total {
        log::info!("workout listing: kept {} of {} records", out.len(), total);
    }
    Ok(out)
}

// Tall kommer både som JSON-tall og som strenger ("12345.6"); alt annet blir None
fn lenient_f64<'de, D>(de: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(de)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

fn lenient_id<'de, D>(de: D) -> std::result::Result<Option<WorkoutId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(de)? {
        Some(Value::Number(n)) => n.as_u64().map(WorkoutId::Num),
        Some(Value::String(s)) if !s.trim().is_empty() => Some(WorkoutId::Text(s)),
        _ => None,
    })
}

// RFC 3339, ellers "YYYY-MM-DD HH:MM:SS" (tolkes som UTC); ugyldig blir None
fn lenient_datetime<'de, D>(de: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(Value::String(s)) = Option::<Value>::deserialize(de)? else {
        return Ok(None);
    };
    Ok(parse_timestamp(s.trim()))
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}
