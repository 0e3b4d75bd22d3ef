pub mod analyze_workouts;
pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod fit;
pub mod metrics;
pub mod models;
pub mod power_source;
pub mod report;
pub mod smoothing;
pub mod telemetry;
pub mod types;
pub mod wahoo_api;

#[cfg(feature = "python")]
mod py;

pub use analyze_workouts::{analyze_workout, analyze_workouts, SkipReason};
pub use analyzer::{analyze_power_json, parse_power_json};
pub use config::{load_config, save_config, DashboardConfig};
pub use error::{DashboardError, Result};
pub use metrics::{avg_power, best_effort, best_efforts, compute_power_metrics, normalized_power};
pub use models::{parse_workout_listing, AnalyzedWorkout, Workout, WorkoutFile, WorkoutId, WorkoutSummary};
pub use power_source::{PowerSource, StaticPowerSource};
pub use types::{BestEfforts, EffortDuration, PowerMetrics};
