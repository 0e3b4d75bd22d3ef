use crate::metrics::compute_power_metrics;
use crate::models::{AnalyzedWorkout, Workout};
use crate::power_source::PowerSource;
use crate::telemetry::Metrics;

/// Hvorfor en økt ble hoppet over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoFile,
    DecodeFailed,
    NoPower,
    NoPositivePower,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::NoFile => "no_file",
            SkipReason::DecodeFailed => "decode_failed",
            SkipReason::NoPower => "no_power",
            SkipReason::NoPositivePower => "no_positive_power",
        }
    }
}

/// Analyserer én økt: hent serie → beregn metrikker.
pub fn analyze_workout(
    workout: &Workout,
    source: &dyn PowerSource,
    metrics: &Metrics,
) -> Result<AnalyzedWorkout, SkipReason> {
    // 1️⃣ Må ha en aktivitetsfil
    let url = workout.file_url().ok_or(SkipReason::NoFile)?;

    // 2️⃣ Hent + dekod kraftserien (feil hopper over økten, ikke hele batchen)
    let samples = source.power_series(url).map_err(|e| {
        log::warn!("workout {:?}: power series failed: {e}", workout.id);
        SkipReason::DecodeFailed
    })?;
    if samples.is_empty() {
        return Err(SkipReason::NoPower);
    }
    metrics.power_samples_total().inc_by(samples.len() as u64);

    // 3️⃣ Kraftmotoren
    let power = compute_power_metrics(&samples);
    if power.average_power.is_none() {
        return Err(SkipReason::NoPositivePower);
    }

    log::debug!(
        "workout {:?}: {} samples, avg={:?} np={:?}",
        workout.id,
        samples.len(),
        power.average_power,
        power.normalized_power
    );

    Ok(AnalyzedWorkout {
        workout: workout.clone(),
        metrics: power,
    })
}

/// Kjører alle økter gjennom analysen i rekkefølge; øktene uten brukbar
/// kraftdata hoppes over (logget og talt per årsak).
pub fn analyze_workouts(
    workouts: &[Workout],
    source: &dyn PowerSource,
    metrics: &Metrics,
) -> Vec<AnalyzedWorkout> {
    let mut out = Vec::with_capacity(workouts.len());

    for w in workouts {
        match analyze_workout(w, source, metrics) {
            Ok(a) => {
                metrics.workouts_analyzed_total().inc();
                out.push(a);
            }
            Err(reason) => {
                log::debug!("skipping workout {:?}: {}", w.id, reason.as_str());
                metrics.workouts_skipped_total(reason.as_str()).inc();
            }
        }
    }

    log::info!(
        "analyzed {} of {} workouts with power data",
        out.len(),
        workouts.len()
    );
    out
}
