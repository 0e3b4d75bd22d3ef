use crate::smoothing::{max_rolling_mean, rolling_means};
use crate::types::{BestEfforts, EffortDuration, PowerMetrics};

/// Vindu (sek) for rullende snitt i Normalized Power.
pub const NP_WINDOW_SECS: usize = 30;

/// Snitteffekt over samples > 0. Nuller/negative (pauser, dropout) hoppes over.
pub fn avg_power(samples: &[f64]) -> Option<u32> {
    let mut sum = 0.0f64;
    let mut cnt = 0usize;
    for &w in samples {
        // NaN > 0.0 er false, så ikke-finite faller også ut her
        if w > 0.0 && w.is_finite() {
            sum += w;
            cnt += 1;
        }
    }
    if cnt == 0 { None } else { Some(round_watts(sum / cnt as f64)) }
}

/// Normalized Power:
/// 1) 30s rullende snitt av kraft (nuller telles med)
/// 2) ^4-middel
/// 3) fjerderot
///
/// Serier kortere enn 30 s gir `None` (ikke NaN).
pub fn normalized_power(samples: &[f64]) -> Option<u32> {
    let smooth = rolling_means(samples, NP_WINDOW_SECS);
    if smooth.is_empty() {
        return None;
    }

    let fourth_power_avg =
        smooth.iter().map(|v| v.powi(4)).sum::<f64>() / smooth.len() as f64;

    Some(round_watts(fourth_power_avg.powf(0.25)))
}

/// Beste snitteffekt for én varighet. Løpende maks starter på 0,
/// så en serie med bare nuller gir `Some(0)`.
pub fn best_effort(samples: &[f64], duration: EffortDuration) -> Option<u32> {
    let best = max_rolling_mean(samples, duration.seconds())?;
    Some(round_watts(best.max(0.0)))
}

/// Best efforts for alle varighetene (5s, 1m, 5m, 20m).
pub fn best_efforts(samples: &[f64]) -> BestEfforts {
    let mut out = BestEfforts::absent();
    for d in EffortDuration::ALL {
        out.set(d, best_effort(samples, d));
    }
    out
}

/// Samlet inngang: avg, NP og best efforts for én serie.
/// Tom serie gir alle felt `None`.
pub fn compute_power_metrics(samples: &[f64]) -> PowerMetrics {
    PowerMetrics {
        average_power: avg_power(samples),
        normalized_power: normalized_power(samples),
        best_efforts: best_efforts(samples),
    }
}

#[inline]
fn round_watts(x: f64) -> u32 {
    // alle verdier her er >= 0; `as` metter ved u32::MAX
    x.round() as u32
}
