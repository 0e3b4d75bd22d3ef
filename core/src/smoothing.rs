/// Rullende snitt over alle hele vinduer av lengde `window`.
///
/// Gir nøyaktig `n - window + 1` verdier når `n >= window`, ellers ingen.
/// Løpende sum (O(n)); ikke-finite samples teller som 0.0 (dropout).
pub fn rolling_means(samples: &[f64], window: usize) -> Vec<f64> {
    let n = samples.len();
    if window == 0 || n < window {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(n - window + 1);
    let mut sum = 0.0f64;

    for i in 0..n {
        sum += sample_or_zero(samples[i]);
        if i >= window {
            sum -= sample_or_zero(samples[i - window]);
        }
        if i + 1 >= window {
            out.push(sum / window as f64);
        }
    }

    out
}

/// Høyeste rullende snitt, eller `None` hvis serien er kortere enn vinduet.
pub fn max_rolling_mean(samples: &[f64], window: usize) -> Option<f64> {
    rolling_means(samples, window)
        .into_iter()
        .reduce(f64::max)
}

#[inline]
fn sample_or_zero(x: f64) -> f64 {
    if x.is_finite() { x } else { 0.0 }
}
