use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

/// Prosessglobal instans (CLI, Python-binding).
pub static METRICS: Lazy<Metrics> = Lazy::new(Metrics::new);

/// Tellere for analyse-pipelinen.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    workouts_analyzed: IntCounter,
    workouts_skipped: IntCounterVec,
    power_samples: IntCounter,
}

impl Metrics {
    /// Eget register per instans, så tester ikke deler tellere.
    pub fn new() -> Self {
        let registry = Registry::new();

        let workouts_analyzed = IntCounter::new(
            "metricsbike_workouts_analyzed_total",
            "Workouts with computed power metrics",
        )
        .expect("static counter opts");
        let workouts_skipped = IntCounterVec::new(
            Opts::new(
                "metricsbike_workouts_skipped_total",
                "Workouts skipped by the analysis pipeline",
            ),
            &["reason"],
        )
        .expect("static counter opts");
        let power_samples = IntCounter::new(
            "metricsbike_power_samples_total",
            "Power samples fed to the metrics engine",
        )
        .expect("static counter opts");

        for c in [
            Box::new(workouts_analyzed.clone()) as Box<dyn prometheus::core::Collector>,
            Box::new(workouts_skipped.clone()),
            Box::new(power_samples.clone()),
        ] {
            if let Err(e) = registry.register(c) {
                log::warn!("prometheus register failed: {e}");
            }
        }

        Self {
            registry,
            workouts_analyzed,
            workouts_skipped,
            power_samples,
        }
    }

    pub fn workouts_analyzed_total(&self) -> &IntCounter {
        &self.workouts_analyzed
    }

    pub fn workouts_skipped_total(&self, reason: &str) -> IntCounter {
        self.workouts_skipped.with_label_values(&[reason])
    }

    pub fn power_samples_total(&self) -> &IntCounter {
        &self.power_samples
    }

    /// Prometheus tekstformat.
    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        if let Err(e) = TextEncoder::new().encode(&self.registry.gather(), &mut buf) {
            log::warn!("prometheus encode failed: {e}");
            return String::new();
        }
        String::from_utf8(buf).unwrap_or_default()
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
