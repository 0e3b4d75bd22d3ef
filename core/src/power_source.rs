use std::collections::HashMap;

use crate::error::{DashboardError, Result};

/// Leverandør av kraftserie (watt per sekund) for en aktivitetsfil.
/// Prod: `WahooClient` (last ned + FIT-dekoding), test: `StaticPowerSource`.
pub trait PowerSource {
    fn power_series(&self, file_url: &str) -> Result<Vec<f64>>;
}

/// Statisk kilde: URL → ferdig dekodet serie.
#[derive(Debug, Default, Clone)]
pub struct StaticPowerSource {
    pub series: HashMap<String, Vec<f64>>,
}

impl StaticPowerSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, url: impl Into<String>, samples: Vec<f64>) -> Self {
        self.series.insert(url.into(), samples);
        self
    }
}

impl PowerSource for StaticPowerSource {
    fn power_series(&self, file_url: &str) -> Result<Vec<f64>> {
        self.series
            .get(file_url)
            .cloned()
            .ok_or_else(|| DashboardError::Fit(format!("no activity file at {file_url}")))
    }
}
