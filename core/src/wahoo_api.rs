// core/src/wahoo_api.rs
use std::io::Read;
use std::time::Duration;

use ureq::Agent;

use crate::config::DashboardConfig;
use crate::error::Result;
use crate::fit::decode_power;
use crate::models::{parse_workout_listing, Workout};
use crate::power_source::PowerSource;

/// Øvre grense for nedlastede FIT-filer (64 MiB)
const MAX_FILE_BYTES: u64 = 64 * 1024 * 1024;

/// Wahoo-klient – enkel blocking-versjon (ureq)
pub struct WahooClient {
    agent: Agent,
    endpoint: String,
    per_page: u32,
}

impl WahooClient {
    pub fn new(cfg: &DashboardConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build();
        Self {
            agent,
            endpoint: cfg.api_endpoint.clone(),
            per_page: cfg.per_page,
        }
    }

    /// Siste økter for brukeren bak `token`.
    pub fn list_workouts(&self, token: &str) -> Result<Vec<Workout>> {
        let resp = self
            .agent
            .get(&self.endpoint)
            .query("per_page", &self.per_page.to_string())
            .set("Authorization", &format!("Bearer {token}"))
            .call()?;

        let body = resp.into_string()?;
        let workouts = parse_workout_listing(&body)?;
        log::info!("[Wahoo] fetched {} workouts", workouts.len());
        Ok(workouts)
    }

    /// Laster ned en aktivitetsfil.
    pub fn download(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self.agent.get(url).call()?;
        let mut buf = Vec::new();
        resp.into_reader()
            .take(MAX_FILE_BYTES)
            .read_to_end(&mut buf)?;
        log::debug!("[Wahoo] downloaded {} bytes from {url}", buf.len());
        Ok(buf)
    }
}

impl Default for WahooClient {
    fn default() -> Self {
        Self::new(&DashboardConfig::default())
    }
}

impl PowerSource for WahooClient {
    fn power_series(&self, file_url: &str) -> Result<Vec<f64>> {
        let bytes = self.download(file_url)?;
        decode_power(&bytes)
    }
}
