use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Fast sett med varigheter for best efforts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EffortDuration {
    #[serde(rename = "5s")]
    FiveSeconds,
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "20m")]
    TwentyMinutes,
}

impl EffortDuration {
    /// Alle varigheter, kortest først.
    pub const ALL: [EffortDuration; 4] = [
        EffortDuration::FiveSeconds,
        EffortDuration::OneMinute,
        EffortDuration::FiveMinutes,
        EffortDuration::TwentyMinutes,
    ];

    pub fn seconds(self) -> usize {
        match self {
            EffortDuration::FiveSeconds => 5,
            EffortDuration::OneMinute => 60,
            EffortDuration::FiveMinutes => 300,
            EffortDuration::TwentyMinutes => 1200,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EffortDuration::FiveSeconds => "5s",
            EffortDuration::OneMinute => "1m",
            EffortDuration::FiveMinutes => "5m",
            EffortDuration::TwentyMinutes => "20m",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == label)
    }
}

impl fmt::Display for EffortDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Beste snitteffekt per varighet. Inneholder alltid alle fire nøkler;
/// `None` betyr at serien er kortere enn varigheten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BestEfforts(BTreeMap<EffortDuration, Option<u32>>);

impl BestEfforts {
    /// Alle varigheter satt til `None`.
    pub fn absent() -> Self {
        Self(EffortDuration::ALL.iter().map(|d| (*d, None)).collect())
    }

    pub fn get(&self, duration: EffortDuration) -> Option<u32> {
        self.0.get(&duration).copied().flatten()
    }

    pub(crate) fn set(&mut self, duration: EffortDuration, watts: Option<u32>) {
        self.0.insert(duration, watts);
    }

    pub fn iter(&self) -> impl Iterator<Item = (EffortDuration, Option<u32>)> + '_ {
        self.0.iter().map(|(d, w)| (*d, *w))
    }
}

impl Default for BestEfforts {
    fn default() -> Self {
        Self::absent()
    }
}

/// Resultat fra kraftmotoren for én økt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerMetrics {
    pub average_power: Option<u32>,
    pub normalized_power: Option<u32>,
    pub best_efforts: BestEfforts,
}
