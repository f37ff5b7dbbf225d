//! Application Configuration
//!
//! Defaults live here; a JSON object stored under [`CONFIG_KEY`] in
//! localStorage may override any subset of fields.

use serde::{Deserialize, Serialize};

use crate::storage;

pub const CONFIG_KEY: &str = "tasks-ui.config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Quiet period before a search/sort/page change is fetched
    pub debounce_ms: u32,
    pub size_per_page_list: Vec<usize>,
    pub default_size_per_page: usize,
    /// Artificial delay on every repository command
    pub simulated_latency_ms: u32,
    pub tasks_key: String,
    pub log_level: String,
    pub experiment: ExperimentConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    pub name: String,
    pub variants: Vec<(String, u32)>,
    pub visitor_key: String,
    pub variant_key_prefix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            size_per_page_list: vec![5, 10, 25],
            default_size_per_page: 10,
            simulated_latency_ms: 250,
            tasks_key: "tasks-ui.tasks".into(),
            log_level: "info".into(),
            experiment: ExperimentConfig::default(),
        }
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            name: "My Experiment".into(),
            variants: vec![("A".into(), 95), ("B".into(), 5)],
            visitor_key: "tasks-ui.visitor".into(),
            variant_key_prefix: "tasks-ui.experiment.".into(),
        }
    }
}

impl AppConfig {
    /// Parse an override blob; fields it omits keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Defaults merged with the localStorage override, if one parses.
    pub fn load() -> Self {
        match storage::get_raw(CONFIG_KEY) {
            Ok(Some(raw)) => Self::from_json(&raw).unwrap_or_else(|e| {
                tracing::warn!("ignoring malformed config override: {}", e);
                Self::default()
            }),
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!("config override unavailable: {}", e);
                Self::default()
            }
        }
    }

    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}
