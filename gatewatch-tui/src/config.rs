//! Dashboard settings.
//!
//! Settings come from three layers, lowest precedence first: built-in
//! defaults, an optional TOML file, and `GATEWATCH_*` environment
//! variables. CLI flags override all of them (handled in `main`).

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

use gatewatch_client::ApiStyle;

/// Resolved dashboard configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Gateway base URL.
    pub endpoint: String,
    /// API path convention: "v1" (versioned) or "flat" (legacy).
    pub api: String,
    /// Auto-refresh interval for list panels, in seconds.
    pub refresh_secs: u64,
    /// Auto-refresh interval for the hosts panel (hosts churn less).
    pub hosts_refresh_secs: u64,
    /// Whether panels re-fetch on a timer at all.
    pub auto_refresh: bool,
    /// Result cap for events/problems/triggers panels.
    pub list_limit: usize,
    /// Result cap for the hosts panel.
    pub host_limit: usize,
    /// WebSocket endpoint for the live feed, if any.
    pub live_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080".to_string(),
            api: "v1".to_string(),
            refresh_secs: 30,
            hosts_refresh_secs: 60,
            auto_refresh: true,
            list_limit: 10,
            host_limit: 20,
            live_url: None,
        }
    }
}

impl Settings {
    /// Load settings from the optional file plus environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        builder = builder.add_source(Environment::with_prefix("GATEWATCH"));

        let config = builder.build().context("Failed to read configuration")?;
        config.try_deserialize().context("Invalid configuration")
    }

    /// The path convention the `api` key selects.
    pub fn api_style(&self) -> ApiStyle {
        match self.api.as_str() {
            "flat" | "legacy" => ApiStyle::Flat,
            _ => ApiStyle::Versioned,
        }
    }
}
