use std::time::Duration;

use serde::Deserialize;

use crate::domain::{chart::ChartKind, logging::LogLevel};

/// Dashboard settings; every field falls back to its default when omitted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct DashboardConfig {
    pub snapshot_url: String,
    pub refresh_interval_ms: u32,
    pub hourly_container: String,
    pub daily_container: String,
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            snapshot_url: "../static/data/current_data.json".to_string(),
            refresh_interval_ms: 60_000,
            hourly_container: ChartKind::Hourly.default_container().to_string(),
            daily_container: ChartKind::Daily.default_container().to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.refresh_interval_ms))
    }

    /// Configured level, or `Info` when the name is not recognised
    pub fn log_level(&self) -> LogLevel {
        self.log_level.parse().unwrap_or(LogLevel::Info)
    }
}
