//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// UI appearance and timing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    /// Event-loop tick interval in milliseconds; drives animations and the
    /// progress demo.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_max_feedback")]
    pub max_feedback: usize,
    /// Force ASCII rendering even under a UTF-8 locale.
    #[serde(default)]
    pub ascii_only: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            tick_rate_ms: default_tick_rate_ms(),
            max_feedback: default_max_feedback(),
            ascii_only: false,
        }
    }
}

/// Sample data settings for the Data tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Optional CSV file for the people table. Falls back to the embedded
    /// sample when unset or unreadable.
    #[serde(default)]
    pub csv_path: Option<PathBuf>,
    #[serde(default = "default_random_rows")]
    pub random_rows: usize,
    #[serde(default = "default_random_cols")]
    pub random_cols: usize,
    #[serde(default = "default_chart_points")]
    pub chart_points: usize,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            csv_path: None,
            random_rows: default_random_rows(),
            random_cols: default_random_cols(),
            chart_points: default_chart_points(),
        }
    }
}

/// Interaction behavior settings (toast lifetime, progress speed).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// How many ticks a toast stays visible in the status bar.
    #[serde(default = "default_toast_ticks")]
    pub toast_ticks: u64,
    /// Percent the simulated task advances per tick.
    #[serde(default = "default_progress_step")]
    pub progress_step: u16,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            toast_ticks: default_toast_ticks(),
            progress_step: default_progress_step(),
        }
    }
}

/// Session logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_true")]
    pub log_chat: bool,
    #[serde(default)]
    pub log_interactions: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            log_chat: true,
            log_interactions: false,
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_timestamp_format() -> String {
    "%H:%M".to_string()
}
fn default_tick_rate_ms() -> u64 {
    50
}
fn default_max_feedback() -> usize {
    200
}
fn default_random_rows() -> usize {
    5
}
fn default_random_cols() -> usize {
    3
}
fn default_chart_points() -> usize {
    10
}
fn default_toast_ticks() -> u64 {
    60
}
fn default_progress_step() -> u16 {
    2
}
fn default_log_dir() -> String {
    "~/.local/share/termgallery/logs".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.ui.timestamp_format, "%H:%M");
        assert_eq!(cfg.ui.tick_rate_ms, 50);
        assert!(cfg.data.csv_path.is_none());
        assert_eq!(cfg.data.random_rows, 5);
        assert_eq!(cfg.data.random_cols, 3);
        assert!(!cfg.logging.enabled);
        assert!(cfg.logging.log_chat);
    }

    #[test]
    fn empty_toml_parses_to_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.behavior.toast_ticks, 60);
        assert_eq!(cfg.behavior.progress_step, 2);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [ui]
            tick_rate_ms = 100

            [data]
            chart_points = 32
            "#,
        )
        .unwrap();
        assert_eq!(cfg.ui.tick_rate_ms, 100);
        assert_eq!(cfg.ui.timestamp_format, "%H:%M");
        assert_eq!(cfg.data.chart_points, 32);
        assert_eq!(cfg.data.random_rows, 5);
    }

    #[test]
    fn round_trips_through_toml() {
        let cfg = AppConfig::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.ui.max_feedback, cfg.ui.max_feedback);
        assert_eq!(back.logging.log_dir, cfg.logging.log_dir);
    }
}
