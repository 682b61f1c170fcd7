//! Session logging to disk.
//!
//! When enabled, chat turns and interaction events are appended to daily log
//! files in the configured log directory (default:
//! `~/.local/share/termgallery/logs/`). Files are named
//! `<kind>_<date>.log`. Diagnostic `tracing` output goes to a separate file
//! in the same directory because the terminal itself belongs to the UI.

use crate::config::model::LoggingConfig;
use crate::session::{Role, Turn};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Wire `tracing` to `<log_dir>/trace.log`, filtered by `RUST_LOG`.
/// No-op (returns false) when logging is disabled.
pub fn init_tracing(config: &LoggingConfig) -> Result<bool> {
    if !config.enabled {
        return Ok(false);
    }
    let dir = expand_log_dir(&config.log_dir);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let path = dir.join("trace.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(true)
}

/// Appends chat turns and interaction events to daily log files.
///
/// File handles are cached for the lifetime of the logger to avoid repeated
/// opens. Falls back to the null device if a log file cannot be created.
pub struct SessionLogger {
    enabled: bool,
    log_dir: String,
    log_chat: bool,
    log_interactions: bool,
    session_name: String,
    file_handles: HashMap<String, fs::File>,
}

impl SessionLogger {
    pub fn new(config: &LoggingConfig, session_name: &str) -> Self {
        Self {
            enabled: config.enabled,
            log_dir: config.log_dir.clone(),
            log_chat: config.log_chat,
            log_interactions: config.log_interactions,
            session_name: session_name.to_string(),
            file_handles: HashMap::new(),
        }
    }

    /// Write one chat turn. No-op if logging or chat logging is disabled.
    pub fn log_turn(&mut self, turn: &Turn) {
        if !self.enabled || !self.log_chat {
            return;
        }
        let line = match turn.role {
            Role::User => format!("[{}] <{}> {}", turn.timestamp, self.session_name, turn.content),
            Role::Assistant => format!("[{}] <echo> {}", turn.timestamp, turn.content),
        };
        self.append("chat", &line);
    }

    /// Write an interaction event (counter increment, form submit, effect).
    pub fn log_interaction(&mut self, what: &str) {
        if !self.enabled || !self.log_interactions {
            return;
        }
        let ts = chrono::Local::now().format("%H:%M:%S").to_string();
        let line = format!("[{}] {} {}", ts, self.session_name, what);
        self.append("interactions", &line);
    }

    fn append(&mut self, kind: &str, line: &str) {
        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        let filename = format!("{}_{}.log", kind, date);
        let log_dir = expand_log_dir(&self.log_dir);
        let filepath = log_dir.join(&filename);

        let handle = self.file_handles.entry(filename).or_insert_with(|| {
            let _ = fs::create_dir_all(&log_dir);
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&filepath)
                .unwrap_or_else(|_| {
                    // Fallback: a handle that goes nowhere
                    OpenOptions::new()
                        .write(true)
                        .open(if cfg!(unix) { "/dev/null" } else { "NUL" })
                        .unwrap()
                })
        });

        let _ = writeln!(handle, "{}", line);
    }
}

fn expand_log_dir(log_dir: &str) -> PathBuf {
    if log_dir.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(log_dir.trim_start_matches("~/"));
        }
    }
    PathBuf::from(log_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_plain_dir_unchanged() {
        assert_eq!(expand_log_dir("/tmp/logs"), PathBuf::from("/tmp/logs"));
        assert_eq!(expand_log_dir("relative/logs"), PathBuf::from("relative/logs"));
    }

    #[test]
    fn test_expand_tilde_dir() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_log_dir("~/x/logs"), home.join("x/logs"));
        }
    }

    #[test]
    fn test_disabled_logger_writes_nothing() {
        let cfg = LoggingConfig {
            enabled: false,
            ..LoggingConfig::default()
        };
        let mut logger = SessionLogger::new(&cfg, "TestSession1");
        logger.log_interaction("counter incremented");
        assert!(logger.file_handles.is_empty());
    }
}
