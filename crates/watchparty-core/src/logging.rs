//! Logging configuration
//!
//! Carried in the user configuration and consumed by the host binary's
//! tracing setup. Each run writes its own log file (named by process id);
//! `cleanup_old_logs` keeps the directory bounded.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::Level;

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level name: trace, debug, info, warn, error. Unrecognized
    /// values fall back to info.
    #[serde(default = "default_level")]
    pub level: String,
    /// Mirror logs to stderr.
    #[serde(default = "default_true")]
    pub console_output: bool,
    /// Write logs to a file under the log directory.
    #[serde(default)]
    pub file_output: bool,
    /// Log directory override. Defaults to the platform data directory.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
    /// How many log files to keep when cleaning up.
    #[serde(default = "default_max_log_files")]
    pub max_log_files: usize,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_log_files() -> usize {
    5
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            console_output: true,
            file_output: false,
            log_dir: None,
            max_log_files: default_max_log_files(),
        }
    }
}

impl LogConfig {
    /// Parse the configured level name, defaulting to INFO if invalid.
    pub fn parse_level(&self) -> Level {
        match self.level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" | "warning" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }

    /// The directory log files go to.
    pub fn resolved_log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("WatchParty")
                .join("logs")
        })
    }

    /// Log file path for the current run.
    pub fn current_log_path(&self) -> PathBuf {
        self.resolved_log_dir()
            .join(format!("watchparty-{}.log", std::process::id()))
    }

    /// Create the log directory if missing.
    pub fn ensure_log_directory(&self) -> Result<()> {
        fs::create_dir_all(self.resolved_log_dir())?;
        Ok(())
    }

    /// Remove the oldest log files beyond `max_log_files`. Returns how many
    /// were removed.
    pub fn cleanup_old_logs(&self) -> Result<usize> {
        let dir = self.resolved_log_dir();
        if !dir.is_dir() {
            return Ok(0);
        }

        let mut logs: Vec<(std::time::SystemTime, PathBuf)> = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("log") {
                continue;
            }
            let modified = entry
                .metadata()?
                .modified()
                .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
            logs.push((modified, path));
        }

        // Newest first; everything past the retention window goes.
        logs.sort_by(|a, b| b.0.cmp(&a.0));
        let mut removed = 0;
        for (_, path) in logs.into_iter().skip(self.max_log_files) {
            fs::remove_file(&path)?;
            removed += 1;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LogConfig::default();
        assert_eq!(config.level, "info");
        assert!(config.console_output);
        assert!(!config.file_output);
        assert_eq!(config.max_log_files, 5);
    }

    #[test]
    fn test_parse_level_falls_back_to_info() {
        let mut config = LogConfig::default();
        config.level = "Debug".to_string();
        assert_eq!(config.parse_level(), Level::DEBUG);

        config.level = "verbose".to_string();
        assert_eq!(config.parse_level(), Level::INFO);
    }

    #[test]
    fn test_log_dir_override() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            log_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        assert_eq!(config.resolved_log_dir(), dir.path());
        assert!(config
            .current_log_path()
            .to_string_lossy()
            .ends_with(".log"));
    }

    #[test]
    fn test_cleanup_keeps_newest() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            log_dir: Some(dir.path().to_path_buf()),
            max_log_files: 2,
            ..Default::default()
        };

        for i in 0..4 {
            let path = dir.path().join(format!("watchparty-{}.log", i));
            std::fs::write(&path, "x").unwrap();
        }
        // Non-log files are untouched.
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let removed = config.cleanup_old_logs().unwrap();
        assert_eq!(removed, 2);

        let remaining: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("log"))
            .collect();
        assert_eq!(remaining.len(), 2);
        assert!(dir.path().join("notes.txt").exists());
    }
}
