//! Application configuration
//!
//! Loaded from a TOML file; every section falls back to defaults, so an
//! absent or partial file is fine.

use anyhow::{Context, Result};
use handflow_control::web::WebFeedConfig;
use handflow_core::ClassifierConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where landmark frames come from.
    pub source: SourceConfig,
    /// Gesture classifier tuning.
    pub classifier: ClassifierConfig,
    /// Command dispatch steps.
    pub dispatch: DispatchConfig,
    /// Logging.
    pub log: LogConfig,
    /// Web feed.
    pub web: WebConfig,
}

impl AppConfig {
    /// Load from `path`; a missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!(?path, "no config file, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {:?}", path))?;
        toml::from_str(&raw).with_context(|| format!("failed to parse config file {:?}", path))
    }
}

/// Landmark source selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    /// JSON frames on stdin, one per line (pipe a tracker process in).
    Stdin,
    /// JSON frames from a file.
    File {
        /// Path to the frame file.
        path: PathBuf,
    },
    /// Built-in scripted demo sequence; no tracker needed.
    Demo,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::Stdin
    }
}

/// Dispatch steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Seconds per relative seek.
    pub seek_step: f32,
    /// Volume delta per volume gesture, 0-100 scale.
    pub volume_step: f32,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            seek_step: 10.0,
            volume_step: 5.0,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level directive, e.g. "info" or "handflow_core=debug".
    pub level: String,
    /// Log to stderr.
    pub console: bool,
    /// Also log to this file.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            console: true,
            file: None,
        }
    }
}

/// Web feed configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// Serve the web feed.
    pub enabled: bool,
    /// Bind address and fan-out settings.
    #[serde(flatten)]
    pub feed: WebFeedConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_round_trip_through_toml() {
        let config = AppConfig::default();
        let raw = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&raw).unwrap();
        assert_eq!(parsed.dispatch.seek_step, config.dispatch.seek_step);
        assert_eq!(parsed.classifier, config.classifier);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[source]\nkind = \"demo\"\n\n[classifier]\nswipe_min_dx = 80.0\n\n[web]\nenabled = true\n"
        )
        .unwrap();
        file.flush().unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert!(matches!(config.source, SourceConfig::Demo));
        assert_eq!(config.classifier.swipe_min_dx, 80.0);
        assert_eq!(config.classifier.history_capacity, 8);
        assert!(config.web.enabled);
        assert_eq!(config.web.feed.bind_addr, "127.0.0.1:5000");
    }

    #[test]
    fn missing_file_is_defaults() {
        let config = AppConfig::load("/nonexistent/handflow.toml").unwrap();
        assert!(matches!(config.source, SourceConfig::Stdin));
        assert!(!config.web.enabled);
    }
}
