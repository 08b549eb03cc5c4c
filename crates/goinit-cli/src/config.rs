//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`GOINIT_SERVICE_URL`, `GOINIT_TIMEOUT_SECS`)
//! 3. Config file (`--config`, or the default location if it exists)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Generator service settings.
    pub service: ServiceConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL of the generator service's API.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Directory archives are saved into.
    pub download_dir: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8181/api".into(),
            timeout_secs: 30,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            download_dir: PathBuf::from("."),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config` (or `None`
    /// to use the default location).  An explicitly-passed file must exist;
    /// the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => {
                let default = Self::config_path();
                if default.exists() {
                    Self::from_file(&default)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env();
        Ok(config)
    }

    fn from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Environment variables override file values.
    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("GOINIT_SERVICE_URL") {
            if !url.is_empty() {
                self.service.base_url = url;
            }
        }
        if let Ok(secs) = std::env::var("GOINIT_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse::<u64>() {
                self.service.timeout_secs = secs;
            }
        }
    }

    /// The per-request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.service.timeout_secs)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.goinit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "goinit", "goinit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".goinit.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_base_url_points_at_localhost() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.service.base_url, "http://localhost:8181/api");
        assert_eq!(cfg.service.timeout_secs, 30);
    }

    #[test]
    fn default_download_dir_is_cwd() {
        assert_eq!(
            AppConfig::default().output.download_dir,
            PathBuf::from(".")
        );
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[service]\nbase_url = \"http://gen:9000/api\"").unwrap();

        let cfg = AppConfig::from_file(&file.path().to_path_buf()).unwrap();
        assert_eq!(cfg.service.base_url, "http://gen:9000/api");
        assert_eq!(cfg.service.timeout_secs, 30);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = PathBuf::from("/definitely/not/here.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[").unwrap();
        assert!(AppConfig::from_file(&file.path().to_path_buf()).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
