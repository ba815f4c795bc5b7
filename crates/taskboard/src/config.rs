/*
[INPUT]:  Built-in defaults, optional YAML file, TASKBOARD_* environment variables
[OUTPUT]: Parsed application configuration
[POS]:    Configuration layer - startup settings
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Environment variable prefix, e.g. `TASKBOARD_LOG_LEVEL=debug`
pub const ENV_PREFIX: &str = "TASKBOARD";

/// Top-level configuration for the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Directory holding the task blob and logs; platform data dir when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Tracing filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Start with Done tasks hidden
    #[serde(default)]
    pub hide_done: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            log_level: default_log_level(),
            hide_done: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Layer defaults, the YAML file at `path` (if it exists) and the environment
    pub fn load(path: &Path) -> Result<Self> {
        let settings = Config::builder()
            .set_default("log_level", default_log_level())
            .context("set default log level")?
            .set_default("hide_done", false)
            .context("set default hide_done")?
            .add_source(File::from(path).format(FileFormat::Yaml).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .with_context(|| format!("read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("deserialize configuration")
    }

    /// YAML rendering used by `init-config`
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("failed to serialize config to YAML")
    }
}

/// `<config_dir>/taskboard/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("taskboard").join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config.log_level, "info");
        assert!(!config.hide_done);
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "log_level: debug\nhide_done: true\ndata_dir: /tmp/tb\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.hide_done);
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/tb")));
    }

    #[test]
    fn defaults_round_trip_through_yaml() {
        let yaml = AppConfig::default().to_yaml().unwrap();
        let parsed: AppConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, AppConfig::default());
        assert!(!yaml.contains("data_dir"));
    }
}
