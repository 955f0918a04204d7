use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PharmagentConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Wait the real stage intervals; `false` runs the pipeline instantly
    #[serde(default = "default_true")]
    pub realtime: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { realtime: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Print each agent's findings under its completion message
    #[serde(default = "default_true")]
    pub show_data: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { show_data: true }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pharmagent")
}

pub fn default_config_path() -> PathBuf {
    config_dir().join("config.toml")
}

impl PharmagentConfig {
    /// Load from `custom_path`, or from the default location.
    ///
    /// A missing file at the default location yields the built-in defaults;
    /// a missing file that was asked for explicitly is an error.
    pub fn load(custom_path: &Option<PathBuf>) -> Result<Self> {
        let path = match custom_path {
            Some(path) => path.clone(),
            None => {
                let path = default_config_path();
                if !path.exists() {
                    debug!("No config at {}, using defaults", path.display());
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = PharmagentConfig::default();
        assert!(config.simulation.realtime);
        assert_eq!(config.logging.level, "info");
        assert!(config.display.show_data);
    }

    #[test]
    fn test_load_partial_file() {
        let file = write_config("[simulation]\nrealtime = false\n");
        let config = PharmagentConfig::load(&Some(file.path().to_path_buf())).unwrap();
        assert!(!config.simulation.realtime);
        assert_eq!(config.logging.level, "info");
        assert!(config.display.show_data);
    }

    #[test]
    fn test_load_bundled_default() {
        let file = write_config(include_str!("../../../config/default.toml"));
        let config = PharmagentConfig::load(&Some(file.path().to_path_buf())).unwrap();
        assert!(config.simulation.realtime);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = PharmagentConfig::load(&Some(missing)).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let file = write_config("[simulation\nrealtime = ");
        let err = PharmagentConfig::load(&Some(file.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let text = toml::to_string_pretty(&PharmagentConfig::default()).unwrap();
        let parsed: PharmagentConfig = toml::from_str(&text).unwrap();
        assert!(parsed.simulation.realtime);
    }
}
