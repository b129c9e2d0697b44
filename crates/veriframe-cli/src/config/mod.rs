//! Configuration management.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Inference service address.
    pub api_url: Option<String>,

    /// Default output format.
    pub output_format: Option<OutputFormat>,

    /// Always show explanations (as if --explain was passed).
    #[serde(default)]
    pub explain_by_default: bool,
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("io", "veriframe", "veriframe")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from a file, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;

        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Apply a `key = value` setting.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_url" | "url" => {
                url_check(value)?;
                self.api_url = Some(value.to_string());
            }
            "output_format" | "output" => {
                self.output_format = Some(value.parse()?);
            }
            "explain_by_default" | "explain" => {
                self.explain_by_default = value.parse()?;
            }
            _ => {
                anyhow::bail!(
                    "Unknown config key: {}\n\n\
                     Available keys:\n  \
                     api_url            - Inference service address\n  \
                     output_format      - Default output format (pretty/json/csv/yaml)\n  \
                     explain_by_default - Always explain commands (true/false)",
                    key
                );
            }
        }

        Ok(())
    }
}

fn url_check(value: &str) -> Result<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        anyhow::bail!("api_url must start with http:// or https://, got: {value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("api_url", "http://gpu-box:8000").unwrap();
        config.set("output", "json").unwrap();
        config.set("explain", "true").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api_url.as_deref(), Some("http://gpu-box:8000"));
        assert_eq!(loaded.output_format, Some(OutputFormat::Json));
        assert!(loaded.explain_by_default);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("api_url", "localhost:8000").is_err());
        assert!(config.set("output_format", "xml").is_err());
        assert!(config.set("nope", "1").is_err());
    }
}
