//! Application settings configuration
//!
//! Defines scanner and output defaults, overridable from a TOML file.

use crate::utils::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Certificate scanner settings
#[derive(Debug, Clone, Deserialize)]
pub struct ScannerSettings {
    /// Filename suffix identifying certificate files
    #[serde(default = "default_suffix")]
    pub suffix: String,
    /// External X.509 tool used when native parsing is disabled
    #[serde(default = "default_tool")]
    pub tool: String,
}

fn default_suffix() -> String {
    ".pem".to_string()
}

fn default_tool() -> String {
    "openssl".to_string()
}

impl Default for ScannerSettings {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            tool: default_tool(),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    /// Dates within this many days are highlighted as expiring
    #[serde(default = "default_warning_days")]
    pub expiry_warning_days: i64,
}

fn default_warning_days() -> i64 {
    30
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            expiry_warning_days: default_warning_days(),
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scanner: ScannerSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

impl Settings {
    /// Load settings from the default config file
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_path = Path::new("config/default.toml");
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.scanner.suffix, ".pem");
        assert_eq!(settings.scanner.tool, "openssl");
        assert_eq!(settings.output.expiry_warning_days, 30);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str("[scanner]\nsuffix = \".crt\"\n").unwrap();
        assert_eq!(settings.scanner.suffix, ".crt");
        assert_eq!(settings.scanner.tool, "openssl");
    }
}
