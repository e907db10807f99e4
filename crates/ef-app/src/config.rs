//! Session configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// How a session talks to its terminal.
///
/// Every field is optional in the YAML file; missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Written before each input line is read.
    pub prompt: Option<String>,
    /// Prepended to every error line.
    pub error_prefix: String,
    /// Repeat each input line to the output before its result.
    pub echo_commands: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: None,
            error_prefix: "Error, ".to_string(),
            echo_commands: false,
        }
    }
}

impl SessionConfig {
    /// Load a config from a YAML file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_yaml(&content).map_err(|message| AppError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    fn from_yaml(content: &str) -> Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = SessionConfig::from_yaml("prompt: \"> \"\n").unwrap();
        assert_eq!(config.prompt.as_deref(), Some("> "));
        assert_eq!(config.error_prefix, "Error, ");
        assert!(!config.echo_commands);
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(
            SessionConfig::from_yaml("").unwrap(),
            SessionConfig::default()
        );
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        assert!(SessionConfig::from_yaml("echo_commands: [1, 2").is_err());
    }

    #[test]
    fn load_missing_file_reports_path() {
        let path = std::env::temp_dir().join("ef_app_missing_config.yaml");
        let _ = std::fs::remove_file(&path);
        let err = SessionConfig::load(&path).unwrap_err();
        assert!(matches!(err, AppError::FileRead { .. }));
    }
}
