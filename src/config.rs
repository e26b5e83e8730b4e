//! YAML configuration.
//!
//! Every section is optional; a missing file or key falls back to defaults.
//!
//! ```yaml
//! logging:
//!   level: debug
//!   file: /tmp/stepform.log
//! display:
//!   hints: false
//! output:
//!   format: json
//! ```

use crate::error::{FormError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub display: DisplayConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// Log file; unset means a temp-dir file while the form is on screen
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub hints: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { hints: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let raw = std::fs::read_to_string(path).map_err(|err| FormError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

        Self::from_yaml_str(&raw).map_err(|err| FormError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, OutputFormat};
    use crate::error::FormError;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn defaults_without_file() {
        let config = Config::load(None).expect("defaults");
        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.file.is_none());
        assert!(config.display.hints);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = Config::from_yaml_str("output:\n  format: json\n").expect("parse");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.display.hints);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Config::from_yaml_str("  \n").expect("parse"), Config::default());
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(matches!(
            Config::from_yaml_str("output:\n  format: xml\n"),
            Err(FormError::Yaml(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "logging:\n  level: debug\n  file: /tmp/stepform.log\ndisplay:\n  hints: false")
            .expect("write");

        let config = Config::load(Some(file.path())).expect("load");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/stepform.log")));
        assert!(!config.display.hints);
    }

    #[test]
    fn malformed_file_reports_path_and_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "display:\n  hints: maybe").expect("write");

        match Config::load(Some(file.path())) {
            Err(FormError::Config { path, message }) => {
                assert_eq!(path, file.path());
                assert!(!message.is_empty());
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("absent.yaml");

        match Config::load(Some(path.as_path())) {
            Err(FormError::Config { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected config error, got {other:?}"),
        }
    }
}
