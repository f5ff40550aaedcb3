//! YAML configuration file support.
//!
//! Lets the CLI (and any embedding application) keep the matcher settings in
//! a file instead of code.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "essay review"
//!
//! matcher:
//!   min_phrase_tokens: 4
//!   min_equal_tokens: 4
//!   boundary_scan: forward     # forward | reverse
//!   trailing_mode: charset_trim  # charset_trim | slice
//! ```
//!
//! Every `matcher` key is optional and falls back to [`MatchConfig::default`].

use std::fs;
use std::path::Path;

use matcher::MatchConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct VerbatimConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Matcher configuration
    #[serde(default)]
    pub matcher: MatchConfig,
}

impl VerbatimConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), name = ?config.name, "loaded configuration");
        Ok(config)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: VerbatimConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.matcher
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))
    }
}

impl Default for VerbatimConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            matcher: MatchConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matcher::{BoundaryScan, TrailingMode};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "test config"
matcher:
  boundary_scan: reverse
  trailing_mode: slice
  min_equal_tokens: 6
"#;

        let config = VerbatimConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.name, Some("test config".to_string()));
        assert_eq!(config.matcher.boundary_scan, BoundaryScan::Reverse);
        assert_eq!(config.matcher.trailing_mode, TrailingMode::Slice);
        assert_eq!(config.matcher.min_equal_tokens, 6);
        assert_eq!(config.matcher.min_phrase_tokens, 4);
    }

    #[test]
    fn test_matcher_section_optional() {
        let config = VerbatimConfig::from_yaml("version: \"1\"\n").unwrap();
        assert_eq!(config.matcher, MatchConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let yaml = "version: \"1.0\"\nmatcher:\n  trailing_mode: slice\n";

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = VerbatimConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.matcher.trailing_mode, TrailingMode::Slice);
    }

    #[test]
    fn test_missing_file() {
        let result = VerbatimConfig::from_file("/nonexistent/verbatim.yaml");
        assert!(matches!(result, Err(ConfigLoadError::FileRead(_))));
    }

    #[test]
    fn test_unsupported_version() {
        let result = VerbatimConfig::from_yaml("version: \"2.0\"\n");
        assert!(matches!(result, Err(ConfigLoadError::UnsupportedVersion(v)) if v == "2.0"));
    }

    #[test]
    fn test_invalid_matcher_section() {
        let yaml = "version: \"1.0\"\nmatcher:\n  version: \"\"\n";
        let result = VerbatimConfig::from_yaml(yaml);
        assert!(matches!(result, Err(ConfigLoadError::Validation(_))));
    }

    #[test]
    fn test_unknown_mode_is_parse_error() {
        let yaml = "version: \"1.0\"\nmatcher:\n  trailing_mode: sideways\n";
        let result = VerbatimConfig::from_yaml(yaml);
        assert!(matches!(result, Err(ConfigLoadError::YamlParse(_))));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = VerbatimConfig::default();
        let yaml = config.to_yaml().unwrap();
        assert_eq!(VerbatimConfig::from_yaml(&yaml).unwrap(), config);
    }
}
