//! Configuration module
//!
//! `apidesc.toml` supplies directory defaults and the language list; every
//! value can be overridden on the command line.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "apidesc.toml";

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Directory layout
    #[serde(default)]
    pub paths: PathsConfig,

    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,
}

/// Directory-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    /// Source dictionaries
    pub input_dir: PathBuf,

    /// Optimized dictionaries, one subdirectory per language
    pub output_dir: PathBuf,

    /// Rule files, `{language}.toml` or `{language}.json`
    pub rules_dir: PathBuf,

    /// Dictionaries used to translate documents
    pub dictionary_dir: PathBuf,

    /// Translated documents and reports
    pub translated_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("locales/original"),
            output_dir: PathBuf::from("locales/optimized"),
            rules_dir: PathBuf::from("rules"),
            dictionary_dir: PathBuf::from("locales/optimized"),
            translated_dir: PathBuf::from("dist"),
        }
    }
}

/// Processing-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Languages processed when none is given
    pub languages: Vec<String>,

    /// Write a translation report next to each translated document
    pub create_report: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            languages: ["pt-BR", "en-US", "es-ES", "fr-FR"]
                .into_iter()
                .map(String::from)
                .collect(),
            create_report: true,
        }
    }
}

impl CliConfig {
    /// Parse a TOML configuration
    pub fn from_toml_str(content: &str) -> Result<Self, CliError> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))
    }

    /// Load `path`, or `apidesc.toml` from the working directory when it
    /// exists, or the defaults
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let path = match path {
            Some(path) => path,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Path::new(DEFAULT_CONFIG_FILE),
            None => return Ok(Self::default()),
        };

        log::debug!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|_| CliError::FileNotFound(path.display().to_string()))?;
        Self::from_toml_str(&content).map_err(|e| match e {
            CliError::ConfigError(msg) => {
                CliError::ConfigError(format!("{msg} (in '{}')", path.display()))
            }
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.paths.input_dir, PathBuf::from("locales/original"));
        assert_eq!(config.paths.rules_dir, PathBuf::from("rules"));
        assert_eq!(config.processing.languages, vec!["pt-BR", "en-US", "es-ES", "fr-FR"]);
        assert!(config.processing.create_report);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = CliConfig::from_toml_str(
            r#"
[paths]
rules_dir = "config/rules"

[processing]
languages = ["pt-BR"]
"#,
        )
        .unwrap();

        assert_eq!(config.paths.rules_dir, PathBuf::from("config/rules"));
        assert_eq!(config.paths.output_dir, PathBuf::from("locales/optimized"));
        assert_eq!(config.processing.languages, vec!["pt-BR"]);
        assert!(config.processing.create_report);
    }

    #[test]
    fn test_invalid_config() {
        let err = CliConfig::from_toml_str("[paths]\nrules_dir = 3").unwrap_err();
        assert!(matches!(err, CliError::ConfigError(_)));
    }

    #[test]
    fn test_load_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        fs::write(&path, "[processing]\ncreate_report = false\n").unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();
        assert!(!config.processing.create_report);

        let missing = temp_dir.path().join("missing.toml");
        assert!(matches!(
            CliConfig::load(Some(&missing)),
            Err(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = CliConfig::default();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(CliConfig::from_toml_str(&text).unwrap(), config);
    }
}
