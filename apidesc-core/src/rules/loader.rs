//! Rules file loader
//!
//! Rules for a language live in `{rules_dir}/{language}.toml`, or in
//! `{rules_dir}/{language}.json` for dictionaries written by older tooling.

use std::path::{Path, PathBuf};

use super::config::RuleSet;
use crate::error::{OptimizerError, Result};

/// File extensions probed for a language, in priority order
const RULE_EXTENSIONS: [&str; 2] = ["toml", "json"];

impl RuleSet {
    /// Load the rules for `language` from `rules_dir`.
    ///
    /// A missing rules file is not an error: the optimizer falls back to
    /// pass-through with empty rules. A file that exists but cannot be
    /// parsed is.
    pub fn load(language: &str, rules_dir: &Path) -> Result<Self> {
        match locate(language, rules_dir) {
            Some(path) => {
                let rules = Self::from_file(&path)?;
                log::debug!(
                    "Loaded {} rules for '{}' from {}",
                    rules.rule_count(),
                    language,
                    path.display()
                );
                Ok(rules)
            }
            None => {
                log::warn!(
                    "Rules file for '{}' not found in {}. Using empty rules.",
                    language,
                    rules_dir.display()
                );
                Ok(Self::default())
            }
        }
    }

    /// Load rules from an explicit file; the format follows the extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            OptimizerError::Configuration(format!(
                "Failed to read file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let parsed = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => {
                return Err(OptimizerError::Configuration(format!(
                    "Unsupported rules file '{}' (expected .toml or .json)",
                    path.display()
                )))
            }
        };

        parsed.map_err(|e| match e {
            OptimizerError::Configuration(msg) => {
                OptimizerError::Configuration(format!("{msg} (in '{}')", path.display()))
            }
            other => other,
        })
    }
}

/// Resolve the rules file for a language, if one exists
pub fn locate(language: &str, rules_dir: &Path) -> Option<PathBuf> {
    RULE_EXTENSIONS
        .iter()
        .map(|ext| rules_dir.join(format!("{language}.{ext}")))
        .find(|path| path.is_file())
}

/// Language tags that have a rules file in `rules_dir`, sorted
pub fn available_languages(rules_dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(rules_dir) else {
        return Vec::new();
    };

    let mut languages: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| RULE_EXTENSIONS.contains(&ext))
        })
        .filter_map(|path| path.file_stem()?.to_str().map(str::to_string))
        .collect();

    languages.sort();
    languages.dedup();
    languages
}
