//! Rule set schema
//!
//! This module defines the serde schema shared by TOML and JSON rule files.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rules::compiled::CompiledRuleSet;

/// A `(pattern, replacement)` pair as written in a rules file
pub type PatternPair = (String, String);

/// Per-language rule configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleSet {
    /// Boilerplate phrasing to strip, matched case-insensitively
    pub redundant_phrases: Vec<PatternPair>,
    /// Formatting fixes, matched case-sensitively
    pub formatting_patterns: Vec<PatternPair>,
    /// Literal verbose → concise substitutions
    pub term_mappings: IndexMap<String, String>,
    /// Field tag → template with an `{entity}` placeholder
    pub field_patterns: IndexMap<String, String>,
    /// Language contractions, applied after formatting
    pub contractions: Vec<PatternPair>,
    /// Entity key → grammatical metadata
    pub entity_optimizations: IndexMap<String, EntityRule>,
    /// Success action → message template
    pub success_message_patterns: IndexMap<String, String>,
}

/// Grammatical metadata for one entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EntityRule {
    /// Display name used in generated text
    pub name: Option<String>,
    pub gender: Gender,
    pub article: Option<Article>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    #[serde(rename = "m", alias = "masculine")]
    Masculine,
    #[serde(rename = "f", alias = "feminine")]
    Feminine,
}

/// Definite article carried by an entity name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Article {
    #[serde(rename = "o", alias = "masculine")]
    Masculine,
    #[serde(rename = "a", alias = "feminine")]
    Feminine,
}

impl RuleSet {
    /// True when no rule of any kind is configured
    pub fn is_empty(&self) -> bool {
        self.rule_count() == 0
    }

    /// Total number of configured entries across all sections
    pub fn rule_count(&self) -> usize {
        self.redundant_phrases.len()
            + self.formatting_patterns.len()
            + self.term_mappings.len()
            + self.field_patterns.len()
            + self.contractions.len()
            + self.entity_optimizations.len()
            + self.success_message_patterns.len()
    }

    /// Check that every pattern compiles
    pub fn validate(&self) -> Result<()> {
        CompiledRuleSet::compile(self).map(|_| ())
    }

    /// Parse a TOML rules document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            crate::OptimizerError::Configuration(format!("Failed to parse TOML rules: {e}"))
        })
    }

    /// Parse a JSON rules document
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            crate::OptimizerError::Configuration(format!("Failed to parse JSON rules: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let rules = RuleSet::default();
        assert!(rules.is_empty());
        assert_eq!(rules.rule_count(), 0);
    }

    #[test]
    fn test_toml_sections() {
        let rules = RuleSet::from_toml_str(
            r#"
redundant_phrases = [["^Retorna uma lista de ", ""]]
contractions = [["de o ", "do "]]

[term_mappings]
"identificador único" = "ID"

[field_patterns]
id = "ID do(a) {entity}"

[entity_optimizations.visit]
name = "visita"
gender = "f"
article = "a"

[success_message_patterns]
created = "Registro salvo com sucesso"
"#,
        )
        .unwrap();

        assert_eq!(
            rules.redundant_phrases,
            vec![("^Retorna uma lista de ".to_string(), String::new())]
        );
        assert_eq!(rules.term_mappings["identificador único"], "ID");
        let visit = &rules.entity_optimizations["visit"];
        assert_eq!(visit.name.as_deref(), Some("visita"));
        assert_eq!(visit.gender, Gender::Feminine);
        assert_eq!(visit.article, Some(Article::Feminine));
        assert_eq!(rules.rule_count(), 6);
    }

    #[test]
    fn test_json_matches_legacy_layout() {
        let rules = RuleSet::from_json_str(
            r#"{
                "term_mappings": {"specific test word": "optimized word"},
                "entity_optimizations": {"user": {"name": "usuário", "gender": "m", "article": "o"}}
            }"#,
        )
        .unwrap();

        assert_eq!(rules.term_mappings.len(), 1);
        assert_eq!(
            rules.entity_optimizations["user"].article,
            Some(Article::Masculine)
        );
    }

    #[test]
    fn test_entity_defaults() {
        let rules = RuleSet::from_json_str(r#"{"entity_optimizations": {"order": {}}}"#).unwrap();
        let order = &rules.entity_optimizations["order"];
        assert_eq!(order.name, None);
        assert_eq!(order.gender, Gender::Masculine);
        assert_eq!(order.article, None);
    }

    #[test]
    fn test_long_gender_alias() {
        let rules = RuleSet::from_json_str(
            r#"{"entity_optimizations": {"visit": {"gender": "feminine", "article": "feminine"}}}"#,
        )
        .unwrap();
        assert_eq!(rules.entity_optimizations["visit"].gender, Gender::Feminine);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = RuleSet::from_json_str(r#"{"redundant_phrase": []}"#).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        assert!(RuleSet::from_toml_str("redundant_phrases = \"oops\"").is_err());
        assert!(RuleSet::from_json_str(r#"{"entity_optimizations": {"x": {"gender": "n"}}}"#).is_err());
    }
}
