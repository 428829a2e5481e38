//! The description optimizer
//!
//! An [`Optimizer`] is built once per language. It owns the compiled rules
//! for that language and never mutates them, so one instance can serve any
//! number of dictionaries, from any number of threads.

use std::path::Path;

use indexmap::IndexMap;

use crate::entity::{EntityReference, EntityResolver};
use crate::error::Result;
use crate::field_type::FieldType;
use crate::grammar::{self, Grammar};
use crate::normalize::Normalizer;
use crate::rules::{CompiledRuleSet, RuleSet};
use crate::stats::OptimizationStats;
use crate::strategy::StrategyContext;

/// Rewrites API descriptions for one target language
#[derive(Debug)]
pub struct Optimizer {
    language: String,
    rules: RuleSet,
    compiled: CompiledRuleSet,
    grammar: Box<dyn Grammar>,
}

impl Optimizer {
    /// Build an optimizer from `{rules_dir}/{language}.toml` (or `.json`).
    ///
    /// A missing rules file gives a pass-through optimizer; malformed rules
    /// or invalid patterns are errors.
    pub fn new(language: &str, rules_dir: &Path) -> Result<Self> {
        let rules = RuleSet::load(language, rules_dir)?;
        Self::from_rules(language, rules)
    }

    /// Build an optimizer from an in-memory rule set
    pub fn from_rules(language: &str, rules: RuleSet) -> Result<Self> {
        let compiled = CompiledRuleSet::compile(&rules)?;
        Ok(Self {
            language: language.to_string(),
            rules,
            compiled,
            grammar: grammar::for_language(language),
        })
    }

    /// A freshly compiled optimizer for the same language with other rules
    pub fn with_rules(&self, rules: RuleSet) -> Result<Self> {
        Self::from_rules(&self.language, rules)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// The rules this optimizer was compiled from
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Entity referenced by a dictionary key
    pub fn resolve_entity(&self, key: &str) -> EntityReference {
        EntityResolver::new(&self.compiled.entity_optimizations).resolve(key)
    }

    /// Optimize a single description.
    ///
    /// Empty values are returned unchanged.
    pub fn optimize_description(&self, key: &str, value: &str) -> String {
        if value.is_empty() {
            return String::new();
        }

        let candidate = match FieldType::classify(key) {
            Some(field_type) => {
                let entity = self.resolve_entity(key);
                StrategyContext::new(&self.compiled, self.grammar.as_ref())
                    .apply(field_type, value, &entity)
            }
            None => value.to_string(),
        };

        self.normalize(&candidate)
    }

    /// Run only the generic normalization pipeline
    pub fn normalize(&self, value: &str) -> String {
        Normalizer::new(&self.compiled).normalize(value)
    }

    /// Optimize every entry of a dictionary, keeping key order
    pub fn optimize_mapping(
        &self,
        input: &IndexMap<String, String>,
    ) -> (IndexMap<String, String>, OptimizationStats) {
        let mut stats = OptimizationStats {
            total: input.len(),
            ..OptimizationStats::default()
        };

        let output = input
            .iter()
            .map(|(key, original)| {
                let optimized = self.optimize_description(key, original);
                stats.record(original, &optimized);
                (key.clone(), optimized)
            })
            .collect();

        (output, stats)
    }
}
