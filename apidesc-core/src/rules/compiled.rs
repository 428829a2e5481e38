//! Pattern compiler
//!
//! Turns the raw pattern strings of a [`RuleSet`] into ready-to-apply
//! matchers. Compiled once per optimizer; never mutated afterwards.

use indexmap::IndexMap;
use regex::{Regex, RegexBuilder};

use super::config::{EntityRule, PatternPair, RuleSet};
use crate::error::{OptimizerError, Result};

/// A compiled `(pattern, replacement)` rule
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
    /// Replacement in `regex` crate syntax
    replacement: String,
}

impl CompiledPattern {
    /// Replace every match in `text`
    pub fn apply(&self, text: &str) -> String {
        self.regex
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }
}

/// Rule set with every pattern compiled
#[derive(Debug, Clone, Default)]
pub struct CompiledRuleSet {
    pub(crate) redundant_phrases: Vec<CompiledPattern>,
    pub(crate) formatting_patterns: Vec<CompiledPattern>,
    pub(crate) term_mappings: Vec<(String, String)>,
    pub(crate) field_patterns: IndexMap<String, String>,
    pub(crate) contractions: Vec<CompiledPattern>,
    pub(crate) entity_optimizations: IndexMap<String, EntityRule>,
    pub(crate) success_message_patterns: IndexMap<String, String>,
}

impl CompiledRuleSet {
    /// Compile all patterns of `rules`.
    ///
    /// Redundant phrases match case-insensitively; formatting patterns and
    /// contractions are anchored to exact casing.
    pub fn compile(rules: &RuleSet) -> Result<Self> {
        Ok(Self {
            redundant_phrases: compile_pairs(
                "redundant_phrases",
                &rules.redundant_phrases,
                true,
            )?,
            formatting_patterns: compile_pairs(
                "formatting_patterns",
                &rules.formatting_patterns,
                false,
            )?,
            term_mappings: rules
                .term_mappings
                .iter()
                .map(|(verbose, concise)| (verbose.clone(), concise.clone()))
                .collect(),
            field_patterns: rules.field_patterns.clone(),
            contractions: compile_pairs("contractions", &rules.contractions, false)?,
            entity_optimizations: rules.entity_optimizations.clone(),
            success_message_patterns: rules.success_message_patterns.clone(),
        })
    }

    /// Template configured for a field tag
    pub fn field_pattern(&self, tag: &str) -> Option<&str> {
        self.field_patterns.get(tag).map(String::as_str)
    }

    /// Grammatical metadata for an entity key
    pub fn entity_rule(&self, key: &str) -> Option<&EntityRule> {
        self.entity_optimizations.get(key)
    }

    /// Message template for a success action
    pub fn success_pattern(&self, action: &str) -> Option<&str> {
        self.success_message_patterns.get(action).map(String::as_str)
    }
}

fn compile_pairs(
    field: &'static str,
    pairs: &[PatternPair],
    case_insensitive: bool,
) -> Result<Vec<CompiledPattern>> {
    pairs
        .iter()
        .map(|(pattern, replacement)| {
            let regex = RegexBuilder::new(pattern)
                .case_insensitive(case_insensitive)
                .build()
                .map_err(|e| OptimizerError::InvalidPattern {
                    field,
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                })?;
            Ok(CompiledPattern {
                regex,
                replacement: translate_replacement(replacement),
            })
        })
        .collect()
}

/// Rewrite a backslash-style replacement template (`\1`, `\g<name>`) into
/// the `${1}` / `${name}` syntax of the regex crate. Literal `$` is escaped.
pub(crate) fn translate_replacement(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '$' => out.push_str("$$"),
            '\\' => match chars.peek().copied() {
                Some(d) if d.is_ascii_digit() => {
                    let mut group = String::new();
                    while let Some(d) = chars.peek().copied().filter(char::is_ascii_digit) {
                        group.push(d);
                        chars.next();
                        if group.len() == 2 {
                            break;
                        }
                    }
                    out.push_str(&format!("${{{group}}}"));
                }
                Some('g') => {
                    chars.next();
                    if chars.peek() == Some(&'<') {
                        chars.next();
                        let name: String = chars.by_ref().take_while(|&c| c != '>').collect();
                        out.push_str(&format!("${{{name}}}"));
                    } else {
                        out.push_str("\\g");
                    }
                }
                Some('\\') => {
                    chars.next();
                    out.push('\\');
                }
                Some('n') => {
                    chars.next();
                    out.push('\n');
                }
                Some('t') => {
                    chars.next();
                    out.push('\t');
                }
                _ => out.push('\\'),
            },
            other => out.push(other),
        }
    }

    out
}
