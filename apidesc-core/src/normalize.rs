//! Generic normalization pipeline
//!
//! Every description passes through these stages, in order, whether or not
//! a field strategy rewrote it:
//!
//! 1. strip redundant phrases (case-insensitive regex)
//! 2. substitute term mappings (literal)
//! 3. apply formatting patterns (case-sensitive regex)
//! 4. apply contractions
//! 5. collapse whitespace and trim
//! 6. drop whitespace before `, . ! ? : ;`
//! 7. collapse runs of periods
//! 8. capitalize and add terminal punctuation
//!
//! Later stages assume the earlier ones already ran.

use crate::rules::CompiledRuleSet;

/// Marks that end a finished sentence
const TERMINALS: [char; 4] = ['.', '!', '?', ':'];

/// Applies the rule-driven stages of a compiled rule set, then the fixed
/// cleanup stages
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    rules: &'a CompiledRuleSet,
}

impl<'a> Normalizer<'a> {
    pub fn new(rules: &'a CompiledRuleSet) -> Self {
        Self { rules }
    }

    pub fn normalize(&self, value: &str) -> String {
        let mut text = value.to_string();

        for pattern in &self.rules.redundant_phrases {
            text = pattern.apply(&text);
        }
        for (verbose, concise) in &self.rules.term_mappings {
            text = text.replace(verbose.as_str(), concise);
        }
        for pattern in &self.rules.formatting_patterns {
            text = pattern.apply(&text);
        }
        for pattern in &self.rules.contractions {
            text = pattern.apply(&text);
        }

        finalize(&clean(&text))
    }
}

/// Whitespace and punctuation cleanup (stages 5–7)
pub fn clean(value: &str) -> String {
    let collapsed = static_regex!(r"\s+").replace_all(value, " ");
    let spaced = static_regex!(r"\s+([,.!?:;])").replace_all(collapsed.trim(), "$1");
    static_regex!(r"\.+").replace_all(&spaced, ".").into_owned()
}

/// Capitalize the first character and make sure the text ends with
/// terminal punctuation (stage 8). Empty text stays empty.
pub fn finalize(value: &str) -> String {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out: String = first.to_uppercase().chain(chars).collect();
    if !out.ends_with(TERMINALS) {
        out.push('.');
    }
    out
}
