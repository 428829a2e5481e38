//! Target-language grammar
//!
//! Strategies that depend on the morphology of the output language go
//! through [`Grammar`]. Languages without special handling use
//! [`Neutral`]; a new language gets its own implementation rather than new
//! switches in an existing one.

use std::fmt;

use crate::rules::Article;

pub mod portuguese;

pub use portuguese::Portuguese;

/// Language-specific phrasing used by the field strategies
pub trait Grammar: fmt::Debug + Send + Sync {
    /// Language tag this grammar was selected for
    fn code(&self) -> &str;

    /// "Name of <entity>" phrasing with a contracted article, when the
    /// language contracts preposition and article. `None` means the
    /// configured template applies instead.
    fn name_phrase(&self, display_name: &str, article: Article) -> Option<String>;
}

/// Grammar without article contraction
#[derive(Debug, Clone)]
pub struct Neutral {
    code: String,
}

impl Neutral {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
        }
    }
}

impl Grammar for Neutral {
    fn code(&self) -> &str {
        &self.code
    }

    fn name_phrase(&self, _display_name: &str, _article: Article) -> Option<String> {
        None
    }
}

/// Pick the grammar for a language tag such as `pt-BR` or `en-US`
pub fn for_language(code: &str) -> Box<dyn Grammar> {
    let primary = code.split(['-', '_']).next().unwrap_or_default();
    if primary.eq_ignore_ascii_case("pt") {
        Box::new(Portuguese::new(code))
    } else {
        Box::new(Neutral::new(code))
    }
}
