//! Per-language optimization rules
//!
//! Rules are plain data ([`RuleSet`]) loaded from a TOML or JSON file, then
//! compiled into a [`CompiledRuleSet`] owned by one optimizer.

pub mod compiled;
pub mod config;
pub mod loader;

pub use compiled::{CompiledPattern, CompiledRuleSet};
pub use config::{Article, EntityRule, Gender, PatternPair, RuleSet};
pub use loader::{available_languages, locate};
