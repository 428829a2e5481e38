//! Rule-driven optimizer for API description dictionaries
//!
//! Translation dictionaries for API documentation map dotted keys such as
//! `api.v1.visit.id.description` to verbose, templated text. This crate
//! rewrites those strings into concise, grammatical descriptions using
//! per-language rules.
//!
//! # Pipeline
//!
//! - **Rules**: a [`RuleSet`] is loaded per language from TOML or JSON and
//!   compiled once into a [`CompiledRuleSet`].
//! - **Classification**: the key's suffix selects a [`FieldType`] and its
//!   fourth segment names the entity ([`EntityReference`]).
//! - **Strategies**: field-specific rewrites (identifiers, names, status
//!   enumerations, lists, success messages) with gender/number agreement.
//! - **Normalization**: a fixed sequence of phrase stripping, term
//!   substitution, formatting, contractions and punctuation cleanup.
//!
//! # Example
//!
//! ```rust
//! use apidesc_core::{Optimizer, RuleSet};
//!
//! let rules = RuleSet::from_toml_str(r#"
//! redundant_phrases = [["^Retorna uma lista de ", ""]]
//! "#).unwrap();
//! let optimizer = Optimizer::from_rules("pt-BR", rules).unwrap();
//!
//! let text = optimizer.optimize_description(
//!     "api.v1.users.list.description",
//!     "Retorna uma lista de usuários",
//! );
//! assert_eq!(text, "Usuários.");
//! ```

#[macro_use]
mod macros;

pub mod batch;
pub mod entity;
pub mod error;
pub mod field_type;
pub mod grammar;
pub mod normalize;
pub mod optimizer;
pub mod rules;
pub mod stats;
pub mod strategy;

pub use batch::{BatchReport, FileFailure, FileOutcome};
pub use entity::EntityReference;
pub use error::{OptimizerError, Result};
pub use field_type::FieldType;
pub use grammar::Grammar;
pub use optimizer::Optimizer;
pub use rules::{CompiledRuleSet, RuleSet};
pub use stats::OptimizationStats;
