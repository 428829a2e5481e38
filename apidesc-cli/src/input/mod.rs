//! Input handling module

pub mod glob_resolver;

pub use glob_resolver::{default_patterns, resolve_patterns};
