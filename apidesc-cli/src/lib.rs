//! apidesc CLI library
//!
//! Command-line front end for the `apidesc-core` optimizer: batch
//! optimization of description dictionaries, rule validation and
//! templating, and translation of OpenAPI documents.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod progress;
pub mod translate;

pub use error::{CliError, CliResult};
