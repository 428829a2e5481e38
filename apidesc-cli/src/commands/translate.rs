//! Translate command implementation

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::translate::{self, DocumentTranslator, TranslationStats, TranslationSummary};

/// Arguments for the translate command
#[derive(Debug, Args)]
pub struct TranslateArgs {
    /// OpenAPI document (JSON) holding `api.doc.*` keys
    #[arg(short, long, value_name = "FILE", required = true)]
    pub document: PathBuf,

    /// Target language (repeatable); defaults to the configured languages
    #[arg(short, long = "language", value_name = "LANG")]
    pub languages: Vec<String>,

    /// Directory holding `{language}.json` or `{language}/*.json` dictionaries
    #[arg(long, value_name = "DIR")]
    pub dictionaries: Option<PathBuf>,

    /// Output directory for translated documents and reports
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Skip the translation report
    #[arg(long)]
    pub no_report: bool,

    /// Skip the backup copy of the input document
    #[arg(long)]
    pub no_backup: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "APIDESC_CONFIG")]
    pub config: Option<PathBuf>,
}

impl TranslateArgs {
    /// Execute the translate command
    pub fn execute(&self) -> Result<()> {
        let config = CliConfig::load(self.config.as_deref())?;
        let dictionary_dir = self
            .dictionaries
            .as_ref()
            .unwrap_or(&config.paths.dictionary_dir);
        let output_dir = self.output.as_ref().unwrap_or(&config.paths.translated_dir);
        let create_report = config.processing.create_report && !self.no_report;
        let languages = if self.languages.is_empty() {
            &config.processing.languages
        } else {
            &self.languages
        };

        if !self.document.is_file() {
            return Err(CliError::FileNotFound(self.document.display().to_string()).into());
        }
        let content = fs::read_to_string(&self.document)
            .with_context(|| format!("Failed to read {}", self.document.display()))?;
        let document: Value = serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in {}", self.document.display()))?;

        if !self.no_backup {
            translate::write_backup(output_dir, &document, chrono::Local::now())?;
        }

        let mut translated_count = 0;
        let mut results: Vec<(&str, TranslationSummary)> = Vec::new();
        for language in languages {
            let dictionary = match translate::load_dictionary(dictionary_dir, language) {
                Ok(dictionary) => dictionary,
                Err(e) => {
                    let mut stats = TranslationStats::default();
                    stats.add_error(format!("No dictionary for '{language}', skipping: {e:#}"));
                    results.push((language.as_str(), stats.summary()));
                    continue;
                }
            };

            let mut translated = document.clone();
            let mut translator = DocumentTranslator::new(&dictionary);
            translator.translate(&mut translated)?;
            let stats = translator.into_stats();

            let written =
                translate::write_outputs(output_dir, language, &translated, &stats, create_report)?;
            log::info!("Saved translated document to {}", written.document.display());
            results.push((language.as_str(), stats.summary()));
            translated_count += 1;
        }

        if translated_count == 0 {
            return Err(CliError::ProcessingError(format!(
                "no dictionaries found in {}",
                dictionary_dir.display()
            ))
            .into());
        }

        println!("Translated {translated_count}/{} language(s)", languages.len());
        for (language, summary) in &results {
            println!(
                "  {language}: {} translated, {} missing keys, {} errors",
                summary.translation_rate, summary.missing_keys_count, summary.errors
            );
        }
        Ok(())
    }
}
