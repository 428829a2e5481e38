//! Optimize command implementation

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use apidesc_core::batch::{self, BatchReport};
use apidesc_core::rules;
use apidesc_core::Optimizer;
use clap::Args;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{default_patterns, resolve_patterns};
use crate::progress::ProgressReporter;

/// Arguments for the optimize command
#[derive(Debug, Args)]
pub struct OptimizeArgs {
    /// Target language (repeatable); defaults to the configured languages
    #[arg(short, long = "language", value_name = "LANG")]
    pub languages: Vec<String>,

    /// Process every language that has a rules file
    #[arg(short, long, conflicts_with = "languages")]
    pub all: bool,

    /// Input files or patterns (supports glob); defaults to `{input_dir}/*.json`
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output directory; results go to `{output}/{language}/`
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Directory holding the rule files
    #[arg(short, long, value_name = "DIR")]
    pub rules_dir: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "APIDESC_CONFIG")]
    pub config: Option<PathBuf>,
}

impl OptimizeArgs {
    /// Execute the optimize command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        let config = CliConfig::load(self.config.as_deref())?;
        let rules_dir = self.rules_dir.as_ref().unwrap_or(&config.paths.rules_dir);
        let output_dir = self.output.as_ref().unwrap_or(&config.paths.output_dir);

        let languages = self.languages(&config, rules_dir)?;
        let patterns = if self.input.is_empty() {
            default_patterns(&config.paths.input_dir)
        } else {
            self.input.clone()
        };
        let inputs = resolve_patterns(&patterns)?;

        log::info!(
            "Optimizing {} file(s) for {}",
            inputs.len(),
            languages.join(", ")
        );

        let mut failed = 0;
        for language in &languages {
            let report = optimize_language(language, rules_dir, &inputs, output_dir, quiet)?;
            if !quiet {
                print!("{}", format_summary(language, &report));
            }
            failed += report.failures.len();
        }

        if failed > 0 {
            return Err(CliError::ProcessingError(format!("{failed} file(s) failed")).into());
        }
        Ok(())
    }

    fn languages(&self, config: &CliConfig, rules_dir: &Path) -> Result<Vec<String>> {
        let languages = if self.all {
            rules::available_languages(rules_dir)
        } else if self.languages.is_empty() {
            config.processing.languages.clone()
        } else {
            self.languages.clone()
        };

        if languages.is_empty() {
            return Err(CliError::ConfigError(format!(
                "no languages to process (no rule files in {})",
                rules_dir.display()
            ))
            .into());
        }
        Ok(languages)
    }
}

/// Optimize `inputs` for one language into `{output_dir}/{language}/`
pub fn optimize_language(
    language: &str,
    rules_dir: &Path,
    inputs: &[PathBuf],
    output_dir: &Path,
    quiet: bool,
) -> Result<BatchReport> {
    let optimizer = Optimizer::new(language, rules_dir)
        .with_context(|| format!("Failed to load rules for {language}"))?;

    let mut progress = ProgressReporter::new(quiet);
    progress.init_files(inputs.len() as u64, language);

    let report = batch::optimize_files_with(&optimizer, inputs, &output_dir.join(language), |path| {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        progress.file_completed(&name);
    });
    progress.finish();

    Ok(report)
}

/// Per-language summary printed after a run
pub fn format_summary(language: &str, report: &BatchReport) -> String {
    let stats = &report.stats;
    let rate = stats
        .optimization_rate()
        .map_or_else(|| "n/a".to_string(), |r| format!("{r:.1}%"));
    let average = stats
        .average_reduction()
        .map_or_else(|| "n/a".to_string(), |a| format!("{a:.1} chars"));

    let mut out = format!("Summary for {language}\n");
    out.push_str(&format!("  Files processed:     {}\n", report.processed.len()));
    out.push_str(&format!("  Total descriptions:  {}\n", stats.total));
    out.push_str(&format!("  Optimized:           {}\n", stats.optimized));
    out.push_str(&format!("  Characters saved:    {}\n", stats.chars_saved));
    out.push_str(&format!("  Optimization rate:   {rate}\n"));
    out.push_str(&format!("  Average reduction:   {average}\n"));
    out.push_str(&format!("  Failures:            {}\n", report.failures.len()));
    for failure in &report.failures {
        out.push_str(&format!(
            "    ✗ {}: {}\n",
            failure.input.display(),
            failure.error
        ));
    }
    out
}
