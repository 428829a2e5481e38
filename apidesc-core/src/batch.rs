//! Dictionary file processing
//!
//! Reads `key → description` JSON dictionaries, optimizes them and writes
//! the results. A failure on one file is logged and reported, never fatal
//! for the rest of the batch.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{OptimizerError, Result};
use crate::optimizer::Optimizer;
use crate::stats::OptimizationStats;

/// Result of optimizing one dictionary file
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stats: OptimizationStats,
}

/// A dictionary that could not be processed
#[derive(Debug)]
pub struct FileFailure {
    pub input: PathBuf,
    pub error: OptimizerError,
}

/// Outcome of a batch, in input order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub processed: Vec<FileOutcome>,
    pub failures: Vec<FileFailure>,
    /// Statistics merged over every processed file
    pub stats: OptimizationStats,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn files_seen(&self) -> usize {
        self.processed.len() + self.failures.len()
    }
}

/// Parse a dictionary document, keeping key order.
///
/// Strings are taken as-is, `null` becomes the empty string and any other
/// value is coerced to its JSON text.
pub fn parse_dictionary(path: &Path, content: &str) -> Result<IndexMap<String, String>> {
    let raw: IndexMap<String, Value> =
        serde_json::from_str(content).map_err(|e| OptimizerError::InvalidDictionary {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    Ok(raw
        .into_iter()
        .map(|(key, value)| {
            let text = match value {
                Value::String(s) => s,
                Value::Null => String::new(),
                other => other.to_string(),
            };
            (key, text)
        })
        .collect())
}

/// Optimize `input` and write the result to `output`
pub fn optimize_file(optimizer: &Optimizer, input: &Path, output: &Path) -> Result<FileOutcome> {
    log::debug!("Processing file: {}", input.display());

    let content = fs::read_to_string(input).map_err(|e| OptimizerError::io(input, e))?;
    let dictionary = parse_dictionary(input, &content)?;
    let (optimized, stats) = optimizer.optimize_mapping(&dictionary);

    write_dictionary(output, &optimized)?;
    log::info!(
        "{} processed ({} changes)",
        file_label(input),
        stats.optimized
    );

    Ok(FileOutcome {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        stats,
    })
}

/// Optimize every file in `inputs` into `output_dir`, keeping file names.
///
/// Inputs whose file name was already claimed by an earlier input are
/// reported as failures instead of overwriting its output. With the
/// `parallel` feature the files are spread over the rayon pool.
pub fn optimize_files(optimizer: &Optimizer, inputs: &[PathBuf], output_dir: &Path) -> BatchReport {
    optimize_files_with(optimizer, inputs, output_dir, |_| {})
}

/// Like [`optimize_files`], calling `on_file` after each file finishes
pub fn optimize_files_with<F>(
    optimizer: &Optimizer,
    inputs: &[PathBuf],
    output_dir: &Path,
    on_file: F,
) -> BatchReport
where
    F: Fn(&Path) + Send + Sync,
{
    let targets = assign_outputs(inputs, output_dir);

    let run = |(input, target): (&PathBuf, &Target)| {
        let result = match target {
            Target::Write(output) => optimize_file(optimizer, input, output),
            Target::Conflict { output, first } => Err(OptimizerError::OutputConflict {
                output: output.clone(),
                first: first.clone(),
            }),
        };
        on_file(input);
        result
    };

    #[cfg(feature = "parallel")]
    let results: Vec<Result<FileOutcome>> = {
        use rayon::prelude::*;
        inputs.par_iter().zip(targets.par_iter()).map(run).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let results: Vec<Result<FileOutcome>> = inputs.iter().zip(targets.iter()).map(run).collect();

    let mut report = BatchReport::default();
    for (input, result) in inputs.iter().zip(results) {
        match result {
            Ok(outcome) => {
                report.stats.merge(&outcome.stats);
                report.processed.push(outcome);
            }
            Err(error) => {
                log::error!(
                    "[FAIL] Could not process {}. Reason: {}",
                    file_label(input),
                    error
                );
                report.failures.push(FileFailure {
                    input: input.clone(),
                    error,
                });
            }
        }
    }

    report
}

/// Where one input of a batch goes
#[derive(Debug)]
enum Target {
    Write(PathBuf),
    /// `output` belongs to the earlier input `first`
    Conflict { output: PathBuf, first: PathBuf },
}

/// Output path per input, in input order; the first input to claim a path
/// keeps it
fn assign_outputs(inputs: &[PathBuf], output_dir: &Path) -> Vec<Target> {
    let mut claimed: HashMap<PathBuf, &PathBuf> = HashMap::with_capacity(inputs.len());

    inputs
        .iter()
        .map(|input| {
            let output = output_dir.join(input.file_name().unwrap_or(input.as_os_str()));
            match claimed.get(&output) {
                Some(first) => Target::Conflict {
                    output,
                    first: (*first).clone(),
                },
                None => {
                    claimed.insert(output.clone(), input);
                    Target::Write(output)
                }
            }
        })
        .collect()
}

/// `*.json` files directly inside `dir`, sorted by path
pub fn discover_dictionaries(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| OptimizerError::io(dir, e))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    Ok(files)
}

fn write_dictionary(path: &Path, dictionary: &IndexMap<String, String>) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| OptimizerError::io(parent, e))?;
    }

    let mut json = serde_json::to_string_pretty(dictionary).map_err(|e| {
        OptimizerError::InvalidDictionary {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;
    json.push('\n');

    fs::write(path, json).map_err(|e| OptimizerError::io(path, e))
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
