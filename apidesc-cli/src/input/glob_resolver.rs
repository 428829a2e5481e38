//! File pattern resolution using glob

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::glob;

use crate::error::CliError;

/// Resolve file patterns to actual file paths, sorted and deduplicated
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::InvalidPattern(format!(
            "no files match {}",
            patterns.join(", ")
        ))
        .into());
    }

    files.sort();
    files.dedup();

    Ok(files)
}

/// `{input_dir}/*.json`
pub fn default_patterns(input_dir: &Path) -> Vec<String> {
    vec![input_dir.join("*.json").to_string_lossy().into_owned()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_sorted_and_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("a.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("c.txt"), "").unwrap();

        let json = default_patterns(temp_dir.path());
        let explicit = temp_dir.path().join("a.json").to_string_lossy().into_owned();
        let patterns = vec![json[0].clone(), explicit];

        let files = resolve_patterns(&patterns).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_no_match_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = resolve_patterns(&default_patterns(temp_dir.path())).unwrap_err();
        assert!(err.to_string().starts_with("Invalid file pattern: no files match"));
    }

    #[test]
    fn test_malformed_pattern() {
        let err = resolve_patterns(&["[".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(p)) if p == "["
        ));
    }
}
