//! List command implementation

use std::path::Path;

use anyhow::Result;
use apidesc_core::rules;

use crate::config::CliConfig;

/// Print configured languages and every language with a rules file
pub fn languages(config: Option<&Path>, rules_dir: Option<&Path>) -> Result<()> {
    let config = CliConfig::load(config)?;
    let rules_dir = rules_dir.unwrap_or(&config.paths.rules_dir);

    println!("Languages (rules in {}):", rules_dir.display());
    for line in language_lines(&config.processing.languages, rules_dir) {
        println!("  {line}");
    }
    Ok(())
}

fn language_lines(configured: &[String], rules_dir: &Path) -> Vec<String> {
    let mut languages = configured.to_vec();
    for found in rules::available_languages(rules_dir) {
        if !languages.contains(&found) {
            languages.push(found);
        }
    }

    languages
        .iter()
        .map(|language| match rules::locate(language, rules_dir) {
            Some(path) => format!("{language:<8} {}", path.display()),
            None => format!("{language:<8} (no rules file, pass-through)"),
        })
        .collect()
}
