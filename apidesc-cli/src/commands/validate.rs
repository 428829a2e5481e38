//! Validate command implementation

use std::path::PathBuf;

use anyhow::Result;
use apidesc_core::RuleSet;
use clap::Args;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Rules file to validate (`.toml` or `.json`)
    #[arg(short, long, value_name = "FILE", required = true)]
    pub rules: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating rules file: {}", self.rules.display());

        match RuleSet::from_file(&self.rules).and_then(|rules| rules.validate().map(|()| rules)) {
            Ok(rules) => {
                println!("✓ Rules are valid!");
                print!("{}", describe(&rules));
                Ok(())
            }
            Err(e) => {
                println!("✗ Rules are invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

/// Rule counts per section
fn describe(rules: &RuleSet) -> String {
    let sections = [
        ("Redundant phrases", rules.redundant_phrases.len()),
        ("Term mappings", rules.term_mappings.len()),
        ("Formatting patterns", rules.formatting_patterns.len()),
        ("Contractions", rules.contractions.len()),
        ("Field patterns", rules.field_patterns.len()),
        ("Entities", rules.entity_optimizations.len()),
        ("Success messages", rules.success_message_patterns.len()),
    ];

    let mut out = String::new();
    for (label, count) in sections {
        out.push_str(&format!("  {label:<20} {count}\n"));
    }
    out.push_str(&format!("  {:<20} {}\n", "Total", rules.rule_count()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn rules_file(extension: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(extension).tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_validate_valid_rules() {
        let file = rules_file(
            ".toml",
            r#"
redundant_phrases = [["^Retorna ", ""]]

[entity_optimizations.visit]
name = "visita"
gender = "f"
article = "a"
"#,
        );
        let args = ValidateArgs {
            rules: file.path().to_path_buf(),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_bad_pattern() {
        let file = rules_file(".json", r#"{"formatting_patterns": [["(unclosed", "x"]]}"#);
        let args = ValidateArgs {
            rules: file.path().to_path_buf(),
        };
        assert!(args.execute().is_err());
    }

    #[test]
    fn test_validate_unknown_section() {
        let file = rules_file(".toml", "[abbreviations]\ncommon = [\"etc\"]\n");
        let args = ValidateArgs {
            rules: file.path().to_path_buf(),
        };
        assert!(args.execute().is_err());
    }

    #[test]
    fn test_describe_counts() {
        let rules = RuleSet::from_toml_str(
            r#"
contractions = [["\\bde o\\b", "do"], ["\\bde a\\b", "da"]]

[term_mappings]
"data e hora" = "data/hora"
"#,
        )
        .unwrap();
        let text = describe(&rules);
        assert!(text.contains("Contractions         2"));
        assert!(text.contains("Term mappings        1"));
        assert!(text.contains("Total                3"));
    }
}
