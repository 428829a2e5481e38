//! Generate rules command implementation

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

/// Arguments for the generate-rules command
#[derive(Debug, Args)]
pub struct GenerateRulesArgs {
    /// Language code for the new rules
    #[arg(short, long, value_name = "CODE", required = true)]
    pub language: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

const TEMPLATE: &str = r#"# Optimization rules for {language}
#
# Pattern pairs are [pattern, replacement]. Patterns use Rust regex syntax;
# replacements may reference groups as \1 or \g<name>.

# Stripped first, matched case-insensitively
redundant_phrases = [
    ["^Retorna uma lista de ", ""],
    ["^Este campo (contém|representa) ", ""],
]

# Case-sensitive rewrites, applied after the term mappings
formatting_patterns = [
    ["\\bId\\b", "ID"],
]

# Applied last, e.g. preposition + article
contractions = [
    ["\\bde o\\b", "do"],
    ["\\bde a\\b", "da"],
]

# Literal substitutions, in order
[term_mappings]
"identificador único" = "ID"

# Templates per field type; {entity} is replaced by the entity name
[field_patterns]
id = "ID do(a) {entity}"
name = "Nome do(a) {entity}"
status = "Status do(a) {entity}"

# Entity display names and grammar, keyed by the fourth key segment
# gender: "m" or "f"; article: "o" or "a"
[entity_optimizations.user]
name = "usuário"
gender = "m"
article = "o"

# Replacement messages for created / updated / removed actions
[success_message_patterns]
created = "Registro criado com sucesso"
updated = "Registro atualizado com sucesso"
removed = "Registro removido com sucesso"
"#;

impl GenerateRulesArgs {
    /// Execute the generate-rules command
    pub fn execute(&self) -> Result<()> {
        println!("Generating rules template...");
        println!("  Language code: {}", self.language);
        println!("  Output file: {}", self.output.display());

        if let Some(parent) = self.output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Rules template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the rules for your language");
        println!("2. Validate them:");
        println!("   apidesc validate --rules {}", self.output.display());
        println!("3. Use them for optimization:");
        println!("   apidesc optimize -l {}", self.language);

        Ok(())
    }

    fn generate_template(&self) -> String {
        TEMPLATE.replace("{language}", &self.language)
    }
}
