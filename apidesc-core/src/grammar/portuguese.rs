//! Portuguese morphology
//!
//! Besides the target-language [`Portuguese`] grammar, this module holds the
//! analyzers for the source dictionaries, which are always written in
//! Portuguese whatever the output language is.

use super::Grammar;
use crate::rules::{Article, Gender};

/// Portuguese output grammar (`pt`, `pt-BR`, `pt-PT`)
#[derive(Debug, Clone)]
pub struct Portuguese {
    code: String,
}

impl Portuguese {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
        }
    }
}

impl Grammar for Portuguese {
    fn code(&self) -> &str {
        &self.code
    }

    fn name_phrase(&self, display_name: &str, article: Article) -> Option<String> {
        Some(format!("Nome {} {}", contraction(article), display_name))
    }
}

/// `de` + definite article
pub fn contraction(article: Article) -> &'static str {
    match article {
        Article::Masculine => "do",
        Article::Feminine => "da",
    }
}

/// Action reported by a success message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuccessAction {
    Retrieved,
    Created,
    Updated,
    Removed,
}

impl SuccessAction {
    /// Detection order
    pub const ALL: [SuccessAction; 4] = [
        SuccessAction::Retrieved,
        SuccessAction::Created,
        SuccessAction::Updated,
        SuccessAction::Removed,
    ];

    /// Key in a rule set's `success_message_patterns`
    pub fn key(self) -> &'static str {
        match self {
            SuccessAction::Retrieved => "retrieved",
            SuccessAction::Created => "created",
            SuccessAction::Updated => "updated",
            SuccessAction::Removed => "removed",
        }
    }

    /// Lower-case phrases that identify the action, both genders
    fn triggers(self) -> &'static [&'static str] {
        match self {
            SuccessAction::Retrieved => &["retornado com sucesso", "retornada com sucesso"],
            SuccessAction::Created => &["salvo com sucesso", "salva com sucesso"],
            SuccessAction::Updated => &["editado com sucesso", "editada com sucesso"],
            SuccessAction::Removed => &["excluído com sucesso", "excluída com sucesso"],
        }
    }

    /// Find the action a message describes
    pub fn detect(message: &str) -> Option<SuccessAction> {
        let lower = message.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|action| action.triggers().iter().any(|t| lower.contains(t)))
    }
}

/// Noun phrase preceding the inflected participle of `action`
/// (`"Usuários retornados com sucesso"` → `"Usuários"`).
pub fn leading_subject(message: &str, action: SuccessAction) -> Option<&str> {
    let re = match action {
        SuccessAction::Retrieved => static_regex!(r"(?i)^(.+?)\s+retornad[oa]"),
        SuccessAction::Created => static_regex!(r"(?i)^(.+?)\s+salv[oa]"),
        SuccessAction::Updated => static_regex!(r"(?i)^(.+?)\s+editad[oa]"),
        SuccessAction::Removed => static_regex!(r"(?i)^(.+?)\s+excluíd[oa]"),
    };

    re.captures(message)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|subject| !subject.is_empty())
}

/// `"{Subject} recuperado(a)(s) com sucesso"` agreeing with the subject
pub fn retrieved_message(subject: &str, gender: Gender) -> String {
    let plural = subject.to_lowercase().ends_with('s');

    let mut adjective = String::from("recuperado");
    if gender == Gender::Feminine {
        adjective.pop();
        adjective.push('a');
    }
    if plural {
        adjective.push('s');
    }

    format!("{} {} com sucesso", capitalize(subject), adjective)
}

/// Collapse an enumerated status description:
/// `"Status da X. Valores retornados: 0 (A), 1 (B) e 2 (C)."`
/// → `"Status da X: 0 = A, 1 = B, 2 = C"`.
pub fn status_summary(description: &str) -> Option<String> {
    let layout = static_regex!(
        r"(?is)^\s*(?:(?P<header>[^.]*?)\s*\.\s*)?valores(?:\s+(?:poss[ií]veis|retornados|aceitos))?\s*:\s*(?P<values>.+)$"
    );
    let entry = static_regex!(r"(?P<code>[\w-]+)\s*\(\s*(?P<label>[^)]+?)\s*\)");

    let caps = layout.captures(description)?;
    let entries: Vec<String> = entry
        .captures_iter(&caps["values"])
        .map(|c| format!("{} = {}", &c["code"], &c["label"]))
        .collect();
    if entries.is_empty() {
        return None;
    }

    let header = caps
        .name("header")
        .map(|m| m.as_str().trim())
        .filter(|h| !h.is_empty())
        .unwrap_or("Status");

    Some(format!("{header}: {}", entries.join(", ")))
}

/// `"Retorna uma lista paginada de usuários"` → `"Lista de usuários"`
pub fn paginated_list(description: &str) -> Option<String> {
    let re = static_regex!(
        r"(?i)^\s*(?:retorna\s+(?:uma\s+)?)?lista\s+paginada\s+(?P<prep>de|do|da|dos|das)\s+(?P<rest>.+?)\s*\.?\s*$"
    );

    let caps = re.captures(description)?;
    Some(format!(
        "Lista {} {}",
        caps["prep"].to_lowercase(),
        &caps["rest"]
    ))
}

/// Upper-case the first character and lower-case the rest
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
