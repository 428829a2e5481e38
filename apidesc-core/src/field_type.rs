//! Field-type classification of dictionary keys

use std::fmt;

/// Semantic category of a described field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Identifier,
    Name,
    Status,
    List,
    SuccessMessage,
}

/// Suffix table, checked in order; first match wins
const SUFFIXES: [(&str, FieldType); 5] = [
    (".id.description", FieldType::Identifier),
    (".name.description", FieldType::Name),
    ("-ok.description", FieldType::SuccessMessage),
    (".status.description", FieldType::Status),
    (".list.description", FieldType::List),
];

impl FieldType {
    /// Classify a dotted key by its suffix. Case-insensitive.
    pub fn classify(key: &str) -> Option<FieldType> {
        let key = key.to_lowercase();
        SUFFIXES
            .iter()
            .find(|(suffix, _)| key.ends_with(suffix))
            .map(|&(_, field_type)| field_type)
    }

    /// Key of this field type in a rule set's `field_patterns`
    pub fn tag(self) -> &'static str {
        match self {
            FieldType::Identifier => "id",
            FieldType::Name => "name",
            FieldType::Status => "status",
            FieldType::List => "list",
            FieldType::SuccessMessage => "ok",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
