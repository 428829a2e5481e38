//! Entity name resolution from dotted keys

use indexmap::IndexMap;

use crate::rules::EntityRule;

/// Position of the entity segment in a dotted key
const ENTITY_SEGMENT: usize = 3;

/// Entity referenced by a key: the raw segment and its display form.
///
/// Both fields are empty when the key has no entity segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityReference {
    pub raw_key: String,
    pub display_name: String,
}

impl EntityReference {
    pub fn is_empty(&self) -> bool {
        self.raw_key.is_empty()
    }
}

/// Resolves keys against the configured entity overrides
#[derive(Debug, Clone, Copy)]
pub struct EntityResolver<'a> {
    overrides: &'a IndexMap<String, EntityRule>,
}

impl<'a> EntityResolver<'a> {
    pub fn new(overrides: &'a IndexMap<String, EntityRule>) -> Self {
        Self { overrides }
    }

    pub fn resolve(&self, key: &str) -> EntityReference {
        let Some(raw) = key.split('.').nth(ENTITY_SEGMENT) else {
            return EntityReference::default();
        };

        let display_name = match self.overrides.get(raw) {
            Some(rule) => rule.name.clone().unwrap_or_else(|| raw.to_string()),
            None => humanize(raw),
        };

        EntityReference {
            raw_key: raw.to_string(),
            display_name,
        }
    }
}

/// `userProfile` / `user_profile` / `user-profile` → `user profile`
pub fn humanize(segment: &str) -> String {
    let mut spaced = String::with_capacity(segment.len() + 4);
    for (i, ch) in segment.chars().enumerate() {
        if i > 0 && ch.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(ch);
    }
    spaced.to_lowercase().replace(['_', '-'], " ")
}
