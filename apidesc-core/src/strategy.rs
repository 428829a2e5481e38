//! Per-field optimization strategies

use crate::entity::EntityReference;
use crate::field_type::FieldType;
use crate::grammar::portuguese::{self, SuccessAction};
use crate::grammar::Grammar;
use crate::rules::CompiledRuleSet;

/// Template used for name fields when the rules configure none
pub const DEFAULT_NAME_TEMPLATE: &str = "Name of {entity}";

const ENTITY_PLACEHOLDER: &str = "{entity}";

/// Everything a strategy may consult: the compiled rules and the grammar
/// of the output language
#[derive(Debug, Clone, Copy)]
pub struct StrategyContext<'a> {
    rules: &'a CompiledRuleSet,
    grammar: &'a dyn Grammar,
}

impl<'a> StrategyContext<'a> {
    pub fn new(rules: &'a CompiledRuleSet, grammar: &'a dyn Grammar) -> Self {
        Self { rules, grammar }
    }

    /// Produce the candidate text for a classified field. The result still
    /// goes through the normalization pipeline.
    pub fn apply(&self, field_type: FieldType, value: &str, entity: &EntityReference) -> String {
        match field_type {
            FieldType::Identifier => self.identifier(value, entity),
            FieldType::Name => self.name(entity),
            FieldType::SuccessMessage => self.success_message(value, entity),
            FieldType::Status => portuguese::status_summary(value)
                .unwrap_or_else(|| self.template_or(field_type, value, entity)),
            FieldType::List => portuguese::paginated_list(value)
                .unwrap_or_else(|| self.template_or(field_type, value, entity)),
        }
    }

    /// Descriptions already mentioning `ID` are kept as written
    fn identifier(&self, value: &str, entity: &EntityReference) -> String {
        if value.contains("ID") {
            return value.to_string();
        }
        self.template_or(FieldType::Identifier, value, entity)
    }

    fn name(&self, entity: &EntityReference) -> String {
        let article = self
            .rules
            .entity_rule(&entity.raw_key)
            .and_then(|rule| rule.article);

        if let Some(phrase) =
            article.and_then(|article| self.grammar.name_phrase(&entity.display_name, article))
        {
            return phrase;
        }

        let template = self
            .rules
            .field_pattern(FieldType::Name.tag())
            .unwrap_or(DEFAULT_NAME_TEMPLATE);
        fill(template, &entity.display_name)
    }

    fn success_message(&self, value: &str, entity: &EntityReference) -> String {
        let Some(action) = SuccessAction::detect(value) else {
            return value.to_string();
        };

        if action != SuccessAction::Retrieved {
            return self
                .rules
                .success_pattern(action.key())
                .unwrap_or(value)
                .to_string();
        }

        let Some(subject) = portuguese::leading_subject(value, action) else {
            return value.to_string();
        };
        let gender = self
            .rules
            .entity_rule(&entity.raw_key)
            .map(|rule| rule.gender)
            .unwrap_or_default();

        portuguese::retrieved_message(subject, gender)
    }

    /// Configured template for `field_type`, or the value unchanged
    fn template_or(&self, field_type: FieldType, value: &str, entity: &EntityReference) -> String {
        match self.rules.field_pattern(field_type.tag()) {
            Some(template) => fill(template, &entity.display_name),
            None => value.to_string(),
        }
    }
}

/// Substitute the entity placeholder of a template
pub fn fill(template: &str, display_name: &str) -> String {
    template.replace(ENTITY_PLACEHOLDER, display_name)
}
