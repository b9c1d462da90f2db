//! Placeholder allocation with cross-document-call stability.
//!
//! Within one document, identical normalized values of the same entity
//! type always resolve to the same placeholder; counters are dense,
//! 1-based, per type, and never reset mid-document. The registry lives for
//! exactly one anonymization call.

use std::collections::HashMap;

use crate::entity::EntityType;
use crate::error::{AnonymizeError, Result};
use crate::span::Span;

/// Default placeholder format, e.g. `PERSON_1`.
pub const DEFAULT_PLACEHOLDER_TEMPLATE: &str = "{entity_type}_{counter}";

const ENTITY_TOKEN: &str = "{entity_type}";
const COUNTER_TOKEN: &str = "{counter}";

/// Caller-configurable placeholder format with `{entity_type}` and
/// `{counter}` substitution tokens (brackets or any other decoration
/// optional, e.g. `"[{entity_type}-{counter}]"`).
#[derive(Debug, Clone)]
pub struct PlaceholderTemplate {
    template: String,
}

impl PlaceholderTemplate {
    /// Validates that both substitution tokens are present; fails fast at
    /// configuration time.
    pub fn new(template: &str) -> Result<Self> {
        for token in [ENTITY_TOKEN, COUNTER_TOKEN] {
            if !template.contains(token) {
                return Err(AnonymizeError::PatternConfig(format!(
                    "placeholder template is missing the {token} token"
                )));
            }
        }
        Ok(Self {
            template: template.to_string(),
        })
    }

    pub fn render(&self, entity_type: EntityType, counter: u32) -> String {
        self.template
            .replace(ENTITY_TOKEN, entity_type.label())
            .replace(COUNTER_TOKEN, &counter.to_string())
    }
}

impl Default for PlaceholderTemplate {
    fn default() -> Self {
        Self {
            template: DEFAULT_PLACEHOLDER_TEMPLATE.to_string(),
        }
    }
}

/// Per-document mapping from `(entity_type, normalized value)` to the
/// assigned placeholder, plus per-type counters.
#[derive(Debug)]
pub struct PlaceholderRegistry {
    template: PlaceholderTemplate,
    assigned: HashMap<(EntityType, String), String>,
    counters: HashMap<EntityType, u32>,
}

impl PlaceholderRegistry {
    pub fn new(template: PlaceholderTemplate) -> Self {
        Self {
            template,
            assigned: HashMap::new(),
            counters: HashMap::new(),
        }
    }

    /// Look up or assign the placeholder for a matched value. The value is
    /// case-folded so occurrences differing only in case or source script
    /// (after transliteration) share one placeholder.
    pub fn resolve(&mut self, entity_type: EntityType, matched_text: &str) -> String {
        let key = (entity_type, matched_text.trim().to_lowercase());
        if let Some(existing) = self.assigned.get(&key) {
            return existing.clone();
        }
        let counter = self.counters.entry(entity_type).or_insert(0);
        *counter += 1;
        let placeholder = self.template.render(entity_type, *counter);
        self.assigned.insert(key, placeholder.clone());
        placeholder
    }
}

/// Assign placeholders to merged spans, in order.
pub fn allocate(spans: &[Span], registry: &mut PlaceholderRegistry) -> Vec<(Span, String)> {
    spans
        .iter()
        .map(|span| {
            let placeholder = registry.resolve(span.entity_type, &span.matched_text);
            (span.clone(), placeholder)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> PlaceholderRegistry {
        PlaceholderRegistry::new(PlaceholderTemplate::default())
    }

    #[test]
    fn test_same_value_same_placeholder() {
        let mut reg = registry();
        let a = reg.resolve(EntityType::Person, "ivanov");
        let b = reg.resolve(EntityType::Person, "ivanov");
        assert_eq!(a, b);
        assert_eq!(a, "PERSON_1");
    }

    #[test]
    fn test_case_folded_lookup() {
        let mut reg = registry();
        let a = reg.resolve(EntityType::Person, "Ivanov");
        let b = reg.resolve(EntityType::Person, " ivanov ");
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_values_distinct_placeholders() {
        let mut reg = registry();
        let a = reg.resolve(EntityType::Person, "ivanov");
        let b = reg.resolve(EntityType::Person, "petrov");
        assert_ne!(a, b);
        assert_eq!(b, "PERSON_2");
    }

    #[test]
    fn test_counters_independent_per_type() {
        let mut reg = registry();
        assert_eq!(reg.resolve(EntityType::Person, "ivanov"), "PERSON_1");
        assert_eq!(reg.resolve(EntityType::Email, "a@b.com"), "EMAIL_1");
        assert_eq!(reg.resolve(EntityType::Email, "c@d.com"), "EMAIL_2");
        assert_eq!(reg.resolve(EntityType::Person, "petrov"), "PERSON_2");
    }

    #[test]
    fn test_same_value_different_type_distinct() {
        let mut reg = registry();
        let a = reg.resolve(EntityType::Phone, "123456");
        let b = reg.resolve(EntityType::NumericId, "123456");
        assert_ne!(a, b);
    }

    #[test]
    fn test_custom_template() {
        let template = PlaceholderTemplate::new("[{entity_type}-{counter}]").unwrap();
        let mut reg = PlaceholderRegistry::new(template);
        assert_eq!(reg.resolve(EntityType::Email, "a@b.com"), "[EMAIL-1]");
    }

    #[test]
    fn test_template_missing_token_rejected() {
        assert!(PlaceholderTemplate::new("{entity_type}_only").is_err());
        assert!(PlaceholderTemplate::new("no tokens at all").is_err());
    }
}
