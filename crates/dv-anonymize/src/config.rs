//! Pattern configuration.
//!
//! Regex rules and the placeholder template are external configuration,
//! not hard-coded: new identifier formats are added by editing the config
//! file, without code changes. Compilation happens once at startup and
//! fails fast on a malformed pattern, never per document.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::entity::EntityType;
use crate::error::{AnonymizeError, Result};
use crate::placeholder::DEFAULT_PLACEHOLDER_TEMPLATE;

/// Schema version for the pattern configuration file.
pub const PATTERN_SCHEMA_VERSION: &str = "1.0.0";

/// Default rules: email addresses, phone numbers, standalone numeric IDs.
///
/// The phone rule expresses its word boundaries as consumed context with
/// the span in capture group 1, since the `regex` crate has no
/// look-around. Rule order matters: it is the merge tie-break between
/// patterns with identical spans.
const DEFAULT_RULES: &[(EntityType, &str, &str)] = &[
    (
        EntityType::Email,
        r"[\w.\-+]+@[\w.\-]+\.\w{2,}",
        "Email address",
    ),
    (
        EntityType::Phone,
        r"(?:^|[^\w])(\+?\d[\d\s()\-]{5,18}\d)(?:[^\w]|$)",
        "Phone number, international or local",
    ),
    (
        EntityType::NumericId,
        r"\b\d{6,20}\b",
        "Standalone numeric identifier",
    ),
];

/// Pre-compiled default pattern set.
pub(crate) static DEFAULT_PATTERNS: Lazy<Vec<(EntityType, Regex)>> = Lazy::new(|| {
    DEFAULT_RULES
        .iter()
        .map(|(ty, pattern, _)| (*ty, Regex::new(pattern).unwrap()))
        .collect()
});

/// One configured detection rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternRule {
    /// Entity type assigned to matches of this rule.
    pub entity_type: EntityType,

    /// Regex pattern. If it defines capture group 1, the detected span is
    /// that group.
    pub pattern: String,

    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Pattern configuration for the anonymization engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Schema version.
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Placeholder format with `{entity_type}` and `{counter}` tokens.
    #[serde(default = "default_placeholder_template")]
    pub placeholder_template: String,

    /// Ordered detection rules; order is the tie-break between patterns.
    #[serde(default)]
    pub patterns: Vec<PatternRule>,
}

fn default_schema_version() -> String {
    PATTERN_SCHEMA_VERSION.to_string()
}

fn default_placeholder_template() -> String {
    DEFAULT_PLACEHOLDER_TEMPLATE.to_string()
}

impl PatternConfig {
    /// Load configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: PatternConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Compile all rules, failing fast on the first malformed pattern.
    pub fn compile(&self) -> Result<Vec<(EntityType, Regex)>> {
        self.patterns
            .iter()
            .map(|rule| {
                let regex = Regex::new(&rule.pattern).map_err(|e| {
                    AnonymizeError::PatternConfig(format!(
                        "invalid {} pattern: {e}",
                        rule.entity_type
                    ))
                })?;
                Ok((rule.entity_type, regex))
            })
            .collect()
    }
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            schema_version: PATTERN_SCHEMA_VERSION.to_string(),
            placeholder_template: DEFAULT_PLACEHOLDER_TEMPLATE.to_string(),
            patterns: DEFAULT_RULES
                .iter()
                .map(|(ty, pattern, description)| PatternRule {
                    entity_type: *ty,
                    pattern: pattern.to_string(),
                    description: Some(description.to_string()),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_compiles() {
        let config = PatternConfig::default();
        let compiled = config.compile().unwrap();
        assert_eq!(compiled.len(), 3);
        assert_eq!(compiled[0].0, EntityType::Email);
        assert_eq!(compiled[1].0, EntityType::Phone);
        assert_eq!(compiled[2].0, EntityType::NumericId);
    }

    #[test]
    fn test_invalid_pattern_fails_fast() {
        let config = PatternConfig {
            patterns: vec![PatternRule {
                entity_type: EntityType::Email,
                pattern: "(unclosed".to_string(),
                description: None,
            }],
            ..PatternConfig::default()
        };
        let err = config.compile().unwrap_err();
        assert!(matches!(err, AnonymizeError::PatternConfig(_)));
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patterns.json");

        let config = PatternConfig::default();
        config.save(&path).unwrap();
        let loaded = PatternConfig::load(&path).unwrap();

        assert_eq!(loaded.schema_version, config.schema_version);
        assert_eq!(loaded.placeholder_template, config.placeholder_template);
        assert_eq!(loaded.patterns.len(), config.patterns.len());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: PatternConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.schema_version, PATTERN_SCHEMA_VERSION);
        assert_eq!(config.placeholder_template, DEFAULT_PLACEHOLDER_TEMPLATE);
        assert!(config.patterns.is_empty());
    }

    #[test]
    fn test_default_phone_pattern_matches_formats() {
        let compiled = PatternConfig::default().compile().unwrap();
        let (_, phone) = &compiled[1];
        for sample in ["call +1-555-0100 now", "tel: +380 44 123 4567", "(044) 123-45-67"] {
            assert!(phone.is_match(sample), "no phone match in {sample:?}");
        }
        assert!(!phone.is_match("room 42 on floor 3"));
    }
}
