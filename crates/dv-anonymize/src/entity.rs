//! PII entity categories.

use serde::{Deserialize, Serialize};

/// Category of a detected PII value.
///
/// The merger, allocator and replacer are type-agnostic: adding a new
/// category means adding a variant here plus a pattern or dictionary rule,
/// nothing else changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    /// User-dictionary name match (persons, including third parties such as
    /// staff listed by the account owner).
    Person,
    /// Email address.
    Email,
    /// Phone number.
    Phone,
    /// Standalone numeric identifier (passport, case number, ...).
    #[serde(rename = "ID")]
    NumericId,
}

impl EntityType {
    /// Label used in placeholders and persisted artifacts.
    pub fn label(&self) -> &'static str {
        match self {
            EntityType::Person => "PERSON",
            EntityType::Email => "EMAIL",
            EntityType::Phone => "PHONE",
            EntityType::NumericId => "ID",
        }
    }

    /// Parse an entity type from its label.
    pub fn parse_label(s: &str) -> Option<Self> {
        match s {
            "PERSON" => Some(EntityType::Person),
            "EMAIL" => Some(EntityType::Email),
            "PHONE" => Some(EntityType::Phone),
            "ID" => Some(EntityType::NumericId),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for ty in [
            EntityType::Person,
            EntityType::Email,
            EntityType::Phone,
            EntityType::NumericId,
        ] {
            assert_eq!(EntityType::parse_label(ty.label()), Some(ty));
        }
        assert_eq!(EntityType::parse_label("UNKNOWN"), None);
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&EntityType::NumericId).unwrap();
        assert_eq!(json, "\"ID\"");
        let ty: EntityType = serde_json::from_str("\"PERSON\"").unwrap();
        assert_eq!(ty, EntityType::Person);
    }
}
