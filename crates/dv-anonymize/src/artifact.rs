//! Replacement records and the engine result type.

use serde::{Deserialize, Serialize};

use crate::entity::EntityType;
use crate::replace::Replacement;

/// One PII replacement occurrence. Every occurrence is recorded, not just
/// unique values, so the original-to-placeholder correspondence is fully
/// recoverable. `original` is the original-coordinate substring, not the
/// transliterated one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub original: String,
    pub replacement: String,
}

/// The sole externally visible output of the engine; immutable once
/// constructed and JSON-serializable in the shape the document store
/// persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnonymizationResult {
    pub anonymized_text: String,
    pub artifacts: Vec<Artifact>,
}

impl AnonymizationResult {
    pub fn empty() -> Self {
        Self {
            anonymized_text: String::new(),
            artifacts: Vec::new(),
        }
    }

    pub fn unchanged(text: String) -> Self {
        Self {
            anonymized_text: text,
            artifacts: Vec::new(),
        }
    }
}

/// Build one artifact per replacement, in text order (the same order the
/// replacements were derived in). Pure.
pub(crate) fn build_artifacts(original_text: &str, replacements: &[Replacement]) -> Vec<Artifact> {
    replacements
        .iter()
        .map(|r| Artifact {
            entity_type: r.entity_type,
            original: original_text[r.start..r.end].to_string(),
            replacement: r.placeholder.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_json_shape() {
        let artifact = Artifact {
            entity_type: EntityType::Person,
            original: "John Doe".to_string(),
            replacement: "PERSON_1".to_string(),
        };
        let json = serde_json::to_value(&artifact).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "PERSON",
                "original": "John Doe",
                "replacement": "PERSON_1"
            })
        );
    }

    #[test]
    fn test_result_round_trips_through_json() {
        let result = AnonymizationResult {
            anonymized_text: "hello PERSON_1".to_string(),
            artifacts: vec![Artifact {
                entity_type: EntityType::Person,
                original: "ivan".to_string(),
                replacement: "PERSON_1".to_string(),
            }],
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: AnonymizationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_build_artifacts_uses_original_slice() {
        let replacements = vec![Replacement {
            entity_type: EntityType::Person,
            start: 8,
            end: 16,
            placeholder: "PERSON_1".to_string(),
        }];
        let artifacts = build_artifacts("Client: Іван ok", &replacements);
        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].original, "Іван");
        assert_eq!(artifacts[0].replacement, "PERSON_1");
    }
}
