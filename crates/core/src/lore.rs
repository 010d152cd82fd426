//! The lore record domain type and its shape validation.
//!
//! A [`LoreRecord`] is built once per request from the provider's JSON reply
//! and discarded after it is sent to the caller. It is only considered valid
//! when `name`, `plane`, and `summary` are all non-empty; the relationship
//! fields, when present, must be drawn from the closed [`Relationship`] enum.

use serde::{Deserialize, Serialize};

use crate::error::LoreError;

/// A character's stance toward one of the tracked planeswalkers.
///
/// Closed five-value enum, serialized snake_case. Anything outside this set
/// in a provider reply is a shape failure, not a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    AttackOnSight,
    Enemies,
    Neutral,
    Friends,
    LovedOnes,
}

/// The validated structured result of one lore lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoreRecord {
    /// The character's canonical name
    pub name: String,

    /// Home plane
    pub plane: String,

    /// Guilds, orders, and other allegiances (may be empty)
    #[serde(default)]
    pub affiliations: Vec<String>,

    /// 2-3 sentence lore summary
    pub summary: String,

    /// Stance toward Nahiri, if the model stated one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nahiri_relationship: Option<Relationship>,

    /// Stance toward Aurelia, if the model stated one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aurelia_relationship: Option<Relationship>,
}

impl LoreRecord {
    /// Build a record from already-parsed JSON, enforcing the required shape.
    ///
    /// The caller is responsible for the parse step (text → `Value`); keeping
    /// the two steps separate is what keeps `ParseFailure` and `ShapeInvalid`
    /// distinct failure classes.
    pub fn from_value(value: serde_json::Value) -> Result<Self, LoreError> {
        let record: Self = serde_json::from_value(value)
            .map_err(|e| LoreError::ShapeInvalid(e.to_string()))?;
        record.validate()?;
        Ok(record)
    }

    /// Check the record invariant: `name`, `plane`, and `summary` must all be
    /// non-empty after trimming. Idempotent — a valid record passes unchanged.
    pub fn validate(&self) -> Result<(), LoreError> {
        for (field, value) in [
            ("name", &self.name),
            ("plane", &self.plane),
            ("summary", &self.summary),
        ] {
            if value.trim().is_empty() {
                return Err(LoreError::ShapeInvalid(format!(
                    "required field `{field}` is missing or empty"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> serde_json::Value {
        serde_json::json!({
            "name": "Nahiri",
            "plane": "Zendikar",
            "affiliations": ["Lithomancers"],
            "summary": "A kor lithomancer who helped forge the Eldrazi prison.",
            "nahiri_relationship": "loved_ones",
            "aurelia_relationship": "neutral"
        })
    }

    #[test]
    fn valid_record_passes_unchanged() {
        let record = LoreRecord::from_value(full_record()).unwrap();
        assert_eq!(record.name, "Nahiri");
        assert_eq!(record.nahiri_relationship, Some(Relationship::LovedOnes));
        // Idempotent: validating an already-valid record changes nothing.
        record.validate().unwrap();
        assert_eq!(record.plane, "Zendikar");
    }

    #[test]
    fn missing_summary_is_shape_invalid() {
        let mut value = full_record();
        value.as_object_mut().unwrap().remove("summary");
        let err = LoreRecord::from_value(value).unwrap_err();
        assert!(matches!(err, LoreError::ShapeInvalid(_)));
    }

    #[test]
    fn empty_plane_is_shape_invalid() {
        let mut value = full_record();
        value["plane"] = serde_json::json!("   ");
        let err = LoreRecord::from_value(value).unwrap_err();
        assert!(matches!(err, LoreError::ShapeInvalid(_)));
        assert!(err.to_string().contains("plane"));
    }

    #[test]
    fn out_of_enum_relationship_is_shape_invalid() {
        let mut value = full_record();
        value["nahiri_relationship"] = serde_json::json!("sworn_rivals");
        let err = LoreRecord::from_value(value).unwrap_err();
        assert!(matches!(err, LoreError::ShapeInvalid(_)));
    }

    #[test]
    fn relationships_are_optional() {
        let mut value = full_record();
        value.as_object_mut().unwrap().remove("nahiri_relationship");
        value.as_object_mut().unwrap().remove("aurelia_relationship");
        let record = LoreRecord::from_value(value).unwrap();
        assert!(record.nahiri_relationship.is_none());
        assert!(record.aurelia_relationship.is_none());
    }

    #[test]
    fn affiliations_default_to_empty() {
        let mut value = full_record();
        value.as_object_mut().unwrap().remove("affiliations");
        let record = LoreRecord::from_value(value).unwrap();
        assert!(record.affiliations.is_empty());
    }

    #[test]
    fn relationship_serializes_snake_case() {
        let json = serde_json::to_string(&Relationship::AttackOnSight).unwrap();
        assert_eq!(json, r#""attack_on_sight""#);
    }

    #[test]
    fn record_serialization_roundtrip() {
        let record = LoreRecord::from_value(full_record()).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let back: LoreRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, record.name);
        assert_eq!(back.nahiri_relationship, record.nahiri_relationship);
    }
}
