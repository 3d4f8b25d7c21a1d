//! Props snapshot: the current set of prop values for the selected component

use crate::schema::{FieldKind, PropValue, PropsFieldSchema};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// A snapshot that does not fit the schema it is checked against
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("'{field}' is not a prop of this component")]
    StrayField { field: String },
    #[error("'{field}' expects a {expected} value")]
    WrongType { field: String, expected: FieldKind },
}

/// Mapping from field name to value.
///
/// Ordered by key so two snapshots with the same contents compare and
/// serialize identically.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropsSnapshot(BTreeMap<String, PropValue>);

impl PropsSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot holding every field's default value
    pub fn defaults_for(schema: &[PropsFieldSchema]) -> Self {
        Self(
            schema
                .iter()
                .map(|field| (field.name.clone(), field.default_value()))
                .collect(),
        )
    }

    /// Builder-style insert, mostly for tests and presets
    pub fn with(mut self, field: &str, value: impl Into<PropValue>) -> Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: PropValue) -> Option<PropValue> {
        self.0.insert(field.into(), value)
    }

    pub fn get(&self, field: &str) -> Option<&PropValue> {
        self.0.get(field)
    }

    pub fn get_bool(&self, field: &str) -> Option<bool> {
        self.0.get(field).and_then(PropValue::as_bool)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(PropValue::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check that every key belongs to `schema` and every value has the
    /// type of its field's kind. Missing keys are allowed.
    pub fn conforms_to(&self, schema: &[PropsFieldSchema]) -> Result<(), SnapshotError> {
        for (name, value) in &self.0 {
            let field = schema
                .iter()
                .find(|f| &f.name == name)
                .ok_or_else(|| SnapshotError::StrayField {
                    field: name.clone(),
                })?;
            if !value.fits(field.kind) {
                return Err(SnapshotError::WrongType {
                    field: name.clone(),
                    expected: field.kind,
                });
            }
        }
        Ok(())
    }

    /// Pretty JSON, used by the code view's props export
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| "{}".to_string())
    }
}

impl FromIterator<(String, PropValue)> for PropsSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, PropValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button_schema() -> Vec<PropsFieldSchema> {
        vec![
            PropsFieldSchema::select(
                "variant",
                "Variant",
                &[("contained", "Contained"), ("outlined", "Outlined")],
            ),
            PropsFieldSchema::boolean("disabled", "Disabled"),
        ]
    }

    #[test]
    fn test_defaults_for_schema() {
        let snapshot = PropsSnapshot::defaults_for(&button_schema());
        assert_eq!(snapshot.get_str("variant"), Some("contained"));
        assert_eq!(snapshot.get_bool("disabled"), Some(false));
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn test_defaults_for_empty_schema_is_empty() {
        assert!(PropsSnapshot::defaults_for(&[]).is_empty());
    }

    #[test]
    fn test_conforms_rejects_stray_key() {
        let snapshot = PropsSnapshot::new().with("color", "primary");
        assert_eq!(
            snapshot.conforms_to(&button_schema()),
            Err(SnapshotError::StrayField {
                field: "color".into()
            })
        );
    }

    #[test]
    fn test_conforms_rejects_wrong_type() {
        let snapshot = PropsSnapshot::new().with("disabled", "yes");
        assert_eq!(
            snapshot.conforms_to(&button_schema()),
            Err(SnapshotError::WrongType {
                field: "disabled".into(),
                expected: FieldKind::Boolean
            })
        );
    }

    #[test]
    fn test_conforms_allows_subset() {
        let snapshot = PropsSnapshot::new().with("disabled", true);
        assert!(snapshot.conforms_to(&button_schema()).is_ok());
    }

    #[test]
    fn test_insertion_order_does_not_affect_equality() {
        let a = PropsSnapshot::new().with("a", true).with("b", "x");
        let b = PropsSnapshot::new().with("b", "x").with("a", true);
        assert_eq!(a, b);
        assert_eq!(a.to_json(), b.to_json());
    }

    #[test]
    fn test_to_json_exports_plain_values() {
        let json = PropsSnapshot::new()
            .with("disabled", true)
            .with("variant", "text")
            .to_json();
        assert!(json.contains("\"disabled\": true"));
        assert!(json.contains("\"variant\": \"text\""));
    }
}
