//! Declarative props schema
//!
//! A component's schema is an ordered list of fields. Each field names a
//! prop, the control used to edit it, and an optional validation rule.
//! Schemas are data: the form binder and preview factories never hard-code
//! field-specific behavior.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Kind of control used to edit a field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    /// Two-state toggle
    Boolean,
    /// Free text
    String,
    /// Exactly one value from the option list
    Select,
    /// Labeled boolean rendered as a compact chip + toggle pair
    ToggleChip,
}

impl FieldKind {
    /// Whether values of this kind are stored as booleans
    pub fn is_boolean(self) -> bool {
        matches!(self, FieldKind::Boolean | FieldKind::ToggleChip)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Boolean => "boolean",
            FieldKind::String => "string",
            FieldKind::Select => "select",
            FieldKind::ToggleChip => "toggle-chip",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single prop value
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Text(String),
}

impl PropValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            PropValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            PropValue::Bool(_) => None,
        }
    }

    /// Whether this value's type agrees with a field kind
    pub fn fits(&self, kind: FieldKind) -> bool {
        match self {
            PropValue::Bool(_) => kind.is_boolean(),
            PropValue::Text(_) => !kind.is_boolean(),
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Text(value)
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Bool(b) => write!(f, "{b}"),
            PropValue::Text(s) => f.write_str(s),
        }
    }
}

/// Raw input coming from a form control, before coercion to the field kind
#[derive(Clone, Debug, PartialEq)]
pub enum FieldInput {
    Toggle(bool),
    Text(String),
}

/// One entry of a select field's option list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Declared validation rule for a field.
///
/// For boolean kinds only `required` applies and means the toggle must be on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRule {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub min_length: Option<usize>,
    #[serde(default)]
    pub max_length: Option<usize>,
    /// Regular expression the whole value must match
    #[serde(default)]
    pub pattern: Option<String>,
    /// Replaces the generated message for any violation of this rule
    #[serde(default)]
    pub message: Option<String>,
}

/// A field value violating its schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{label} is required")]
    Required { label: String },
    #[error("{label} must be at least {min} characters")]
    TooShort { label: String, min: usize },
    #[error("{label} must be at most {max} characters")]
    TooLong { label: String, max: usize },
    #[error("{label} has an invalid format")]
    PatternMismatch { label: String },
    #[error("'{value}' is not an option for {label}")]
    NotAnOption { label: String, value: String },
    #[error("{label} expects a {expected} value")]
    WrongType { label: String, expected: FieldKind },
    #[error("{0}")]
    Custom(String),
}

/// A field declaration that can never be satisfied
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("select field '{field}' has no options")]
    MissingOptions { field: String },
    #[error("default for field '{field}' does not match kind {kind}")]
    DefaultKindMismatch { field: String, kind: FieldKind },
    #[error("default '{value}' for field '{field}' is not one of its options")]
    DefaultNotAnOption { field: String, value: String },
    #[error("pattern for field '{field}' is not a valid regex: {reason}")]
    InvalidPattern { field: String, reason: String },
    #[error("field name '{field}' is declared twice")]
    DuplicateField { field: String },
}

/// Schema entry for one prop
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropsFieldSchema {
    pub name: String,
    pub kind: FieldKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    /// Enum type a select's options map to in generated code
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<ValidationRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<PropValue>,
    /// Tooltip text shown next to the control
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl PropsFieldSchema {
    pub fn boolean(name: &str, label: &str) -> Self {
        Self::new(name, FieldKind::Boolean, label)
    }

    pub fn toggle_chip(name: &str, label: &str) -> Self {
        Self::new(name, FieldKind::ToggleChip, label)
    }

    pub fn string(name: &str, label: &str) -> Self {
        Self::new(name, FieldKind::String, label)
    }

    pub fn select(name: &str, label: &str, options: &[(&str, &str)]) -> Self {
        let mut field = Self::new(name, FieldKind::Select, label);
        field.options = options
            .iter()
            .map(|(value, label)| SelectOption::new(*value, *label))
            .collect();
        field
    }

    fn new(name: &str, kind: FieldKind, label: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            label: label.to_string(),
            options: Vec::new(),
            type_name: None,
            rule: None,
            default: None,
            doc: None,
        }
    }

    pub fn with_default(mut self, value: impl Into<PropValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn with_type(mut self, type_name: &str) -> Self {
        self.type_name = Some(type_name.to_string());
        self
    }

    pub fn with_rule(mut self, rule: ValidationRule) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Value a freshly selected component starts with.
    ///
    /// Booleans fall back to `false`, selects to their first option and
    /// strings to the empty string.
    pub fn default_value(&self) -> PropValue {
        if let Some(default) = &self.default {
            return default.clone();
        }
        match self.kind {
            FieldKind::Boolean | FieldKind::ToggleChip => PropValue::Bool(false),
            FieldKind::Select => PropValue::Text(
                self.options
                    .first()
                    .map(|o| o.value.clone())
                    .unwrap_or_default(),
            ),
            FieldKind::String => PropValue::Text(String::new()),
        }
    }

    /// Label of the option holding `value`, if any
    pub fn option_label(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }

    /// Check that the declaration itself is satisfiable
    pub fn check_declaration(&self) -> Result<(), SchemaError> {
        if self.kind == FieldKind::Select && self.options.is_empty() {
            return Err(SchemaError::MissingOptions {
                field: self.name.clone(),
            });
        }
        if let Some(default) = &self.default {
            if !default.fits(self.kind) {
                return Err(SchemaError::DefaultKindMismatch {
                    field: self.name.clone(),
                    kind: self.kind,
                });
            }
            if let (FieldKind::Select, PropValue::Text(value)) = (self.kind, default) {
                if self.option_label(value).is_none() {
                    return Err(SchemaError::DefaultNotAnOption {
                        field: self.name.clone(),
                        value: value.clone(),
                    });
                }
            }
        }
        if let Some(pattern) = self.rule.as_ref().and_then(|r| r.pattern.as_deref()) {
            Regex::new(pattern).map_err(|e| SchemaError::InvalidPattern {
                field: self.name.clone(),
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// Turn raw control input into a value of this field's kind
    pub fn coerce(&self, input: FieldInput) -> Result<PropValue, FieldError> {
        match (self.kind.is_boolean(), input) {
            (true, FieldInput::Toggle(b)) => Ok(PropValue::Bool(b)),
            (true, FieldInput::Text(s)) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "on" | "yes" => Ok(PropValue::Bool(true)),
                "false" | "0" | "off" | "no" | "" => Ok(PropValue::Bool(false)),
                _ => Err(self.wrong_type()),
            },
            (false, FieldInput::Text(s)) => Ok(PropValue::Text(s)),
            (false, FieldInput::Toggle(_)) => Err(self.wrong_type()),
        }
    }

    /// Run the type check, option membership and declared rule against `value`
    pub fn validate(&self, value: &PropValue) -> Result<(), FieldError> {
        if !value.fits(self.kind) {
            return Err(self.wrong_type());
        }

        if let (FieldKind::Select, PropValue::Text(v)) = (self.kind, value) {
            if self.option_label(v).is_none() {
                return Err(FieldError::NotAnOption {
                    label: self.label.clone(),
                    value: v.clone(),
                });
            }
        }

        let Some(rule) = &self.rule else {
            return Ok(());
        };

        self.check_rule(rule, value).map_err(|e| match &rule.message {
            Some(message) => FieldError::Custom(message.clone()),
            None => e,
        })
    }

    fn check_rule(&self, rule: &ValidationRule, value: &PropValue) -> Result<(), FieldError> {
        let label = || self.label.clone();
        match value {
            PropValue::Bool(b) => {
                if rule.required && !b {
                    return Err(FieldError::Required { label: label() });
                }
            }
            PropValue::Text(text) => {
                if rule.required && text.trim().is_empty() {
                    return Err(FieldError::Required { label: label() });
                }
                let len = text.chars().count();
                if let Some(min) = rule.min_length {
                    // An empty optional field is allowed below the minimum
                    if len < min && !(len == 0 && !rule.required) {
                        return Err(FieldError::TooShort {
                            label: label(),
                            min,
                        });
                    }
                }
                if let Some(max) = rule.max_length {
                    if len > max {
                        return Err(FieldError::TooLong {
                            label: label(),
                            max,
                        });
                    }
                }
                if let Some(pattern) = &rule.pattern {
                    if !text.is_empty() {
                        let matches = Regex::new(&format!("^(?:{pattern})$"))
                            .map(|re| re.is_match(text))
                            .unwrap_or(false);
                        if !matches {
                            return Err(FieldError::PatternMismatch { label: label() });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn wrong_type(&self) -> FieldError {
        FieldError::WrongType {
            label: self.label.clone(),
            expected: self.kind,
        }
    }
}

/// Check every field of a schema, including name uniqueness
pub fn check_schema(fields: &[PropsFieldSchema]) -> Result<(), SchemaError> {
    for (i, field) in fields.iter().enumerate() {
        if fields[..i].iter().any(|f| f.name == field.name) {
            return Err(SchemaError::DuplicateField {
                field: field.name.clone(),
            });
        }
        field.check_declaration()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant_field() -> PropsFieldSchema {
        PropsFieldSchema::select(
            "variant",
            "Variant",
            &[
                ("contained", "Contained"),
                ("outlined", "Outlined"),
                ("text", "Text"),
            ],
        )
    }

    #[test]
    fn test_default_value_falls_back_per_kind() {
        assert_eq!(
            PropsFieldSchema::boolean("disabled", "Disabled").default_value(),
            PropValue::Bool(false)
        );
        assert_eq!(
            variant_field().default_value(),
            PropValue::Text("contained".into())
        );
        assert_eq!(
            PropsFieldSchema::string("label", "Label").default_value(),
            PropValue::Text(String::new())
        );
        assert_eq!(
            variant_field().with_default("text").default_value(),
            PropValue::Text("text".into())
        );
    }

    #[test]
    fn test_select_without_options_is_rejected() {
        let field = PropsFieldSchema::select("variant", "Variant", &[]);
        assert_eq!(
            field.check_declaration(),
            Err(SchemaError::MissingOptions {
                field: "variant".into()
            })
        );
    }

    #[test]
    fn test_default_must_match_kind_and_options() {
        let field = PropsFieldSchema::boolean("disabled", "Disabled").with_default("yes");
        assert!(matches!(
            field.check_declaration(),
            Err(SchemaError::DefaultKindMismatch { .. })
        ));

        let field = variant_field().with_default("giant");
        assert!(matches!(
            field.check_declaration(),
            Err(SchemaError::DefaultNotAnOption { .. })
        ));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let field = PropsFieldSchema::string("label", "Label").with_rule(ValidationRule {
            pattern: Some("([a-z".into()),
            ..Default::default()
        });
        assert!(matches!(
            field.check_declaration(),
            Err(SchemaError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_duplicate_field_names_are_rejected() {
        let fields = vec![
            PropsFieldSchema::boolean("disabled", "Disabled"),
            PropsFieldSchema::toggle_chip("disabled", "Disabled again"),
        ];
        assert_eq!(
            check_schema(&fields),
            Err(SchemaError::DuplicateField {
                field: "disabled".into()
            })
        );
    }

    #[test]
    fn test_coerce_boolean_from_text() {
        let field = PropsFieldSchema::toggle_chip("show_icon", "Show Icon");
        assert_eq!(
            field.coerce(FieldInput::Text("on".into())),
            Ok(PropValue::Bool(true))
        );
        assert_eq!(
            field.coerce(FieldInput::Text("0".into())),
            Ok(PropValue::Bool(false))
        );
        assert!(field.coerce(FieldInput::Text("maybe".into())).is_err());
    }

    #[test]
    fn test_coerce_toggle_into_text_field_fails() {
        let field = PropsFieldSchema::string("label", "Label");
        assert_eq!(
            field.coerce(FieldInput::Toggle(true)),
            Err(FieldError::WrongType {
                label: "Label".into(),
                expected: FieldKind::String
            })
        );
    }

    #[test]
    fn test_select_value_must_be_an_option() {
        let field = variant_field();
        assert!(field.validate(&PropValue::Text("outlined".into())).is_ok());
        assert_eq!(
            field.validate(&PropValue::Text("giant".into())),
            Err(FieldError::NotAnOption {
                label: "Variant".into(),
                value: "giant".into()
            })
        );
    }

    #[test]
    fn test_string_rules() {
        let field = PropsFieldSchema::string("label", "Label").with_rule(ValidationRule {
            required: true,
            max_length: Some(5),
            ..Default::default()
        });
        assert_eq!(
            field.validate(&PropValue::Text("  ".into())),
            Err(FieldError::Required {
                label: "Label".into()
            })
        );
        assert_eq!(
            field.validate(&PropValue::Text("too long".into())),
            Err(FieldError::TooLong {
                label: "Label".into(),
                max: 5
            })
        );
        assert!(field.validate(&PropValue::Text("ok".into())).is_ok());
    }

    #[test]
    fn test_min_length_skips_empty_optional_value() {
        let field = PropsFieldSchema::string("helper", "Helper").with_rule(ValidationRule {
            min_length: Some(3),
            ..Default::default()
        });
        assert!(field.validate(&PropValue::Text(String::new())).is_ok());
        assert!(field.validate(&PropValue::Text("ab".into())).is_err());
    }

    #[test]
    fn test_pattern_matches_whole_value() {
        let field = PropsFieldSchema::string("id", "Id").with_rule(ValidationRule {
            pattern: Some("[a-z]+".into()),
            ..Default::default()
        });
        assert!(field.validate(&PropValue::Text("abc".into())).is_ok());
        assert_eq!(
            field.validate(&PropValue::Text("abc1".into())),
            Err(FieldError::PatternMismatch { label: "Id".into() })
        );
    }

    #[test]
    fn test_custom_message_replaces_generated_one() {
        let field = PropsFieldSchema::string("label", "Label").with_rule(ValidationRule {
            required: true,
            message: Some("Give the button a name".into()),
            ..Default::default()
        });
        let err = field.validate(&PropValue::Text(String::new())).unwrap_err();
        assert_eq!(err.to_string(), "Give the button a name");
    }

    #[test]
    fn test_required_boolean_must_be_on() {
        let field = PropsFieldSchema::boolean("accept", "Accept").with_rule(ValidationRule {
            required: true,
            ..Default::default()
        });
        assert!(field.validate(&PropValue::Bool(false)).is_err());
        assert!(field.validate(&PropValue::Bool(true)).is_ok());
    }

    #[test]
    fn test_prop_value_deserializes_untagged() {
        let value: PropValue = serde_yaml::from_str("true").unwrap();
        assert_eq!(value, PropValue::Bool(true));
        let value: PropValue = serde_yaml::from_str("contained").unwrap();
        assert_eq!(value, PropValue::Text("contained".into()));
    }
}
