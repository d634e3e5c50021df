//! Form schema types produced by inference.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target UI input category of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single line text input.
    Text,
    /// Multi line text input.
    Textarea,
    /// E-mail input.
    Email,
    /// Password input.
    Password,
    /// Telephone input.
    Tel,
    /// URL input.
    Url,
    /// Numeric input.
    Number,
    /// Range slider.
    Range,
    /// Color picker.
    Color,
    /// Date picker.
    Date,
    /// Time picker.
    Time,
    /// Checkbox.
    Checkbox,
    /// Select dropdown.
    Select,
    /// Multi-value select.
    Multiselect,
    /// Radio button group.
    Radio,
    /// File upload.
    File,
    /// Object/JSON editor or a group of nested fields.
    Object,
    /// Repeatable list editor.
    Array,
}

impl FieldKind {
    /// Generic kinds that say little about the data.
    #[inline]
    pub fn is_generic(self) -> bool {
        matches!(self, Self::Text | Self::Textarea)
    }

    /// Kinds that render a fixed option list.
    #[inline]
    pub fn has_options(self) -> bool {
        matches!(self, Self::Select | Self::Radio | Self::Multiselect)
    }

    /// Lowercase name as used in schemas.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Email => "email",
            Self::Password => "password",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Number => "number",
            Self::Range => "range",
            Self::Color => "color",
            Self::Date => "date",
            Self::Time => "time",
            Self::Checkbox => "checkbox",
            Self::Select => "select",
            Self::Multiselect => "multiselect",
            Self::Radio => "radio",
            Self::File => "file",
            Self::Object => "object",
            Self::Array => "array",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationKind {
    Required,
    Min,
    Max,
    MinLength,
    MaxLength,
    Pattern,
    Email,
    Url,
}

impl ValidationKind {
    /// The serialized name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Min => "min",
            Self::Max => "max",
            Self::MinLength => "minLength",
            Self::MaxLength => "maxLength",
            Self::Pattern => "pattern",
            Self::Email => "email",
            Self::Url => "url",
        }
    }
}

/// One validation constraint on a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRule {
    /// Constraint kind.
    #[serde(rename = "type")]
    pub kind: ValidationKind,
    /// Constraint argument (bound, length, or pattern source).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub value: Option<serde_json::Value>,
    /// Error message shown to the user.
    pub message: String,
}

impl ValidationRule {
    /// Create a rule without an argument.
    pub fn new(kind: ValidationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            value: None,
            message: message.into(),
        }
    }

    /// Create a rule with an argument.
    pub fn with_value(
        kind: ValidationKind,
        value: impl Into<serde_json::Value>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            value: Some(value.into()),
            message: message.into(),
        }
    }

    /// Deduplication key: kind plus serialized value.
    pub(crate) fn dedup_key(&self) -> (ValidationKind, String) {
        let value = self
            .value
            .as_ref()
            .map(|v| v.to_string())
            .unwrap_or_default();
        (self.kind, value)
    }
}

/// Option for select/radio fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOption {
    /// Display label.
    pub label: String,
    /// Actual value.
    pub value: serde_json::Value,
}

/// Descriptor of one generated form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
    /// Field key (dotted for flattened nested DTOs).
    pub name: String,
    /// Input kind.
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// Human label.
    pub label: String,
    /// Placeholder text.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub placeholder: Option<String>,
    /// Whether a value must be provided.
    #[serde(default)]
    pub required: bool,
    /// Help text.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    /// Initial value.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default_value: Option<serde_json::Value>,
    /// Whether the field is read only.
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub readonly: bool,
    /// Options for select/radio fields.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub options: Vec<FieldOption>,
    /// Validation rules.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub validations: Vec<ValidationRule>,
    /// Child fields of a nested object.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub fields: Vec<FieldSchema>,
}

impl FieldSchema {
    /// Create a field with a name, kind and label.
    pub fn new(name: impl Into<String>, kind: FieldKind, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            label: label.into(),
            placeholder: None,
            required: false,
            description: None,
            default_value: None,
            readonly: false,
            options: Vec::new(),
            validations: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Look up a validation rule by kind.
    #[inline]
    pub fn validation(&self, kind: ValidationKind) -> Option<&ValidationRule> {
        self.validations.iter().find(|v| v.kind == kind)
    }
}

/// A complete generated form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    /// Generated id (`form-<dto>-<timestamp>`).
    pub id: String,
    /// Source DTO name.
    pub name: String,
    /// Human title.
    pub title: String,
    /// Description from the DTO's JSDoc.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    /// Fields in property order.
    pub fields: Vec<FieldSchema>,
}

impl FormSchema {
    /// Look up a top-level field by name.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Deduplicate rules by `(kind, value)`, keeping the first occurrence.
pub fn dedup_validations(rules: Vec<ValidationRule>) -> Vec<ValidationRule> {
    let mut seen = maquette_carton::FxHashSet::default();
    rules
        .into_iter()
        .filter(|rule| seen.insert(rule.dedup_key()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_kind_serde() {
        assert_eq!(
            serde_json::to_string(&FieldKind::Multiselect).unwrap(),
            "\"multiselect\""
        );
        assert_eq!(FieldKind::Tel.to_string(), "tel");
    }

    #[test]
    fn test_validation_kind_serde() {
        assert_eq!(
            serde_json::to_string(&ValidationKind::MinLength).unwrap(),
            "\"minLength\""
        );
    }

    #[test]
    fn test_dedup_keeps_first() {
        let rules = vec![
            ValidationRule::with_value(ValidationKind::MinLength, 3, "first"),
            ValidationRule::with_value(ValidationKind::MinLength, 3, "second"),
            ValidationRule::with_value(ValidationKind::MinLength, 5, "third"),
            ValidationRule::new(ValidationKind::Required, "req"),
            ValidationRule::new(ValidationKind::Required, "req again"),
        ];
        let deduped = dedup_validations(rules);
        assert_eq!(deduped.len(), 3);
        assert_eq!(deduped[0].message, "first");
        assert_eq!(deduped[1].value, Some(json!(5)));
    }

    #[test]
    fn test_field_serializes_compactly() {
        let field = FieldSchema::new("email", FieldKind::Email, "Email");
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(
            value,
            json!({"name": "email", "type": "email", "label": "Email", "required": false})
        );
    }
}
