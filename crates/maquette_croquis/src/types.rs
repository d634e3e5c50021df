//! Metadata extracted from DTO declarations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of declaration a DTO was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DtoKind {
    /// `interface Foo { ... }`
    Interface,
    /// `type Foo = { ... }`
    Type,
    /// `class Foo { ... }`
    Class,
}

/// Coarse classification of a property type.
///
/// Anything that is not a primitive or a recognised complex shape keeps its
/// raw text in [`PropertyType::Other`] (e.g. a reference to another DTO).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyType {
    String,
    Number,
    Boolean,
    Date,
    Array,
    Union,
    Object,
    Other(String),
}

impl PropertyType {
    /// The name used in schemas and rule patterns.
    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "Date",
            Self::Array => "array",
            Self::Union => "union",
            Self::Object => "object",
            Self::Other(raw) => raw,
        }
    }

    /// Whether this is a primitive scalar (`string`, `number`, `boolean`, `Date`).
    #[inline]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::String | Self::Number | Self::Boolean | Self::Date)
    }
}

impl From<String> for PropertyType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "string" => Self::String,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            "Date" => Self::Date,
            "array" => Self::Array,
            "union" => Self::Union,
            "object" => Self::Object,
            _ => Self::Other(value),
        }
    }
}

impl From<PropertyType> for String {
    fn from(value: PropertyType) -> Self {
        match value {
            PropertyType::Other(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One property of a DTO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyMetadata {
    /// Property name.
    pub name: String,
    /// Coarse type category.
    #[serde(rename = "type")]
    pub ty: PropertyType,
    /// Type text as written in the source. Never empty.
    pub raw_type: String,
    /// Declared with `?`.
    #[serde(default)]
    pub optional: bool,
    /// Declared with `readonly`.
    #[serde(default)]
    pub readonly: bool,
    /// Union contains `null` or `undefined`.
    #[serde(default)]
    pub nullable: bool,
    /// Members of a literal union (`'a' | 'b'`).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub possible_values: Option<Vec<serde_json::Value>>,
    /// Coarse element type of an array.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub array_type: Option<PropertyType>,
    /// JSDoc text before the first tag.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    /// Full JSDoc body, tags included.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub jsdoc: Option<String>,
    /// Raw initializer text (`= ...`).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default_value: Option<String>,
}

impl PropertyMetadata {
    /// Create a property from a name and a raw type, classifying the type.
    pub fn new(name: impl Into<String>, raw_type: impl Into<String>) -> Self {
        let raw_type = raw_type.into();
        let info = crate::analyzer::classify_raw_type(&raw_type);
        Self {
            name: name.into(),
            ty: info.ty,
            raw_type,
            optional: false,
            readonly: false,
            nullable: info.nullable,
            possible_values: info.possible_values,
            array_type: info.array_type,
            description: None,
            jsdoc: None,
            default_value: None,
        }
    }

    /// Mark as optional.
    #[inline]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Attach a JSDoc body; the description is derived from it.
    pub fn with_jsdoc(mut self, jsdoc: impl Into<String>) -> Self {
        let jsdoc = jsdoc.into();
        self.description = crate::analyzer::jsdoc_description(&jsdoc);
        self.jsdoc = Some(jsdoc);
        self
    }

    /// Whether the property has literal union members.
    #[inline]
    pub fn has_possible_values(&self) -> bool {
        self.possible_values.as_ref().is_some_and(|v| !v.is_empty())
    }

    /// Number of literal union members.
    #[inline]
    pub fn possible_value_count(&self) -> usize {
        self.possible_values.as_ref().map_or(0, Vec::len)
    }
}

/// One analyzed type declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DtoMetadata {
    /// Declared name.
    pub name: String,
    /// Declaration kind.
    pub kind: DtoKind,
    /// Properties in source order.
    pub properties: Vec<PropertyMetadata>,
    /// Parent type names from `extends`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub extends: Option<Vec<String>>,
    /// JSDoc preceding the declaration.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
}

impl DtoMetadata {
    /// Create an empty DTO.
    pub fn new(name: impl Into<String>, kind: DtoKind) -> Self {
        Self {
            name: name.into(),
            kind,
            properties: Vec::new(),
            extends: None,
            description: None,
        }
    }

    /// Add a property.
    #[inline]
    pub fn with_property(mut self, property: PropertyMetadata) -> Self {
        self.properties.push(property);
        self
    }

    /// Look up a property by name.
    #[inline]
    pub fn property(&self, name: &str) -> Option<&PropertyMetadata> {
        self.properties.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_type_serde() {
        let json = serde_json::to_string(&PropertyType::Date).unwrap();
        assert_eq!(json, "\"Date\"");

        let other: PropertyType = serde_json::from_str("\"Address\"").unwrap();
        assert_eq!(other, PropertyType::Other("Address".to_string()));

        let number: PropertyType = serde_json::from_str("\"number\"").unwrap();
        assert_eq!(number, PropertyType::Number);
    }

    #[test]
    fn test_property_builder() {
        let prop = PropertyMetadata::new("role", "'admin' | 'user'").optional();
        assert_eq!(prop.ty, PropertyType::Union);
        assert!(prop.optional);
        assert_eq!(prop.possible_value_count(), 2);
    }

    #[test]
    fn test_property_serializes_type_key() {
        let prop = PropertyMetadata::new("age", "number");
        let value = serde_json::to_value(&prop).unwrap();
        assert_eq!(value["type"], "number");
        assert_eq!(value["rawType"], "number");
        assert!(value.get("possibleValues").is_none());
    }
}
