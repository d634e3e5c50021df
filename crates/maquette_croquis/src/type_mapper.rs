//! Type Mapper - maps a property to a form field kind with a confidence score.
//!
//! Resolution runs in two stages:
//!
//! 1. A name pre-pass: a fixed keyword table tested against the property name
//!    (case-insensitive substring). The first hit wins at confidence `0.85`.
//! 2. A rule table: custom rules merged with the defaults, stable-sorted by
//!    descending priority. The first rule whose pattern matches the coarse or
//!    raw type, and whose condition holds, wins at `priority / 100`.
//!
//! When nothing matches, the fallback is a `text` field at confidence `0.3`.

use crate::error::InferenceError;
use crate::schema::FieldKind;
use crate::types::{PropertyMetadata, PropertyType};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Confidence assigned to name pre-pass hits.
pub const NAME_HINT_CONFIDENCE: f64 = 0.85;

/// Confidence assigned to the fallback text field.
pub const FALLBACK_CONFIDENCE: f64 = 0.3;

/// Keyword table for the name pre-pass, in evaluation order.
const NAME_HINTS: &[(&[&str], FieldKind)] = &[
    (&["email"], FieldKind::Email),
    (&["password", "senha"], FieldKind::Password),
    (&["phone", "tel"], FieldKind::Tel),
    (&["url", "website"], FieldKind::Url),
    (&["color"], FieldKind::Color),
    (&["date"], FieldKind::Date),
    (&["time"], FieldKind::Time),
    (&["description", "bio"], FieldKind::Textarea),
    (&["age", "rating"], FieldKind::Range),
];

static DEFAULT_RULES: Lazy<Vec<TypeMappingRule>> = Lazy::new(|| {
    vec![
        TypeMappingRule::exact("boolean", FieldKind::Checkbox, 90),
        TypeMappingRule::exact("Date", FieldKind::Date, 90),
        TypeMappingRule::exact("union", FieldKind::Radio, 85)
            .when(|p| p.has_possible_values() && p.possible_value_count() <= 4),
        TypeMappingRule::exact("union", FieldKind::Select, 85)
            .when(|p| p.possible_value_count() > 4),
        TypeMappingRule::from_regex(Regex::new(r"^(File|Blob)(\[\])?$").unwrap(), FieldKind::File, 80),
        TypeMappingRule::exact("number", FieldKind::Number, 80),
        TypeMappingRule::exact("string", FieldKind::Text, 70),
        TypeMappingRule::exact("array", FieldKind::Multiselect, 65)
            .when(|p| p.array_type == Some(PropertyType::String)),
        TypeMappingRule::exact("array", FieldKind::Array, 60),
        TypeMappingRule::from_regex(Regex::new(r"^Record<").unwrap(), FieldKind::Object, 50),
        TypeMappingRule::exact("object", FieldKind::Object, 50),
    ]
});

/// Predicate attached to a rule.
pub type RuleCondition = Arc<dyn Fn(&PropertyMetadata) -> bool + Send + Sync>;

/// What a rule's pattern is compared with.
#[derive(Debug, Clone)]
pub enum RulePattern {
    /// Exact string equality.
    Exact(String),
    /// Regular expression match.
    Regex(Regex),
}

impl RulePattern {
    #[inline]
    fn matches(&self, text: &str) -> bool {
        match self {
            Self::Exact(expected) => expected == text,
            Self::Regex(re) => re.is_match(text),
        }
    }
}

/// One entry of the mapping table.
#[derive(Clone)]
pub struct TypeMappingRule {
    /// Pattern tested against the coarse and the raw type.
    pub pattern: RulePattern,
    /// Field kind produced when the rule fires.
    pub field_type: FieldKind,
    /// Higher wins.
    pub priority: u32,
    /// Extra predicate over the property.
    pub condition: Option<RuleCondition>,
}

impl fmt::Debug for TypeMappingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMappingRule")
            .field("pattern", &self.pattern)
            .field("field_type", &self.field_type)
            .field("priority", &self.priority)
            .field("condition", &self.condition.is_some())
            .finish()
    }
}

impl TypeMappingRule {
    /// Rule matching a type name exactly.
    pub fn exact(pattern: impl Into<String>, field_type: FieldKind, priority: u32) -> Self {
        Self {
            pattern: RulePattern::Exact(pattern.into()),
            field_type,
            priority,
            condition: None,
        }
    }

    /// Rule matching a regular expression.
    pub fn regex(pattern: &str, field_type: FieldKind, priority: u32) -> Result<Self, InferenceError> {
        let re = Regex::new(pattern).map_err(|e| InferenceError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::from_regex(re, field_type, priority))
    }

    /// Rule from an already compiled regex.
    pub fn from_regex(re: Regex, field_type: FieldKind, priority: u32) -> Self {
        Self {
            pattern: RulePattern::Regex(re),
            field_type,
            priority,
            condition: None,
        }
    }

    /// Attach a condition.
    pub fn when(
        mut self,
        condition: impl Fn(&PropertyMetadata) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.condition = Some(Arc::new(condition));
        self
    }

    /// Whether the rule fires for `property`.
    pub fn fires(&self, property: &PropertyMetadata) -> bool {
        let pattern_hit = self.pattern.matches(property.ty.as_str())
            || self.pattern.matches(&property.raw_type);
        pattern_hit && self.condition.as_ref().map_or(true, |cond| cond(property))
    }

    /// Confidence granted when this rule wins.
    #[inline]
    pub fn confidence(&self) -> f64 {
        (f64::from(self.priority) / 100.0).clamp(0.0, 1.0)
    }
}

/// Serializable rule description, as found in configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSpec {
    /// Exact type name, or a regex when `regex` is set.
    pub pattern: String,
    /// Treat `pattern` as a regular expression.
    #[serde(default)]
    pub regex: bool,
    /// Resulting field kind.
    pub field_type: FieldKind,
    /// Rule priority.
    pub priority: u32,
}

impl RuleSpec {
    /// Compile into a rule.
    pub fn compile(&self) -> Result<TypeMappingRule, InferenceError> {
        if self.regex {
            TypeMappingRule::regex(&self.pattern, self.field_type, self.priority)
        } else {
            Ok(TypeMappingRule::exact(
                self.pattern.clone(),
                self.field_type,
                self.priority,
            ))
        }
    }
}

/// Where a resolution came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResolutionSource {
    /// Name keyword pre-pass.
    NameHint,
    /// A mapping rule.
    Rule,
    /// Nothing matched.
    Fallback,
}

/// Result of resolving a property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeResolution {
    pub kind: FieldKind,
    pub confidence: f64,
    pub source: ResolutionSource,
}

/// Name keyword lookup used by the pre-pass.
pub fn name_hint(name: &str) -> Option<FieldKind> {
    let lower = name.to_lowercase();
    NAME_HINTS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, kind)| *kind)
}

/// Rule table plus name pre-pass.
#[derive(Debug, Clone)]
pub struct TypeMapper {
    rules: Vec<TypeMappingRule>,
}

impl Default for TypeMapper {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl TypeMapper {
    /// Merge `custom` rules with the default table.
    ///
    /// Custom rules come first, so they win ties with default rules of the
    /// same priority.
    pub fn new(custom: &[TypeMappingRule]) -> Self {
        let mut rules: Vec<TypeMappingRule> =
            custom.iter().chain(DEFAULT_RULES.iter()).cloned().collect();
        rules.sort_by(|a, b| b.priority.cmp(&a.priority));
        Self { rules }
    }

    /// Rules in evaluation order.
    #[inline]
    pub fn rules(&self) -> &[TypeMappingRule] {
        &self.rules
    }

    /// Resolve the field kind for `property`.
    pub fn resolve(&self, property: &PropertyMetadata) -> TypeResolution {
        if takes_name_hint(property) {
            if let Some(kind) = name_hint(&property.name) {
                return TypeResolution {
                    kind,
                    confidence: NAME_HINT_CONFIDENCE,
                    source: ResolutionSource::NameHint,
                };
            }
        }

        self.rules
            .iter()
            .find(|rule| rule.fires(property))
            .map(|rule| TypeResolution {
                kind: rule.field_type,
                confidence: rule.confidence(),
                source: ResolutionSource::Rule,
            })
            .unwrap_or(TypeResolution {
                kind: FieldKind::Text,
                confidence: FALLBACK_CONFIDENCE,
                source: ResolutionSource::Fallback,
            })
    }
}

/// Booleans, arrays, objects and literal unions keep their structural kind.
#[inline]
fn takes_name_hint(property: &PropertyMetadata) -> bool {
    !matches!(
        property.ty,
        PropertyType::Boolean | PropertyType::Array | PropertyType::Object
    ) && !property.has_possible_values()
}
