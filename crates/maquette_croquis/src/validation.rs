//! Validation Inferrer - derives validation rules for a property.
//!
//! Three sources are concatenated in a fixed order and then deduplicated by
//! `(kind, value)`, first occurrence winning:
//!
//! 1. JSDoc tags (`@required`, `@min`, `@max`, `@minLength`, `@maxLength`,
//!    `@pattern`, `@email`, `@url`)
//! 2. Naming conventions (`email`, `cpf`, `cnpj`, `cep`, `password`, ...)
//! 3. The type itself (required-ness, numeric bounds)
//!
//! Rule messages are user-facing and Brazilian Portuguese; warnings are English.

use crate::schema::{dedup_validations, ValidationKind, ValidationRule};
use crate::types::{PropertyMetadata, PropertyType};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Largest integer a JavaScript number holds exactly.
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

static FLAG_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@(required|email|url)\b").unwrap());

static NUMERIC_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@(min|max|minLength|maxLength)\s+(-?\d+(?:\.\d+)?)").unwrap()
});

static PATTERN_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@pattern\s+/([^\n]+)/([a-z]*)").unwrap());

const MSG_REQUIRED: &str = "Este campo é obrigatório";
const MSG_EMAIL: &str = "E-mail inválido";
const MSG_URL: &str = "URL inválida";

/// Naming conventions: keywords, pattern, message.
const NAMING_PATTERNS: &[(&[&str], &str, &str)] = &[
    (&["cpf"], r"^\d{3}\.\d{3}\.\d{3}-\d{2}$", "CPF inválido"),
    (&["cnpj"], r"^\d{2}\.\d{3}\.\d{3}/\d{4}-\d{2}$", "CNPJ inválido"),
    (&["cep"], r"^\d{5}-\d{3}$", "CEP inválido"),
    (
        &["phone", "telefone", "celular"],
        r"^\(?\d{2}\)?\s?\d{4,5}-?\d{4}$",
        "Telefone inválido",
    ),
    (
        &["password", "senha"],
        r"^(?=.*[A-Za-z])(?=.*\d).{8,}$",
        "A senha deve ter pelo menos 8 caracteres, com letras e números",
    ),
    (
        &["username"],
        r"^[a-zA-Z0-9_]{3,20}$",
        "Use de 3 a 20 letras, números ou _",
    ),
    (
        &["slug"],
        r"^[a-z0-9]+(?:-[a-z0-9]+)*$",
        "Use apenas letras minúsculas, números e hífens",
    ),
    (&["color"], r"^#(?:[0-9a-fA-F]{3}){1,2}$", "Cor inválida"),
];

/// Which sources the inferrer consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationConfig {
    /// Parse JSDoc tags.
    #[serde(default = "default_true")]
    pub from_jsdoc: bool,
    /// Apply naming conventions.
    #[serde(default = "default_true")]
    pub from_naming: bool,
    /// Apply type based rules.
    #[serde(default = "default_true")]
    pub from_type: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            from_jsdoc: true,
            from_naming: true,
            from_type: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Rules inferred for one property plus any problems met on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InferredValidations {
    pub rules: Vec<ValidationRule>,
    pub warnings: Vec<String>,
}

/// Infer validation rules for `property`.
pub fn infer_validations(property: &PropertyMetadata, config: &ValidationConfig) -> InferredValidations {
    let mut rules = Vec::new();
    let mut warnings = Vec::new();

    if config.from_jsdoc {
        if let Some(doc) = property.jsdoc.as_deref().or(property.description.as_deref()) {
            rules.extend(jsdoc_rules(&property.name, doc, &mut warnings));
        }
    }
    if config.from_naming {
        rules.extend(naming_rules(&property.name));
    }
    if config.from_type {
        rules.extend(type_rules(property));
    }

    InferredValidations {
        rules: dedup_validations(rules),
        warnings,
    }
}

/// Rules declared through JSDoc tags, in tag order.
fn jsdoc_rules(name: &str, doc: &str, warnings: &mut Vec<String>) -> Vec<ValidationRule> {
    let mut found: Vec<(usize, ValidationRule)> = Vec::new();

    for cap in FLAG_TAG_RE.captures_iter(doc) {
        let (Some(whole), Some(tag)) = (cap.get(0), cap.get(1)) else {
            continue;
        };
        let rule = match tag.as_str() {
            "required" => ValidationRule::new(ValidationKind::Required, MSG_REQUIRED),
            "email" => ValidationRule::new(ValidationKind::Email, MSG_EMAIL),
            _ => ValidationRule::new(ValidationKind::Url, MSG_URL),
        };
        found.push((whole.start(), rule));
    }

    for cap in NUMERIC_TAG_RE.captures_iter(doc) {
        let (Some(whole), Some(tag), Some(raw)) = (cap.get(0), cap.get(1), cap.get(2)) else {
            continue;
        };
        let Some(value) = parse_number(raw.as_str()) else {
            continue;
        };
        let n = raw.as_str();
        let (kind, message) = match tag.as_str() {
            "min" => (ValidationKind::Min, format!("O valor mínimo é {n}")),
            "max" => (ValidationKind::Max, format!("O valor máximo é {n}")),
            "minLength" => (ValidationKind::MinLength, format!("Mínimo de {n} caracteres")),
            _ => (ValidationKind::MaxLength, format!("Máximo de {n} caracteres")),
        };
        found.push((whole.start(), ValidationRule::with_value(kind, value, message)));
    }

    for cap in PATTERN_TAG_RE.captures_iter(doc) {
        let (Some(whole), Some(source)) = (cap.get(0), cap.get(1)) else {
            continue;
        };
        let flags = cap.get(2).map_or("", |m| m.as_str());
        let source = source.as_str();
        // Only i, m and s change matching; g, u and y are accepted as-is.
        let inline: String = flags.chars().filter(|f| matches!(f, 'i' | 'm' | 's')).collect();
        let check = if inline.is_empty() {
            source.to_string()
        } else {
            format!("(?{inline}){source}")
        };
        // Flagged patterns keep their literal form so the flags survive.
        let value = if flags.is_empty() {
            source.to_string()
        } else {
            format!("/{source}/{flags}")
        };

        match Regex::new(&check) {
            Ok(_) => found.push((
                whole.start(),
                ValidationRule::with_value(ValidationKind::Pattern, value, "Formato inválido"),
            )),
            Err(e) => {
                tracing::debug!(property = name, pattern = source, "invalid @pattern: {e}");
                warnings.push(format!(
                    "Ignoring invalid @pattern /{source}/ on '{name}': {e}"
                ));
            }
        }
    }

    found.sort_by_key(|(pos, _)| *pos);
    found.into_iter().map(|(_, rule)| rule).collect()
}

/// Rules implied by the property name.
fn naming_rules(name: &str) -> Vec<ValidationRule> {
    let lower = name.to_lowercase();
    let mut rules = Vec::new();

    if lower.contains("email") {
        rules.push(ValidationRule::new(ValidationKind::Email, MSG_EMAIL));
    }

    for (keywords, pattern, message) in NAMING_PATTERNS {
        if keywords.iter().any(|k| lower.contains(k)) {
            rules.push(ValidationRule::with_value(
                ValidationKind::Pattern,
                *pattern,
                *message,
            ));
        }
    }

    if lower.contains("url") || lower.contains("website") {
        rules.push(ValidationRule::new(ValidationKind::Url, MSG_URL));
    }

    rules
}

/// Rules implied by the type and modifiers.
fn type_rules(property: &PropertyMetadata) -> Vec<ValidationRule> {
    let mut rules = Vec::new();

    if !property.optional && !property.nullable {
        rules.push(ValidationRule::new(ValidationKind::Required, MSG_REQUIRED));
    }
    if property.ty == PropertyType::Number {
        rules.push(ValidationRule::with_value(
            ValidationKind::Max,
            MAX_SAFE_INTEGER,
            "Valor acima do máximo permitido",
        ));
    }

    rules
}

fn parse_number(raw: &str) -> Option<Value> {
    if let Ok(int) = raw.parse::<i64>() {
        return Some(Value::from(int));
    }
    raw.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn infer(property: &PropertyMetadata) -> Vec<ValidationRule> {
        infer_validations(property, &ValidationConfig::default()).rules
    }

    fn kinds(rules: &[ValidationRule]) -> Vec<ValidationKind> {
        rules.iter().map(|r| r.kind).collect()
    }

    #[test]
    fn test_jsdoc_min_length() {
        let property = PropertyMetadata::new("name", "string").with_jsdoc("@minLength 3");
        let rules = infer(&property);
        assert_eq!(
            kinds(&rules),
            vec![ValidationKind::MinLength, ValidationKind::Required]
        );
        assert_eq!(rules[0].value, Some(json!(3)));
    }

    #[test]
    fn test_jsdoc_tags_in_order() {
        let property = PropertyMetadata::new("score", "number")
            .optional()
            .with_jsdoc("Score.\n@max 10\n@min 0\n@required");
        let rules = infer(&property);
        assert_eq!(
            kinds(&rules),
            vec![
                ValidationKind::Max,
                ValidationKind::Min,
                ValidationKind::Required,
                ValidationKind::Max,
            ]
        );
        assert_eq!(rules[0].value, Some(json!(10)));
        assert_eq!(rules[3].value, Some(json!(MAX_SAFE_INTEGER)));
    }

    #[test]
    fn test_jsdoc_email_deduplicates_naming() {
        let property = PropertyMetadata::new("email", "string").with_jsdoc("@email");
        let rules = infer(&property);
        assert_eq!(
            kinds(&rules),
            vec![ValidationKind::Email, ValidationKind::Required]
        );
    }

    #[test]
    fn test_jsdoc_pattern() {
        let property =
            PropertyMetadata::new("code", "string").with_jsdoc("@pattern /^[A-Z]{2}\\d+$/");
        let rules = infer(&property);
        assert_eq!(rules[0].kind, ValidationKind::Pattern);
        assert_eq!(rules[0].value, Some(json!("^[A-Z]{2}\\d+$")));
    }

    #[test]
    fn test_jsdoc_pattern_with_flags() {
        let property = PropertyMetadata::new("code", "string").with_jsdoc("@pattern /^[a-z]+$/gi");
        let rules = infer(&property);
        assert_eq!(rules[0].value, Some(json!("/^[a-z]+$/gi")));
    }

    #[test]
    fn test_messages_pt_br_warnings_en() {
        let property = PropertyMetadata::new("code", "string").with_jsdoc("@pattern /([a-z/");
        let inferred = infer_validations(&property, &ValidationConfig::default());
        assert_eq!(inferred.rules[0].message, "Este campo é obrigatório");
        assert!(inferred.warnings[0].starts_with("Ignoring invalid @pattern"));
    }

    #[test]
    fn test_invalid_pattern_becomes_warning() {
        let property = PropertyMetadata::new("code", "string").with_jsdoc("@pattern /([a-z/");
        let inferred = infer_validations(&property, &ValidationConfig::default());
        assert!(inferred.rules.iter().all(|r| r.kind != ValidationKind::Pattern));
        assert_eq!(inferred.warnings.len(), 1);
        assert!(inferred.warnings[0].contains("code"));
    }

    #[test]
    fn test_naming_conventions() {
        let cpf = infer(&PropertyMetadata::new("cpf", "string").optional());
        assert_eq!(cpf.len(), 1);
        assert_eq!(cpf[0].message, "CPF inválido");

        let senha = infer(&PropertyMetadata::new("senha", "string").optional());
        assert_eq!(senha[0].kind, ValidationKind::Pattern);

        let site = infer(&PropertyMetadata::new("website", "string").optional());
        assert_eq!(kinds(&site), vec![ValidationKind::Url]);
    }

    #[test]
    fn test_nullable_is_not_required() {
        let rules = infer(&PropertyMetadata::new("nickname", "string | null"));
        assert!(rules.is_empty());
    }

    #[test]
    fn test_sources_can_be_disabled() {
        let property = PropertyMetadata::new("email", "string").with_jsdoc("@minLength 5");
        let config = ValidationConfig {
            from_jsdoc: false,
            from_naming: true,
            from_type: false,
        };
        let rules = infer_validations(&property, &config).rules;
        assert_eq!(kinds(&rules), vec![ValidationKind::Email]);
    }
}
