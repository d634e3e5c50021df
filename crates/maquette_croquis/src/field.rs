//! Field Inferrer - turns one property into a complete form field.

use crate::analyzer::{parse_literal, resolve_inherited};
use crate::schema::{dedup_validations, FieldKind, FieldOption, FieldSchema, ValidationKind};
use crate::type_mapper::{ResolutionSource, TypeMapper};
use crate::types::{DtoMetadata, PropertyMetadata, PropertyType};
use crate::validation::{infer_validations, ValidationConfig};
use maquette_carton::naming::to_title_words;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Custom label generator.
pub type LabelTransform = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Placeholders for well-known field names (lowercased).
const PLACEHOLDERS: &[(&str, &str)] = &[
    ("email", "seu@email.com"),
    ("password", "Digite sua senha"),
    ("senha", "Digite sua senha"),
    ("phone", "(00) 00000-0000"),
    ("telefone", "(00) 00000-0000"),
    ("celular", "(00) 00000-0000"),
    ("cpf", "000.000.000-00"),
    ("cnpj", "00.000.000/0000-00"),
    ("cep", "00000-000"),
    ("name", "Digite seu nome"),
    ("nome", "Digite seu nome"),
    ("username", "Digite seu nome de usuário"),
    ("url", "https://"),
    ("website", "https://"),
    ("date", "dd/mm/aaaa"),
    ("data", "dd/mm/aaaa"),
];

/// How properties typed as another DTO are expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexStrategy {
    /// Inline the child's fields with dotted names.
    #[default]
    Flatten,
    /// One object field holding the child's fields.
    Nested,
    /// One object field edited as raw JSON.
    Json,
}

/// Output of inference for one property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferredFieldResult {
    /// Generated field.
    pub field: FieldSchema,
    /// Heuristic certainty in `[0, 1]`.
    pub confidence: f64,
    /// Problems met while inferring this field.
    pub warnings: Vec<String>,
    /// Property the field was generated from.
    pub property: PropertyMetadata,
}

/// State threaded through field inference.
#[derive(Clone)]
pub struct InferenceContext<'a> {
    /// Current nesting depth.
    pub depth: usize,
    /// Depth at which DTO references stop being expanded.
    pub max_depth: usize,
    /// Expansion strategy for DTO references.
    pub strategy: ComplexStrategy,
    /// Type mapper with custom rules merged in.
    pub mapper: &'a TypeMapper,
    /// Attach Validation Inferrer output to each field.
    pub attach_validations: bool,
    /// Sources consulted when attaching validations.
    pub validation: ValidationConfig,
    /// Custom label generator.
    pub label_transform: Option<&'a LabelTransform>,
    /// DTOs available for expanding references.
    pub known_dtos: &'a [DtoMetadata],
    /// Merge inherited properties of referenced DTOs.
    pub include_inherited: bool,
    /// Property names (top-level or dotted) to skip.
    pub ignore_fields: &'a [String],
}

impl<'a> InferenceContext<'a> {
    /// Root context with default settings.
    pub fn new(mapper: &'a TypeMapper) -> Self {
        Self {
            depth: 0,
            max_depth: 3,
            strategy: ComplexStrategy::default(),
            mapper,
            attach_validations: true,
            validation: ValidationConfig::default(),
            label_transform: None,
            known_dtos: &[],
            include_inherited: true,
            ignore_fields: &[],
        }
    }

    fn child(&self) -> Self {
        Self {
            depth: self.depth + 1,
            ..self.clone()
        }
    }

    fn label_for(&self, name: &str) -> String {
        match self.label_transform {
            Some(transform) => transform(name),
            None => to_title_words(name),
        }
    }

    fn referenced_dto(&self, property: &PropertyMetadata) -> Option<&'a DtoMetadata> {
        let PropertyType::Other(type_name) = &property.ty else {
            return None;
        };
        self.known_dtos.iter().find(|d| &d.name == type_name)
    }
}

/// Infer a single field from `property`.
///
/// DTO references are not expanded here; see [`infer_fields`].
pub fn infer_field(property: &PropertyMetadata, context: &InferenceContext<'_>) -> InferredFieldResult {
    let resolution = context.mapper.resolve(property);
    let mut warnings = Vec::new();

    if resolution.source == ResolutionSource::Fallback {
        warnings.push(format!(
            "Could not map type '{}' of '{}', using a text field",
            property.raw_type, property.name
        ));
    }

    let label = context.label_for(&property.name);
    let mut field = FieldSchema::new(property.name.clone(), resolution.kind, label.clone());
    field.placeholder = Some(placeholder_for(&property.name, &label));
    field.required = !(property.optional || property.nullable);
    field.description = property.description.clone();
    field.readonly = property.readonly;
    field.default_value = property.default_value.as_deref().and_then(parse_default);

    if resolution.kind.has_options() {
        if let Some(values) = &property.possible_values {
            field.options = values
                .iter()
                .map(|value| FieldOption {
                    label: option_label(value),
                    value: value.clone(),
                })
                .collect();
        }
    }

    if context.attach_validations {
        let inferred = infer_validations(property, &context.validation);
        field.validations.extend(inferred.rules);
        field.validations = dedup_validations(std::mem::take(&mut field.validations));
        warnings.extend(inferred.warnings);
    }

    let mut confidence = resolution.confidence;
    if resolution.kind.is_generic() {
        confidence *= 0.8;
    }
    if property.has_possible_values() {
        confidence = (confidence + 0.1).min(1.0);
    }

    InferredFieldResult {
        field,
        confidence: confidence.clamp(0.0, 1.0),
        warnings,
        property: property.clone(),
    }
}

/// Infer fields for a list of properties, expanding DTO references.
///
/// Returns the results and the names that were skipped through
/// `ignore_fields`.
pub fn infer_fields(
    properties: &[PropertyMetadata],
    context: &InferenceContext<'_>,
) -> (Vec<InferredFieldResult>, Vec<String>) {
    infer_fields_at(properties, context, "")
}

fn infer_fields_at(
    properties: &[PropertyMetadata],
    context: &InferenceContext<'_>,
    prefix: &str,
) -> (Vec<InferredFieldResult>, Vec<String>) {
    let mut results = Vec::new();
    let mut ignored = Vec::new();

    for property in properties {
        let path = format!("{prefix}{}", property.name);
        // Bare names match at the top level only; nested fields need their dotted path.
        if context.ignore_fields.iter().any(|f| f == &path) {
            ignored.push(path);
            continue;
        }

        let Some(child_dto) = context.referenced_dto(property) else {
            results.push(infer_field(property, context));
            continue;
        };

        if context.depth >= context.max_depth {
            let mut result = infer_field(property, context);
            result.warnings.push(format!(
                "'{}' references '{}' beyond max depth {}, mapped as a single field",
                path, child_dto.name, context.max_depth
            ));
            results.push(result);
            continue;
        }

        let child_dto = if context.include_inherited {
            resolve_inherited(child_dto, context.known_dtos)
        } else {
            child_dto.clone()
        };

        match context.strategy {
            ComplexStrategy::Flatten => {
                let (children, child_ignored) =
                    infer_fields_at(&child_dto.properties, &context.child(), &format!("{path}."));
                ignored.extend(child_ignored);
                results.extend(flatten_children(property, context, children));
            }
            ComplexStrategy::Nested => {
                let (children, child_ignored) =
                    infer_fields_at(&child_dto.properties, &context.child(), &format!("{path}."));
                ignored.extend(child_ignored);
                results.push(nest_children(property, context, children));
            }
            ComplexStrategy::Json => results.push(object_field(property, context, Vec::new(), 0.5)),
        }
    }

    (results, ignored)
}

/// Prefix child names and labels; children of an optional parent are optional.
fn flatten_children(
    parent: &PropertyMetadata,
    context: &InferenceContext<'_>,
    children: Vec<InferredFieldResult>,
) -> Vec<InferredFieldResult> {
    let parent_label = context.label_for(&parent.name);
    let parent_required = !(parent.optional || parent.nullable);

    children
        .into_iter()
        .map(|mut child| {
            child.field.name = format!("{}.{}", parent.name, child.field.name);
            child.field.label = format!("{} {}", parent_label, child.field.label);
            if !parent_required {
                child.field.required = false;
                child
                    .field
                    .validations
                    .retain(|v| v.kind != ValidationKind::Required);
            }
            child
        })
        .collect()
}

fn nest_children(
    parent: &PropertyMetadata,
    context: &InferenceContext<'_>,
    children: Vec<InferredFieldResult>,
) -> InferredFieldResult {
    let confidence = if children.is_empty() {
        0.5
    } else {
        children.iter().map(|c| c.confidence).sum::<f64>() / children.len() as f64
    };
    let warnings: Vec<String> = children.iter().flat_map(|c| c.warnings.clone()).collect();
    let fields = children.into_iter().map(|c| c.field).collect();

    let mut result = object_field(parent, context, fields, confidence);
    result.warnings = warnings;
    result
}

fn object_field(
    property: &PropertyMetadata,
    context: &InferenceContext<'_>,
    fields: Vec<FieldSchema>,
    confidence: f64,
) -> InferredFieldResult {
    let label = context.label_for(&property.name);
    let mut field = FieldSchema::new(property.name.clone(), FieldKind::Object, label);
    field.required = !(property.optional || property.nullable);
    field.description = property.description.clone();
    field.readonly = property.readonly;
    field.fields = fields;

    InferredFieldResult {
        field,
        confidence,
        warnings: Vec::new(),
        property: property.clone(),
    }
}

/// Placeholder from the dictionary, or `"Digite <label>"`.
pub fn placeholder_for(name: &str, label: &str) -> String {
    let lower = name.to_lowercase();
    PLACEHOLDERS
        .iter()
        .find(|(key, _)| *key == lower)
        .map(|(_, placeholder)| placeholder.to_string())
        .unwrap_or_else(|| format!("Digite {}", label.to_lowercase()))
}

fn option_label(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parse an initializer into a JSON value when it is a plain literal.
fn parse_default(raw: &str) -> Option<serde_json::Value> {
    parse_literal(raw).or_else(|| serde_json::from_str(raw).ok())
}
