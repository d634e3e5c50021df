//! Schema Inference Orchestrator.
//!
//! Runs the whole pipeline for one DTO:
//! source hook, analysis, DTO lookup, inheritance, field inference,
//! validation, form assembly, return hook, confidence.

use crate::analyzer::{analyze_dtos, resolve_inherited, select_dto};
use crate::error::CroquisResult;
use crate::field::{infer_fields, ComplexStrategy, InferenceContext, LabelTransform};
use crate::schema::{dedup_validations, FormSchema};
use crate::type_mapper::{RuleSpec, TypeMapper, TypeMappingRule};
use crate::types::DtoMetadata;
use crate::validation::ValidationConfig;
use maquette_carton::naming::to_title_words;
use maquette_carton::time::timestamp_millis;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inference options.
///
/// The serializable part is what `maquette.config.json` carries under
/// `inference`; compiled rules and the label transform are set in code.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InferenceConfig {
    /// Property names (top-level or dotted) to skip.
    pub ignore_fields: Vec<String>,
    /// Attach inferred validation rules to fields.
    pub infer_validations: bool,
    /// Validation sources.
    pub validation: ValidationConfig,
    /// Rules described in configuration, compiled per run.
    pub rules: Vec<RuleSpec>,
    /// Rules built in code.
    #[serde(skip)]
    pub custom_rules: Vec<TypeMappingRule>,
    /// Custom label generator.
    #[serde(skip)]
    pub label_transform: Option<LabelTransform>,
    /// Depth at which DTO references stop being expanded.
    pub max_depth: usize,
    /// Expansion strategy for DTO references.
    pub complex_strategy: ComplexStrategy,
    /// Merge properties of parent DTOs declared in the same source.
    pub include_inherited: bool,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            ignore_fields: Vec::new(),
            infer_validations: true,
            validation: ValidationConfig::default(),
            rules: Vec::new(),
            custom_rules: Vec::new(),
            label_transform: None,
            max_depth: 3,
            complex_strategy: ComplexStrategy::Flatten,
            include_inherited: true,
        }
    }
}

impl fmt::Debug for InferenceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InferenceConfig")
            .field("ignore_fields", &self.ignore_fields)
            .field("infer_validations", &self.infer_validations)
            .field("validation", &self.validation)
            .field("rules", &self.rules)
            .field("custom_rules", &self.custom_rules.len())
            .field("label_transform", &self.label_transform.is_some())
            .field("max_depth", &self.max_depth)
            .field("complex_strategy", &self.complex_strategy)
            .field("include_inherited", &self.include_inherited)
            .finish()
    }
}

type SourceHook<'h> = Box<dyn Fn(&str) -> String + 'h>;
type DtoHook<'h> = Box<dyn Fn(&mut DtoMetadata) + 'h>;
type FormHook<'h> = Box<dyn Fn(&mut FormSchema) + 'h>;

/// Caller supplied interception points.
#[derive(Default)]
pub struct InferenceHooks<'h> {
    before_analyze: Option<SourceHook<'h>>,
    after_analyze: Option<DtoHook<'h>>,
    before_return: Option<FormHook<'h>>,
}

impl<'h> InferenceHooks<'h> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrite the source text before analysis.
    pub fn before_analyze(mut self, hook: impl Fn(&str) -> String + 'h) -> Self {
        self.before_analyze = Some(Box::new(hook));
        self
    }

    /// Adjust the selected DTO after analysis.
    pub fn after_analyze(mut self, hook: impl Fn(&mut DtoMetadata) + 'h) -> Self {
        self.after_analyze = Some(Box::new(hook));
        self
    }

    /// Adjust the assembled form before it is returned.
    pub fn before_return(mut self, hook: impl Fn(&mut FormSchema) + 'h) -> Self {
        self.before_return = Some(Box::new(hook));
        self
    }
}

/// Output of the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceResult {
    /// Generated form.
    pub schema: FormSchema,
    /// DTO the form was generated from (after inheritance and hooks).
    pub metadata: DtoMetadata,
    /// All warnings, flattened.
    pub warnings: Vec<String>,
    /// Mean field confidence, 0 without fields.
    pub confidence: f64,
    /// Names skipped through `ignore_fields`.
    pub ignored_fields: Vec<String>,
}

/// Infer a form for the DTO `dto_name` declared in `source`.
pub fn infer_schema_from_dto(
    source: &str,
    dto_name: &str,
    config: &InferenceConfig,
    hooks: &InferenceHooks<'_>,
) -> CroquisResult<InferenceResult> {
    let source = match &hooks.before_analyze {
        Some(hook) => hook(source),
        None => source.to_string(),
    };
    let dtos = analyze_dtos(&source);
    tracing::debug!(count = dtos.len(), dto = dto_name, "analyzed DTOs");

    let dto = select_dto(dtos.clone(), dto_name)?;
    Ok(run(dto, &dtos, config, hooks))
}

/// Infer a form for an in-memory DTO.
pub fn infer_schema_from_metadata(
    metadata: &DtoMetadata,
    config: &InferenceConfig,
    hooks: &InferenceHooks<'_>,
) -> InferenceResult {
    run(metadata.clone(), std::slice::from_ref(metadata), config, hooks)
}

fn run(
    dto: DtoMetadata,
    known: &[DtoMetadata],
    config: &InferenceConfig,
    hooks: &InferenceHooks<'_>,
) -> InferenceResult {
    let mut warnings = Vec::new();

    let mut dto = if config.include_inherited {
        resolve_inherited(&dto, known)
    } else {
        dto
    };
    if let Some(hook) = &hooks.after_analyze {
        hook(&mut dto);
    }

    let mut rules = config.custom_rules.clone();
    for spec in &config.rules {
        match spec.compile() {
            Ok(rule) => rules.push(rule),
            Err(e) => warnings.push(e.to_string()),
        }
    }
    let mapper = TypeMapper::new(&rules);

    let context = InferenceContext {
        depth: 0,
        max_depth: config.max_depth,
        strategy: config.complex_strategy,
        mapper: &mapper,
        attach_validations: config.infer_validations,
        validation: config.validation,
        label_transform: config.label_transform.as_ref(),
        known_dtos: known,
        include_inherited: config.include_inherited,
        ignore_fields: &config.ignore_fields,
    };
    let (results, ignored_fields) = infer_fields(&dto.properties, &context);

    let confidence = if results.is_empty() {
        0.0
    } else {
        results.iter().map(|r| r.confidence).sum::<f64>() / results.len() as f64
    };

    let mut fields = Vec::with_capacity(results.len());
    for mut result in results {
        warnings.append(&mut result.warnings);
        if config.infer_validations {
            result.field.validations = dedup_validations(result.field.validations);
        }
        fields.push(result.field);
    }

    let mut schema = FormSchema {
        id: format!("form-{}-{}", dto.name.to_lowercase(), timestamp_millis()),
        name: dto.name.clone(),
        title: to_title_words(&dto.name),
        description: dto.description.clone(),
        fields,
    };
    if let Some(hook) = &hooks.before_return {
        hook(&mut schema);
    }

    tracing::debug!(
        dto = %dto.name,
        fields = schema.fields.len(),
        ignored = ignored_fields.len(),
        confidence,
        "inferred form schema"
    );

    InferenceResult {
        schema,
        metadata: dto,
        warnings,
        confidence,
        ignored_fields,
    }
}
