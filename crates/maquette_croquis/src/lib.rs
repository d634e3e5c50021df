//! # maquette_croquis
//!
//! Croquis - DTO analysis and form schema inference for Maquette.
//!
//! ## Name Origin
//!
//! A **croquis** is a quick sketch drawn from a live model. This crate looks
//! at TypeScript-like DTO declarations and sketches a form from them: field
//! kinds, labels, placeholders, options and validation rules, each with a
//! confidence score.
//!
//! ## Pipeline
//!
//! ```text
//! source ──> analyzer ──> DtoMetadata ──> field (type_mapper + validation) ──> FormSchema
//! ```
//!
//! Analysis is regex and line based. It does not parse TypeScript; see
//! [`analyzer`] for what is and is not recognized.
//!
//! ## Locale
//!
//! Text that ends up in front of form users is Brazilian Portuguese:
//! validation rule messages (`"Este campo é obrigatório"`, `"CPF inválido"`)
//! and generated placeholders (`"Digite seu nome"`). Diagnostics meant for
//! developers are English: inference warnings and every error type.
//! A [`InferenceHooks::before_return`] hook can rewrite the user-facing text.
//!
//! ## Usage
//!
//! ```
//! use maquette_croquis::{infer_schema_from_dto, FieldKind, InferenceConfig, InferenceHooks};
//!
//! let source = r#"
//! export interface SignupDto {
//!   email: string;
//!   age?: number;
//!   role: 'admin' | 'user';
//! }
//! "#;
//!
//! let result = infer_schema_from_dto(
//!     source,
//!     "SignupDto",
//!     &InferenceConfig::default(),
//!     &InferenceHooks::new(),
//! )
//! .unwrap();
//!
//! assert_eq!(result.schema.fields[0].kind, FieldKind::Email);
//! assert_eq!(result.schema.fields[1].kind, FieldKind::Range);
//! assert_eq!(result.schema.fields[2].kind, FieldKind::Radio);
//! ```

pub mod analyzer;
pub mod error;
pub mod field;
pub mod inference;
pub mod schema;
pub mod type_mapper;
pub mod types;
pub mod validation;

pub use analyzer::{analyze_dtos, extract_script, find_dto, list_dtos, resolve_inherited};
pub use error::{CroquisResult, InferenceError};
pub use field::{infer_field, infer_fields, ComplexStrategy, InferenceContext, InferredFieldResult};
pub use inference::{
    infer_schema_from_dto, infer_schema_from_metadata, InferenceConfig, InferenceHooks,
    InferenceResult,
};
pub use schema::{FieldKind, FieldOption, FieldSchema, FormSchema, ValidationKind, ValidationRule};
pub use type_mapper::{RuleSpec, TypeMapper, TypeMappingRule, TypeResolution};
pub use types::{DtoKind, DtoMetadata, PropertyMetadata, PropertyType};
pub use validation::{infer_validations, ValidationConfig};
