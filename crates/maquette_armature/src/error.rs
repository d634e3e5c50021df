//! Schema errors.

/// Errors that stop a schema from being parsed or written.
///
/// Validation findings are not errors; see
/// [`ValidationResult`](crate::ValidationResult).
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The input is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The input is JSON but not shaped like a page schema.
    #[error("invalid schema structure: {0}")]
    Structure(String),

    /// Full validation found errors, one `path: message` per line.
    #[error("schema validation failed:\n{0}")]
    Invalid(String),

    /// The schema could not be written out.
    #[error("failed to serialize schema: {0}")]
    Serialize(String),
}

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;
