//! Error types for DTO analysis and inference.

/// Errors that abort an inference call.
///
/// Per-property problems never end up here; they are reported as warnings
/// on the result instead.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InferenceError {
    /// The requested DTO is not declared in the source.
    #[error("DTO '{name}' not found. Available DTOs: {}", format_available(.available))]
    DtoNotFound {
        name: String,
        available: Vec<String>,
    },

    /// A type mapping rule carries a pattern the regex engine rejects.
    #[error("Invalid type mapping pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

fn format_available(available: &[String]) -> String {
    if available.is_empty() {
        "(none)".to_string()
    } else {
        available.join(", ")
    }
}

/// Result type for inference operations.
pub type CroquisResult<T> = Result<T, InferenceError>;
