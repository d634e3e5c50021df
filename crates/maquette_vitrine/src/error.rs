//! Registry errors.

/// Errors returned by registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The entry has neither a component handle nor a named renderer.
    #[error("'{key}' has no component or renderer to display it")]
    MissingRenderable { key: String },

    /// The entry key is empty.
    #[error("registry entries need a non-empty key")]
    EmptyKey,

    /// Exporting the registry to JSON failed.
    #[error("failed to export registry: {0}")]
    Export(#[from] serde_json::Error),
}
