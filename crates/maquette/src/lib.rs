//! # Maquette
//!
//! Page schemas, widget registries and DTO-to-form inference.
//!
//! This crate re-exports all Maquette sub-crates for unified documentation.
//!
//! ## Crates
//!
//! - [`carton`] - Shared toolbox: hash maps, naming helpers, timestamps
//! - [`croquis`] - DTO analysis and form schema inference
//! - [`vitrine`] - Widget and component registries
//! - [`armature`] - Page schema model, validation, diff and merge

/// Shared toolbox: hash maps, naming helpers, timestamps.
pub use maquette_carton as carton;

/// DTO analysis and form schema inference.
pub use maquette_croquis as croquis;

/// Widget and component registries.
pub use maquette_vitrine as vitrine;

/// Page schema model, validation, diff and merge.
pub use maquette_armature as armature;
