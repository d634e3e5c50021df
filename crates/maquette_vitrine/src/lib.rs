//! # maquette_vitrine
//!
//! Vitrine - Widget and component registries for Maquette.
//!
//! ## Name Origin
//!
//! A **vitrine** is the glass display case of a shop or museum. This crate
//! is where widgets and components are put on display: the builder lists
//! them, the schema validator checks widget types against them.
//!
//! Registries are plain values owned by the caller. Build one, share it by
//! reference, and drop it when done; there is no global instance.
//!
//! ```
//! use maquette_vitrine::{WidgetDefinition, WidgetRegistry};
//!
//! let registry = WidgetRegistry::with_builtins();
//! registry
//!     .register(WidgetDefinition::new("rating", "form", "Rating").with_renderer("rating-stars"))
//!     .unwrap();
//!
//! assert!(registry.has("rating"));
//! assert!(!registry.search("dashboard").is_empty());
//! ```

pub mod component;
pub mod entry;
pub mod error;
pub mod registry;
pub mod widget;

pub use component::ComponentMetadata;
pub use entry::{Capabilities, ComponentHandle, EditableProp, PropControlKind, PropOption, RegistryEntry};
pub use error::RegistryError;
pub use registry::{ComponentRegistry, Registry, RegistryStats, WidgetRegistry};
pub use widget::{builtin_widgets, WidgetDefinition, FORM_CATEGORY};
