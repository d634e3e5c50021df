//! # maquette_armature
//!
//! Armature - Page schema model, validation, diff and merge for Maquette.
//!
//! ## Name Origin
//!
//! An **armature** is the wire frame a sculptor builds before adding clay.
//! Page schemas play that role for the builder: a JSON skeleton of layout
//! and widgets that the renderer later dresses.
//!
//! ## Operations
//!
//! - [`quick_validate`] / [`validate_page_schema`]: shape and full checks
//! - [`parse_schema`]: JSON text to [`PageSchema`]
//! - [`serialize_schema`]: [`PageSchema`] to JSON text
//! - [`diff_schemas`] / [`merge_schemas`]: compare and combine schemas
//!
//! ```
//! use maquette_armature::{parse_schema, serialize_schema, ParseOptions, SerializeOptions};
//! use maquette_vitrine::WidgetRegistry;
//!
//! let registry = WidgetRegistry::with_builtins();
//! let json = r#"{
//!   "id": "home",
//!   "type": "page",
//!   "metadata": { "title": "Home", "version": "1.0.0" },
//!   "layout": { "strategy": "grid", "columns": 12 },
//!   "widgets": [{ "id": "title", "type": "heading", "config": { "text": "Hi" } }]
//! }"#;
//!
//! let schema = parse_schema(json, &ParseOptions::default(), &registry).unwrap();
//! assert_eq!(schema.widget_count(), 1);
//!
//! let out = serialize_schema(&schema, &SerializeOptions::minified()).unwrap();
//! assert!(out.contains("\"columns\":12"));
//! ```

pub mod diff;
pub mod error;
pub mod merge;
pub mod parse;
pub mod serialize;
pub mod tree;
pub mod types;
pub mod validate;

pub use diff::{diff_schemas, SchemaChange};
pub use error::{SchemaError, SchemaResult};
pub use merge::{merge_schemas, MetadataPatch, SchemaPatch};
pub use parse::{parse_schema, parse_schema_value, ParseOptions};
pub use serialize::{serialize_schema, SerializeOptions};
pub use tree::{find_widget, find_widget_mut, walk_widgets, widget_count};
pub use types::{
    DataSource, EventHandler, Layout, LayoutStrategy, PageSchema, Position, SchemaMetadata,
    SchemaType, Visibility, WidgetSchema, DEFAULT_VERSION,
};
pub use validate::{quick_validate, validate_page_schema, Severity, ValidationIssue, ValidationResult};
