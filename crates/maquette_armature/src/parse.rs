//! JSON to [`PageSchema`].

use crate::error::{SchemaError, SchemaResult};
use crate::types::{PageSchema, DEFAULT_VERSION};
use crate::validate::{quick_validate, validate_page_schema};
use maquette_carton::time::now_iso;
use maquette_vitrine::WidgetRegistry;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parse options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParseOptions {
    /// Run full validation and fail on errors.
    pub validate: bool,
    /// Fill `metadata.version` when absent.
    pub fill_defaults: bool,
    /// Set `metadata.createdAt` to the current time when absent.
    pub stamp_created: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            validate: true,
            fill_defaults: true,
            stamp_created: false,
        }
    }
}

/// Parse a schema from JSON text.
pub fn parse_schema(
    json: &str,
    options: &ParseOptions,
    registry: &WidgetRegistry,
) -> SchemaResult<PageSchema> {
    let value: Value = serde_json::from_str(json)?;
    parse_schema_value(value, options, registry)
}

/// Parse a schema from an already decoded JSON value.
pub fn parse_schema_value(
    mut value: Value,
    options: &ParseOptions,
    registry: &WidgetRegistry,
) -> SchemaResult<PageSchema> {
    quick_validate(&value)?;

    if options.validate {
        let result = validate_page_schema(&value, registry);
        if !result.is_valid() {
            return Err(SchemaError::Invalid(result.error_report()));
        }
    }

    if let Some(metadata) = value.get_mut("metadata").and_then(Value::as_object_mut) {
        if options.fill_defaults {
            metadata
                .entry("version")
                .or_insert_with(|| Value::String(DEFAULT_VERSION.to_string()));
        }
        if options.stamp_created {
            metadata
                .entry("createdAt")
                .or_insert_with(|| Value::String(now_iso()));
        }
    }

    let schema: PageSchema =
        serde_json::from_value(value).map_err(|e| SchemaError::Structure(e.to_string()))?;
    tracing::debug!(id = %schema.id, widgets = schema.widgets.len(), "parsed page schema");
    Ok(schema)
}
