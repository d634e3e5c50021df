//! [`PageSchema`] to JSON text.

use crate::error::{SchemaError, SchemaResult};
use crate::types::PageSchema;
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

/// Output options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SerializeOptions {
    /// Indented output; minified otherwise.
    pub pretty: bool,
    /// Spaces per indentation level.
    pub indent: usize,
    /// Keep only `title` and `version` in the metadata.
    pub minimal_metadata: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: 2,
            minimal_metadata: false,
        }
    }
}

impl SerializeOptions {
    pub fn minified() -> Self {
        Self {
            pretty: false,
            ..Default::default()
        }
    }
}

/// Serialize `schema` to JSON text.
pub fn serialize_schema(schema: &PageSchema, options: &SerializeOptions) -> SchemaResult<String> {
    let mut value = serde_json::to_value(schema).map_err(serialize_error)?;

    if options.minimal_metadata {
        if let Some(metadata) = value.get_mut("metadata").and_then(Value::as_object_mut) {
            metadata.retain(|key, _| key == "title" || key == "version");
        }
    }

    if !options.pretty {
        return serde_json::to_string(&value).map_err(serialize_error);
    }

    let indent = " ".repeat(options.indent);
    let mut out = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer).map_err(serialize_error)?;
    String::from_utf8(out).map_err(|e| SchemaError::Serialize(e.to_string()))
}

fn serialize_error(e: serde_json::Error) -> SchemaError {
    SchemaError::Serialize(e.to_string())
}
