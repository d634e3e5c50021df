//! Schema merging.

use crate::types::{
    DataSource, EventHandler, Layout, PageSchema, SchemaMetadata, SchemaType, WidgetSchema,
};
use maquette_carton::time::now_iso;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Partial metadata; present fields replace the target's.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetadataPatch {
    pub title: Option<String>,
    pub version: Option<String>,
    pub created_at: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    pub description: Option<String>,
}

/// Partial schema applied by [`merge_schemas`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchemaPatch {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub schema_type: Option<SchemaType>,
    pub metadata: Option<MetadataPatch>,
    pub layout: Option<Layout>,
    pub widgets: Option<Vec<WidgetSchema>>,
    pub permissions: Option<Value>,
    pub theme: Option<Value>,
    pub data_sources: Option<Vec<DataSource>>,
    pub event_handlers: Option<Vec<EventHandler>>,
}

impl From<PageSchema> for SchemaPatch {
    fn from(schema: PageSchema) -> Self {
        let metadata = schema.metadata;
        Self {
            id: Some(schema.id),
            schema_type: Some(schema.schema_type),
            metadata: Some(MetadataPatch {
                title: Some(metadata.title),
                version: Some(metadata.version),
                created_at: metadata.created_at,
                author: metadata.author,
                tags: Some(metadata.tags),
                description: metadata.description,
            }),
            layout: Some(schema.layout),
            widgets: Some(schema.widgets),
            permissions: schema.permissions,
            theme: schema.theme,
            data_sources: Some(schema.data_sources),
            event_handlers: Some(schema.event_handlers),
        }
    }
}

/// Shallow merge of `patch` into `target`.
///
/// Top-level keys present in the patch win. Metadata is merged field by
/// field and always gets a fresh `updatedAt`.
pub fn merge_schemas(target: &PageSchema, patch: SchemaPatch) -> PageSchema {
    let mut merged = target.clone();

    if let Some(id) = patch.id {
        merged.id = id;
    }
    if let Some(schema_type) = patch.schema_type {
        merged.schema_type = schema_type;
    }
    if let Some(layout) = patch.layout {
        merged.layout = layout;
    }
    if let Some(widgets) = patch.widgets {
        merged.widgets = widgets;
    }
    if patch.permissions.is_some() {
        merged.permissions = patch.permissions;
    }
    if patch.theme.is_some() {
        merged.theme = patch.theme;
    }
    if let Some(data_sources) = patch.data_sources {
        merged.data_sources = data_sources;
    }
    if let Some(event_handlers) = patch.event_handlers {
        merged.event_handlers = event_handlers;
    }

    merged.metadata = merge_metadata(&target.metadata, patch.metadata.unwrap_or_default());
    merged
}

fn merge_metadata(target: &SchemaMetadata, patch: MetadataPatch) -> SchemaMetadata {
    SchemaMetadata {
        title: patch.title.unwrap_or_else(|| target.title.clone()),
        version: patch.version.unwrap_or_else(|| target.version.clone()),
        created_at: patch.created_at.or_else(|| target.created_at.clone()),
        updated_at: Some(now_iso()),
        author: patch.author.or_else(|| target.author.clone()),
        tags: patch.tags.unwrap_or_else(|| target.tags.clone()),
        description: patch.description.or_else(|| target.description.clone()),
    }
}
