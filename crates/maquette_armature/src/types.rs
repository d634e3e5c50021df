//! Page schema model.
//!
//! All types serialize with camelCase keys, matching the JSON documents the
//! builder reads and writes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Version assumed when a schema does not declare one.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Kind of page schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Page,
    Form,
    Layout,
    Dashboard,
    Workflow,
}

impl SchemaType {
    pub const ALL: [SchemaType; 5] = [
        Self::Page,
        Self::Form,
        Self::Layout,
        Self::Dashboard,
        Self::Workflow,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Form => "form",
            Self::Layout => "layout",
            Self::Dashboard => "dashboard",
            Self::Workflow => "workflow",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layout strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutStrategy {
    Grid,
    Flex,
    Absolute,
    Stack,
}

impl LayoutStrategy {
    pub const ALL: [LayoutStrategy; 4] = [Self::Grid, Self::Flex, Self::Absolute, Self::Stack];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Flex => "flex",
            Self::Absolute => "absolute",
            Self::Stack => "stack",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// Descriptive metadata of a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaMetadata {
    pub title: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

impl SchemaMetadata {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: default_version(),
            created_at: None,
            updated_at: None,
            author: None,
            tags: Vec::new(),
            description: None,
        }
    }
}

/// Layout of the root widget list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub strategy: LayoutStrategy,
    /// Strategy specific settings (`columns`, `gap`, `direction`, ...).
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

impl Layout {
    pub fn new(strategy: LayoutStrategy) -> Self {
        Self {
            strategy,
            options: Map::new(),
        }
    }
}

/// Placement of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub w: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub h: Option<f64>,
}

/// `visible` flag: a literal or an expression evaluated by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Visibility {
    Flag(bool),
    Expression(String),
}

/// One widget instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSchema {
    pub id: String,
    /// Key into the widget registry.
    #[serde(rename = "type")]
    pub widget_type: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub position: Option<Position>,
    #[serde(default = "empty_object")]
    pub config: Value,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<WidgetSchema>,
    /// Id of an entry in `PageSchema::data_sources`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bindings: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub visible: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub metadata: Option<Value>,
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

impl WidgetSchema {
    pub fn new(id: impl Into<String>, widget_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            widget_type: widget_type.into(),
            position: None,
            config: empty_object(),
            children: Vec::new(),
            data_source: None,
            bindings: None,
            visible: None,
            metadata: None,
        }
    }

    #[inline]
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Position {
            x,
            y,
            w: None,
            h: None,
        });
        self
    }

    #[inline]
    pub fn with_config(mut self, config: Value) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn with_child(mut self, child: WidgetSchema) -> Self {
        self.children.push(child);
        self
    }
}

/// A data source dashboards bind widgets to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

/// Event wiring on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventHandler {
    pub event: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub target: Option<String>,
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

/// A full page description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSchema {
    pub id: String,
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    pub metadata: SchemaMetadata,
    pub layout: Layout,
    pub widgets: Vec<WidgetSchema>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub permissions: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub theme: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub data_sources: Vec<DataSource>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub event_handlers: Vec<EventHandler>,
}

impl PageSchema {
    pub fn new(
        id: impl Into<String>,
        schema_type: SchemaType,
        title: impl Into<String>,
        strategy: LayoutStrategy,
    ) -> Self {
        Self {
            id: id.into(),
            schema_type,
            metadata: SchemaMetadata::new(title),
            layout: Layout::new(strategy),
            widgets: Vec::new(),
            permissions: None,
            theme: None,
            data_sources: Vec::new(),
            event_handlers: Vec::new(),
        }
    }

    #[inline]
    pub fn with_widget(mut self, widget: WidgetSchema) -> Self {
        self.widgets.push(widget);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_visibility_untagged() {
        let flag: Visibility = serde_json::from_value(json!(false)).unwrap();
        assert_eq!(flag, Visibility::Flag(false));
        let expr: Visibility = serde_json::from_value(json!("user.isAdmin")).unwrap();
        assert_eq!(expr, Visibility::Expression("user.isAdmin".to_string()));
    }

    #[test]
    fn test_layout_options_flatten() {
        let layout: Layout =
            serde_json::from_value(json!({"strategy": "grid", "columns": 12, "gap": 16})).unwrap();
        assert_eq!(layout.strategy, LayoutStrategy::Grid);
        assert_eq!(layout.options["columns"], json!(12));
        assert_eq!(
            serde_json::to_value(&layout).unwrap(),
            json!({"strategy": "grid", "columns": 12, "gap": 16})
        );
    }

    #[test]
    fn test_metadata_version_default() {
        let meta: SchemaMetadata = serde_json::from_value(json!({"title": "Home"})).unwrap();
        assert_eq!(meta.version, DEFAULT_VERSION);
    }

    #[test]
    fn test_schema_type_parse() {
        assert_eq!(SchemaType::parse("dashboard"), Some(SchemaType::Dashboard));
        assert_eq!(SchemaType::parse("Dashboard"), None);
        assert_eq!(LayoutStrategy::parse("stack"), Some(LayoutStrategy::Stack));
    }

    #[test]
    fn test_widget_defaults() {
        let widget: WidgetSchema =
            serde_json::from_value(json!({"id": "w1", "type": "text"})).unwrap();
        assert_eq!(widget.config, json!({}));
        assert!(widget.children.is_empty());
        assert_eq!(
            serde_json::to_value(&widget).unwrap(),
            json!({"id": "w1", "type": "text", "config": {}})
        );
    }
}
