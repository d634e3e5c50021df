//! Widget definitions and the built-in widget set.

use crate::entry::{Capabilities, ComponentHandle, EditableProp, PropControlKind, RegistryEntry};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Category whose widgets are form inputs.
pub const FORM_CATEGORY: &str = "form";

/// A widget "class" placeable in page schemas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetDefinition {
    /// Registry key, referenced by `WidgetSchema::type`.
    #[serde(rename = "type")]
    pub widget_type: String,
    pub category: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub icon: Option<String>,
    /// Config a new instance starts with.
    #[serde(default)]
    pub default_config: Value,
    #[serde(default)]
    pub capabilities: Capabilities,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub editable_props: Vec<EditableProp>,
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub experimental: bool,
    /// Name of a renderer resolved by the host application.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub renderer: Option<String>,
    #[serde(skip)]
    pub component: Option<ComponentHandle>,
}

impl WidgetDefinition {
    pub fn new(
        widget_type: impl Into<String>,
        category: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            widget_type: widget_type.into(),
            category: category.into(),
            label: label.into(),
            description: None,
            tags: Vec::new(),
            icon: None,
            default_config: Value::Object(Default::default()),
            capabilities: Capabilities::default(),
            editable_props: Vec::new(),
            experimental: false,
            renderer: None,
            component: None,
        }
    }

    #[inline]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    #[inline]
    pub fn with_config(mut self, config: Value) -> Self {
        self.default_config = config;
        self
    }

    #[inline]
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    #[inline]
    pub fn with_prop(mut self, prop: EditableProp) -> Self {
        self.editable_props.push(prop);
        self
    }

    #[inline]
    pub fn with_renderer(mut self, renderer: impl Into<String>) -> Self {
        self.renderer = Some(renderer.into());
        self
    }

    #[inline]
    pub fn with_component(mut self, component: ComponentHandle) -> Self {
        self.component = Some(component);
        self
    }

    #[inline]
    pub fn experimental(mut self) -> Self {
        self.experimental = true;
        self
    }

    /// Whether instances are form inputs.
    #[inline]
    pub fn is_form_input(&self) -> bool {
        self.category == FORM_CATEGORY
    }
}

impl RegistryEntry for WidgetDefinition {
    fn key(&self) -> &str {
        &self.widget_type
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    fn is_experimental(&self) -> bool {
        self.experimental
    }

    fn is_renderable(&self) -> bool {
        self.component.is_some() || self.renderer.is_some()
    }
}

fn input(widget_type: &str, label: &str, control: PropControlKind) -> WidgetDefinition {
    WidgetDefinition::new(widget_type, FORM_CATEGORY, label)
        .with_renderer(widget_type)
        .with_config(json!({ "name": "", "label": label }))
        .with_capabilities(Capabilities {
            emits_events: true,
            is_editable: true,
            ..Default::default()
        })
        .with_prop(EditableProp::new("name", "Name", PropControlKind::Text).required())
        .with_prop(EditableProp::new("label", "Label", PropControlKind::Text))
        .with_prop(EditableProp::new("required", "Required", PropControlKind::Boolean).with_default(json!(false)))
        .with_prop(EditableProp::new("defaultValue", "Default value", control))
}

/// The standard widget set every registry can start from.
pub fn builtin_widgets() -> Vec<WidgetDefinition> {
    let data = Capabilities {
        has_data_source: true,
        accepts_filters: true,
        ..Default::default()
    };
    let container = Capabilities {
        has_slots: true,
        ..Default::default()
    };

    vec![
        // form
        input("text-input", "Text Input", PropControlKind::Text)
            .with_description("Single line text entry")
            .with_tags(&["input", "text", "string"]),
        input("textarea", "Text Area", PropControlKind::Textarea)
            .with_description("Multi line text entry")
            .with_tags(&["input", "text", "multiline"]),
        input("number-input", "Number Input", PropControlKind::Number)
            .with_description("Numeric entry with optional bounds")
            .with_tags(&["input", "number"])
            .with_prop(EditableProp::new("min", "Minimum", PropControlKind::Number))
            .with_prop(EditableProp::new("max", "Maximum", PropControlKind::Number)),
        input("select", "Select", PropControlKind::Text)
            .with_description("Dropdown with a fixed option list")
            .with_tags(&["input", "options", "dropdown"])
            .with_prop(EditableProp::new("options", "Options", PropControlKind::Json)),
        input("checkbox", "Checkbox", PropControlKind::Boolean)
            .with_description("Boolean toggle")
            .with_tags(&["input", "boolean"]),
        input("radio-group", "Radio Group", PropControlKind::Text)
            .with_tags(&["input", "options"])
            .with_prop(EditableProp::new("options", "Options", PropControlKind::Json)),
        input("date-picker", "Date Picker", PropControlKind::Text)
            .with_description("Calendar date selection")
            .with_tags(&["input", "date", "calendar"]),
        input("file-upload", "File Upload", PropControlKind::Text)
            .with_tags(&["input", "file", "upload"])
            .experimental(),
        // basic
        WidgetDefinition::new("heading", "basic", "Heading")
            .with_renderer("heading")
            .with_tags(&["text", "title"])
            .with_config(json!({ "text": "Heading", "level": 2 }))
            .with_prop(EditableProp::new("text", "Text", PropControlKind::Text))
            .with_prop(
                EditableProp::new("level", "Level", PropControlKind::Number).with_default(json!(2)),
            ),
        WidgetDefinition::new("text", "basic", "Text")
            .with_renderer("text")
            .with_description("Static paragraph")
            .with_config(json!({ "content": "" }))
            .with_prop(EditableProp::new("content", "Content", PropControlKind::Textarea)),
        WidgetDefinition::new("button", "basic", "Button")
            .with_renderer("button")
            .with_description("Clickable action trigger")
            .with_tags(&["action", "submit"])
            .with_config(json!({ "text": "Button", "variant": "primary" }))
            .with_capabilities(Capabilities {
                emits_events: true,
                ..Default::default()
            })
            .with_prop(EditableProp::new("text", "Text", PropControlKind::Text))
            .with_prop(
                EditableProp::new("variant", "Variant", PropControlKind::Text)
                    .with_options(&["primary", "secondary", "ghost", "danger"]),
            ),
        WidgetDefinition::new("image", "basic", "Image")
            .with_renderer("image")
            .with_tags(&["media", "picture"])
            .with_config(json!({ "src": "", "alt": "" })),
        // layout
        WidgetDefinition::new("container", "layout", "Container")
            .with_renderer("container")
            .with_description("Groups child widgets")
            .with_capabilities(container),
        WidgetDefinition::new("card", "layout", "Card")
            .with_renderer("card")
            .with_description("Bordered panel with an optional title")
            .with_config(json!({ "title": "" }))
            .with_capabilities(container),
        WidgetDefinition::new("tabs", "layout", "Tabs")
            .with_renderer("tabs")
            .with_config(json!({ "tabs": [] }))
            .with_capabilities(Capabilities {
                has_slots: true,
                emits_events: true,
                ..Default::default()
            }),
        // data
        WidgetDefinition::new("table", "data", "Table")
            .with_renderer("table")
            .with_description("Tabular view over a data source")
            .with_tags(&["grid", "list", "dashboard"])
            .with_config(json!({ "columns": [], "pageSize": 10 }))
            .with_capabilities(data)
            .with_prop(EditableProp::new("columns", "Columns", PropControlKind::Json))
            .with_prop(
                EditableProp::new("pageSize", "Page size", PropControlKind::Number)
                    .with_default(json!(10)),
            ),
        WidgetDefinition::new("chart", "data", "Chart")
            .with_renderer("chart")
            .with_description("Line, bar or pie chart over a data source")
            .with_tags(&["graph", "dashboard", "visualization"])
            .with_config(json!({ "chartType": "bar" }))
            .with_capabilities(data)
            .with_prop(
                EditableProp::new("chartType", "Chart type", PropControlKind::Text)
                    .with_options(&["line", "bar", "pie", "area"]),
            ),
        WidgetDefinition::new("kpi-card", "data", "KPI Card")
            .with_renderer("kpi-card")
            .with_description("Single metric with trend")
            .with_tags(&["metric", "dashboard"])
            .with_config(json!({ "format": "number" }))
            .with_capabilities(Capabilities {
                has_data_source: true,
                ..Default::default()
            }),
    ]
}
