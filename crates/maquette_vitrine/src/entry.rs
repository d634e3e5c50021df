//! Shared pieces of registry entries.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Something a [`Registry`](crate::Registry) can store.
pub trait RegistryEntry: Clone + Serialize {
    /// Unique key (`type` for widgets, `name` for components).
    fn key(&self) -> &str;

    fn category(&self) -> &str;

    fn label(&self) -> &str;

    fn description(&self) -> Option<&str>;

    fn tags(&self) -> &[String];

    fn capabilities(&self) -> &Capabilities;

    fn is_experimental(&self) -> bool;

    /// Whether the entry carries a component handle or a named renderer.
    fn is_renderable(&self) -> bool;

    /// Case-insensitive substring match on key, label, description and tags.
    ///
    /// `query` must already be lowercase.
    fn matches(&self, query: &str) -> bool {
        self.key().to_lowercase().contains(query)
            || self.label().to_lowercase().contains(query)
            || self
                .description()
                .is_some_and(|d| d.to_lowercase().contains(query))
            || self.tags().iter().any(|t| t.to_lowercase().contains(query))
    }
}

/// Feature flags of a widget or component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Capabilities {
    pub has_data_source: bool,
    pub emits_events: bool,
    pub accepts_filters: bool,
    pub is_editable: bool,
    pub has_slots: bool,
}

impl Capabilities {
    /// At least one flag is set.
    #[inline]
    pub fn any(&self) -> bool {
        self.has_data_source
            || self.emits_events
            || self.accepts_filters
            || self.is_editable
            || self.has_slots
    }
}

/// Opaque handle to whatever renders an entry.
///
/// Never serialized; registry exports leave it out.
#[derive(Clone)]
pub struct ComponentHandle(Arc<dyn Any + Send + Sync>);

impl ComponentHandle {
    pub fn new<T: Any + Send + Sync>(component: T) -> Self {
        Self(Arc::new(component))
    }

    /// Borrow the component as `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl fmt::Debug for ComponentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ComponentHandle(..)")
    }
}

/// Editor control used for an editable prop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropControlKind {
    #[default]
    Text,
    Textarea,
    Number,
    Boolean,
    Select,
    Color,
    Json,
}

/// Option for select controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropOption {
    pub label: String,
    pub value: serde_json::Value,
}

/// Descriptor of one prop the builder lets users edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditableProp {
    /// Prop name inside the widget config.
    pub name: String,
    /// Label shown in the property panel.
    pub label: String,
    pub control: PropControlKind,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default_value: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub options: Vec<PropOption>,
    #[serde(default)]
    pub required: bool,
    /// Panel section.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub group: Option<String>,
}

impl EditableProp {
    pub fn new(name: impl Into<String>, label: impl Into<String>, control: PropControlKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            control,
            default_value: None,
            options: Vec::new(),
            required: false,
            group: None,
        }
    }

    #[inline]
    pub fn with_default(mut self, value: serde_json::Value) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Select control over string values.
    pub fn with_options(mut self, values: &[&str]) -> Self {
        self.control = PropControlKind::Select;
        self.options = values
            .iter()
            .map(|v| PropOption {
                label: v.to_string(),
                value: serde_json::Value::String(v.to_string()),
            })
            .collect();
        self
    }

    #[inline]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[inline]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities_any() {
        assert!(!Capabilities::default().any());
        let caps = Capabilities {
            emits_events: true,
            ..Default::default()
        };
        assert!(caps.any());
    }

    #[test]
    fn test_capabilities_serde() {
        let caps: Capabilities = serde_json::from_str(r#"{"hasDataSource": true}"#).unwrap();
        assert!(caps.has_data_source);
        assert!(!caps.has_slots);
    }

    #[test]
    fn test_component_handle_downcast() {
        let handle = ComponentHandle::new("ButtonView");
        assert_eq!(handle.downcast_ref::<&str>(), Some(&"ButtonView"));
        assert!(handle.downcast_ref::<u32>().is_none());
    }

    #[test]
    fn test_editable_prop_options() {
        let prop = EditableProp::new("size", "Size", PropControlKind::Text).with_options(&["sm", "lg"]);
        assert_eq!(prop.control, PropControlKind::Select);
        assert_eq!(prop.options[1].value, serde_json::json!("lg"));
    }
}
