//! Component metadata for the component registry.

use crate::entry::{Capabilities, ComponentHandle, EditableProp, RegistryEntry};
use serde::{Deserialize, Serialize};

/// Documentation and wiring for a reusable UI component.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetadata {
    /// Registry key.
    pub name: String,
    pub category: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub props: Vec<EditableProp>,
    /// Named slots the component exposes.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub slots: Vec<String>,
    /// Events the component emits.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub events: Vec<String>,
    #[serde(default)]
    pub capabilities: Capabilities,
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub experimental: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub renderer: Option<String>,
    #[serde(skip)]
    pub component: Option<ComponentHandle>,
}

impl ComponentMetadata {
    pub fn new(name: impl Into<String>, category: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            label: label.into(),
            description: None,
            tags: Vec::new(),
            props: Vec::new(),
            slots: Vec::new(),
            events: Vec::new(),
            capabilities: Capabilities::default(),
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
    pub fn with_prop(mut self, prop: EditableProp) -> Self {
        self.props.push(prop);
        self
    }

    /// Declare slots; sets `hasSlots`.
    pub fn with_slots(mut self, slots: &[&str]) -> Self {
        self.slots = slots.iter().map(|s| s.to_string()).collect();
        self.capabilities.has_slots = !self.slots.is_empty();
        self
    }

    /// Declare events; sets `emitsEvents`.
    pub fn with_events(mut self, events: &[&str]) -> Self {
        self.events = events.iter().map(|e| e.to_string()).collect();
        self.capabilities.emits_events = !self.events.is_empty();
        self
    }

    #[inline]
    pub fn with_component(mut self, component: ComponentHandle) -> Self {
        self.component = Some(component);
        self
    }

    #[inline]
    pub fn with_renderer(mut self, renderer: impl Into<String>) -> Self {
        self.renderer = Some(renderer.into());
        self
    }

    #[inline]
    pub fn experimental(mut self) -> Self {
        self.experimental = true;
        self
    }
}

impl RegistryEntry for ComponentMetadata {
    fn key(&self) -> &str {
        &self.name
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_and_events_set_capabilities() {
        let meta = ComponentMetadata::new("MqDialog", "overlay", "Dialog")
            .with_slots(&["default", "footer"])
            .with_events(&["close"]);
        assert!(meta.capabilities.has_slots);
        assert!(meta.capabilities.emits_events);
        assert!(!meta.capabilities.has_data_source);
    }

    #[test]
    fn test_search_matches_tags() {
        let meta = ComponentMetadata::new("MqDialog", "overlay", "Dialog").with_tags(&["Modal"]);
        assert!(meta.matches("modal"));
        assert!(meta.matches("mqdia"));
        assert!(!meta.matches("table"));
    }
}
