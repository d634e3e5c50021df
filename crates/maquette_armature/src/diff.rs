//! Schema diffing.
//!
//! Comparison is whole-object: metadata and layout are compared as units,
//! top-level widgets are matched by id and compared as units. Nested
//! widgets are part of their parent's content.

use crate::types::{Layout, PageSchema, SchemaMetadata, WidgetSchema};
use maquette_carton::FxHashMap;
use serde::Serialize;

/// One difference between two schemas.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SchemaChange {
    MetadataChanged {
        old: SchemaMetadata,
        new: SchemaMetadata,
    },
    LayoutChanged {
        old: Layout,
        new: Layout,
    },
    WidgetAdded {
        widget: WidgetSchema,
    },
    WidgetRemoved {
        widget: WidgetSchema,
    },
    WidgetUpdated {
        old: WidgetSchema,
        new: WidgetSchema,
    },
}

impl SchemaChange {
    /// One-line summary.
    pub fn describe(&self) -> String {
        match self {
            Self::MetadataChanged { .. } => "metadata changed".to_string(),
            Self::LayoutChanged { old, new } if old.strategy != new.strategy => format!(
                "layout changed ({} -> {})",
                old.strategy.as_str(),
                new.strategy.as_str()
            ),
            Self::LayoutChanged { .. } => "layout changed".to_string(),
            Self::WidgetAdded { widget } => {
                format!("widget added: {} ({})", widget.id, widget.widget_type)
            }
            Self::WidgetRemoved { widget } => {
                format!("widget removed: {} ({})", widget.id, widget.widget_type)
            }
            Self::WidgetUpdated { new, .. } => format!("widget updated: {}", new.id),
        }
    }
}

/// Changes turning `old` into `new`.
///
/// Order: metadata, layout, added (in `new` order), removed (in `old`
/// order), updated (in `new` order).
pub fn diff_schemas(old: &PageSchema, new: &PageSchema) -> Vec<SchemaChange> {
    let mut changes = Vec::new();

    if old.metadata != new.metadata {
        changes.push(SchemaChange::MetadataChanged {
            old: old.metadata.clone(),
            new: new.metadata.clone(),
        });
    }
    if old.layout != new.layout {
        changes.push(SchemaChange::LayoutChanged {
            old: old.layout.clone(),
            new: new.layout.clone(),
        });
    }

    let old_by_id: FxHashMap<&str, &WidgetSchema> =
        old.widgets.iter().map(|w| (w.id.as_str(), w)).collect();
    let new_by_id: FxHashMap<&str, &WidgetSchema> =
        new.widgets.iter().map(|w| (w.id.as_str(), w)).collect();

    for widget in &new.widgets {
        if !old_by_id.contains_key(widget.id.as_str()) {
            changes.push(SchemaChange::WidgetAdded {
                widget: widget.clone(),
            });
        }
    }
    for widget in &old.widgets {
        if !new_by_id.contains_key(widget.id.as_str()) {
            changes.push(SchemaChange::WidgetRemoved {
                widget: widget.clone(),
            });
        }
    }
    for widget in &new.widgets {
        if let Some(previous) = old_by_id.get(widget.id.as_str()) {
            if *previous != widget {
                changes.push(SchemaChange::WidgetUpdated {
                    old: (*previous).clone(),
                    new: widget.clone(),
                });
            }
        }
    }

    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LayoutStrategy, SchemaType};
    use serde_json::json;

    fn base() -> PageSchema {
        PageSchema::new("p", SchemaType::Page, "Page", LayoutStrategy::Grid)
            .with_widget(WidgetSchema::new("a", "text"))
            .with_widget(WidgetSchema::new("b", "button"))
    }

    #[test]
    fn test_identical_is_empty() {
        assert!(diff_schemas(&base(), &base()).is_empty());
    }

    #[test]
    fn test_widget_changes() {
        let old = base();
        let mut new = base();
        new.widgets.remove(0);
        new.widgets[0].config = json!({ "text": "Save" });
        new.widgets.push(WidgetSchema::new("c", "image"));
        new.layout.strategy = LayoutStrategy::Stack;

        let summary: Vec<String> = diff_schemas(&old, &new).iter().map(|c| c.describe()).collect();
        assert_eq!(
            summary,
            vec![
                "layout changed (grid -> stack)",
                "widget added: c (image)",
                "widget removed: a (text)",
                "widget updated: b",
            ]
        );
    }

    #[test]
    fn test_nested_change_updates_parent() {
        let old = PageSchema::new("p", SchemaType::Page, "Page", LayoutStrategy::Grid)
            .with_widget(WidgetSchema::new("box", "container").with_child(WidgetSchema::new("x", "text")));
        let mut new = old.clone();
        new.widgets[0].children[0].widget_type = "heading".to_string();

        let changes = diff_schemas(&old, &new);
        assert_eq!(changes.len(), 1);
        assert!(matches!(changes[0], SchemaChange::WidgetUpdated { .. }));
    }
}
