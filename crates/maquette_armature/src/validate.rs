//! Structural and full validation of page schemas.
//!
//! Both checks work on raw JSON so that a malformed document yields a list
//! of findings instead of a single deserialization error.

use crate::error::{SchemaError, SchemaResult};
use crate::types::{LayoutStrategy, SchemaType};
use maquette_carton::{FxHashMap, FxHashSet};
use maquette_vitrine::WidgetRegistry;
use serde::Serialize;
use serde_json::{Map, Value};

/// Severity of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// JSON path, e.g. `widgets[0].children[1].type`.
    pub path: String,
    pub message: String,
    pub severity: Severity,
}

/// All findings of a validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// No errors; warnings are allowed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
    }

    /// Errors as `path: message`, one per line.
    pub fn error_report(&self) -> String {
        self.errors()
            .map(|i| format!("{}: {}", i.path, i.message))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Record an error.
    pub fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            path: path.into(),
            message: message.into(),
            severity: Severity::Error,
        });
    }

    /// Record a warning.
    pub fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            path: path.into(),
            message: message.into(),
            severity: Severity::Warning,
        });
    }
}

/// Cheap shape check: an object with `id`, `type`, `metadata`, `layout`
/// and a `widgets` array.
pub fn quick_validate(value: &Value) -> SchemaResult<()> {
    let Some(object) = value.as_object() else {
        return Err(SchemaError::Structure("schema must be a JSON object".to_string()));
    };

    let missing: Vec<&str> = ["id", "type", "metadata", "layout", "widgets"]
        .into_iter()
        .filter(|key| !object.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        return Err(SchemaError::Structure(format!(
            "missing required keys: {}",
            missing.join(", ")
        )));
    }
    if !object["widgets"].is_array() {
        return Err(SchemaError::Structure("'widgets' must be an array".to_string()));
    }

    Ok(())
}

/// Full validation against the widget registry.
pub fn validate_page_schema(value: &Value, registry: &WidgetRegistry) -> ValidationResult {
    let mut result = ValidationResult::default();
    let Some(schema) = value.as_object() else {
        result.error("", "Schema must be an object");
        return result;
    };

    if non_empty_str(schema.get("id")).is_none() {
        result.error("id", "Schema id is required");
    }

    let schema_type = match schema.get("type").and_then(Value::as_str) {
        Some(t) => {
            let parsed = SchemaType::parse(t);
            if parsed.is_none() {
                result.error(
                    "type",
                    format!(
                        "Invalid schema type '{t}'. {}",
                        expected(&SchemaType::ALL.map(SchemaType::as_str))
                    ),
                );
            }
            parsed
        }
        None => {
            result.error("type", "Schema type is required");
            None
        }
    };

    validate_metadata(schema.get("metadata"), &mut result);
    validate_layout(schema.get("layout"), &mut result);

    let Some(widgets) = schema.get("widgets").and_then(Value::as_array) else {
        result.error("widgets", "Widgets must be an array");
        return result;
    };

    let mut walker = WidgetWalker {
        registry,
        result: &mut result,
        id_counts: FxHashMap::default(),
        duplicates: Vec::new(),
    };
    for (i, widget) in widgets.iter().enumerate() {
        walker.visit(widget, &format!("widgets[{i}]"));
    }
    for (id, path) in std::mem::take(&mut walker.duplicates) {
        walker.result.error(path, format!("Duplicate widget id '{id}'"));
    }

    match schema_type {
        Some(SchemaType::Form) => validate_form(widgets, registry, &mut result),
        Some(SchemaType::Dashboard) => validate_dashboard(schema, widgets, &mut result),
        _ => {}
    }

    tracing::debug!(
        errors = result.errors().count(),
        warnings = result.warnings().count(),
        "validated page schema"
    );
    result
}

fn validate_metadata(metadata: Option<&Value>, result: &mut ValidationResult) {
    let Some(metadata) = metadata.and_then(Value::as_object) else {
        result.error("metadata", "Metadata is required");
        return;
    };

    if non_empty_str(metadata.get("title")).is_none() {
        result.error("metadata.title", "Title is required");
    }
    if !metadata.contains_key("version") {
        result.warn("metadata.version", "Version not set, assuming 1.0.0");
    }
    if !metadata.contains_key("createdAt") {
        result.warn("metadata.createdAt", "Creation date not set");
    }
}

fn validate_layout(layout: Option<&Value>, result: &mut ValidationResult) {
    let Some(layout) = layout.and_then(Value::as_object) else {
        result.error("layout", "Layout is required");
        return;
    };

    let strategy = layout.get("strategy").and_then(Value::as_str);
    if strategy.and_then(LayoutStrategy::parse).is_none() {
        result.error(
            "layout.strategy",
            format!(
                "Invalid layout strategy '{}'. {}",
                strategy.unwrap_or_default(),
                expected(&LayoutStrategy::ALL.map(LayoutStrategy::as_str))
            ),
        );
    }
}

/// Recursive per-widget checks plus id bookkeeping.
struct WidgetWalker<'a> {
    registry: &'a WidgetRegistry,
    result: &'a mut ValidationResult,
    id_counts: FxHashMap<String, usize>,
    /// First repeated occurrence of each duplicated id.
    duplicates: Vec<(String, String)>,
}

impl WidgetWalker<'_> {
    fn visit(&mut self, widget: &Value, path: &str) {
        let Some(object) = widget.as_object() else {
            self.result.error(path, "Widget must be an object");
            return;
        };

        match non_empty_str(object.get("id")) {
            Some(id) => {
                let count = self.id_counts.entry(id.to_string()).or_insert(0);
                *count += 1;
                if *count == 2 {
                    self.duplicates.push((id.to_string(), format!("{path}.id")));
                }
            }
            None => self.result.error(format!("{path}.id"), "Widget id is required"),
        }

        match non_empty_str(object.get("type")) {
            Some(widget_type) if !self.registry.has(widget_type) => self.result.error(
                format!("{path}.type"),
                format!("Widget type '{widget_type}' is not registered"),
            ),
            Some(_) => {}
            None => self
                .result
                .error(format!("{path}.type"), "Widget type is required"),
        }

        if let Some(position) = object.get("position") {
            let numeric = |key: &str| position.get(key).is_some_and(Value::is_number);
            if !(numeric("x") && numeric("y")) {
                self.result
                    .error(format!("{path}.position"), "Position needs numeric x and y");
            }
        }

        match object.get("children") {
            Some(Value::Array(children)) => {
                for (i, child) in children.iter().enumerate() {
                    self.visit(child, &format!("{path}.children[{i}]"));
                }
            }
            Some(_) => self
                .result
                .error(format!("{path}.children"), "Children must be an array"),
            None => {}
        }
    }
}

fn validate_form(widgets: &[Value], registry: &WidgetRegistry, result: &mut ValidationResult) {
    if widgets.is_empty() {
        result.error("widgets", "A form needs at least one widget");
        return;
    }

    let mut names = FxHashSet::default();
    let mut reported = FxHashSet::default();
    walk_values(widgets, "widgets", &mut |widget: &Value, path: &str| {
        let is_input = widget
            .get("type")
            .and_then(Value::as_str)
            .and_then(|t| registry.get(t))
            .is_some_and(|definition| definition.is_form_input());
        if !is_input {
            return;
        }

        match non_empty_str(widget.get("config").and_then(|c| c.get("name"))) {
            Some(name) => {
                if !names.insert(name.to_string()) && reported.insert(name.to_string()) {
                    result.error(
                        format!("{path}.config.name"),
                        format!("Duplicate field name '{name}'"),
                    );
                }
            }
            None => result.error(
                format!("{path}.config.name"),
                "Form inputs need a config.name",
            ),
        }
    });
}

fn validate_dashboard(schema: &Map<String, Value>, widgets: &[Value], result: &mut ValidationResult) {
    let sources: FxHashSet<&str> = schema
        .get("dataSources")
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .filter_map(|s| s.get("id").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default();

    walk_values(widgets, "widgets", &mut |widget: &Value, path: &str| {
        if widget.get("position").is_none() {
            result.warn(format!("{path}.position"), "Dashboard widget has no position");
        }
        if let Some(source) = widget.get("dataSource").and_then(Value::as_str) {
            if !sources.contains(source) {
                result.error(
                    format!("{path}.dataSource"),
                    format!("Unknown data source '{source}'"),
                );
            }
        }
    });
}

/// Depth-first walk over raw widget objects with their paths.
fn walk_values(widgets: &[Value], base: &str, f: &mut dyn FnMut(&Value, &str)) {
    for (i, widget) in widgets.iter().enumerate() {
        let path = format!("{base}[{i}]");
        if !widget.is_object() {
            continue;
        }
        f(widget, &path);
        if let Some(children) = widget.get("children").and_then(Value::as_array) {
            walk_values(children, &format!("{path}.children"), f);
        }
    }
}

#[inline]
fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

fn expected(values: &[&str]) -> String {
    format!("Expected one of: {}", values.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema(widgets: Value) -> Value {
        json!({
            "id": "home",
            "type": "page",
            "metadata": { "title": "Home", "version": "1.0.0", "createdAt": "2024-01-01T00:00:00.000Z" },
            "layout": { "strategy": "grid" },
            "widgets": widgets
        })
    }

    #[test]
    fn test_quick_validate() {
        assert!(quick_validate(&schema(json!([]))).is_ok());
        let err = quick_validate(&json!({"id": "x", "widgets": {}})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid schema structure: missing required keys: type, metadata, layout"
        );
        assert!(quick_validate(&json!([])).is_err());
    }

    #[test]
    fn test_valid_schema() {
        let registry = WidgetRegistry::with_builtins();
        let result = validate_page_schema(
            &schema(json!([{ "id": "h", "type": "heading", "config": {} }])),
            &registry,
        );
        assert!(result.issues.is_empty(), "{:?}", result.issues);
    }

    #[test]
    fn test_missing_version_is_warning() {
        let registry = WidgetRegistry::with_builtins();
        let mut value = schema(json!([]));
        value["metadata"] = json!({ "title": "Home" });
        let result = validate_page_schema(&value, &registry);
        assert!(result.is_valid());
        let paths: Vec<&str> = result.warnings().map(|w| w.path.as_str()).collect();
        assert_eq!(paths, vec!["metadata.version", "metadata.createdAt"]);
    }

    #[test]
    fn test_bad_type_and_strategy() {
        let registry = WidgetRegistry::with_builtins();
        let mut value = schema(json!([]));
        value["type"] = json!("report");
        value["layout"] = json!({ "strategy": "masonry" });
        let result = validate_page_schema(&value, &registry);
        insta::assert_snapshot!(result.error_report(), @r"
        type: Invalid schema type 'report'. Expected one of: page, form, layout, dashboard, workflow
        layout.strategy: Invalid layout strategy 'masonry'. Expected one of: grid, flex, absolute, stack
        ");
    }

    #[test]
    fn test_nested_widget_checks() {
        let registry = WidgetRegistry::with_builtins();
        let value = schema(json!([{
            "id": "box",
            "type": "container",
            "children": [
                { "id": "", "type": "text" },
                { "id": "p", "type": "text", "position": { "x": "1", "y": 2 } }
            ]
        }]));
        let result = validate_page_schema(&value, &registry);
        let paths: Vec<&str> = result.errors().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["widgets[0].children[0].id", "widgets[0].children[1].position"]
        );
    }
}
