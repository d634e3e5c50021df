//! Schema parse, validate, diff and merge tests against the built-in registry.

use maquette_armature::{
    diff_schemas, merge_schemas, parse_schema, parse_schema_value, serialize_schema,
    validate_page_schema, LayoutStrategy, PageSchema, ParseOptions, SchemaPatch, SchemaType,
    SerializeOptions, Severity, WidgetSchema,
};
use maquette_vitrine::WidgetRegistry;
use serde_json::{json, Value};

fn page(schema_type: &str, widgets: Value) -> Value {
    json!({
        "id": "sample",
        "type": schema_type,
        "metadata": {
            "title": "Sample",
            "version": "2.1.0",
            "createdAt": "2024-05-01T10:00:00.000Z",
            "tags": ["demo"]
        },
        "layout": { "strategy": "grid", "columns": 12, "gap": 8 },
        "widgets": widgets
    })
}

fn errors(value: &Value) -> Vec<(String, String)> {
    let registry = WidgetRegistry::with_builtins();
    validate_page_schema(value, &registry)
        .errors()
        .map(|e| (e.path.clone(), e.message.clone()))
        .collect()
}

// =============================================================================
// Round trip
// =============================================================================

mod round_trip {
    use super::*;

    #[test]
    fn parse_serialize_parse_is_stable() {
        let registry = WidgetRegistry::with_builtins();
        let value = page(
            "page",
            json!([
                {
                    "id": "hero",
                    "type": "container",
                    "position": { "x": 0, "y": 0, "w": 12, "h": 4 },
                    "visible": "user.loggedIn",
                    "children": [
                        { "id": "title", "type": "heading", "config": { "text": "Welcome", "level": 1 } },
                        { "id": "cta", "type": "button", "visible": true, "bindings": { "text": "$t.cta" } }
                    ]
                },
                { "id": "img", "type": "image", "metadata": { "note": "lazy" } }
            ]),
        );

        let schema = parse_schema_value(value, &ParseOptions::default(), &registry).unwrap();
        for options in [SerializeOptions::default(), SerializeOptions::minified()] {
            let text = serialize_schema(&schema, &options).unwrap();
            let again = parse_schema(&text, &ParseOptions::default(), &registry).unwrap();
            assert_eq!(again, schema);
        }
    }

    #[test]
    fn built_schema_without_timestamps_is_stable() {
        let registry = WidgetRegistry::with_builtins();
        let schema = PageSchema::new("home", SchemaType::Page, "Home", LayoutStrategy::Stack)
            .with_widget(
                WidgetSchema::new("title", "heading").with_config(json!({ "text": "Hi" })),
            );
        assert!(schema.metadata.created_at.is_none());

        let text = serialize_schema(&schema, &SerializeOptions::default()).unwrap();
        let back = parse_schema(&text, &ParseOptions::default(), &registry).unwrap();
        assert_eq!(back.metadata.created_at, None);
        assert_eq!(back, schema);
    }

    #[test]
    fn diff_of_identical_schemas_is_empty() {
        let registry = WidgetRegistry::with_builtins();
        let value = page("page", json!([{ "id": "a", "type": "text" }]));
        let schema = parse_schema_value(value, &ParseOptions::default(), &registry).unwrap();
        assert!(diff_schemas(&schema, &schema).is_empty());
        assert!(diff_schemas(&schema, &schema.clone()).is_empty());
    }
}

// =============================================================================
// Validation
// =============================================================================

mod validation {
    use super::*;

    #[test]
    fn unregistered_type_is_one_error() {
        let value = page("page", json!([{ "id": "w", "type": "hologram" }]));
        let errors = errors(&value);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, "widgets[0].type");
        assert!(errors[0].1.contains("hologram"));
    }

    #[test]
    fn duplicate_ids_reported_once_per_id() {
        let value = page(
            "page",
            json!([
                { "id": "a", "type": "text" },
                { "id": "box", "type": "container", "children": [
                    { "id": "a", "type": "text" },
                    { "id": "b", "type": "text" },
                    { "id": "a", "type": "text" }
                ]},
                { "id": "b", "type": "text" }
            ]),
        );
        let errors = errors(&value);
        assert_eq!(
            errors,
            vec![
                (
                    "widgets[1].children[0].id".to_string(),
                    "Duplicate widget id 'a'".to_string()
                ),
                (
                    "widgets[2].id".to_string(),
                    "Duplicate widget id 'b'".to_string()
                ),
            ]
        );
    }

    #[test]
    fn form_inputs_need_unique_names() {
        let value = page(
            "form",
            json!([
                { "id": "f1", "type": "text-input", "config": { "name": "email" } },
                { "id": "f2", "type": "text-input", "config": { "name": "email" } },
                { "id": "f3", "type": "checkbox", "config": {} },
                { "id": "f4", "type": "button", "config": {} }
            ]),
        );
        let errors = errors(&value);
        let paths: Vec<&str> = errors.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(paths, vec!["widgets[1].config.name", "widgets[2].config.name"]);
    }

    #[test]
    fn empty_form_is_invalid() {
        let errors = errors(&page("form", json!([])));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, "widgets");
    }

    #[test]
    fn dashboard_checks() {
        let registry = WidgetRegistry::with_builtins();
        let mut value = page(
            "dashboard",
            json!([
                { "id": "sales", "type": "chart", "position": { "x": 0, "y": 0 }, "dataSource": "orders" },
                { "id": "users", "type": "table", "dataSource": "people" }
            ]),
        );
        value["dataSources"] = json!([{ "id": "orders", "type": "rest", "url": "/api/orders" }]);

        let result = validate_page_schema(&value, &registry);
        let issues: Vec<(Severity, &str)> = result
            .issues
            .iter()
            .map(|i| (i.severity, i.path.as_str()))
            .collect();
        assert_eq!(
            issues,
            vec![
                (Severity::Warning, "widgets[1].position"),
                (Severity::Error, "widgets[1].dataSource"),
            ]
        );
    }

    #[test]
    fn parse_rejects_invalid_with_report() {
        let registry = WidgetRegistry::with_builtins();
        let value = page("page", json!([{ "id": "w", "type": "hologram" }]));
        let err = parse_schema_value(value, &ParseOptions::default(), &registry).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @r"
        schema validation failed:
        widgets[0].type: Widget type 'hologram' is not registered
        ");
    }
}

// =============================================================================
// Merge
// =============================================================================

mod merge {
    use super::*;

    #[test]
    fn merge_then_diff() {
        let registry = WidgetRegistry::with_builtins();
        let target = parse_schema_value(
            page("page", json!([{ "id": "a", "type": "text" }])),
            &ParseOptions::default(),
            &registry,
        )
        .unwrap();

        let patch: SchemaPatch = serde_json::from_value(json!({
            "metadata": { "author": "rui" },
            "widgets": [{ "id": "a", "type": "text" }, { "id": "b", "type": "image" }]
        }))
        .unwrap();
        let merged = merge_schemas(&target, patch);

        assert_eq!(merged.metadata.title, "Sample");
        assert_eq!(merged.metadata.author.as_deref(), Some("rui"));
        assert_eq!(merged.layout, target.layout);

        let summary: Vec<String> = diff_schemas(&target, &merged)
            .iter()
            .map(|c| c.describe())
            .collect();
        assert_eq!(summary, vec!["metadata changed", "widget added: b (image)"]);
    }
}
