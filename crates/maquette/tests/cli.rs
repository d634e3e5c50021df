//! End-to-end tests for the `maquette` binary.

use std::path::PathBuf;
use std::process::{Command, Output};

fn maquette(dir: &PathBuf, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_maquette"))
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap()
}

fn workdir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("maquette-cli-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

const USER_DTO: &str = r#"
export interface UserDto {
  id: number;
  email: string;
  age?: number;
  role: 'admin' | 'user';
}
"#;

const PAGE: &str = r#"{
  "id": "home",
  "type": "page",
  "metadata": { "title": "Home", "version": "1.0.0" },
  "layout": { "strategy": "stack" },
  "widgets": [{ "id": "title", "type": "heading", "config": { "text": "Hi" } }]
}"#;

// =============================================================================
// Inference
// =============================================================================

mod infer {
    use super::*;

    #[test]
    fn json_output() {
        let dir = workdir("infer-json");
        std::fs::write(dir.join("user.ts"), USER_DTO).unwrap();

        let output = maquette(&dir, &["infer", "user.ts", "--dto", "UserDto", "--format", "json"]);
        assert!(output.status.success());
        let result: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
        let names: Vec<&str> = result["schema"]["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["id", "email", "age", "role"]);
        assert_eq!(result["schema"]["fields"][1]["type"], "email");
    }

    #[test]
    fn ignore_flag_and_config() {
        let dir = workdir("infer-ignore");
        std::fs::write(dir.join("user.ts"), USER_DTO).unwrap();
        std::fs::write(
            dir.join("maquette.config.json"),
            r#"{ "inference": { "ignoreFields": ["id"] } }"#,
        )
        .unwrap();

        let output = maquette(
            &dir,
            &["infer", "user.ts", "--dto", "UserDto", "--ignore", "age", "--format", "json"],
        );
        assert!(output.status.success());
        let result: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
        assert_eq!(result["ignoredFields"], serde_json::json!(["id", "age"]));
    }

    #[test]
    fn unknown_dto_fails() {
        let dir = workdir("infer-missing");
        std::fs::write(dir.join("user.ts"), USER_DTO).unwrap();

        let output = maquette(&dir, &["infer", "user.ts", "--dto", "OrderDto"]);
        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Available DTOs: UserDto"));
    }
}

// =============================================================================
// Schemas
// =============================================================================

mod schemas {
    use super::*;

    #[test]
    fn validate_reports_unknown_widget() {
        let dir = workdir("validate");
        std::fs::write(dir.join("ok.json"), PAGE).unwrap();
        std::fs::write(dir.join("bad.json"), PAGE.replace("heading", "hologram")).unwrap();

        assert!(maquette(&dir, &["validate", "ok.json"]).status.success());

        let output = maquette(&dir, &["validate", "bad.json", "--format", "json"]);
        assert!(!output.status.success());
        let reports: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
        assert_eq!(reports[0]["valid"], false);
        assert_eq!(reports[0]["issues"][0]["path"], "widgets[0].type");
    }

    #[test]
    fn configured_widget_is_accepted() {
        let dir = workdir("validate-config");
        std::fs::write(dir.join("page.json"), PAGE.replace("heading", "gauge")).unwrap();
        std::fs::write(
            dir.join("maquette.config.json"),
            r#"{ "widgets": [{ "type": "gauge", "category": "data", "label": "Gauge", "renderer": "MqGauge" }] }"#,
        )
        .unwrap();

        assert!(maquette(&dir, &["validate", "page.json"]).status.success());
    }

    #[test]
    fn merge_then_diff() {
        let dir = workdir("merge");
        std::fs::write(dir.join("page.json"), PAGE).unwrap();
        std::fs::write(
            dir.join("patch.json"),
            r#"{ "layout": { "strategy": "grid", "columns": 12 } }"#,
        )
        .unwrap();

        let output = maquette(&dir, &["merge", "page.json", "patch.json", "-o", "merged.json"]);
        assert!(output.status.success());

        let output = maquette(&dir, &["diff", "page.json", "merged.json"]);
        assert!(output.status.success());
        let text = stdout(&output);
        assert!(text.contains("metadata changed"));
        assert!(text.contains("layout changed (stack -> grid)"));
    }

    #[test]
    fn fmt_check_then_write() {
        let dir = workdir("fmt");
        std::fs::write(dir.join("page.json"), PAGE.replace("\n", "")).unwrap();

        assert!(!maquette(&dir, &["fmt", "--check", "page.json"]).status.success());
        assert!(maquette(&dir, &["fmt", "--write", "page.json"]).status.success());
        assert!(maquette(&dir, &["fmt", "--check", "page.json"]).status.success());
    }
}
