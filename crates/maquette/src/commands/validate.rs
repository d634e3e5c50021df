//! Validate command - check page schemas against the widget registry.

use super::{print_json, read_file, OutputFormat};
use crate::config::MaquetteConfig;
use clap::Args;
use maquette_armature::{quick_validate, validate_page_schema, Severity, ValidationResult};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args)]
pub struct ValidateArgs {
    /// Schema files to validate
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Only check the top-level structure
    #[arg(long)]
    pub quick: bool,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

#[derive(Serialize)]
struct FileReport {
    file: String,
    valid: bool,
    #[serde(flatten)]
    result: ValidationResult,
}

pub fn run(args: ValidateArgs, config: &MaquetteConfig) {
    let format = OutputFormat::from_arg(&args.format);
    let registry = config.widget_registry();
    let mut reports = Vec::with_capacity(args.files.len());
    let mut failed = false;

    for path in &args.files {
        let content = read_file(path);
        let result = match serde_json::from_str::<serde_json::Value>(&content) {
            Ok(value) if args.quick => match quick_validate(&value) {
                Ok(()) => ValidationResult::default(),
                Err(e) => single_error("", e.to_string()),
            },
            Ok(value) => validate_page_schema(&value, &registry),
            Err(e) => single_error("", format!("invalid JSON: {}", e)),
        };

        let valid = result.is_valid() && !(args.strict && result.warnings().next().is_some());
        failed |= !valid;
        tracing::debug!(file = %path.display(), issues = result.issues.len(), "validated");
        reports.push(FileReport {
            file: path.display().to_string(),
            valid,
            result,
        });
    }

    match format {
        OutputFormat::Json => print_json(&reports),
        OutputFormat::Text => print_text(&reports),
    }

    if failed {
        std::process::exit(1);
    }
}

fn single_error(path: &str, message: String) -> ValidationResult {
    let mut result = ValidationResult::default();
    result.error(path, message);
    result
}

fn print_text(reports: &[FileReport]) {
    for report in reports {
        if report.result.issues.is_empty() {
            println!("\x1b[32m✓\x1b[0m {}", report.file);
            continue;
        }

        let mark = if report.valid {
            "\x1b[33m!\x1b[0m"
        } else {
            "\x1b[31m✗\x1b[0m"
        };
        println!("{} {}", mark, report.file);
        for issue in &report.result.issues {
            let label = match issue.severity {
                Severity::Error => "\x1b[31merror\x1b[0m",
                Severity::Warning => "\x1b[33mwarning\x1b[0m",
            };
            if issue.path.is_empty() {
                println!("  {}: {}", label, issue.message);
            } else {
                println!("  {} {}: {}", label, issue.path, issue.message);
            }
        }
    }

    let invalid = reports.iter().filter(|r| !r.valid).count();
    println!();
    println!("{} file(s) checked, {} invalid", reports.len(), invalid);
}
