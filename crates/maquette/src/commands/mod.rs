//! Command implementations for the Maquette CLI.

pub mod diff;
pub mod dtos;
pub mod fmt;
pub mod infer;
pub mod merge;
pub mod validate;
pub mod widgets;

use maquette_armature::{parse_schema, PageSchema, ParseOptions};
use maquette_vitrine::WidgetRegistry;
use std::path::Path;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Parse `--format`, exiting on unknown values.
    pub fn from_arg(value: &str) -> Self {
        match value {
            "text" => Self::Text,
            "json" => Self::Json,
            other => {
                eprintln!("Unknown format '{}'. Expected 'text' or 'json'.", other);
                std::process::exit(1);
            }
        }
    }
}

/// Read a file, exiting with a message on failure.
pub fn read_file(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Failed to read {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }
}

/// Read and parse a page schema, exiting with a message on failure.
pub fn read_schema(path: &Path, options: &ParseOptions, registry: &WidgetRegistry) -> PageSchema {
    let content = read_file(path);
    match parse_schema(&content, options, registry) {
        Ok(schema) => schema,
        Err(e) => {
            eprintln!("{}: {}", path.display(), e);
            std::process::exit(1);
        }
    }
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize output: {}", e);
            std::process::exit(1);
        }
    }
}

/// Write `content` to `path`, or print it when no path is given.
pub fn emit(content: &str, output: Option<&Path>) {
    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, content) {
                eprintln!("Failed to write {}: {}", path.display(), e);
                std::process::exit(1);
            }
            tracing::info!("wrote {}", path.display());
        }
        None => println!("{}", content),
    }
}
