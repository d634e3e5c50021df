//! Infer command - generate a form schema from a DTO.

use super::{emit, read_file, OutputFormat};
use crate::config::MaquetteConfig;
use clap::Args;
use maquette_croquis::{infer_schema_from_dto, ComplexStrategy, InferenceHooks, InferenceResult};
use std::path::PathBuf;

#[derive(Args)]
pub struct InferArgs {
    /// File declaring the DTO (.ts or .vue)
    pub file: PathBuf,

    /// Name of the DTO to infer a form from
    #[arg(short, long)]
    pub dto: String,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Expansion of nested DTOs (flatten, nested, json)
    #[arg(long)]
    pub strategy: Option<String>,

    /// Fields to skip, comma separated (dotted paths allowed)
    #[arg(long, value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Maximum depth for nested DTO expansion
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Do not attach inferred validation rules
    #[arg(long)]
    pub no_validations: bool,

    /// Write the JSON result to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: InferArgs, config: &MaquetteConfig) {
    let format = OutputFormat::from_arg(&args.format);
    let source = read_file(&args.file);

    let mut inference = config.inference.clone();
    if let Some(strategy) = args.strategy.as_deref() {
        inference.complex_strategy = parse_strategy(strategy);
    }
    if let Some(depth) = args.max_depth {
        inference.max_depth = depth;
    }
    if args.no_validations {
        inference.infer_validations = false;
    }
    inference.ignore_fields.extend(args.ignore);

    let result = match infer_schema_from_dto(&source, &args.dto, &inference, &InferenceHooks::new()) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{}: {}", args.file.display(), e);
            std::process::exit(1);
        }
    };

    if format == OutputFormat::Json || args.output.is_some() {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => emit(&json, args.output.as_deref()),
            Err(e) => {
                eprintln!("Failed to serialize result: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", render_text(&result));
}

fn parse_strategy(value: &str) -> ComplexStrategy {
    match value {
        "flatten" => ComplexStrategy::Flatten,
        "nested" => ComplexStrategy::Nested,
        "json" => ComplexStrategy::Json,
        other => {
            eprintln!(
                "Unknown strategy '{}'. Expected 'flatten', 'nested' or 'json'.",
                other
            );
            std::process::exit(1);
        }
    }
}

fn render_text(result: &InferenceResult) -> String {
    let schema = &result.schema;
    let mut out = format!(
        "{} ({} fields, confidence {:.2})\n",
        schema.title,
        schema.fields.len(),
        result.confidence
    );

    let width = schema
        .fields
        .iter()
        .map(|f| f.name.len())
        .max()
        .unwrap_or(0);
    for field in &schema.fields {
        let mut notes = Vec::new();
        if field.required {
            notes.push("required".to_string());
        }
        if !field.validations.is_empty() {
            let rules: Vec<&str> = field.validations.iter().map(|r| r.kind.as_str()).collect();
            notes.push(rules.join(","));
        }
        out.push_str(&format!(
            "  {:width$}  {:<12} {}\n",
            field.name,
            field.kind.as_str(),
            notes.join(" "),
            width = width
        ));
    }

    if !result.ignored_fields.is_empty() {
        out.push_str(&format!("ignored: {}\n", result.ignored_fields.join(", ")));
    }
    for warning in &result.warnings {
        out.push_str(&format!("\x1b[33mwarning:\x1b[0m {}\n", warning));
    }
    out
}
