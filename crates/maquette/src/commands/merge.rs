//! Merge command - apply a partial schema on top of a page schema.

use super::{emit, read_file, read_schema};
use crate::config::MaquetteConfig;
use clap::Args;
use maquette_armature::{
    merge_schemas, serialize_schema, validate_page_schema, ParseOptions, SchemaPatch,
};
use std::path::PathBuf;

#[derive(Args)]
pub struct MergeArgs {
    /// Schema to merge into
    pub target: PathBuf,

    /// Partial schema; present top-level keys replace the target's
    pub patch: PathBuf,

    /// Write the merged schema to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fail when the merged schema does not validate
    #[arg(long)]
    pub validate: bool,
}

pub fn run(args: MergeArgs, config: &MaquetteConfig) {
    let registry = config.widget_registry();
    let options = ParseOptions {
        validate: false,
        fill_defaults: true,
        stamp_created: true,
    };
    let target = read_schema(&args.target, &options, &registry);

    let patch: SchemaPatch = match serde_json::from_str(&read_file(&args.patch)) {
        Ok(patch) => patch,
        Err(e) => {
            eprintln!("{}: {}", args.patch.display(), e);
            std::process::exit(1);
        }
    };

    let merged = merge_schemas(&target, patch);

    if args.validate {
        let value = match serde_json::to_value(&merged) {
            Ok(value) => value,
            Err(e) => {
                eprintln!("Failed to serialize merged schema: {}", e);
                std::process::exit(1);
            }
        };
        let result = validate_page_schema(&value, &registry);
        if !result.is_valid() {
            eprintln!("Merged schema is invalid:\n{}", result.error_report());
            std::process::exit(1);
        }
    }

    match serialize_schema(&merged, &config.output) {
        Ok(text) => emit(&text, args.output.as_deref()),
        Err(e) => {
            eprintln!("Failed to serialize merged schema: {}", e);
            std::process::exit(1);
        }
    }
}
