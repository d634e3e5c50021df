//! Diff command - list changes between two page schemas.

use super::{print_json, read_schema, OutputFormat};
use clap::Args;
use maquette_armature::{diff_schemas, ParseOptions};
use maquette_vitrine::WidgetRegistry;
use std::path::PathBuf;

#[derive(Args)]
pub struct DiffArgs {
    /// Original schema
    pub old: PathBuf,

    /// Updated schema
    pub new: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Exit with status 1 when the schemas differ
    #[arg(long)]
    pub exit_code: bool,
}

pub fn run(args: DiffArgs) {
    let format = OutputFormat::from_arg(&args.format);
    let options = ParseOptions {
        validate: false,
        fill_defaults: false,
        stamp_created: false,
    };
    let registry = WidgetRegistry::new();

    let old = read_schema(&args.old, &options, &registry);
    let new = read_schema(&args.new, &options, &registry);
    let changes = diff_schemas(&old, &new);

    match format {
        OutputFormat::Json => print_json(&changes),
        OutputFormat::Text if changes.is_empty() => println!("No changes"),
        OutputFormat::Text => {
            for change in &changes {
                println!("{}", change.describe());
            }
        }
    }

    if args.exit_code && !changes.is_empty() {
        std::process::exit(1);
    }
}
