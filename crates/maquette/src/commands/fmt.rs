//! Format command - rewrite page schema files in canonical form.

use crate::config::MaquetteConfig;
use clap::Args;
use maquette_armature::{parse_schema, serialize_schema, ParseOptions, SerializeOptions};
use maquette_vitrine::WidgetRegistry;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct FmtArgs {
    /// Schema files to format
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Check formatting without writing (exit with error if files need formatting)
    #[arg(long)]
    pub check: bool,

    /// Write formatted output to files
    #[arg(short, long)]
    pub write: bool,

    /// Number of spaces per indentation level
    #[arg(long)]
    pub indent: Option<usize>,

    /// Emit minified JSON
    #[arg(long)]
    pub minify: bool,

    /// Keep only title and version in the metadata
    #[arg(long)]
    pub minimal_metadata: bool,

    /// Fill missing version and creation timestamp
    #[arg(long)]
    pub fill_defaults: bool,
}

pub fn run(args: FmtArgs, config: &MaquetteConfig) {
    let options = build_serialize_options(&args, config);
    let parse_options = ParseOptions {
        validate: false,
        fill_defaults: args.fill_defaults,
        stamp_created: args.fill_defaults,
    };
    let registry = WidgetRegistry::new();

    let mut changed = 0;
    let mut errored = 0;
    for path in &args.files {
        match process_file(path, &parse_options, &options, &registry, &args) {
            Ok(true) => changed += 1,
            Ok(false) => {}
            Err(e) => {
                eprintln!("Error formatting {}: {}", path.display(), e);
                errored += 1;
            }
        }
    }

    if args.check || args.write {
        eprintln!();
        let verb = if args.check {
            "would be reformatted"
        } else {
            "reformatted"
        };
        eprintln!("Checked {} file(s)", args.files.len());
        if changed > 0 {
            eprintln!("  {} file(s) {}", changed, verb);
        }
    }

    if errored > 0 || (args.check && changed > 0) {
        std::process::exit(1);
    }
}

fn build_serialize_options(args: &FmtArgs, config: &MaquetteConfig) -> SerializeOptions {
    let mut options = config.output;
    if let Some(indent) = args.indent {
        options.indent = indent;
    }
    if args.minify {
        options.pretty = false;
    }
    if args.minimal_metadata {
        options.minimal_metadata = true;
    }
    options
}

/// Format one file; returns whether its content changed.
fn process_file(
    path: &Path,
    parse_options: &ParseOptions,
    options: &SerializeOptions,
    registry: &WidgetRegistry,
    args: &FmtArgs,
) -> Result<bool, String> {
    let source = fs::read_to_string(path).map_err(|e| e.to_string())?;
    let schema = parse_schema(&source, parse_options, registry).map_err(|e| e.to_string())?;
    let formatted = serialize_schema(&schema, options).map_err(|e| e.to_string())?;

    let changed = normalize_eol(&source) != formatted;
    if args.check {
        if changed {
            println!("{}", path.display());
        }
    } else if args.write {
        if changed {
            fs::write(path, format!("{}\n", formatted)).map_err(|e| e.to_string())?;
        }
    } else {
        println!("{}", formatted);
    }

    Ok(changed)
}

fn normalize_eol(source: &str) -> &str {
    source.strip_suffix('\n').unwrap_or(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> FmtArgs {
        FmtArgs {
            files: vec![PathBuf::from("page.json")],
            check: false,
            write: false,
            indent: None,
            minify: false,
            minimal_metadata: false,
            fill_defaults: false,
        }
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = MaquetteConfig::default();
        config.output.indent = 4;
        let options = build_serialize_options(&args(), &config);
        assert_eq!(options.indent, 4);
        assert!(options.pretty);

        let mut flags = args();
        flags.indent = Some(1);
        flags.minify = true;
        let options = build_serialize_options(&flags, &config);
        assert_eq!(options.indent, 1);
        assert!(!options.pretty);
    }

    #[test]
    fn test_normalize_eol() {
        assert_eq!(normalize_eol("{}\n"), "{}");
        assert_eq!(normalize_eol("{}"), "{}");
    }
}
