//! Dtos command - list the DTO declarations of a file.

use super::{print_json, read_file, OutputFormat};
use clap::Args;
use maquette_croquis::{analyze_dtos, extract_script, DtoKind};
use std::path::PathBuf;

#[derive(Args)]
pub struct DtosArgs {
    /// File to analyze (.ts or .vue)
    pub file: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn run(args: DtosArgs) {
    let format = OutputFormat::from_arg(&args.format);
    let source = read_file(&args.file);
    let dtos = analyze_dtos(&extract_script(&source));

    if format == OutputFormat::Json {
        print_json(&dtos);
        return;
    }

    if dtos.is_empty() {
        println!("No DTOs found in {}", args.file.display());
        return;
    }

    for dto in &dtos {
        let kind = match dto.kind {
            DtoKind::Interface => "interface",
            DtoKind::Type => "type",
            DtoKind::Class => "class",
        };
        let extends = dto
            .extends
            .as_ref()
            .map(|parents| format!(" extends {}", parents.join(", ")))
            .unwrap_or_default();
        println!(
            "{} {}{} ({} properties)",
            kind,
            dto.name,
            extends,
            dto.properties.len()
        );
    }
}
