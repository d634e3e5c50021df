//! # maquette
//!
//! Maquette - Page schemas, widget registries and DTO-to-form inference.
//!
//! ## Name Origin
//!
//! A **maquette** is the small model a sculptor makes before the full piece.
//! This command-line tool works on the models of a low-code builder: it
//! sketches forms from DTOs and checks, compares and merges page schemas
//! before anything is rendered.

mod commands;
mod config;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "maquette")]
#[command(about = "Page schemas, widget registries and DTO-to-form inference", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Infer a form schema from a DTO declaration
    #[command(visible_alias = "croquis")]
    Infer(commands::infer::InferArgs),

    /// List DTO declarations found in a file
    Dtos(commands::dtos::DtosArgs),

    /// Validate a page schema against the widget registry
    Validate(commands::validate::ValidateArgs),

    /// Show changes between two page schemas
    Diff(commands::diff::DiffArgs),

    /// Merge a partial schema into a page schema
    Merge(commands::merge::MergeArgs),

    /// Reformat a page schema file
    Fmt(commands::fmt::FmtArgs),

    /// List or search registered widgets
    #[command(visible_alias = "vitrine")]
    Widgets(commands::widgets::WidgetsArgs),
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = config::load_config(None);

    match cli.command {
        Commands::Infer(args) => commands::infer::run(args, &config),
        Commands::Dtos(args) => commands::dtos::run(args),
        Commands::Validate(args) => commands::validate::run(args, &config),
        Commands::Diff(args) => commands::diff::run(args),
        Commands::Merge(args) => commands::merge::run(args, &config),
        Commands::Fmt(args) => commands::fmt::run(args, &config),
        Commands::Widgets(args) => commands::widgets::run(args, &config),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}
