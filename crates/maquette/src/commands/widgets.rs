//! Widgets command - browse the widget registry.

use super::{print_json, OutputFormat};
use crate::config::MaquetteConfig;
use clap::Args;
use maquette_vitrine::{RegistryEntry, WidgetDefinition};

#[derive(Args)]
pub struct WidgetsArgs {
    /// Case-insensitive search over type, label, description and tags
    pub query: Option<String>,

    /// Only list widgets of this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Print registry statistics instead of the list
    #[arg(long)]
    pub stats: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn run(args: WidgetsArgs, config: &MaquetteConfig) {
    let format = OutputFormat::from_arg(&args.format);
    let registry = config.widget_registry();

    if args.stats {
        let stats = registry.stats();
        match format {
            OutputFormat::Json => print_json(&stats),
            OutputFormat::Text => {
                println!("{} widget(s)", stats.total);
                for (category, count) in &stats.by_category {
                    println!("  {:<10} {}", category, count);
                }
                println!("experimental: {}", stats.experimental);
                println!("with capabilities: {}", stats.capable);
                println!("documented: {}", stats.documented);
            }
        }
        return;
    }

    let mut widgets = match args.query.as_deref() {
        Some(query) => registry.search(query),
        None => registry.get_all(),
    };
    if let Some(category) = args.category.as_deref() {
        widgets.retain(|w| w.category == category);
    }

    match format {
        OutputFormat::Json => print_json(&widgets),
        OutputFormat::Text => print_text(&widgets),
    }
}

fn print_text(widgets: &[WidgetDefinition]) {
    if widgets.is_empty() {
        println!("No widgets found");
        return;
    }
    for widget in widgets {
        let experimental = if widget.is_experimental() {
            " (experimental)"
        } else {
            ""
        };
        println!(
            "{:<14} {:<8} {}{}",
            widget.key(),
            widget.category,
            widget.label,
            experimental
        );
    }
}
