//! Configuration file support for Maquette.
//!
//! Loads `maquette.config.json` from the working directory.

use maquette_armature::SerializeOptions;
use maquette_croquis::InferenceConfig;
use maquette_vitrine::{WidgetDefinition, WidgetRegistry};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "maquette.config.json";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaquetteConfig {
    /// JSON Schema reference (ignored at runtime).
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Defaults for `maquette infer`.
    pub inference: InferenceConfig,

    /// Project widgets registered next to the built-in ones.
    pub widgets: Vec<WidgetDefinition>,

    /// Output settings for commands that write schemas.
    pub output: SerializeOptions,
}

impl MaquetteConfig {
    /// Built-in widgets plus the project widgets.
    ///
    /// Widgets that fail to register are reported and skipped.
    pub fn widget_registry(&self) -> WidgetRegistry {
        let registry = WidgetRegistry::with_builtins();
        for widget in &self.widgets {
            if let Err(e) = registry.register(widget.clone()) {
                tracing::warn!(widget = %widget.widget_type, "skipping configured widget: {}", e);
            }
        }
        registry
    }
}

/// Load configuration from `maquette.config.json`.
///
/// Searches the given directory (or cwd if None). A missing file yields the
/// defaults; an unreadable or malformed one is reported and also yields them.
pub fn load_config(dir: Option<&Path>) -> MaquetteConfig {
    let base = dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
    let path = base.join(CONFIG_FILE_NAME);

    if !path.exists() {
        return MaquetteConfig::default();
    }

    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("failed to read {}: {}", path.display(), e);
            return MaquetteConfig::default();
        }
    };

    parse_config(&content).unwrap_or_else(|e| {
        tracing::warn!("failed to parse {}: {}", path.display(), e);
        MaquetteConfig::default()
    })
}

fn parse_config(content: &str) -> Result<MaquetteConfig, serde_json::Error> {
    serde_json::from_str(content)
}
