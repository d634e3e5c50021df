//! Keyed in-memory registry.

use crate::component::ComponentMetadata;
use crate::entry::RegistryEntry;
use crate::error::RegistryError;
use crate::widget::{builtin_widgets, WidgetDefinition};
use maquette_carton::FxHashMap;
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::BTreeMap;

/// Registry of widget definitions keyed by widget type.
pub type WidgetRegistry = Registry<WidgetDefinition>;

/// Registry of component metadata keyed by component name.
pub type ComponentRegistry = Registry<ComponentMetadata>;

/// Counts over the registered entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryStats {
    pub total: usize,
    pub by_category: BTreeMap<String, usize>,
    pub experimental: usize,
    /// Entries with at least one capability flag.
    pub capable: usize,
    /// Entries with a non-empty description.
    pub documented: usize,
}

/// Caller-owned store of entries, safe to share between threads.
pub struct Registry<T: RegistryEntry> {
    entries: RwLock<FxHashMap<String, T>>,
}

impl<T: RegistryEntry> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RegistryEntry> Registry<T> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
        }
    }

    /// Store `entry` under its key, replacing any previous entry.
    pub fn register(&self, entry: T) -> Result<(), RegistryError> {
        let key = entry.key();
        if key.is_empty() {
            return Err(RegistryError::EmptyKey);
        }
        if !entry.is_renderable() {
            return Err(RegistryError::MissingRenderable {
                key: key.to_string(),
            });
        }

        let key = key.to_string();
        let mut entries = self.entries.write();
        if entries.contains_key(&key) {
            tracing::warn!(key = %key, "registry entry already exists, overwriting");
        }
        entries.insert(key, entry);
        Ok(())
    }

    /// Register several entries, stopping at the first failure.
    pub fn register_all(&self, entries: impl IntoIterator<Item = T>) -> Result<usize, RegistryError> {
        let mut count = 0;
        for entry in entries {
            self.register(entry)?;
            count += 1;
        }
        Ok(count)
    }

    pub fn unregister(&self, key: &str) -> Option<T> {
        self.entries.write().remove(key)
    }

    pub fn get(&self, key: &str) -> Option<T> {
        self.entries.read().get(key).cloned()
    }

    #[inline]
    pub fn has(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Every entry, sorted by key.
    pub fn get_all(&self) -> Vec<T> {
        self.collect(|_| true)
    }

    pub fn get_by_category(&self, category: &str) -> Vec<T> {
        self.collect(|entry| entry.category() == category)
    }

    /// Case-insensitive substring search over key, label, description and tags.
    pub fn search(&self, query: &str) -> Vec<T> {
        let query = query.trim().to_lowercase();
        self.collect(|entry| entry.matches(&query))
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn stats(&self) -> RegistryStats {
        let entries = self.entries.read();
        let mut stats = RegistryStats {
            total: entries.len(),
            ..Default::default()
        };

        for entry in entries.values() {
            *stats
                .by_category
                .entry(entry.category().to_string())
                .or_insert(0) += 1;
            if entry.is_experimental() {
                stats.experimental += 1;
            }
            if entry.capabilities().any() {
                stats.capable += 1;
            }
            if entry.description().is_some_and(|d| !d.trim().is_empty()) {
                stats.documented += 1;
            }
        }

        stats
    }

    /// Export all entries as a JSON array sorted by key.
    ///
    /// Component handles are not part of the output.
    pub fn to_json(&self) -> Result<serde_json::Value, RegistryError> {
        Ok(serde_json::to_value(self.get_all())?)
    }

    fn collect(&self, filter: impl Fn(&T) -> bool) -> Vec<T> {
        let entries = self.entries.read();
        let mut found: Vec<(&String, &T)> = entries.iter().filter(|(_, e)| filter(e)).collect();
        found.sort_by(|a, b| a.0.cmp(b.0));
        found.into_iter().map(|(_, e)| e.clone()).collect()
    }
}

impl WidgetRegistry {
    /// Registry seeded with [`builtin_widgets`].
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        {
            let mut entries = registry.entries.write();
            for widget in builtin_widgets() {
                entries.insert(widget.widget_type.clone(), widget);
            }
        }
        registry
    }
}
