//! Which block and which key hold the catalog

use serde::{Deserialize, Serialize};

/// Default label of the block scalar holding the console configuration
pub const DEFAULT_LABEL: &str = "console-configuration.json";

/// Default key of the category list inside the configuration object
pub const DEFAULT_CATEGORIES_KEY: &str = "savedQueries";

/// Names used to find the catalog inside a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    /// Field label introducing the embedded block (`<label>: |`)
    pub label: String,
    /// Top-level key of the category list in the embedded object
    pub categories_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            categories_key: DEFAULT_CATEGORIES_KEY.to_string(),
        }
    }
}

impl Settings {
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_categories_key(mut self, key: impl Into<String>) -> Self {
        self.categories_key = key.into();
        self
    }
}
