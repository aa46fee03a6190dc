//! Settings resolution: defaults, then a TOML file, then flags

use std::path::Path;

use qcat_core::Settings;
use serde::Deserialize;

use crate::error::{CliError, Result};
use crate::io::read_text;

/// Layout of a configuration file
///
/// ```toml
/// [catalog]
/// label = "console-configuration.json"
/// categories-key = "savedQueries"
/// ```
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    catalog: Settings,
}

/// Build the effective settings. Flags (and their environment variables)
/// override the file, which overrides the built-in defaults.
pub fn resolve_settings(
    config_path: Option<&Path>,
    label: Option<&str>,
    categories_key: Option<&str>,
) -> Result<Settings> {
    let mut settings = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading configuration file");
            let text = read_text(path)?;
            let file: ConfigFile = toml::from_str(&text).map_err(|source| CliError::Config {
                path: path.to_path_buf(),
                source,
            })?;
            file.catalog
        }
        None => Settings::default(),
    };

    if let Some(label) = label {
        settings = settings.with_label(label);
    }
    if let Some(key) = categories_key {
        settings = settings.with_categories_key(key);
    }

    tracing::debug!(label = %settings.label, key = %settings.categories_key, "Resolved settings");
    Ok(settings)
}
