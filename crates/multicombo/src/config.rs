//! Serde-loadable configuration of a control.
//!
//! ```toml
//! limit = 2
//! separator = " | "
//! max_visible_items = 8
//! placeholder = "Choose..."
//!
//! [palette]
//! background = "#1C1C1E"
//! foreground = "#FFFFFF"
//! ```

use std::path::Path;

use multicombo_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::DEFAULT_SEPARATOR;
use crate::render::ListPalette;
use crate::widget::{DEFAULT_MAX_VISIBLE_ITEMS, EMPTY_PLACEHOLDER};

/// Configuration of a [`DropdownController`](crate::DropdownController).
///
/// Every field is optional in the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboConfig {
    /// Maximum number of checked items. `0` means unlimited.
    pub limit: usize,
    /// Text placed between item texts in the summary.
    pub separator: String,
    /// Rows rendered at once before the popup scrolls.
    pub max_visible_items: usize,
    /// Summary shown when nothing is checked.
    pub placeholder: String,
    /// Row colors.
    pub palette: ListPalette,
}

impl Default for ComboConfig {
    fn default() -> Self {
        Self {
            limit: 0,
            separator: DEFAULT_SEPARATOR.to_string(),
            max_visible_items: DEFAULT_MAX_VISIBLE_ITEMS,
            placeholder: EMPTY_PLACEHOLDER.to_string(),
            palette: ListPalette::default(),
        }
    }
}

impl ComboConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file. The format follows the extension
    /// (`.toml` or `.json`).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(Error::invalid_config(
                    "path",
                    format!("unsupported configuration format: {}", path.display()),
                ));
            }
        };

        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = parse(&content)?;

        tracing::info!(
            target: targets::CONFIG,
            path = %path.display(),
            limit = config.limit,
            "loaded combo configuration"
        );
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.max_visible_items == 0 {
            return Err(Error::invalid_config(
                "max_visible_items",
                "must be at least 1",
            ));
        }
        if self.placeholder.is_empty() {
            return Err(Error::invalid_config(
                "placeholder",
                "must not be empty; use \" \" for a blank caption",
            ));
        }
        Ok(())
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
