//! Controller configuration.
//!
//! [`AutocompleteConfig`] holds the settable knobs of a controller. It can be
//! built in code, or loaded from JSON or TOML:
//!
//! ```toml
//! debounce_ms = 150
//! min_length = 2
//! primary_field = "name"
//! secondary_field = "country"
//! class_prefix = "city-"
//! ```
//!
//! Missing keys take their defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AutocompleteError, Result};

/// Default debounce delay in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Default minimum query length for remote lookups.
pub const DEFAULT_MIN_LENGTH: usize = 1;

/// Default primary label field.
pub const DEFAULT_PRIMARY_FIELD: &str = "title";

/// Default secondary label field.
pub const DEFAULT_SECONDARY_FIELD: &str = "subtitle";

/// Default CSS class prefix.
pub const DEFAULT_CLASS_PREFIX: &str = "ac-";

/// Settable options of an autocomplete controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    /// Delay between the last keystroke and the lookup, in milliseconds.
    pub debounce_ms: u64,
    /// Queries with fewer characters than this clear the results instead of
    /// hitting the remote endpoint. Custom lookups ignore it.
    pub min_length: usize,
    /// Candidate field shown as the row's main text and copied into the input
    /// on selection.
    pub primary_field: String,
    /// Candidate field shown under the primary text.
    pub secondary_field: String,
    /// Prefix for every class name the controller emits.
    pub class_prefix: String,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_length: DEFAULT_MIN_LENGTH,
            primary_field: DEFAULT_PRIMARY_FIELD.to_string(),
            secondary_field: DEFAULT_SECONDARY_FIELD.to_string(),
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
        }
    }
}

impl AutocompleteConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// The debounce delay.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// A class name under the configured prefix.
    ///
    /// ```
    /// use horizon_autocomplete::AutocompleteConfig;
    ///
    /// assert_eq!(AutocompleteConfig::default().class("row"), "ac-row");
    /// ```
    pub fn class(&self, name: &str) -> String {
        format!("{}{}", self.class_prefix, name)
    }

    /// Set the debounce delay in milliseconds.
    pub fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.debounce_ms = ms;
        self
    }

    /// Set the minimum remote query length.
    pub fn with_min_length(mut self, len: usize) -> Self {
        self.min_length = len;
        self
    }

    /// Set the primary and secondary label fields.
    pub fn with_fields(mut self, primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        self.primary_field = primary.into();
        self.secondary_field = secondary.into();
        self
    }

    /// Set the class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Parse a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load from a `.json` or `.toml` file, chosen by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let loader: fn(&str) -> Result<Self> = match extension.as_str() {
            "json" => Self::from_json_str,
            "toml" => Self::from_toml_str,
            _ => return Err(AutocompleteError::UnsupportedFormat(extension)),
        };

        let content =
            std::fs::read_to_string(path).map_err(|e| AutocompleteError::io(path, e))?;
        let config = loader(&content)?;
        tracing::debug!(
            target: horizon_autocomplete_core::logging::targets::CONTROLLER,
            path = %path.display(),
            "loaded autocomplete configuration"
        );
        Ok(config)
    }
}
