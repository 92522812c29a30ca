//! The stored theme configuration record.
//!
//! A page's theme is persisted as a small JSON object: the preset id and
//! the raw override strings the user picked.
//!
//! ```json
//! { "preset": "slate", "overrides": { "primary": "#3b82f6" } }
//! ```
//!
//! [`ThemeConfig`] decodes that record and hands it to the deriver.

use crate::debug_config;
use crate::derive::derive;
use crate::error::Result;
use crate::overrides::Overrides;
use crate::presets::PresetId;
use crate::tokens::ThemeTokens;
use serde::{Deserialize, Serialize};

/// A persisted theme choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Preset the theme starts from.
    pub preset: PresetId,
    /// User overrides; missing means none.
    #[serde(default)]
    pub overrides: Overrides,
}

impl ThemeConfig {
    /// A config for `preset` with no overrides.
    #[must_use]
    pub fn new(preset: PresetId) -> Self {
        Self {
            preset,
            overrides: Overrides::default(),
        }
    }

    /// Replace the overrides.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Decode a JSON record.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`](crate::ThemeError::Config) when the
    /// JSON is malformed or names an unknown preset.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        debug_config!(
            "decoded preset {} with {} overrides",
            config.preset,
            if config.overrides.is_empty() {
                "no"
            } else {
                "some"
            }
        );
        Ok(config)
    }

    /// Encode as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`](crate::ThemeError::Config) if encoding
    /// fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Derive the token set this record describes.
    ///
    /// # Errors
    ///
    /// Propagates malformed override colors from [`derive`].
    pub fn resolve(&self) -> Result<ThemeTokens> {
        derive(self.preset, &self.overrides)
    }
}
