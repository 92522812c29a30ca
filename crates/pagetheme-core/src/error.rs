//! Error types for theme derivation.
//!
//! Everything in the engine is pure computation, so there are only three
//! ways to fail: a color string that is not hex, a preset id outside the
//! closed catalog, and a configuration record that cannot be decoded.
//! Contrast-search exhaustion is not an error (see [`crate::contrast`]).

use crate::presets::PresetId;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ThemeError>;

/// Errors produced while parsing colors, presets or configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// A color value was not a 3- or 6-digit hex string.
    MalformedColor {
        /// Override channel the value came from, if any.
        field: Option<&'static str>,
        /// The offending input as supplied.
        value: String,
    },
    /// A preset id outside the catalog.
    UnknownPreset(String),
    /// A configuration record could not be decoded.
    Config(String),
}

impl ThemeError {
    /// Create a malformed-color error with no field context.
    #[must_use]
    pub fn malformed(value: impl Into<String>) -> Self {
        Self::MalformedColor {
            field: None,
            value: value.into(),
        }
    }

    /// Attach the override channel name to a malformed-color error.
    ///
    /// Other variants pass through unchanged.
    #[must_use]
    pub fn in_field(self, name: &'static str) -> Self {
        match self {
            Self::MalformedColor { value, .. } => Self::MalformedColor {
                field: Some(name),
                value,
            },
            other => other,
        }
    }

    /// Whether this is a malformed-color error.
    #[must_use]
    pub fn is_malformed_color(&self) -> bool {
        matches!(self, Self::MalformedColor { .. })
    }
}

impl std::fmt::Display for ThemeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedColor {
                field: Some(field),
                value,
            } => write!(
                f,
                "malformed color '{value}' for {field}, expected #RGB or #RRGGBB"
            ),
            Self::MalformedColor { field: None, value } => {
                write!(f, "malformed color '{value}', expected #RGB or #RRGGBB")
            }
            Self::UnknownPreset(id) => write!(
                f,
                "unknown theme preset '{id}', available: {}",
                PresetId::available_ids().join(", ")
            ),
            Self::Config(msg) => write!(f, "invalid theme configuration: {msg}"),
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<serde_json::Error> for ThemeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
