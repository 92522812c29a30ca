//! User-supplied override colors.
//!
//! [`Overrides`] holds the raw strings as they arrive from a color picker or
//! a stored configuration record. [`Overrides::resolve`] normalizes and
//! parses them once, so the deriver only ever sees valid colors.

use crate::color::Color;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Placeholder some upload flows store in place of a color.
pub const UPLOADED_PLACEHOLDER: &str = "uploaded";

/// Raw override values, each optional.
///
/// # Example
///
/// ```rust
/// use pagetheme_core::Overrides;
///
/// let overrides = Overrides::new().primary("3b82f6").brand("#ff0000");
/// let resolved = overrides.resolve().unwrap();
/// assert_eq!(resolved.primary.unwrap().to_hex(), "#3b82f6");
/// // Brand is ignored once primary or accent is present.
/// assert!(resolved.brand.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Overrides {
    /// Page background.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Primary action color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    /// Accent color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    /// Legacy single brand color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

impl Overrides {
    /// No overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background override.
    #[must_use]
    pub fn background(mut self, value: impl Into<String>) -> Self {
        self.background = Some(value.into());
        self
    }

    /// Set the primary override.
    #[must_use]
    pub fn primary(mut self, value: impl Into<String>) -> Self {
        self.primary = Some(value.into());
        self
    }

    /// Set the accent override.
    #[must_use]
    pub fn accent(mut self, value: impl Into<String>) -> Self {
        self.accent = Some(value.into());
        self
    }

    /// Set the legacy brand override.
    #[must_use]
    pub fn brand(mut self, value: impl Into<String>) -> Self {
        self.brand = Some(value.into());
        self
    }

    /// Whether no channel carries a usable value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [&self.background, &self.primary, &self.accent, &self.brand]
            .into_iter()
            .all(|raw| raw.as_deref().and_then(normalize_hex).is_none())
    }

    /// Normalize and parse every channel.
    ///
    /// Brand is dropped when primary or accent survives normalization.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::MalformedColor`](crate::ThemeError::MalformedColor)
    /// naming the first channel whose value is not valid hex.
    pub fn resolve(&self) -> Result<ResolvedOverrides> {
        let background = parse_channel(self.background.as_deref(), "background")?;
        let primary = parse_channel(self.primary.as_deref(), "primary")?;
        let accent = parse_channel(self.accent.as_deref(), "accent")?;
        let brand = if primary.is_some() || accent.is_some() {
            None
        } else {
            parse_channel(self.brand.as_deref(), "brand")?
        };
        Ok(ResolvedOverrides {
            background,
            primary,
            accent,
            brand,
        })
    }
}

/// Overrides after normalization, parsing and brand precedence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolvedOverrides {
    /// Page background.
    pub background: Option<Color>,
    /// Primary action color.
    pub primary: Option<Color>,
    /// Accent color.
    pub accent: Option<Color>,
    /// Brand color; always `None` when primary or accent is set.
    pub brand: Option<Color>,
}

/// Normalize a raw override value.
///
/// Empty, whitespace-only and the upload placeholder are treated as absent.
/// Otherwise the value is trimmed and a leading `#` is added if missing.
/// Digits are not validated here.
///
/// ```rust
/// use pagetheme_core::overrides::normalize_hex;
///
/// assert_eq!(normalize_hex(" 3b82f6 ").as_deref(), Some("#3b82f6"));
/// assert_eq!(normalize_hex("uploaded"), None);
/// assert_eq!(normalize_hex("   "), None);
/// ```
#[must_use]
pub fn normalize_hex(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == UPLOADED_PLACEHOLDER {
        return None;
    }
    if trimmed.starts_with('#') {
        Some(trimmed.to_string())
    } else {
        Some(format!("#{trimmed}"))
    }
}

fn parse_channel(raw: Option<&str>, field: &'static str) -> Result<Option<Color>> {
    raw.and_then(normalize_hex)
        .map(|hex| Color::parse(&hex).map_err(|err| err.in_field(field)))
        .transpose()
}
