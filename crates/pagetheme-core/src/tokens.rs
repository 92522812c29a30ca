//! The semantic token set a theme resolves to.
//!
//! [`ThemeTokens`] is a flat record of named color slots. Serialized, it is
//! a camelCase map of token name to hex string, which is the shape the page
//! renderer and the stored configuration both consume.

use crate::color::Color;
use crate::contrast;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of token slots in a [`ThemeTokens`] record.
pub const TOKEN_COUNT: usize = 15;

/// Names of the token slots, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenName {
    /// Page background.
    Background,
    /// Body text on the page background.
    Foreground,
    /// Card surface.
    Card,
    /// Text on cards.
    CardForeground,
    /// Primary action color.
    Primary,
    /// Text on primary surfaces.
    PrimaryForeground,
    /// Secondary surface.
    Secondary,
    /// Text on secondary surfaces.
    SecondaryForeground,
    /// Accent color.
    Accent,
    /// Text on accent surfaces.
    AccentForeground,
    /// Muted surface.
    Muted,
    /// Subdued text.
    MutedForeground,
    /// Borders and dividers.
    Border,
    /// Form input borders.
    Input,
    /// Focus ring.
    Ring,
}

impl TokenName {
    /// Every token name in canonical order.
    pub const ALL: [TokenName; TOKEN_COUNT] = [
        Self::Background,
        Self::Foreground,
        Self::Card,
        Self::CardForeground,
        Self::Primary,
        Self::PrimaryForeground,
        Self::Secondary,
        Self::SecondaryForeground,
        Self::Accent,
        Self::AccentForeground,
        Self::Muted,
        Self::MutedForeground,
        Self::Border,
        Self::Input,
        Self::Ring,
    ];

    /// The camelCase name used in serialized token maps.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Card => "card",
            Self::CardForeground => "cardForeground",
            Self::Primary => "primary",
            Self::PrimaryForeground => "primaryForeground",
            Self::Secondary => "secondary",
            Self::SecondaryForeground => "secondaryForeground",
            Self::Accent => "accent",
            Self::AccentForeground => "accentForeground",
            Self::Muted => "muted",
            Self::MutedForeground => "mutedForeground",
            Self::Border => "border",
            Self::Input => "input",
            Self::Ring => "ring",
        }
    }

    /// The kebab-case name used for CSS custom properties.
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Card => "card",
            Self::CardForeground => "card-foreground",
            Self::Primary => "primary",
            Self::PrimaryForeground => "primary-foreground",
            Self::Secondary => "secondary",
            Self::SecondaryForeground => "secondary-foreground",
            Self::Accent => "accent",
            Self::AccentForeground => "accent-foreground",
            Self::Muted => "muted",
            Self::MutedForeground => "muted-foreground",
            Self::Border => "border",
            Self::Input => "input",
            Self::Ring => "ring",
        }
    }
}

impl std::fmt::Display for TokenName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenName {
    type Err = UnknownTokenError;

    /// Accepts either the camelCase or the kebab-case name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s || name.css_name() == s)
            .ok_or_else(|| UnknownTokenError(s.to_string()))
    }
}

/// Error parsing a token name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTokenError(String);

impl UnknownTokenError {
    /// Get the invalid token name that was provided.
    #[must_use]
    pub fn invalid_name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UnknownTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown theme token '{}'", self.0)
    }
}

impl std::error::Error for UnknownTokenError {}

/// A fully resolved set of semantic color tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTokens {
    /// Page background.
    pub background: Color,
    /// Body text on the page background.
    pub foreground: Color,
    /// Card surface.
    pub card: Color,
    /// Text on cards.
    pub card_foreground: Color,
    /// Primary action color.
    pub primary: Color,
    /// Text on primary surfaces.
    pub primary_foreground: Color,
    /// Secondary surface.
    pub secondary: Color,
    /// Text on secondary surfaces.
    pub secondary_foreground: Color,
    /// Accent color.
    pub accent: Color,
    /// Text on accent surfaces.
    pub accent_foreground: Color,
    /// Muted surface.
    pub muted: Color,
    /// Subdued text, drawn on the page background.
    pub muted_foreground: Color,
    /// Borders and dividers.
    pub border: Color,
    /// Form input borders.
    pub input: Color,
    /// Focus ring.
    pub ring: Color,
}

impl ThemeTokens {
    /// Read a token by name.
    #[must_use]
    pub const fn get(&self, name: TokenName) -> Color {
        match name {
            TokenName::Background => self.background,
            TokenName::Foreground => self.foreground,
            TokenName::Card => self.card,
            TokenName::CardForeground => self.card_foreground,
            TokenName::Primary => self.primary,
            TokenName::PrimaryForeground => self.primary_foreground,
            TokenName::Secondary => self.secondary,
            TokenName::SecondaryForeground => self.secondary_foreground,
            TokenName::Accent => self.accent,
            TokenName::AccentForeground => self.accent_foreground,
            TokenName::Muted => self.muted,
            TokenName::MutedForeground => self.muted_foreground,
            TokenName::Border => self.border,
            TokenName::Input => self.input,
            TokenName::Ring => self.ring,
        }
    }

    /// Mutable access to a token by name.
    pub fn slot_mut(&mut self, name: TokenName) -> &mut Color {
        match name {
            TokenName::Background => &mut self.background,
            TokenName::Foreground => &mut self.foreground,
            TokenName::Card => &mut self.card,
            TokenName::CardForeground => &mut self.card_foreground,
            TokenName::Primary => &mut self.primary,
            TokenName::PrimaryForeground => &mut self.primary_foreground,
            TokenName::Secondary => &mut self.secondary,
            TokenName::SecondaryForeground => &mut self.secondary_foreground,
            TokenName::Accent => &mut self.accent,
            TokenName::AccentForeground => &mut self.accent_foreground,
            TokenName::Muted => &mut self.muted,
            TokenName::MutedForeground => &mut self.muted_foreground,
            TokenName::Border => &mut self.border,
            TokenName::Input => &mut self.input,
            TokenName::Ring => &mut self.ring,
        }
    }

    /// Iterate over `(name, color)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenName, Color)> + '_ {
        TokenName::ALL.into_iter().map(|name| (name, self.get(name)))
    }

    /// The flat name -> hex map, in canonical order.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        self.iter()
            .map(|(name, color)| (name.as_str(), color.to_hex()))
            .collect()
    }

    /// Whether every contrast pair passes AA for normal text.
    #[must_use]
    pub fn is_accessible(&self) -> bool {
        contrast::audit(self).iter().all(|check| check.passes_normal)
    }

    /// Render as CSS custom-property declarations.
    #[must_use]
    pub fn to_css(&self) -> String {
        crate::css::serialize(self)
    }
}
