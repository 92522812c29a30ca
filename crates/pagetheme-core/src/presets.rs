//! The preset catalog.
//!
//! Presets are compile-time data: a fixed table indexed by [`PresetId`]'s
//! discriminant. Each entry carries a complete token set that already
//! satisfies the AA contrast invariant, so `derive` with no overrides can
//! return it as-is.
//!
//! # Example
//!
//! ```rust
//! use pagetheme_core::presets::{lookup, PresetId};
//!
//! let slate = lookup(PresetId::Slate);
//! assert_eq!(slate.tokens.primary.to_hex(), "#f59e0b");
//!
//! let id: PresetId = "light".parse().unwrap();
//! assert_eq!(id, PresetId::Paper);
//! ```

// Hex color literals (0xRRGGBB) are idiomatic and readable as-is
#![allow(clippy::unreadable_literal)]

use crate::color::Color;
use crate::debug_preset;
use crate::error::{Result, ThemeError};
use crate::overrides::Overrides;
use crate::tokens::ThemeTokens;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Environment variable naming the preset [`PresetId::from_env`] picks.
pub const PRESET_ENV_VAR: &str = "PAGETHEME_PRESET";

/// Identifier of a shipped preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PresetId {
    /// Near-white text on near-black surfaces.
    #[default]
    Noir,
    /// Saturated magenta and cyan on deep violet.
    Neon,
    /// Slate surfaces with amber actions.
    Slate,
    /// Dark text on white.
    Paper,
}

impl PresetId {
    /// Every preset, in catalog order.
    pub const ALL: [PresetId; 4] = [Self::Noir, Self::Neon, Self::Slate, Self::Paper];

    /// Canonical id string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Noir => "noir",
            Self::Neon => "neon",
            Self::Slate => "slate",
            Self::Paper => "paper",
        }
    }

    /// List all canonical preset ids.
    #[must_use]
    pub fn available_ids() -> Vec<&'static str> {
        Self::ALL.iter().map(|id| id.as_str()).collect()
    }

    /// The catalog entry for this id.
    #[must_use]
    pub fn preset(self) -> &'static ThemePreset {
        lookup(self)
    }

    /// Read the preset id from `PAGETHEME_PRESET`.
    ///
    /// Unset (or empty) yields the default, [`PresetId::Noir`].
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownPreset`] when the variable names no preset.
    pub fn from_env() -> Result<Self> {
        Self::from_env_value(std::env::var(PRESET_ENV_VAR).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Result<Self> {
        match value.map(str::trim) {
            Some(value) if !value.is_empty() => value.parse(),
            _ => Ok(Self::default()),
        }
    }
}

impl std::fmt::Display for PresetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresetId {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "noir" | "dark" | "black" => Ok(Self::Noir),
            "neon" | "cyberpunk" => Ok(Self::Neon),
            "slate" | "amber" => Ok(Self::Slate),
            "paper" | "light" | "white" => Ok(Self::Paper),
            _ => Err(ThemeError::UnknownPreset(s.to_string())),
        }
    }
}

impl Serialize for PresetId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PresetId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A named, pre-authored token set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreset {
    /// Catalog id.
    pub id: PresetId,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Base tokens.
    pub tokens: ThemeTokens,
    /// Suggested brand color for single-color theming, if the preset has one.
    ///
    /// Catalog metadata: [`derive`](crate::derive::derive) never reads it.
    /// Apply it with [`ThemePreset::brand_overrides`].
    pub default_brand: Option<Color>,
}

impl ThemePreset {
    /// Overrides that theme this preset from its suggested brand color.
    ///
    /// Empty when the preset has no default brand.
    #[must_use]
    pub fn brand_overrides(&self) -> Overrides {
        match self.default_brand {
            Some(brand) => Overrides::new().brand(brand.to_hex()),
            None => Overrides::new(),
        }
    }
}

const NOIR: ThemePreset = ThemePreset {
    id: PresetId::Noir,
    name: "Noir",
    description: "Near-white type on black with neutral gray surfaces",
    tokens: ThemeTokens {
        background: Color::from_hex(0x0a0a0a),
        foreground: Color::from_hex(0xfafafa),
        card: Color::from_hex(0x111111),
        card_foreground: Color::from_hex(0xfafafa),
        primary: Color::from_hex(0xfafafa),
        primary_foreground: Color::from_hex(0x0a0a0a),
        secondary: Color::from_hex(0x1c1c1c),
        secondary_foreground: Color::from_hex(0xfafafa),
        accent: Color::from_hex(0x262626),
        accent_foreground: Color::from_hex(0xfafafa),
        muted: Color::from_hex(0x1c1c1c),
        muted_foreground: Color::from_hex(0xa3a3a3),
        border: Color::from_hex(0x262626),
        input: Color::from_hex(0x262626),
        ring: Color::from_hex(0xd4d4d4),
    },
    default_brand: None,
};

const NEON: ThemePreset = ThemePreset {
    id: PresetId::Neon,
    name: "Neon",
    description: "Hot magenta and electric cyan on deep violet",
    tokens: ThemeTokens {
        background: Color::from_hex(0x0b0014),
        foreground: Color::from_hex(0xf5f3ff),
        card: Color::from_hex(0x14002a),
        card_foreground: Color::from_hex(0xf5f3ff),
        primary: Color::from_hex(0xff2bd6),
        primary_foreground: Color::from_hex(0x0b0014),
        secondary: Color::from_hex(0x1f0a3d),
        secondary_foreground: Color::from_hex(0xe9d5ff),
        accent: Color::from_hex(0x00f0ff),
        accent_foreground: Color::from_hex(0x04131a),
        muted: Color::from_hex(0x1a0b2e),
        muted_foreground: Color::from_hex(0xb794f4),
        border: Color::from_hex(0x3b0764),
        input: Color::from_hex(0x3b0764),
        ring: Color::from_hex(0xff2bd6),
    },
    default_brand: Some(Color::from_hex(0xff2bd6)),
};

const SLATE: ThemePreset = ThemePreset {
    id: PresetId::Slate,
    name: "Slate",
    description: "Structured slate surfaces with amber calls to action",
    tokens: ThemeTokens {
        background: Color::from_hex(0x0f172a),
        foreground: Color::from_hex(0xf8fafc),
        card: Color::from_hex(0x1e293b),
        card_foreground: Color::from_hex(0xf8fafc),
        primary: Color::from_hex(0xf59e0b),
        primary_foreground: Color::from_hex(0x0f172a),
        secondary: Color::from_hex(0x334155),
        secondary_foreground: Color::from_hex(0xf8fafc),
        accent: Color::from_hex(0xfbbf24),
        accent_foreground: Color::from_hex(0x1e293b),
        muted: Color::from_hex(0x1e293b),
        muted_foreground: Color::from_hex(0x94a3b8),
        border: Color::from_hex(0x334155),
        input: Color::from_hex(0x334155),
        ring: Color::from_hex(0xf59e0b),
    },
    default_brand: Some(Color::from_hex(0xf59e0b)),
};

const PAPER: ThemePreset = ThemePreset {
    id: PresetId::Paper,
    name: "Paper",
    description: "Ink on white with a blue accent",
    tokens: ThemeTokens {
        background: Color::from_hex(0xffffff),
        foreground: Color::from_hex(0x18181b),
        card: Color::from_hex(0xfafafa),
        card_foreground: Color::from_hex(0x18181b),
        primary: Color::from_hex(0x18181b),
        primary_foreground: Color::from_hex(0xfafafa),
        secondary: Color::from_hex(0xf4f4f5),
        secondary_foreground: Color::from_hex(0x18181b),
        accent: Color::from_hex(0x2563eb),
        accent_foreground: Color::from_hex(0xffffff),
        muted: Color::from_hex(0xf4f4f5),
        muted_foreground: Color::from_hex(0x52525b),
        border: Color::from_hex(0xe4e4e7),
        input: Color::from_hex(0xe4e4e7),
        ring: Color::from_hex(0x18181b),
    },
    default_brand: Some(Color::from_hex(0x2563eb)),
};

/// The catalog, indexed by `PresetId as usize`.
static PRESETS: [ThemePreset; 4] = [NOIR, NEON, SLATE, PAPER];

/// Look up a preset by id.
#[must_use]
pub fn lookup(id: PresetId) -> &'static ThemePreset {
    debug_preset!("lookup {}", id);
    &PRESETS[id as usize]
}

/// Look up a preset by its string id.
///
/// # Panics
///
/// Panics if `id` names no preset. Callers are expected to pass ids from
/// [`PresetId`]; use `str::parse::<PresetId>` to validate untrusted input.
#[must_use]
pub fn lookup_id(id: &str) -> &'static ThemePreset {
    match id.parse::<PresetId>() {
        Ok(preset) => lookup(preset),
        Err(err) => panic!("{err}"),
    }
}

/// Iterate over the whole catalog.
pub fn all() -> impl Iterator<Item = &'static ThemePreset> {
    PRESETS.iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::failures;

    #[test]
    fn test_table_is_indexed_by_discriminant() {
        for id in PresetId::ALL {
            assert_eq!(lookup(id).id, id);
        }
        assert_eq!(all().count(), PresetId::ALL.len());
    }

    #[test]
    fn test_every_preset_passes_aa() {
        for preset in all() {
            let failing = failures(&preset.tokens);
            assert!(failing.is_empty(), "{}: {failing:?}", preset.id);
        }
    }

    #[test]
    fn test_default_brand() {
        assert_eq!(lookup(PresetId::Noir).default_brand, None);
        assert_eq!(
            lookup(PresetId::Slate).default_brand,
            Some(Color::from_hex(0xf59e0b))
        );
    }

    #[test]
    fn test_brand_overrides_apply_default_brand() {
        assert!(lookup(PresetId::Noir).brand_overrides().is_empty());

        for preset in all() {
            let Some(brand) = preset.default_brand else {
                continue;
            };
            let overrides = preset.brand_overrides();
            assert_eq!(overrides.brand.as_deref(), Some(brand.to_hex().as_str()));

            let tokens = crate::derive::derive(preset.id, &overrides).unwrap();
            assert_eq!(tokens.primary, brand);
            assert_eq!(tokens.ring, brand);
            crate::testing::assert_meets_aa(tokens.primary_foreground, tokens.primary);
            crate::testing::assert_meets_aa(tokens.accent_foreground, tokens.accent);
        }
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for id in PresetId::ALL {
            assert_eq!(id.to_string().parse::<PresetId>().unwrap(), id);
        }
    }

    #[test]
    fn test_from_str_aliases_and_case() {
        assert_eq!("NOIR".parse::<PresetId>().unwrap(), PresetId::Noir);
        assert_eq!("cyberpunk".parse::<PresetId>().unwrap(), PresetId::Neon);
        assert_eq!("Amber".parse::<PresetId>().unwrap(), PresetId::Slate);
        assert_eq!("light".parse::<PresetId>().unwrap(), PresetId::Paper);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "sepia".parse::<PresetId>().unwrap_err();
        assert_eq!(err, ThemeError::UnknownPreset("sepia".to_string()));
        assert!(err.to_string().contains("noir, neon, slate, paper"));
    }

    #[test]
    fn test_lookup_id() {
        assert_eq!(lookup_id("slate").id, PresetId::Slate);
    }

    #[test]
    #[should_panic(expected = "unknown theme preset 'sepia'")]
    fn test_lookup_id_panics_on_unknown() {
        let _ = lookup_id("sepia");
    }

    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&PresetId::Neon).unwrap(), "\"neon\"");
        let id: PresetId = serde_json::from_str("\"Light\"").unwrap();
        assert_eq!(id, PresetId::Paper);
        assert!(serde_json::from_str::<PresetId>("\"sepia\"").is_err());
    }

    #[test]
    fn test_from_env_value() {
        assert_eq!(PresetId::from_env_value(None).unwrap(), PresetId::Noir);
        assert_eq!(PresetId::from_env_value(Some("  ")).unwrap(), PresetId::Noir);
        assert_eq!(
            PresetId::from_env_value(Some(" slate ")).unwrap(),
            PresetId::Slate
        );
        assert!(PresetId::from_env_value(Some("sepia")).is_err());
    }
}
