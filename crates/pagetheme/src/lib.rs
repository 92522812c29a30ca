//! Accessible theme tokens for generated pages.
//!
//! pagetheme turns a preset choice plus a few user-picked colors into the
//! fifteen semantic tokens a page template needs. Every preset meets WCAG AA,
//! and every foreground computed for an overridden primary, accent or brand
//! meets 4.5:1 on its surface. A background override uses a fixed
//! black/white rule and can fall below AA near mid lightness; check
//! [`ThemeTokens::is_accessible`] when the background is user-picked.
//!
//! - **Presets** - four curated palettes (`noir`, `neon`, `slate`, `paper`)
//! - **Overrides** - background, primary, accent, or a single brand color
//! - **WCAG AA enforcement** - primary and accent foregrounds are searched until they reach 4.5:1
//! - **Terminal previews** - token tables and contrast reports (feature `output`)
//!
//! # Quick Start
//!
//! ```rust
//! use pagetheme::prelude::*;
//!
//! let config = ThemeConfig::new(PresetId::Slate)
//!     .with_overrides(Overrides::new().primary("#3b82f6"));
//! let tokens = config.resolve().unwrap();
//!
//! assert!(tokens.is_accessible());
//! assert!(tokens.to_css().starts_with("--background: #0f172a;"));
//! ```
//!
//! # Crate Structure
//!
//! - [`pagetheme_core`] - Color math, presets, derivation, CSS output
//! - `pagetheme_output` - Terminal rendering (behind the `output` feature)

#![forbid(unsafe_code)]

// Re-export crates
pub use pagetheme_core as core;
#[cfg(feature = "output")]
pub use pagetheme_output as output;

// Re-export commonly used types
pub use pagetheme_core::{
    AA_LARGE_TEXT, AA_NORMAL_TEXT, Color, ContrastCheck, Hsl, Overrides, PresetId, Result,
    TOKEN_COUNT, ThemeConfig, ThemeError, ThemePreset, ThemeTokens, TokenName, audit,
    contrast_ratio, contrast_ratio_hex, derive, derive_preset, hex_to_hsl, hsl_to_hex, lookup,
    lookup_id, meets_aa, meets_aa_hex,
};

#[cfg(feature = "output")]
pub use pagetheme_output::{
    ContrastReport, ContrastReportDisplay, OutputMode, TokenTableDisplay, style_block,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        Color, Overrides, PresetId, Result, ThemeConfig, ThemeError, ThemeTokens, TokenName,
        derive, derive_preset, meets_aa,
    };
    #[cfg(feature = "output")]
    pub use crate::{ContrastReport, ContrastReportDisplay, OutputMode, TokenTableDisplay};
    pub use serde::{Deserialize, Serialize};
}

/// Testing utilities module.
pub mod testing {
    pub use pagetheme_core::testing::{assert_accessible, assert_meets_aa};
    #[cfg(feature = "proptest")]
    pub use pagetheme_core::testing::strategies;
}

/// Derive tokens for the preset named by `PAGETHEME_PRESET` (default `noir`).
///
/// # Errors
///
/// Returns [`ThemeError::UnknownPreset`] when the variable names no preset
/// and [`ThemeError::MalformedColor`] when an override does not parse.
pub fn derive_from_env(overrides: &Overrides) -> Result<ThemeTokens> {
    pagetheme_core::logging::init();
    derive(PresetId::from_env()?, overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prelude_covers_the_common_path() {
        use crate::prelude::*;

        let tokens: ThemeTokens = derive(PresetId::Paper, &Overrides::new()).unwrap();
        assert!(meets_aa(tokens.foreground, tokens.background, false));
    }

    #[test]
    fn facade_and_core_agree() {
        assert_eq!(
            derive_preset(PresetId::Neon),
            crate::core::lookup(PresetId::Neon).tokens
        );
        testing::assert_accessible(&derive_preset(PresetId::Neon));
    }

    #[cfg(feature = "output")]
    #[test]
    fn output_is_reexported() {
        let report = ContrastReport::from_tokens(&derive_preset(PresetId::Slate));
        let text = ContrastReportDisplay::new(OutputMode::Plain).render(&report);
        assert!(text.contains("6/6 pass"));
    }
}
