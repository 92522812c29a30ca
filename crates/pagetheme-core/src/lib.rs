//! Theme token derivation with WCAG AA contrast enforcement.
//!
//! This crate turns a preset id and a handful of user-picked colors into a
//! complete set of semantic design tokens:
//! - [`color`]: hex parsing, HSL conversion, luminance and contrast math
//! - [`contrast`]: the foreground search and the pair audit
//! - [`presets`]: the static preset catalog
//! - [`derive`]: the token deriver
//! - [`css`]: CSS custom-property output
//!
//! # Guarantees
//!
//! - Every preset, and every foreground the deriver computes for an
//!   overridden primary or accent, meets 4.5:1 against its surface
//! - Derivation is pure: no I/O, no shared mutable state
//! - Malformed colors are reported, never replaced with a default
//!
//! # Example
//!
//! ```rust
//! use pagetheme_core::{derive, Overrides, PresetId};
//!
//! let tokens = derive(PresetId::Noir, &Overrides::new().background("#000000")).unwrap();
//! assert_eq!(tokens.foreground.to_hex(), "#ffffff");
//! assert!(tokens.to_css().contains("--card: #0d0d0d;"));
//! ```

#![forbid(unsafe_code)]

pub mod color;
pub mod config;
pub mod contrast;
pub mod css;
pub mod derive;
pub mod error;
pub mod logging;
pub mod overrides;
pub mod presets;
pub mod testing;
pub mod tokens;

pub use color::{
    AA_LARGE_TEXT, AA_NORMAL_TEXT, Color, Hsl, contrast_ratio, contrast_ratio_hex, hex_to_hsl,
    hsl_to_hex, meets_aa, meets_aa_hex, relative_luminance,
};
pub use config::ThemeConfig;
pub use contrast::{CONTRAST_PAIRS, ContrastCheck, ContrastPair, audit, ensure_contrast};
pub use derive::{derive, derive_preset};
pub use error::{Result, ThemeError};
pub use overrides::{Overrides, ResolvedOverrides, normalize_hex};
pub use presets::{PresetId, ThemePreset, lookup, lookup_id};
pub use tokens::{TOKEN_COUNT, ThemeTokens, TokenName};
