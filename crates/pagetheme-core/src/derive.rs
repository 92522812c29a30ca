//! Token derivation.
//!
//! [`derive`] starts from a preset's base tokens and re-derives every token
//! that depends on an overridden color. The steps run in a fixed order:
//!
//! 1. copy the preset's base tokens
//! 2. background override: surfaces, foregrounds, border and input
//! 3. primary override: primary, its foreground and the ring
//! 4. accent override: accent, its foreground and the ring
//! 5. legacy brand: only when neither primary nor accent is overridden
//!
//! All lightness decisions use the integer-rounded HSL of the governing
//! color. Primary, accent and brand foregrounds come out of
//! [`ensure_contrast`], so those pairs meet AA. The background step uses a
//! fixed black/white rule instead, which misses 4.5:1 on backgrounds near
//! mid lightness and on saturated blues and violets; those misses are
//! logged with `debug_derive!`.

use crate::color::{Color, Hsl, contrast_ratio, meets_aa};
use crate::contrast::ensure_contrast;
use crate::debug_derive;
use crate::error::Result;
use crate::overrides::{Overrides, ResolvedOverrides};
use crate::presets::{PresetId, lookup};
use crate::tokens::ThemeTokens;

/// Subdued text on dark backgrounds.
const MUTED_TEXT_ON_DARK: Color = Color::new(0xa3, 0xa3, 0xa3);

/// Subdued text on light backgrounds.
const MUTED_TEXT_ON_LIGHT: Color = Color::new(0x71, 0x71, 0x7a);

/// Lightness offsets of the derived surfaces from the background.
const CARD_OFFSET: f64 = 5.0;
const SECONDARY_OFFSET: f64 = 8.0;
const BORDER_OFFSET: f64 = 10.0;
const MUTED_OFFSET: f64 = 12.0;

/// Surface lightness stays inside this band.
const SURFACE_MIN_LIGHTNESS: f64 = 5.0;
const SURFACE_MAX_LIGHTNESS: f64 = 95.0;

/// Seeds for the contrast search.
const LIGHT_TEXT_SEED: f64 = 95.0;
const DARK_TEXT_SEED: f64 = 5.0;
const BRAND_LIGHT_TEXT_SEED: f64 = 90.0;
const BRAND_DARK_TEXT_SEED: f64 = 10.0;

/// Derive a complete token set from a preset and overrides.
///
/// # Errors
///
/// Returns [`ThemeError::MalformedColor`](crate::ThemeError::MalformedColor)
/// when an override is not valid hex. No partial token set is produced.
///
/// # Example
///
/// ```rust
/// use pagetheme_core::{derive, meets_aa, Overrides, PresetId};
///
/// let tokens = derive(PresetId::Noir, &Overrides::new().primary("#3b82f6")).unwrap();
/// assert_eq!(tokens.primary.to_hex(), "#3b82f6");
/// assert!(meets_aa(tokens.primary_foreground, tokens.primary, false));
/// ```
pub fn derive(preset: PresetId, overrides: &Overrides) -> Result<ThemeTokens> {
    let resolved = overrides.resolve()?;
    Ok(derive_resolved(preset, &resolved))
}

/// The preset's base tokens, with no overrides applied.
#[must_use]
pub fn derive_preset(preset: PresetId) -> ThemeTokens {
    derive_resolved(preset, &ResolvedOverrides::default())
}

/// Derive from already parsed overrides. Infallible.
#[must_use]
pub fn derive_resolved(preset: PresetId, overrides: &ResolvedOverrides) -> ThemeTokens {
    let base = lookup(preset);
    let mut tokens = base.tokens;
    debug_derive!("start from preset {}", preset);

    if let Some(background) = overrides.background {
        apply_background(&mut tokens, background);
    }
    if let Some(primary) = overrides.primary {
        apply_primary(&mut tokens, primary);
        if overrides.accent.is_none() {
            tokens.ring = primary;
        }
    }
    if let Some(accent) = overrides.accent {
        apply_accent(&mut tokens, accent);
    }
    if let (None, None, Some(brand)) = (overrides.primary, overrides.accent, overrides.brand) {
        apply_brand(&mut tokens, brand);
    }

    debug_assert!(
        meets_aa(tokens.primary_foreground, tokens.primary, false),
        "primaryForeground {} fails on primary {}",
        tokens.primary_foreground,
        tokens.primary
    );
    debug_assert!(
        meets_aa(tokens.accent_foreground, tokens.accent, false),
        "accentForeground {} fails on accent {}",
        tokens.accent_foreground,
        tokens.accent
    );
    tokens
}

fn apply_background(tokens: &mut ThemeTokens, background: Color) {
    let hsl = background.to_hsl().rounded();
    let dark = hsl.is_dark();
    debug_derive!("background {} (l={}, dark={})", background, hsl.l, dark);

    // White below l=20, black above l=80, midpoint split in between.
    let foreground = if dark { Color::WHITE } else { Color::BLACK };

    tokens.background = background;
    tokens.foreground = foreground;
    tokens.card = surface(hsl, CARD_OFFSET, dark);
    tokens.card_foreground = foreground;
    tokens.secondary = surface(hsl, SECONDARY_OFFSET, dark);
    tokens.secondary_foreground = foreground;
    tokens.muted = surface(hsl, MUTED_OFFSET, dark);
    tokens.muted_foreground = if foreground == Color::WHITE {
        MUTED_TEXT_ON_DARK
    } else {
        MUTED_TEXT_ON_LIGHT
    };
    tokens.border = surface(hsl, BORDER_OFFSET, dark);
    tokens.input = tokens.secondary;

    for (name, text, on) in [
        ("foreground", tokens.foreground, tokens.background),
        ("cardForeground", tokens.card_foreground, tokens.card),
        ("secondaryForeground", tokens.secondary_foreground, tokens.secondary),
        ("mutedForeground", tokens.muted_foreground, tokens.background),
    ] {
        if !meets_aa(text, on, false) {
            debug_derive!(
                "{name} {text} on {on} is {:.2}:1, below AA",
                contrast_ratio(text, on)
            );
        }
    }
}

/// A surface near the background: half saturation, lightness moved away
/// from the nearest extreme.
fn surface(background: Hsl, offset: f64, dark: bool) -> Color {
    let lightness = if dark {
        background.l + offset
    } else {
        background.l - offset
    };
    Hsl::new(
        background.h,
        (background.s * 0.5).round(),
        lightness.clamp(SURFACE_MIN_LIGHTNESS, SURFACE_MAX_LIGHTNESS),
    )
    .to_color()
}

fn apply_primary(tokens: &mut ThemeTokens, primary: Color) {
    let hsl = primary.to_hsl().rounded();
    tokens.primary = primary;
    tokens.primary_foreground =
        ensure_contrast(hsl.with_lightness(LIGHT_TEXT_SEED), primary, true);
    debug_derive!(
        "primary {} -> primaryForeground {}",
        primary,
        tokens.primary_foreground
    );
}

fn apply_accent(tokens: &mut ThemeTokens, accent: Color) {
    let hsl = accent.to_hsl().rounded();
    let needs_light = hsl.is_dark();
    let seed = if needs_light {
        LIGHT_TEXT_SEED
    } else {
        DARK_TEXT_SEED
    };
    tokens.accent = accent;
    tokens.accent_foreground = ensure_contrast(hsl.with_lightness(seed), accent, needs_light);
    tokens.ring = accent;
    debug_derive!(
        "accent {} -> accentForeground {}",
        accent,
        tokens.accent_foreground
    );
}

fn apply_brand(tokens: &mut ThemeTokens, brand: Color) {
    // The background token already holds the override if there was one.
    let dark = tokens.background.to_hsl().rounded().is_dark();
    apply_primary(tokens, brand);

    let hsl = brand.to_hsl().rounded();
    let accent = if dark {
        Hsl::new(hsl.h, (hsl.s + 20.0).min(100.0), (hsl.l + 20.0).min(90.0)).to_color()
    } else {
        Hsl::new(hsl.h, hsl.s, (hsl.l - 20.0).max(10.0)).to_color()
    };
    let seed = if dark {
        BRAND_DARK_TEXT_SEED
    } else {
        BRAND_LIGHT_TEXT_SEED
    };
    tokens.accent = accent;
    tokens.accent_foreground = ensure_contrast(
        accent.to_hsl().rounded().with_lightness(seed),
        accent,
        !dark,
    );
    tokens.ring = brand;
    debug_derive!(
        "brand {} (dark={}) -> accent {} / {}",
        brand,
        dark,
        accent,
        tokens.accent_foreground
    );
}
