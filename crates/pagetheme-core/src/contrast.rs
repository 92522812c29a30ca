//! Contrast enforcement.
//!
//! [`ensure_contrast`] finds a foreground shade that keeps the hue and
//! saturation of a base color while reaching 4.5:1 against a surface.
//! [`audit`] checks a whole token set against the fixed list of
//! foreground/surface pairs.

use crate::color::{Color, Hsl, contrast_ratio, meets_aa};
use crate::debug_contrast;
use crate::tokens::{ThemeTokens, TokenName};

/// Lightness change per search step, in percentage points.
pub const SEARCH_STEP: f64 = 5.0;

/// Maximum number of candidates the search tries.
pub const MAX_ITERATIONS: usize = 20;

/// Find a foreground for `target_background` that meets AA for normal text.
///
/// The search starts at `base` (hue and saturation are kept, its lightness
/// is the seed) and walks lightness away from the preferred extreme in
/// steps of [`SEARCH_STEP`], clamped to [0, 100]. The first passing shade is
/// returned, so the result is the passing shade closest to the seed.
///
/// If no candidate passes, the result is pure white when `prefer_light` is
/// set and pure black otherwise. The seeds the deriver uses (95 or 5) let
/// the walk cover the whole lightness range, so in practice a candidate
/// always passes.
///
/// # Example
///
/// ```rust
/// use pagetheme_core::color::{hex_to_hsl, meets_aa, Color};
/// use pagetheme_core::contrast::ensure_contrast;
///
/// let primary = Color::parse("#3b82f6").unwrap();
/// let base = primary.to_hsl().rounded().with_lightness(95.0);
/// let fg = ensure_contrast(base, primary, true);
/// assert!(meets_aa(fg, primary, false));
/// ```
#[must_use]
pub fn ensure_contrast(base: Hsl, target_background: Color, prefer_light: bool) -> Color {
    let step = if prefer_light { -SEARCH_STEP } else { SEARCH_STEP };
    let mut lightness = base.l;

    for iteration in 0..MAX_ITERATIONS {
        let candidate = base.with_lightness(lightness).to_color();
        if meets_aa(candidate, target_background, false) {
            debug_contrast!(
                "{} on {} passes after {} step(s), ratio {:.2}",
                candidate,
                target_background,
                iteration,
                contrast_ratio(candidate, target_background)
            );
            return candidate;
        }
        lightness = (lightness + step).clamp(0.0, 100.0);
    }

    let fallback = if prefer_light {
        Color::WHITE
    } else {
        Color::BLACK
    };
    debug_contrast!(
        "search exhausted on {}, falling back to {}",
        target_background,
        fallback
    );
    fallback
}

/// A foreground/surface pair that must stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContrastPair {
    /// Text token.
    pub foreground: TokenName,
    /// Surface token the text is drawn on.
    pub surface: TokenName,
}

impl ContrastPair {
    const fn new(foreground: TokenName, surface: TokenName) -> Self {
        Self {
            foreground,
            surface,
        }
    }
}

/// Every pair the AA invariant covers.
///
/// Muted text is drawn on the page background, not on the muted surface.
pub const CONTRAST_PAIRS: [ContrastPair; 6] = [
    ContrastPair::new(TokenName::Foreground, TokenName::Background),
    ContrastPair::new(TokenName::CardForeground, TokenName::Card),
    ContrastPair::new(TokenName::PrimaryForeground, TokenName::Primary),
    ContrastPair::new(TokenName::SecondaryForeground, TokenName::Secondary),
    ContrastPair::new(TokenName::AccentForeground, TokenName::Accent),
    ContrastPair::new(TokenName::MutedForeground, TokenName::Background),
];

/// The measured contrast of one pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastCheck {
    /// Which pair was measured.
    pub pair: ContrastPair,
    /// Foreground color.
    pub foreground: Color,
    /// Surface color.
    pub surface: Color,
    /// WCAG contrast ratio.
    pub ratio: f64,
    /// Meets 4.5:1.
    pub passes_normal: bool,
    /// Meets 3:1.
    pub passes_large: bool,
}

impl ContrastCheck {
    /// Measure a single pair.
    #[must_use]
    pub fn measure(tokens: &ThemeTokens, pair: ContrastPair) -> Self {
        let foreground = tokens.get(pair.foreground);
        let surface = tokens.get(pair.surface);
        Self {
            pair,
            foreground,
            surface,
            ratio: contrast_ratio(foreground, surface),
            passes_normal: meets_aa(foreground, surface, false),
            passes_large: meets_aa(foreground, surface, true),
        }
    }

    /// `"primaryForeground on primary"`
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} on {}", self.pair.foreground, self.pair.surface)
    }
}

/// Measure every contrast pair of a token set, in table order.
#[must_use]
pub fn audit(tokens: &ThemeTokens) -> Vec<ContrastCheck> {
    CONTRAST_PAIRS
        .iter()
        .map(|&pair| ContrastCheck::measure(tokens, pair))
        .collect()
}

/// The pairs that fail 4.5:1.
#[must_use]
pub fn failures(tokens: &ThemeTokens) -> Vec<ContrastCheck> {
    audit(tokens)
        .into_iter()
        .filter(|check| !check.passes_normal)
        .collect()
}
