//! Color primitives: hex parsing, HSL conversion and WCAG contrast math.
//!
//! Colors are stored as 8-bit sRGB and always emitted in canonical
//! lowercase `#rrggbb` form. HSL values keep full `f64` precision so that
//! hex -> HSL -> hex is lossless; callers that need the integer triple of
//! the data model use [`Hsl::rounded`].
//!
//! # Example
//!
//! ```rust
//! use pagetheme_core::color::{hex_to_hsl, hsl_to_hex, meets_aa, Color};
//!
//! let hsl = hex_to_hsl("#3b82f6").unwrap();
//! assert_eq!(hsl_to_hex(hsl), "#3b82f6");
//!
//! let white = Color::WHITE;
//! let gray = Color::parse("#666").unwrap();
//! assert!(meets_aa(gray, white, true));
//! assert!(meets_aa(gray, white, false));
//! ```

// Hex color literals (0xRRGGBB) are idiomatic and readable as-is
#![allow(clippy::unreadable_literal)]
// Channel math: r/g/b, h/s/l are the standard names.
#![allow(clippy::many_single_char_names)]

use crate::error::{Result, ThemeError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Minimum contrast ratio for normal-size text (WCAG 2.1 AA).
pub const AA_NORMAL_TEXT: f64 = 4.5;

/// Minimum contrast ratio for large text (WCAG 2.1 AA).
pub const AA_LARGE_TEXT: f64 = 3.0;

/// A color in 8-bit sRGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Color {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a new color from RGB values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a hex value (0xRRGGBB).
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Parse a hex color string.
    ///
    /// Accepts `#RRGGBB` and `#RGB`, case-insensitive, with or without the
    /// leading `#`. Shorthand expands by digit doubling (`#abc` is
    /// `#aabbcc`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use pagetheme_core::Color;
    ///
    /// assert_eq!(Color::parse("#009688").unwrap(), Color::new(0, 150, 136));
    /// assert_eq!(Color::parse("FF5500").unwrap(), Color::new(255, 85, 0));
    /// assert_eq!(Color::parse("#F00").unwrap(), Color::new(255, 0, 0));
    /// assert!(Color::parse("#12345").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let hex = input.strip_prefix('#').unwrap_or(input);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ThemeError::malformed(input));
        }
        // All bytes are ASCII hex digits past this point, so byte slicing is safe.
        let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16);
        let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        let parsed = match hex.len() {
            6 => (pair(0), pair(2), pair(4)),
            3 => (
                digit(0).map(|v| v * 17),
                digit(1).map(|v| v * 17),
                digit(2).map(|v| v * 17),
            ),
            _ => return Err(ThemeError::malformed(input)),
        };
        match parsed {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self { r, g, b }),
            _ => Err(ThemeError::malformed(input)),
        }
    }

    /// Convert to canonical hex string (e.g., "#009688").
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to RGB tuple.
    #[must_use]
    pub const fn to_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Convert to HSL (unrounded).
    #[must_use]
    pub fn to_hsl(&self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }

    /// Build a color from HSL.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let (r, g, b) = hsl_to_rgb(hsl);
        Self { r, g, b }
    }

    /// Relative luminance per WCAG 2.1, in [0.0, 1.0].
    #[must_use]
    pub fn luminance(&self) -> f64 {
        relative_luminance(self.r, self.g, self.b)
    }

    /// WCAG contrast ratio between this color and another.
    ///
    /// Returns a value between 1.0 (no contrast) and 21.0 (max contrast).
    #[must_use]
    pub fn contrast_ratio(&self, other: &Color) -> f64 {
        contrast_ratio(*self, *other)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// A color in HSL form.
///
/// `h` is in degrees [0, 360), `s` and `l` are percentages [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation percent.
    pub s: f64,
    /// Lightness percent.
    pub l: f64,
}

impl Hsl {
    /// Create an HSL triple.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Round each channel to the nearest integer; a hue of 360 wraps to 0.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            h: self.h.round().rem_euclid(360.0),
            s: self.s.round(),
            l: self.l.round(),
        }
    }

    /// Same hue and saturation at a different lightness.
    #[must_use]
    pub fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    /// Whether this lightness sits on the dark side of the midpoint (`l < 50`).
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.l < 50.0
    }

    /// Convert to an sRGB color.
    #[must_use]
    pub fn to_color(self) -> Color {
        Color::from_hsl(self)
    }
}

/// Parse a hex string and convert it to HSL.
///
/// Channels keep full precision. Call [`Hsl::rounded`] for the integer
/// triple that thresholds and display use.
///
/// ```rust
/// use pagetheme_core::color::{hex_to_hsl, Hsl};
///
/// let hsl = hex_to_hsl("#3b82f6").unwrap();
/// assert!((hsl.l - 59.80).abs() < 0.01);
/// assert_eq!(hsl.rounded(), Hsl::new(217.0, 91.0, 60.0));
/// ```
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    Ok(Color::parse(hex)?.to_hsl())
}

/// Convert HSL to a canonical lowercase hex string.
#[must_use]
pub fn hsl_to_hex(hsl: Hsl) -> String {
    Color::from_hsl(hsl).to_hex()
}

fn rgb_to_hsl(r8: u8, g8: u8, b8: u8) -> Hsl {
    let r = f64::from(r8) / 255.0;
    let g = f64::from(g8) / 255.0;
    let b = f64::from(b8) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    // Achromatic: hue is undefined, report 0.
    if r8 == g8 && g8 == b8 {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let sector = if r8 >= g8 && r8 >= b8 {
        (g - b) / d + if g8 < b8 { 6.0 } else { 0.0 }
    } else if g8 >= b8 {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(sector * 60.0, s * 100.0, l * 100.0)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn hsl_to_rgb(hsl: Hsl) -> (u8, u8, u8) {
    let h = hsl.h;
    let s = hsl.s.clamp(0.0, 100.0) / 100.0;
    let l = hsl.l.clamp(0.0, 100.0) / 100.0;
    let a = s * l.min(1.0 - l);

    let channel = |n: f64| -> u8 {
        let k = (n + h / 30.0).rem_euclid(12.0);
        let value = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        // Clamped to [0, 255] before the cast.
        (value * 255.0).round().clamp(0.0, 255.0) as u8
    };

    (channel(0.0), channel(8.0), channel(4.0))
}

/// Relative luminance of an sRGB color per WCAG 2.1.
#[must_use]
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel_luminance(c: u8) -> f64 {
        let c = f64::from(c) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * channel_luminance(r) + 0.7152 * channel_luminance(g) + 0.0722 * channel_luminance(b)
}

/// WCAG contrast ratio between two colors; argument order does not matter.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let l1 = a.luminance();
    let l2 = b.luminance();
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Whether `foreground` on `background` meets WCAG AA.
///
/// Large text needs 3:1, normal text 4.5:1.
#[must_use]
pub fn meets_aa(foreground: Color, background: Color, is_large_text: bool) -> bool {
    let threshold = if is_large_text {
        AA_LARGE_TEXT
    } else {
        AA_NORMAL_TEXT
    };
    contrast_ratio(foreground, background) >= threshold
}

/// Contrast ratio between two hex strings.
pub fn contrast_ratio_hex(a: &str, b: &str) -> Result<f64> {
    Ok(contrast_ratio(Color::parse(a)?, Color::parse(b)?))
}

/// [`meets_aa`] for hex strings, as used by live form indicators.
pub fn meets_aa_hex(foreground: &str, background: &str, is_large_text: bool) -> Result<bool> {
    Ok(meets_aa(
        Color::parse(foreground)?,
        Color::parse(background)?,
        is_large_text,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // === Parsing ===

    #[test]
    fn test_parse_six_digit() {
        assert_eq!(Color::parse("#009688").unwrap(), Color::new(0, 150, 136));
        assert_eq!(Color::parse("ff5500").unwrap(), Color::new(255, 85, 0));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            Color::parse("#3B82F6").unwrap(),
            Color::parse("#3b82f6").unwrap()
        );
    }

    #[test]
    fn test_parse_expands_shorthand() {
        assert_eq!(Color::parse("#abc").unwrap().to_hex(), "#aabbcc");
        assert_eq!(Color::parse("F00").unwrap().to_hex(), "#ff0000");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for bad in ["", "#", "#12", "#1234", "#12345", "#1234567", "#gggggg", "#+1ffff", "#ééé"] {
            let err = Color::parse(bad).unwrap_err();
            assert!(err.is_malformed_color(), "{bad} should be malformed");
        }
    }

    #[test]
    fn test_to_hex_is_lowercase() {
        assert_eq!(Color::from_hex(0xFF5500).to_hex(), "#ff5500");
        assert_eq!(Color::new(255, 85, 0).to_string(), "#ff5500");
    }

    #[test]
    fn test_from_str() {
        let color: Color = "#0a0a0a".parse().unwrap();
        assert_eq!(color.to_rgb(), (10, 10, 10));
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Color::from_hex(0x3B82F6)).unwrap();
        assert_eq!(json, "\"#3b82f6\"");
        let back: Color = serde_json::from_str("\"#FFF\"").unwrap();
        assert_eq!(back, Color::WHITE);
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }

    // === HSL ===

    #[test]
    fn test_hex_to_hsl_primaries() {
        assert_eq!(hex_to_hsl("#ff0000").unwrap().rounded(), Hsl::new(0.0, 100.0, 50.0));
        assert_eq!(hex_to_hsl("#00ff00").unwrap().rounded(), Hsl::new(120.0, 100.0, 50.0));
        assert_eq!(hex_to_hsl("#0000ff").unwrap().rounded(), Hsl::new(240.0, 100.0, 50.0));
    }

    #[test]
    fn test_hex_to_hsl_rounded_values() {
        assert_eq!(hex_to_hsl("#3b82f6").unwrap().rounded(), Hsl::new(217.0, 91.0, 60.0));
        assert_eq!(hex_to_hsl("#0f172a").unwrap().rounded(), Hsl::new(222.0, 47.0, 11.0));
        assert_eq!(hex_to_hsl("#f59e0b").unwrap().rounded(), Hsl::new(38.0, 92.0, 50.0));
    }

    #[test]
    fn test_hex_to_hsl_achromatic() {
        let gray = hex_to_hsl("#808080").unwrap();
        assert!(approx_eq(gray.h, 0.0, 1e-12));
        assert!(approx_eq(gray.s, 0.0, 1e-12));
        assert_eq!(gray.rounded().l, 50.0);
        assert!(!gray.rounded().is_dark());
    }

    #[test]
    fn test_hex_to_hsl_rejects_malformed() {
        assert!(hex_to_hsl("#xyz").is_err());
    }

    #[test]
    fn test_hsl_to_hex_known_values() {
        assert_eq!(hsl_to_hex(Hsl::new(217.0, 91.0, 60.0)), "#3c83f6");
        assert_eq!(hsl_to_hex(Hsl::new(120.0, 100.0, 25.0)), "#008000");
        assert_eq!(hsl_to_hex(Hsl::new(0.0, 0.0, 50.0)), "#808080");
        assert_eq!(hsl_to_hex(Hsl::new(210.0, 40.0, 96.0)), "#f1f5f9");
    }

    #[test]
    fn test_hsl_to_hex_extremes() {
        assert_eq!(hsl_to_hex(Hsl::new(123.0, 80.0, 0.0)), "#000000");
        assert_eq!(hsl_to_hex(Hsl::new(123.0, 80.0, 100.0)), "#ffffff");
        // Out-of-range lightness is clamped rather than wrapped.
        assert_eq!(hsl_to_hex(Hsl::new(0.0, 0.0, 120.0)), "#ffffff");
    }

    #[test]
    fn test_hex_round_trip_examples() {
        for hex in ["#3b82f6", "#0a0a0a", "#ff2bd6", "#f59e0b", "#0f172a", "#a3a3a3", "#71717a"] {
            assert_eq!(hsl_to_hex(hex_to_hsl(hex).unwrap()), hex);
        }
    }

    #[test]
    fn test_rounded_wraps_hue() {
        let hsl = Hsl::new(359.6, 40.4, 10.5).rounded();
        assert_eq!(hsl, Hsl::new(0.0, 40.0, 11.0));
    }

    // === Luminance & contrast ===

    #[test]
    fn test_luminance_extremes() {
        assert!(Color::BLACK.luminance() < 0.001);
        assert!(Color::WHITE.luminance() > 0.999);
        assert!(approx_eq(relative_luminance(255, 0, 0), 0.2126, 1e-9));
    }

    #[test]
    fn test_contrast_black_white_is_21() {
        assert!(approx_eq(contrast_ratio(Color::BLACK, Color::WHITE), 21.0, 1e-9));
    }

    #[test]
    fn test_contrast_is_symmetric() {
        let a = Color::from_hex(0xCC3344);
        let b = Color::from_hex(0x112266);
        assert!(approx_eq(a.contrast_ratio(&b), b.contrast_ratio(&a), 1e-12));
    }

    #[test]
    fn test_contrast_same_color_is_one() {
        let c = Color::from_hex(0x3B82F6);
        assert!(approx_eq(contrast_ratio(c, c), 1.0, 1e-12));
    }

    #[test]
    fn test_meets_aa_boundaries() {
        assert!(meets_aa_hex("#000000", "#ffffff", false).unwrap());
        assert!(!meets_aa_hex("#cccccc", "#ffffff", false).unwrap());
        assert!(meets_aa_hex("#666666", "#ffffff", true).unwrap());
    }

    #[test]
    fn test_meets_aa_threshold_edge() {
        // #767676 is the lightest gray that passes 4.5:1 on white.
        assert!(meets_aa(Color::from_hex(0x767676), Color::WHITE, false));
        assert!(!meets_aa(Color::from_hex(0x777777), Color::WHITE, false));
        assert!(meets_aa(Color::from_hex(0x777777), Color::WHITE, true));
    }

    #[test]
    fn test_contrast_ratio_hex_propagates_errors() {
        assert!(contrast_ratio_hex("#fff", "oops").is_err());
        let ratio = contrast_ratio_hex("#cccccc", "#ffffff").unwrap();
        assert!(approx_eq(ratio, 1.606, 0.01));
    }
}
