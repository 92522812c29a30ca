//! 24-bit ANSI escape helpers and the report palette.

// Hex color literals (0xRRGGBB) are idiomatic and readable as-is
#![allow(clippy::unreadable_literal)]

use pagetheme_core::Color;

/// Reset all attributes.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Bold on.
pub const ANSI_BOLD: &str = "\x1b[1m";

/// Passing checks.
pub const SUCCESS: Color = Color::from_hex(0x4CAF50);

/// Checks that only pass for large text.
pub const WARNING: Color = Color::from_hex(0xFF9800);

/// Failing checks.
pub const ERROR: Color = Color::from_hex(0xF44336);

/// Secondary text and empty bar segments.
pub const MUTED: Color = Color::from_hex(0x757575);

/// Escape sequences for a [`Color`].
pub trait AnsiColor {
    /// 24-bit foreground escape.
    fn to_ansi_fg(&self) -> String;

    /// 24-bit background escape.
    fn to_ansi_bg(&self) -> String;
}

impl AnsiColor for Color {
    fn to_ansi_fg(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    fn to_ansi_bg(&self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.r, self.g, self.b)
    }
}

/// Wrap `text` in a foreground color when `enabled`.
#[must_use]
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        format!("{}{text}{ANSI_RESET}", color.to_ansi_fg())
    } else {
        text.to_string()
    }
}

/// A block of `width` spaces on a `color` background.
#[must_use]
pub fn swatch(color: Color, width: usize) -> String {
    format!("{}{}{ANSI_RESET}", color.to_ansi_bg(), " ".repeat(width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_codes() {
        let color = Color::new(255, 128, 64);
        assert_eq!(color.to_ansi_fg(), "\x1b[38;2;255;128;64m");
        assert_eq!(color.to_ansi_bg(), "\x1b[48;2;255;128;64m");
    }

    #[test]
    fn test_paint_disabled_is_identity() {
        assert_eq!(paint("ok", SUCCESS, false), "ok");
        assert_eq!(paint("ok", SUCCESS, true), "\x1b[38;2;76;175;80mok\x1b[0m");
    }

    #[test]
    fn test_swatch() {
        assert_eq!(swatch(Color::BLACK, 2), "\x1b[48;2;0;0;0m  \x1b[0m");
    }
}
