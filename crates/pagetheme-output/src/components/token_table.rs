//! Token table component.
//!
//! One row per token: name, hex, HSL triple and (in rich mode) a swatch.

use crate::ansi::{ANSI_BOLD, ANSI_RESET, paint, swatch};
use crate::mode::OutputMode;
use crate::style_block::hsl_triple;
use pagetheme_core::ThemeTokens;
use unicode_width::UnicodeWidthStr;

const SWATCH_WIDTH: usize = 4;

/// Display configuration for token tables.
#[derive(Debug, Clone)]
pub struct TokenTableDisplay {
    mode: OutputMode,
    show_header: bool,
    show_hsl: bool,
    use_css_names: bool,
}

impl TokenTableDisplay {
    /// Create a new display for a given mode.
    #[must_use]
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            show_header: true,
            show_hsl: true,
            use_css_names: false,
        }
    }

    /// Hide the header row.
    #[must_use]
    pub fn hide_header(mut self) -> Self {
        self.show_header = false;
        self
    }

    /// Hide the HSL column.
    #[must_use]
    pub fn hide_hsl(mut self) -> Self {
        self.show_hsl = false;
        self
    }

    /// Show `--kebab-case` property names instead of camelCase.
    #[must_use]
    pub fn css_names(mut self) -> Self {
        self.use_css_names = true;
        self
    }

    /// Render the table to a string.
    #[must_use]
    pub fn render(&self, tokens: &ThemeTokens) -> String {
        let rows: Vec<(String, String, String)> = tokens
            .iter()
            .map(|(name, color)| {
                let label = if self.use_css_names {
                    format!("--{}", name.css_name())
                } else {
                    name.as_str().to_string()
                };
                (label, color.to_hex(), hsl_triple(color))
            })
            .collect();

        let name_width = rows
            .iter()
            .map(|(name, _, _)| name.width())
            .chain(std::iter::once("Token".width()))
            .max()
            .unwrap_or(0);
        let hsl_width = rows
            .iter()
            .map(|(_, _, hsl)| hsl.width())
            .max()
            .unwrap_or(0);

        let mut lines = Vec::with_capacity(rows.len() + 2);
        if self.show_header {
            let mut header = format!("{:<name_width$}  {:<7}", "Token", "Hex");
            if self.show_hsl {
                header.push_str(&format!("  {:<hsl_width$}", "HSL"));
            }
            let header = header.trim_end().to_string();
            let rule = "-".repeat(header.width());
            if self.mode.uses_ansi() {
                lines.push(format!("{ANSI_BOLD}{header}{ANSI_RESET}"));
            } else {
                lines.push(header);
            }
            lines.push(rule);
        }

        for ((name, hex, hsl), (_, color)) in rows.iter().zip(tokens.iter()) {
            let mut line = format!("{name:<name_width$}  ");
            line.push_str(&paint(hex, color, self.mode.uses_ansi()));
            if self.show_hsl {
                line.push_str(&format!("  {hsl:<hsl_width$}"));
            }
            if self.mode.uses_swatches() {
                line.push_str("  ");
                line.push_str(&swatch(color, SWATCH_WIDTH));
            }
            lines.push(line.trim_end().to_string());
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_contains, assert_has_ansi, assert_max_width, assert_no_ansi};
    use pagetheme_core::{PresetId, TOKEN_COUNT, lookup};

    #[test]
    fn renders_plain_table() {
        let output = TokenTableDisplay::new(OutputMode::Plain).render(&lookup(PresetId::Noir).tokens);
        assert_no_ansi(&output);
        assert_eq!(output.lines().count(), TOKEN_COUNT + 2);
        assert_contains(&output, "Token");
        assert_contains(&output, "background           #0a0a0a  0 0% 4%");
        assert_contains(&output, "secondaryForeground  #fafafa");
    }

    #[test]
    fn renders_css_names_without_header() {
        let output = TokenTableDisplay::new(OutputMode::Plain)
            .hide_header()
            .hide_hsl()
            .css_names()
            .render(&lookup(PresetId::Paper).tokens);
        let first = output.lines().next().unwrap();
        assert_eq!(first, "--background            #ffffff");
        assert_eq!(output.lines().count(), TOKEN_COUNT);
    }

    #[test]
    fn renders_rich_swatches() {
        let output = TokenTableDisplay::new(OutputMode::Rich).render(&lookup(PresetId::Neon).tokens);
        assert_has_ansi(&output);
        assert!(output.contains("\x1b[48;2;255;43;214m"));
        assert_contains(&output, "primary");
    }

    #[test]
    fn fits_in_narrow_terminal() {
        let output = TokenTableDisplay::new(OutputMode::Rich).render(&lookup(PresetId::Slate).tokens);
        assert_max_width(&output, 60);
    }
}
