//! HSL-triple style blocks.
//!
//! Page templates consume tokens as bare HSL triples so they can be
//! composed with alpha at the use site (`hsl(var(--primary) / 0.5)`). This
//! module renders that form.

use pagetheme_core::{Color, ThemeTokens};
use std::fmt::Write;

/// `"H S% L%"` using the rounded HSL of `color`.
///
/// ```rust
/// use pagetheme_core::Color;
/// use pagetheme_output::style_block::hsl_triple;
///
/// assert_eq!(hsl_triple(Color::parse("#3b82f6").unwrap()), "217 91% 60%");
/// ```
#[must_use]
pub fn hsl_triple(color: Color) -> String {
    let hsl = color.to_hsl().rounded();
    format!("{} {}% {}%", hsl.h, hsl.s, hsl.l)
}

/// Wrap one `--name: H S% L%;` line per token in `selector { ... }`.
#[must_use]
pub fn style_block(tokens: &ThemeTokens, selector: &str) -> String {
    let mut block = format!("{selector} {{\n");
    for (name, color) in tokens.iter() {
        let _ = writeln!(block, "  --{}: {};", name.css_name(), hsl_triple(color));
    }
    block.push('}');
    block
}
