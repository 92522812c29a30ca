//! CSS custom-property serialization.

use crate::tokens::ThemeTokens;

/// Render tokens as `--name: #rrggbb;` lines in canonical order.
///
/// Lines are newline separated with no trailing newline, ready to be
/// spliced into a selector block by the page renderer.
///
/// ```rust
/// use pagetheme_core::{css, presets::{lookup, PresetId}};
///
/// let block = css::serialize(&lookup(PresetId::Noir).tokens);
/// assert!(block.starts_with("--background: #0a0a0a;\n--foreground: #fafafa;"));
/// assert!(block.ends_with("--ring: #d4d4d4;"));
/// ```
#[must_use]
pub fn serialize(tokens: &ThemeTokens) -> String {
    tokens
        .iter()
        .map(|(name, color)| format!("--{}: {};", name.css_name(), color))
        .collect::<Vec<_>>()
        .join("\n")
}
