//! Test helpers for theme tokens.
//!
//! Assertions here panic with a readable list of every failing pair, which
//! beats a bare `assert!(tokens.is_accessible())` when a derivation breaks.
//! With the `proptest` feature enabled, the module also exports strategies
//! for colors and override bundles.

use crate::color::{AA_NORMAL_TEXT, Color, contrast_ratio, meets_aa};
use crate::contrast::failures;
use crate::tokens::ThemeTokens;

/// Assert that every contrast pair of `tokens` meets AA for normal text.
#[track_caller]
pub fn assert_accessible(tokens: &ThemeTokens) {
    let failing = failures(tokens);
    if failing.is_empty() {
        return;
    }
    let report = failing
        .iter()
        .map(|check| {
            format!(
                "  {}: {} on {} = {:.2}:1",
                check.label(),
                check.foreground,
                check.surface,
                check.ratio
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    panic!(
        "{} contrast pair(s) below {AA_NORMAL_TEXT}:1\n{report}\n---",
        failing.len()
    );
}

/// Assert that `foreground` on `background` meets AA for normal text.
#[track_caller]
pub fn assert_meets_aa(foreground: Color, background: Color) {
    assert!(
        meets_aa(foreground, background, false),
        "{foreground} on {background} is {:.2}:1, need {AA_NORMAL_TEXT}:1",
        contrast_ratio(foreground, background)
    );
}

/// Proptest strategies for colors and overrides.
#[cfg(feature = "proptest")]
pub mod strategies {
    use crate::color::Color;
    use crate::overrides::Overrides;
    use proptest::prelude::*;

    /// Any sRGB color.
    pub fn arb_color() -> impl Strategy<Value = Color> {
        any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Color::new(r, g, b))
    }

    /// A hex string in one of the accepted input spellings.
    pub fn arb_hex() -> impl Strategy<Value = String> {
        (arb_color(), any::<bool>(), any::<bool>()).prop_map(|(color, hash, upper)| {
            let hex = color.to_hex();
            let hex = if hash { hex } else { hex[1..].to_string() };
            if upper { hex.to_uppercase() } else { hex }
        })
    }

    /// An override bundle where each channel is independently present.
    pub fn arb_overrides() -> impl Strategy<Value = Overrides> {
        (
            proptest::option::of(arb_hex()),
            proptest::option::of(arb_hex()),
            proptest::option::of(arb_hex()),
            proptest::option::of(arb_hex()),
        )
            .prop_map(|(background, primary, accent, brand)| Overrides {
                background,
                primary,
                accent,
                brand,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::{PresetId, lookup};

    #[test]
    fn test_assert_accessible_passes_for_presets() {
        for id in PresetId::ALL {
            assert_accessible(&lookup(id).tokens);
        }
    }

    #[test]
    #[should_panic(expected = "foreground on background")]
    fn test_assert_accessible_lists_failures() {
        let mut tokens = lookup(PresetId::Noir).tokens;
        tokens.foreground = tokens.background;
        assert_accessible(&tokens);
    }

    #[test]
    #[should_panic(expected = "need 4.5:1")]
    fn test_assert_meets_aa_fails() {
        assert_meets_aa(Color::from_hex(0x00CC_CCCC), Color::WHITE);
    }
}
