//! Test utilities for output component testing.
//!
//! Components render to `String`, so tests render directly and assert on
//! the result. Every assertion strips ANSI codes first unless it is about
//! the codes themselves.

use crate::mode::OutputMode;
use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*[a-zA-Z]").expect("invalid ANSI regex"));

/// Render the same component in plain and rich mode for comparison.
pub fn render_both<F: Fn(OutputMode) -> String>(render: F) -> (String, String) {
    (render(OutputMode::Plain), render(OutputMode::Rich))
}

// =============================================================================
// Assertion Utilities
// =============================================================================

/// Strip ANSI escape codes from a string.
#[must_use]
pub fn strip_ansi_codes(input: &str) -> String {
    ANSI_RE.replace_all(input, "").to_string()
}

/// Assert output contains text (after stripping ANSI codes).
#[track_caller]
pub fn assert_contains(output: &str, expected: &str) {
    let stripped = strip_ansi_codes(output);
    assert!(
        stripped.contains(expected),
        "Expected output to contain: '{expected}'\nActual output (stripped):\n{stripped}\n---"
    );
}

/// Assert output does NOT contain text.
#[track_caller]
pub fn assert_not_contains(output: &str, unexpected: &str) {
    let stripped = strip_ansi_codes(output);
    assert!(
        !stripped.contains(unexpected),
        "Expected output to NOT contain: '{unexpected}'\nActual output (stripped):\n{stripped}"
    );
}

/// Assert output has no ANSI codes (for plain mode testing).
#[track_caller]
pub fn assert_no_ansi(output: &str) {
    assert!(
        !output.contains("\x1b["),
        "Found ANSI escape codes in output that should be plain:\n{output}\n---"
    );
}

/// Assert output has ANSI codes (for rich mode testing).
#[track_caller]
pub fn assert_has_ansi(output: &str) {
    assert!(
        output.contains("\x1b["),
        "Expected ANSI escape codes in rich output but found none:\n{output}\n---"
    );
}

/// Assert all lines are within max width.
#[track_caller]
pub fn assert_max_width(output: &str, max_width: usize) {
    let stripped = strip_ansi_codes(output);
    for (idx, line) in stripped.lines().enumerate() {
        let width = UnicodeWidthStr::width(line);
        assert!(
            width <= max_width,
            "Line {} exceeds max width {}. Width: {}, Content: '{}'",
            idx + 1,
            max_width,
            width,
            line
        );
    }
}

/// Assert the expected fragments appear in order.
#[track_caller]
pub fn assert_contains_in_order(output: &str, expected: &[&str]) {
    let stripped = strip_ansi_codes(output);
    let mut last_pos = 0;

    for (idx, exp) in expected.iter().enumerate() {
        match stripped[last_pos..].find(exp) {
            Some(pos) => {
                last_pos += pos + exp.len();
            }
            None => {
                panic!(
                    "Expected '{exp}' (item {idx}) not found after position {last_pos}\nOutput:\n{stripped}\n---"
                );
            }
        }
    }
}

// =============================================================================
// Debug Logging for Tests
// =============================================================================

/// Enable verbose test logging (set PAGETHEME_TEST_VERBOSE=1).
#[must_use]
pub fn is_verbose() -> bool {
    std::env::var_os("PAGETHEME_TEST_VERBOSE").is_some()
}

/// Log rendered output for debugging.
pub fn debug_output(label: &str, output: &str) {
    if is_verbose() {
        eprintln!(
            "\n=== {label} (raw) ===\n{output}\n=== {label} (stripped) ===\n{}\n=== END ===\n",
            strip_ansi_codes(output)
        );
    }
}
