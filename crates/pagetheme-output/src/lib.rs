//! Terminal output for pagetheme.
//!
//! Renders derived themes for people reading a terminal:
//! - [`components::TokenTableDisplay`] - every token with its hex, HSL and swatch
//! - [`components::ContrastReportDisplay`] - AA status per pair, summary and bar
//! - [`style_block`] - the `H S% L%` custom-property block page templates use
//!
//! Every component renders to a `String` in one of three [`OutputMode`]s.
//! [`OutputMode::detect`] picks one from `PAGETHEME_OUTPUT`, `NO_COLOR` and
//! whether stdout is a terminal.
//!
//! # Example
//!
//! ```rust
//! use pagetheme_core::{derive_preset, PresetId};
//! use pagetheme_output::{ContrastReport, ContrastReportDisplay, OutputMode};
//!
//! let tokens = derive_preset(PresetId::Slate);
//! let report = ContrastReport::from_tokens(&tokens);
//! let text = ContrastReportDisplay::new(OutputMode::Plain).render(&report);
//! assert!(text.contains("6/6 pass"));
//! ```

#![forbid(unsafe_code)]

pub mod ansi;
pub mod components;
pub mod mode;
pub mod style_block;
pub mod testing;

pub use ansi::AnsiColor;
pub use components::{
    ContrastCounts, ContrastReport, ContrastReportDisplay, ContrastStatus, TokenTableDisplay,
};
pub use mode::{OutputMode, terminal_width};
pub use style_block::{hsl_triple, style_block};
