//! Output components for pagetheme.
//!
//! - [`contrast_report`] - AA status of every foreground/surface pair
//! - [`token_table`] - Token names, hex values and swatches

pub mod contrast_report;
pub mod token_table;

// Re-export main types
pub use contrast_report::{ContrastCounts, ContrastReport, ContrastReportDisplay, ContrastStatus};
pub use token_table::TokenTableDisplay;
