//! Contrast report component.
//!
//! Lists every foreground/surface pair of a token set with its ratio and AA
//! status, followed by a summary line and a pass bar.

use crate::ansi::{ANSI_BOLD, ANSI_RESET, AnsiColor, ERROR, MUTED, SUCCESS, WARNING, paint};
use crate::mode::OutputMode;
use pagetheme_core::{Color, ContrastCheck, ThemeTokens, audit};
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

/// AA status of one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastStatus {
    /// Meets 4.5:1.
    Pass,
    /// Meets 3:1 but not 4.5:1.
    LargeTextOnly,
    /// Below 3:1.
    Fail,
}

impl ContrastStatus {
    /// Classify a measured pair.
    #[must_use]
    pub const fn of(check: &ContrastCheck) -> Self {
        if check.passes_normal {
            Self::Pass
        } else if check.passes_large {
            Self::LargeTextOnly
        } else {
            Self::Fail
        }
    }

    /// Return the plain label for this status.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::LargeTextOnly => "LARGE",
            Self::Fail => "FAIL",
        }
    }

    /// Return the display indicator for this status in a given mode.
    #[must_use]
    pub const fn indicator(self, mode: OutputMode) -> &'static str {
        match (self, mode) {
            (Self::Pass, OutputMode::Rich) => "✓",
            (Self::LargeTextOnly, OutputMode::Rich) => "◐",
            (Self::Fail, OutputMode::Rich) => "✗",
            _ => self.label(),
        }
    }

    fn color(self) -> Color {
        match self {
            Self::Pass => SUCCESS,
            Self::LargeTextOnly => WARNING,
            Self::Fail => ERROR,
        }
    }
}

/// Measured pairs of one token set.
#[derive(Debug, Clone)]
pub struct ContrastReport {
    /// Checks in pair-table order.
    pub checks: Vec<ContrastCheck>,
}

impl ContrastReport {
    /// Audit a token set.
    #[must_use]
    pub fn from_tokens(tokens: &ThemeTokens) -> Self {
        Self {
            checks: audit(tokens),
        }
    }

    /// Summary counts.
    #[must_use]
    pub fn counts(&self) -> ContrastCounts {
        let mut counts = ContrastCounts::default();
        for check in &self.checks {
            counts.total += 1;
            match ContrastStatus::of(check) {
                ContrastStatus::Pass => counts.passed += 1,
                ContrastStatus::LargeTextOnly => counts.large_only += 1,
                ContrastStatus::Fail => counts.failed += 1,
            }
        }
        counts.lowest_ratio = self
            .checks
            .iter()
            .map(|check| check.ratio)
            .min_by(f64::total_cmp);
        counts
    }

    /// Whether every pair meets 4.5:1.
    #[must_use]
    pub fn all_pass(&self) -> bool {
        self.checks.iter().all(|check| check.passes_normal)
    }
}

/// Summary counts for a contrast report.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContrastCounts {
    /// Pairs measured.
    pub total: usize,
    /// Pairs meeting 4.5:1.
    pub passed: usize,
    /// Pairs meeting only 3:1.
    pub large_only: usize,
    /// Pairs below 3:1.
    pub failed: usize,
    /// Lowest ratio in the report.
    pub lowest_ratio: Option<f64>,
}

/// Display configuration for contrast reports.
#[derive(Debug, Clone)]
pub struct ContrastReportDisplay {
    mode: OutputMode,
    show_colors: bool,
    show_summary: bool,
    show_bar: bool,
    bar_width: usize,
    title: Option<String>,
}

impl ContrastReportDisplay {
    /// Create a new display for a given mode.
    #[must_use]
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            show_colors: true,
            show_summary: true,
            show_bar: true,
            bar_width: 24,
            title: Some("Contrast (WCAG AA)".to_string()),
        }
    }

    /// Hide the hex pair column.
    #[must_use]
    pub fn hide_colors(mut self) -> Self {
        self.show_colors = false;
        self
    }

    /// Hide summary footer.
    #[must_use]
    pub fn hide_summary(mut self) -> Self {
        self.show_summary = false;
        self
    }

    /// Hide the pass bar.
    #[must_use]
    pub fn hide_bar(mut self) -> Self {
        self.show_bar = false;
        self
    }

    /// Set pass bar width.
    #[must_use]
    pub fn bar_width(mut self, width: usize) -> Self {
        self.bar_width = width.max(8);
        self
    }

    /// Set a custom title (None to disable).
    #[must_use]
    pub fn title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    /// Render the report to a string.
    #[must_use]
    pub fn render(&self, report: &ContrastReport) -> String {
        let mut lines = Vec::new();

        if let Some(title) = &self.title {
            if self.mode.uses_ansi() {
                lines.push(format!("{ANSI_BOLD}{title}{ANSI_RESET}"));
            } else {
                lines.push(title.clone());
            }
            lines.push("-".repeat(title.width()));
        }

        let label_width = report
            .checks
            .iter()
            .map(|check| check.label().width())
            .max()
            .unwrap_or(0);
        for check in &report.checks {
            lines.push(self.render_check_line(check, label_width));
        }

        let counts = report.counts();
        if self.show_summary {
            lines.push(String::new());
            lines.push(Self::render_summary(&counts));
        }
        if self.show_bar && counts.total > 0 {
            lines.push(self.render_bar(&counts));
        }

        lines.join("\n").trim_end().to_string()
    }

    fn render_check_line(&self, check: &ContrastCheck, label_width: usize) -> String {
        let status = ContrastStatus::of(check);
        let indicator = status.indicator(self.mode);
        // Pad plain labels so the name column lines up across statuses.
        let indicator = if self.mode == OutputMode::Rich {
            indicator.to_string()
        } else {
            format!("{indicator:<5}")
        };
        let indicator = paint(&indicator, status.color(), self.mode.uses_ansi());

        let label = check.label();
        let pad = " ".repeat(label_width.saturating_sub(label.width()));
        let mut line = format!("  {indicator} {label}{pad}  {:>6.2}:1", check.ratio);

        if self.show_colors {
            if self.mode.uses_swatches() {
                let sample = format!(
                    "{}{} Aa {ANSI_RESET}",
                    check.surface.to_ansi_bg(),
                    check.foreground.to_ansi_fg()
                );
                let _ = write!(line, "  {sample}");
            }
            let _ = write!(line, "  {} on {}", check.foreground, check.surface);
        }
        line
    }

    fn render_summary(counts: &ContrastCounts) -> String {
        let mut summary = format!(
            "Summary: {} passed, {} large-text only, {} failed ({} pairs)",
            counts.passed, counts.large_only, counts.failed, counts.total
        );
        if let Some(lowest) = counts.lowest_ratio {
            let _ = write!(summary, ", lowest {lowest:.2}:1");
        }
        summary
    }

    fn render_bar(&self, counts: &ContrastCounts) -> String {
        format!(
            "AA: {}",
            pass_bar(
                counts.passed,
                counts.large_only,
                counts.failed,
                counts.total,
                self.bar_width,
                self.mode,
            )
        )
    }
}

fn pass_bar(
    passed: usize,
    large_only: usize,
    failed: usize,
    total: usize,
    width: usize,
    mode: OutputMode,
) -> String {
    if total == 0 {
        return "[no pairs]".to_string();
    }

    let width = width.max(8);
    let pass_len = passed.saturating_mul(width) / total;
    let large_len = large_only.saturating_mul(width) / total;
    let fail_len = failed.saturating_mul(width) / total;
    let used = pass_len.saturating_add(large_len).saturating_add(fail_len);
    let remaining = width.saturating_sub(used);

    let mut bar = String::new();
    bar.push('[');

    if mode.uses_ansi() {
        for (len, glyph, color) in [
            (pass_len, "=", SUCCESS),
            (large_len, "~", WARNING),
            (fail_len, "!", ERROR),
            (remaining, "-", MUTED),
        ] {
            if len > 0 {
                bar.push_str(&color.to_ansi_fg());
                bar.push_str(&glyph.repeat(len));
                bar.push_str(ANSI_RESET);
            }
        }
    } else {
        bar.push_str(&"=".repeat(pass_len));
        bar.push_str(&"~".repeat(large_len));
        bar.push_str(&"!".repeat(fail_len));
        bar.push_str(&"-".repeat(remaining));
    }

    bar.push(']');
    let _ = write!(bar, " {passed}/{total} pass");

    if large_only > 0 {
        let _ = write!(bar, ", {large_only} large-text only");
    }
    if failed > 0 {
        let _ = write!(bar, ", {failed} failed");
    }

    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_contains, assert_contains_in_order, assert_has_ansi, assert_no_ansi};
    use pagetheme_core::{PresetId, lookup};

    fn broken_paper() -> ThemeTokens {
        let mut tokens = lookup(PresetId::Paper).tokens;
        // 1.61:1 on white.
        tokens.foreground = Color::new(0xcc, 0xcc, 0xcc);
        // #777777 on white is 4.48:1.
        tokens.muted_foreground = Color::new(0x77, 0x77, 0x77);
        tokens
    }

    #[test]
    fn renders_plain_report() {
        let report = ContrastReport::from_tokens(&lookup(PresetId::Slate).tokens);
        let output = ContrastReportDisplay::new(OutputMode::Plain).render(&report);

        assert_contains(&output, "Contrast (WCAG AA)");
        assert_contains(&output, "PASS  foreground on background");
        assert_contains(&output, "#f8fafc on #0f172a");
        assert_contains(&output, "Summary: 6 passed, 0 large-text only, 0 failed (6 pairs)");
        assert_contains(&output, "AA: [========================] 6/6 pass");
        assert_no_ansi(&output);
    }

    #[test]
    fn renders_failures_in_order() {
        let report = ContrastReport::from_tokens(&broken_paper());
        assert!(!report.all_pass());
        let counts = report.counts();
        assert_eq!(counts.passed, 4);
        assert_eq!(counts.large_only, 1);
        assert_eq!(counts.failed, 1);

        let output = ContrastReportDisplay::new(OutputMode::Plain)
            .hide_colors()
            .render(&report);
        assert_contains_in_order(
            &output,
            &[
                "FAIL  foreground on background",
                "PASS  cardForeground on card",
                "LARGE mutedForeground on background",
                "1 large-text only, 1 failed",
            ],
        );
    }

    #[test]
    fn renders_rich_report() {
        let report = ContrastReport::from_tokens(&broken_paper());
        let output = ContrastReportDisplay::new(OutputMode::Rich).render(&report);
        assert_has_ansi(&output);
        assert_contains(&output, "✗ foreground on background");
        assert_contains(&output, "◐ mutedForeground on background");
        assert_contains(&output, " Aa ");
    }

    #[test]
    fn minimal_mode_colors_without_swatches() {
        let report = ContrastReport::from_tokens(&lookup(PresetId::Noir).tokens);
        let output = ContrastReportDisplay::new(OutputMode::Minimal).render(&report);
        assert_has_ansi(&output);
        assert_contains(&output, "PASS  foreground on background");
        assert!(!output.contains(" Aa "));
    }

    #[test]
    fn hides_optional_sections() {
        let report = ContrastReport::from_tokens(&lookup(PresetId::Neon).tokens);
        let output = ContrastReportDisplay::new(OutputMode::Plain)
            .title(None)
            .hide_summary()
            .hide_bar()
            .render(&report);
        assert_eq!(output.lines().count(), report.checks.len());
    }

    #[test]
    fn empty_bar() {
        assert_eq!(pass_bar(0, 0, 0, 0, 10, OutputMode::Plain), "[no pairs]");
    }
}
