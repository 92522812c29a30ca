//! Output mode selection.
//!
//! Components render in one of three modes. Detection order:
//!
//! | Check | Result |
//! |-------|--------|
//! | `PAGETHEME_OUTPUT=plain\|minimal\|rich` | that mode |
//! | `NO_COLOR` set | `Plain` |
//! | stdout is a terminal | `Rich` |
//! | otherwise | `Plain` |

use crossterm::tty::IsTty;
use std::str::FromStr;

/// Environment variable that forces an output mode.
pub const OUTPUT_ENV_VAR: &str = "PAGETHEME_OUTPUT";

/// Width used when the terminal size cannot be read.
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// How components render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputMode {
    /// ASCII only, no escape codes. Safe for logs, pipes and CI.
    #[default]
    Plain,
    /// Colored text without swatches or bars.
    Minimal,
    /// Colors, glyphs and swatches.
    Rich,
}

impl OutputMode {
    /// Whether this mode emits ANSI escape codes.
    #[must_use]
    pub const fn uses_ansi(self) -> bool {
        matches!(self, Self::Minimal | Self::Rich)
    }

    /// Whether this mode draws color swatches and bars.
    #[must_use]
    pub const fn uses_swatches(self) -> bool {
        matches!(self, Self::Rich)
    }

    /// Canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Minimal => "minimal",
            Self::Rich => "rich",
        }
    }

    /// Pick a mode from the environment and stdout.
    #[must_use]
    pub fn detect() -> Self {
        let forced = std::env::var(OUTPUT_ENV_VAR).ok();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        Self::detect_from(forced.as_deref(), no_color, std::io::stdout().is_tty())
    }

    /// Mode selection with every input supplied.
    ///
    /// An unrecognized forced value is ignored.
    #[must_use]
    pub fn detect_from(forced: Option<&str>, no_color: bool, is_tty: bool) -> Self {
        if let Some(mode) = forced.and_then(|value| value.trim().parse().ok()) {
            return mode;
        }
        if no_color || !is_tty {
            Self::Plain
        } else {
            Self::Rich
        }
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = OutputModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "none" | "off" => Ok(Self::Plain),
            "minimal" | "color" => Ok(Self::Minimal),
            "rich" | "full" => Ok(Self::Rich),
            _ => Err(OutputModeParseError(s.to_string())),
        }
    }
}

/// Error parsing an output mode name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputModeParseError(String);

impl std::fmt::Display for OutputModeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown output mode '{}', available: plain, minimal, rich",
            self.0
        )
    }
}

impl std::error::Error for OutputModeParseError {}

/// Current terminal width in columns, or [`DEFAULT_TERMINAL_WIDTH`].
#[must_use]
pub fn terminal_width() -> usize {
    crossterm::terminal::size()
        .ok()
        .map(|(cols, _)| usize::from(cols))
        .filter(|&cols| cols > 0)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}
