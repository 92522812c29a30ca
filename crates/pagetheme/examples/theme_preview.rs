//! Theme Preview - derive a theme from the command line and inspect it
//!
//! This example shows the whole pagetheme pipeline:
//! - Picking a preset by id (or from `PAGETHEME_PRESET`)
//! - Applying background, primary, accent or brand overrides
//! - Printing the CSS custom-property block
//! - Printing the token table and the WCAG AA contrast report
//!
//! # Running This Example
//!
//! ```bash
//! cargo run --example theme_preview -- slate --primary 3b82f6
//! PAGETHEME_OUTPUT=plain cargo run --example theme_preview -- noir --brand "#22c55e"
//! ```
//!
//! Pass `--json` to print the configuration record instead of the reports,
//! `--tokens` to print the derived tokens as a JSON map, or `--hsl` to print
//! the `H S% L%` style block instead of hex CSS. `--preset-brand` themes the
//! preset from its suggested brand color when no `--brand` is given.
//!
//! # Expected Output
//!
//! ```text
//! pagetheme preview: Slate
//! ========================
//! Structured slate surfaces with amber calls to action
//! Suggested brand: #f59e0b (--preset-brand)
//!
//! --background: #0f172a;
//! --foreground: #f8fafc;
//! ...
//!
//! Contrast (WCAG AA)
//! ------------------
//!   PASS  foreground on background  ...
//! ```

use pagetheme::output::{ContrastReport, ContrastReportDisplay, OutputMode, TokenTableDisplay};
use pagetheme::output::{style_block, terminal_width};
use pagetheme::{Overrides, PresetId, ThemeConfig, ThemeError};
use std::process::ExitCode;

const USAGE: &str = "usage: theme_preview [PRESET] [--background HEX] [--primary HEX] \
                     [--accent HEX] [--brand HEX] [--preset-brand] [--hsl] [--json] [--tokens]";

/// Parsed command line.
#[derive(Debug, Default)]
struct Args {
    preset: Option<String>,
    overrides: Overrides,
    hsl: bool,
    json: bool,
    tokens: bool,
    preset_brand: bool,
}

impl Args {
    fn parse(mut raw: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut args = Self::default();
        while let Some(arg) = raw.next() {
            match arg.as_str() {
                "--hsl" => args.hsl = true,
                "--json" => args.json = true,
                "--tokens" => args.tokens = true,
                "--preset-brand" => args.preset_brand = true,
                "--background" | "--primary" | "--accent" | "--brand" => {
                    let value = raw.next().ok_or_else(|| format!("{arg} needs a value"))?;
                    args.overrides = match arg.as_str() {
                        "--background" => args.overrides.background(value),
                        "--primary" => args.overrides.primary(value),
                        "--accent" => args.overrides.accent(value),
                        _ => args.overrides.brand(value),
                    };
                }
                flag if flag.starts_with("--") => return Err(format!("unknown flag {flag}")),
                _ if args.preset.is_none() => args.preset = Some(arg.clone()),
                _ => return Err(format!("unexpected argument {arg}")),
            }
        }
        Ok(args)
    }

    fn config(&self) -> Result<ThemeConfig, ThemeError> {
        let preset = match &self.preset {
            Some(id) => id.parse::<PresetId>()?,
            None => PresetId::from_env()?,
        };
        let mut overrides = self.overrides.clone();
        if self.preset_brand && overrides.brand.is_none() {
            overrides.brand = preset.preset().brand_overrides().brand;
        }
        Ok(ThemeConfig::new(preset).with_overrides(overrides))
    }
}

fn run(args: &Args) -> Result<(), ThemeError> {
    let config = args.config()?;
    if args.json {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let tokens = config.resolve()?;
    if args.tokens {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
        return Ok(());
    }

    let mode = OutputMode::detect();
    let preset = config.preset.preset();

    let title = format!("pagetheme preview: {}", preset.name);
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!("{}", preset.description);
    if let Some(brand) = preset.default_brand {
        println!("Suggested brand: {brand} (--preset-brand)");
    }
    println!();

    if args.hsl {
        println!("{}", style_block(&tokens, ":root"));
    } else {
        println!("{}", tokens.to_css());
    }
    println!();

    println!("{}", TokenTableDisplay::new(mode).render(&tokens));
    println!();

    let width = terminal_width();
    let report = ContrastReport::from_tokens(&tokens);
    let display = ContrastReportDisplay::new(mode).bar_width(width.saturating_sub(40).min(32));
    println!("{}", display.render(&report));

    if !report.all_pass() {
        eprintln!("\nwarning: some pairs are below 4.5:1");
    }
    Ok(())
}

fn main() -> ExitCode {
    pagetheme::core::logging::init();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
