//! Command line interface for glyph-desmos
//!
//! Handles parsing command line arguments and provides
//! validation for user inputs.

use crate::core::config_file::ConfigFile;
use crate::formula::FormulaStyle;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use tracing::debug;

/// How converted glyphs are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One formula per line, ready to paste into Desmos
    #[default]
    Text,
    /// A JSON array with one record per glyph, including failures
    Json,
}

/// glyph-desmos CLI arguments
///
/// Examples:
///   glyph-desmos font.svg --list                  # Show the glyphs of a font
///   glyph-desmos font.svg --glyphs Hello          # Convert H, e, l, l, o in that order
///   glyph-desmos font.svg --all -o glyphs.txt     # Convert every glyph to a file
///   glyph-desmos --path-data "M0 0l10 0" --label I
///   glyph-desmos --new-config                     # Write ~/.config/glyph-desmos/settings.json
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "glyph-desmos",
    version,
    about = "Convert SVG font glyphs into piecewise Bezier formulas for Desmos",
    long_about = "glyph-desmos reads the <glyph> outlines of an SVG font and turns each selected glyph into a single piecewise Desmos function built from line segments and quadratic/cubic Bezier curves."
)]
pub struct CliArgs {
    /// SVG font to read glyphs from
    #[clap(help = "SVG font file to read glyphs from")]
    pub font: Option<PathBuf>,

    /// Characters to convert, in output order
    #[clap(
        long = "glyphs",
        short = 'g',
        help = "Characters to convert, in output order",
        long_help = "Characters whose glyphs should be converted. Each character selects the glyph with that unicode label; formulas are written in the same order."
    )]
    pub glyphs: Option<String>,

    /// Convert every glyph of the font
    #[clap(long = "all", short = 'a', help = "Convert every glyph in the font")]
    pub all: bool,

    /// List the glyph labels of the font and exit
    #[clap(long = "list", short = 'l', help = "List the glyphs in the font")]
    pub list: bool,

    /// Convert raw path data instead of a font
    #[clap(
        long = "path-data",
        short = 'd',
        help = "Raw path data to convert (requires --label)",
        allow_hyphen_values = true
    )]
    pub path_data: Option<String>,

    /// Display label used with --path-data
    #[clap(long = "label", help = "Glyph label used to name the formula")]
    pub label: Option<String>,

    /// Output file; stdout when omitted
    #[clap(long = "output", short = 'o', help = "Write output to a file instead of stdout")]
    pub output: Option<PathBuf>,

    /// Output format
    #[clap(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Divisor applied to font units
    #[clap(
        long = "normalization",
        help = "Divide font units by this value (default 1500)"
    )]
    pub normalization: Option<f64>,

    /// Print the Bezier helper definitions before the formulas
    #[clap(long = "helpers", help = "Also print the Bezier helper function definitions")]
    pub helpers: bool,

    /// Alternative settings file
    #[clap(long = "config", help = "Read settings from this file")]
    pub config: Option<PathBuf>,

    /// Write a default settings file and exit
    #[clap(
        long = "new-config",
        help = "Initialize the user config directory with a settings file",
        long_help = "Create ~/.config/glyph-desmos with a settings.json holding the default formula style and a logs/ directory, then exit."
    )]
    pub new_config: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Also write logs to the config logs directory
    #[clap(long = "log-file", help = "Also write logs to ~/.config/glyph-desmos/logs/")]
    pub log_file: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// Returns a readable message for the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.new_config {
            return Ok(());
        }

        if let Some(normalization) = self.normalization {
            if !normalization.is_finite() || normalization <= 0.0 {
                return Err(format!(
                    "Invalid normalization: {normalization}\nIt must be a positive number."
                ));
            }
        }

        if self.label.is_some() && self.path_data.is_none() {
            return Err("--label is only used together with --path-data".to_string());
        }

        if self.path_data.is_some() {
            if self.font.is_some() {
                return Err(
                    "Give either an SVG font or --path-data, not both.".to_string(),
                );
            }
            return match &self.label {
                Some(label) if !label.is_empty() => Ok(()),
                _ => Err("--path-data needs a glyph label, e.g. --label A".to_string()),
            };
        }

        let Some(path) = &self.font else {
            return Err(
                "Nothing to convert: give an SVG font file or --path-data.".to_string(),
            );
        };

        if !path.exists() {
            return Err(format!(
                "Font file does not exist: {}\nMake sure the path is correct and the file exists.",
                path.display()
            ));
        }
        if !path.is_file() {
            return Err(format!("Not a file: {}", path.display()));
        }
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => {}
            _ => {
                return Err(format!(
                    "Unsupported file type: {}\nOnly SVG fonts (.svg) are supported.",
                    path.display()
                ));
            }
        }

        if self.list {
            return Ok(());
        }
        match (&self.glyphs, self.all) {
            (Some(_), true) => Err("Use either --glyphs or --all, not both.".to_string()),
            (Some(glyphs), false) if glyphs.is_empty() => {
                Err("--glyphs needs at least one character".to_string())
            }
            (None, false) => {
                Err("Choose glyphs with --glyphs <CHARS>, or use --all or --list.".to_string())
            }
            _ => Ok(()),
        }
    }

    /// Labels requested with --glyphs, one per character, in order
    pub fn selected_labels(&self) -> Vec<String> {
        self.glyphs
            .as_deref()
            .unwrap_or_default()
            .chars()
            .map(String::from)
            .collect()
    }

    /// Resolve the formula style
    ///
    /// Priority order:
    /// 1. CLI argument (--normalization)
    /// 2. Config file setting
    /// 3. Built-in default
    pub fn formula_style(&self, config: Option<&ConfigFile>) -> FormulaStyle {
        let mut style = FormulaStyle::default();
        if let Some(config) = config {
            config.apply_to(&mut style);
        }
        if let Some(normalization) = self.normalization {
            debug!("Using normalization from CLI: {}", normalization);
            style.normalization = normalization;
        }
        style
    }

    /// Whether to print the helper definitions (CLI flag or config file)
    pub fn emit_helpers(&self, config: Option<&ConfigFile>) -> bool {
        self.helpers || config.and_then(|c| c.emit_helpers).unwrap_or(false)
    }
}
