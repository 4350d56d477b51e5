//! Application runner logic
//!
//! Handles the different ways to run glyph-desmos: initializing the config,
//! listing a font, converting raw path data, or converting a glyph selection.

use crate::convert_glyph;
use crate::core::batch::{convert_batch, join_formulas, GlyphOutcome, GlyphReport};
use crate::core::cli::{CliArgs, OutputFormat};
use crate::core::config_file::ConfigFile;
use crate::font_source::{load_svg_font, select_glyphs, GlyphEntry};
use crate::formula::FormulaStyle;
use crate::logging;
use anyhow::{anyhow, bail, Context, Result};
use std::path::Path;
use tracing::{error, info};

/// Run the application with the given CLI arguments.
/// Handles special CLI flags and delegates to the conversion modes.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    let _log_guard = logging::init(cli_args.verbose, cli_args.log_file)?;

    // Handle --new-config flag specially
    if cli_args.new_config {
        match &cli_args.config {
            Some(path) => ConfigFile::initialize_settings_file(path)?,
            None => {
                ConfigFile::initialize_config_directory(&ConfigFile::config_dir())
                    .context("Failed to initialize config directory")?;
            }
        }
        return Ok(());
    }

    cli_args.validate().map_err(|message| anyhow!(message))?;

    let config = match &cli_args.config {
        Some(path) => Some(
            ConfigFile::load_from(path)?
                .ok_or_else(|| anyhow!("Settings file does not exist: {}", path.display()))?,
        ),
        None => ConfigFile::load(),
    };
    let style = cli_args.formula_style(config.as_ref());
    style.validate().map_err(|message| anyhow!(message))?;
    let helpers = cli_args.emit_helpers(config.as_ref());

    if let Some(path_data) = &cli_args.path_data {
        let label = cli_args.label.as_deref().unwrap_or_default();
        let entry = GlyphEntry::new(label, path_data.as_str());
        return convert_single(&entry, &style, helpers, &cli_args);
    }

    let font_path = cli_args
        .font
        .as_ref()
        .ok_or_else(|| anyhow!("No SVG font given"))?;
    let entries = load_svg_font(font_path)?;
    info!("Loaded {} glyphs from {}", entries.len(), font_path.display());

    if cli_args.list {
        return write_output(cli_args.output.as_deref(), &list_glyphs(&entries));
    }

    let selected = if cli_args.all {
        entries
    } else {
        select_glyphs(&entries, &cli_args.selected_labels())?
    };

    let outcomes = convert_batch(&selected, &style);
    let failed = report_failures(&outcomes);
    let text = render(&outcomes, cli_args.format, helpers, &style)?;
    write_output(cli_args.output.as_deref(), &text)?;

    if failed > 0 {
        bail!("{} of {} glyphs could not be converted", failed, outcomes.len());
    }
    Ok(())
}

fn convert_single(
    entry: &GlyphEntry,
    style: &FormulaStyle,
    helpers: bool,
    cli_args: &CliArgs,
) -> Result<()> {
    let formula = convert_glyph(&entry.label, &entry.path_data, style)
        .with_context(|| format!("Failed to convert glyph '{}'", entry.label))?;
    let outcomes = [GlyphOutcome {
        label: entry.label.clone(),
        result: Ok(formula),
    }];
    let text = render(&outcomes, cli_args.format, helpers, style)?;
    write_output(cli_args.output.as_deref(), &text)
}

/// Log each failed glyph and return how many failed
fn report_failures(outcomes: &[GlyphOutcome]) -> usize {
    let mut failed = 0;
    for outcome in outcomes {
        if let Err(err) = &outcome.result {
            if err.is_unsupported() {
                error!("Glyph '{}' uses a feature that is not supported: {}", outcome.label, err);
            } else {
                error!("Glyph '{}' has corrupt path data: {}", outcome.label, err);
            }
            failed += 1;
        }
    }
    failed
}

/// Render the outcomes in the requested format
pub fn render(
    outcomes: &[GlyphOutcome],
    format: OutputFormat,
    helpers: bool,
    style: &FormulaStyle,
) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut lines: Vec<String> = Vec::new();
            if helpers {
                lines.extend(style.helper_definitions());
            }
            let formulas = join_formulas(outcomes);
            if !formulas.is_empty() {
                lines.push(formulas);
            }
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => {
            let reports: Vec<GlyphReport> = outcomes.iter().map(GlyphReport::from).collect();
            let document = if helpers {
                serde_json::json!({
                    "helpers": style.helper_definitions(),
                    "glyphs": reports,
                })
            } else {
                serde_json::to_value(&reports)?
            };
            Ok(serde_json::to_string_pretty(&document)?)
        }
    }
}

/// One line per glyph: label and glyph name
fn list_glyphs(entries: &[GlyphEntry]) -> String {
    entries
        .iter()
        .map(|entry| match &entry.name {
            Some(name) => format!("{}\t{}", entry.label, name),
            None => entry.label.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write to the output file, or stdout when none is given
fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, format!("{text}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote output to {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_output_puts_helpers_first() {
        let style = FormulaStyle::default();
        let outcomes = convert_batch(&[GlyphEntry::new("i", "M0 0v5")], &style);
        let text = render(&outcomes, OutputFormat::Text, true, &style).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(r"b_{ezier2}"));
        assert!(lines[1].starts_with(r"b_{ezier3}"));
        assert!(lines[2].starts_with(r"g_{lyphi}"));
    }

    #[test]
    fn json_output_with_helpers_is_an_object() {
        let style = FormulaStyle::default();
        let outcomes = convert_batch(&[GlyphEntry::new("i", "M0 0v5")], &style);
        let text = render(&outcomes, OutputFormat::Json, true, &style).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["helpers"].as_array().unwrap().len(), 2);
        assert_eq!(value["glyphs"][0]["label"], "i");

        let text = render(&outcomes, OutputFormat::Json, false, &style).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value.is_array());
    }

    #[test]
    fn listing_shows_names() {
        let mut named = GlyphEntry::new("A", "M0 0");
        named.name = Some("A.alt".to_string());
        let text = list_glyphs(&[named, GlyphEntry::new("b", "M0 0")]);
        assert_eq!(text, "A\tA.alt\nb");
    }

    #[test]
    fn output_file_ends_with_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_output(Some(&path), "line").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "line\n");
    }
}
