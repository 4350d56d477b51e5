//! SVG font glyph extraction
//!
//! Reads the `<glyph>` elements of an SVG font and keeps those that carry both
//! a `unicode` label and `d` path data.

use anyhow::{anyhow, bail, Context, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// One glyph of an SVG font: its display label and raw path data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlyphEntry {
    pub label: String,
    pub path_data: String,
    /// The `glyph-name` attribute, when present
    pub name: Option<String>,
}

impl GlyphEntry {
    pub fn new(label: impl Into<String>, path_data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path_data: path_data.into(),
            name: None,
        }
    }
}

/// Load and scan an SVG font file
pub fn load_svg_font(path: impl AsRef<Path>) -> Result<Vec<GlyphEntry>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read SVG font {}", path.display()))?;
    let glyphs = parse_svg_font(&text)
        .with_context(|| format!("Failed to parse SVG font {}", path.display()))?;
    debug!("Found {} usable glyphs in {:?}", glyphs.len(), path);
    Ok(glyphs)
}

/// Collect every `<glyph>` element with both `unicode` and `d`, in document order
pub fn parse_svg_font(text: &str) -> Result<Vec<GlyphEntry>> {
    let mut reader = Reader::from_str(text);
    let mut glyphs = Vec::new();

    loop {
        let position = reader.buffer_position();
        let event = reader
            .read_event()
            .map_err(|e| anyhow!("Invalid XML near byte {}: {}", position, e))?;

        match event {
            Event::Start(element) | Event::Empty(element)
                if element.local_name().as_ref() == b"glyph" =>
            {
                match glyph_entry(&element)
                    .with_context(|| format!("Invalid <glyph> near byte {}", position))?
                {
                    Some(entry) => glyphs.push(entry),
                    None => debug!("Skipping <glyph> near byte {} without unicode and d", position),
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(glyphs)
}

/// The entry for one `<glyph>` element, `None` unless it has `unicode` and `d`
fn glyph_entry(element: &BytesStart) -> Result<Option<GlyphEntry>> {
    let (mut label, mut path_data, mut name) = (None, None, None);

    for attribute in element.attributes() {
        let attribute = attribute?;
        let slot = match attribute.key.local_name().as_ref() {
            b"unicode" => &mut label,
            b"d" => &mut path_data,
            b"glyph-name" => &mut name,
            _ => continue,
        };
        *slot = Some(attribute.unescape_value()?.into_owned());
    }

    Ok(match (label, path_data) {
        (Some(label), Some(path_data)) => Some(GlyphEntry {
            label,
            path_data,
            name,
        }),
        _ => None,
    })
}

/// Pick glyphs by label, in the order the labels are given
pub fn select_glyphs(entries: &[GlyphEntry], labels: &[String]) -> Result<Vec<GlyphEntry>> {
    let mut selected = Vec::with_capacity(labels.len());
    for label in labels {
        match entries.iter().find(|entry| &entry.label == label) {
            Some(entry) => selected.push(entry.clone()),
            None => bail!("No glyph with unicode '{}' in this font", label),
        }
    }
    Ok(selected)
}
