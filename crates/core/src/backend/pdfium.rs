//! Pdfium-backed content extraction.
//!
//! Converts pdfium's bottom-up page coordinates into top-down `top` values
//! (page height minus y). Glyph size is approximated by the tight
//! bounding-box height, which tracks the rendered size closely enough for
//! heading classification.

use std::path::Path;

use itertools::Itertools;
use pdfium_render::prelude::*;

use crate::error::{ParseError, Result};
use crate::model::Grid;
use crate::source::{Char, ContentExtractor, Flavor, ImageRegion, RawPage, TableEngine};
use crate::table::stream::{Glyph, GlyphRow, StreamSettings, detect_tables};

fn extraction_error(err: PdfiumError) -> ParseError {
    ParseError::Extraction(err.to_string())
}

/// A glyph with full geometry, kept for stream table detection.
#[derive(Debug, Clone)]
struct PositionedChar {
    ch: char,
    x: f64,
    width: f64,
    top: f64,
    height: f64,
}

type PageData = (Vec<PositionedChar>, Vec<ImageRegion>);

/// Read every page's glyphs and image regions.
#[allow(deprecated)] // PdfRect field access deprecated in 0.8.28, removed in 0.9.0
fn load_pages(path: &Path) -> Result<Vec<PageData>> {
    let pdfium = Pdfium::default();
    let document = pdfium
        .load_pdf_from_file(path, None)
        .map_err(extraction_error)?;

    let mut pages = Vec::new();
    for page in document.pages().iter() {
        let page_height = page.height().value as f64;
        let text = page.text().map_err(extraction_error)?;

        let mut chars = Vec::new();
        for ch in text.chars().iter() {
            if let (Some(unicode), Ok(rect)) = (ch.unicode_char(), ch.tight_bounds()) {
                chars.push(PositionedChar {
                    ch: unicode,
                    x: rect.left.value as f64,
                    width: (rect.right.value - rect.left.value).abs() as f64,
                    top: page_height - rect.top.value as f64,
                    height: (rect.top.value - rect.bottom.value).abs() as f64,
                });
            }
        }

        let mut images = Vec::new();
        for object in page.objects().iter() {
            if !matches!(object, PdfPageObject::Image(..)) {
                continue;
            }
            let Ok(bounds) = object.bounds() else { continue };
            images.push(ImageRegion {
                x0: bounds.left().value as f64,
                top: page_height - bounds.top().value as f64,
                x1: bounds.right().value as f64,
                bottom: page_height - bounds.bottom().value as f64,
            });
        }

        pages.push((chars, images));
    }

    Ok(pages)
}

/// Primitive extractor backed by pdfium.
///
/// All pages are read eagerly at open time, so trait calls never touch the
/// file again.
pub struct PdfiumExtractor {
    pages: Vec<RawPage>,
}

impl PdfiumExtractor {
    pub fn open(path: &Path) -> Result<Self> {
        let pages = load_pages(path)?
            .into_iter()
            .map(|(chars, images)| RawPage {
                chars: chars
                    .iter()
                    .map(|c| Char {
                        text: c.ch.to_string(),
                        top: c.top,
                        size: c.height,
                    })
                    .collect(),
                images,
            })
            .collect();
        Ok(Self { pages })
    }
}

impl ContentExtractor for PdfiumExtractor {
    fn page_count(&mut self) -> Result<usize> {
        Ok(self.pages.len())
    }

    fn page_content(&mut self, page_index: usize) -> Result<RawPage> {
        self.pages
            .get(page_index)
            .cloned()
            .ok_or_else(|| ParseError::Extraction(format!("page {page_index} out of range")))
    }

    /// Pdfium exposes no table detection of its own, so the native
    /// fallback is always empty.
    fn page_tables(&mut self, _page_index: usize) -> Result<Vec<Grid>> {
        Ok(Vec::new())
    }
}

/// Stream-flavor secondary table engine over pdfium glyph geometry.
///
/// Opens the file on every call, matching the per-call shape of the
/// external engines it stands in for.
#[derive(Debug, Default)]
pub struct StreamTableEngine {
    settings: StreamSettings,
}

impl StreamTableEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: StreamSettings) -> Self {
        Self { settings }
    }
}

impl TableEngine for StreamTableEngine {
    fn read_tables(&self, path: &Path, page_number: usize, flavor: Flavor) -> Result<Vec<Grid>> {
        if flavor != Flavor::Stream {
            return Ok(Vec::new());
        }
        let raw = load_pages(path).map_err(|e| ParseError::Engine(e.to_string()))?;
        let Some((chars, _)) = raw.get(page_number - 1) else {
            return Err(ParseError::Engine(format!(
                "page {page_number} out of range"
            )));
        };
        Ok(detect_tables(&glyph_rows(chars), &self.settings))
    }
}

/// Group positioned glyphs into rows by rounded top coordinate, sorted top
/// to bottom with reading order within each row.
fn glyph_rows(chars: &[PositionedChar]) -> Vec<GlyphRow> {
    let mut sorted: Vec<&PositionedChar> = chars.iter().collect();
    sorted.sort_by(|a, b| {
        (a.top.round() as i64, a.x)
            .partial_cmp(&(b.top.round() as i64, b.x))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut rows = Vec::new();
    for (top, group) in &sorted.into_iter().chunk_by(|c| c.top.round() as i64) {
        rows.push(GlyphRow {
            top: top as f64,
            glyphs: group
                .map(|c| Glyph {
                    text: c.ch,
                    x: c.x,
                    width: c.width,
                })
                .collect(),
        });
    }
    rows
}
