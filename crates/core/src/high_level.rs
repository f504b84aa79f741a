//! High-level document reconstruction API.
//!
//! [`parse_with`] drives the whole pipeline for any extractor/engine pair;
//! [`parse_file`] wires in the pdfium backend and the built-in stream table
//! engine when the `pdfium` feature is enabled.

use std::path::Path;

use tracing::debug;

use crate::assemble::assemble_page;
use crate::charts::collect_charts;
use crate::error::{ParseError, Result};
use crate::layout::{RoleConfig, collect_paragraphs};
use crate::model::{ContentEntry, Document};
use crate::source::{ContentExtractor, Flavor, TableEngine};
use crate::table::TableResolver;

/// Options for document reconstruction.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Heading-size thresholds.
    pub roles: RoleConfig,
    /// Detection flavor requested from the secondary table engine.
    pub flavor: Flavor,
}

/// Reconstruct the structured document for `path` using the given
/// extractor and optional secondary table engine.
///
/// Fails with [`ParseError::InputNotFound`] before any page is read if
/// `path` does not exist. Extractor failures abort the parse; engine
/// failures only suppress that page's engine tables.
pub fn parse_with<E: ContentExtractor>(
    path: &Path,
    extractor: &mut E,
    engine: Option<&dyn TableEngine>,
    options: &ParseOptions,
) -> Result<Document> {
    if !path.exists() {
        return Err(ParseError::InputNotFound(path.to_path_buf()));
    }

    let resolver = TableResolver::new(engine, options.flavor);
    let page_count = extractor.page_count()?;
    let mut pages = Vec::with_capacity(page_count);

    for page_index in 0..page_count {
        let page_number = page_index + 1;
        let raw = extractor.page_content(page_index)?;

        let (paragraphs, context) = collect_paragraphs(&raw.chars, &options.roles);

        // Tables and charts join after the text pass, so both carry the
        // section context reached at the end of the page, wherever they
        // sit visually.
        let tables: Vec<ContentEntry> = resolver
            .resolve(path, page_number, extractor)?
            .into_iter()
            .map(|grid| ContentEntry::Table {
                section: context.section(),
                sub_section: context.sub_section(),
                table_data: grid,
                top: None,
            })
            .collect();
        let charts = collect_charts(&raw.images, page_number, &context);

        debug!(
            page = page_number,
            paragraphs = paragraphs.len(),
            tables = tables.len(),
            charts = charts.len(),
            "assembled page"
        );
        pages.push(assemble_page(page_number, paragraphs, tables, charts));
    }

    Ok(Document { pages })
}

/// Parse a PDF file with the pdfium extractor and the built-in stream
/// table engine.
#[cfg(feature = "pdfium")]
pub fn parse_file(path: &Path, options: &ParseOptions) -> Result<Document> {
    use crate::backend::StreamTableEngine;

    let engine = StreamTableEngine::new();
    parse_file_with_engine(path, Some(&engine), options)
}

/// Parse a PDF file with the pdfium extractor and a caller-chosen table
/// engine (or none).
#[cfg(feature = "pdfium")]
pub fn parse_file_with_engine(
    path: &Path,
    engine: Option<&dyn TableEngine>,
    options: &ParseOptions,
) -> Result<Document> {
    use crate::backend::PdfiumExtractor;

    if !path.exists() {
        return Err(ParseError::InputNotFound(path.to_path_buf()));
    }
    let mut extractor = PdfiumExtractor::open(path)?;
    parse_with(path, &mut extractor, engine, options)
}
