//! Collaborator boundaries: the primitive content extractor and the
//! optional secondary table engine.

use std::path::Path;

use crate::error::Result;
use crate::model::Grid;

/// A positioned glyph produced by the content extractor.
#[derive(Debug, Clone, PartialEq)]
pub struct Char {
    pub text: String,
    /// Distance from the top of the page, in points.
    pub top: f64,
    /// Glyph size in points.
    pub size: f64,
}

/// Bounding box of an image placed on a page, in top-down coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageRegion {
    pub x0: f64,
    pub top: f64,
    pub x1: f64,
    pub bottom: f64,
}

/// Everything the reconstruction pass needs from one page.
///
/// Glyphs arrive in reading order within a line (left to right, lines top
/// to bottom), as the extractor emits them.
#[derive(Debug, Clone, Default)]
pub struct RawPage {
    pub chars: Vec<Char>,
    pub images: Vec<ImageRegion>,
}

/// Low-level PDF content extractor.
///
/// Failures from this trait abort the whole parse; there is no recovery
/// path for a page the primitive extractor cannot read.
pub trait ContentExtractor {
    fn page_count(&mut self) -> Result<usize>;

    /// Glyphs and image regions for the 0-based `page_index`.
    fn page_content(&mut self, page_index: usize) -> Result<RawPage>;

    /// The extractor's own table detection, used only when the secondary
    /// engine yields nothing for the page.
    fn page_tables(&mut self, page_index: usize) -> Result<Vec<Grid>>;
}

/// Detection flavor requested from the secondary table engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flavor {
    /// Whitespace/alignment based detection.
    #[default]
    Stream,
    /// Ruled-line based detection.
    Lattice,
}

/// Secondary high-fidelity table engine.
///
/// An optional collaborator: the table resolver treats both an absent
/// engine and a failing one as "no tables from the engine" and never
/// propagates its errors.
pub trait TableEngine {
    /// Extract raw table grids from the 1-based `page_number` of `path`.
    fn read_tables(&self, path: &Path, page_number: usize, flavor: Flavor) -> Result<Vec<Grid>>;
}
