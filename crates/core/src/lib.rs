//! estrato - structured document reconstruction from PDF content.
//!
//! Rebuilds a hierarchical document model (pages of paragraphs, tables and
//! charts, each tagged with the section headings it falls under) from the
//! positioned glyphs, image regions and raw table grids produced by a PDF
//! content extractor.

pub mod assemble;
pub mod backend;
pub mod charts;
pub mod error;
pub mod high_level;
pub mod layout;
pub mod model;
pub mod source;
pub mod table;

pub use error::{ParseError, Result};
pub use high_level::{ParseOptions, parse_with};
pub use model::{ContentEntry, Document, Page};

#[cfg(feature = "pdfium")]
pub use high_level::{parse_file, parse_file_with_engine};
