//! The output document model: pages of typed content entries.
//!
//! A [`Document`] holds one [`Page`] per source page; each page holds an
//! ordered list of [`ContentEntry`] values tagged with the section context
//! they were produced under. The model serializes to the nested JSON shape
//! `{"pages": [{"page_number": .., "content": [..]}]}`.

mod json;

pub use json::{to_json_pretty, write_json};

use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};

/// One table cell.
pub type Cell = String;
/// One table row.
pub type Row = Vec<Cell>;
/// A raw table grid: rows of cell strings.
pub type Grid = Vec<Row>;

/// Bounding box in top-down page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub x0: f64,
    pub top: f64,
    pub x1: f64,
    pub bottom: f64,
}

// Serialized as [x0, top, x1, bottom], the shape downstream consumers read.
impl Serialize for BBox {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(4)?;
        tuple.serialize_element(&self.x0)?;
        tuple.serialize_element(&self.top)?;
        tuple.serialize_element(&self.x1)?;
        tuple.serialize_element(&self.bottom)?;
        tuple.end()
    }
}

/// A single piece of page content.
///
/// `section` and `sub_section` reflect the tracking context at the moment
/// the entry was produced: the emitting line's context for paragraphs, the
/// page-final context for tables and charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentEntry {
    Paragraph {
        section: Option<String>,
        sub_section: Option<String>,
        text: String,
        top: f64,
    },
    Table {
        section: Option<String>,
        sub_section: Option<String>,
        table_data: Grid,
        /// Tables carry no vertical position; they sort after positioned
        /// entries.
        top: Option<f64>,
    },
    Chart {
        section: Option<String>,
        sub_section: Option<String>,
        description: String,
        bbox: BBox,
        top: f64,
    },
}

impl ContentEntry {
    /// Vertical position used for page ordering, if any.
    pub fn top(&self) -> Option<f64> {
        match self {
            ContentEntry::Paragraph { top, .. } | ContentEntry::Chart { top, .. } => Some(*top),
            ContentEntry::Table { top, .. } => *top,
        }
    }
}

/// One source page, 1-based, with its content in final reading order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub page_number: usize,
    pub content: Vec<ContentEntry>,
}

/// The reconstructed document: one page per source page, in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub pages: Vec<Page>,
}
