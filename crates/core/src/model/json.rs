//! JSON output for the document model.

use std::io::Write;

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use super::Document;
use crate::error::{ParseError, Result};

/// Serialize a document into `writer` as UTF-8 JSON with 4-space
/// indentation. Non-ASCII text is written as-is, not escaped.
pub fn write_json<W: Write>(document: &Document, writer: W) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(writer, formatter);
    document.serialize(&mut ser)?;
    Ok(())
}

/// Serialize a document to a JSON string with 4-space indentation.
pub fn to_json_pretty(document: &Document) -> Result<String> {
    let mut buf = Vec::new();
    write_json(document, &mut buf)?;
    String::from_utf8(buf).map_err(|e| ParseError::Decode(e.to_string()))
}
