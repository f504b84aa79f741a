//! Concrete extractor backends.

#[cfg(feature = "pdfium")]
mod pdfium;

#[cfg(feature = "pdfium")]
pub use pdfium::{PdfiumExtractor, StreamTableEngine};
