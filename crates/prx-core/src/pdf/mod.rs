//! PDF text acquisition.
//!
//! The parsing engine only consumes text; this module produces the
//! best-available text for a PDF through a sequential fallback chain with a
//! length-based acceptance threshold.

mod extractor;

pub use extractor::PdfExtractor;

use crate::error::PdfError;

/// Which extraction pass produced the accepted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    /// Primary layout-preserving extraction.
    Layout,
    /// Secondary raw content-stream extraction.
    Raw,
    /// Neither pass produced any text.
    Empty,
}

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF text acquisition implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text with the primary layout-preserving pass.
    fn extract_text(&self) -> Result<String>;

    /// Extract text with the secondary raw content-stream pass.
    fn extract_text_raw(&self) -> Result<String>;

    /// Run the acquisition chain: the primary pass is accepted when its
    /// trimmed length exceeds `min_len`, else the secondary pass runs under
    /// the same threshold, else whichever pass produced any text wins.
    /// Extraction failures degrade to the next link; the result may be
    /// empty, which is valid parser input.
    fn acquire_text(&self, min_len: usize) -> (String, TextSource) {
        let primary = self.extract_text().unwrap_or_default();
        if primary.trim().len() > min_len {
            return (primary, TextSource::Layout);
        }

        let secondary = self.extract_text_raw().unwrap_or_default();
        if secondary.trim().len() > min_len {
            return (secondary, TextSource::Raw);
        }

        if !primary.trim().is_empty() {
            (primary, TextSource::Layout)
        } else if !secondary.trim().is_empty() {
            (secondary, TextSource::Raw)
        } else {
            (String::new(), TextSource::Empty)
        }
    }
}
