//! Core library for purchase request extraction.
//!
//! This crate provides:
//! - PDF text acquisition with a layout-then-raw fallback chain
//! - Heuristic parsing of one-page purchase request forms: document-level
//!   fields, line-item table segmentation, and total reconciliation
//! - Serde data models for the parsed record
//!
//! The parser consumes a single text blob and always returns a record;
//! unrecoverable fields are null and an empty item list is valid output.

pub mod error;
pub mod form;
pub mod models;
pub mod pdf;

pub use error::{ConfigError, PdfError, PrxError, Result};
pub use form::{FormParser, ParseOutcome, PurchaseRequestParser};
pub use models::config::PrxConfig;
pub use models::record::{Item, ParsedRecord};
pub use pdf::{PdfExtractor, PdfProcessor, TextSource};
