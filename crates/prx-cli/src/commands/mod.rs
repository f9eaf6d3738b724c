//! CLI subcommands.

pub mod batch;
pub mod process;

use std::path::Path;

use anyhow::Context;
use tracing::debug;

use prx_core::{
    FormParser, ParseOutcome, PdfExtractor, PdfProcessor, PrxConfig, PurchaseRequestParser,
    TextSource,
};

/// Load configuration from an optional path, defaulting otherwise.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<PrxConfig> {
    match config_path {
        Some(path) => PrxConfig::from_file(Path::new(path))
            .with_context(|| format!("failed to load config from {}", path)),
        None => Ok(PrxConfig::default()),
    }
}

/// Acquire text from an input file and parse it into a record.
///
/// PDFs run through the acquisition chain; any other file is read as
/// (lossy) UTF-8 text.
pub fn extract_file(input: &Path, config: &PrxConfig) -> anyhow::Result<ParseOutcome> {
    let extension = input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let text = if extension == "pdf" {
        let data = std::fs::read(input)
            .with_context(|| format!("failed to read {}", input.display()))?;
        let mut extractor = PdfExtractor::new();
        extractor.load(&data)?;

        let (text, source) = extractor.acquire_text(config.pdf.min_text_len);
        debug!("acquired {} chars via {:?}", text.len(), source);
        if source == TextSource::Empty {
            tracing::warn!("no text could be acquired from {}", input.display());
        }
        text
    } else {
        let data = std::fs::read(input)
            .with_context(|| format!("failed to read {}", input.display()))?;
        String::from_utf8_lossy(&data).into_owned()
    };

    let parser = PurchaseRequestParser::from_config(config);
    Ok(parser.parse(&text))
}
