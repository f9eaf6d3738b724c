//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Main configuration for the prx pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrxConfig {
    /// PDF text acquisition configuration.
    pub pdf: PdfConfig,

    /// Form parsing configuration.
    pub parse: ParseConfig,
}

impl Default for PrxConfig {
    fn default() -> Self {
        Self {
            pdf: PdfConfig::default(),
            parse: ParseConfig::default(),
        }
    }
}

impl PrxConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// PDF text acquisition configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Minimum trimmed text length for an extraction pass to be accepted
    /// before the next fallback runs.
    pub min_text_len: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self { min_text_len: 80 }
    }
}

/// Form parsing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Repair rows whose stock/unit columns slid during extraction.
    pub realign_columns: bool,

    /// Recover a quantity flattened into the end of the description.
    pub recover_trailing_quantity: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            realign_columns: true,
            recover_trailing_quantity: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PrxConfig::default();
        assert_eq!(config.pdf.min_text_len, 80);
        assert!(config.parse.realign_columns);
        assert!(config.parse.recover_trailing_quantity);
    }

    #[test]
    fn test_partial_config_round_trip() {
        let config: PrxConfig = serde_json::from_str(r#"{"pdf":{"min_text_len":120}}"#).unwrap();
        assert_eq!(config.pdf.min_text_len, 120);
        assert!(config.parse.realign_columns);

        let json = serde_json::to_string(&config).unwrap();
        let back: PrxConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.pdf.min_text_len, 120);
    }
}
