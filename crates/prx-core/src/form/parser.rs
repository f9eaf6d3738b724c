//! Purchase request parser combining anchored field extraction, table
//! segmentation, and total reconciliation.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::config::PrxConfig;
use crate::models::record::ParsedRecord;

use super::rules::{extract_document_fields, normalize_newlines, totals};
use super::table;

/// Result of parsing one document.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// Extracted record; all-null with no items for unusable input.
    pub record: ParsedRecord,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for purchase request parsing.
pub trait FormParser {
    /// Parse a record from extracted document text. Never fails: anything
    /// that cannot be recovered is null in the output.
    fn parse(&self, text: &str) -> ParseOutcome;
}

/// Heuristic parser for one-page purchase request forms.
pub struct PurchaseRequestParser {
    /// Whether to repair slid stock/unit columns after parsing.
    realign_columns: bool,
    /// Whether to recover quantities flattened into descriptions.
    recover_trailing_quantity: bool,
}

impl PurchaseRequestParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            realign_columns: true,
            recover_trailing_quantity: true,
        }
    }

    /// Set column realignment.
    pub fn with_column_realignment(mut self, enabled: bool) -> Self {
        self.realign_columns = enabled;
        self
    }

    /// Set trailing-quantity recovery.
    pub fn with_trailing_quantity_recovery(mut self, enabled: bool) -> Self {
        self.recover_trailing_quantity = enabled;
        self
    }

    /// Build a parser from configuration.
    pub fn from_config(config: &PrxConfig) -> Self {
        Self::new()
            .with_column_realignment(config.parse.realign_columns)
            .with_trailing_quantity_recovery(config.parse.recover_trailing_quantity)
    }
}

impl Default for PurchaseRequestParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FormParser for PurchaseRequestParser {
    fn parse(&self, text: &str) -> ParseOutcome {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!("parsing purchase request from {} characters of text", text.len());

        let normalized = normalize_newlines(text);
        let fields = extract_document_fields(&normalized);

        if fields.pr_no.is_none() {
            warnings.push("could not extract PR number".to_string());
        }
        if fields.table_slice.is_empty() {
            warnings.push("no item table region found".to_string());
        }

        let mut items = table::extract_items(&fields.table_slice);
        if self.realign_columns {
            table::realign_stock_unit_columns(&mut items);
        }
        if self.recover_trailing_quantity {
            table::recover_trailing_quantity(&mut items);
        }

        let mut total_cost = totals::labeled_total_cost(&normalized);
        if total_cost.is_none() {
            total_cost = totals::sum_item_totals(&items);
        }
        totals::backfill_single_item(&mut items, total_cost);

        if items.is_empty() {
            warnings.push("no line items recovered".to_string());
        }
        if total_cost.is_none() {
            warnings.push("could not resolve total cost".to_string());
        }

        let mut record = ParsedRecord::from_items(items, total_cost);
        record.fund_cluster = fields.fund_cluster;
        record.pr_no = fields.pr_no;
        record.responsibility_center_code = fields.responsibility_center_code;
        record.request_date = fields.request_date;
        record.requested_by = fields.requested_by;
        record.designation1 = fields.designation1;
        record.approved_by = fields.approved_by;
        record.designation2 = fields.designation2;

        debug!(
            "extracted {} item(s), pr_no {:?}, total cost {:?}",
            record.items.len(),
            record.pr_no,
            record.total_cost
        );

        ParseOutcome {
            record,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}
