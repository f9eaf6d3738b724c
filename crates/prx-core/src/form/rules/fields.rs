//! Anchored extraction of document-level fields.
//!
//! Fields are located by their printed labels in the normalized text; the
//! item table region is handed off as a raw slice for the segmenter.

use super::names;
use super::patterns::{
    DESIGNATION_LINE, FUND_CLUSTER_BOUNDED, FUND_CLUSTER_LOOSE, PRINTED_NAME_BLOCK, PR_NO,
    REQUEST_DATE, RESPONSIBILITY_CENTER, TABLE_SLICE, TABLE_VOCABULARY,
};
use super::value::clean_value;

/// Document-level fields plus the raw item-table slice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentFields {
    pub fund_cluster: Option<String>,
    pub pr_no: Option<String>,
    pub responsibility_center_code: Option<String>,
    pub request_date: Option<String>,
    pub requested_by: Option<String>,
    pub designation1: Option<String>,
    pub approved_by: Option<String>,
    pub designation2: Option<String>,
    /// Raw text between the responsibility-center label and the
    /// purpose/signature footer; empty when the anchors are missing.
    pub table_slice: String,
}

/// Normalize line endings to `\n`.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Extract all document-level fields from newline-normalized text.
pub fn extract_document_fields(normalized: &str) -> DocumentFields {
    let (requested_by, approved_by) = extract_signatories(normalized);
    let (designation1, designation2) = extract_designations(normalized);

    DocumentFields {
        fund_cluster: extract_fund_cluster(normalized),
        pr_no: PR_NO
            .captures(normalized)
            .and_then(|caps| clean_value(&caps[1])),
        responsibility_center_code: extract_responsibility_center(normalized),
        request_date: REQUEST_DATE
            .captures(normalized)
            .and_then(|caps| clean_value(&caps[1])),
        requested_by,
        designation1,
        approved_by,
        designation2,
        table_slice: TABLE_SLICE
            .captures(normalized)
            .map(|caps| caps[1].trim().to_string())
            .unwrap_or_default(),
    }
}

/// Fund cluster: first a capture bounded by the next labeled field, then a
/// loose single-line capture. First non-null result wins.
fn extract_fund_cluster(text: &str) -> Option<String> {
    let strategies: [fn(&str) -> Option<String>; 2] = [
        |t| {
            FUND_CLUSTER_BOUNDED
                .captures(t)
                .and_then(|caps| clean_value(&caps[1]))
        },
        |t| {
            FUND_CLUSTER_LOOSE
                .captures(t)
                .and_then(|caps| clean_value(&caps[1]))
        },
    ];

    strategies.iter().find_map(|strategy| strategy(text))
}

/// Responsibility center code, rejected when the capture ran into the table
/// header vocabulary instead of a real code.
fn extract_responsibility_center(text: &str) -> Option<String> {
    let code = RESPONSIBILITY_CENTER
        .captures(text)
        .and_then(|caps| clean_value(&caps[1]))?;

    if TABLE_VOCABULARY.is_match(&code) {
        return None;
    }

    Some(code)
}

/// Split the "Printed Name:" block into (requested-by, approved-by).
fn extract_signatories(text: &str) -> (Option<String>, Option<String>) {
    let Some(caps) = PRINTED_NAME_BLOCK.captures(text) else {
        return (None, None);
    };

    let block = caps[1].trim();
    let raw_lines: Vec<&str> = block
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    names::split_two_columns(&raw_lines)
}

/// Split the "Designation:" line into (designation1, designation2).
fn extract_designations(text: &str) -> (Option<String>, Option<String>) {
    let Some(caps) = DESIGNATION_LINE.captures(text) else {
        return (None, None);
    };

    names::split_designation(&caps[1])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_fund_cluster_bounded_by_next_label() {
        let text = "Fund Cluster: 01 - Regular Agency Fund\nPR No.: 24-03-0151";
        let fields = extract_document_fields(text);
        assert_eq!(
            fields.fund_cluster,
            Some("01 - Regular Agency Fund".to_string())
        );
        assert_eq!(fields.pr_no, Some("24-03-0151".to_string()));
    }

    #[test]
    fn test_fund_cluster_loose_fallback() {
        let fields = extract_document_fields("Fund Cluster: 06\nsome unrelated tail");
        assert_eq!(fields.fund_cluster, Some("06".to_string()));
    }

    #[test]
    fn test_responsibility_center_code() {
        let fields = extract_document_fields("Responsibility Center Code: MO-2024-001\n");
        assert_eq!(
            fields.responsibility_center_code,
            Some("MO-2024-001".to_string())
        );
    }

    #[test]
    fn test_responsibility_center_rejects_header_vocabulary() {
        let fields =
            extract_document_fields("Responsibility Center Code: Stock Property Unit\n");
        assert_eq!(fields.responsibility_center_code, None);
    }

    #[test]
    fn test_request_date_forms() {
        let fields = extract_document_fields("Date: 06-Mar-24\n");
        assert_eq!(fields.request_date, Some("06-Mar-24".to_string()));

        let fields = extract_document_fields("Date: 06/03/2024\n");
        assert_eq!(fields.request_date, Some("06/03/2024".to_string()));

        let fields = extract_document_fields("Date: sometime in March\n");
        assert_eq!(fields.request_date, None);
    }

    #[test]
    fn test_signature_block_two_columns() {
        let text = "Printed Name:  JUAN DELA CRUZ      MARIA SANTOS\nDesignation: Admin Officer II    Municipal Mayor\n";
        let fields = extract_document_fields(text);
        assert_eq!(fields.requested_by, Some("JUAN DELA CRUZ".to_string()));
        assert_eq!(fields.approved_by, Some("MARIA SANTOS".to_string()));
        assert_eq!(fields.designation1, Some("Admin Officer II".to_string()));
        assert_eq!(fields.designation2, Some("Municipal Mayor".to_string()));
    }

    #[test]
    fn test_signature_block_stacked_lines() {
        let text = "Printed Name:\nJUAN DELA CRUZ\nMARIA SANTOS\nDesignation: Clerk Mayor\n";
        let fields = extract_document_fields(text);
        assert_eq!(fields.requested_by, Some("JUAN DELA CRUZ".to_string()));
        assert_eq!(fields.approved_by, Some("MARIA SANTOS".to_string()));
        assert_eq!(fields.designation1, Some("Clerk".to_string()));
        assert_eq!(fields.designation2, Some("Mayor".to_string()));
    }

    #[test]
    fn test_table_slice_between_anchors() {
        let text = "Responsibility Center Code:\nHEADER\n1234567 PC THING 1 2.00 2.00\nPurpose: testing\n";
        let fields = extract_document_fields(text);
        assert!(fields.table_slice.contains("1234567 PC THING"));
        assert!(!fields.table_slice.contains("Purpose"));
    }

    #[test]
    fn test_missing_anchors_yield_empty_fields() {
        let fields = extract_document_fields("completely unrelated text");
        assert_eq!(fields, DocumentFields::default());
    }
}
