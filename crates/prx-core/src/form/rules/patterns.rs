//! Common regex patterns for purchase request extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Line classification
    //
    // Stop only on true footer labels, not description fragments like
    // "PURPOSE, 200 GRAMS" that can appear inside item rows.
    pub static ref STOP_LINE: Regex = Regex::new(
        r"(?i)^(?:total(?:\s+cost)?|purpose\s*:|requested\s+by\s*:|signature\s*:|printed\s*name\s*:|designation\s*:|see\s+back\b|effectivity\b)"
    ).unwrap();

    pub static ref HEADER_LIKE: Regex = Regex::new(
        r"(?i)(?:stock/|property|item\s*description|quantity|unit\s*cost|total\s*cost|\bno\.)"
    ).unwrap();

    pub static ref ROW_START: Regex = Regex::new(
        r"^(\d{7,10})(?:\s+(.*))?$"
    ).unwrap();

    // Numeric token shapes
    pub static ref NUMERIC_TOKEN: Regex = Regex::new(
        r"^\d[\d,]*(?:\.\d+)?$"
    ).unwrap();

    // "qty unit_cost total_cost" lines carrying two or three numbers.
    pub static ref NUMERIC_TUPLE_LINE: Regex = Regex::new(
        r"^\d[\d,]*(?:\.\d+)?(?:\s+\d[\d,]*(?:\.\d+)?){1,2}$"
    ).unwrap();

    pub static ref NUMBER: Regex = Regex::new(
        r"\d[\d,]*(?:\.\d+)?"
    ).unwrap();

    // Token shapes used by the left-column split and the unit classifier
    pub static ref LEADING_CODE: Regex = Regex::new(r"^\d{4,}$").unwrap();
    pub static ref NUMERIC_UNIT: Regex = Regex::new(r"^\d{2,}$").unwrap();
    pub static ref STOCK_CODE: Regex = Regex::new(r"^\d{7,10}$").unwrap();
    pub static ref DIGITS_1_10: Regex = Regex::new(r"^\d{1,10}$").unwrap();
    pub static ref SHORT_ALPHA: Regex = Regex::new(r"^[a-z]{1,4}$").unwrap();
    pub static ref SHORT_ALNUM_CODE: Regex = Regex::new(r"(?i)^[a-z0-9\-/]{1,8}$").unwrap();

    // Document-level field anchors
    pub static ref FUND_CLUSTER_BOUNDED: Regex = Regex::new(
        r"(?is)fund\s*cluster\s*:?\s*\n?(.+?)(?:\n\s*(?:office/section|pr\s*no\.?|responsibility\s*center\s*code))"
    ).unwrap();

    pub static ref FUND_CLUSTER_LOOSE: Regex = Regex::new(
        r"(?i)fund\s*cluster\s*:?\s*(.+)"
    ).unwrap();

    pub static ref PR_NO: Regex = Regex::new(
        r"(?i)pr\s*no\.?\s*:?\s*([a-z0-9\-/]+)"
    ).unwrap();

    pub static ref RESPONSIBILITY_CENTER: Regex = Regex::new(
        r"(?i)responsibility\s*center\s*code\s*:?\s*([a-z0-9\-/_ ]*)"
    ).unwrap();

    // A capture that grabbed table-header vocabulary is a miss.
    pub static ref TABLE_VOCABULARY: Regex = Regex::new(
        r"(?i)\b(?:stock|property|unit|item)\b"
    ).unwrap();

    // "06-Mar-24" and "06/03/2024" style request dates.
    pub static ref REQUEST_DATE: Regex = Regex::new(
        r"(?i)date\s*:?\s*([0-9]{1,2}[-/][a-z]{3}[-/][0-9]{2,4}|[0-9]{1,2}[-/][0-9]{1,2}[-/][0-9]{2,4})"
    ).unwrap();

    // Signature block anchors
    pub static ref PRINTED_NAME_BLOCK: Regex = Regex::new(
        r"(?is)printed\s*name\s*:\s*(.*?)(?:\n\s*designation\s*:|$)"
    ).unwrap();

    pub static ref DESIGNATION_LINE: Regex = Regex::new(
        r"(?i)designation\s*:\s*(.+)"
    ).unwrap();

    // Two print columns flattened into one line keep a wide gap between them.
    pub static ref WIDE_GAP: Regex = Regex::new(
        r"^(.+?)\s{2,}(.+)$"
    ).unwrap();

    // "JUAN DELA CRUZ Maria Santos" - all-caps name followed by mixed case.
    pub static ref CASE_SPLIT: Regex = Regex::new(
        r"^([A-Z\s\.]+)\s+([A-Z][a-z].+)$"
    ).unwrap();

    // Item table region: everything between the responsibility center label
    // and the purpose/signature footer.
    pub static ref TABLE_SLICE: Regex = Regex::new(
        r"(?is)responsibility\s*center\s*code\s*:?(.*?)(?:purpose\s*:|requested\s*by\s*:)"
    ).unwrap();

    // Total cost labels: the words may be split across lines by extraction.
    pub static ref TOTAL_COST_SPLIT: Regex = Regex::new(
        r"(?i)(?:^|\n)\s*total\s*\n\s*cost\s*:?\s*([0-9,]+(?:\.\d{2})?)"
    ).unwrap();

    pub static ref TOTAL_COST_INLINE: Regex = Regex::new(
        r"(?i)(?:^|\n)\s*total\s*cost\s*:?\s*([0-9,]+(?:\.\d{2})?)"
    ).unwrap();

    // "DESCRIPTION 100" - quantity flattened into the description column.
    pub static ref TRAILING_QUANTITY: Regex = Regex::new(
        r"^(.*\D)\s+(\d[\d,]*(?:\.\d+)?)$"
    ).unwrap();
}

/// Closed vocabulary of common units of measure. Used both by the unit-token
/// classifier and, as the strict form, by the column realignment pass.
pub const UNIT_WORDS: &[&str] = &[
    "pc", "pcs", "piece", "pieces", "set", "lot", "box", "roll", "ream",
    "bottle", "btl", "pack", "pkg", "unit", "kg", "g", "l", "ltr", "meter",
    "m", "cm", "dozen",
];
