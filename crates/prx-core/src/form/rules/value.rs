//! Token and value normalization.
//!
//! Every free-text comparison and every numeric field goes through these
//! helpers. Absence of a usable value is always `None`, never zero or an
//! empty string.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Collapse whitespace runs (including newlines) to single spaces and trim.
/// Returns `None` when nothing remains.
pub fn clean_value(value: &str) -> Option<String> {
    let collapsed = WHITESPACE_RUN.replace_all(value, " ");
    let trimmed = collapsed.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a currency-formatted value, tolerating thousands separators and
/// stray symbols. `None` when no valid number remains after stripping.
pub fn parse_money(value: &str) -> Option<f64> {
    let normalized: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    if normalized.is_empty() {
        return None;
    }

    normalized.parse::<f64>().ok()
}

/// Parse a plain numeric value. Identical to [`parse_money`]; the two names
/// exist for call-site clarity.
pub fn parse_float(value: &str) -> Option<f64> {
    parse_money(value)
}

/// Round to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
