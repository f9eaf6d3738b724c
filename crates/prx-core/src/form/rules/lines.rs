//! Line classification predicates for the item table scan.
//!
//! All predicates are stateless and operate on a single trimmed line. They
//! are not mutually exclusive; the segmenter applies them in priority order
//! (stop, header, row start).

use super::patterns::{
    DIGITS_1_10, HEADER_LIKE, ROW_START, SHORT_ALNUM_CODE, SHORT_ALPHA, STOP_LINE, UNIT_WORDS,
};

/// How a single line participates in the table scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Footer/signature marker that ends the table.
    Stop,
    /// Column caption line.
    HeaderLike,
    /// Line opening a new item row (leading 7-10 digit code).
    RowStart,
    /// Anything else; a continuation when a row is open.
    Other,
}

impl LineClass {
    /// Classify a line, applying the predicates in the segmenter's
    /// priority order.
    pub fn of(line: &str) -> Self {
        if is_table_stop_line(line) {
            LineClass::Stop
        } else if is_header_like_table_line(line) {
            LineClass::HeaderLike
        } else if is_item_row_start_line(line) {
            LineClass::RowStart
        } else {
            LineClass::Other
        }
    }
}

/// True for footer/signature anchors that terminate the item table.
pub fn is_table_stop_line(line: &str) -> bool {
    let line = line.trim();
    if line.is_empty() {
        return false;
    }

    STOP_LINE.is_match(line)
}

/// True when the line carries column captions ("Stock/ Property No.",
/// "Item Description", "Unit Cost", ...).
pub fn is_header_like_table_line(line: &str) -> bool {
    HEADER_LIKE.is_match(line)
}

/// True when the line opens an item row: a leading 7-10 digit code whose
/// remainder is empty or contains words. A bare numeric triplet after the
/// code is a stray table total, not a row.
pub fn is_item_row_start_line(line: &str) -> bool {
    let line = line.trim();
    let Some(caps) = ROW_START.captures(line) else {
        return false;
    };

    match caps.get(2) {
        None => true,
        Some(rest) => {
            let rest = rest.as_str().trim();
            rest.is_empty() || rest.chars().any(|c| c.is_ascii_alphabetic())
        }
    }
}

/// True for tokens that plausibly fill the unit-of-measure column: the
/// closed unit vocabulary, purely numeric tokens, short alphabetic tokens,
/// or short alphanumeric codes containing a digit.
pub fn is_likely_unit_token(token: &str) -> bool {
    let token = token.trim().to_lowercase();
    if token.is_empty() {
        return false;
    }

    if UNIT_WORDS.contains(&token.as_str()) {
        return true;
    }

    if DIGITS_1_10.is_match(&token) {
        return true;
    }

    if SHORT_ALPHA.is_match(&token) {
        return true;
    }

    SHORT_ALNUM_CODE.is_match(&token) && token.chars().any(|c| c.is_ascii_digit())
}
