//! Two-column splitter for the signature block.
//!
//! The form prints the requesting and approving officers side by side;
//! extraction flattens that into one or more lines. Splitting is an ordered
//! chain of strategies, each lossier than the last, and the first one that
//! produces a split wins:
//!
//! 1. wide gap - a run of two or more spaces left over from the columns
//!    (tested against the raw lines, before whitespace collapse);
//! 2. line order - first non-empty line vs. the remaining lines;
//! 3. capitalization change - an all-caps name followed by a mixed-case one;
//! 4. token midpoint - split the tokens of a single line in half.

use super::patterns::{CASE_SPLIT, WIDE_GAP};
use super::value::clean_value;

/// Left/right column values; either side may still come up empty.
pub type ColumnSplit = (Option<String>, Option<String>);

type Strategy = fn(&[&str]) -> Option<ColumnSplit>;

/// Split the signature-block lines into (requested-by, approved-by).
/// `raw_lines` must preserve inner spacing; the strategies collapse it
/// themselves where appropriate.
pub fn split_two_columns(raw_lines: &[&str]) -> ColumnSplit {
    const STRATEGIES: [Strategy; 4] = [by_wide_gap, by_line_order, by_case_change, by_midpoint];

    for strategy in STRATEGIES {
        if let Some(split) = strategy(raw_lines) {
            return split;
        }
    }

    (None, None)
}

/// Split a designation line into (designation1, designation2). Designations
/// come from a single-line capture, so only the wide-gap and midpoint
/// strategies apply.
pub fn split_designation(raw_line: &str) -> ColumnSplit {
    if let Some(caps) = WIDE_GAP.captures(raw_line.trim()) {
        return (clean_value(&caps[1]), clean_value(&caps[2]));
    }

    match clean_value(raw_line) {
        Some(line) => midpoint_split(&line),
        None => (None, None),
    }
}

fn cleaned_lines(raw_lines: &[&str]) -> Vec<String> {
    raw_lines.iter().filter_map(|line| clean_value(line)).collect()
}

fn by_wide_gap(raw_lines: &[&str]) -> Option<ColumnSplit> {
    let mut left_parts = Vec::new();
    let mut right_parts = Vec::new();

    for line in raw_lines {
        if let Some(caps) = WIDE_GAP.captures(line) {
            if let Some(left) = clean_value(&caps[1]) {
                left_parts.push(left);
            }
            if let Some(right) = clean_value(&caps[2]) {
                right_parts.push(right);
            }
        }
    }

    if left_parts.is_empty() || right_parts.is_empty() {
        return None;
    }

    Some((
        clean_value(&left_parts.join(" ")),
        clean_value(&right_parts.join(" ")),
    ))
}

fn by_line_order(raw_lines: &[&str]) -> Option<ColumnSplit> {
    let lines = cleaned_lines(raw_lines);
    if lines.len() < 2 {
        return None;
    }

    Some((
        Some(lines[0].clone()),
        clean_value(&lines[1..].join(" ")),
    ))
}

fn by_case_change(raw_lines: &[&str]) -> Option<ColumnSplit> {
    let lines = cleaned_lines(raw_lines);
    if lines.len() != 1 {
        return None;
    }

    let caps = CASE_SPLIT.captures(&lines[0])?;
    Some((clean_value(&caps[1]), clean_value(&caps[2])))
}

fn by_midpoint(raw_lines: &[&str]) -> Option<ColumnSplit> {
    let lines = cleaned_lines(raw_lines);
    if lines.len() != 1 {
        return None;
    }

    Some(midpoint_split(&lines[0]))
}

fn midpoint_split(line: &str) -> ColumnSplit {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let mid = tokens.len() / 2;
    (
        clean_value(&tokens[..mid].join(" ")),
        clean_value(&tokens[mid..].join(" ")),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_wide_gap_wins() {
        let lines = ["JUAN DELA CRUZ        MARIA SANTOS"];
        assert_eq!(
            split_two_columns(&lines),
            (
                Some("JUAN DELA CRUZ".to_string()),
                Some("MARIA SANTOS".to_string())
            )
        );
    }

    #[test]
    fn test_wide_gap_joins_wrapped_lines() {
        let lines = [
            "JUAN DELA  MARIA",
            "CRUZ  SANTOS",
        ];
        assert_eq!(
            split_two_columns(&lines),
            (
                Some("JUAN DELA CRUZ".to_string()),
                Some("MARIA SANTOS".to_string())
            )
        );
    }

    #[test]
    fn test_line_order_fallback() {
        let lines = ["JUAN DELA CRUZ", "MARIA", "SANTOS"];
        assert_eq!(
            split_two_columns(&lines),
            (
                Some("JUAN DELA CRUZ".to_string()),
                Some("MARIA SANTOS".to_string())
            )
        );
    }

    #[test]
    fn test_case_change_fallback() {
        let lines = ["JUAN DELA CRUZ Maria Santos"];
        assert_eq!(
            split_two_columns(&lines),
            (
                Some("JUAN DELA CRUZ".to_string()),
                Some("Maria Santos".to_string())
            )
        );
    }

    #[test]
    fn test_midpoint_fallback() {
        let lines = ["JUAN CRUZ MARIA SANTOS"];
        assert_eq!(
            split_two_columns(&lines),
            (
                Some("JUAN CRUZ".to_string()),
                Some("MARIA SANTOS".to_string())
            )
        );
    }

    #[test]
    fn test_single_token_midpoint_leaves_left_empty() {
        let lines = ["SANTOS"];
        assert_eq!(split_two_columns(&lines), (None, Some("SANTOS".to_string())));
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(split_two_columns(&[]), (None, None));
    }

    #[test]
    fn test_designation_wide_gap() {
        assert_eq!(
            split_designation("Admin Officer II    Municipal Mayor"),
            (
                Some("Admin Officer II".to_string()),
                Some("Municipal Mayor".to_string())
            )
        );
    }

    #[test]
    fn test_designation_midpoint() {
        assert_eq!(
            split_designation("Admin Officer Municipal Mayor"),
            (
                Some("Admin Officer".to_string()),
                Some("Municipal Mayor".to_string())
            )
        );
    }
}
