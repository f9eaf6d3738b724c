//! Item table segmentation.
//!
//! A single left-to-right scan groups the table slice's lines into row
//! blocks, driven by the line classifier. The scan is a small state machine:
//!
//! - `BeforeTable`: nothing recognized yet; stop lines here are column
//!   captions (a bare "Total Cost"), not the footer, and are skipped.
//! - `InTable`: a header line has been seen; still waiting for a row.
//! - `RowOpen`: at least one row has started; a stop line now ends the scan
//!   and non-row lines continue the open block.

use super::super::rules::lines::LineClass;

/// One logical table row: the row-start line plus its continuation lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowBlock {
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    BeforeTable,
    InTable,
    RowOpen,
}

/// Group the slice's lines into row blocks.
pub fn segment_rows(slice: &str) -> Vec<RowBlock> {
    let lines = slice
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty());

    let mut blocks = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut state = ScanState::BeforeTable;

    for line in lines {
        match LineClass::of(line) {
            LineClass::Stop => {
                if state == ScanState::RowOpen {
                    break;
                }
                // Caption noise above the table.
            }
            LineClass::HeaderLike => {
                if state == ScanState::BeforeTable {
                    state = ScanState::InTable;
                }
            }
            LineClass::RowStart => {
                if !current.is_empty() {
                    blocks.push(RowBlock {
                        lines: std::mem::take(&mut current),
                    });
                }
                current.push(line.to_string());
                state = ScanState::RowOpen;
            }
            LineClass::Other => {
                if state == ScanState::RowOpen {
                    current.push(line.to_string());
                }
                // Otherwise: noise above the table.
            }
        }
    }

    if !current.is_empty() {
        blocks.push(RowBlock { lines: current });
    }

    blocks
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn block(lines: &[&str]) -> RowBlock {
        RowBlock {
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_slice() {
        assert_eq!(segment_rows(""), Vec::new());
    }

    #[test]
    fn test_rows_with_continuations() {
        let slice = "Stock/ Property No. Unit Item Description\n\
                     1234567 PC BALLPOINT PEN\n\
                     BLACK, FINE POINT\n\
                     7654321 BOX STAPLES\n\
                     Total Cost: 1,500.00";
        assert_eq!(
            segment_rows(slice),
            vec![
                block(&["1234567 PC BALLPOINT PEN", "BLACK, FINE POINT"]),
                block(&["7654321 BOX STAPLES"]),
            ]
        );
    }

    #[test]
    fn test_stop_caption_before_first_row_is_skipped() {
        let slice = "Total Cost\n1234567 PC BALLPOINT PEN";
        assert_eq!(segment_rows(slice), vec![block(&["1234567 PC BALLPOINT PEN"])]);
    }

    #[test]
    fn test_stop_line_after_rows_terminates_scan() {
        let slice = "1234567 PC PEN\nPurpose: resale\n7654321 BOX STAPLES";
        assert_eq!(segment_rows(slice), vec![block(&["1234567 PC PEN"])]);
    }

    #[test]
    fn test_noise_above_table_is_dropped() {
        let slice = "random preamble\n1234567 PC PEN";
        assert_eq!(segment_rows(slice), vec![block(&["1234567 PC PEN"])]);
    }

    #[test]
    fn test_continuation_without_open_row_is_dropped() {
        // Header seen, but a continuation arrives before any row starts.
        let slice = "Item Description\nstray fragment\n1234567 PC PEN";
        assert_eq!(segment_rows(slice), vec![block(&["1234567 PC PEN"])]);
    }
}
