//! Rule-based extraction building blocks: normalization, line
//! classification, label-anchored field extraction, and total
//! reconciliation.

pub mod fields;
pub mod lines;
pub mod names;
pub mod patterns;
pub mod totals;
pub mod value;

pub use fields::{extract_document_fields, normalize_newlines, DocumentFields};
pub use lines::{
    is_header_like_table_line, is_item_row_start_line, is_likely_unit_token, is_table_stop_line,
    LineClass,
};
pub use names::{split_designation, split_two_columns};
pub use totals::{backfill_single_item, labeled_total_cost, sum_item_totals};
pub use value::{clean_value, parse_float, parse_money, round2};
