//! Item table extraction: segmentation, row parsing, corrective passes.

pub mod normalize;
pub mod row;
pub mod segment;

pub use normalize::{realign_stock_unit_columns, recover_trailing_quantity};
pub use row::{parse_item_base_line, parse_row_block};
pub use segment::{segment_rows, RowBlock};

use crate::models::record::Item;

/// Parse the table slice into items: segment into row blocks, parse each
/// block, and drop rows that came out entirely empty.
pub fn extract_items(slice: &str) -> Vec<Item> {
    if slice.is_empty() {
        return Vec::new();
    }

    let mut items: Vec<Item> = segment_rows(slice)
        .iter()
        .filter_map(parse_row_block)
        .filter(|item| !item.is_empty())
        .collect();

    // Safety net against a spurious trailing block.
    if items.last().map_or(false, Item::is_empty) {
        items.pop();
    }

    items
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_extract_items_end_to_end() {
        let slice = "Stock/ Property No. Unit Item Description Quantity Unit Cost Total Cost\n\
                     1234567 PC BALLPOINT PEN BLACK 10 15.00 150.00\n\
                     7654321 BOX STAPLE WIRE 5 250.00 1250.00";
        let items = extract_items(slice);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].item_description, Some("BALLPOINT PEN BLACK".to_string()));
        assert_eq!(items[1].total_cost, Some(1250.0));
    }

    #[test]
    fn test_extract_items_empty_slice() {
        assert_eq!(extract_items(""), Vec::new());
    }

    #[test]
    fn test_bare_stock_code_row_survives() {
        let slice = "Item Description\n1234567\nTotal Cost";
        let items = extract_items(slice);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].stock_property_no, Some("1234567".to_string()));
        assert_eq!(items[0].item_description, None);
    }
}
