//! Document total reconciliation.
//!
//! "Total Cost" appears several times on the form: as a column caption, and
//! again in the footer with the authoritative amount. Labels earlier in the
//! text are captions, so the last labeled occurrence wins. When no labeled
//! occurrence carries a number, the item totals are summed instead.

use crate::models::record::Item;

use super::patterns::{TOTAL_COST_INLINE, TOTAL_COST_SPLIT};
use super::value::{parse_money, round2};

/// Resolve the labeled document total: every "Total\nCost" and "Total Cost"
/// occurrence is collected (in that order) and the last candidate wins.
pub fn labeled_total_cost(text: &str) -> Option<f64> {
    let mut candidates = Vec::new();

    for caps in TOTAL_COST_SPLIT.captures_iter(text) {
        if let Some(amount) = parse_money(&caps[1]) {
            candidates.push(amount);
        }
    }

    for caps in TOTAL_COST_INLINE.captures_iter(text) {
        if let Some(amount) = parse_money(&caps[1]) {
            candidates.push(amount);
        }
    }

    candidates.last().copied()
}

/// Sum the items' totals. `None` unless at least one item carries a total,
/// so a missing document total is never reported as zero.
pub fn sum_item_totals(items: &[Item]) -> Option<f64> {
    let totals: Vec<f64> = items.iter().filter_map(|item| item.total_cost).collect();
    if totals.is_empty() {
        return None;
    }

    Some(round2(totals.iter().sum()))
}

/// For a single-item document, back-fill the item's missing total and unit
/// cost from the reconciled document total.
pub fn backfill_single_item(items: &mut [Item], total_cost: Option<f64>) {
    if items.len() != 1 {
        return;
    }
    let Some(total) = total_cost else {
        return;
    };

    let item = &mut items[0];
    if item.total_cost.is_none() {
        item.total_cost = Some(total);
    }

    if item.unit_cost.is_none() {
        if let Some(quantity) = item.quantity {
            if quantity > 0.0 {
                item.unit_cost = Some(round2(total / quantity));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_last_labeled_occurrence_wins() {
        let text = "Total Cost\nsome rows\nTotal Cost: 1,200.00\nmore rows\nTotal Cost: 1,500.00\n";
        assert_eq!(labeled_total_cost(text), Some(1500.0));
    }

    #[test]
    fn test_split_line_label() {
        let text = "rows\nTotal\nCost: 2,345.67\n";
        assert_eq!(labeled_total_cost(text), Some(2345.67));
    }

    #[test]
    fn test_no_label_is_none() {
        assert_eq!(labeled_total_cost("no totals here"), None);
    }

    #[test]
    fn test_sum_item_totals_requires_one_non_null() {
        let items = vec![Item::default(), Item::default()];
        assert_eq!(sum_item_totals(&items), None);

        let items = vec![
            Item {
                total_cost: Some(100.5),
                ..Item::default()
            },
            Item::default(),
            Item {
                total_cost: Some(49.5),
                ..Item::default()
            },
        ];
        assert_eq!(sum_item_totals(&items), Some(150.0));
    }

    #[test]
    fn test_backfill_single_item() {
        let mut items = vec![Item {
            item_description: Some("TONER".to_string()),
            quantity: Some(4.0),
            ..Item::default()
        }];
        backfill_single_item(&mut items, Some(1000.0));
        assert_eq!(items[0].total_cost, Some(1000.0));
        assert_eq!(items[0].unit_cost, Some(250.0));
    }

    #[test]
    fn test_backfill_skips_multi_item_lists() {
        let mut items = vec![Item::default(), Item::default()];
        backfill_single_item(&mut items, Some(1000.0));
        assert_eq!(items[0].total_cost, None);
    }

    #[test]
    fn test_backfill_zero_quantity_leaves_unit_cost() {
        let mut items = vec![Item {
            quantity: Some(0.0),
            ..Item::default()
        }];
        backfill_single_item(&mut items, Some(1000.0));
        assert_eq!(items[0].total_cost, Some(1000.0));
        assert_eq!(items[0].unit_cost, None);
    }
}
