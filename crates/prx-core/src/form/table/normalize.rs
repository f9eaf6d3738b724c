//! Post-parse corrective passes over the item list.
//!
//! Both passes repair systematic extraction damage rather than individual
//! rows, and both are idempotent: running them over an already-normalized
//! list changes nothing.

use crate::models::record::Item;

use super::super::rules::patterns::{DIGITS_1_10, STOCK_CODE, TRAILING_QUANTITY, UNIT_WORDS};
use super::super::rules::value::{clean_value, parse_float};

/// Repair rows whose stock/unit columns slid left during extraction.
///
/// Triggered only when some item has a null stock code next to a unit that
/// looks like a 7-10 digit stock code. For every item whose stock code is a
/// 7-10 digit number: a null unit takes the code; a unit that is not a
/// strict unit token is pushed into the description and replaced by the
/// code. Either way the stock column is cleared.
pub fn realign_stock_unit_columns(items: &mut [Item]) {
    let triggered = items.iter().any(|item| {
        item.stock_property_no.is_none()
            && item
                .unit
                .as_deref()
                .map_or(false, |unit| STOCK_CODE.is_match(unit))
    });

    if !triggered {
        return;
    }

    for item in items.iter_mut() {
        let Some(stock) = item.stock_property_no.clone() else {
            continue;
        };
        if !STOCK_CODE.is_match(&stock) {
            continue;
        }

        match item.unit.clone() {
            None => {
                item.unit = Some(stock);
                item.stock_property_no = None;
            }
            Some(unit) => {
                let strict = UNIT_WORDS.contains(&unit.to_lowercase().as_str())
                    || DIGITS_1_10.is_match(&unit);
                if !strict {
                    let description = item.item_description.clone().unwrap_or_default();
                    item.item_description = clean_value(&format!("{unit} {description}"));
                    item.unit = Some(stock);
                    item.stock_property_no = None;
                }
            }
        }
    }
}

/// Recover a quantity flattened into the description column.
///
/// Applies only to items with a description but no numeric fields at all;
/// a trailing number after non-digit text is split off as the quantity.
pub fn recover_trailing_quantity(items: &mut [Item]) {
    for item in items.iter_mut() {
        if item.quantity.is_some() || item.unit_cost.is_some() || item.total_cost.is_some() {
            continue;
        }

        let Some(description) = item
            .item_description
            .as_deref()
            .and_then(clean_value)
        else {
            continue;
        };

        let Some(caps) = TRAILING_QUANTITY.captures(&description) else {
            continue;
        };

        let quantity = parse_float(&caps[2]);
        let shortened = clean_value(&caps[1]);
        let (Some(quantity), Some(shortened)) = (quantity, shortened) else {
            continue;
        };
        if quantity <= 0.0 {
            continue;
        }

        item.item_description = Some(shortened);
        item.quantity = Some(quantity);
    }
}
