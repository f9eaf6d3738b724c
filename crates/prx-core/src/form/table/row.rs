//! Row block parsing: turning one row block into a typed item.
//!
//! Numeric columns (quantity, unit cost, total cost) are right-aligned on
//! the form, so numbers are consumed from the right; the remaining left
//! tokens are split into stock code / unit / description by shape.

use crate::models::record::Item;

use super::super::rules::lines::{
    is_header_like_table_line, is_likely_unit_token, is_table_stop_line,
};
use super::super::rules::patterns::{
    LEADING_CODE, NUMBER, NUMERIC_TOKEN, NUMERIC_TUPLE_LINE, NUMERIC_UNIT, ROW_START,
};
use super::super::rules::value::{clean_value, parse_money, round2};
use super::segment::RowBlock;

/// Map a run of numeric columns onto (quantity, unit cost, total cost).
///
/// One number is a bare quantity. Two numbers are quantity and total, with
/// the unit cost derived for positive quantities. Three or more: the last
/// three are quantity, unit cost, total cost, and anything earlier is
/// ignored. Fields not covered by the run keep their current value.
fn apply_numeric_columns(
    numbers: &[f64],
    quantity: &mut Option<f64>,
    unit_cost: &mut Option<f64>,
    total_cost: &mut Option<f64>,
) {
    match numbers.len() {
        0 => {}
        1 => *quantity = Some(numbers[0]),
        2 => {
            *quantity = Some(numbers[0]);
            *total_cost = Some(numbers[1]);
            if numbers[0] > 0.0 {
                *unit_cost = Some(round2(numbers[1] / numbers[0]));
            }
        }
        n => {
            *quantity = Some(numbers[n - 3]);
            *unit_cost = Some(numbers[n - 2]);
            *total_cost = Some(numbers[n - 1]);
        }
    }
}

/// Parse a single compact line carrying a whole row:
/// `[stock] [unit] description... [qty [unit_cost [total_cost]]]`.
pub fn parse_item_base_line(line: &str) -> Option<Item> {
    let line = clean_value(line)?;
    if is_table_stop_line(&line) || is_header_like_table_line(&line) {
        return None;
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 2 {
        return None;
    }

    // Pull numeric columns from the right side.
    let mut split = tokens.len();
    while split > 0 && NUMERIC_TOKEN.is_match(tokens[split - 1]) {
        split -= 1;
    }
    let tail_numeric = &tokens[split..];
    let left = &tokens[..split];
    if left.len() < 2 {
        return None;
    }

    let mut stock_property_no = None;
    let unit;
    let description_tokens;

    // Left-side columns: Stock/Property No., Unit, Item Description.
    if LEADING_CODE.is_match(left[0]) {
        if NUMERIC_UNIT.is_match(left[1]) {
            // Two leading numeric codes: stock + unit.
            stock_property_no = clean_value(left[0]);
            unit = clean_value(left[1]);
            description_tokens = &left[2..];
        } else if is_likely_unit_token(left[1]) && left.len() >= 3 {
            // Leading stock code + textual/alnum unit.
            stock_property_no = clean_value(left[0]);
            unit = clean_value(left[1]);
            description_tokens = &left[2..];
        } else {
            // Common OCR case: only the unit survived, stock column blank.
            unit = clean_value(left[0]);
            description_tokens = &left[1..];
        }
    } else {
        unit = clean_value(left[0]);
        description_tokens = &left[1..];
    }

    let item_description = clean_value(&description_tokens.join(" "));
    if item_description.is_none() && tail_numeric.is_empty() {
        return None;
    }

    let numbers: Vec<f64> = tail_numeric
        .iter()
        .filter_map(|token| parse_money(token))
        .collect();

    let mut quantity = None;
    let mut unit_cost = None;
    let mut total_cost = None;
    apply_numeric_columns(&numbers, &mut quantity, &mut unit_cost, &mut total_cost);

    let mut item = Item {
        stock_property_no,
        unit,
        item_description,
        quantity,
        unit_cost,
        total_cost,
    };
    item.derive_costs();

    if item.is_empty() {
        None
    } else {
        Some(item)
    }
}

/// Parse a row block: the row-start line plus continuation lines carrying
/// wrapped description text and/or the numeric columns.
pub fn parse_row_block(block: &RowBlock) -> Option<Item> {
    let lines: Vec<String> = block
        .lines
        .iter()
        .filter_map(|line| clean_value(line))
        .collect();
    let first = lines.first()?;

    let direct = parse_item_base_line(first);

    // Single compact line: use the direct parse when it already recovered a
    // description.
    if lines.len() == 1 {
        if let Some(item) = &direct {
            if item.item_description.is_some() {
                return Some(item.clone());
            }
        }
    }

    let Some(caps) = ROW_START.captures(first) else {
        // No leading stock code; treat the whole block as one flattened line.
        return parse_item_base_line(&lines.join(" "));
    };

    let stock_property_no = clean_value(&caps[1]);
    let rest = caps.get(2).and_then(|m| clean_value(m.as_str()));

    let mut unit: Option<String> = None;
    let mut desc_parts: Vec<String> = Vec::new();
    let mut quantity = None;
    let mut unit_cost = None;
    let mut total_cost = None;

    if let Some(direct) = &direct {
        if let Some(direct_unit) = &direct.unit {
            if stock_property_no.as_deref() != Some(direct_unit.as_str()) {
                unit = Some(direct_unit.clone());
            }
        }

        if let Some(desc) = &direct.item_description {
            desc_parts.push(desc.clone());
        } else if let Some(rest) = &rest {
            desc_parts.push(rest.clone());
        }

        quantity = direct.quantity;
        unit_cost = direct.unit_cost;
        total_cost = direct.total_cost;
    } else if let Some(rest) = &rest {
        desc_parts.push(rest.clone());
    }

    let mut numeric_only: Vec<f64> = Vec::new();
    for line in &lines[1..] {
        if is_table_stop_line(line) || is_header_like_table_line(line) {
            continue;
        }

        if NUMERIC_TOKEN.is_match(line) {
            if let Some(n) = parse_money(line) {
                numeric_only.push(n);
            }
            continue;
        }

        // "qty unit_cost total_cost" continuation lines.
        if NUMERIC_TUPLE_LINE.is_match(line) {
            for m in NUMBER.find_iter(line) {
                if let Some(n) = parse_money(m.as_str()) {
                    numeric_only.push(n);
                }
            }
            continue;
        }

        desc_parts.push(line.clone());
    }

    // A unit token often lands at the head of the description block when the
    // columns were flattened, or alone on its own continuation line.
    if let Some(first_desc) = desc_parts.first().cloned() {
        let mut tokens = first_desc.split_whitespace();
        if let Some(head) = tokens.next() {
            if is_likely_unit_token(head) {
                unit = clean_value(head);
                desc_parts[0] = tokens.collect::<Vec<_>>().join(" ");
            }
        }
    }

    let item_description = clean_value(
        &desc_parts
            .iter()
            .filter(|part| !part.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(" "),
    );

    apply_numeric_columns(&numeric_only, &mut quantity, &mut unit_cost, &mut total_cost);

    let mut item = Item {
        stock_property_no,
        unit,
        item_description,
        quantity,
        unit_cost,
        total_cost,
    };
    item.derive_costs();

    if item.is_empty() {
        None
    } else {
        Some(item)
    }
}
