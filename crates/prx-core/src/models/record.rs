//! Parsed purchase request models.

use serde::{Deserialize, Serialize};

use crate::form::rules::value::round2;

/// A single line item recovered from the request's item table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Stock/property number (7-10 digit code leading the table row).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_property_no: Option<String>,

    /// Unit of measure (pc, box, ream, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// Free-text item description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_description: Option<String>,

    /// Requested quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,

    /// Cost per unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<f64>,

    /// Total cost for this row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
}

impl Item {
    /// True when every field is null or blank. Such items are never
    /// materialized into a record.
    pub fn is_empty(&self) -> bool {
        fn blank(v: &Option<String>) -> bool {
            v.as_deref().map_or(true, str::is_empty)
        }

        blank(&self.stock_property_no)
            && blank(&self.unit)
            && blank(&self.item_description)
            && self.quantity.is_none()
            && self.unit_cost.is_none()
            && self.total_cost.is_none()
    }

    /// Fill whichever cost field can be derived from the other two:
    /// `total = round(quantity * unit_cost, 2)` and, for positive
    /// quantities, `unit_cost = round(total_cost / quantity, 2)`.
    pub fn derive_costs(&mut self) {
        if self.total_cost.is_none() {
            if let (Some(quantity), Some(unit_cost)) = (self.quantity, self.unit_cost) {
                self.total_cost = Some(round2(quantity * unit_cost));
            }
        }

        if self.unit_cost.is_none() {
            if let (Some(quantity), Some(total_cost)) = (self.quantity, self.total_cost) {
                if quantity > 0.0 {
                    self.unit_cost = Some(round2(total_cost / quantity));
                }
            }
        }
    }
}

/// A fully parsed purchase request document.
///
/// Every field is nullable; an all-null record with an empty item list is
/// the valid result of parsing unusable input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fund_cluster: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pr_no: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsibility_center_code: Option<String>,

    /// Request date as printed on the form; deliberately not date-parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_date: Option<String>,

    /// First item's unit, kept flat for single-item consumers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// First item's description, kept flat for single-item consumers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_description: Option<String>,

    /// First item's quantity, kept flat for single-item consumers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,

    /// First item's unit cost, kept flat for single-item consumers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<f64>,

    /// Reconciled document total (last labeled occurrence, or item sum).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation2: Option<String>,

    /// Ordered line items as they appear in the table.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
}

impl ParsedRecord {
    /// Build a record from the parsed item list and the reconciled total,
    /// projecting the first item into the flat single-item fields.
    ///
    /// Document-level header fields (fund cluster, PR number, signatures)
    /// are filled in by the caller afterwards.
    pub fn from_items(items: Vec<Item>, total_cost: Option<f64>) -> Self {
        let mut record = Self {
            total_cost,
            items,
            ..Self::default()
        };

        if let Some(first) = record.items.first() {
            record.unit = first.unit.clone();
            record.item_description = first.item_description.clone();
            record.quantity = first.quantity;
            record.unit_cost = first.unit_cost;
        }

        record
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn item(description: &str, quantity: Option<f64>) -> Item {
        Item {
            item_description: Some(description.to_string()),
            quantity,
            ..Item::default()
        }
    }

    #[test]
    fn test_empty_item_detection() {
        assert!(Item::default().is_empty());
        assert!(Item {
            unit: Some(String::new()),
            ..Item::default()
        }
        .is_empty());
        assert!(!item("BOND PAPER", None).is_empty());
        assert!(!Item {
            quantity: Some(0.0),
            ..Item::default()
        }
        .is_empty());
    }

    #[test]
    fn test_derive_total_from_quantity_and_unit_cost() {
        let mut it = item("BALLPOINT PEN", Some(10.0));
        it.unit_cost = Some(15.0);
        it.derive_costs();
        assert_eq!(it.total_cost, Some(150.0));
    }

    #[test]
    fn test_derive_unit_cost_from_total() {
        let mut it = item("FOLDER", Some(8.0));
        it.total_cost = Some(100.0);
        it.derive_costs();
        assert_eq!(it.unit_cost, Some(12.5));
    }

    #[test]
    fn test_zero_quantity_leaves_unit_cost_null() {
        let mut it = item("FOLDER", Some(0.0));
        it.total_cost = Some(100.0);
        it.derive_costs();
        assert_eq!(it.unit_cost, None);
    }

    #[test]
    fn test_from_items_projects_first_item() {
        let first = Item {
            stock_property_no: Some("1234567".to_string()),
            unit: Some("PC".to_string()),
            item_description: Some("BALLPOINT PEN".to_string()),
            quantity: Some(10.0),
            unit_cost: Some(15.0),
            total_cost: Some(150.0),
        };
        let record = ParsedRecord::from_items(vec![first.clone(), item("STAPLER", Some(2.0))], Some(400.0));

        assert_eq!(record.unit, first.unit);
        assert_eq!(record.item_description, first.item_description);
        assert_eq!(record.quantity, first.quantity);
        assert_eq!(record.unit_cost, first.unit_cost);
        assert_eq!(record.total_cost, Some(400.0));
        assert_eq!(record.items.len(), 2);
    }

    #[test]
    fn test_from_items_with_no_items() {
        let record = ParsedRecord::from_items(Vec::new(), None);
        assert_eq!(record, ParsedRecord::default());
    }

    #[test]
    fn test_record_serialization_omits_nulls() {
        let json = serde_json::to_string(&ParsedRecord::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
