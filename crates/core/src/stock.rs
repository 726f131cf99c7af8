//! Stock item display types and valuation sums.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stock item as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockItem {
    /// Item ID.
    pub id: Uuid,
    /// Stock-keeping unit code.
    pub sku: String,
    /// Item name.
    pub name: String,
    /// Unit of measure, e.g. `pcs`, `kg`.
    pub unit: String,
    /// Quantity on hand.
    pub quantity: Decimal,
    /// Reorder threshold.
    pub reorder_level: Decimal,
    /// Cost per unit.
    pub unit_cost: Decimal,
    /// Extended value (server-computed as quantity * unit_cost).
    pub value: Decimal,
}

impl StockItem {
    /// Display flag: item is at or below its reorder threshold.
    #[must_use]
    pub fn low_stock(&self) -> bool {
        self.quantity <= self.reorder_level
    }
}

/// Totals row for the stock list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockSummary {
    /// Number of displayed items.
    pub item_count: usize,
    /// Sum of the quantity column.
    pub total_quantity: Decimal,
    /// Sum of the value column.
    pub total_value: Decimal,
    /// Number of items at or below reorder level.
    pub low_stock_count: usize,
}

/// Sums the displayed columns of a stock list.
#[must_use]
pub fn summarize(items: &[StockItem]) -> StockSummary {
    let mut summary = StockSummary {
        item_count: items.len(),
        total_quantity: Decimal::ZERO,
        total_value: Decimal::ZERO,
        low_stock_count: 0,
    };

    for item in items {
        summary.total_quantity += item.quantity;
        summary.total_value += item.value;
        if item.low_stock() {
            summary.low_stock_count += 1;
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(quantity: Decimal, reorder: Decimal, unit_cost: Decimal) -> StockItem {
        StockItem {
            id: Uuid::new_v4(),
            sku: "SKU-100".to_string(),
            name: "Beras 5kg".to_string(),
            unit: "pcs".to_string(),
            quantity,
            reorder_level: reorder,
            unit_cost,
            value: quantity * unit_cost,
        }
    }

    #[test]
    fn test_low_stock_flag() {
        assert!(item(dec!(3), dec!(5), dec!(100)).low_stock());
        assert!(item(dec!(5), dec!(5), dec!(100)).low_stock());
        assert!(!item(dec!(6), dec!(5), dec!(100)).low_stock());
    }

    #[test]
    fn test_summarize() {
        let rows = vec![
            item(dec!(10), dec!(5), dec!(2000)),
            item(dec!(2), dec!(5), dec!(1500)),
        ];
        let summary = summarize(&rows);
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total_quantity, dec!(12));
        assert_eq!(summary.total_value, dec!(23000));
        assert_eq!(summary.low_stock_count, 1);
    }
}
