//! Column sums for the invoice list screen.

use rust_decimal::Decimal;

use super::types::{Invoice, InvoiceStatus};

/// Totals row for a displayed invoice list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceSummary {
    /// Number of displayed rows.
    pub count: usize,
    /// Sum of the subtotal column.
    pub subtotal: Decimal,
    /// Sum of the tax column.
    pub tax: Decimal,
    /// Sum of the total column.
    pub total: Decimal,
    /// Number of overdue rows.
    pub overdue_count: usize,
}

/// Sums the displayed columns. The totals row always reflects exactly the
/// rows passed in, filtered or not.
#[must_use]
pub fn summarize(invoices: &[Invoice]) -> InvoiceSummary {
    let mut summary = InvoiceSummary {
        count: invoices.len(),
        subtotal: Decimal::ZERO,
        tax: Decimal::ZERO,
        total: Decimal::ZERO,
        overdue_count: 0,
    };

    for invoice in invoices {
        summary.subtotal += invoice.subtotal;
        summary.tax += invoice.tax;
        summary.total += invoice.total;
        if invoice.status == InvoiceStatus::Overdue {
            summary.overdue_count += 1;
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::InvoiceKind;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn invoice(subtotal: Decimal, tax: Decimal, status: InvoiceStatus) -> Invoice {
        Invoice {
            id: Uuid::new_v4(),
            code: "INV-001".to_string(),
            kind: InvoiceKind::Purchase,
            date: "2026-01-15".parse().unwrap(),
            due_date: None,
            party: "PT Sumber Rejeki".to_string(),
            subtotal,
            tax,
            total: subtotal + tax,
            status,
        }
    }

    #[test]
    fn test_summarize_sums_columns() {
        let rows = vec![
            invoice(dec!(1000), dec!(110), InvoiceStatus::Unpaid),
            invoice(dec!(500), dec!(55), InvoiceStatus::Overdue),
        ];
        let summary = summarize(&rows);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.subtotal, dec!(1500));
        assert_eq!(summary.tax, dec!(165));
        assert_eq!(summary.total, dec!(1665));
        assert_eq!(summary.overdue_count, 1);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.total, Decimal::ZERO);
        assert_eq!(summary.overdue_count, 0);
    }

    #[test]
    fn test_total_equals_column_sum() {
        let rows = vec![
            invoice(dec!(250.50), dec!(27.56), InvoiceStatus::Paid),
            invoice(dec!(99.99), dec!(11.00), InvoiceStatus::Partial),
            invoice(dec!(1200), dec!(132), InvoiceStatus::Unpaid),
        ];
        let summary = summarize(&rows);
        let expected: Decimal = rows.iter().map(|r| r.total).sum();
        assert_eq!(summary.total, expected);
    }
}
