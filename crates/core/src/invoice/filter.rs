//! Client-side invoice list filtering.

use chrono::NaiveDate;

use super::types::{Invoice, InvoiceStatus};

/// Filter criteria applied to an already-fetched invoice list.
///
/// All criteria are optional; an empty filter retains every row.
#[derive(Debug, Clone, Default)]
pub struct InvoiceFilter {
    /// Retain only invoices with this status.
    pub status: Option<InvoiceStatus>,
    /// Case-insensitive substring match over code and party.
    pub text: Option<String>,
    /// Retain only invoices dated on or after this date.
    pub from: Option<NaiveDate>,
    /// Retain only invoices dated on or before this date.
    pub to: Option<NaiveDate>,
}

impl InvoiceFilter {
    /// Returns true if the invoice satisfies every active criterion.
    #[must_use]
    pub fn matches(&self, invoice: &Invoice) -> bool {
        if let Some(status) = self.status {
            if invoice.status != status {
                return false;
            }
        }

        if let Some(text) = &self.text {
            let needle = text.to_lowercase();
            let in_code = invoice.code.to_lowercase().contains(&needle);
            let in_party = invoice.party.to_lowercase().contains(&needle);
            if !in_code && !in_party {
                return false;
            }
        }

        if let Some(from) = self.from {
            if invoice.date < from {
                return false;
            }
        }

        if let Some(to) = self.to {
            if invoice.date > to {
                return false;
            }
        }

        true
    }

    /// Applies the filter to a fetched list, keeping original order.
    #[must_use]
    pub fn apply(&self, invoices: &[Invoice]) -> Vec<Invoice> {
        invoices.iter().filter(|i| self.matches(i)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::InvoiceKind;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn invoice(code: &str, party: &str, status: InvoiceStatus, date: NaiveDate) -> Invoice {
        Invoice {
            id: Uuid::new_v4(),
            code: code.to_string(),
            kind: InvoiceKind::Sales,
            date,
            due_date: None,
            party: party.to_string(),
            subtotal: dec!(100),
            tax: dec!(11),
            total: dec!(111),
            status,
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let rows = vec![
            invoice("INV-001", "PT Maju", InvoiceStatus::Paid, date("2026-01-05")),
            invoice("INV-002", "CV Abadi", InvoiceStatus::Unpaid, date("2026-02-10")),
        ];
        assert_eq!(InvoiceFilter::default().apply(&rows).len(), 2);
    }

    #[test]
    fn test_status_filter() {
        let rows = vec![
            invoice("INV-001", "PT Maju", InvoiceStatus::Paid, date("2026-01-05")),
            invoice("INV-002", "CV Abadi", InvoiceStatus::Unpaid, date("2026-02-10")),
        ];
        let filter = InvoiceFilter {
            status: Some(InvoiceStatus::Unpaid),
            ..Default::default()
        };
        let kept = filter.apply(&rows);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].code, "INV-002");
    }

    #[test]
    fn test_text_filter_is_case_insensitive() {
        let rows = vec![
            invoice("INV-001", "PT Maju", InvoiceStatus::Paid, date("2026-01-05")),
            invoice("INV-002", "CV Abadi", InvoiceStatus::Unpaid, date("2026-02-10")),
        ];
        let filter = InvoiceFilter {
            text: Some("abadi".to_string()),
            ..Default::default()
        };
        let kept = filter.apply(&rows);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].party, "CV Abadi");
    }

    #[test]
    fn test_text_filter_matches_code() {
        let rows = vec![invoice("INV-042", "PT Maju", InvoiceStatus::Paid, date("2026-01-05"))];
        let filter = InvoiceFilter {
            text: Some("042".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&rows).len(), 1);
    }

    #[test]
    fn test_date_range_filter_is_inclusive() {
        let rows = vec![
            invoice("INV-001", "A", InvoiceStatus::Paid, date("2026-01-05")),
            invoice("INV-002", "B", InvoiceStatus::Paid, date("2026-02-10")),
            invoice("INV-003", "C", InvoiceStatus::Paid, date("2026-03-15")),
        ];
        let filter = InvoiceFilter {
            from: Some(date("2026-02-10")),
            to: Some(date("2026-03-15")),
            ..Default::default()
        };
        let kept = filter.apply(&rows);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].code, "INV-002");
        assert_eq!(kept[1].code, "INV-003");
    }
}
