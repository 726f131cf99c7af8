//! Per-resource backend clients, one module per console screen.

pub mod accounts;
pub mod auth;
pub mod company;
pub mod invoices;
pub mod journals;
pub mod orders;
pub mod reports;
pub mod settlements;
pub mod stock;
pub mod users;

use chrono::NaiveDate;

use lunas_shared::types::PageRequest;

/// Common list query parameters: `page`, `limit`, `status`, `from_date`,
/// `to_date`.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Pagination. `None` uses backend defaults.
    pub page: Option<PageRequest>,
    /// Server-side status filter.
    pub status: Option<String>,
    /// Start date filter (inclusive).
    pub from_date: Option<NaiveDate>,
    /// End date filter (inclusive).
    pub to_date: Option<NaiveDate>,
}

impl ListQuery {
    /// Renders the query as URL parameters, skipping unset fields.
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = &self.page {
            params.push(("page", page.page.to_string()));
            params.push(("limit", page.limit.to_string()));
        }
        if let Some(status) = &self.status {
            params.push(("status", status.clone()));
        }
        if let Some(from) = self.from_date {
            params.push(("from_date", from.to_string()));
        }
        if let Some(to) = self.to_date {
            params.push(("to_date", to.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_has_no_params() {
        assert!(ListQuery::default().to_params().is_empty());
    }

    #[test]
    fn test_full_query_params() {
        let query = ListQuery {
            page: Some(PageRequest { page: 2, limit: 50 }),
            status: Some("unpaid".to_string()),
            from_date: Some("2026-01-01".parse().unwrap()),
            to_date: Some("2026-06-30".parse().unwrap()),
        };
        assert_eq!(
            query.to_params(),
            vec![
                ("page", "2".to_string()),
                ("limit", "50".to_string()),
                ("status", "unpaid".to_string()),
                ("from_date", "2026-01-01".to_string()),
                ("to_date", "2026-06-30".to_string()),
            ]
        );
    }
}
