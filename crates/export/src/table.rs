//! Neutral row/column model shared by every format writer.
//!
//! Flattening produces a `TableDocument`; writers only ever see this model,
//! never the report types themselves.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use lunas_shared::types::money::format_amount;

/// One cell of the flattened matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Free text.
    Text(String),
    /// Monetary amount, rendered with thousands separators.
    Money(Decimal),
    /// Non-monetary quantity.
    Count(Decimal),
    /// Empty cell.
    Empty,
}

impl Cell {
    /// Renders the cell as display text.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Money(amount) => format_amount(*amount),
            Self::Count(quantity) => quantity.to_string(),
            Self::Empty => String::new(),
        }
    }

    /// Whether the cell renders right-aligned (numeric).
    #[must_use]
    pub const fn numeric(&self) -> bool {
        matches!(self, Self::Money(_) | Self::Count(_))
    }
}

/// Presentation hint for a section header.
///
/// Only the PDF writer colors headers; other writers ignore the tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionTone {
    /// Default banner color.
    #[default]
    Neutral,
    /// Asset/primary sections.
    Primary,
    /// Liability/expense sections.
    Danger,
    /// Equity/revenue sections.
    Success,
}

/// A titled block of rows with optional totals.
#[derive(Debug, Clone)]
pub struct TableSection {
    /// Section title, e.g. `Assets`.
    pub title: String,
    /// Header banner tone.
    pub tone: SectionTone,
    /// Column headers.
    pub columns: Vec<String>,
    /// Line-item rows.
    pub rows: Vec<Vec<Cell>>,
    /// Totals row, rendered bold below the items.
    pub total_row: Option<Vec<Cell>>,
}

/// A fully flattened report ready for any writer.
#[derive(Debug, Clone)]
pub struct TableDocument {
    /// Company header block (name, tax ID, address, contact).
    pub company_lines: Vec<String>,
    /// Report title, e.g. `Balance Sheet`.
    pub title: String,
    /// Period or as-of line, e.g. `As of 2026-06-30`.
    pub period: String,
    /// Report sections in display order.
    pub sections: Vec<TableSection>,
    /// Timestamp for the footer row.
    pub generated_at: DateTime<Utc>,
}

impl TableDocument {
    /// Total number of line-item rows across all sections.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.sections.iter().map(|s| s.rows.len()).sum()
    }

    /// Footer text for the generated-at row.
    #[must_use]
    pub fn footer(&self) -> String {
        format!("Generated at {}", self.generated_at.format("%Y-%m-%d %H:%M UTC"))
    }
}
