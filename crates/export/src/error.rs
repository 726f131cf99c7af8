//! Export pipeline errors.

use thiserror::Error;

/// Result type alias using `ExportError`.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors raised while flattening or writing a report.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The report has no line items; nothing is written.
    #[error("Report has no rows to export")]
    EmptyReport,

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Spreadsheet writer failure.
    #[error("Spreadsheet writer error: {0}")]
    Xlsx(String),

    /// PDF writer failure.
    #[error("PDF writer error: {0}")]
    Pdf(String),

    /// CSV writer failure.
    #[error("CSV writer error: {0}")]
    Csv(#[from] csv::Error),
}
