//! Report export pipeline for the Lunas admin console.
//!
//! Two stages with a shared model between them:
//! 1. `flatten` turns a server-computed report plus company metadata into a
//!    neutral `TableDocument` row matrix (with an empty-report guard);
//! 2. a format writer renders the matrix to `.xlsx`, `.pdf`, or `.csv`.
//!
//! Writers target any `io::Write`; callers typically render into a buffer
//! and persist it afterwards so a failed write leaves no partial file.

pub mod error;
pub mod flatten;
pub mod formats;
pub mod table;

use std::io::Write;

pub use error::{ExportError, Result};
pub use table::{Cell, SectionTone, TableDocument, TableSection};

/// A format writer: renders a flattened document to an output stream.
pub trait WriteTable {
    /// Writes the document.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or the underlying write fails.
    fn write<W: Write>(w: W, doc: &TableDocument) -> Result<()>;
}

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Excel workbook.
    Xlsx,
    /// PDF document.
    Pdf,
    /// Comma-separated values.
    Csv,
}

impl ExportFormat {
    /// Conventional file extension for the format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Pdf => "pdf",
            Self::Csv => "csv",
        }
    }
}

/// Renders a document in the chosen format.
///
/// # Errors
///
/// Returns an error if rendering or the underlying write fails.
pub fn write_document<W: Write>(format: ExportFormat, w: W, doc: &TableDocument) -> Result<()> {
    match format {
        ExportFormat::Xlsx => formats::xlsx::Xlsx::write(w, doc),
        ExportFormat::Pdf => formats::pdf::Pdf::write(w, doc),
        ExportFormat::Csv => formats::csv::Csv::write(w, doc),
    }
}
