//! Invoice records and list-screen logic.

mod filter;
#[cfg(test)]
mod filter_props;
mod summary;
mod types;

pub use filter::InvoiceFilter;
pub use summary::{InvoiceSummary, summarize};
pub use types::{Invoice, InvoiceKind, InvoiceStatus};
