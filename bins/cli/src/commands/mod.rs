//! Subcommand implementations, one module per screen.

pub mod accounts;
pub mod auth;
pub mod company;
pub mod dashboard;
pub mod invoices;
pub mod journals;
pub mod orders;
pub mod reports;
pub mod settlements;
pub mod stock;
pub mod users;
