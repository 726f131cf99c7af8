//! Payment amount validation.
//!
//! Runs before any network call is issued: a rejected amount never reaches
//! the backend.

use rust_decimal::Decimal;
use thiserror::Error;

/// Validation errors for payment entry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaymentError {
    /// Payment amount is zero or negative.
    #[error("Payment amount must be positive")]
    NonPositive,

    /// Payment amount exceeds the outstanding balance.
    #[error("Payment {requested} exceeds outstanding balance {outstanding}")]
    ExceedsOutstanding {
        /// Amount the user entered.
        requested: Decimal,
        /// Remaining balance on the record.
        outstanding: Decimal,
    },
}

/// Validates a payment amount against the outstanding balance.
///
/// # Errors
///
/// Returns an error if the amount is not positive or exceeds the balance.
pub fn validate_payment(amount: Decimal, outstanding: Decimal) -> Result<(), PaymentError> {
    if amount <= Decimal::ZERO {
        return Err(PaymentError::NonPositive);
    }

    if amount > outstanding {
        return Err(PaymentError::ExceedsOutstanding {
            requested: amount,
            outstanding,
        });
    }

    Ok(())
}
