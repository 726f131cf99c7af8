//! Property-based tests for payment validation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::validation::{PaymentError, validate_payment};

fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn non_positive_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(-cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Any amount in (0, outstanding] is accepted.
    #[test]
    fn prop_within_balance_accepted(outstanding in positive_amount()) {
        prop_assert!(validate_payment(outstanding, outstanding).is_ok());
    }

    /// Any non-positive amount is rejected regardless of the balance.
    #[test]
    fn prop_non_positive_rejected(
        amount in non_positive_amount(),
        outstanding in positive_amount(),
    ) {
        prop_assert_eq!(
            validate_payment(amount, outstanding),
            Err(PaymentError::NonPositive)
        );
    }

    /// Any amount strictly above the balance is rejected.
    #[test]
    fn prop_overpayment_rejected(
        outstanding in positive_amount(),
        excess in positive_amount(),
    ) {
        let amount = outstanding + excess;
        prop_assert!(
            matches!(
                validate_payment(amount, outstanding),
                Err(PaymentError::ExceedsOutstanding { .. })
            ),
            "expected ExceedsOutstanding error"
        );
    }
}
