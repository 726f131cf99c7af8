//! Chart-of-accounts display types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ledger account category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Resources owned by the business.
    Asset,
    /// Obligations owed to others.
    Liability,
    /// Owner's residual interest.
    Equity,
    /// Income earned.
    Revenue,
    /// Costs incurred.
    Expense,
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Asset => "asset",
            Self::Liability => "liability",
            Self::Equity => "equity",
            Self::Revenue => "revenue",
            Self::Expense => "expense",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asset" => Ok(Self::Asset),
            "liability" => Ok(Self::Liability),
            "equity" => Ok(Self::Equity),
            "revenue" => Ok(Self::Revenue),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown account type: {s}")),
        }
    }
}

/// Which side of an entry normally increases the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalBalance {
    /// Debit-normal (assets, expenses).
    Debit,
    /// Credit-normal (liabilities, equity, revenue).
    Credit,
}

impl NormalBalance {
    /// Conventional normal balance for an account type.
    #[must_use]
    pub const fn for_type(account_type: AccountType) -> Self {
        match account_type {
            AccountType::Asset | AccountType::Expense => Self::Debit,
            AccountType::Liability | AccountType::Equity | AccountType::Revenue => Self::Credit,
        }
    }
}

impl std::fmt::Display for NormalBalance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Debit => write!(f, "debit"),
            Self::Credit => write!(f, "credit"),
        }
    }
}

/// A chart-of-accounts entry as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartAccount {
    /// Account ID.
    pub id: Uuid,
    /// Account code, e.g. `1-1100`.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account category.
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Normal balance side.
    pub normal_balance: NormalBalance,
    /// Running balance (server-computed).
    pub balance: Decimal,
    /// Whether the account accepts new postings.
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case(AccountType::Asset, NormalBalance::Debit)]
    #[case(AccountType::Expense, NormalBalance::Debit)]
    #[case(AccountType::Liability, NormalBalance::Credit)]
    #[case(AccountType::Equity, NormalBalance::Credit)]
    #[case(AccountType::Revenue, NormalBalance::Credit)]
    fn test_normal_balance_for_type(#[case] t: AccountType, #[case] expected: NormalBalance) {
        assert_eq!(NormalBalance::for_type(t), expected);
    }

    #[test]
    fn test_account_type_round_trip() {
        for t in [
            AccountType::Asset,
            AccountType::Liability,
            AccountType::Equity,
            AccountType::Revenue,
            AccountType::Expense,
        ] {
            assert_eq!(AccountType::from_str(&t.to_string()).unwrap(), t);
        }
    }
}
