//! Chart of accounts screen.

use clap::{Args, Subcommand};

use lunas_client::ApiClient;
use lunas_core::coa::AccountType;

use crate::render::{Align, Column, header, money, row};

/// Arguments for `lunas accounts`.
#[derive(Debug, Args)]
pub struct AccountsArgs {
    #[command(subcommand)]
    command: AccountsCommand,
}

#[derive(Debug, Subcommand)]
enum AccountsCommand {
    /// List the chart of accounts.
    List(ListArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Restrict to one account type.
    #[arg(long, value_name = "TYPE")]
    account_type: Option<AccountType>,
    /// Include inactive accounts.
    #[arg(long)]
    all: bool,
}

const COLUMNS: &[Column] = &[
    ("CODE", 8, Align::Left),
    ("NAME", 30, Align::Left),
    ("TYPE", 10, Align::Left),
    ("NORMAL", 7, Align::Left),
    ("BALANCE", 16, Align::Right),
];

/// Runs the chart of accounts screen.
pub async fn run(api: &ApiClient, args: AccountsArgs) -> anyhow::Result<()> {
    let AccountsCommand::List(args) = args.command;

    let accounts = api.accounts().list(args.account_type).await?;

    header(COLUMNS);
    for account in accounts.iter().filter(|a| args.all || a.is_active) {
        row(
            COLUMNS,
            &[
                account.code.clone(),
                account.name.clone(),
                account.account_type.to_string(),
                account.normal_balance.to_string(),
                money(account.balance),
            ],
        );
    }

    Ok(())
}
