//! Accounts payable / receivable screens.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use uuid::Uuid;

use lunas_client::ApiClient;
use lunas_client::resources::ListQuery;
use lunas_client::resources::settlements::PaymentRequest;
use lunas_core::settlement::{SettlementSide, summarize, validate_payment};
use lunas_shared::types::PageRequest;

use crate::render::{Align, Column, header, money, row, rule};

/// Arguments for `lunas payables` / `lunas receivables`.
#[derive(Debug, Args)]
pub struct SettlementArgs {
    #[command(subcommand)]
    command: SettlementCommand,
}

#[derive(Debug, Subcommand)]
enum SettlementCommand {
    /// List outstanding records with summary cards.
    List(ListArgs),
    /// Record a payment against a record.
    Pay(PayArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Server-side status filter.
    #[arg(long)]
    status: Option<String>,
    /// Page number.
    #[arg(long, default_value_t = 1)]
    page: u32,
    /// Rows per page.
    #[arg(long, default_value_t = 50)]
    limit: u32,
}

#[derive(Debug, Args)]
struct PayArgs {
    /// Record ID.
    id: Uuid,
    /// Payment amount.
    #[arg(long)]
    amount: Decimal,
    /// Payment date. Defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Payment method note, e.g. `transfer`.
    #[arg(long)]
    method: Option<String>,
}

const COLUMNS: &[Column] = &[
    ("INVOICE", 14, Align::Left),
    ("PARTY", 24, Align::Left),
    ("DUE", 10, Align::Left),
    ("STATUS", 8, Align::Left),
    ("AMOUNT", 14, Align::Right),
    ("PAID", 14, Align::Right),
    ("BALANCE", 14, Align::Right),
    ("", 4, Align::Left),
];

/// Runs the AP or AR screen.
pub async fn run(api: &ApiClient, side: SettlementSide, args: SettlementArgs) -> anyhow::Result<()> {
    match args.command {
        SettlementCommand::List(args) => list(api, side, args).await,
        SettlementCommand::Pay(args) => pay(api, side, args).await,
    }
}

async fn list(api: &ApiClient, side: SettlementSide, args: ListArgs) -> anyhow::Result<()> {
    let query = ListQuery {
        page: Some(PageRequest {
            page: args.page,
            limit: args.limit,
        }),
        status: args.status,
        from_date: None,
        to_date: None,
    };
    let page = api.settlements().list(side, &query).await?;

    let summary = summarize(&page.data);
    println!(
        "Total Amount: {}   Total Paid: {}   Total Balance: {}",
        money(summary.total_amount),
        money(summary.total_paid),
        money(summary.total_balance)
    );
    println!();

    header(COLUMNS);
    for record in &page.data {
        row(
            COLUMNS,
            &[
                record.invoice_code.clone(),
                record.party.clone(),
                record.due_date.map(|d| d.to_string()).unwrap_or_default(),
                record.status.to_string(),
                money(record.amount),
                money(record.paid_amount),
                money(record.balance),
                if record.payable() { "PAY".to_string() } else { String::new() },
            ],
        );
    }
    rule(COLUMNS);
    println!("{} open of {} records", summary.open_count, page.data.len());

    Ok(())
}

async fn pay(api: &ApiClient, side: SettlementSide, args: PayArgs) -> anyhow::Result<()> {
    let record = api.settlements().get(side, args.id).await?;

    // Reject bad amounts before any network write.
    if let Err(e) = validate_payment(args.amount, record.balance) {
        anyhow::bail!("{e}");
    }

    let request = PaymentRequest {
        amount: args.amount,
        date: args.date.unwrap_or_else(|| chrono::Utc::now().date_naive()),
        method: args.method,
    };
    let updated = api.settlements().pay(side, args.id, &request).await?;

    println!(
        "Recorded {} against {}; remaining balance {}",
        money(args.amount),
        updated.invoice_code,
        money(updated.balance)
    );
    Ok(())
}
