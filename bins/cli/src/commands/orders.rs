//! Purchase and sales order screens.

use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};
use uuid::Uuid;

use lunas_client::ApiClient;
use lunas_client::resources::ListQuery;
use lunas_client::resources::orders::{OrderKind, ReceiveRequest};
use lunas_shared::types::PageRequest;

use crate::render::{Align, Column, header, money, row};

/// Arguments for `lunas orders`.
#[derive(Debug, Args)]
pub struct OrdersArgs {
    #[command(subcommand)]
    command: OrdersCommand,
}

#[derive(Debug, Subcommand)]
enum OrdersCommand {
    /// List orders of one kind.
    List(ListArgs),
    /// Record a goods receipt note against a purchase order.
    Receive(ReceiveArgs),
}

/// Order direction flag.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    /// Orders placed with suppliers.
    Purchase,
    /// Orders received from customers.
    Sales,
}

impl From<KindArg> for OrderKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Purchase => Self::Purchase,
            KindArg::Sales => Self::Sales,
        }
    }
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Purchase or sales orders.
    #[arg(value_enum)]
    kind: KindArg,
    /// Server-side status filter.
    #[arg(long)]
    status: Option<String>,
    /// Start date (inclusive).
    #[arg(long)]
    from: Option<NaiveDate>,
    /// End date (inclusive).
    #[arg(long)]
    to: Option<NaiveDate>,
    /// Page number.
    #[arg(long, default_value_t = 1)]
    page: u32,
    /// Rows per page.
    #[arg(long, default_value_t = 50)]
    limit: u32,
}

#[derive(Debug, Args)]
struct ReceiveArgs {
    /// Purchase order ID.
    id: Uuid,
    /// Receipt date. Defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Receiving notes.
    #[arg(long)]
    notes: Option<String>,
}

const COLUMNS: &[Column] = &[
    ("CODE", 14, Align::Left),
    ("DATE", 10, Align::Left),
    ("PARTY", 28, Align::Left),
    ("STATUS", 10, Align::Left),
    ("TOTAL", 16, Align::Right),
];

/// Runs the orders screen.
pub async fn run(api: &ApiClient, args: OrdersArgs) -> anyhow::Result<()> {
    match args.command {
        OrdersCommand::List(args) => list(api, args).await,
        OrdersCommand::Receive(args) => receive(api, args).await,
    }
}

async fn list(api: &ApiClient, args: ListArgs) -> anyhow::Result<()> {
    let query = ListQuery {
        page: Some(PageRequest {
            page: args.page,
            limit: args.limit,
        }),
        status: args.status,
        from_date: args.from,
        to_date: args.to,
    };
    let page = api.orders().list(args.kind.into(), &query).await?;

    header(COLUMNS);
    for order in &page.data {
        row(
            COLUMNS,
            &[
                order.code.clone(),
                order.date.to_string(),
                order.party.clone(),
                order.status.to_string(),
                money(order.total),
            ],
        );
    }
    println!(
        "page {}/{} ({} total)",
        page.meta.page, page.meta.total_pages, page.meta.total
    );

    Ok(())
}

async fn receive(api: &ApiClient, args: ReceiveArgs) -> anyhow::Result<()> {
    let request = ReceiveRequest {
        received_date: args.date.unwrap_or_else(|| chrono::Utc::now().date_naive()),
        notes: args.notes,
    };
    let order = api.orders().receive(args.id, &request).await?;
    println!("Receipt recorded for {}; status {}", order.code, order.status);
    Ok(())
}
