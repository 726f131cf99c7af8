//! Invoice list screen.

use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};

use lunas_client::ApiClient;
use lunas_client::resources::ListQuery;
use lunas_core::invoice::{InvoiceFilter, InvoiceKind, InvoiceStatus, summarize};
use lunas_shared::types::PageRequest;

use crate::render::{Align, Column, header, money, row, rule};

/// Arguments for `lunas invoices`.
#[derive(Debug, Args)]
pub struct InvoicesArgs {
    #[command(subcommand)]
    command: InvoicesCommand,
}

#[derive(Debug, Subcommand)]
enum InvoicesCommand {
    /// List invoices with filters and a totals row.
    List(ListArgs),
}

/// Invoice direction flag.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    /// Supplier invoices.
    Purchase,
    /// Customer invoices.
    Sales,
}

impl From<KindArg> for InvoiceKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Purchase => Self::Purchase,
            KindArg::Sales => Self::Sales,
        }
    }
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Restrict to purchase or sales invoices.
    #[arg(long, value_enum)]
    kind: Option<KindArg>,
    /// Server-side status filter.
    #[arg(long)]
    status: Option<InvoiceStatus>,
    /// Client-side text search over code and party.
    #[arg(long)]
    search: Option<String>,
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

const COLUMNS: &[Column] = &[
    ("CODE", 14, Align::Left),
    ("DATE", 10, Align::Left),
    ("PARTY", 24, Align::Left),
    ("STATUS", 9, Align::Left),
    ("SUBTOTAL", 14, Align::Right),
    ("TAX", 12, Align::Right),
    ("TOTAL", 14, Align::Right),
];

/// Runs the invoices screen.
pub async fn run(api: &ApiClient, args: InvoicesArgs) -> anyhow::Result<()> {
    let InvoicesCommand::List(args) = args.command;

    let query = ListQuery {
        page: Some(PageRequest {
            page: args.page,
            limit: args.limit,
        }),
        status: args.status.map(|s| s.to_string()),
        from_date: args.from,
        to_date: args.to,
    };
    let page = api.invoices().list(args.kind.map(Into::into), &query).await?;

    // The search box filters the fetched page locally.
    let filter = InvoiceFilter {
        text: args.search,
        ..Default::default()
    };
    let shown = filter.apply(&page.data);

    header(COLUMNS);
    for invoice in &shown {
        row(
            COLUMNS,
            &[
                invoice.code.clone(),
                invoice.date.to_string(),
                invoice.party.clone(),
                invoice.status.to_string(),
                money(invoice.subtotal),
                money(invoice.tax),
                money(invoice.total),
            ],
        );
    }

    let summary = summarize(&shown);
    rule(COLUMNS);
    row(
        COLUMNS,
        &[
            format!("{} rows", summary.count),
            String::new(),
            String::new(),
            String::new(),
            money(summary.subtotal),
            money(summary.tax),
            money(summary.total),
        ],
    );
    if summary.overdue_count > 0 {
        println!("! {} overdue", summary.overdue_count);
    }
    println!(
        "page {}/{} ({} total)",
        page.meta.page, page.meta.total_pages, page.meta.total
    );

    Ok(())
}
