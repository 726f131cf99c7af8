//! Journal entry screens.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use uuid::Uuid;

use lunas_client::ApiClient;
use lunas_client::resources::ListQuery;
use lunas_shared::types::PageRequest;

use crate::render::{Align, Column, header, money, row, rule};

/// Arguments for `lunas journals`.
#[derive(Debug, Args)]
pub struct JournalsArgs {
    #[command(subcommand)]
    command: JournalsCommand,
}

#[derive(Debug, Subcommand)]
enum JournalsCommand {
    /// List journal entries.
    List(ListArgs),
    /// Show one entry with its lines.
    Show(ShowArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
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
struct ShowArgs {
    /// Entry ID.
    id: Uuid,
}

const LIST_COLUMNS: &[Column] = &[
    ("DATE", 10, Align::Left),
    ("REFERENCE", 14, Align::Left),
    ("DESCRIPTION", 34, Align::Left),
    ("DEBIT", 14, Align::Right),
    ("CREDIT", 14, Align::Right),
    ("", 12, Align::Left),
];

const LINE_COLUMNS: &[Column] = &[
    ("ACCOUNT", 8, Align::Left),
    ("NAME", 30, Align::Left),
    ("DEBIT", 14, Align::Right),
    ("CREDIT", 14, Align::Right),
];

/// Runs the journals screen.
pub async fn run(api: &ApiClient, args: JournalsArgs) -> anyhow::Result<()> {
    match args.command {
        JournalsCommand::List(args) => list(api, args).await,
        JournalsCommand::Show(args) => show(api, args).await,
    }
}

async fn list(api: &ApiClient, args: ListArgs) -> anyhow::Result<()> {
    let query = ListQuery {
        page: Some(PageRequest {
            page: args.page,
            limit: args.limit,
        }),
        status: None,
        from_date: args.from,
        to_date: args.to,
    };
    let page = api.journals().list(&query).await?;

    header(LIST_COLUMNS);
    for entry in &page.data {
        let (debit, credit) = entry.totals();
        row(
            LIST_COLUMNS,
            &[
                entry.date.to_string(),
                entry.reference.clone(),
                entry.description.clone(),
                money(debit),
                money(credit),
                if entry.is_balanced() {
                    String::new()
                } else {
                    "! UNBALANCED".to_string()
                },
            ],
        );
    }
    println!(
        "page {}/{} ({} total)",
        page.meta.page, page.meta.total_pages, page.meta.total
    );

    Ok(())
}

async fn show(api: &ApiClient, args: ShowArgs) -> anyhow::Result<()> {
    let entry = api.journals().get(args.id).await?;

    println!("{}  {}", entry.date, entry.reference);
    println!("{}", entry.description);
    println!();

    header(LINE_COLUMNS);
    for line in &entry.lines {
        row(
            LINE_COLUMNS,
            &[
                line.account_code.clone(),
                line.account_name.clone(),
                money(line.debit),
                money(line.credit),
            ],
        );
    }

    let (debit, credit) = entry.totals();
    rule(LINE_COLUMNS);
    row(
        LINE_COLUMNS,
        &[
            String::new(),
            "Total".to_string(),
            money(debit),
            money(credit),
        ],
    );
    if !entry.is_balanced() {
        println!("! UNBALANCED: debits do not equal credits");
    }

    Ok(())
}
