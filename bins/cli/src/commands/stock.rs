//! Stock list screen.

use clap::{Args, Subcommand};

use lunas_client::ApiClient;
use lunas_client::resources::ListQuery;
use lunas_core::stock::summarize;
use lunas_shared::types::PageRequest;

use crate::render::{Align, Column, header, money, row, rule};

/// Arguments for `lunas stock`.
#[derive(Debug, Args)]
pub struct StockArgs {
    #[command(subcommand)]
    command: StockCommand,
}

#[derive(Debug, Subcommand)]
enum StockCommand {
    /// List stock items with valuation totals.
    List(ListArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Show only items at or below their reorder level.
    #[arg(long)]
    low: bool,
    /// Page number.
    #[arg(long, default_value_t = 1)]
    page: u32,
    /// Rows per page.
    #[arg(long, default_value_t = 100)]
    limit: u32,
}

const COLUMNS: &[Column] = &[
    ("SKU", 10, Align::Left),
    ("ITEM", 28, Align::Left),
    ("UNIT", 5, Align::Left),
    ("QTY", 10, Align::Right),
    ("UNIT COST", 14, Align::Right),
    ("VALUE", 16, Align::Right),
    ("", 4, Align::Left),
];

/// Runs the stock screen.
pub async fn run(api: &ApiClient, args: StockArgs) -> anyhow::Result<()> {
    let StockCommand::List(args) = args.command;

    let query = ListQuery {
        page: Some(PageRequest {
            page: args.page,
            limit: args.limit,
        }),
        status: None,
        from_date: None,
        to_date: None,
    };
    let page = api.stock().list(&query).await?;

    let shown: Vec<_> = page
        .data
        .iter()
        .filter(|item| !args.low || item.low_stock())
        .cloned()
        .collect();

    header(COLUMNS);
    for item in &shown {
        row(
            COLUMNS,
            &[
                item.sku.clone(),
                item.name.clone(),
                item.unit.clone(),
                item.quantity.to_string(),
                money(item.unit_cost),
                money(item.value),
                if item.low_stock() { "LOW".to_string() } else { String::new() },
            ],
        );
    }

    let summary = summarize(&shown);
    rule(COLUMNS);
    row(
        COLUMNS,
        &[
            format!("{} items", summary.item_count),
            String::new(),
            String::new(),
            summary.total_quantity.to_string(),
            String::new(),
            money(summary.total_value),
            String::new(),
        ],
    );
    if summary.low_stock_count > 0 {
        println!("! {} item(s) at or below reorder level", summary.low_stock_count);
    }

    Ok(())
}
