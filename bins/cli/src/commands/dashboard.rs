//! Summary cards across AP, AR, and stock.

use lunas_client::ApiClient;
use lunas_client::resources::ListQuery;
use lunas_core::settlement::{SettlementSide, summarize};
use lunas_core::stock;

use crate::render::money;

/// Renders the dashboard cards.
pub async fn run(api: &ApiClient) -> anyhow::Result<()> {
    // AP and AR are independent; fetch them concurrently.
    let settlements_api = api.settlements();
    let query = ListQuery::default();
    let (payables, receivables) = tokio::try_join!(
        settlements_api.list(SettlementSide::Payable, &query),
        settlements_api.list(SettlementSide::Receivable, &query),
    )?;
    let stock_page = api.stock().list(&ListQuery::default()).await?;

    let ap = summarize(&payables.data);
    let ar = summarize(&receivables.data);
    let stock = stock::summarize(&stock_page.data);

    println!("Accounts Payable");
    println!("  outstanding: {}  open records: {}", money(ap.total_balance), ap.open_count);
    println!("Accounts Receivable");
    println!("  outstanding: {}  open records: {}", money(ar.total_balance), ar.open_count);
    println!("Stock");
    println!(
        "  items: {}  valuation: {}  low stock: {}",
        stock.item_count,
        money(stock.total_value),
        stock.low_stock_count
    );

    Ok(())
}
