//! Report screens and file export.
//!
//! Company info and the report are independent fetches, so they run
//! concurrently. Exports render into a buffer first; the target file is only
//! written once rendering succeeded.

use std::path::PathBuf;

use chrono::{Datelike, NaiveDate, Utc};
use clap::{Args, Subcommand, ValueEnum};

use lunas_client::ApiClient;
use lunas_core::reports::{BalanceCheck, CompanyInfo, ReportSection};
use lunas_export::{ExportFormat, TableDocument, flatten, write_document};

use crate::render::money;

/// Arguments for `lunas reports`.
#[derive(Debug, Args)]
pub struct ReportsArgs {
    #[command(subcommand)]
    command: ReportsCommand,
}

#[derive(Debug, Subcommand)]
enum ReportsCommand {
    /// Balance sheet as of a date.
    BalanceSheet(BalanceSheetArgs),
    /// Income statement for a period.
    IncomeStatement(IncomeStatementArgs),
    /// Stock valuation as of a date.
    Stock(StockReportArgs),
}

/// Export format flag.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Excel workbook.
    Xlsx,
    /// PDF document.
    Pdf,
    /// Comma-separated values.
    Csv,
}

impl From<FormatArg> for ExportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Xlsx => Self::Xlsx,
            FormatArg::Pdf => Self::Pdf,
            FormatArg::Csv => Self::Csv,
        }
    }
}

#[derive(Debug, Args)]
struct ExportArgs {
    /// Write the report to a file instead of the terminal.
    #[arg(long, value_enum)]
    export: Option<FormatArg>,
    /// Output path. Defaults to a name derived from the report and date.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct BalanceSheetArgs {
    /// As-of date. Defaults to today.
    #[arg(long)]
    as_of: Option<NaiveDate>,
    #[command(flatten)]
    export: ExportArgs,
}

#[derive(Debug, Args)]
struct IncomeStatementArgs {
    /// Period start. Defaults to January 1 of the current year.
    #[arg(long)]
    from: Option<NaiveDate>,
    /// Period end. Defaults to today.
    #[arg(long)]
    to: Option<NaiveDate>,
    #[command(flatten)]
    export: ExportArgs,
}

#[derive(Debug, Args)]
struct StockReportArgs {
    /// As-of date. Defaults to today.
    #[arg(long)]
    as_of: Option<NaiveDate>,
    #[command(flatten)]
    export: ExportArgs,
}

/// Runs a report screen.
pub async fn run(api: &ApiClient, args: ReportsArgs) -> anyhow::Result<()> {
    match args.command {
        ReportsCommand::BalanceSheet(args) => balance_sheet(api, args).await,
        ReportsCommand::IncomeStatement(args) => income_statement(api, args).await,
        ReportsCommand::Stock(args) => stock(api, args).await,
    }
}

async fn balance_sheet(api: &ApiClient, args: BalanceSheetArgs) -> anyhow::Result<()> {
    let as_of = args.as_of.unwrap_or_else(|| Utc::now().date_naive());

    let company_api = api.company();
    let reports_api = api.reports();
    let (company, report) = tokio::try_join!(
        company_api.get(),
        reports_api.balance_sheet(as_of),
    )?;

    if let Some(format) = args.export.export {
        let doc = flatten::balance_sheet(&company, &report, Utc::now())?;
        return export(format.into(), args.export.output, &format!("balance_sheet_{as_of}"), &doc);
    }

    print_company(&company);
    println!("BALANCE SHEET  (as of {as_of})");
    println!();
    print_section(&report.assets);
    print_section(&report.liabilities);
    print_section(&report.equity);
    println!(
        "Liabilities + Equity  {}",
        money(report.total_liabilities + report.total_equity)
    );
    match report.balance_check() {
        BalanceCheck::Balanced => println!("Balance Check: BALANCED"),
        BalanceCheck::Unbalanced { difference } => {
            println!("Balance Check: UNBALANCED (off by {})", money(difference));
        }
    }
    Ok(())
}

async fn income_statement(api: &ApiClient, args: IncomeStatementArgs) -> anyhow::Result<()> {
    let today = Utc::now().date_naive();
    let from = args.from.unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today)
    });
    let to = args.to.unwrap_or(today);

    let company_api = api.company();
    let reports_api = api.reports();
    let (company, report) = tokio::try_join!(
        company_api.get(),
        reports_api.income_statement(from, to),
    )?;

    if let Some(format) = args.export.export {
        let doc = flatten::income_statement(&company, &report, Utc::now())?;
        return export(format.into(), args.export.output, &format!("income_statement_{from}_{to}"), &doc);
    }

    print_company(&company);
    println!("INCOME STATEMENT  ({from} to {to})");
    println!();
    print_section(&report.revenue);
    print_section(&report.expenses);
    println!("Net Income  {}", money(report.net_income));
    if let Some(margin) = report.gross_margin() {
        println!("Net Margin  {}%", margin.round_dp(1));
    }
    Ok(())
}

async fn stock(api: &ApiClient, args: StockReportArgs) -> anyhow::Result<()> {
    let as_of = args.as_of.unwrap_or_else(|| Utc::now().date_naive());

    let company_api = api.company();
    let reports_api = api.reports();
    let (company, report) = tokio::try_join!(
        company_api.get(),
        reports_api.stock_valuation(as_of),
    )?;

    if let Some(format) = args.export.export {
        let doc = flatten::stock_valuation(&company, &report, Utc::now())?;
        return export(format.into(), args.export.output, &format!("stock_valuation_{as_of}"), &doc);
    }

    print_company(&company);
    println!("STOCK VALUATION  (as of {as_of})");
    println!();
    for item in &report.items {
        println!(
            "{:<10}  {:<28}  {:>8} {}  {:>14}",
            item.sku,
            item.name,
            item.quantity,
            item.unit,
            money(item.value)
        );
    }
    println!("Total Value  {}", money(report.total_value));
    Ok(())
}

fn print_company(company: &CompanyInfo) {
    println!("{}", company.name);
    println!("NPWP: {}", company.tax_id);
    println!("{}", company.address);
    println!();
}

fn print_section(section: &ReportSection) {
    println!("{}", section.title.to_uppercase());
    for row in &section.rows {
        println!("  {:<36}  {:>16}", row.label, money(row.amount));
    }
    println!("  {:<36}  {:>16}", format!("Total {}", section.title), money(section.total));
    println!();
}

fn export(
    format: ExportFormat,
    output: Option<PathBuf>,
    stem: &str,
    doc: &TableDocument,
) -> anyhow::Result<()> {
    let path = output
        .unwrap_or_else(|| PathBuf::from(format!("{stem}.{}", format.extension())));

    // Render fully in memory; a writer failure must not leave a broken file.
    let mut buffer = Vec::new();
    write_document(format, &mut buffer, doc)?;
    std::fs::write(&path, &buffer)?;

    println!("Wrote {} ({} rows) to {}", doc.title, doc.row_count(), path.display());
    Ok(())
}
