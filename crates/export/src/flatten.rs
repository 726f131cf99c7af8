//! Report flattening: report object + company metadata -> row matrix.
//!
//! Layout is identical for every report kind: company header rows, then a
//! title/period block, then per section a header row, a column-header row,
//! one row per line item and a totals row, then a generated-at footer.

use chrono::{DateTime, Utc};

use lunas_core::reports::{
    BalanceCheck, BalanceSheetReport, CompanyInfo, IncomeStatementReport, ReportSection,
    StockValuationReport,
};
use lunas_shared::types::money::format_amount;

use crate::error::{ExportError, Result};
use crate::table::{Cell, SectionTone, TableDocument, TableSection};

fn company_lines(company: &CompanyInfo) -> Vec<String> {
    vec![
        company.name.clone(),
        format!("NPWP: {}", company.tax_id),
        company.address.clone(),
        format!("{} | {}", company.phone, company.email),
    ]
}

fn amount_section(section: &ReportSection, tone: SectionTone, total_label: &str) -> TableSection {
    TableSection {
        title: section.title.clone(),
        tone,
        columns: vec!["Account".to_string(), "Amount".to_string()],
        rows: section
            .rows
            .iter()
            .map(|row| vec![Cell::Text(row.label.clone()), Cell::Money(row.amount)])
            .collect(),
        total_row: Some(vec![
            Cell::Text(total_label.to_string()),
            Cell::Money(section.total),
        ]),
    }
}

/// Flattens a balance sheet for export.
///
/// # Errors
///
/// Returns `ExportError::EmptyReport` when the report carries no line items,
/// before any writer is invoked.
pub fn balance_sheet(
    company: &CompanyInfo,
    report: &BalanceSheetReport,
    generated_at: DateTime<Utc>,
) -> Result<TableDocument> {
    let sections = vec![
        amount_section(&report.assets, SectionTone::Primary, "Total Assets"),
        amount_section(&report.liabilities, SectionTone::Danger, "Total Liabilities"),
        amount_section(&report.equity, SectionTone::Success, "Total Equity"),
        summary_section(vec![
            vec![
                Cell::Text("Liabilities + Equity".to_string()),
                Cell::Money(report.total_liabilities + report.total_equity),
            ],
            vec![
                Cell::Text("Balance Check".to_string()),
                Cell::Text(match report.balance_check() {
                    BalanceCheck::Balanced => "BALANCED".to_string(),
                    BalanceCheck::Unbalanced { difference } => {
                        format!("UNBALANCED ({})", format_amount(difference))
                    }
                }),
            ],
        ]),
    ];

    build(
        company,
        "Balance Sheet",
        format!("As of {}", report.as_of),
        sections,
        generated_at,
    )
}

/// Flattens an income statement for export.
///
/// # Errors
///
/// Returns `ExportError::EmptyReport` when the report carries no line items.
pub fn income_statement(
    company: &CompanyInfo,
    report: &IncomeStatementReport,
    generated_at: DateTime<Utc>,
) -> Result<TableDocument> {
    let mut summary_rows = vec![vec![
        Cell::Text("Net Income".to_string()),
        Cell::Money(report.net_income),
    ]];
    if let Some(margin) = report.gross_margin() {
        summary_rows.push(vec![
            Cell::Text("Net Margin".to_string()),
            Cell::Text(format!("{}%", margin.round_dp(1))),
        ]);
    }

    let sections = vec![
        amount_section(&report.revenue, SectionTone::Success, "Total Revenue"),
        amount_section(&report.expenses, SectionTone::Danger, "Total Expenses"),
        summary_section(summary_rows),
    ];

    build(
        company,
        "Income Statement",
        format!("Period {} to {}", report.period_start, report.period_end),
        sections,
        generated_at,
    )
}

/// Flattens a stock valuation report for export.
///
/// # Errors
///
/// Returns `ExportError::EmptyReport` when the report carries no items.
pub fn stock_valuation(
    company: &CompanyInfo,
    report: &StockValuationReport,
    generated_at: DateTime<Utc>,
) -> Result<TableDocument> {
    let section = TableSection {
        title: "Stock Valuation".to_string(),
        tone: SectionTone::Primary,
        columns: vec![
            "SKU".to_string(),
            "Item".to_string(),
            "Unit".to_string(),
            "Qty".to_string(),
            "Unit Cost".to_string(),
            "Value".to_string(),
        ],
        rows: report
            .items
            .iter()
            .map(|item| {
                vec![
                    Cell::Text(item.sku.clone()),
                    Cell::Text(item.name.clone()),
                    Cell::Text(item.unit.clone()),
                    Cell::Count(item.quantity),
                    Cell::Money(item.unit_cost),
                    Cell::Money(item.value),
                ]
            })
            .collect(),
        total_row: Some(vec![
            Cell::Text("Total".to_string()),
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Money(report.total_value),
        ]),
    };

    build(
        company,
        "Stock Valuation Report",
        format!("As of {}", report.as_of),
        vec![section],
        generated_at,
    )
}

fn summary_section(rows: Vec<Vec<Cell>>) -> TableSection {
    TableSection {
        title: "Summary".to_string(),
        tone: SectionTone::Neutral,
        columns: vec![],
        rows,
        total_row: None,
    }
}

fn build(
    company: &CompanyInfo,
    title: &str,
    period: String,
    sections: Vec<TableSection>,
    generated_at: DateTime<Utc>,
) -> Result<TableDocument> {
    // Summary lines are derived, not line items: an otherwise empty report
    // must still refuse to export.
    let item_rows: usize = sections
        .iter()
        .filter(|s| s.title != "Summary")
        .map(|s| s.rows.len())
        .sum();
    if item_rows == 0 {
        return Err(ExportError::EmptyReport);
    }

    Ok(TableDocument {
        company_lines: company_lines(company),
        title: title.to_string(),
        period,
        sections,
        generated_at,
    })
}
