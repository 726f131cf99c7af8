//! Smoke tests: every writer renders a flattened report into non-empty
//! output, and the empty-report guard fires before any writer runs.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use lunas_core::reports::{BalanceSheetReport, CompanyInfo, ReportRow, ReportSection};
use lunas_export::{ExportFormat, flatten, write_document};
use lunas_shared::types::Currency;

fn company() -> CompanyInfo {
    CompanyInfo {
        name: "PT Maju Bersama".to_string(),
        tax_id: "01.234.567.8-901.000".to_string(),
        address: "Jl. Sudirman 10, Jakarta".to_string(),
        phone: "+62 21 555 0101".to_string(),
        email: "finance@majubersama.co.id".to_string(),
    }
}

fn section(title: &str, rows: &[(&str, Decimal)]) -> ReportSection {
    ReportSection {
        title: title.to_string(),
        rows: rows
            .iter()
            .map(|(label, amount)| ReportRow {
                label: (*label).to_string(),
                amount: *amount,
            })
            .collect(),
        total: rows.iter().map(|(_, a)| *a).sum(),
    }
}

fn report() -> BalanceSheetReport {
    BalanceSheetReport {
        as_of: "2026-06-30".parse().unwrap(),
        currency: Currency::Idr,
        assets: section("Assets", &[("Kas", dec!(6000)), ("Persediaan", dec!(4000))]),
        liabilities: section("Liabilities", &[("Hutang Usaha", dec!(4000))]),
        equity: section("Equity", &[("Modal", dec!(6000))]),
        total_assets: dec!(10000),
        total_liabilities: dec!(4000),
        total_equity: dec!(6000),
    }
}

fn flattened() -> lunas_export::TableDocument {
    let generated_at = Utc.with_ymd_and_hms(2026, 7, 1, 9, 30, 0).unwrap();
    flatten::balance_sheet(&company(), &report(), generated_at).unwrap()
}

#[test]
fn csv_writer_produces_rows() {
    let mut out = Vec::new();
    write_document(ExportFormat::Csv, &mut out, &flattened()).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("PT Maju Bersama"));
    assert!(text.contains("Balance Sheet"));
    assert!(text.contains("Kas,\"6,000.00\""));
    assert!(text.contains("Total Assets,\"10,000.00\""));
    assert!(text.contains("BALANCED"));
    assert!(text.contains("Generated at 2026-07-01 09:30 UTC"));
}

#[test]
fn xlsx_writer_produces_a_workbook() {
    let mut out = Vec::new();
    write_document(ExportFormat::Xlsx, &mut out, &flattened()).unwrap();

    // XLSX files are zip archives: PK magic.
    assert!(out.len() > 4);
    assert_eq!(&out[0..2], b"PK");
}

#[test]
fn pdf_writer_produces_a_document() {
    let mut out = Vec::new();
    write_document(ExportFormat::Pdf, &mut out, &flattened()).unwrap();

    assert!(out.len() > 5);
    assert_eq!(&out[0..5], b"%PDF-");
}

#[test]
fn empty_report_never_reaches_a_writer() {
    let empty = BalanceSheetReport {
        as_of: "2026-06-30".parse().unwrap(),
        currency: Currency::Idr,
        assets: section("Assets", &[]),
        liabilities: section("Liabilities", &[]),
        equity: section("Equity", &[]),
        total_assets: Decimal::ZERO,
        total_liabilities: Decimal::ZERO,
        total_equity: Decimal::ZERO,
    };
    let generated_at = Utc.with_ymd_and_hms(2026, 7, 1, 9, 30, 0).unwrap();

    let result = flatten::balance_sheet(&company(), &empty, generated_at);
    assert!(matches!(result, Err(lunas_export::ExportError::EmptyReport)));
}

#[test]
fn extensions_match_formats() {
    assert_eq!(ExportFormat::Xlsx.extension(), "xlsx");
    assert_eq!(ExportFormat::Pdf.extension(), "pdf");
    assert_eq!(ExportFormat::Csv.extension(), "csv");
}
