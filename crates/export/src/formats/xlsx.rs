//! Excel workbook writer.

use std::io::Write;

use rust_xlsxwriter::{Format, FormatAlign, Workbook, XlsxError};

use crate::WriteTable;
use crate::error::{ExportError, Result};
use crate::table::{Cell, TableDocument};

/// Spreadsheet format writer.
pub struct Xlsx;

const LABEL_COLUMN_WIDTH: u16 = 42;
const AMOUNT_COLUMN_WIDTH: u16 = 18;

impl WriteTable for Xlsx {
    fn write<W: Write>(mut w: W, doc: &TableDocument) -> Result<()> {
        let buffer = render(doc).map_err(|e| ExportError::Xlsx(e.to_string()))?;
        w.write_all(&buffer)?;
        Ok(())
    }
}

fn render(doc: &TableDocument) -> std::result::Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let company_format = Format::new().set_bold();
    let title_format = Format::new().set_bold().set_font_size(14);
    let header_format = Format::new().set_bold();
    let total_format = Format::new().set_bold().set_align(FormatAlign::Right);
    let amount_format = Format::new().set_align(FormatAlign::Right);

    let column_count = doc
        .sections
        .iter()
        .map(|s| s.columns.len().max(s.rows.first().map_or(0, Vec::len)))
        .max()
        .unwrap_or(2);
    worksheet.set_column_width(0, LABEL_COLUMN_WIDTH)?;
    for col in 1..column_count {
        worksheet.set_column_width(u16::try_from(col).unwrap_or(u16::MAX), AMOUNT_COLUMN_WIDTH)?;
    }

    let mut row: u32 = 0;

    worksheet.write_string_with_format(row, 0, doc.company_lines[0].as_str(), &company_format)?;
    row += 1;
    for line in &doc.company_lines[1..] {
        worksheet.write_string(row, 0, line.as_str())?;
        row += 1;
    }

    row += 1;
    worksheet.write_string_with_format(row, 0, doc.title.as_str(), &title_format)?;
    row += 1;
    worksheet.write_string(row, 0, doc.period.as_str())?;
    row += 1;

    for section in &doc.sections {
        row += 1;
        worksheet.write_string_with_format(row, 0, section.title.as_str(), &header_format)?;
        row += 1;

        if !section.columns.is_empty() {
            for (col, name) in section.columns.iter().enumerate() {
                let col = u16::try_from(col).unwrap_or(u16::MAX);
                worksheet.write_string_with_format(row, col, name.as_str(), &header_format)?;
            }
            row += 1;
        }

        for cells in &section.rows {
            write_cells(worksheet, row, cells, &amount_format, None)?;
            row += 1;
        }

        if let Some(total) = &section.total_row {
            write_cells(worksheet, row, total, &total_format, Some(&header_format))?;
            row += 1;
        }
    }

    row += 1;
    worksheet.write_string(row, 0, doc.footer())?;

    workbook.save_to_buffer()
}

fn write_cells(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    cells: &[Cell],
    numeric_format: &Format,
    text_format: Option<&Format>,
) -> std::result::Result<(), XlsxError> {
    for (col, cell) in cells.iter().enumerate() {
        let col = u16::try_from(col).unwrap_or(u16::MAX);
        let text = cell.render();
        if cell.numeric() {
            worksheet.write_string_with_format(row, col, text.as_str(), numeric_format)?;
        } else if let Some(format) = text_format {
            worksheet.write_string_with_format(row, col, text.as_str(), format)?;
        } else {
            worksheet.write_string(row, col, text)?;
        }
    }
    Ok(())
}
