//! PDF writer.
//!
//! A4 portrait with built-in Helvetica. Section headers are tinted by their
//! tone; everything else is plain black text over divider lines.

// Page layout runs on f32 millimetre coordinates, not money.
#![allow(clippy::float_arithmetic)]

use std::io::Write;

use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rgb};

use crate::WriteTable;
use crate::error::{ExportError, Result};
use crate::table::{Cell, SectionTone, TableDocument};

/// PDF format writer.
pub struct Pdf;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 15.0;
const MARGIN_RIGHT: f32 = 195.0;
const TOP_Y: f32 = 285.0;
const BOTTOM_Y: f32 = 20.0;
const LINE_STEP: f32 = 6.0;

impl WriteTable for Pdf {
    fn write<W: Write>(w: W, doc: &TableDocument) -> Result<()> {
        render(w, doc)
    }
}

fn tone_color(tone: SectionTone) -> Color {
    match tone {
        SectionTone::Neutral => Color::Rgb(Rgb::new(0.25, 0.25, 0.25, None)),
        SectionTone::Primary => Color::Rgb(Rgb::new(0.12, 0.29, 0.55, None)),
        SectionTone::Danger => Color::Rgb(Rgb::new(0.65, 0.16, 0.16, None)),
        SectionTone::Success => Color::Rgb(Rgb::new(0.13, 0.42, 0.22, None)),
    }
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

fn push_line(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    font_size: f32,
    x: f32,
    y: f32,
) {
    layer.use_text(text, font_size, Mm(x), Mm(y), font);
}

fn divider(layer: &PdfLayerReference, y: f32) {
    layer.add_line(printpdf::Line {
        points: vec![
            (printpdf::Point::new(Mm(MARGIN_LEFT), Mm(y)), false),
            (printpdf::Point::new(Mm(MARGIN_RIGHT), Mm(y)), false),
        ],
        is_closed: false,
    });
}

/// Column x positions for a row of up to six cells.
fn column_positions(count: usize) -> Vec<f32> {
    match count {
        0 | 1 => vec![MARGIN_LEFT],
        2 => vec![MARGIN_LEFT, 160.0],
        _ => {
            // First column wide, the rest spread evenly to the right margin.
            let first_width: f32 = 60.0;
            let rest = count - 1;
            #[allow(clippy::cast_precision_loss)]
            let step = (MARGIN_RIGHT - MARGIN_LEFT - first_width) / rest as f32;
            let mut xs = vec![MARGIN_LEFT];
            for i in 0..rest {
                #[allow(clippy::cast_precision_loss)]
                xs.push(MARGIN_LEFT + first_width + step * i as f32);
            }
            xs
        }
    }
}

struct Cursor {
    layer: PdfLayerReference,
    y: f32,
}

/// Moves the cursor down, starting a fresh page on overflow.
fn next_line(pdf: &printpdf::PdfDocumentReference, cursor: &mut Cursor, step: f32) {
    cursor.y -= step;
    if cursor.y < BOTTOM_Y {
        let (page, layer_index) = pdf.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        cursor.layer = pdf.get_page(page).get_layer(layer_index);
        cursor.y = TOP_Y;
    }
}

fn render<W: Write>(w: W, doc: &TableDocument) -> Result<()> {
    let (pdf, page, layer_index) = PdfDocument::new(
        doc.title.clone(),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let font = pdf
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let font_bold = pdf
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    let mut cursor = Cursor {
        layer: pdf.get_page(page).get_layer(layer_index),
        y: TOP_Y,
    };

    // Company header block.
    push_line(&cursor.layer, &font_bold, &doc.company_lines[0], 16.0, MARGIN_LEFT, cursor.y);
    next_line(&pdf, &mut cursor, 7.0);
    for line in &doc.company_lines[1..] {
        push_line(&cursor.layer, &font, line, 10.0, MARGIN_LEFT, cursor.y);
        next_line(&pdf, &mut cursor, 5.0);
    }

    // Title block.
    next_line(&pdf, &mut cursor, 6.0);
    push_line(&cursor.layer, &font_bold, &doc.title, 18.0, MARGIN_LEFT, cursor.y);
    next_line(&pdf, &mut cursor, 7.0);
    push_line(&cursor.layer, &font, &doc.period, 11.0, MARGIN_LEFT, cursor.y);
    next_line(&pdf, &mut cursor, 3.0);
    divider(&cursor.layer, cursor.y);
    next_line(&pdf, &mut cursor, 8.0);

    for section in &doc.sections {
        cursor.layer.set_fill_color(tone_color(section.tone));
        push_line(&cursor.layer, &font_bold, &section.title, 13.0, MARGIN_LEFT, cursor.y);
        cursor.layer.set_fill_color(black());
        next_line(&pdf, &mut cursor, LINE_STEP + 1.0);

        let width = section
            .columns
            .len()
            .max(section.rows.first().map_or(0, Vec::len));
        let xs = column_positions(width);

        if !section.columns.is_empty() {
            for (name, x) in section.columns.iter().zip(&xs) {
                push_line(&cursor.layer, &font_bold, name, 10.0, *x, cursor.y);
            }
            next_line(&pdf, &mut cursor, 3.5);
            divider(&cursor.layer, cursor.y);
            next_line(&pdf, &mut cursor, LINE_STEP);
        }

        for row in &section.rows {
            for (cell, x) in row.iter().zip(&xs) {
                push_line(&cursor.layer, &font, &cell.render(), 10.0, *x, cursor.y);
            }
            next_line(&pdf, &mut cursor, LINE_STEP);
        }

        if let Some(total) = &section.total_row {
            divider(&cursor.layer, cursor.y + 4.0);
            for (cell, x) in total.iter().zip(&xs) {
                push_line(&cursor.layer, &font_bold, &cell.render(), 10.0, *x, cursor.y);
            }
            next_line(&pdf, &mut cursor, LINE_STEP);
        }

        next_line(&pdf, &mut cursor, 4.0);
    }

    // Footer on the current page.
    push_line(&cursor.layer, &font, &doc.footer(), 9.0, MARGIN_LEFT, 12.0);

    let mut writer = std::io::BufWriter::new(w);
    pdf.save(&mut writer).map_err(|e| ExportError::Pdf(e.to_string()))?;
    writer.flush()?;
    Ok(())
}
