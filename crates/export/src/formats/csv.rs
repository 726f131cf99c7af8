//! CSV writer.

use std::io::Write;

use crate::WriteTable;
use crate::error::Result;
use crate::table::{Cell, TableDocument};

/// CSV format writer.
pub struct Csv;

impl WriteTable for Csv {
    fn write<W: Write>(w: W, doc: &TableDocument) -> Result<()> {
        let mut csv = csv::WriterBuilder::new()
            .flexible(true)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(w);

        for line in &doc.company_lines {
            csv.write_record([line.as_str()])?;
        }
        csv.write_record([doc.title.as_str()])?;
        csv.write_record([doc.period.as_str()])?;

        for section in &doc.sections {
            // Blank separator line between blocks.
            csv.write_record([""])?;
            csv.write_record([section.title.as_str()])?;

            if !section.columns.is_empty() {
                csv.write_record(section.columns.iter().map(String::as_str))?;
            }

            for row in &section.rows {
                csv.write_record(row.iter().map(Cell::render))?;
            }

            if let Some(total) = &section.total_row {
                csv.write_record(total.iter().map(Cell::render))?;
            }
        }

        csv.write_record([""])?;
        csv.write_record([doc.footer().as_str()])?;

        csv.flush()?;
        Ok(())
    }
}
