//! Fixed-width table rendering for list screens.

use rust_decimal::Decimal;

use lunas_shared::types::money::format_amount;

/// Column alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Left-aligned text.
    Left,
    /// Right-aligned numbers.
    Right,
}

/// A table column: header, width, alignment.
pub type Column = (&'static str, usize, Align);

fn pad(text: &str, width: usize, align: Align) -> String {
    let text = if text.chars().count() > width {
        let mut truncated: String = text.chars().take(width.saturating_sub(1)).collect();
        truncated.push('…');
        truncated
    } else {
        text.to_string()
    };
    match align {
        Align::Left => format!("{text:<width$}"),
        Align::Right => format!("{text:>width$}"),
    }
}

/// Prints a header row followed by a rule.
pub fn header(columns: &[Column]) {
    let line: Vec<String> = columns
        .iter()
        .map(|(name, width, align)| pad(name, *width, *align))
        .collect();
    println!("{}", line.join("  "));
    let total: usize = columns.iter().map(|(_, w, _)| w + 2).sum::<usize>() - 2;
    println!("{}", "-".repeat(total));
}

/// Prints one data row.
pub fn row(columns: &[Column], cells: &[String]) {
    let line: Vec<String> = columns
        .iter()
        .zip(cells)
        .map(|((_, width, align), cell)| pad(cell, *width, *align))
        .collect();
    println!("{}", line.join("  "));
}

/// Prints a rule before a totals row.
pub fn rule(columns: &[Column]) {
    let total: usize = columns.iter().map(|(_, w, _)| w + 2).sum::<usize>() - 2;
    println!("{}", "-".repeat(total));
}

/// Formats a money amount for a table cell.
#[must_use]
pub fn money(amount: Decimal) -> String {
    format_amount(amount)
}
