//! Plain-text statement document
//!
//! Lays out a [`LedgerReport`] as a printable statement: a header with the
//! ledger name, period and opening balance, a column-aligned table of rows,
//! a totals row and the closing balance.

use super::amount::{format_amount, format_balance, NumberLocale};
use crate::types::{DateRange, LedgerError, LedgerReport, ReportRow, RowDate};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::io::Write;

/// Date format used in printed statements
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Date cell of the opening row
pub const OPENING_DATE_LABEL: &str = "O. Bal";

/// Presentation switches for rendered statements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub locale: NumberLocale,
    /// Show the opposite ledger of each line
    pub particulars: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            locale: NumberLocale::default(),
            particulars: true,
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Align {
    Left,
    Right,
}

/// Write one statement document
pub fn write_statement_text(
    report: &LedgerReport,
    options: RenderOptions,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let statement = &report.statement;
    let locale = options.locale;

    writeln!(output, "Ledger Statement for {}", report.ledger.name)?;
    writeln!(output, "Period: {}", describe_period(&report.range))?;
    writeln!(
        output,
        "Opening Balance: {}",
        format_balance(report.ledger.opening.signed(), locale)
    )?;
    writeln!(output)?;

    let mut header = vec!["Date", "Voucher"];
    let mut aligns = vec![Align::Left, Align::Left];
    if options.particulars {
        header.push("Particulars");
        aligns.push(Align::Left);
    }
    header.extend(["Narration", "Debit", "Credit", "Balance"]);
    aligns.extend([Align::Left, Align::Right, Align::Right, Align::Right]);

    let mut table: Vec<Vec<String>> = vec![header.iter().map(|h| h.to_string()).collect()];
    for row in &statement.rows {
        table.push(row_cells(row, options));
    }

    let mut totals = vec![String::new(), String::new()];
    if options.particulars {
        totals.push(String::new());
    }
    totals.extend([
        "Total".to_string(),
        format_amount(statement.total_debit, locale),
        format_amount(statement.total_credit, locale),
        String::new(),
    ]);
    table.push(totals);

    let widths = column_widths(&table);
    let rule = "-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1));
    let last = table.len() - 1;

    for (index, cells) in table.iter().enumerate() {
        if index == last {
            writeln!(output, "{}", rule)?;
        }
        writeln!(output, "{}", layout_line(cells, &widths, &aligns))?;
        if index == 0 {
            writeln!(output, "{}", rule)?;
        }
    }

    writeln!(output)?;
    writeln!(
        output,
        "Closing Balance: {}",
        format_balance(statement.closing_balance, locale)
    )?;

    Ok(())
}

fn row_cells(row: &ReportRow, options: RenderOptions) -> Vec<String> {
    let date = match row.date {
        RowDate::Opening => OPENING_DATE_LABEL.to_string(),
        RowDate::On(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
    };

    let mut cells = vec![date, voucher_label(row)];
    if options.particulars {
        cells.push(row.opponent_ledger_name.clone().unwrap_or_default());
    }
    cells.extend([
        row_narration(row).to_string(),
        amount_cell(row.debit, options.locale),
        amount_cell(row.credit, options.locale),
        format_balance(row.balance, options.locale),
    ]);
    cells
}

/// Voucher number followed by the voucher type initial, e.g. `JV-7 (J)`
pub fn voucher_label(row: &ReportRow) -> String {
    match row.voucher_type.chars().next() {
        Some(initial) => format!("{} ({})", row.voucher_no, initial.to_ascii_uppercase()),
        None => row.voucher_no.clone(),
    }
}

/// Line narration when present, otherwise the voucher narration
pub fn row_narration(row: &ReportRow) -> &str {
    row.line_narration
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or(&row.narration)
}

fn amount_cell(amount: Decimal, locale: NumberLocale) -> String {
    if amount.is_zero() {
        "-".to_string()
    } else {
        format_amount(amount, locale)
    }
}

fn describe_period(range: &DateRange) -> String {
    let show = |d: NaiveDate| d.format(DISPLAY_DATE_FORMAT).to_string();
    match (range.from, range.to) {
        (Some(from), Some(to)) => format!("{} to {}", show(from), show(to)),
        (Some(from), None) => format!("From {}", show(from)),
        (None, Some(to)) => format!("Up to {}", show(to)),
        (None, None) => "All dates".to_string(),
    }
}

fn column_widths(table: &[Vec<String>]) -> Vec<usize> {
    let columns = table.first().map_or(0, Vec::len);
    (0..columns)
        .map(|c| {
            table
                .iter()
                .map(|cells| cells[c].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn layout_line(cells: &[String], widths: &[usize], aligns: &[Align]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .zip(aligns)
        .map(|((cell, &width), &align)| match align {
            Align::Left => format!("{:<width$}", cell),
            Align::Right => format!("{:>width$}", cell),
        })
        .collect();

    padded.join("  ").trim_end().to_string()
}
