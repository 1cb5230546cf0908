//! CSV format handling for ledger data and statement output
//!
//! This module centralizes all CSV format concerns:
//! - Record structures for ledgers, posted lines and journal lines
//! - Conversion from CSV records to domain types
//! - Statement output serialization
//!
//! All functions are pure (no file I/O) for easy testing.
//!
//! # Input formats
//!
//! ```text
//! ledgers.csv:       id,name,opening_balance,ob_type
//! transactions.csv:  ledger_id,journal_id,date,voucher_type,voucher_no,narration,
//!                    line_narration,debit,credit,opponent_ledger
//! journal lines:     ledger_id,ledger_name,debit,credit,line_narration
//! ```
//!
//! Blank amounts read as zero. Amounts are never negative; the column or the
//! balance type carries the side.

use crate::render::amount::{format_amount, NumberLocale};
use crate::render::text::row_narration;
use crate::types::{
    BalanceType, JournalLine, LedgerDetails, LedgerError, LedgerReport, OpeningBalance,
    PostedLine, TransactionLine,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Date format of input files
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Header of the CSV statement export
pub const STATEMENT_HEADER: [&str; 10] = [
    "ledger",
    "date",
    "voucher_type",
    "voucher_no",
    "particulars",
    "narration",
    "debit",
    "credit",
    "balance",
    "balance_type",
];

/// One row of the ledger master file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvLedgerRecord {
    pub id: String,
    pub name: String,
    pub opening_balance: Option<String>,
    pub ob_type: Option<String>,
}

/// One posted line of the transactions file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvPostedLineRecord {
    pub ledger_id: String,
    pub journal_id: String,
    pub date: String,
    pub voucher_type: String,
    pub voucher_no: String,
    pub narration: Option<String>,
    pub line_narration: Option<String>,
    pub debit: Option<String>,
    pub credit: Option<String>,
    pub opponent_ledger: Option<String>,
}

/// One line of a journal entry file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvJournalLineRecord {
    pub ledger_id: Option<String>,
    pub ledger_name: Option<String>,
    pub debit: Option<String>,
    pub credit: Option<String>,
    pub line_narration: Option<String>,
}

/// Parse a non-negative amount; blank is zero
pub fn parse_amount(raw: Option<&str>, field: &str) -> Result<Decimal, LedgerError> {
    let text = match raw.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => return Ok(Decimal::ZERO),
    };

    let amount = Decimal::from_str(text).map_err(|_| LedgerError::invalid_amount(text, field))?;
    if amount.is_zero() {
        return Ok(Decimal::ZERO);
    }
    if amount.is_sign_negative() {
        return Err(LedgerError::negative_amount(amount, field));
    }

    Ok(amount)
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, LedgerError> {
    NaiveDate::parse_from_str(raw.trim(), INPUT_DATE_FORMAT)
        .map_err(|_| LedgerError::invalid_date(raw))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn convert_ledger_record(record: CsvLedgerRecord) -> Result<LedgerDetails, LedgerError> {
    let amount = parse_amount(record.opening_balance.as_deref(), "opening_balance")?;
    let side = match non_blank(record.ob_type) {
        Some(text) => BalanceType::from_str(&text)?,
        None => BalanceType::Dr,
    };

    Ok(LedgerDetails {
        id: record.id,
        name: record.name,
        opening: OpeningBalance::new(amount, side)?,
    })
}

pub fn convert_posted_line(record: CsvPostedLineRecord) -> Result<PostedLine, LedgerError> {
    let line = TransactionLine {
        date: parse_date(&record.date)?,
        debit: parse_amount(record.debit.as_deref(), "debit")?,
        credit: parse_amount(record.credit.as_deref(), "credit")?,
        journal_id: record.journal_id,
        voucher_type: record.voucher_type,
        voucher_no: record.voucher_no,
        narration: record.narration.unwrap_or_default(),
        line_narration: non_blank(record.line_narration),
        opponent_ledger_name: non_blank(record.opponent_ledger),
    };

    Ok(PostedLine {
        ledger_id: record.ledger_id,
        line,
    })
}

pub fn convert_journal_line(record: CsvJournalLineRecord) -> Result<JournalLine, LedgerError> {
    Ok(JournalLine {
        debit: parse_amount(record.debit.as_deref(), "debit")?,
        credit: parse_amount(record.credit.as_deref(), "credit")?,
        ledger_id: non_blank(record.ledger_id),
        ledger_name: record.ledger_name.unwrap_or_default(),
        line_narration: non_blank(record.line_narration),
    })
}

/// Write statements as CSV, one block of rows per ledger
///
/// Each block ends with a closing row carrying the totals and the final
/// balance. Amounts use two decimals without grouping; the balance column is
/// the magnitude and `balance_type` its side.
pub fn write_statement_csv(
    reports: &[LedgerReport],
    particulars: bool,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);
    let amount = |value: Decimal| format_amount(value, NumberLocale::Plain);

    writer.write_record(STATEMENT_HEADER)?;

    for report in reports {
        let ledger = report.ledger.id.as_str();
        let statement = &report.statement;

        for row in &statement.rows {
            let particulars = if particulars {
                row.opponent_ledger_name.as_deref().unwrap_or_default()
            } else {
                ""
            };

            writer.write_record([
                ledger,
                row.date.to_string().as_str(),
                row.voucher_type.as_str(),
                row.voucher_no.as_str(),
                particulars,
                row_narration(row),
                amount(row.debit).as_str(),
                amount(row.credit).as_str(),
                amount(row.balance.abs()).as_str(),
                row.balance_type().as_str(),
            ])?;
        }

        writer.write_record([
            ledger,
            "",
            "Closing",
            "",
            "",
            "Total",
            amount(statement.total_debit).as_str(),
            amount(statement.total_credit).as_str(),
            amount(statement.final_balance()).as_str(),
            statement.final_balance_type().as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
