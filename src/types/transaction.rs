//! Transaction-related types for the ledger statement engine
//!
//! This module defines the posted transaction lines fed into the balance
//! computation and the report rows it produces.

use super::balance::{BalanceType, LedgerId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;

/// Voucher type of the opening pseudo-row
pub const OPENING_VOUCHER_TYPE: &str = "Opening";

/// Voucher number of the opening pseudo-row
pub const OPENING_VOUCHER_NO: &str = "OPN";

/// Narration of the opening pseudo-row
pub const OPENING_NARRATION: &str = "Opening Balance carried forward";

/// One posted journal line as seen from a single ledger
///
/// Exactly one of `debit`/`credit` is expected to be non-zero. The producer
/// enforces this; the balance computation tolerates violations.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionLine {
    /// Journal (voucher) this line belongs to
    pub journal_id: String,

    /// Posting date
    pub date: NaiveDate,

    /// Voucher type, e.g. `Journal`, `Payment`
    pub voucher_type: String,

    /// Voucher number issued by the backend
    pub voucher_no: String,

    /// Voucher-level narration
    pub narration: String,

    /// Line-level narration, if any
    pub line_narration: Option<String>,

    /// Non-negative debit amount
    pub debit: Decimal,

    /// Non-negative credit amount
    pub credit: Decimal,

    /// Name of the ledger on the other side of the voucher ("particulars")
    pub opponent_ledger_name: Option<String>,
}

/// A transaction line tagged with the ledger it was posted to
///
/// This is the unit the processing strategies stream from a posted lines file.
#[derive(Debug, Clone, PartialEq)]
pub struct PostedLine {
    pub ledger_id: LedgerId,
    pub line: TransactionLine,
}

/// Date column of a report row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowDate {
    /// Sentinel for the opening-balance pseudo-row
    Opening,
    /// Posting date of a transaction row
    On(NaiveDate),
}

impl fmt::Display for RowDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowDate::Opening => Ok(()),
            RowDate::On(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

/// One row of a ledger statement
///
/// Carries the transaction fields plus the running balance after the row.
/// The Dr/Cr tag is derived from `balance` on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub date: RowDate,
    pub journal_id: String,
    pub voucher_type: String,
    pub voucher_no: String,
    pub narration: String,
    pub line_narration: Option<String>,
    pub opponent_ledger_name: Option<String>,
    pub debit: Decimal,
    pub credit: Decimal,

    /// Signed running balance after this row (Debit positive)
    pub balance: Decimal,
}

impl ReportRow {
    /// Dr when the running balance is non-negative, otherwise Cr
    pub fn balance_type(&self) -> BalanceType {
        BalanceType::of(self.balance)
    }

    /// Whether this is the opening-balance pseudo-row
    pub fn is_opening(&self) -> bool {
        self.date == RowDate::Opening
    }
}
