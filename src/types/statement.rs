//! Statement output types
//!
//! [`LedgerStatement`] is the data contract handed to every rendering surface.
//! [`LedgerReport`] adds the ledger identity and reporting period around it.

use super::balance::{BalanceType, LedgerDetails};
use super::query::DateRange;
use super::transaction::ReportRow;
use rust_decimal::Decimal;

/// Computed ledger statement
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerStatement {
    /// Opening pseudo-row followed by one row per transaction, in input order
    pub rows: Vec<ReportRow>,

    /// Sum of debit amounts over the opening row and every transaction row
    pub total_debit: Decimal,

    /// Sum of credit amounts over the opening row and every transaction row
    pub total_credit: Decimal,

    /// Signed running balance after the last row
    pub closing_balance: Decimal,
}

impl LedgerStatement {
    /// Magnitude of the closing balance
    pub fn final_balance(&self) -> Decimal {
        self.closing_balance.abs()
    }

    /// Side of the closing balance (zero is Dr)
    pub fn final_balance_type(&self) -> BalanceType {
        BalanceType::of(self.closing_balance)
    }

    /// Rows after the opening pseudo-row
    pub fn transaction_rows(&self) -> &[ReportRow] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

/// A statement together with the ledger and period it was produced for
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerReport {
    pub ledger: LedgerDetails,
    pub range: DateRange,
    pub statement: LedgerStatement,
}
