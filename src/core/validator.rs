//! Double-entry balance validation
//!
//! Client-side check run before a journal entry is submitted. The backend
//! re-validates independently; this only gives immediate feedback.

use crate::types::{BalanceError, JournalLine};
use rust_decimal::Decimal;

/// Debit and credit sums of a set of journal lines
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JournalTotals {
    pub total_debit: Decimal,
    pub total_credit: Decimal,
}

impl JournalTotals {
    /// Sum both sides over `lines`
    ///
    /// Returns [`BalanceError::TotalOverflow`] if either sum leaves the
    /// `Decimal` range.
    pub fn from_lines(lines: &[JournalLine]) -> Result<Self, BalanceError> {
        lines.iter().try_fold(JournalTotals::default(), |acc, line| {
            Ok(JournalTotals {
                total_debit: acc
                    .total_debit
                    .checked_add(line.debit)
                    .ok_or(BalanceError::TotalOverflow)?,
                total_credit: acc
                    .total_credit
                    .checked_add(line.credit)
                    .ok_or(BalanceError::TotalOverflow)?,
            })
        })
    }

    /// Debit minus credit, `None` if the difference overflows
    pub fn difference(&self) -> Option<Decimal> {
        self.total_debit.checked_sub(self.total_credit)
    }

    pub fn is_balanced(&self) -> bool {
        self.total_debit == self.total_credit
    }

    pub fn is_zero(&self) -> bool {
        self.total_debit.is_zero() && self.total_credit.is_zero()
    }
}

/// Validate that a journal entry is balanced, non-zero and complete
///
/// Rules are evaluated in this order:
/// 1. [`BalanceError::TotalOverflow`] when a sum cannot be represented, then
///    [`BalanceError::Unbalanced`] when the debit and credit sums differ
/// 2. [`BalanceError::ZeroAmount`] when both sums are zero
/// 3. [`BalanceError::IncompleteLine`] when any line lacks a ledger or has
///    no amount on either side; every offending line is listed
///
/// # Examples
///
/// ```
/// use ledger_statement_engine::core::validator::validate_balanced;
/// use ledger_statement_engine::types::{BalanceError, JournalLine};
/// use rust_decimal::Decimal;
///
/// let lines = vec![
///     JournalLine::debit("RENT", Decimal::new(100, 0)),
///     JournalLine::credit("CASH", Decimal::new(100, 0)),
/// ];
/// assert_eq!(validate_balanced(&lines), Ok(()));
///
/// let blank = vec![JournalLine::default()];
/// assert_eq!(validate_balanced(&blank), Err(BalanceError::ZeroAmount));
/// ```
pub fn validate_balanced(lines: &[JournalLine]) -> Result<(), BalanceError> {
    let totals = JournalTotals::from_lines(lines)?;

    if !totals.is_balanced() {
        return Err(BalanceError::Unbalanced {
            total_debit: totals.total_debit,
            total_credit: totals.total_credit,
        });
    }

    if totals.is_zero() {
        return Err(BalanceError::ZeroAmount);
    }

    let incomplete: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.is_complete())
        .map(|(index, _)| index + 1)
        .collect();

    if !incomplete.is_empty() {
        return Err(BalanceError::IncompleteLine { lines: incomplete });
    }

    Ok(())
}
