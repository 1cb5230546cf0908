//! Running-balance computation
//!
//! This module turns an opening balance plus an ordered list of transaction
//! lines into a [`LedgerStatement`]: one row per line carrying the running
//! balance, independent debit/credit totals, and the closing balance.
//!
//! The computation is pure and deterministic. It never sorts its input;
//! chronological order is the caller's responsibility.
//!
//! # Sign convention
//!
//! Debit amounts are positive and Credit amounts negative. The running total
//! is a single signed [`Decimal`]; the Dr/Cr tag is derived from it.
//!
//! # Example
//!
//! ```
//! use ledger_statement_engine::core::statement::compute_ledger_statement;
//! use ledger_statement_engine::types::{BalanceType, OpeningBalance};
//! use rust_decimal::Decimal;
//!
//! let opening = OpeningBalance::new(Decimal::new(1000, 0), BalanceType::Dr).unwrap();
//! let statement = compute_ledger_statement(opening, &[]).unwrap();
//!
//! assert_eq!(statement.rows.len(), 1);
//! assert_eq!(statement.final_balance(), Decimal::new(1000, 0));
//! assert_eq!(statement.final_balance_type(), BalanceType::Dr);
//! ```

use crate::types::transaction::{OPENING_NARRATION, OPENING_VOUCHER_NO, OPENING_VOUCHER_TYPE};
use crate::types::{
    BalanceType, LedgerError, LedgerStatement, OpeningBalance, ReportRow, RowDate,
    TransactionLine,
};
use rust_decimal::Decimal;

/// Journal id used for the opening pseudo-row
pub const OPENING_JOURNAL_ID: &str = "OPENING";

/// Signed running total with independent debit/credit sums
///
/// All arithmetic is checked; an overflow is reported instead of panicking.
#[derive(Debug, Clone, PartialEq)]
pub struct RunningBalance {
    balance: Decimal,
    total_debit: Decimal,
    total_credit: Decimal,
}

impl RunningBalance {
    /// Seed the running total from an opening balance
    ///
    /// The opening amount counts towards the total of its own side.
    pub fn open(opening: OpeningBalance) -> Self {
        let (total_debit, total_credit) = match opening.side {
            BalanceType::Dr => (opening.amount, Decimal::ZERO),
            BalanceType::Cr => (Decimal::ZERO, opening.amount),
        };

        RunningBalance {
            balance: opening.signed(),
            total_debit,
            total_credit,
        }
    }

    /// Apply one line: `balance += debit - credit`
    ///
    /// A line with both sides non-zero is not rejected; both amounts are
    /// applied and summed.
    ///
    /// # Returns
    ///
    /// The running balance after the line
    pub fn apply(&mut self, debit: Decimal, credit: Decimal) -> Result<Decimal, LedgerError> {
        let balance = self
            .balance
            .checked_add(debit)
            .and_then(|b| b.checked_sub(credit))
            .ok_or_else(|| LedgerError::arithmetic_overflow("running balance"))?;

        let total_debit = self
            .total_debit
            .checked_add(debit)
            .ok_or_else(|| LedgerError::arithmetic_overflow("total debit"))?;

        let total_credit = self
            .total_credit
            .checked_add(credit)
            .ok_or_else(|| LedgerError::arithmetic_overflow("total credit"))?;

        self.balance = balance;
        self.total_debit = total_debit;
        self.total_credit = total_credit;

        Ok(balance)
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn total_debit(&self) -> Decimal {
        self.total_debit
    }

    pub fn total_credit(&self) -> Decimal {
        self.total_credit
    }
}

/// Incremental statement construction
///
/// Emits the opening pseudo-row on creation and one row per pushed line.
/// Streaming callers push lines as they arrive; [`compute_ledger_statement`]
/// is the one-shot form of the same arithmetic.
#[derive(Debug, Clone)]
pub struct StatementBuilder {
    running: RunningBalance,
    rows: Vec<ReportRow>,
}

impl StatementBuilder {
    /// Start a statement with its opening pseudo-row
    pub fn new(opening: OpeningBalance) -> Self {
        let running = RunningBalance::open(opening);

        let opening_row = ReportRow {
            date: RowDate::Opening,
            journal_id: OPENING_JOURNAL_ID.to_string(),
            voucher_type: OPENING_VOUCHER_TYPE.to_string(),
            voucher_no: OPENING_VOUCHER_NO.to_string(),
            narration: OPENING_NARRATION.to_string(),
            line_narration: None,
            opponent_ledger_name: None,
            debit: running.total_debit(),
            credit: running.total_credit(),
            balance: running.balance(),
        };

        StatementBuilder {
            running,
            rows: vec![opening_row],
        }
    }

    /// Append a transaction row with its running balance
    pub fn push(&mut self, line: TransactionLine) -> Result<(), LedgerError> {
        let balance = self.running.apply(line.debit, line.credit)?;

        self.rows.push(ReportRow {
            date: RowDate::On(line.date),
            journal_id: line.journal_id,
            voucher_type: line.voucher_type,
            voucher_no: line.voucher_no,
            narration: line.narration,
            line_narration: line.line_narration,
            opponent_ledger_name: line.opponent_ledger_name,
            debit: line.debit,
            credit: line.credit,
            balance,
        });

        Ok(())
    }

    /// Current signed running balance
    pub fn balance(&self) -> Decimal {
        self.running.balance()
    }

    /// Number of rows so far, including the opening row
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false: the opening row is present from creation
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn finish(self) -> LedgerStatement {
        LedgerStatement {
            total_debit: self.running.total_debit(),
            total_credit: self.running.total_credit(),
            closing_balance: self.running.balance(),
            rows: self.rows,
        }
    }
}

/// Compute a ledger statement from an opening balance and ordered lines
///
/// # Arguments
///
/// * `opening` - Carried-forward balance; becomes the first row
/// * `transactions` - Lines in chronological order (not re-sorted)
///
/// # Returns
///
/// * `Ok(LedgerStatement)` with `transactions.len() + 1` rows
/// * `Err(LedgerError::ArithmeticOverflow)` if a sum exceeds `Decimal`'s range
pub fn compute_ledger_statement(
    opening: OpeningBalance,
    transactions: &[TransactionLine],
) -> Result<LedgerStatement, LedgerError> {
    let mut builder = StatementBuilder::new(opening);
    for line in transactions {
        builder.push(line.clone())?;
    }
    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn opening(amount: i64, side: BalanceType) -> OpeningBalance {
        OpeningBalance::new(Decimal::new(amount, 0), side).unwrap()
    }

    fn line(day: u32, debit: i64, credit: i64) -> TransactionLine {
        TransactionLine {
            journal_id: format!("J{}", day),
            date: NaiveDate::from_ymd_opt(2024, 4, day).unwrap(),
            voucher_type: "Journal".to_string(),
            voucher_no: format!("JV-{}", day),
            narration: "test".to_string(),
            line_narration: None,
            debit: Decimal::new(debit, 0),
            credit: Decimal::new(credit, 0),
            opponent_ledger_name: Some("Cash".to_string()),
        }
    }

    #[test]
    fn test_opening_debit_without_transactions() {
        let statement = compute_ledger_statement(opening(1000, BalanceType::Dr), &[]).unwrap();

        assert_eq!(statement.rows.len(), 1);
        assert_eq!(statement.rows[0].balance, Decimal::new(1000, 0));
        assert_eq!(statement.rows[0].balance_type(), BalanceType::Dr);
        assert_eq!(statement.total_debit, Decimal::new(1000, 0));
        assert_eq!(statement.total_credit, Decimal::ZERO);
        assert_eq!(statement.final_balance(), Decimal::new(1000, 0));
        assert_eq!(statement.final_balance_type(), BalanceType::Dr);
    }

    #[test]
    fn test_credit_opening_crosses_to_debit() {
        let statement =
            compute_ledger_statement(opening(500, BalanceType::Cr), &[line(1, 700, 0)]).unwrap();

        assert_eq!(statement.rows[0].balance, Decimal::new(-500, 0));
        assert_eq!(statement.rows[0].balance_type(), BalanceType::Cr);
        assert_eq!(statement.rows[0].credit, Decimal::new(500, 0));
        assert_eq!(statement.rows[0].debit, Decimal::ZERO);
        assert_eq!(statement.rows[1].balance, Decimal::new(200, 0));
        assert_eq!(statement.final_balance(), Decimal::new(200, 0));
        assert_eq!(statement.final_balance_type(), BalanceType::Dr);
    }

    #[test]
    fn test_zero_opening_and_no_transactions_is_debit() {
        let statement = compute_ledger_statement(OpeningBalance::zero(), &[]).unwrap();

        assert_eq!(statement.final_balance(), Decimal::ZERO);
        assert_eq!(statement.final_balance_type(), BalanceType::Dr);
    }

    #[rstest]
    #[case::debit(0, BalanceType::Dr)]
    #[case::credit(0, BalanceType::Cr)]
    #[case::debit_amount(250, BalanceType::Dr)]
    #[case::credit_amount(250, BalanceType::Cr)]
    fn test_empty_transactions_keep_opening(#[case] amount: i64, #[case] side: BalanceType) {
        let statement = compute_ledger_statement(opening(amount, side), &[]).unwrap();

        assert_eq!(statement.final_balance(), Decimal::new(amount, 0));
        if amount > 0 {
            assert_eq!(statement.final_balance_type(), side);
        } else {
            assert_eq!(statement.final_balance_type(), BalanceType::Dr);
        }
    }

    #[test]
    fn test_running_balance_per_row() {
        let lines = vec![line(1, 300, 0), line(2, 0, 800), line(3, 100, 0)];
        let statement = compute_ledger_statement(opening(200, BalanceType::Dr), &lines).unwrap();

        let balances: Vec<Decimal> = statement.rows.iter().map(|r| r.balance).collect();
        assert_eq!(
            balances,
            vec![
                Decimal::new(200, 0),
                Decimal::new(500, 0),
                Decimal::new(-300, 0),
                Decimal::new(-200, 0),
            ]
        );
        assert_eq!(statement.rows[2].balance_type(), BalanceType::Cr);
        assert_eq!(statement.total_debit, Decimal::new(600, 0));
        assert_eq!(statement.total_credit, Decimal::new(800, 0));
        assert_eq!(statement.final_balance(), Decimal::new(200, 0));
        assert_eq!(statement.final_balance_type(), BalanceType::Cr);
    }

    #[test]
    fn test_totals_match_closing_balance_when_lines_are_one_sided() {
        let lines = vec![line(1, 120, 0), line(2, 0, 45), line(3, 0, 600), line(4, 5, 0)];
        let statement = compute_ledger_statement(opening(80, BalanceType::Cr), &lines).unwrap();

        assert_eq!(
            statement.total_debit - statement.total_credit,
            statement.closing_balance
        );
    }

    #[test]
    fn test_two_sided_line_is_tolerated() {
        let statement =
            compute_ledger_statement(opening(0, BalanceType::Dr), &[line(1, 100, 40)]).unwrap();

        assert_eq!(statement.rows[1].balance, Decimal::new(60, 0));
        assert_eq!(statement.total_debit, Decimal::new(100, 0));
        assert_eq!(statement.total_credit, Decimal::new(40, 0));
    }

    #[test]
    fn test_rows_keep_transaction_fields_and_order() {
        let lines = vec![line(9, 10, 0), line(2, 0, 5)];
        let statement = compute_ledger_statement(opening(0, BalanceType::Dr), &lines).unwrap();

        let opening_row = &statement.rows[0];
        assert!(opening_row.is_opening());
        assert_eq!(opening_row.voucher_type, "Opening");
        assert_eq!(opening_row.voucher_no, "OPN");
        assert_eq!(opening_row.narration, "Opening Balance carried forward");

        assert_eq!(statement.rows[1].voucher_no, "JV-9");
        assert_eq!(statement.rows[2].voucher_no, "JV-2");
        assert_eq!(statement.rows[1].opponent_ledger_name.as_deref(), Some("Cash"));
    }

    #[test]
    fn test_computation_is_deterministic() {
        let lines = vec![line(1, 10, 0), line(2, 0, 3), line(3, 7, 0)];
        let first = compute_ledger_statement(opening(5, BalanceType::Cr), &lines).unwrap();
        let second = compute_ledger_statement(opening(5, BalanceType::Cr), &lines).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_input_order_is_not_sorted() {
        let lines = vec![line(1, 100, 0), line(2, 0, 30), line(3, 0, 50)];
        let mut reversed = lines.clone();
        reversed.reverse();

        let forward = compute_ledger_statement(opening(0, BalanceType::Dr), &lines).unwrap();
        let backward = compute_ledger_statement(opening(0, BalanceType::Dr), &reversed).unwrap();

        let forward_mid: Vec<Decimal> = forward.rows[1..3].iter().map(|r| r.balance).collect();
        let backward_mid: Vec<Decimal> = backward.rows[1..3].iter().map(|r| r.balance).collect();
        assert_ne!(forward_mid, backward_mid);
        assert_eq!(forward.closing_balance, backward.closing_balance);
    }

    #[test]
    fn test_overflow_is_reported() {
        let opening = OpeningBalance::new(Decimal::MAX, BalanceType::Dr).unwrap();
        let mut running = RunningBalance::open(opening);

        let result = running.apply(Decimal::ONE, Decimal::ZERO);
        assert!(matches!(result, Err(LedgerError::ArithmeticOverflow { .. })));
        assert_eq!(running.balance(), Decimal::MAX);
    }

    #[test]
    fn test_builder_matches_one_shot_computation() {
        let lines = vec![line(1, 40, 0), line(2, 0, 90)];
        let mut builder = StatementBuilder::new(opening(10, BalanceType::Dr));
        for l in lines.clone() {
            builder.push(l).unwrap();
        }
        assert_eq!(builder.len(), 3);
        assert_eq!(builder.balance(), Decimal::new(-40, 0));

        let streamed = builder.finish();
        let one_shot = compute_ledger_statement(opening(10, BalanceType::Dr), &lines).unwrap();
        assert_eq!(streamed, one_shot);
    }
}
