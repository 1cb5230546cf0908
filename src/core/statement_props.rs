//! Property-based tests for running-balance computation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::statement::compute_ledger_statement;
use crate::types::{BalanceType, OpeningBalance, RowDate, TransactionLine};
use chrono::{Days, NaiveDate};

/// Non-negative amount from 0.00 to 1,000,000.00.
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Positive amount from 0.01 to 1,000,000.00.
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn side() -> impl Strategy<Value = BalanceType> {
    prop_oneof![Just(BalanceType::Dr), Just(BalanceType::Cr)]
}

/// One-sided postings: each line is either a debit or a credit.
fn one_sided_postings() -> impl Strategy<Value = Vec<(BalanceType, Decimal)>> {
    prop::collection::vec((side(), positive_amount()), 0..40)
}

/// Lines dated one day apart, in the order given.
fn lines(postings: &[(BalanceType, Decimal)]) -> Vec<TransactionLine> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    postings
        .iter()
        .enumerate()
        .map(|(index, (side, amount))| {
            let (debit, credit) = match side {
                BalanceType::Dr => (*amount, Decimal::ZERO),
                BalanceType::Cr => (Decimal::ZERO, *amount),
            };
            TransactionLine {
                journal_id: format!("J{}", index),
                date: start + Days::new(index as u64),
                voucher_type: "Journal".to_string(),
                voucher_no: format!("JV-{}", index),
                narration: String::new(),
                line_narration: None,
                debit,
                credit,
                opponent_ledger_name: None,
            }
        })
        .collect()
}

/// Signed running balance after each line, starting from `opening`.
fn prefix_balances(opening: Decimal, lines: &[TransactionLine]) -> Vec<Decimal> {
    lines
        .iter()
        .scan(opening, |running, line| {
            *running = *running + line.debit - line.credit;
            Some(*running)
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// An opening balance with no transactions closes at the opening amount.
    #[test]
    fn prop_opening_only_closes_at_opening(opening_amount in amount(), opening_side in side()) {
        let opening = OpeningBalance::new(opening_amount, opening_side).unwrap();
        let statement = compute_ledger_statement(opening, &[]).unwrap();

        let expected_side = if opening_amount.is_zero() { BalanceType::Dr } else { opening_side };
        prop_assert_eq!(statement.rows.len(), 1);
        prop_assert_eq!(statement.final_balance(), opening_amount);
        prop_assert_eq!(statement.final_balance_type(), expected_side);
    }

    /// With one-sided lines, the totals difference is the closing balance.
    #[test]
    fn prop_totals_difference_is_closing_balance(
        opening_amount in amount(),
        opening_side in side(),
        postings in one_sided_postings(),
    ) {
        let opening = OpeningBalance::new(opening_amount, opening_side).unwrap();
        let statement = compute_ledger_statement(opening, &lines(&postings)).unwrap();

        prop_assert_eq!(
            statement.total_debit - statement.total_credit,
            statement.closing_balance
        );
        prop_assert_eq!(
            statement.closing_balance,
            statement.rows.last().map(|row| row.balance).unwrap()
        );
        prop_assert_eq!(
            statement.final_balance_type(),
            BalanceType::of(statement.closing_balance)
        );
    }

    /// Identical input gives identical output.
    #[test]
    fn prop_computation_is_idempotent(
        opening_amount in amount(),
        opening_side in side(),
        postings in one_sided_postings(),
    ) {
        let opening = OpeningBalance::new(opening_amount, opening_side).unwrap();
        let lines = lines(&postings);

        let first = compute_ledger_statement(opening, &lines).unwrap();
        let second = compute_ledger_statement(opening, &lines).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Rows follow input order; reversed input gives the reversed prefix sums.
    #[test]
    fn prop_rows_follow_input_order(
        opening_amount in amount(),
        opening_side in side(),
        postings in one_sided_postings(),
    ) {
        let opening = OpeningBalance::new(opening_amount, opening_side).unwrap();
        let forward = lines(&postings);
        let reversed: Vec<TransactionLine> = forward.iter().rev().cloned().collect();

        let statement = compute_ledger_statement(opening, &reversed).unwrap();
        let rows = &statement.rows[1..];

        let dates: Vec<RowDate> = rows.iter().map(|row| row.date).collect();
        let expected_dates: Vec<RowDate> = reversed.iter().map(|line| RowDate::On(line.date)).collect();
        prop_assert_eq!(dates, expected_dates);

        let balances: Vec<Decimal> = rows.iter().map(|row| row.balance).collect();
        prop_assert_eq!(balances, prefix_balances(opening.signed(), &reversed));

        let forward_statement = compute_ledger_statement(opening, &forward).unwrap();
        prop_assert_eq!(forward_statement.closing_balance, statement.closing_balance);
    }

    /// Two postings with different signed effects swap their first balance
    /// when reversed.
    #[test]
    fn prop_reversal_changes_intermediate_balance(
        opening_amount in amount(),
        opening_side in side(),
        first in (side(), positive_amount()),
        second in (side(), positive_amount()),
    ) {
        let first_effect = first.0.signed(first.1);
        let second_effect = second.0.signed(second.1);
        prop_assume!(first_effect != second_effect);

        let opening = OpeningBalance::new(opening_amount, opening_side).unwrap();
        let forward = lines(&[first, second]);
        let reversed: Vec<TransactionLine> = forward.iter().rev().cloned().collect();

        let forward_statement = compute_ledger_statement(opening, &forward).unwrap();
        let reversed_statement = compute_ledger_statement(opening, &reversed).unwrap();

        prop_assert_ne!(forward_statement.rows[1].balance, reversed_statement.rows[1].balance);
        prop_assert_eq!(forward_statement.rows[2].balance, reversed_statement.rows[2].balance);
    }
}
