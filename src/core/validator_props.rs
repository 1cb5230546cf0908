//! Property-based tests for double-entry validation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::validator::{validate_balanced, JournalTotals};
use crate::types::{BalanceError, JournalLine};

/// Positive amount from 0.01 to 1,000,000.00.
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Debit lines balanced by two credits: the first debit, then the rest.
fn balanced_entry() -> impl Strategy<Value = Vec<JournalLine>> {
    prop::collection::vec(positive_amount(), 1..10).prop_map(|debits| {
        let rest: Decimal = debits[1..].iter().copied().sum();

        let mut lines: Vec<JournalLine> = debits
            .iter()
            .enumerate()
            .map(|(index, amount)| JournalLine::debit(&format!("DR{}", index), *amount))
            .collect();
        lines.push(JournalLine::credit("CR0", debits[0]));
        if !rest.is_zero() {
            lines.push(JournalLine::credit("CR1", rest));
        }
        lines
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A debit and a credit of the same amount always validate.
    #[test]
    fn prop_matching_pair_accepted(amount in positive_amount()) {
        let lines = vec![
            JournalLine::debit("RENT", amount),
            JournalLine::credit("CASH", amount),
        ];

        prop_assert_eq!(validate_balanced(&lines), Ok(()));
    }

    /// Any entry whose credits split its debit total validates.
    #[test]
    fn prop_balanced_entry_accepted(lines in balanced_entry()) {
        prop_assert_eq!(validate_balanced(&lines), Ok(()));

        let totals = JournalTotals::from_lines(&lines).unwrap();
        prop_assert_eq!(totals.difference(), Some(Decimal::ZERO));
    }

    /// Changing one side of a pair is reported as unbalanced with both sums.
    #[test]
    fn prop_perturbed_pair_unbalanced(
        debit in positive_amount(),
        credit in positive_amount(),
    ) {
        prop_assume!(debit != credit);
        let lines = vec![
            JournalLine::debit("RENT", debit),
            JournalLine::credit("CASH", credit),
        ];

        prop_assert_eq!(
            validate_balanced(&lines),
            Err(BalanceError::Unbalanced { total_debit: debit, total_credit: credit })
        );
    }

    /// Adding to any one line of a balanced entry unbalances it.
    #[test]
    fn prop_perturbed_entry_unbalanced(
        lines in balanced_entry(),
        pick in any::<prop::sample::Index>(),
        extra in positive_amount(),
    ) {
        let mut lines = lines;
        let index = pick.index(lines.len());
        if lines[index].debit.is_zero() {
            lines[index].credit += extra;
        } else {
            lines[index].debit += extra;
        }

        prop_assert!(
            matches!(validate_balanced(&lines), Err(BalanceError::Unbalanced { .. })),
            "Perturbed entry should be unbalanced: {:?}",
            lines
        );
    }

    /// Blank lines never validate, however many there are.
    #[test]
    fn prop_blank_lines_are_zero_amount(count in 0usize..10) {
        let lines = vec![JournalLine::default(); count];
        prop_assert_eq!(validate_balanced(&lines), Err(BalanceError::ZeroAmount));
    }

    /// Sums past the `Decimal` range are never accepted.
    #[test]
    fn prop_overflowing_totals_rejected(extra in positive_amount()) {
        let lines = vec![
            JournalLine::debit("A", Decimal::MAX),
            JournalLine::debit("B", extra),
            JournalLine::credit("C", Decimal::MAX),
        ];

        prop_assert_eq!(validate_balanced(&lines), Err(BalanceError::TotalOverflow));
    }
}
