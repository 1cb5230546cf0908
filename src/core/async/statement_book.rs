//! Thread-safe per-ledger statement state for async batch processing
//!
//! `AsyncStatementBook` keeps one [`StatementBuilder`] per ledger in a
//! `DashMap`, so tasks working on different ledgers proceed in parallel while
//! updates to the same ledger are serialized by the map's entry lock.
//!
//! # Ordering
//!
//! The book applies lines in the order it receives them. Callers must route
//! every line of a ledger through a single task, in file order, which is what
//! [`super::BatchProcessor`] does.

use crate::core::statement::StatementBuilder;
use crate::types::{DateRange, LedgerDetails, LedgerError, LedgerId, LedgerReport, PostedLine};
use dashmap::DashMap;

/// Statement progress of one ledger
#[derive(Debug)]
struct LedgerEntry {
    details: LedgerDetails,
    builder: StatementBuilder,
    /// Set on the first failed line; later lines are ignored
    failure: Option<LedgerError>,
}

/// Concurrent map of ledger id to in-progress statement
#[derive(Debug)]
pub struct AsyncStatementBook {
    entries: DashMap<LedgerId, LedgerEntry>,
}

impl AsyncStatementBook {
    /// Create a book with an opening-row-only statement per ledger
    pub fn new(ledgers: impl IntoIterator<Item = LedgerDetails>) -> Self {
        let entries = DashMap::new();
        for details in ledgers {
            let builder = StatementBuilder::new(details.opening);
            entries.insert(
                details.id.clone(),
                LedgerEntry {
                    details,
                    builder,
                    failure: None,
                },
            );
        }

        Self { entries }
    }

    /// Whether the ledger is tracked by this book
    pub fn contains(&self, ledger_id: &str) -> bool {
        self.entries.contains_key(ledger_id)
    }

    /// Number of tracked ledgers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply one posted line to its ledger's statement
    ///
    /// # Errors
    ///
    /// * `UnknownLedger` if the line's ledger is not tracked
    /// * `ArithmeticOverflow` if the running balance overflows; the ledger is
    ///   marked failed and its statement will not be produced
    pub fn apply(&self, posted: PostedLine) -> Result<(), LedgerError> {
        let mut entry = self
            .entries
            .get_mut(posted.ledger_id.as_str())
            .ok_or_else(|| LedgerError::unknown_ledger(&posted.ledger_id))?;

        if entry.failure.is_some() {
            return Ok(());
        }

        if let Err(e) = entry.builder.push(posted.line) {
            entry.failure = Some(e.clone());
            return Err(e);
        }

        Ok(())
    }

    /// Current signed running balance of a ledger
    pub fn balance(&self, ledger_id: &str) -> Option<rust_decimal::Decimal> {
        self.entries.get(ledger_id).map(|entry| entry.builder.balance())
    }

    /// Finish every statement, sorted by ledger id
    ///
    /// Failed ledgers yield their first error instead of a report. The book
    /// itself is left untouched.
    pub fn reports(&self, range: DateRange) -> Vec<(LedgerId, Result<LedgerReport, LedgerError>)> {
        let mut reports: Vec<(LedgerId, Result<LedgerReport, LedgerError>)> = self
            .entries
            .iter()
            .map(|entry| {
                let outcome = match &entry.failure {
                    Some(e) => Err(e.clone()),
                    None => Ok(LedgerReport {
                        ledger: entry.details.clone(),
                        range,
                        statement: entry.builder.clone().finish(),
                    }),
                };
                (entry.key().clone(), outcome)
            })
            .collect();

        reports.sort_by(|a, b| a.0.cmp(&b.0));
        reports
    }
}
