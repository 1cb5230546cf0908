//! Batch processing with ledger-based partitioning for async statement building
//!
//! `BatchProcessor` partitions a batch of posted lines by ledger id and applies
//! each partition in its own tokio task. Lines of different ledgers are
//! processed concurrently; lines of one ledger stay in file order.
//!
//! # Architecture
//!
//! ```text
//! BatchProcessor
//!     └── Arc<AsyncStatementBook>  (shared per-ledger statements)
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use super::AsyncStatementBook;
use crate::types::{LedgerError, LedgerId, PostedLine};
use log::error;

/// Outcome of applying one posted line
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    pub ledger_id: LedgerId,
    pub journal_id: String,
    pub result: Result<(), LedgerError>,
}

/// Batch processor partitioning posted lines by ledger
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    book: Arc<AsyncStatementBook>,
}

impl BatchProcessor {
    pub fn new(book: Arc<AsyncStatementBook>) -> Self {
        Self { book }
    }

    /// Group a batch by ledger id, preserving per-ledger order
    pub fn partition_by_ledger(&self, batch: Vec<PostedLine>) -> HashMap<LedgerId, Vec<PostedLine>> {
        let mut ledger_batches: HashMap<LedgerId, Vec<PostedLine>> = HashMap::new();

        for posted in batch {
            ledger_batches
                .entry(posted.ledger_id.clone())
                .or_default()
                .push(posted);
        }

        ledger_batches
    }

    /// Apply one ledger's lines sequentially
    pub async fn process_ledger_lines(&self, lines: Vec<PostedLine>) -> Vec<ProcessingResult> {
        let mut results = Vec::with_capacity(lines.len());

        for posted in lines {
            let ledger_id = posted.ledger_id.clone();
            let journal_id = posted.line.journal_id.clone();
            let result = self.book.apply(posted);
            results.push(ProcessingResult {
                ledger_id,
                journal_id,
                result,
            });
        }

        results
    }

    /// Process a batch, one task per ledger
    ///
    /// Returns once every task has finished. A panicked task is logged and
    /// its results are lost.
    pub async fn process_batch(&self, batch: Vec<PostedLine>) -> Vec<ProcessingResult> {
        let ledger_batches = self.partition_by_ledger(batch);

        let mut tasks = Vec::with_capacity(ledger_batches.len());
        for (_ledger_id, lines) in ledger_batches {
            let processor = self.clone();
            tasks.push(tokio::spawn(async move {
                processor.process_ledger_lines(lines).await
            }));
        }

        let mut results = Vec::new();
        for task in tasks {
            match task.await {
                Ok(ledger_results) => results.extend(ledger_results),
                Err(e) => error!("Ledger task panicked: {:?}", e),
            }
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BalanceType, DateRange, LedgerDetails, OpeningBalance, TransactionLine};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn book(ids: &[&str]) -> Arc<AsyncStatementBook> {
        Arc::new(AsyncStatementBook::new(ids.iter().map(|id| LedgerDetails {
            id: id.to_string(),
            name: id.to_string(),
            opening: OpeningBalance::new(Decimal::ZERO, BalanceType::Dr).unwrap(),
        })))
    }

    fn posted(ledger_id: &str, journal_id: &str, debit: i64, credit: i64) -> PostedLine {
        PostedLine {
            ledger_id: ledger_id.to_string(),
            line: TransactionLine {
                journal_id: journal_id.to_string(),
                date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
                voucher_type: "Journal".to_string(),
                voucher_no: journal_id.to_string(),
                narration: String::new(),
                line_narration: None,
                debit: Decimal::new(debit, 0),
                credit: Decimal::new(credit, 0),
                opponent_ledger_name: None,
            },
        }
    }

    #[test]
    fn test_processor_shares_book() {
        let shared = book(&["CASH"]);
        let processor = BatchProcessor::new(Arc::clone(&shared));
        let _clone = processor.clone();

        assert!(Arc::strong_count(&shared) >= 3);
    }

    #[test]
    fn test_partition_by_ledger_empty_batch() {
        let processor = BatchProcessor::new(book(&[]));
        assert!(processor.partition_by_ledger(vec![]).is_empty());
    }

    #[test]
    fn test_partition_by_ledger_preserves_order() {
        let processor = BatchProcessor::new(book(&["CASH", "BANK"]));

        let batch = vec![
            posted("CASH", "J1", 10, 0),
            posted("BANK", "J1", 0, 10),
            posted("CASH", "J2", 0, 5),
            posted("CASH", "J3", 7, 0),
        ];

        let partitioned = processor.partition_by_ledger(batch);
        assert_eq!(partitioned.len(), 2);

        let cash: Vec<&str> = partitioned["CASH"]
            .iter()
            .map(|p| p.line.journal_id.as_str())
            .collect();
        assert_eq!(cash, vec!["J1", "J2", "J3"]);
        assert_eq!(partitioned["BANK"].len(), 1);
    }

    #[tokio::test]
    async fn test_process_batch_applies_all_lines() {
        let shared = book(&["CASH", "BANK"]);
        let processor = BatchProcessor::new(Arc::clone(&shared));

        let results = processor
            .process_batch(vec![
                posted("CASH", "J1", 100, 0),
                posted("BANK", "J1", 0, 100),
                posted("CASH", "J2", 0, 30),
            ])
            .await;

        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.result.is_ok()));
        assert_eq!(shared.balance("CASH"), Some(Decimal::new(70, 0)));
        assert_eq!(shared.balance("BANK"), Some(Decimal::new(-100, 0)));
    }

    #[tokio::test]
    async fn test_process_batch_reports_unknown_ledger() {
        let shared = book(&["CASH"]);
        let processor = BatchProcessor::new(Arc::clone(&shared));

        let results = processor
            .process_batch(vec![posted("CASH", "J1", 5, 0), posted("GHOST", "J1", 0, 5)])
            .await;

        let failed: Vec<&ProcessingResult> =
            results.iter().filter(|r| r.result.is_err()).collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].ledger_id, "GHOST");
        assert_eq!(
            failed[0].result,
            Err(LedgerError::unknown_ledger("GHOST"))
        );
    }

    #[tokio::test]
    async fn test_sequential_batches_keep_ledger_order() {
        let shared = book(&["CASH"]);
        let processor = BatchProcessor::new(Arc::clone(&shared));

        processor.process_batch(vec![posted("CASH", "J1", 50, 0)]).await;
        processor.process_batch(vec![posted("CASH", "J2", 0, 80)]).await;

        let reports = shared.reports(DateRange::default());
        let statement = &reports[0].1.as_ref().unwrap().statement;

        let balances: Vec<Decimal> = statement.rows.iter().map(|r| r.balance).collect();
        assert_eq!(
            balances,
            vec![Decimal::ZERO, Decimal::new(50, 0), Decimal::new(-30, 0)]
        );
    }
}
