//! Asynchronous batch statement strategy
//!
//! Streams the transactions file in batches and applies each batch through a
//! [`BatchProcessor`], which runs one task per ledger.
//!
//! # Architecture
//!
//! ```text
//! AsyncStatementStrategy
//!     ├── BatchConfig (batch_size, max_concurrent_batches)
//!     ├── AsyncReader (batch CSV reading)
//!     ├── BatchProcessor (ledger partitioning + tasks)
//!     └── AsyncStatementBook (DashMap of per-ledger builders)
//! ```
//!
//! Batches are processed one after another so a ledger whose lines span
//! several batches still sees them in file order. Within a batch, ledgers
//! are processed in parallel.

use crate::core::r#async::{AsyncStatementBook, BatchProcessor};
use crate::io::async_reader::AsyncReader;
use crate::io::load_ledgers;
use crate::strategy::{check_requested_ledger, collect_reports, StatementJob, StatementStrategy};
use crate::types::{LedgerError, LedgerReport};
use log::{debug, info, warn};
use std::io::ErrorKind;
use std::sync::Arc;

/// Batch sizing and runtime parallelism
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Posted lines read per batch
    pub batch_size: usize,

    /// Worker threads of the tokio runtime
    pub max_concurrent_batches: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_concurrent_batches: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Zero values fall back to the defaults with a warning
    pub fn new(batch_size: usize, max_concurrent_batches: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            warn!(
                "Invalid batch_size ({}), using default ({})",
                batch_size, default.batch_size
            );
            default.batch_size
        } else {
            batch_size
        };

        let max_concurrent_batches = if max_concurrent_batches == 0 {
            warn!(
                "Invalid max_concurrent_batches ({}), using default ({})",
                max_concurrent_batches, default.max_concurrent_batches
            );
            default.max_concurrent_batches
        } else {
            max_concurrent_batches
        };

        Self {
            batch_size,
            max_concurrent_batches,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AsyncStatementStrategy {
    config: BatchConfig,
}

impl AsyncStatementStrategy {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }
}

impl StatementStrategy for AsyncStatementStrategy {
    fn statements(&self, job: &StatementJob) -> Result<Vec<LedgerReport>, LedgerError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent_batches)
            .build()?;

        runtime.block_on(async {
            let ledgers = load_ledgers(&job.ledgers_path)?;
            check_requested_ledger(&job.query, ledgers.iter().map(|l| l.id.as_str()))?;

            let book = Arc::new(AsyncStatementBook::new(
                ledgers
                    .into_iter()
                    .filter(|ledger| job.query.includes_ledger(&ledger.id)),
            ));
            let processor = BatchProcessor::new(Arc::clone(&book));

            let file = tokio::fs::File::open(&job.transactions_path)
                .await
                .map_err(|e| match e.kind() {
                    ErrorKind::NotFound => LedgerError::FileNotFound {
                        path: job.transactions_path.display().to_string(),
                    },
                    _ => LedgerError::from(e),
                })?;
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
            let mut reader = AsyncReader::new(compat_file);

            let mut batches = 0usize;
            loop {
                let mut batch = reader.read_batch(self.config.batch_size).await;
                if batch.is_empty() {
                    break;
                }
                batches += 1;

                batch.retain(|posted| job.query.matches(posted));

                for processed in processor.process_batch(batch).await {
                    if let Err(e @ LedgerError::UnknownLedger { .. }) = processed.result {
                        warn!(
                            "Line of journal {} skipped: {}",
                            processed.journal_id, e
                        );
                    }
                }
            }
            debug!("Processed {} batches", batches);

            let outcomes = book.reports(job.query.range);
            info!("Generated {} statements", outcomes.len());
            collect_reports(outcomes, &job.query)
        })
    }
}
