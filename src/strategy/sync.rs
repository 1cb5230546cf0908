//! Synchronous statement strategy
//!
//! Loads both input files into a [`CsvReportSource`] and generates one
//! statement per selected ledger through [`generate_statement`], in ledger id
//! order.

use crate::core::generate_statement;
use crate::core::traits::ReportSource;
use crate::io::CsvReportSource;
use crate::strategy::{check_requested_ledger, collect_reports, StatementJob, StatementStrategy};
use crate::types::LedgerReport;
use crate::types::LedgerError;
use log::info;

#[derive(Debug, Clone, Copy)]
pub struct SyncStatementStrategy;

impl StatementStrategy for SyncStatementStrategy {
    fn statements(&self, job: &StatementJob) -> Result<Vec<LedgerReport>, LedgerError> {
        let source = CsvReportSource::open(&job.ledgers_path, &job.transactions_path)?;

        let ledger_ids = source.ledger_ids();
        check_requested_ledger(&job.query, ledger_ids.iter().map(String::as_str))?;

        let outcomes: Vec<_> = ledger_ids
            .into_iter()
            .filter(|id| job.query.includes_ledger(id))
            .map(|id| {
                let outcome = generate_statement(&source, &id, job.query.range);
                (id, outcome)
            })
            .collect();

        info!("Generated {} statements", outcomes.len());
        collect_reports(outcomes, &job.query)
    }
}
