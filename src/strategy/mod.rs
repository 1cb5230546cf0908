//! Statement generation strategies
//!
//! A strategy covers the whole pipeline from input files to finished
//! statements. The synchronous strategy reads everything into a
//! [`CsvReportSource`](crate::io::CsvReportSource); the asynchronous one
//! streams batches into per-ledger builders. Both produce identical output
//! for the same job.

use crate::cli::{OutputFormat, StrategyType};
use crate::io::write_statement_csv;
use crate::render::{write_statement_text, RenderOptions};
use crate::types::{LedgerError, LedgerId, LedgerReport, ReportQuery};
use log::error;
use std::io::Write;
use std::path::PathBuf;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncStatementStrategy, BatchConfig};
pub use sync::SyncStatementStrategy;

/// Everything a strategy needs to produce statements
#[derive(Debug, Clone)]
pub struct StatementJob {
    pub ledgers_path: PathBuf,
    pub transactions_path: PathBuf,
    pub query: ReportQuery,
    pub format: OutputFormat,
    pub render: RenderOptions,
}

pub trait StatementStrategy: Send + Sync {
    /// Build the statements selected by the job's query, sorted by ledger id
    ///
    /// With a single-ledger query, an unknown ledger or a failed statement is
    /// an error. Otherwise failed ledgers are logged and left out.
    fn statements(&self, job: &StatementJob) -> Result<Vec<LedgerReport>, LedgerError>;

    /// Build the statements and write them in the job's output format
    fn process(&self, job: &StatementJob, output: &mut dyn Write) -> Result<(), LedgerError> {
        let reports = self.statements(job)?;
        write_reports(&reports, job.format, job.render, output)
    }
}

pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn StatementStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncStatementStrategy),
        StrategyType::Async => Box::new(AsyncStatementStrategy::new(config.unwrap_or_default())),
    }
}

/// Write finished statements in the requested format
pub fn write_reports(
    reports: &[LedgerReport],
    format: OutputFormat,
    render: RenderOptions,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    match format {
        OutputFormat::Csv => write_statement_csv(reports, render.particulars, output),
        OutputFormat::Text => {
            for (index, report) in reports.iter().enumerate() {
                if index > 0 {
                    writeln!(output)?;
                }
                write_statement_text(report, render, output)?;
            }
            output.flush()?;
            Ok(())
        }
    }
}

/// Fail early when the query names a ledger that does not exist
pub(crate) fn check_requested_ledger<'a>(
    query: &ReportQuery,
    mut known: impl Iterator<Item = &'a str>,
) -> Result<(), LedgerError> {
    match query.ledger.as_deref() {
        Some(wanted) if !known.any(|id| id == wanted) => Err(LedgerError::unknown_ledger(wanted)),
        _ => Ok(()),
    }
}

/// Keep successful statements, applying the single-ledger error rule
pub(crate) fn collect_reports(
    outcomes: Vec<(LedgerId, Result<LedgerReport, LedgerError>)>,
    query: &ReportQuery,
) -> Result<Vec<LedgerReport>, LedgerError> {
    let mut reports = Vec::with_capacity(outcomes.len());

    for (ledger_id, outcome) in outcomes {
        match outcome {
            Ok(report) => reports.push(report),
            Err(e) if query.ledger.is_some() => return Err(e),
            Err(e) => error!("Statement for ledger '{}' failed: {}", ledger_id, e),
        }
    }

    Ok(reports)
}
