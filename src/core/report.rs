//! Ledger report generation
//!
//! Fetches the ledger's opening balance and its transaction lines from a
//! [`ReportSource`], then runs the balance computation. A failed fetch yields
//! [`LedgerError::UpstreamFetchFailure`] with the upstream message and no
//! partial report; recovery is simply asking again.

use crate::core::statement::compute_ledger_statement;
use crate::core::traits::ReportSource;
use crate::types::{DateRange, LedgerError, LedgerReport};
use log::debug;

/// Generate the statement of one ledger
///
/// # Arguments
///
/// * `source` - Supplier of ledger details and lines
/// * `ledger_id` - Ledger to report
/// * `range` - Optional posting date range; the opening balance is the
///   ledger's stored opening balance regardless of the range
///
/// # Errors
///
/// * `UpstreamFetchFailure` if either fetch fails
/// * `ArithmeticOverflow` if the computation overflows
pub fn generate_statement(
    source: &dyn ReportSource,
    ledger_id: &str,
    range: DateRange,
) -> Result<LedgerReport, LedgerError> {
    let ledger = source
        .ledger_details(ledger_id)
        .map_err(into_upstream_failure)?;

    let lines = source
        .ledger_lines(ledger_id, &range)
        .map_err(into_upstream_failure)?;

    debug!(
        "Computing statement for ledger {} over {} lines",
        ledger_id,
        lines.len()
    );

    let statement = compute_ledger_statement(ledger.opening, &lines)?;

    Ok(LedgerReport {
        ledger,
        range,
        statement,
    })
}

fn into_upstream_failure(error: LedgerError) -> LedgerError {
    match error {
        LedgerError::UpstreamFetchFailure { .. } => error,
        other => LedgerError::upstream(other),
    }
}
