//! Core business logic module
//!
//! - `statement` - Running balance computation for one ledger
//! - `validator` - Double-entry balance validation
//! - `journal` - Journal entry drafting
//! - `report` - Statement generation from a report source
//! - `traits` - Seams for report data and journal submission
//! - `async` - Concurrent statement building

pub mod r#async;
pub mod journal;
pub mod report;
pub mod statement;
pub mod traits;
pub mod validator;

#[cfg(test)]
mod statement_props;
#[cfg(test)]
mod validator_props;

pub use journal::JournalDraft;
pub use r#async::{AsyncStatementBook, BatchProcessor};
pub use report::generate_statement;
pub use statement::{compute_ledger_statement, RunningBalance, StatementBuilder};
pub use traits::{JournalSink, ReportSource};
pub use validator::{validate_balanced, JournalTotals};
