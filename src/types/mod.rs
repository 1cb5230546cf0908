//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `balance`: Dr/Cr tag, opening balances and ledger metadata
//! - `transaction`: Posted transaction lines and report rows
//! - `statement`: Computed statements handed to rendering
//! - `journal`: Journal entry lines and the submission document
//! - `query`: Ledger and date-range selection
//! - `error`: Error types for the engine

pub mod balance;
pub mod error;
pub mod journal;
pub mod query;
pub mod statement;
pub mod transaction;

pub use balance::{BalanceType, LedgerDetails, LedgerId, OpeningBalance};
pub use error::{BalanceError, LedgerError};
pub use journal::{JournalDocument, JournalLine, JournalReceipt};
pub use query::{DateRange, ReportQuery};
pub use statement::{LedgerReport, LedgerStatement};
pub use transaction::{PostedLine, ReportRow, RowDate, TransactionLine};
