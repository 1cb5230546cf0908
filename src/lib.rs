//! Ledger Statement Engine Library
//! # Overview
//!
//! This library computes running-balance ledger statements and validates
//! double-entry journal entries, with a sync and an async strategy for
//! producing statements from CSV files.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (balances, lines, statements, journal entries)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::statement`] - Running balance computation
//!   - [`core::validator`] - Double-entry validation
//!   - [`core::journal`] - Journal entry drafting
//!   - [`core::report`] - Statement generation from a report source
//! - [`io`] - CSV input, statement output and journal submission
//! - [`render`] - Amount formatting and the printable statement
//! - [`strategy`] - Sync and async statement pipelines
//!
//! # Sign Convention
//!
//! Debit amounts are positive and Credit amounts negative. A ledger's running
//! balance is one signed decimal; its Dr/Cr tag is derived from the sign, with
//! zero shown as Dr.
//!
//! # Statement Rows
//!
//! Every statement starts with an opening pseudo-row carrying the ledger's
//! opening balance, followed by one row per posted line in input order:
//!
//! - `balance`: Running balance after the row
//! - `total_debit` / `total_credit`: Sums over all rows, opening included
//! - `closing_balance`: Balance after the last row

pub mod cli;
pub mod core;
pub mod io;
pub mod render;
pub mod strategy;
pub mod types;

pub use crate::core::{compute_ledger_statement, generate_statement, validate_balanced, JournalDraft};
pub use io::{write_statement_csv, CsvReportSource};
pub use types::{
    BalanceError, BalanceType, JournalDocument, JournalLine, LedgerDetails, LedgerError,
    LedgerReport, LedgerStatement, OpeningBalance, ReportRow, TransactionLine,
};
