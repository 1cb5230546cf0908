//! Error types for the ledger statement engine
//!
//! This module defines every error that can surface while loading ledger data,
//! computing statements, or validating journal entries.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **CSV Parsing Errors**: Malformed CSV, invalid amounts, dates or balance types
//! - **Upstream Errors**: A report or ledger fetch failed; no statement is produced
//! - **Arithmetic Errors**: Overflow while accumulating balances or totals
//! - **Journal Errors**: Draft editing rules and double-entry validation ([`BalanceError`])

use rust_decimal::Decimal;
use thiserror::Error;

/// Double-entry validation failures for a journal entry
///
/// These are resolved locally by the caller (re-render with a message) and are
/// never fatal to the process. Rules are evaluated in declaration order.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BalanceError {
    /// A debit or credit sum exceeds the range of `Decimal`
    #[error("Journal entry totals exceed the supported amount range")]
    TotalOverflow,

    /// Sum of debits differs from sum of credits
    #[error("Journal entry is unbalanced: total debit {total_debit}, total credit {total_credit}")]
    Unbalanced {
        /// Sum of all debit amounts
        total_debit: Decimal,
        /// Sum of all credit amounts
        total_credit: Decimal,
    },

    /// Both sums are zero, so the entry carries no value
    #[error("Journal entry must not be zero")]
    ZeroAmount,

    /// One or more lines lack a ledger or an amount
    ///
    /// Line numbers are 1-based positions in the entry.
    #[error("Every line must have a ledger and a non-zero debit or credit (lines: {})", format_lines(.lines))]
    IncompleteLine {
        /// Offending line numbers (1-based)
        lines: Vec<usize>,
    },
}

fn format_lines(lines: &[usize]) -> String {
    lines
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Main error type for the ledger statement engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// This is a recoverable error - the malformed record is skipped
    /// and processing continues with the next record.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Amount field could not be parsed as a decimal
    #[error("Invalid amount '{amount}' in {field}")]
    InvalidAmount {
        /// The raw amount text
        amount: String,
        /// Field the amount was read from
        field: String,
    },

    /// Amount field is negative
    ///
    /// Debit, credit and opening balance amounts are always non-negative;
    /// the side carries the sign.
    #[error("Negative amount {amount} in {field}")]
    NegativeAmount {
        /// The rejected amount
        amount: Decimal,
        /// Field the amount was read from
        field: String,
    },

    /// Date field is not a valid `YYYY-MM-DD` date
    #[error("Invalid date '{value}'")]
    InvalidDate {
        /// The raw date text
        value: String,
    },

    /// Balance side is neither Debit/Dr nor Credit/Cr
    #[error("Invalid balance type '{value}'")]
    InvalidBalanceType {
        /// The raw balance type text
        value: String,
    },

    /// A ledger reference does not match any known ledger
    #[error("Unknown ledger '{ledger}'")]
    UnknownLedger {
        /// The unknown ledger id
        ledger: String,
    },

    /// Arithmetic overflow while accumulating a balance or total
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// Journal drafts keep a minimum number of lines
    #[error("A journal entry must have at least {minimum} lines")]
    MinimumLines {
        /// Minimum line count
        minimum: usize,
    },

    /// Line index outside the journal draft
    #[error("Journal line {index} does not exist")]
    LineOutOfRange {
        /// The requested index
        index: usize,
    },

    /// Fetching the opening balance or the transactions failed
    ///
    /// The upstream message is passed through verbatim and no partial
    /// statement is produced.
    #[error("{message}")]
    UpstreamFetchFailure {
        /// Upstream error message
        message: String,
    },

    /// Serializing an output document failed
    #[error("Serialization error: {message}")]
    Serialization {
        /// Description of the failure
        message: String,
    },

    /// Journal entry failed double-entry validation
    #[error(transparent)]
    Balance(#[from] BalanceError),
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to LedgerError
impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(error: serde_json::Error) -> Self {
        LedgerError::Serialization {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str, field: &str) -> Self {
        LedgerError::InvalidAmount {
            amount: amount.to_string(),
            field: field.to_string(),
        }
    }

    /// Create a NegativeAmount error
    pub fn negative_amount(amount: Decimal, field: &str) -> Self {
        LedgerError::NegativeAmount {
            amount,
            field: field.to_string(),
        }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(value: &str) -> Self {
        LedgerError::InvalidDate {
            value: value.to_string(),
        }
    }

    /// Create an InvalidBalanceType error
    pub fn invalid_balance_type(value: &str) -> Self {
        LedgerError::InvalidBalanceType {
            value: value.to_string(),
        }
    }

    /// Create an UnknownLedger error
    pub fn unknown_ledger(ledger: &str) -> Self {
        LedgerError::UnknownLedger {
            ledger: ledger.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Wrap any upstream failure, keeping its message verbatim
    pub fn upstream(error: impl std::fmt::Display) -> Self {
        LedgerError::UpstreamFetchFailure {
            message: error.to_string(),
        }
    }
}
