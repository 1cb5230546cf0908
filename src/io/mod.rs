//! I/O module
//!
//! Handles CSV input, statement output and journal submission.
//!
//! # Components
//!
//! - `csv_format` - CSV record conversion and statement serialization
//! - `sync_reader` - Synchronous posted-line reader with iterator interface
//! - `async_reader` - Asynchronous posted-line reader with batch interface
//! - `file_source` - File-backed [`crate::core::ReportSource`]
//! - `journal_sink` - Journal line input and JSON [`crate::core::JournalSink`]

pub mod async_reader;
pub mod csv_format;
pub mod file_source;
pub mod journal_sink;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use csv_format::write_statement_csv;
pub use file_source::{load_ledgers, CsvReportSource};
pub use journal_sink::{read_journal_lines, JsonJournalSink};
pub use sync_reader::SyncReader;
