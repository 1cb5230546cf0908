//! Synchronous CSV reader with iterator interface
//!
//! Streams posted lines from a transactions file one record at a time,
//! delegating format concerns to [`crate::io::csv_format`].
//!
//! ```no_run
//! use ledger_statement_engine::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("transactions.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(posted) => println!("{} {}", posted.ledger_id, posted.line.journal_id),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Record errors are yielded as `Err(ParseError)` carrying the file line

use crate::io::csv_format::{convert_posted_line, CsvPostedLineRecord};
use crate::types::{LedgerError, PostedLine};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Open a CSV file with the reader settings shared by every input
pub fn open_csv(path: &Path) -> Result<csv::Reader<File>, LedgerError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LedgerError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => LedgerError::from(e),
    })?;

    Ok(ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .buffer_capacity(8 * 1024)
        .from_reader(file))
}

/// Wrap a record error with its 1-based file line (header is line 1)
pub(crate) fn at_line(line: u64, error: LedgerError) -> LedgerError {
    match error {
        LedgerError::ParseError { line: Some(_), .. } => error,
        LedgerError::ParseError { line: None, message } => LedgerError::ParseError {
            line: Some(line),
            message,
        },
        other => LedgerError::ParseError {
            line: Some(line),
            message: other.to_string(),
        },
    }
}

/// Read and deserialize the next record, paired with the file line it starts on
///
/// Lines come from the record position, so quoted fields spanning several
/// lines are counted correctly.
pub(crate) fn next_record<R: Read, T: DeserializeOwned>(
    reader: &mut csv::Reader<R>,
    headers: &StringRecord,
    record: &mut StringRecord,
) -> Option<(u64, Result<T, LedgerError>)> {
    match reader.read_record(record) {
        Ok(false) => None,
        Ok(true) => {
            let line = record
                .position()
                .map_or_else(|| reader.position().line(), |pos| pos.line());
            Some((line, record.deserialize(Some(headers)).map_err(LedgerError::from)))
        }
        Err(e) => {
            let line = e
                .position()
                .map_or_else(|| reader.position().line(), |pos| pos.line());
            Some((line, Err(LedgerError::from(e))))
        }
    }
}

/// Every record of `reader`, deserialized and numbered by file line
pub(crate) fn numbered_records<R: Read, T: DeserializeOwned>(
    mut reader: csv::Reader<R>,
) -> Result<impl Iterator<Item = (u64, Result<T, LedgerError>)>, LedgerError> {
    let headers = reader.headers()?.clone();
    let mut record = StringRecord::new();

    Ok(std::iter::from_fn(move || {
        next_record(&mut reader, &headers, &mut record)
    }))
}

#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    headers: StringRecord,
    record: StringRecord,
}

impl SyncReader {
    pub fn new(path: &Path) -> Result<Self, LedgerError> {
        let mut reader = open_csv(path)?;
        let headers = reader.headers()?.clone();

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<PostedLine, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (line, record) = next_record::<_, CsvPostedLineRecord>(
            &mut self.reader,
            &self.headers,
            &mut self.record,
        )?;

        Some(
            record
                .and_then(convert_posted_line)
                .map_err(|e| at_line(line, e)),
        )
    }
}
