//! Asynchronous CSV reader with batch interface
//!
//! Reads posted lines from a transactions file in batches for the async
//! strategy.
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of PostedLine
//!                  ↓
//!           csv_format module
//!           (CsvPostedLineRecord, convert_posted_line)
//! ```
//!
//! Malformed records are logged with their line number and skipped, the
//! same records the sync reader yields as errors.

use crate::io::csv_format::{convert_posted_line, CsvPostedLineRecord};
use crate::io::sync_reader::at_line;
use crate::types::{LedgerError, PostedLine};
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;
use log::warn;

pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self { csv_reader }
    }

    /// Read up to `batch_size` valid posted lines
    ///
    /// An empty batch means the input is exhausted.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<PostedLine> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self
            .csv_reader
            .deserialize_with_pos::<CsvPostedLineRecord>();

        while batch.len() < batch_size {
            let Some((record, position)) = records.next().await else {
                break;
            };

            let converted = record
                .map_err(|e| LedgerError::ParseError {
                    line: None,
                    message: e.to_string(),
                })
                .and_then(convert_posted_line);

            match converted {
                Ok(posted) => batch.push(posted),
                Err(e) => warn!("Skipping record: {}", at_line(position.line(), e)),
            }
        }

        batch
    }
}
