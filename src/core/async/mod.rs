//! Asynchronous statement building
//!
//! Concurrent counterparts of the statement builder used by the async
//! strategy:
//!
//! - **AsyncStatementBook**: Per-ledger statement state in a DashMap
//! - **BatchProcessor**: Partitions batches by ledger and applies them in tasks
//!
//! # Thread Safety
//!
//! - Updates to different ledgers proceed in parallel
//! - Updates to one ledger are serialized by its map entry
//! - No global locks

pub mod batch_processor;
pub mod statement_book;

pub use batch_processor::{BatchProcessor, ProcessingResult};
pub use statement_book::AsyncStatementBook;
