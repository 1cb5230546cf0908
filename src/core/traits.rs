//! Collaborator traits for report data and journal submission
//!
//! The balance computation owns no I/O. These traits are the seams through
//! which ledger metadata and transaction lines arrive and through which a
//! validated journal entry leaves. File-backed implementations live in
//! [`crate::io`]; a network client would implement the same traits.

use crate::types::{
    DateRange, JournalDocument, JournalReceipt, LedgerDetails, LedgerError, TransactionLine,
};

/// Supplier of ledger metadata and ledger transaction lines
pub trait ReportSource {
    /// Name and opening balance of one ledger
    fn ledger_details(&self, ledger_id: &str) -> Result<LedgerDetails, LedgerError>;

    /// Lines posted to one ledger within `range`, in chronological order
    fn ledger_lines(
        &self,
        ledger_id: &str,
        range: &DateRange,
    ) -> Result<Vec<TransactionLine>, LedgerError>;

    /// Every ledger id the source knows, sorted
    fn ledger_ids(&self) -> Vec<String>;
}

/// Receiver of validated journal entries
pub trait JournalSink {
    /// Accept a journal document or reject it
    fn submit(&mut self, document: &JournalDocument) -> Result<JournalReceipt, LedgerError>;
}
