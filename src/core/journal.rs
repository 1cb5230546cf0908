//! Journal entry drafting
//!
//! [`JournalDraft`] holds the editable state of a journal voucher before it is
//! submitted: the header fields and at least two lines. Amounts are entered as
//! a magnitude plus a side and mapped onto mutually exclusive debit/credit
//! fields, so a draft line never carries both.
//!
//! Totals are recomputed from the lines on every read; nothing is cached.

use crate::core::validator::{validate_balanced, JournalTotals};
use crate::types::{
    BalanceError, BalanceType, JournalDocument, JournalLine, LedgerError, LedgerId,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Lines a journal entry keeps at minimum
pub const MIN_JOURNAL_LINES: usize = 2;

/// Default voucher type for new drafts
pub const DEFAULT_VOUCHER_TYPE: &str = "Journal";

/// Editable journal voucher
#[derive(Debug, Clone, PartialEq)]
pub struct JournalDraft {
    pub date: NaiveDate,
    pub voucher_type: String,
    pub narration: String,
    lines: Vec<JournalLine>,
}

impl JournalDraft {
    /// Blank draft with two empty lines
    pub fn new(date: NaiveDate) -> Self {
        JournalDraft {
            date,
            voucher_type: DEFAULT_VOUCHER_TYPE.to_string(),
            narration: String::new(),
            lines: vec![JournalLine::default(); MIN_JOURNAL_LINES],
        }
    }

    /// Draft holding lines read from elsewhere, as given
    ///
    /// Fewer than [`MIN_JOURNAL_LINES`] lines is an error; nothing is padded.
    pub fn from_lines(date: NaiveDate, lines: Vec<JournalLine>) -> Result<Self, LedgerError> {
        if lines.len() < MIN_JOURNAL_LINES {
            return Err(LedgerError::MinimumLines {
                minimum: MIN_JOURNAL_LINES,
            });
        }

        Ok(JournalDraft {
            date,
            voucher_type: DEFAULT_VOUCHER_TYPE.to_string(),
            narration: String::new(),
            lines,
        })
    }

    pub fn lines(&self) -> &[JournalLine] {
        &self.lines
    }

    /// Append a blank line and return its index
    pub fn add_line(&mut self) -> usize {
        self.lines.push(JournalLine::default());
        self.lines.len() - 1
    }

    /// Remove a line, keeping at least [`MIN_JOURNAL_LINES`]
    pub fn remove_line(&mut self, index: usize) -> Result<JournalLine, LedgerError> {
        self.check_index(index)?;
        if self.lines.len() <= MIN_JOURNAL_LINES {
            return Err(LedgerError::MinimumLines {
                minimum: MIN_JOURNAL_LINES,
            });
        }
        Ok(self.lines.remove(index))
    }

    /// Select the ledger of a line
    pub fn set_ledger(
        &mut self,
        index: usize,
        ledger_id: LedgerId,
        ledger_name: &str,
    ) -> Result<(), LedgerError> {
        let line = self.line_mut(index)?;
        line.ledger_id = Some(ledger_id);
        line.ledger_name = ledger_name.to_string();
        Ok(())
    }

    /// Enter an amount on one side of a line
    ///
    /// The chosen side receives `amount`; the other side is reset to zero.
    pub fn set_amount(
        &mut self,
        index: usize,
        amount: Decimal,
        side: BalanceType,
    ) -> Result<(), LedgerError> {
        if amount < Decimal::ZERO {
            return Err(LedgerError::negative_amount(amount, "amount"));
        }

        let line = self.line_mut(index)?;
        match side {
            BalanceType::Dr => {
                line.debit = amount;
                line.credit = Decimal::ZERO;
            }
            BalanceType::Cr => {
                line.credit = amount;
                line.debit = Decimal::ZERO;
            }
        }
        Ok(())
    }

    pub fn set_line_narration(
        &mut self,
        index: usize,
        narration: Option<String>,
    ) -> Result<(), LedgerError> {
        self.line_mut(index)?.line_narration = narration;
        Ok(())
    }

    pub fn totals(&self) -> Result<JournalTotals, BalanceError> {
        JournalTotals::from_lines(&self.lines)
    }

    /// Whether the submit action should be enabled
    ///
    /// Balanced and non-zero; line completeness is reported on submission.
    pub fn can_submit(&self) -> bool {
        self.totals()
            .is_ok_and(|totals| totals.is_balanced() && !totals.total_debit.is_zero())
    }

    pub fn validate(&self) -> Result<(), BalanceError> {
        validate_balanced(&self.lines)
    }

    /// Validate and build the submission document
    pub fn into_document(self, company_id: &str) -> Result<JournalDocument, LedgerError> {
        self.validate()?;
        let totals = self.totals()?;

        Ok(JournalDocument {
            company_id: company_id.to_string(),
            date: self.date,
            voucher_type: self.voucher_type,
            narration: self.narration,
            lines: self.lines,
            total_debit: totals.total_debit,
            total_credit: totals.total_credit,
        })
    }

    fn check_index(&self, index: usize) -> Result<(), LedgerError> {
        if index >= self.lines.len() {
            return Err(LedgerError::LineOutOfRange { index });
        }
        Ok(())
    }

    fn line_mut(&mut self, index: usize) -> Result<&mut JournalLine, LedgerError> {
        self.lines
            .get_mut(index)
            .ok_or(LedgerError::LineOutOfRange { index })
    }
}
