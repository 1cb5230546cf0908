//! Journal entry types
//!
//! [`JournalLine`] is one editable line of a draft voucher. [`JournalDocument`]
//! is the validated payload accepted by the journal submission sink; it
//! serializes to the camelCase JSON shape the backend expects. Amounts are
//! written as exact JSON numbers, never through `f64`.

use super::balance::LedgerId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of a journal entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalLine {
    /// Selected ledger; `None` until the user picks one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger_id: Option<LedgerId>,

    #[serde(default)]
    pub ledger_name: String,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub debit: Decimal,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub credit: Decimal,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_narration: Option<String>,
}

impl JournalLine {
    /// Line posting `amount` to the debit side of `ledger_id`
    pub fn debit(ledger_id: &str, amount: Decimal) -> Self {
        Self {
            ledger_id: Some(ledger_id.to_string()),
            debit: amount,
            ..Self::default()
        }
    }

    /// Line posting `amount` to the credit side of `ledger_id`
    pub fn credit(ledger_id: &str, amount: Decimal) -> Self {
        Self {
            ledger_id: Some(ledger_id.to_string()),
            credit: amount,
            ..Self::default()
        }
    }

    /// Has a ledger and a non-zero amount on at least one side
    pub fn is_complete(&self) -> bool {
        let has_ledger = self
            .ledger_id
            .as_deref()
            .is_some_and(|id| !id.trim().is_empty());
        has_ledger && !(self.debit.is_zero() && self.credit.is_zero())
    }
}

/// Validated journal entry ready for submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalDocument {
    pub company_id: String,

    /// Serialized as `YYYY-MM-DD`
    pub date: NaiveDate,

    pub voucher_type: String,

    pub narration: String,

    pub lines: Vec<JournalLine>,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_debit: Decimal,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_credit: Decimal,
}

/// Acknowledgement returned by a journal sink
#[derive(Debug, Clone, PartialEq)]
pub struct JournalReceipt {
    /// Number of lines accepted
    pub lines: usize,
    /// Total value of the entry (either side)
    pub amount: Decimal,
}
