//! Balance-side types for the ledger statement engine
//!
//! This module defines the Dr/Cr tag, opening balances and ledger metadata.

use super::error::LedgerError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ledger identifier as issued by the backend
pub type LedgerId = String;

/// Side of a balance in double-entry bookkeeping
///
/// Internally a Debit balance is a positive number and a Credit balance a
/// negative one. The tag is always derived from a signed number through
/// [`BalanceType::of`], never tracked separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BalanceType {
    /// Debit side (non-negative signed value)
    Dr,
    /// Credit side (negative signed value)
    Cr,
}

impl BalanceType {
    /// Sign tag of a signed balance; zero counts as Debit
    pub fn of(signed: Decimal) -> Self {
        if signed >= Decimal::ZERO {
            BalanceType::Dr
        } else {
            BalanceType::Cr
        }
    }

    /// Apply this side's sign to a non-negative amount
    pub fn signed(self, amount: Decimal) -> Decimal {
        match self {
            BalanceType::Dr => amount,
            BalanceType::Cr => Decimal::ZERO - amount,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BalanceType::Dr => "Dr",
            BalanceType::Cr => "Cr",
        }
    }
}

impl fmt::Display for BalanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts `Debit`/`Dr` and `Credit`/`Cr`, case-insensitive
impl FromStr for BalanceType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dr" | "debit" => Ok(BalanceType::Dr),
            "cr" | "credit" => Ok(BalanceType::Cr),
            _ => Err(LedgerError::invalid_balance_type(s)),
        }
    }
}

/// Carried-forward balance of a ledger at the start of a reporting period
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpeningBalance {
    /// Non-negative magnitude
    pub amount: Decimal,
    /// Which side the balance sits on
    pub side: BalanceType,
}

impl OpeningBalance {
    /// Create an opening balance, rejecting negative amounts
    pub fn new(amount: Decimal, side: BalanceType) -> Result<Self, LedgerError> {
        if amount < Decimal::ZERO {
            return Err(LedgerError::negative_amount(amount, "opening_balance"));
        }
        Ok(Self { amount, side })
    }

    /// Zero balance on the Debit side
    pub fn zero() -> Self {
        Self {
            amount: Decimal::ZERO,
            side: BalanceType::Dr,
        }
    }

    /// Signed value: positive for Debit, negative for Credit
    pub fn signed(&self) -> Decimal {
        self.side.signed(self.amount)
    }
}

/// Ledger metadata needed to produce a statement
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerDetails {
    pub id: LedgerId,
    pub name: String,
    pub opening: OpeningBalance,
}
