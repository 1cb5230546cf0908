//! Report query types
//!
//! A query selects which ledgers to report and which posting dates to include.
//! Filtering is the data source's job; the balance computation never filters
//! or sorts.

use super::balance::LedgerId;
use super::transaction::PostedLine;
use chrono::NaiveDate;

/// Optional inclusive date range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Whether `date` falls inside the range (open ends are unbounded)
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

/// Which statements to produce
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportQuery {
    /// Restrict to one ledger; every known ledger when `None`
    pub ledger: Option<LedgerId>,
    pub range: DateRange,
}

impl ReportQuery {
    /// Whether a posted line belongs in the report
    pub fn matches(&self, posted: &PostedLine) -> bool {
        self.includes_ledger(&posted.ledger_id) && self.range.contains(posted.line.date)
    }

    pub fn includes_ledger(&self, ledger_id: &str) -> bool {
        self.ledger.as_deref().is_none_or(|wanted| wanted == ledger_id)
    }
}
