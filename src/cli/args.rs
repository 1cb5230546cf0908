use crate::render::{NumberLocale, RenderOptions};
use crate::strategy::{BatchConfig, StatementJob};
use crate::types::{DateRange, ReportQuery};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Ledger statements with running balances, and double-entry journal checks
#[derive(Parser, Debug)]
#[command(name = "ledger-statement")]
#[command(about = "Ledger statements with running balances, and double-entry journal checks", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print ledger statements from a transactions file
    Statement(StatementArgs),

    /// Validate a journal entry and print its submission document
    Journal(JournalArgs),
}

#[derive(Args, Debug)]
pub struct StatementArgs {
    /// Transactions CSV file, one posted line per row in chronological order
    #[arg(value_name = "TRANSACTIONS", help = "Path to the transactions CSV file")]
    pub transactions_file: PathBuf,

    /// Ledger master CSV file with opening balances
    #[arg(long = "ledgers", value_name = "FILE")]
    pub ledgers_file: PathBuf,

    /// Report a single ledger instead of all of them
    #[arg(long = "ledger", value_name = "ID")]
    pub ledger: Option<String>,

    /// First posting date to include (YYYY-MM-DD)
    #[arg(long = "from", value_name = "DATE")]
    pub from: Option<NaiveDate>,

    /// Last posting date to include (YYYY-MM-DD)
    #[arg(long = "to", value_name = "DATE")]
    pub to: Option<NaiveDate>,

    /// Processing strategy to use
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "async",
        help = "Processing strategy: 'sync' for synchronous or 'async' for asynchronous"
    )]
    pub strategy: StrategyType,

    /// Number of posted lines per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of posted lines per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Worker threads of the async runtime (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Maximum number of worker threads (default: CPU cores)"
    )]
    pub max_concurrent_batches: Option<usize>,

    #[arg(long = "format", value_name = "FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Digit grouping of amounts in text output
    #[arg(
        long = "locale",
        value_name = "LOCALE",
        env = "LEDGER_LOCALE",
        default_value = "en-in"
    )]
    pub locale: LocaleArg,

    /// Hide the particulars (opposite ledger) column
    #[arg(long = "no-particulars")]
    pub no_particulars: bool,
}

#[derive(Args, Debug)]
pub struct JournalArgs {
    /// Journal lines CSV file: ledger_id,ledger_name,debit,credit,line_narration
    #[arg(value_name = "LINES")]
    pub lines_file: PathBuf,

    #[arg(long = "company", value_name = "ID")]
    pub company: String,

    /// Voucher date (YYYY-MM-DD)
    #[arg(long = "date", value_name = "DATE")]
    pub date: NaiveDate,

    #[arg(long = "voucher-type", value_name = "TYPE", default_value = "Journal")]
    pub voucher_type: String,

    #[arg(long = "narration", value_name = "TEXT", default_value = "")]
    pub narration: String,
}

/// Available processing strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

/// Statement output formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Printable statement document
    Text,
    /// One CSV row per statement row plus a closing row per ledger
    Csv,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LocaleArg {
    EnIn,
    EnUs,
    Plain,
}

impl From<LocaleArg> for NumberLocale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::EnIn => NumberLocale::EnIn,
            LocaleArg::EnUs => NumberLocale::EnUs,
            LocaleArg::Plain => NumberLocale::Plain,
        }
    }
}

impl StatementArgs {
    /// Create a BatchConfig from the arguments, falling back to defaults
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_some() || self.max_concurrent_batches.is_some() {
            let default = BatchConfig::default();
            BatchConfig::new(
                self.batch_size.unwrap_or(default.batch_size),
                self.max_concurrent_batches
                    .unwrap_or(default.max_concurrent_batches),
            )
        } else {
            BatchConfig::default()
        }
    }

    pub fn to_job(&self) -> StatementJob {
        StatementJob {
            ledgers_path: self.ledgers_file.clone(),
            transactions_path: self.transactions_file.clone(),
            query: ReportQuery {
                ledger: self.ledger.clone(),
                range: DateRange::new(self.from, self.to),
            },
            format: self.format,
            render: RenderOptions {
                locale: self.locale.into(),
                particulars: !self.no_particulars,
            },
        }
    }
}
