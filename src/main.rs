//! Ledger statement CLI
//!
//! # Usage
//!
//! ```bash
//! ledger-statement statement --ledgers ledgers.csv transactions.csv
//! ledger-statement statement --ledgers ledgers.csv --ledger CASH --from 2024-04-01 --to 2024-06-30 transactions.csv
//! ledger-statement statement --strategy sync --format csv --ledgers ledgers.csv transactions.csv > statements.csv
//! ledger-statement journal --company C1 --date 2024-04-01 --narration "April rent" lines.csv
//! ```
//!
//! Statements and journal documents go to stdout, diagnostics to stderr.
//! Set `RUST_LOG` (e.g. `RUST_LOG=debug`) for more detail.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (bad input file, unknown ledger, unbalanced journal entry, etc.)

use ledger_statement_engine::cli::{self, Command, JournalArgs, StatementArgs, StrategyType};
use ledger_statement_engine::core::{JournalDraft, JournalSink};
use ledger_statement_engine::io::{read_journal_lines, JsonJournalSink};
use ledger_statement_engine::strategy;
use ledger_statement_engine::types::LedgerError;
use log::info;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = cli::parse_args();

    let result = match args.command {
        Command::Statement(statement) => run_statement(&statement),
        Command::Journal(journal) => run_journal(journal),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_statement(args: &StatementArgs) -> Result<(), LedgerError> {
    let config = if matches!(args.strategy, StrategyType::Async) {
        Some(args.to_batch_config())
    } else {
        None
    };
    let strategy = strategy::create_strategy(args.strategy, config);

    let mut output = std::io::stdout();
    strategy.process(&args.to_job(), &mut output)
}

fn run_journal(args: JournalArgs) -> Result<(), LedgerError> {
    let lines = read_journal_lines(&args.lines_file)?;

    let mut draft = JournalDraft::from_lines(args.date, lines)?;
    draft.voucher_type = args.voucher_type;
    draft.narration = args.narration;

    let document = draft.into_document(&args.company)?;

    let mut sink = JsonJournalSink::new(std::io::stdout());
    let receipt = sink.submit(&document)?;
    info!(
        "Submitted journal entry with {} lines totalling {}",
        receipt.lines, receipt.amount
    );

    Ok(())
}
