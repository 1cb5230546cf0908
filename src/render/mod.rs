//! Statement presentation
//!
//! - `amount` - Two-decimal amount and Dr/Cr balance formatting
//! - `text` - Printable statement document

pub mod amount;
pub mod text;

pub use amount::{format_amount, format_balance, NumberLocale};
pub use text::{write_statement_text, RenderOptions};
