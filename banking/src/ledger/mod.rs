pub mod chart;
pub mod search;

pub use chart::ChartFrame;
pub use search::search;

use crate::data::models::{Transaction, TransactionKind};
use crate::util::format::format_currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountTone {
    Credit,
    Debit,
    Neutral,
}

pub fn tone(kind: TransactionKind) -> AmountTone {
    match kind {
        TransactionKind::Deposit => AmountTone::Credit,
        TransactionKind::Withdrawal | TransactionKind::Purchase => AmountTone::Debit,
        TransactionKind::Transfer => AmountTone::Neutral,
    }
}

/// Signed amount for a list row: deposits get `+`, everything else `-`.
pub fn display_amount(tx: &Transaction) -> String {
    let sign = if tx.kind == TransactionKind::Deposit { "+" } else { "-" };
    format!("{}{}", sign, format_currency(tx.amount.abs(), &tx.currency))
}

/// Secondary line of a list row: `2024-07-09 (pending)`.
pub fn display_meta(tx: &Transaction) -> String {
    match tx.status {
        Some(status) => format!("{} ({})", tx.date, status.as_str()),
        None => tx.date.to_string(),
    }
}
