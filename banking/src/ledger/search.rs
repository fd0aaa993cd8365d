use crate::data::models::Transaction;
use crate::util::format::plain_amount;

/// Keeps transactions whose description contains `term` (case-insensitive)
/// or whose amount text contains it.
pub fn search(transactions: &[Transaction], term: &str) -> Vec<Transaction> {
    let needle = term.to_lowercase();
    transactions
        .iter()
        .filter(|tx| {
            tx.description.to_lowercase().contains(&needle)
                || plain_amount(tx.amount).contains(term)
        })
        .cloned()
        .collect()
}
