mod purchase;
mod summary;
mod transaction;

use serde::Deserialize;

pub use purchase::AggregatedPurchase;
pub use summary::SpendSummary;
pub use transaction::TransactionRecord;

/// Classification of a transaction as money out (debit) or money in (credit).
///
/// Any other tag found in a summary is kept as `Other` rather than rejected.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookkeepingType {
    Debit,
    Credit,
    #[serde(other)]
    Other
}
