use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::models::BookkeepingType;
use crate::types::Monetary;

/// Represents a single entry of the uploaded spend summary.
///
/// The source document nests the amount under `amounts.amount` and the timestamp under
/// `times.when_recorded_local`; both are flattened here. Every field is required, a record
/// missing any of them fails the whole document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawTransactionRecord")]
pub struct TransactionRecord {
    /// Merchant or payee label, not unique across records.
    pub description: String,
    /// Whether money left (debit) or entered (credit) the account.
    pub bookkeeping_type: BookkeepingType,
    /// Fixed-point amount scaled by 10,000.
    pub amount: Monetary,
    /// When the transaction was recorded, with the offset given by the source.
    pub recorded_at: DateTime<FixedOffset>
}

#[derive(Deserialize)]
struct RawTransactionRecord {
    description: String,
    bookkeeping_type: BookkeepingType,
    amounts: RawAmounts,
    times: RawTimes
}

#[derive(Deserialize)]
struct RawAmounts {
    amount: Monetary
}

#[derive(Deserialize)]
struct RawTimes {
    when_recorded_local: DateTime<FixedOffset>
}

impl From<RawTransactionRecord> for TransactionRecord {
    fn from(raw: RawTransactionRecord) -> Self {
        Self {
            description: raw.description,
            bookkeeping_type: raw.bookkeeping_type,
            amount: raw.amounts.amount,
            recorded_at: raw.times.when_recorded_local
        }
    }
}
