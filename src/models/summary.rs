use serde::Deserialize;

use crate::models::TransactionRecord;

/// The parsed upload: transactions in source order, expected newest first.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SpendSummary {
    pub transactions: Vec<TransactionRecord>
}
