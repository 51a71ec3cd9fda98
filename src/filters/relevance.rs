use tracing::trace;

use crate::models::{BookkeepingType, TransactionRecord};

/// Description fragments of debits that are not purchases: credit card bill payments and
/// transfers into investment accounts.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    "Discover E Payment",
    "Vanguard"
];

/// Keeps debit transactions whose description contains none of the exclusion patterns.
#[derive(Debug, Clone)]
pub struct RelevanceFilter {
    exclusions: Vec<String>
}

impl RelevanceFilter {
    pub fn new() -> Self {
        Self {
            exclusions: DEFAULT_EXCLUSIONS.iter().map(|pattern| pattern.to_string()).collect()
        }
    }

    /// Adds a case-sensitive substring to exclude alongside the defaults.
    pub fn with_exclusion(mut self, pattern: impl Into<String>) -> Self {
        self.exclusions.push(pattern.into());
        self
    }

    pub fn exclusions(&self) -> &[String] {
        &self.exclusions
    }

    pub fn is_relevant(&self, record: &TransactionRecord) -> bool {
        if record.bookkeeping_type != BookkeepingType::Debit {
            return false;
        }

        match self.exclusions.iter().find(|pattern| record.description.contains(pattern.as_str())) {
            Some(pattern) => {
                trace!("Excluding [{}] matching [{pattern}]", record.description);
                false
            }
            None => true
        }
    }

    pub fn apply(&self, records: &[TransactionRecord]) -> Vec<TransactionRecord> {
        records.iter()
            .filter(|record| self.is_relevant(record))
            .cloned()
            .collect()
    }
}

impl Default for RelevanceFilter {
    fn default() -> Self {
        Self::new()
    }
}
