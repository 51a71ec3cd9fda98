use chrono::{DateTime, FixedOffset};
use tracing::debug;

use crate::models::TransactionRecord;

/// Returns the leading run of `records` recorded strictly after `boundary`.
///
/// Records are expected newest first. Scanning stops at the first record that is not after
/// the boundary and nothing past it is examined, even if a later record would qualify.
pub fn since_boundary(records: &[TransactionRecord], boundary: &DateTime<FixedOffset>) -> Vec<TransactionRecord> {
    let mut result = Vec::new();

    for record in records {
        if record.recorded_at > *boundary {
            result.push(record.clone());
        } else {
            debug!("Stopped at [{}] recorded {}, not after {boundary}", record.description, record.recorded_at);
            break;
        }
    }

    result
}
