use std::cmp::Reverse;
use std::collections::HashMap;

use tracing::{debug, warn};

use crate::models::{AggregatedPurchase, TransactionRecord};
use crate::types::Monetary;

/// Sums spend per description and returns the `k` largest totals, highest first.
///
/// Amounts are summed at full fixed-point precision and each group is rounded once at the
/// end. Equal totals keep the order in which their descriptions first appeared.
pub fn top_purchases(records: &[TransactionRecord], k: usize) -> Vec<AggregatedPurchase> {
    if k == 0 || records.is_empty() {
        return Vec::new();
    }

    let mut positions = HashMap::<&str, usize>::new();
    let mut groups = Vec::<(&str, Monetary)>::new();

    for record in records {
        let index = *positions.entry(record.description.as_str()).or_insert_with(|| {
            groups.push((record.description.as_str(), Monetary::new()));
            groups.len() - 1
        });

        let total = &mut groups[index].1;

        match total.checked_add(record.amount) {
            Ok(sum) => *total = sum,
            Err(error) => warn!("Total for [{}] left at {total}: {error}", record.description)
        }
    }

    debug!("Aggregated {} record(s) into {} description(s)", records.len(), groups.len());

    let mut ranked: Vec<AggregatedPurchase> = groups.into_iter()
        .map(|(description, total)| AggregatedPurchase::new(description, total.round_half_up()))
        .collect();

    ranked.sort_by_key(|purchase| Reverse(purchase.total));
    ranked.truncate(k);

    ranked
}
