use std::path::PathBuf;
use std::time::Duration;

use tracing::info;

use crate::aggregation::top_purchases;
use crate::calendar::{Clock, most_recent_monday};
use crate::filters::{RelevanceFilter, since_boundary};
use crate::loader::{LoadError, SummaryLoader, parse_summary};
use crate::models::{AggregatedPurchase, SpendSummary};

pub const DEFAULT_TOP_K: usize = 10;

/// Turns an uploaded spend summary into this week's top purchases.
///
/// Loading is the only asynchronous step. Everything after it works on the in-memory
/// summary and either produces the full ranking or nothing at all.
pub struct SpendPipeline<C: Clock> {
    clock: C,
    loader: SummaryLoader,
    relevance: RelevanceFilter,
    top_k: usize
}

impl<C: Clock> SpendPipeline<C> {
    /// Creates a pipeline with the default exclusions and a top-k of 10.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            loader: SummaryLoader::new(),
            relevance: RelevanceFilter::new(),
            top_k: DEFAULT_TOP_K
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_exclusion(mut self, pattern: impl Into<String>) -> Self {
        self.relevance = self.relevance.with_exclusion(pattern);
        self
    }

    pub fn with_read_timeout(mut self, read_timeout: Duration) -> Self {
        self.loader = self.loader.with_read_timeout(read_timeout);
        self
    }

    /// Loads the first of `files` and ranks its purchases since the most recent Monday.
    pub async fn run(&self, files: &[PathBuf]) -> Result<Vec<AggregatedPurchase>, LoadError> {
        let summary = self.loader.load(files).await?;

        Ok(self.rank(&summary))
    }

    /// Same as [`SpendPipeline::run`] for summary text already in memory.
    pub fn process(&self, text: &str) -> Result<Vec<AggregatedPurchase>, LoadError> {
        let summary = parse_summary(text)?;

        Ok(self.rank(&summary))
    }

    fn rank(&self, summary: &SpendSummary) -> Vec<AggregatedPurchase> {
        let boundary = most_recent_monday(&self.clock.now());
        let recent = since_boundary(&summary.transactions, &boundary);
        let purchases = self.relevance.apply(&recent);

        info!(
            "{} transaction(s) since {boundary}, {} relevant purchase(s)",
            recent.len(),
            purchases.len()
        );

        top_purchases(&purchases, self.top_k)
    }
}
