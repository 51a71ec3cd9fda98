mod recency;
mod relevance;
#[cfg(test)]
mod tests;

pub use recency::since_boundary;
pub use relevance::{DEFAULT_EXCLUSIONS, RelevanceFilter};
