use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Total spend for one merchant description, rounded to whole currency units.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct AggregatedPurchase {
    pub description: String,
    pub total: i64
}

impl AggregatedPurchase {
    pub fn new(description: impl Into<String>, total: i64) -> Self {
        Self {
            description: description.into(),
            total
        }
    }
}

impl Display for AggregatedPurchase {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "${} {}", self.total, self.description)
    }
}
