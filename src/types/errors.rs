use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum MonetaryError {
    #[error("Monetary error: Overflow adding [{lhs}] and [{rhs}]")]
    Overflow {
        lhs: i64,
        rhs: i64
    }
}
