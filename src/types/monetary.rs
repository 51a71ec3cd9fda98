use crate::types::errors::MonetaryError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fmt::{Display, Formatter};

const DECIMAL_PLACES: u32 = 4;
const SCALE: i64 = 10i64.pow(DECIMAL_PLACES);

/// A signed fixed-point amount stored as currency units scaled by 10,000.
///
/// `Monetary::from_scaled(12345)` is the real-world amount `1.2345`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Monetary(i64);

impl Monetary {
    pub fn new() -> Self {
        Monetary(0)
    }

    pub fn from_scaled(value: i64) -> Self {
        Monetary(value)
    }

    pub fn scaled(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, rhs: Monetary) -> Result<Monetary, MonetaryError> {
        self.0.checked_add(rhs.0)
            .map(Monetary)
            .ok_or(MonetaryError::Overflow { lhs: self.0, rhs: rhs.0 })
    }

    /// The real-world amount, i.e. the scaled value divided by 10,000.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, DECIMAL_PLACES)
    }

    /// Rounds to the nearest whole currency unit with halves going up,
    /// so `2.5` becomes `3` and `-2.5` becomes `-2`.
    pub fn round_half_up(&self) -> i64 {
        let rounded = (self.to_decimal() + Decimal::new(5, 1)).floor();

        //NOTE: The rounded value is at most one unit away from the truncated one, so it always fits in an i64
        rounded.to_i64().unwrap_or(self.0.div_euclid(SCALE))
    }
}

impl Display for Monetary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let integer = abs / SCALE as u64;
        let fraction = abs % SCALE as u64;
        write!(formatter, "{}{}.{:0width$}", sign, integer, fraction, width = DECIMAL_PLACES as usize)
    }
}

impl<'de> Deserialize<'de> for Monetary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        i64::deserialize(deserializer).map(Monetary)
    }
}
