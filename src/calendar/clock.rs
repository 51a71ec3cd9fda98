use chrono::{DateTime, FixedOffset, Local, TimeZone};

/// Source of "now" for the week boundary.
pub trait Clock: Send + Sync {
    type Zone: TimeZone;

    fn now(&self) -> DateTime<Self::Zone>;
}

/// Reads the host's wall clock in its local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Zone = Local;

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<FixedOffset>
}

impl FixedClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    type Zone = FixedOffset;

    fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }
}
