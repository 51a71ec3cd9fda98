mod clock;
mod week;

pub use clock::{Clock, FixedClock, SystemClock};
pub use week::most_recent_monday;
