use chrono::{DateTime, Datelike, FixedOffset, NaiveTime, Offset, TimeDelta, TimeZone, Weekday};
use tracing::{debug, warn};

/// Returns the start (local midnight) of the most recent Monday relative to `now`.
///
/// Sunday is treated as the last day of the week that began six days earlier: the date is
/// stepped back one day before flooring to Monday. On a Monday the result is the same day.
pub fn most_recent_monday<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<FixedOffset> {
    let today = now.date_naive();
    let anchor = if today.weekday() == Weekday::Sun {
        today - TimeDelta::days(1)
    } else {
        today
    };

    let monday = anchor - TimeDelta::days(i64::from(anchor.weekday().num_days_from_monday()));
    let midnight = monday.and_time(NaiveTime::MIN);

    let boundary = match now.timezone().from_local_datetime(&midnight).earliest() {
        Some(start) => start.fixed_offset(),
        None => {
            //NOTE: Local midnight can be skipped by a DST transition, fall back to the offset in effect right now
            let offset = now.offset().fix();
            warn!("Local midnight of {monday} does not exist, using offset {offset}");
            DateTime::from_naive_utc_and_offset(midnight - TimeDelta::seconds(i64::from(offset.local_minus_utc())), offset)
        }
    };

    debug!("Week boundary resolved to {boundary}");

    boundary
}
