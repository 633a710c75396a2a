//! Database utility functions.

use chrono::{DateTime, TimeDelta, Utc};

/// Current UTC time.
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// A timestamp strictly later than `previous`.
///
/// Uses the current time unless the clock has not moved past `previous`
/// (same tick, or a step backwards), in which case it bumps by 1µs.
pub fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = current_timestamp();
    if now > previous {
        now
    } else {
        previous + TimeDelta::microseconds(1)
    }
}
