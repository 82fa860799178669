//! Lifetime-average daily views
//!
//! Used when no measured daily view rate is available. The figure is total
//! views spread evenly over the channel's whole life, so it underestimates
//! channels whose view velocity is still growing. No correction is applied:
//! without a historical series there is nothing to correct against.

use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: u64 = 86_400_000;

/// Whole days between `creation_date` and `now`, rounded up and never below one.
///
/// A missing date counts as a single day. A date in the future is measured
/// by its distance from `now`, the same as a past one.
pub fn elapsed_days(creation_date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> u64 {
    let creation_date = match creation_date {
        Some(date) => date,
        None => return 1,
    };

    let millis = (now - creation_date).num_milliseconds().unsigned_abs();
    let days = millis / MILLIS_PER_DAY + u64::from(millis % MILLIS_PER_DAY != 0);
    days.max(1)
}

/// Average daily views over the channel's lifetime, as of `now`.
pub fn estimate_daily_views_at(
    total_views: Option<u64>,
    creation_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> u64 {
    let total_views = match total_views {
        Some(views) => views,
        None => return 0,
    };

    let average = (total_views as f64 / elapsed_days(creation_date, now) as f64).round();
    if average.is_finite() && average > 0.0 {
        average as u64
    } else {
        0
    }
}

/// Average daily views over the channel's lifetime, as of right now.
pub fn estimate_daily_views(total_views: Option<u64>, creation_date: Option<DateTime<Utc>>) -> u64 {
    estimate_daily_views_at(total_views, creation_date, Utc::now())
}
