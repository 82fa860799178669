//! Per-video sponsorship pricing

/// Days of channel traffic taken as one video's lifetime reach.
pub const VIEWS_PER_VIDEO_DAYS: f64 = 7.0;

/// `(exclusive upper bound on views per video, price per view)`, ascending.
pub const SPONSORSHIP_BUCKETS: &[(f64, f64)] = &[
    (10_000.0, 0.5),
    (50_000.0, 1.0),
    (100_000.0, 2.0),
    (500_000.0, 3.0),
];

/// Price per view once a video clears the last bucket.
pub const TOP_SPONSORSHIP_RATE: f64 = 5.0;

pub fn avg_views_per_video(daily_views: f64) -> f64 {
    daily_views * VIEWS_PER_VIDEO_DAYS
}

pub fn rate_per_view(avg_views_per_video: f64) -> f64 {
    SPONSORSHIP_BUCKETS
        .iter()
        .find(|(upper, _)| avg_views_per_video < *upper)
        .map(|(_, rate)| *rate)
        .unwrap_or(TOP_SPONSORSHIP_RATE)
}

/// Flat per-video sponsorship price, never below `floor`.
///
/// The floor applies even to a channel with no traffic at all.
pub fn sponsorship_price(daily_views: f64, floor: f64) -> u64 {
    let views = avg_views_per_video(daily_views);
    let raw_price = views * rate_per_view(views);
    raw_price.max(floor).round() as u64
}
