//! Country tier lookup and CPM adjustment

use crate::estimator::{config::CpmBand, types::CpmTier};

/// One row of the country tier table
#[derive(Debug)]
pub struct TierEntry {
    pub tier: CpmTier,
    pub countries: &'static [&'static str],
    /// Base CPM in the reference currency.
    pub base_cpm: f64,
}

/// Tier table, evaluated top to bottom; the first row listing the country wins.
pub const CPM_TIERS: &[TierEntry] = &[
    TierEntry {
        tier: CpmTier::A,
        countries: &["US", "CA", "GB", "AU"],
        base_cpm: 10.0,
    },
    TierEntry {
        tier: CpmTier::B,
        countries: &["DE", "FR", "ES", "IT", "NL", "SE", "NO", "DK", "FI", "JP", "KR"],
        base_cpm: 7.0,
    },
    TierEntry {
        tier: CpmTier::C,
        countries: &["IN", "BR", "PH", "ID", "VN", "TR", "MX", "RU"],
        base_cpm: 1.5,
    },
];

/// Base CPM for countries outside every tier, or when the country is unknown.
pub const GLOBAL_BASE_CPM: f64 = 2.0;

pub const MILLION_SUBSCRIBER_MULTIPLIER: f64 = 1.2;
pub const HALF_MILLION_SUBSCRIBER_MULTIPLIER: f64 = 1.1;

/// Resolve an ISO 3166 alpha-2 code to its tier and base CPM.
///
/// Matching is exact after trimming and upper-casing.
pub fn lookup_tier(country: Option<&str>) -> (CpmTier, f64) {
    let code = match country {
        Some(code) => code.trim().to_ascii_uppercase(),
        None => return (CpmTier::Global, GLOBAL_BASE_CPM),
    };

    CPM_TIERS
        .iter()
        .find(|entry| entry.countries.contains(&code.as_str()))
        .map(|entry| (entry.tier, entry.base_cpm))
        .unwrap_or((CpmTier::Global, GLOBAL_BASE_CPM))
}

/// Larger channels command a premium on their CPM.
pub fn subscriber_multiplier(subscribers: u64) -> f64 {
    if subscribers >= 1_000_000 {
        MILLION_SUBSCRIBER_MULTIPLIER
    } else if subscribers >= 500_000 {
        HALF_MILLION_SUBSCRIBER_MULTIPLIER
    } else {
        1.0
    }
}

pub fn clamp_cpm(cpm: f64, band: &CpmBand) -> f64 {
    cpm.min(band.max).max(band.min)
}
