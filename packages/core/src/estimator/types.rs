//! Core data types for revenue estimation

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::estimator::error::EstimatorError;

/// Channel statistics as handed over by the upstream metadata provider.
///
/// Every field is optional: the provider reports unknown values as `null`
/// instead of failing, so the estimator must cope with any combination.
/// A field of the wrong JSON type is read as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStats {
    #[serde(default, deserialize_with = "lenient_text")]
    pub channel_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub subscribers: Option<RawCount>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_views: Option<RawCount>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub video_count: Option<RawCount>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient_creation_date")]
    pub creation_date: Option<DateTime<Utc>>,
}

impl ChannelStats {
    /// Decode a channel record from the provider's JSON shape.
    pub fn from_json(raw: &str) -> Result<Self, EstimatorError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn subscriber_count(&self) -> u64 {
        self.subscribers.as_ref().map_or(0, RawCount::normalize)
    }

    pub fn total_view_count(&self) -> Option<u64> {
        self.total_views.as_ref().map(RawCount::normalize)
    }
}

/// A count in whatever shape the provider returned it: a JSON number or
/// digit-bearing text such as `"1,234,567"`.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCount {
    Integer(u64),
    Float(f64),
    Text(String),
}

impl RawCount {
    /// Read a count from a provider JSON value; other shapes yield `None`.
    pub fn from_json_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(number) => number
                .as_u64()
                .map(RawCount::Integer)
                .or_else(|| number.as_f64().map(RawCount::Float)),
            Value::String(text) => Some(RawCount::Text(text.clone())),
            _ => None,
        }
    }

    /// Collapse to a clean count.
    ///
    /// Text keeps only its ASCII digits before parsing, so `"1.2M"` reads as
    /// `12`. Anything unparseable, negative or non-finite becomes `0`.
    pub fn normalize(&self) -> u64 {
        match self {
            RawCount::Integer(count) => *count,
            RawCount::Float(count) if count.is_finite() && *count > 0.0 => count.trunc() as u64,
            RawCount::Float(_) => 0,
            RawCount::Text(text) => {
                let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
                digits.parse().unwrap_or(0)
            }
        }
    }
}

impl From<u64> for RawCount {
    fn from(count: u64) -> Self {
        RawCount::Integer(count)
    }
}

impl From<&str> for RawCount {
    fn from(text: &str) -> Self {
        RawCount::Text(text.to_string())
    }
}

impl From<String> for RawCount {
    fn from(text: String) -> Self {
        RawCount::Text(text)
    }
}

/// Parse a channel creation date.
///
/// Accepts RFC 3339 timestamps, ISO dates (`2010-01-05`) and the short
/// US display form (`Jan 5, 2010`). Bare dates are taken as midnight UTC.
pub fn parse_creation_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }

    ["%Y-%m-%d", "%b %d, %Y"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

// Malformed fields are treated like missing ones rather than rejecting the
// whole record.
fn lenient_creation_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(parse_creation_date))
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<RawCount>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(RawCount::from_json_value(&value))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(Some(text)),
        _ => Ok(None),
    }
}

/// Advertising market tier a country falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CpmTier {
    A,
    B,
    C,
    Global,
}

impl fmt::Display for CpmTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpmTier::A => write!(f, "tier A"),
            CpmTier::B => write!(f, "tier B"),
            CpmTier::C => write!(f, "tier C"),
            CpmTier::Global => write!(f, "global"),
        }
    }
}

/// How the CPM for a channel was arrived at
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CpmQuote {
    pub tier: CpmTier,
    pub base_cpm: f64,
    pub multiplier: f64,
    /// Clamped CPM in the reference currency, before conversion.
    pub cpm: f64,
}

/// Where the daily views feeding an estimate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DailyViewsSource {
    Supplied,
    LifetimeAverage,
}

/// Ad revenue projection for a daily view rate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueEstimate {
    pub cpm_local: u64,
    pub monthly_views: f64,
    pub yearly_views: f64,
    pub estimated_monthly_earnings: u64,
}

/// Full estimate for a single channel
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelEstimate {
    pub channel_name: Option<String>,
    pub country: Option<String>,
    pub tier: CpmTier,
    pub daily_views: f64,
    pub daily_views_source: DailyViewsSource,
    #[serde(flatten)]
    pub revenue: RevenueEstimate,
    pub estimated_sponsorship_price: u64,
    pub currency: String,
}

/// Estimate built from a user-chosen CPM already in the local currency
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualEstimate {
    pub daily_views: f64,
    #[serde(flatten)]
    pub revenue: RevenueEstimate,
    pub estimated_sponsorship_price: u64,
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn normalize_strips_non_digits_from_text() {
        assert_eq!(RawCount::from("1,234,567").normalize(), 1_234_567);
        assert_eq!(RawCount::from("  2 000 000 subscribers").normalize(), 2_000_000);
        assert_eq!(RawCount::from("1.2M").normalize(), 12);
    }

    #[test]
    fn normalize_defaults_unparseable_text_to_zero() {
        assert_eq!(RawCount::from("").normalize(), 0);
        assert_eq!(RawCount::from("hidden").normalize(), 0);
        assert_eq!(RawCount::from("99999999999999999999999").normalize(), 0);
    }

    #[test]
    fn normalize_guards_malformed_numbers() {
        assert_eq!(RawCount::Float(-5.0).normalize(), 0);
        assert_eq!(RawCount::Float(f64::NAN).normalize(), 0);
        assert_eq!(RawCount::Float(1_500.9).normalize(), 1_500);
        assert_eq!(RawCount::from(42).normalize(), 42);
    }

    #[test]
    fn raw_count_reads_numbers_and_text() {
        let values: Vec<Value> =
            serde_json::from_str(r#"[12, -3, 4.5, "7,000", true, {}, [1]]"#).unwrap();
        let counts: Vec<Option<RawCount>> =
            values.iter().map(RawCount::from_json_value).collect();
        assert_eq!(
            counts,
            vec![
                Some(RawCount::Integer(12)),
                Some(RawCount::Float(-3.0)),
                Some(RawCount::Float(4.5)),
                Some(RawCount::Text("7,000".to_string())),
                None,
                None,
                None,
            ]
        );
    }

    #[test]
    fn numeric_creation_date_is_read_as_absent() {
        let stats =
            ChannelStats::from_json(r#"{"totalViews": 1000, "creationDate": 1262649600000}"#)
                .unwrap();
        assert_eq!(stats.total_view_count(), Some(1_000));
        assert!(stats.creation_date.is_none());
    }

    #[test]
    fn wrongly_typed_counts_are_read_as_absent() {
        let stats = ChannelStats::from_json(
            r#"{"subscribers": true, "totalViews": {"value": 10}, "videoCount": [3]}"#,
        )
        .unwrap();
        assert!(stats.subscribers.is_none());
        assert!(stats.total_views.is_none());
        assert!(stats.video_count.is_none());
        assert_eq!(stats.subscriber_count(), 0);
    }

    #[test]
    fn wrongly_typed_text_fields_are_read_as_absent() {
        let stats =
            ChannelStats::from_json(r#"{"channelName": 42, "country": ["US"], "subscribers": 10}"#)
                .unwrap();
        assert!(stats.channel_name.is_none());
        assert!(stats.country.is_none());
        assert_eq!(stats.subscriber_count(), 10);
    }

    #[test]
    fn parses_supported_creation_date_forms() {
        let expected = Utc.with_ymd_and_hms(2010, 1, 5, 0, 0, 0).unwrap();
        assert_eq!(parse_creation_date("2010-01-05"), Some(expected));
        assert_eq!(parse_creation_date("Jan 5, 2010"), Some(expected));
        assert_eq!(parse_creation_date("2010-01-05T00:00:00Z"), Some(expected));
        assert_eq!(
            parse_creation_date("2010-01-05T05:30:00+05:30"),
            Some(expected)
        );
        assert_eq!(parse_creation_date("yesterday"), None);
    }

    #[test]
    fn channel_record_tolerates_nulls_and_bad_dates() {
        let stats = ChannelStats::from_json(
            r#"{
                "channelName": "Example",
                "subscribers": "1,500,000",
                "totalViews": null,
                "country": null,
                "creationDate": "not a date"
            }"#,
        )
        .unwrap();

        assert_eq!(stats.channel_name.as_deref(), Some("Example"));
        assert_eq!(stats.subscriber_count(), 1_500_000);
        assert_eq!(stats.total_view_count(), None);
        assert!(stats.creation_date.is_none());
        assert!(stats.video_count.is_none());
    }

    #[test]
    fn channel_record_rejects_non_object_json() {
        assert!(matches!(
            ChannelStats::from_json("[1, 2, 3]"),
            Err(EstimatorError::InvalidRecord { .. })
        ));
    }
}
