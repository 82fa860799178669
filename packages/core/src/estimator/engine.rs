//! Revenue Estimator - composes daily views, CPM and sponsorship pricing

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::estimator::{
    config::EstimatorConfig,
    cpm::{clamp_cpm, lookup_tier, subscriber_multiplier},
    daily_views::estimate_daily_views_at,
    error::EstimatorError,
    sponsorship::sponsorship_price,
    types::*,
};

/// Days in a projected month and year.
pub const DAYS_PER_MONTH: f64 = 30.0;
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Upper bound on a daily view rate; keeps every projection finite.
pub const MAX_DAILY_VIEWS: f64 = 1e12;

/// Stateless estimator holding only its configuration.
///
/// Every method is a pure function of its arguments and the config, so a
/// single instance can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct RevenueEstimator {
    config: EstimatorConfig,
}

impl RevenueEstimator {
    /// Create an estimator after validating the configuration
    pub fn new(config: EstimatorConfig) -> Result<Self, EstimatorError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Lifetime-average daily views, as of now.
    pub fn estimate_daily_views(
        &self,
        total_views: Option<u64>,
        creation_date: Option<DateTime<Utc>>,
    ) -> u64 {
        estimate_daily_views_at(total_views, creation_date, Utc::now())
    }

    /// Resolve the reference-currency CPM for a market and audience size.
    pub fn quote_cpm(&self, country: Option<&str>, subscribers: Option<&RawCount>) -> CpmQuote {
        let (tier, base_cpm) = lookup_tier(country);
        let subscribers = subscribers.map_or(0, RawCount::normalize);
        let multiplier = subscriber_multiplier(subscribers);
        let cpm = clamp_cpm(base_cpm * multiplier, &self.config.cpm_band);

        debug!(
            %tier,
            base_cpm,
            subscribers,
            multiplier,
            cpm,
            "Resolved CPM"
        );

        CpmQuote {
            tier,
            base_cpm,
            multiplier,
            cpm,
        }
    }

    /// Project views and ad earnings for a daily view rate.
    pub fn estimate_revenue(
        &self,
        daily_views: f64,
        country: Option<&str>,
        subscribers: Option<&RawCount>,
    ) -> RevenueEstimate {
        let quote = self.quote_cpm(country, subscribers);
        self.revenue_at_cpm(daily_views, quote.cpm)
    }

    /// Flat per-video sponsorship price in the local currency.
    pub fn estimate_sponsorship_price(&self, daily_views: f64) -> u64 {
        sponsorship_price(sanitize_views(daily_views), self.config.sponsorship_floor)
    }

    /// Run the whole pipeline for one channel.
    ///
    /// A supplied `daily_views` wins; otherwise the lifetime average is
    /// derived from the channel's totals.
    pub fn estimate_channel(&self, stats: &ChannelStats, daily_views: Option<f64>) -> ChannelEstimate {
        self.estimate_channel_at(stats, daily_views, Utc::now())
    }

    pub fn estimate_channel_at(
        &self,
        stats: &ChannelStats,
        daily_views: Option<f64>,
        now: DateTime<Utc>,
    ) -> ChannelEstimate {
        let (daily_views, daily_views_source) = match daily_views {
            Some(views) => (sanitize_views(views), DailyViewsSource::Supplied),
            None => {
                let derived =
                    estimate_daily_views_at(stats.total_view_count(), stats.creation_date, now);
                (derived as f64, DailyViewsSource::LifetimeAverage)
            }
        };

        let quote = self.quote_cpm(stats.country.as_deref(), stats.subscribers.as_ref());
        let revenue = self.revenue_at_cpm(daily_views, quote.cpm);
        let estimated_sponsorship_price = self.estimate_sponsorship_price(daily_views);

        debug!(
            channel = stats.channel_name.as_deref().unwrap_or("unknown"),
            daily_views,
            ?daily_views_source,
            earnings = revenue.estimated_monthly_earnings,
            sponsorship = estimated_sponsorship_price,
            "Estimated channel revenue"
        );

        ChannelEstimate {
            channel_name: stats.channel_name.clone(),
            country: stats.country.as_ref().map(|code| code.trim().to_ascii_uppercase()),
            tier: quote.tier,
            daily_views,
            daily_views_source,
            revenue,
            estimated_sponsorship_price,
            currency: self.config.currency.clone(),
        }
    }

    /// Estimate from a CPM the caller already expressed in the local currency.
    ///
    /// Skips the tier lookup and conversion entirely; projections and the
    /// sponsorship price follow the same rules as a channel estimate.
    pub fn estimate_with_local_cpm(&self, daily_views: f64, cpm_local: f64) -> ManualEstimate {
        let daily_views = sanitize_views(daily_views);
        let cpm_local = if cpm_local.is_finite() && cpm_local > 0.0 {
            cpm_local
        } else {
            0.0
        };

        let monthly_views = daily_views * DAYS_PER_MONTH;
        let revenue = RevenueEstimate {
            cpm_local: cpm_local.round() as u64,
            monthly_views,
            yearly_views: daily_views * DAYS_PER_YEAR,
            estimated_monthly_earnings: (monthly_views / 1000.0 * cpm_local).round() as u64,
        };

        ManualEstimate {
            daily_views,
            revenue,
            estimated_sponsorship_price: self.estimate_sponsorship_price(daily_views),
            currency: self.config.currency.clone(),
        }
    }

    // Earnings convert at the unrounded CPM and round once at the end.
    fn revenue_at_cpm(&self, daily_views: f64, cpm: f64) -> RevenueEstimate {
        let daily_views = sanitize_views(daily_views);
        let rate = self.config.exchange_rate;

        let monthly_views = daily_views * DAYS_PER_MONTH;
        let yearly_views = daily_views * DAYS_PER_YEAR;

        let estimated_monthly_earnings = if daily_views == 0.0 {
            0
        } else {
            (monthly_views / 1000.0 * cpm * rate).round() as u64
        };

        RevenueEstimate {
            cpm_local: (cpm * rate).round() as u64,
            monthly_views,
            yearly_views,
            estimated_monthly_earnings,
        }
    }
}

/// Negative or non-finite view rates count as no traffic; larger ones are
/// capped at `MAX_DAILY_VIEWS`.
fn sanitize_views(daily_views: f64) -> f64 {
    if daily_views.is_finite() && daily_views > 0.0 {
        daily_views.min(MAX_DAILY_VIEWS)
    } else {
        0.0
    }
}
