use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::error::AppError;
use crate::estimator::{parse_creation_date, ChannelStats, RawCount, RevenueEstimator};

/// Creator revenue estimator CLI arguments
#[derive(Debug, Parser)]
#[command(
    name = "creator-revenue",
    version,
    about = "Estimate a creator's ad earnings and sponsorship price from channel statistics"
)]
pub struct Cli {
    /// Reference-currency to local-currency rate (overrides EXCHANGE_RATE)
    #[arg(long, global = true)]
    pub exchange_rate: Option<f64>,

    /// Local currency code reported with the estimate (overrides CURRENCY)
    #[arg(long, global = true)]
    pub currency: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate from channel statistics
    Channel(ChannelArgs),
    /// Estimate from daily views and a CPM already in the local currency
    Manual(ManualArgs),
}

#[derive(Debug, Default, Args)]
pub struct ChannelArgs {
    /// JSON channel record as returned by the metadata provider
    #[arg(long)]
    pub record: Option<PathBuf>,

    #[arg(long)]
    pub channel_name: Option<String>,

    /// Lifetime channel views; digit separators are ignored
    #[arg(long)]
    pub total_views: Option<String>,

    /// Channel creation date (YYYY-MM-DD, RFC 3339 or "Jan 5, 2010")
    #[arg(long)]
    pub creation_date: Option<String>,

    /// ISO 3166 alpha-2 country code
    #[arg(long)]
    pub country: Option<String>,

    /// Subscriber count; digit separators are ignored
    #[arg(long)]
    pub subscribers: Option<String>,

    /// Measured daily views; skips the lifetime-average derivation
    #[arg(long)]
    pub daily_views: Option<f64>,
}

#[derive(Debug, Args)]
pub struct ManualArgs {
    #[arg(long)]
    pub daily_views: f64,

    /// CPM in the local currency
    #[arg(long)]
    pub cpm: f64,
}

impl Cli {
    /// Apply the global flags to an environment-derived config.
    pub fn resolve_config(&self, config: Config) -> Result<Config, AppError> {
        config
            .with_overrides(self.exchange_rate, self.currency.clone())
            .map_err(AppError::Config)
    }

    /// Run the selected command and return the JSON it produces.
    pub fn run(&self, config: &Config) -> Result<String, AppError> {
        let estimator = RevenueEstimator::new(config.estimator.clone())?;

        match &self.command {
            Command::Channel(args) => {
                let stats = args.channel_stats()?;
                let estimate = estimator.estimate_channel(&stats, args.daily_views);
                info!(
                    channel = estimate.channel_name.as_deref().unwrap_or("unknown"),
                    tier = %estimate.tier,
                    earnings = estimate.revenue.estimated_monthly_earnings,
                    "Channel estimate ready"
                );
                render(&estimate, self.pretty)
            }
            Command::Manual(args) => {
                let estimate = estimator.estimate_with_local_cpm(args.daily_views, args.cpm);
                info!(
                    earnings = estimate.revenue.estimated_monthly_earnings,
                    "Manual estimate ready"
                );
                render(&estimate, self.pretty)
            }
        }
    }
}

impl ChannelArgs {
    /// Merge the optional record file with flags; flags win field by field.
    pub fn channel_stats(&self) -> Result<ChannelStats, AppError> {
        let mut stats = match &self.record {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|err| {
                    AppError::Input(format!("cannot read {}: {}", path.display(), err))
                })?;
                ChannelStats::from_json(&raw)?
            }
            None => ChannelStats::default(),
        };

        if let Some(name) = &self.channel_name {
            stats.channel_name = Some(name.clone());
        }
        if let Some(total_views) = &self.total_views {
            stats.total_views = Some(RawCount::from(total_views.as_str()));
        }
        if let Some(country) = &self.country {
            stats.country = Some(country.clone());
        }
        if let Some(subscribers) = &self.subscribers {
            stats.subscribers = Some(RawCount::from(subscribers.as_str()));
        }
        if let Some(raw) = &self.creation_date {
            let date = parse_creation_date(raw)
                .ok_or_else(|| AppError::Input(format!("invalid creation date: {}", raw)))?;
            stats.creation_date = Some(date);
        }

        Ok(stats)
    }
}

fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String, AppError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.map_err(|err| AppError::Output(err.to_string()))
}
