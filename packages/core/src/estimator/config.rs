//! Configuration for the revenue estimator

use serde::{Deserialize, Serialize};

use crate::estimator::error::EstimatorError;

/// Fixed reference-currency (USD) to local-currency conversion rate.
pub const DEFAULT_EXCHANGE_RATE: f64 = 83.0;
pub const DEFAULT_CURRENCY: &str = "INR";

/// Lowest sponsorship price quoted, in the local currency.
pub const DEFAULT_SPONSORSHIP_FLOOR: f64 = 5_000.0;

pub const DEFAULT_MIN_CPM: f64 = 0.3;
pub const DEFAULT_MAX_CPM: f64 = 15.0;

/// Configuration for the revenue estimator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    pub exchange_rate: f64,
    pub currency: String,
    pub cpm_band: CpmBand,
    pub sponsorship_floor: f64,
}

/// Safety band every CPM is clamped into, in the reference currency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CpmBand {
    pub min: f64,
    pub max: f64,
}

impl EstimatorConfig {
    /// Reject values that would let an estimate go negative or non-finite.
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if !self.exchange_rate.is_finite() || self.exchange_rate <= 0.0 {
            return Err(EstimatorError::invalid_config(format!(
                "exchange rate must be a positive number, got {}",
                self.exchange_rate
            )));
        }

        if self.currency.trim().is_empty() {
            return Err(EstimatorError::invalid_config("currency must not be empty"));
        }

        self.cpm_band.validate()?;

        if !self.sponsorship_floor.is_finite() || self.sponsorship_floor < 0.0 {
            return Err(EstimatorError::invalid_config(format!(
                "sponsorship floor must be a non-negative number, got {}",
                self.sponsorship_floor
            )));
        }

        Ok(())
    }
}

impl CpmBand {
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min < 0.0 {
            return Err(EstimatorError::invalid_config(format!(
                "CPM band bounds must be finite and non-negative, got [{}, {}]",
                self.min, self.max
            )));
        }

        if self.min > self.max {
            return Err(EstimatorError::invalid_config(format!(
                "CPM band is inverted: min {} > max {}",
                self.min, self.max
            )));
        }

        Ok(())
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            exchange_rate: DEFAULT_EXCHANGE_RATE,
            currency: DEFAULT_CURRENCY.to_string(),
            cpm_band: CpmBand::default(),
            sponsorship_floor: DEFAULT_SPONSORSHIP_FLOOR,
        }
    }
}

impl Default for CpmBand {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_CPM,
            max: DEFAULT_MAX_CPM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(EstimatorConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_exchange_rate() {
        for rate in [0.0, -83.0, f64::NAN, f64::INFINITY] {
            let config = EstimatorConfig {
                exchange_rate: rate,
                ..EstimatorConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(EstimatorError::InvalidConfig { .. })
            ));
        }
    }

    #[test]
    fn rejects_inverted_cpm_band() {
        let config = EstimatorConfig {
            cpm_band: CpmBand { min: 20.0, max: 15.0 },
            ..EstimatorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_negative_sponsorship_floor() {
        let config = EstimatorConfig {
            sponsorship_floor: -1.0,
            ..EstimatorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_blank_currency() {
        let config = EstimatorConfig {
            currency: "  ".to_string(),
            ..EstimatorConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
