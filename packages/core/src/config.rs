use std::env;

use crate::estimator::EstimatorConfig;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub estimator: EstimatorConfig,
}

impl Config {
    /// Read optional `EXCHANGE_RATE` and `CURRENCY` from the environment.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut estimator = EstimatorConfig::default();

        if let Some(raw) = lookup("EXCHANGE_RATE") {
            estimator.exchange_rate = raw
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("EXCHANGE_RATE must be a valid number, got {:?}", raw))?;
        }

        if let Some(currency) = lookup("CURRENCY") {
            estimator.currency = currency.trim().to_string();
        }

        estimator.validate().map_err(|err| err.to_string())?;

        Ok(Self { estimator })
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        exchange_rate: Option<f64>,
        currency: Option<String>,
    ) -> Result<Self, String> {
        if let Some(rate) = exchange_rate {
            self.estimator.exchange_rate = rate;
        }
        if let Some(currency) = currency {
            self.estimator.currency = currency;
        }

        self.estimator.validate().map_err(|err| err.to_string())?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn unset_environment_uses_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.estimator, EstimatorConfig::default());
    }

    #[test]
    fn reads_exchange_rate_and_currency() {
        let config =
            Config::from_lookup(lookup_from(&[("EXCHANGE_RATE", " 1.0 "), ("CURRENCY", "USD")]))
                .unwrap();
        assert_eq!(config.estimator.exchange_rate, 1.0);
        assert_eq!(config.estimator.currency, "USD");
    }

    #[test]
    fn rejects_unparseable_exchange_rate() {
        let err = Config::from_lookup(lookup_from(&[("EXCHANGE_RATE", "lots")])).unwrap_err();
        assert!(err.contains("EXCHANGE_RATE"));
    }

    #[test]
    fn rejects_negative_exchange_rate() {
        assert!(Config::from_lookup(lookup_from(&[("EXCHANGE_RATE", "-2")])).is_err());
    }

    #[test]
    fn overrides_take_precedence() {
        let config = Config::default()
            .with_overrides(Some(92.5), Some("EUR".to_string()))
            .unwrap();
        assert_eq!(config.estimator.exchange_rate, 92.5);
        assert_eq!(config.estimator.currency, "EUR");

        assert!(Config::default().with_overrides(Some(0.0), None).is_err());
    }
}
