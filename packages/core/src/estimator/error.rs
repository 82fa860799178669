//! Error types for estimator setup and input parsing
//!
//! The estimate operations themselves are total and never fail; errors only
//! surface while building an estimator or decoding an upstream record.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstimatorError {
    #[error("Invalid estimator configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Invalid channel record: {message}")]
    InvalidRecord { message: String },
}

impl EstimatorError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig { message: message.into() }
    }

    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord { message: message.into() }
    }
}

impl From<serde_json::Error> for EstimatorError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_record(err.to_string())
    }
}
