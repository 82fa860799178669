use std::error::Error;
use std::fmt;

use crate::estimator::EstimatorError;

/// Unified application error.
///
/// Covers everything outside the estimator itself: configuration, the
/// caller's input and writing the result out.
#[derive(Debug)]
pub enum AppError {
    Config(String),
    Input(String),
    Output(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Config error: {}", msg),
            AppError::Input(msg) => write!(f, "Input error: {}", msg),
            AppError::Output(msg) => write!(f, "Output error: {}", msg),
        }
    }
}

impl Error for AppError {}

impl From<EstimatorError> for AppError {
    fn from(err: EstimatorError) -> Self {
        match err {
            EstimatorError::InvalidConfig { message } => AppError::Config(message),
            EstimatorError::InvalidRecord { message } => AppError::Input(message),
        }
    }
}
