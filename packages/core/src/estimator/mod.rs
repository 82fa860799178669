//! Revenue Estimation Module
//!
//! Turns public channel statistics into monetization estimates: a tiered,
//! subscriber-adjusted CPM, monthly/yearly view projections, monthly ad
//! earnings and a per-video sponsorship price. Every operation is a pure
//! function of its inputs.

pub mod config;
pub mod cpm;
pub mod daily_views;
pub mod engine;
pub mod error;
pub mod sponsorship;
pub mod types;


pub use config::{CpmBand, EstimatorConfig};
pub use engine::RevenueEstimator;
pub use error::EstimatorError;
pub use types::*;
