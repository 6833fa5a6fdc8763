//! Configuration loading and management for the rental pricing engine.
//!
//! This module provides the [`PricingRules`] table and the functionality to
//! load it from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use rental_pricing::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/pricing.yaml").unwrap();
//! println!("High season multiplier: {}", config.rules().surcharges.high_season_multiplier);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DiscountRules, EligibilityRules, PricingRules, SeasonRules, SurchargeRules};
