//! Configuration types for rental pricing.
//!
//! This module contains the strongly-typed rule table that drives every
//! eligibility check and price adjustment. The [`Default`] implementations
//! carry the standard tariff; a YAML file may override any subset of it.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Driver eligibility thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EligibilityRules {
    /// Drivers younger than this cannot be quoted at all.
    pub minimum_age: Decimal,
    /// Drivers at or below this age may only rent Compact vehicles.
    pub young_driver_age_limit: Decimal,
    /// Minimum number of years a license must have been held.
    pub minimum_license_years: Decimal,
}

impl Default for EligibilityRules {
    fn default() -> Self {
        Self {
            minimum_age: Decimal::from(18),
            young_driver_age_limit: Decimal::from(21),
            minimum_license_years: Decimal::ONE,
        }
    }
}

/// The high-season window, as inclusive calendar months (January = 1).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SeasonRules {
    /// First calendar month of high season.
    pub high_season_start_month: u32,
    /// Last calendar month of high season.
    pub high_season_end_month: u32,
}

impl Default for SeasonRules {
    fn default() -> Self {
        // April through October
        Self {
            high_season_start_month: 4,
            high_season_end_month: 10,
        }
    }
}

/// Surcharges applied on top of the base price.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SurchargeRules {
    /// Multiplier on the daily base rate for Saturdays and Sundays.
    pub weekend_day_multiplier: Decimal,
    /// Racer drivers at or below this age pay the racer surcharge in high season.
    pub racer_age_limit: Decimal,
    /// Racer surcharge multiplier.
    pub racer_multiplier: Decimal,
    /// Drivers with fewer license years than this pay the inexperience surcharge.
    pub inexperienced_license_years: Decimal,
    /// Inexperience surcharge multiplier.
    pub inexperienced_multiplier: Decimal,
    /// Drivers with fewer license years than this pay the novice daily surcharge in high season.
    pub novice_license_years: Decimal,
    /// Flat novice surcharge per rental day.
    pub novice_daily_surcharge: Decimal,
    /// Multiplier applied to the running price in high season.
    pub high_season_multiplier: Decimal,
}

impl Default for SurchargeRules {
    fn default() -> Self {
        Self {
            weekend_day_multiplier: Decimal::new(105, 2),
            racer_age_limit: Decimal::from(25),
            racer_multiplier: Decimal::new(150, 2),
            inexperienced_license_years: Decimal::from(2),
            inexperienced_multiplier: Decimal::new(130, 2),
            novice_license_years: Decimal::from(3),
            novice_daily_surcharge: Decimal::from(15),
            high_season_multiplier: Decimal::new(115, 2),
        }
    }
}

/// Discounts applied after all surcharges.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DiscountRules {
    /// Rentals longer than this many days qualify for the long-rental discount.
    pub long_rental_days_threshold: u64,
    /// Long-rental discount multiplier (low season only).
    pub long_rental_multiplier: Decimal,
}

impl Default for DiscountRules {
    fn default() -> Self {
        Self {
            long_rental_days_threshold: 10,
            long_rental_multiplier: Decimal::new(90, 2),
        }
    }
}

/// The complete pricing rule table.
///
/// One immutable value holds every threshold and multiplier used by the
/// engine. Sections missing from a YAML file fall back to their defaults.
///
/// # Example
///
/// ```
/// use rental_pricing::config::PricingRules;
/// use rust_decimal::Decimal;
///
/// let rules = PricingRules::default();
/// assert_eq!(rules.eligibility.minimum_age, Decimal::from(18));
/// assert!(rules.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PricingRules {
    /// Driver eligibility thresholds.
    pub eligibility: EligibilityRules,
    /// High-season window.
    pub season: SeasonRules,
    /// Surcharges.
    pub surcharges: SurchargeRules,
    /// Discounts.
    pub discounts: DiscountRules,
}

impl PricingRules {
    /// Checks that the rule table is internally consistent.
    ///
    /// Returns `InvalidRules` if a season month is not a calendar month or
    /// the high season starts after it ends.
    pub fn validate(&self) -> EngineResult<()> {
        let season = &self.season;

        for (name, month) in [
            ("start", season.high_season_start_month),
            ("end", season.high_season_end_month),
        ] {
            if !(1..=12).contains(&month) {
                return Err(EngineError::InvalidRules {
                    message: format!(
                        "high season {} month {} is not a calendar month",
                        name, month
                    ),
                });
            }
        }

        if season.high_season_start_month > season.high_season_end_month {
            return Err(EngineError::InvalidRules {
                message: format!(
                    "high season starts in month {} but ends in month {}",
                    season.high_season_start_month, season.high_season_end_month
                ),
            });
        }

        Ok(())
    }
}
