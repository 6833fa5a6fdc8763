//! Calculation logic for the rental pricing engine.
//!
//! This module contains all the pricing functions: vehicle type
//! normalisation, rental period and season derivation, driver eligibility,
//! the base price with its weekend premium, the racer, license and seasonal
//! surcharges, the long-rental discount, rounding, and the orchestration that
//! runs them in order.

mod adjustment;
mod base_price;
mod eligibility;
mod engine;
mod license_surcharge;
mod long_rental_discount;
mod racer_surcharge;
mod rental_period;
mod rounding;
mod seasonal_pricing;
mod vehicle_type;

pub use adjustment::PriceAdjustment;
pub use base_price::calculate_base_price;
pub use eligibility::{EligibilityResult, YOUNG_DRIVER_CATEGORY, validate_eligibility};
pub use engine::{price, quote};
pub use license_surcharge::{apply_inexperience_surcharge, apply_novice_surcharge};
pub use long_rental_discount::apply_long_rental_discount;
pub use racer_surcharge::apply_racer_surcharge;
pub use rental_period::{MILLISECONDS_PER_DAY, RentalPeriod, rental_days, season, weekend_days};
pub use rounding::{QUOTE_DECIMAL_PLACES, round_to_cents};
pub use seasonal_pricing::apply_seasonal_pricing;
pub use vehicle_type::normalize_vehicle_type;
