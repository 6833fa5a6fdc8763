//! Rental Pricing Engine
//!
//! This crate quotes vehicle rental prices from the driver's age and license
//! history, the vehicle category and the rental dates. Ineligible drivers are
//! rejected with a fixed message; eligible drivers receive a price built from
//! a base rate and an ordered chain of surcharges and discounts.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;

pub use calculation::price;
