//! Core data models for the rental pricing engine.
//!
//! This module contains all the domain models used throughout the engine.

mod quote;
mod request;
mod season;
mod vehicle;

pub use quote::{
    AuditStep, AuditTrace, AuditWarning, EligibilityRejection, PricingOutcome, Quote,
};
pub use request::PricingRequest;
pub use season::Season;
pub use vehicle::VehicleCategory;
