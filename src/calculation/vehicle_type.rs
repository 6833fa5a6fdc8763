//! Vehicle type normalisation.
//!
//! Requests carry the vehicle type as an arbitrary JSON value. This module
//! maps any such value onto a [`VehicleCategory`] without ever failing.

use serde_json::Value;

use crate::models::VehicleCategory;

/// Maps a raw vehicle type value onto a vehicle category.
///
/// Strings are matched case-insensitively via [`VehicleCategory::from_input`].
/// Every other JSON value (numbers, booleans, `null`, arrays, objects) and
/// the empty string normalise to [`VehicleCategory::Unknown`].
///
/// # Examples
///
/// ```
/// use rental_pricing::calculation::normalize_vehicle_type;
/// use rental_pricing::models::VehicleCategory;
/// use serde_json::json;
///
/// assert_eq!(normalize_vehicle_type(&json!("racer")), VehicleCategory::Racer);
/// assert_eq!(normalize_vehicle_type(&json!(123)), VehicleCategory::Unknown);
/// assert_eq!(normalize_vehicle_type(&json!(null)), VehicleCategory::Unknown);
/// ```
pub fn normalize_vehicle_type(input: &Value) -> VehicleCategory {
    match input {
        Value::String(name) => VehicleCategory::from_input(name),
        _ => VehicleCategory::Unknown,
    }
}
