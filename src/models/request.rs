//! Pricing request model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Everything needed to quote one rental.
///
/// The vehicle type is kept as a raw JSON value because callers may send
/// anything (a number, `null`, an empty string); normalisation happens in
/// the engine and never fails. Locations are carried but do not affect the
/// price.
///
/// # Example
///
/// ```
/// use rental_pricing::models::PricingRequest;
/// use rust_decimal::Decimal;
///
/// let request = PricingRequest::new(
///     "Tallinn",
///     "Tartu",
///     1_704_067_200_000,
///     1_704_240_000_000,
///     "Compact",
///     Decimal::from(50),
///     Decimal::from(10),
/// );
/// assert_eq!(request.vehicle_type, serde_json::json!("Compact"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRequest {
    /// Where the vehicle is collected.
    pub pickup_location: String,
    /// Where the vehicle is returned.
    pub dropoff_location: String,
    /// Pickup time in epoch milliseconds.
    pub pickup_timestamp: i64,
    /// Dropoff time in epoch milliseconds.
    pub dropoff_timestamp: i64,
    /// The requested vehicle type, expected to be a string.
    #[serde(default)]
    pub vehicle_type: serde_json::Value,
    /// The driver's age in years.
    pub driver_age: Decimal,
    /// How many years the driver has held a license.
    pub license_years: Decimal,
}

impl PricingRequest {
    /// Creates a new request.
    pub fn new(
        pickup_location: impl Into<String>,
        dropoff_location: impl Into<String>,
        pickup_timestamp: i64,
        dropoff_timestamp: i64,
        vehicle_type: impl Into<serde_json::Value>,
        driver_age: Decimal,
        license_years: Decimal,
    ) -> Self {
        Self {
            pickup_location: pickup_location.into(),
            dropoff_location: dropoff_location.into(),
            pickup_timestamp,
            dropoff_timestamp,
            vehicle_type: vehicle_type.into(),
            driver_age,
            license_years,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_request() {
        let json = r#"{
            "pickup_location": "Tallinn",
            "dropoff_location": "Tartu",
            "pickup_timestamp": 1704067200000,
            "dropoff_timestamp": 1704240000000,
            "vehicle_type": "Compact",
            "driver_age": 50,
            "license_years": "1.5"
        }"#;

        let request: PricingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.pickup_location, "Tallinn");
        assert_eq!(request.pickup_timestamp, 1_704_067_200_000);
        assert_eq!(request.vehicle_type, serde_json::json!("Compact"));
        assert_eq!(request.driver_age, Decimal::from(50));
        assert_eq!(request.license_years, Decimal::from_str("1.5").unwrap());
    }

    #[test]
    fn test_missing_vehicle_type_deserializes_as_null() {
        let json = r#"{
            "pickup_location": "Tallinn",
            "dropoff_location": "Tartu",
            "pickup_timestamp": 0,
            "dropoff_timestamp": 0,
            "driver_age": 30,
            "license_years": 5
        }"#;

        let request: PricingRequest = serde_json::from_str(json).unwrap();
        assert!(request.vehicle_type.is_null());
    }

    #[test]
    fn test_deserialize_numeric_vehicle_type_and_fractional_license() {
        let json = r#"{
            "pickup_location": "Tallinn",
            "dropoff_location": "Pärnu",
            "pickup_timestamp": 0,
            "dropoff_timestamp": 0,
            "vehicle_type": 123,
            "driver_age": 30,
            "license_years": 0.5
        }"#;

        let request: PricingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.dropoff_location, "Pärnu");
        assert_eq!(request.vehicle_type, serde_json::json!(123));
        assert_eq!(request.license_years, Decimal::from_str("0.5").unwrap());
    }

    #[test]
    fn test_non_string_vehicle_type_is_accepted() {
        let request = PricingRequest::new(
            "Tallinn",
            "Tartu",
            0,
            0,
            123,
            Decimal::from(30),
            Decimal::from(5),
        );
        assert_eq!(request.vehicle_type, serde_json::json!(123));
    }
}
