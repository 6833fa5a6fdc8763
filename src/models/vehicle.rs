//! Vehicle category model.
//!
//! This module defines the [`VehicleCategory`] enum for the rentable vehicle
//! classes, including the catch-all `Unknown` category.

use serde::{Deserialize, Serialize};

/// Represents the category of a rental vehicle.
///
/// `Unknown` is a valid category: any unrecognised vehicle type is priced
/// with no category-specific surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleCategory {
    /// Small city car, the only category open to young drivers.
    Compact,
    /// Battery electric vehicle.
    Electric,
    /// Convertible.
    Cabrio,
    /// High-performance car, subject to the young-driver racer surcharge.
    Racer,
    /// Any vehicle type not in the fleet list.
    Unknown,
}

impl VehicleCategory {
    /// The categories that can be matched from a vehicle type name.
    pub const KNOWN: [VehicleCategory; 4] = [
        VehicleCategory::Compact,
        VehicleCategory::Electric,
        VehicleCategory::Cabrio,
        VehicleCategory::Racer,
    ];

    /// Returns the canonical display name of the category.
    pub fn name(&self) -> &'static str {
        match self {
            VehicleCategory::Compact => "Compact",
            VehicleCategory::Electric => "Electric",
            VehicleCategory::Cabrio => "Cabrio",
            VehicleCategory::Racer => "Racer",
            VehicleCategory::Unknown => "Unknown",
        }
    }

    /// Matches a vehicle type name against the known categories.
    ///
    /// The name is capitalised (first character uppercase, the rest
    /// lowercase) and compared exactly, so matching is case-insensitive but
    /// whitespace-sensitive. Empty or unmatched names yield `Unknown`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rental_pricing::models::VehicleCategory;
    ///
    /// assert_eq!(VehicleCategory::from_input("cAbRiO"), VehicleCategory::Cabrio);
    /// assert_eq!(VehicleCategory::from_input("racer"), VehicleCategory::Racer);
    /// assert_eq!(VehicleCategory::from_input("Truck"), VehicleCategory::Unknown);
    /// assert_eq!(VehicleCategory::from_input(""), VehicleCategory::Unknown);
    /// ```
    pub fn from_input(input: &str) -> Self {
        let mut chars = input.chars();
        let Some(first) = chars.next() else {
            return VehicleCategory::Unknown;
        };

        let capitalised: String = first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect();

        Self::KNOWN
            .into_iter()
            .find(|category| category.name() == capitalised)
            .unwrap_or(VehicleCategory::Unknown)
    }

    /// Returns true if the category was not recognised.
    pub fn is_unknown(&self) -> bool {
        *self == VehicleCategory::Unknown
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_names_match() {
        assert_eq!(VehicleCategory::from_input("Compact"), VehicleCategory::Compact);
        assert_eq!(VehicleCategory::from_input("Electric"), VehicleCategory::Electric);
        assert_eq!(VehicleCategory::from_input("Cabrio"), VehicleCategory::Cabrio);
        assert_eq!(VehicleCategory::from_input("Racer"), VehicleCategory::Racer);
    }

    #[test]
    fn test_mixed_case_names_match() {
        assert_eq!(VehicleCategory::from_input("COMPACT"), VehicleCategory::Compact);
        assert_eq!(VehicleCategory::from_input("eLeCtRiC"), VehicleCategory::Electric);
        assert_eq!(VehicleCategory::from_input("rAcEr"), VehicleCategory::Racer);
    }

    #[test]
    fn test_unmatched_names_are_unknown() {
        assert_eq!(VehicleCategory::from_input("Truck"), VehicleCategory::Unknown);
        assert_eq!(VehicleCategory::from_input("Unknown"), VehicleCategory::Unknown);
        assert_eq!(VehicleCategory::from_input("Compacts"), VehicleCategory::Unknown);
    }

    #[test]
    fn test_surrounding_whitespace_is_not_trimmed() {
        assert_eq!(VehicleCategory::from_input(" Compact"), VehicleCategory::Unknown);
        assert_eq!(VehicleCategory::from_input("Compact "), VehicleCategory::Unknown);
    }

    #[test]
    fn test_empty_name_is_unknown() {
        assert_eq!(VehicleCategory::from_input(""), VehicleCategory::Unknown);
    }

    #[test]
    fn test_non_ascii_input_does_not_panic() {
        assert_eq!(VehicleCategory::from_input("ßport"), VehicleCategory::Unknown);
        assert_eq!(VehicleCategory::from_input("élan"), VehicleCategory::Unknown);
    }

    #[test]
    fn test_display_uses_canonical_name() {
        assert_eq!(VehicleCategory::Cabrio.to_string(), "Cabrio");
        assert_eq!(VehicleCategory::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_serializes_as_canonical_name() {
        let json = serde_json::to_string(&VehicleCategory::Racer).unwrap();
        assert_eq!(json, "\"Racer\"");
    }
}
