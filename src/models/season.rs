//! Rental season model.

use serde::{Deserialize, Serialize};

/// The pricing season of a rental.
///
/// # Example
///
/// ```
/// use rental_pricing::models::Season;
///
/// assert_eq!(Season::High.to_string(), "High");
/// assert!(Season::High.is_high());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// The rental touches or spans the high-season months.
    High,
    /// Every other rental.
    Low,
}

impl Season {
    /// Returns true for high season.
    pub fn is_high(&self) -> bool {
        *self == Season::High
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::High => write!(f, "High"),
            Season::Low => write!(f, "Low"),
        }
    }
}
