//! Pricing outcome models for the rental pricing engine.
//!
//! This module contains the [`PricingOutcome`] type and its associated
//! structures: the [`Quote`] produced for an eligible driver, the
//! [`EligibilityRejection`] returned otherwise, and the audit trace that
//! records every rule decision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Season, VehicleCategory};

/// A single step in the audit trace recording a pricing decision.
///
/// Each step captures the input, output, and reasoning for a rule
/// application, whether or not the rule changed the price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated while pricing.
///
/// Warnings flag inputs that were accepted but look suspicious.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a quote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of pricing steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated while pricing.
    pub warnings: Vec<AuditWarning>,
}

/// Why a driver cannot be quoted.
///
/// The display form of each variant is the message returned to callers.
///
/// # Example
///
/// ```
/// use rental_pricing::models::EligibilityRejection;
///
/// assert_eq!(
///     EligibilityRejection::TooYoung.to_string(),
///     "Driver too young - cannot quote the price"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum EligibilityRejection {
    /// The driver is below the minimum age.
    TooYoung,
    /// The driver's license has not been held long enough.
    LicenseTooRecent {
        /// The minimum number of license years required.
        minimum_years: Decimal,
    },
    /// Young drivers are restricted to one vehicle category.
    YoungDriverRestricted {
        /// The age at or below which the restriction applies.
        age_limit: Decimal,
        /// The only category young drivers may rent.
        allowed: VehicleCategory,
    },
}

impl EligibilityRejection {
    /// Returns a stable machine-readable code for the rejection.
    pub fn code(&self) -> &'static str {
        match self {
            EligibilityRejection::TooYoung => "too_young",
            EligibilityRejection::LicenseTooRecent { .. } => "license_too_recent",
            EligibilityRejection::YoungDriverRestricted { .. } => "young_driver_restricted",
        }
    }
}

impl std::fmt::Display for EligibilityRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EligibilityRejection::TooYoung => {
                write!(f, "Driver too young - cannot quote the price")
            }
            EligibilityRejection::LicenseTooRecent { minimum_years } => write!(
                f,
                "Driver license held for less than {} year - cannot rent",
                minimum_years.normalize()
            ),
            EligibilityRejection::YoungDriverRestricted { age_limit, allowed } => write!(
                f,
                "Drivers {} y/o or less can only rent {} vehicles",
                age_limit.normalize(),
                allowed
            ),
        }
    }
}

/// A priced rental.
///
/// The display form is `$` followed by the amount without trailing
/// fractional zeros, e.g. `$150`, `$152.5`, `$86.25`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// The final price, rounded to cents.
    pub amount: Decimal,
    /// The vehicle category the request normalised to.
    pub category: VehicleCategory,
    /// Number of rental days, counting both ends.
    pub rental_days: u64,
    /// Number of Saturdays and Sundays in the rental.
    pub weekend_days: u64,
    /// The pricing season.
    pub season: Season,
    /// Every rule decision taken to reach the amount.
    pub audit_trace: AuditTrace,
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.amount.normalize())
    }
}

/// The result of pricing one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum PricingOutcome {
    /// The driver is not eligible; no price was computed.
    Rejected(EligibilityRejection),
    /// The driver is eligible and was quoted.
    Quoted(Quote),
}

impl PricingOutcome {
    /// Returns the quote if the driver was eligible.
    pub fn quote(&self) -> Option<&Quote> {
        match self {
            PricingOutcome::Quoted(quote) => Some(quote),
            PricingOutcome::Rejected(_) => None,
        }
    }

    /// Returns the rejection if the driver was not eligible.
    pub fn rejection(&self) -> Option<&EligibilityRejection> {
        match self {
            PricingOutcome::Rejected(rejection) => Some(rejection),
            PricingOutcome::Quoted(_) => None,
        }
    }

    /// Returns true if a price was computed.
    pub fn is_quoted(&self) -> bool {
        matches!(self, PricingOutcome::Quoted(_))
    }
}

impl std::fmt::Display for PricingOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingOutcome::Rejected(rejection) => std::fmt::Display::fmt(rejection, f),
            PricingOutcome::Quoted(quote) => std::fmt::Display::fmt(quote, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn quote_with_amount(amount: &str) -> Quote {
        Quote {
            amount: dec(amount),
            category: VehicleCategory::Compact,
            rental_days: 3,
            weekend_days: 0,
            season: Season::Low,
            audit_trace: AuditTrace::default(),
        }
    }

    #[test]
    fn test_rejection_messages_with_standard_thresholds() {
        assert_eq!(
            EligibilityRejection::TooYoung.to_string(),
            "Driver too young - cannot quote the price"
        );
        assert_eq!(
            EligibilityRejection::LicenseTooRecent {
                minimum_years: Decimal::ONE
            }
            .to_string(),
            "Driver license held for less than 1 year - cannot rent"
        );
        assert_eq!(
            EligibilityRejection::YoungDriverRestricted {
                age_limit: Decimal::from(21),
                allowed: VehicleCategory::Compact,
            }
            .to_string(),
            "Drivers 21 y/o or less can only rent Compact vehicles"
        );
    }

    #[test]
    fn test_rejection_message_drops_trailing_zeros() {
        let rejection = EligibilityRejection::LicenseTooRecent {
            minimum_years: dec("1.00"),
        };
        assert_eq!(
            rejection.to_string(),
            "Driver license held for less than 1 year - cannot rent"
        );
    }

    #[test]
    fn test_quote_display_omits_trailing_zeros() {
        assert_eq!(quote_with_amount("150.00").to_string(), "$150");
        assert_eq!(quote_with_amount("152.50").to_string(), "$152.5");
        assert_eq!(quote_with_amount("86.25").to_string(), "$86.25");
    }

    #[test]
    fn test_outcome_display_delegates() {
        let quoted = PricingOutcome::Quoted(quote_with_amount("40"));
        let rejected = PricingOutcome::Rejected(EligibilityRejection::TooYoung);

        assert_eq!(quoted.to_string(), "$40");
        assert_eq!(
            rejected.to_string(),
            "Driver too young - cannot quote the price"
        );
    }

    #[test]
    fn test_outcome_accessors() {
        let quoted = PricingOutcome::Quoted(quote_with_amount("40"));
        assert!(quoted.is_quoted());
        assert!(quoted.quote().is_some());
        assert!(quoted.rejection().is_none());

        let rejected = PricingOutcome::Rejected(EligibilityRejection::TooYoung);
        assert!(!rejected.is_quoted());
        assert!(rejected.quote().is_none());
        assert_eq!(rejected.rejection(), Some(&EligibilityRejection::TooYoung));
    }

    #[test]
    fn test_rejection_serializes_with_code_tag() {
        let json = serde_json::to_value(EligibilityRejection::TooYoung).unwrap();
        assert_eq!(json, serde_json::json!({ "code": "too_young" }));
    }

    #[test]
    fn test_rejection_code_matches_serialized_tag() {
        let rejection = EligibilityRejection::YoungDriverRestricted {
            age_limit: Decimal::from(21),
            allowed: VehicleCategory::Compact,
        };
        let json = serde_json::to_value(&rejection).unwrap();
        assert_eq!(json["code"], rejection.code());
    }
}
