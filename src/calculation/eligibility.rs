//! Driver eligibility validation.
//!
//! Eligibility is checked before any price is computed. A failed check is a
//! normal outcome, reported as an [`EligibilityRejection`] rather than an
//! error.

use rust_decimal::Decimal;

use crate::config::EligibilityRules;
use crate::models::{AuditStep, EligibilityRejection, VehicleCategory};

/// The only category young drivers may rent.
pub const YOUNG_DRIVER_CATEGORY: VehicleCategory = VehicleCategory::Compact;

/// The result of an eligibility check, including the audit step.
#[derive(Debug, Clone)]
pub struct EligibilityResult {
    /// Why the driver was rejected, or `None` if eligible.
    pub rejection: Option<EligibilityRejection>,
    /// The audit step recording this check.
    pub audit_step: AuditStep,
}

/// Validates that a driver may be quoted for a vehicle category.
///
/// Checks run in a fixed order and the first failure wins:
/// 1. Age below the minimum age
/// 2. License held for less than the minimum number of years
/// 3. Age at or below the young-driver limit with a non-Compact vehicle
///    (including `Unknown`)
///
/// # Examples
///
/// ```
/// use rental_pricing::calculation::validate_eligibility;
/// use rental_pricing::config::EligibilityRules;
/// use rental_pricing::models::{EligibilityRejection, VehicleCategory};
/// use rust_decimal::Decimal;
///
/// let rules = EligibilityRules::default();
///
/// let result = validate_eligibility(
///     Decimal::from(17), Decimal::from(2), VehicleCategory::Compact, &rules, 1,
/// );
/// assert_eq!(result.rejection, Some(EligibilityRejection::TooYoung));
///
/// let result = validate_eligibility(
///     Decimal::from(30), Decimal::from(5), VehicleCategory::Racer, &rules, 1,
/// );
/// assert!(result.rejection.is_none());
/// ```
pub fn validate_eligibility(
    age: Decimal,
    license_years: Decimal,
    category: VehicleCategory,
    rules: &EligibilityRules,
    step_number: u32,
) -> EligibilityResult {
    let rejection = if age < rules.minimum_age {
        Some(EligibilityRejection::TooYoung)
    } else if license_years < rules.minimum_license_years {
        Some(EligibilityRejection::LicenseTooRecent {
            minimum_years: rules.minimum_license_years,
        })
    } else if age <= rules.young_driver_age_limit && category != YOUNG_DRIVER_CATEGORY {
        Some(EligibilityRejection::YoungDriverRestricted {
            age_limit: rules.young_driver_age_limit,
            allowed: YOUNG_DRIVER_CATEGORY,
        })
    } else {
        None
    };

    let reasoning = match &rejection {
        Some(rejection) => format!("Driver rejected: {}", rejection),
        None => format!(
            "Driver aged {} with {} license years may rent {}",
            age.normalize(),
            license_years.normalize(),
            category
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "driver_eligibility".to_string(),
        rule_name: "Driver Eligibility".to_string(),
        input: serde_json::json!({
            "driver_age": age.normalize().to_string(),
            "license_years": license_years.normalize().to_string(),
            "category": category.to_string(),
        }),
        output: serde_json::json!({
            "eligible": rejection.is_none(),
            "rejection": rejection.as_ref().map(ToString::to_string),
        }),
        reasoning,
    };

    EligibilityResult {
        rejection,
        audit_step,
    }
}
