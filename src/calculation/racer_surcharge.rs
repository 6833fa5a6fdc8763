//! Racer surcharge for young drivers in high season.

use rust_decimal::Decimal;

use crate::config::SurchargeRules;
use crate::error::EngineResult;
use crate::models::{AuditStep, Season, VehicleCategory};

use super::adjustment::{PriceAdjustment, checked_mul};

/// Applies the racer surcharge.
///
/// The running price is multiplied by the racer multiplier (1.5 by default)
/// when all of the following hold:
/// - the vehicle is a Racer
/// - the driver is at or below the racer age limit (25 by default)
/// - the rental is in high season
///
/// Otherwise the price passes through unchanged.
///
/// # Examples
///
/// ```
/// use rental_pricing::calculation::apply_racer_surcharge;
/// use rental_pricing::config::SurchargeRules;
/// use rental_pricing::models::{Season, VehicleCategory};
/// use rust_decimal::Decimal;
///
/// let result = apply_racer_surcharge(
///     Decimal::from(50),
///     VehicleCategory::Racer,
///     Decimal::from(25),
///     Season::High,
///     &SurchargeRules::default(),
///     3,
/// )?;
/// assert_eq!(result.price, Decimal::from(75));
/// # Ok::<(), rental_pricing::error::EngineError>(())
/// ```
pub fn apply_racer_surcharge(
    price: Decimal,
    category: VehicleCategory,
    age: Decimal,
    season: Season,
    rules: &SurchargeRules,
    step_number: u32,
) -> EngineResult<PriceAdjustment> {
    const RULE_ID: &str = "racer_surcharge";

    let applies =
        category == VehicleCategory::Racer && age <= rules.racer_age_limit && season.is_high();

    let (adjusted, reasoning) = if applies {
        let adjusted = checked_mul(RULE_ID, price, rules.racer_multiplier)?;
        (
            adjusted,
            format!(
                "Racer driven by a driver aged {} or younger in high season: ${} × {} = ${}",
                rules.racer_age_limit.normalize(),
                price.normalize(),
                rules.racer_multiplier.normalize(),
                adjusted.normalize()
            ),
        )
    } else {
        (
            price,
            format!(
                "No racer surcharge for a {} driven by a driver aged {} in {} season",
                category,
                age.normalize(),
                season
            ),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: RULE_ID.to_string(),
        rule_name: "Racer Surcharge".to_string(),
        input: serde_json::json!({
            "price": price.normalize().to_string(),
            "category": category.to_string(),
            "driver_age": age.normalize().to_string(),
            "season": season.to_string(),
        }),
        output: serde_json::json!({
            "applied": applies,
            "multiplier": rules.racer_multiplier.normalize().to_string(),
            "price": adjusted.normalize().to_string(),
        }),
        reasoning,
    };

    Ok(PriceAdjustment {
        price: adjusted,
        applied: applies,
        audit_step,
    })
}
