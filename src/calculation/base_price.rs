//! Base price calculation.
//!
//! The base price scales with the driver's age: each rental day costs the
//! driver's age in currency units, and each Saturday or Sunday costs that
//! daily rate times the weekend multiplier.

use rust_decimal::Decimal;

use crate::config::SurchargeRules;
use crate::error::EngineResult;
use crate::models::AuditStep;

use super::RentalPeriod;
use super::adjustment::{PriceAdjustment, checked_add, checked_mul};

/// Calculates the base price of a rental before any adjustment.
///
/// `base = age × weekdays + age × weekend_multiplier × weekend_days`
///
/// For a rental with no weekend days this is simply `age × days`.
///
/// # Errors
///
/// Returns `CalculationError` if the product overflows the decimal range.
///
/// # Examples
///
/// ```
/// use rental_pricing::calculation::{RentalPeriod, calculate_base_price};
/// use rental_pricing::config::{SeasonRules, SurchargeRules};
/// use rust_decimal::Decimal;
///
/// // Thursday to Saturday: two weekdays and one Saturday
/// let period = RentalPeriod::from_timestamps(
///     1_704_326_400_000,
///     1_704_499_200_000,
///     &SeasonRules::default(),
/// )?;
/// let result = calculate_base_price(Decimal::from(50), &period, &SurchargeRules::default(), 1)?;
/// // 50 × 2 + 50 × 1.05 × 1 = 152.5
/// assert_eq!(result.price, Decimal::new(1525, 1));
/// # Ok::<(), rental_pricing::error::EngineError>(())
/// ```
pub fn calculate_base_price(
    age: Decimal,
    period: &RentalPeriod,
    rules: &SurchargeRules,
    step_number: u32,
) -> EngineResult<PriceAdjustment> {
    const RULE_ID: &str = "base_price";

    let weekday_amount = checked_mul(RULE_ID, age, Decimal::from(period.weekdays()))?;
    let weekend_rate = checked_mul(RULE_ID, age, rules.weekend_day_multiplier)?;
    let weekend_amount = checked_mul(RULE_ID, weekend_rate, Decimal::from(period.weekend_days))?;
    let price = checked_add(RULE_ID, weekday_amount, weekend_amount)?;

    let reasoning = if period.weekend_days == 0 {
        format!(
            "{} days × ${} = ${}",
            period.days,
            age.normalize(),
            price.normalize()
        )
    } else {
        format!(
            "{} weekdays × ${} + {} weekend days × ${} = ${}",
            period.weekdays(),
            age.normalize(),
            period.weekend_days,
            weekend_rate.normalize(),
            price.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: RULE_ID.to_string(),
        rule_name: "Base Price".to_string(),
        input: serde_json::json!({
            "daily_rate": age.normalize().to_string(),
            "weekdays": period.weekdays(),
            "weekend_days": period.weekend_days,
            "weekend_multiplier": rules.weekend_day_multiplier.normalize().to_string(),
        }),
        output: serde_json::json!({
            "price": price.normalize().to_string(),
        }),
        reasoning,
    };

    Ok(PriceAdjustment {
        price,
        applied: true,
        audit_step,
    })
}
