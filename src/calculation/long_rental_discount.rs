//! Long-rental discount.

use rust_decimal::Decimal;

use crate::config::DiscountRules;
use crate::error::EngineResult;
use crate::models::{AuditStep, Season};

use super::adjustment::{PriceAdjustment, checked_mul};

/// Applies the long-rental discount.
///
/// Low-season rentals longer than the threshold (more than 10 days by
/// default) pay the running price times the discount multiplier (0.9 by
/// default). High-season rentals never receive the discount.
///
/// # Examples
///
/// ```
/// use rental_pricing::calculation::apply_long_rental_discount;
/// use rental_pricing::config::DiscountRules;
/// use rental_pricing::models::Season;
/// use rust_decimal::Decimal;
///
/// let result = apply_long_rental_discount(
///     Decimal::from(333),
///     11,
///     Season::Low,
///     &DiscountRules::default(),
///     7,
/// )?;
/// assert_eq!(result.price, Decimal::new(2997, 1));
/// # Ok::<(), rental_pricing::error::EngineError>(())
/// ```
pub fn apply_long_rental_discount(
    price: Decimal,
    rental_days: u64,
    season: Season,
    rules: &DiscountRules,
    step_number: u32,
) -> EngineResult<PriceAdjustment> {
    const RULE_ID: &str = "long_rental_discount";

    let applies = rental_days > rules.long_rental_days_threshold && season == Season::Low;
    let adjusted = if applies {
        checked_mul(RULE_ID, price, rules.long_rental_multiplier)?
    } else {
        price
    };

    let reasoning = if applies {
        format!(
            "{} days in low season exceeds {}: ${} × {} = ${}",
            rental_days,
            rules.long_rental_days_threshold,
            price.normalize(),
            rules.long_rental_multiplier.normalize(),
            adjusted.normalize()
        )
    } else {
        format!(
            "No long-rental discount for {} days in {} season",
            rental_days, season
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: RULE_ID.to_string(),
        rule_name: "Long Rental Discount".to_string(),
        input: serde_json::json!({
            "price": price.normalize().to_string(),
            "rental_days": rental_days,
            "season": season.to_string(),
        }),
        output: serde_json::json!({
            "applied": applies,
            "multiplier": rules.long_rental_multiplier.normalize().to_string(),
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
