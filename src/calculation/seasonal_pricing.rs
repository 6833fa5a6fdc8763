//! High-season multiplier.

use rust_decimal::Decimal;

use crate::config::SurchargeRules;
use crate::error::EngineResult;
use crate::models::{AuditStep, Season};

use super::adjustment::{PriceAdjustment, checked_mul};

/// Applies the high-season multiplier to the entire running price.
///
/// Runs after the license surcharges, so the flat novice surcharge is also
/// scaled by the multiplier.
///
/// # Examples
///
/// ```
/// use rental_pricing::calculation::apply_seasonal_pricing;
/// use rental_pricing::config::SurchargeRules;
/// use rental_pricing::models::Season;
/// use rust_decimal::Decimal;
///
/// let result = apply_seasonal_pricing(Decimal::from(75), Season::High, &SurchargeRules::default(), 6)?;
/// assert_eq!(result.price, Decimal::new(8625, 2));
/// # Ok::<(), rental_pricing::error::EngineError>(())
/// ```
pub fn apply_seasonal_pricing(
    price: Decimal,
    season: Season,
    rules: &SurchargeRules,
    step_number: u32,
) -> EngineResult<PriceAdjustment> {
    const RULE_ID: &str = "seasonal_pricing";

    let applies = season.is_high();
    let adjusted = if applies {
        checked_mul(RULE_ID, price, rules.high_season_multiplier)?
    } else {
        price
    };

    let reasoning = if applies {
        format!(
            "High season: ${} × {} = ${}",
            price.normalize(),
            rules.high_season_multiplier.normalize(),
            adjusted.normalize()
        )
    } else {
        "Low season, no seasonal multiplier".to_string()
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: RULE_ID.to_string(),
        rule_name: "Seasonal Pricing".to_string(),
        input: serde_json::json!({
            "price": price.normalize().to_string(),
            "season": season.to_string(),
        }),
        output: serde_json::json!({
            "applied": applies,
            "multiplier": rules.high_season_multiplier.normalize().to_string(),
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
