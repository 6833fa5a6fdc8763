//! License experience surcharges.
//!
//! Two independent surcharges apply to drivers with little license history:
//! a multiplicative inexperience surcharge, followed by a flat per-day novice
//! surcharge in high season. A driver below both thresholds pays both.

use rust_decimal::Decimal;

use crate::config::SurchargeRules;
use crate::error::EngineResult;
use crate::models::{AuditStep, Season};

use super::adjustment::{PriceAdjustment, checked_add, checked_mul};

/// Applies the inexperience surcharge.
///
/// Drivers with fewer license years than the inexperience threshold (2 by
/// default) pay the running price times the inexperience multiplier (1.3 by
/// default).
///
/// # Examples
///
/// ```
/// use rental_pricing::calculation::apply_inexperience_surcharge;
/// use rental_pricing::config::SurchargeRules;
/// use rust_decimal::Decimal;
///
/// let result = apply_inexperience_surcharge(
///     Decimal::from(100),
///     Decimal::new(15, 1),
///     &SurchargeRules::default(),
///     4,
/// )?;
/// assert_eq!(result.price, Decimal::from(130));
/// # Ok::<(), rental_pricing::error::EngineError>(())
/// ```
pub fn apply_inexperience_surcharge(
    price: Decimal,
    license_years: Decimal,
    rules: &SurchargeRules,
    step_number: u32,
) -> EngineResult<PriceAdjustment> {
    const RULE_ID: &str = "inexperience_surcharge";

    let applies = license_years < rules.inexperienced_license_years;

    let (adjusted, reasoning) = if applies {
        let adjusted = checked_mul(RULE_ID, price, rules.inexperienced_multiplier)?;
        (
            adjusted,
            format!(
                "License held {} years, under {}: ${} × {} = ${}",
                license_years.normalize(),
                rules.inexperienced_license_years.normalize(),
                price.normalize(),
                rules.inexperienced_multiplier.normalize(),
                adjusted.normalize()
            ),
        )
    } else {
        (
            price,
            format!(
                "License held {} years, no inexperience surcharge",
                license_years.normalize()
            ),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: RULE_ID.to_string(),
        rule_name: "Inexperienced Driver Surcharge".to_string(),
        input: serde_json::json!({
            "price": price.normalize().to_string(),
            "license_years": license_years.normalize().to_string(),
            "threshold_years": rules.inexperienced_license_years.normalize().to_string(),
        }),
        output: serde_json::json!({
            "applied": applies,
            "multiplier": rules.inexperienced_multiplier.normalize().to_string(),
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

/// Applies the novice high-season surcharge.
///
/// In high season, drivers with fewer license years than the novice
/// threshold (3 by default) pay a flat amount per rental day (15 by
/// default) on top of the running price.
///
/// # Examples
///
/// ```
/// use rental_pricing::calculation::apply_novice_surcharge;
/// use rental_pricing::config::SurchargeRules;
/// use rental_pricing::models::Season;
/// use rust_decimal::Decimal;
///
/// let result = apply_novice_surcharge(
///     Decimal::from(100),
///     Decimal::from(2),
///     Season::High,
///     4,
///     &SurchargeRules::default(),
///     5,
/// )?;
/// assert_eq!(result.price, Decimal::from(160));
/// # Ok::<(), rental_pricing::error::EngineError>(())
/// ```
pub fn apply_novice_surcharge(
    price: Decimal,
    license_years: Decimal,
    season: Season,
    rental_days: u64,
    rules: &SurchargeRules,
    step_number: u32,
) -> EngineResult<PriceAdjustment> {
    const RULE_ID: &str = "novice_surcharge";

    let applies = license_years < rules.novice_license_years && season.is_high();

    let (adjusted, surcharge, reasoning) = if applies {
        let surcharge = checked_mul(
            RULE_ID,
            rules.novice_daily_surcharge,
            Decimal::from(rental_days),
        )?;
        let adjusted = checked_add(RULE_ID, price, surcharge)?;
        (
            adjusted,
            surcharge,
            format!(
                "License held {} years, under {} in high season: ${} + {} days × ${} = ${}",
                license_years.normalize(),
                rules.novice_license_years.normalize(),
                price.normalize(),
                rental_days,
                rules.novice_daily_surcharge.normalize(),
                adjusted.normalize()
            ),
        )
    } else {
        (
            price,
            Decimal::ZERO,
            format!(
                "No novice surcharge for {} license years in {} season",
                license_years.normalize(),
                season
            ),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: RULE_ID.to_string(),
        rule_name: "Novice Driver High Season Surcharge".to_string(),
        input: serde_json::json!({
            "price": price.normalize().to_string(),
            "license_years": license_years.normalize().to_string(),
            "season": season.to_string(),
            "rental_days": rental_days,
        }),
        output: serde_json::json!({
            "applied": applies,
            "surcharge": surcharge.normalize().to_string(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // ==================== inexperience ====================

    #[test]
    fn test_under_two_years_pays_inexperience_surcharge() {
        let result =
            apply_inexperience_surcharge(dec("200"), dec("1.9"), &SurchargeRules::default(), 1)
                .unwrap();
        assert!(result.applied);
        assert_eq!(result.price, dec("260"));
    }

    #[test]
    fn test_two_years_pays_no_inexperience_surcharge() {
        let result =
            apply_inexperience_surcharge(dec("200"), dec("2"), &SurchargeRules::default(), 1)
                .unwrap();
        assert!(!result.applied);
        assert_eq!(result.price, dec("200"));
    }

    #[test]
    fn test_inexperience_surcharge_ignores_season() {
        // The rule has no season input; a low-season rental still pays
        let result =
            apply_inexperience_surcharge(dec("10"), dec("1"), &SurchargeRules::default(), 1)
                .unwrap();
        assert_eq!(result.price, dec("13"));
    }

    // ==================== novice ====================

    #[test]
    fn test_novice_in_high_season_pays_daily_surcharge() {
        let result = apply_novice_surcharge(
            dec("100"),
            dec("2.5"),
            Season::High,
            5,
            &SurchargeRules::default(),
            1,
        )
        .unwrap();
        assert!(result.applied);
        assert_eq!(result.price, dec("175"));
        assert_eq!(result.audit_step.output["surcharge"], "75");
    }

    #[test]
    fn test_novice_in_low_season_pays_nothing() {
        let result = apply_novice_surcharge(
            dec("100"),
            dec("1"),
            Season::Low,
            5,
            &SurchargeRules::default(),
            1,
        )
        .unwrap();
        assert!(!result.applied);
        assert_eq!(result.price, dec("100"));
        assert_eq!(result.audit_step.output["surcharge"], "0");
    }

    #[test]
    fn test_three_years_pays_no_novice_surcharge() {
        let result = apply_novice_surcharge(
            dec("100"),
            dec("3"),
            Season::High,
            5,
            &SurchargeRules::default(),
            1,
        )
        .unwrap();
        assert!(!result.applied);
    }

    #[test]
    fn test_surcharges_stack_for_very_new_drivers() {
        let rules = SurchargeRules::default();
        let inexperienced =
            apply_inexperience_surcharge(dec("100"), dec("1.5"), &rules, 1).unwrap();
        let novice = apply_novice_surcharge(
            inexperienced.price,
            dec("1.5"),
            Season::High,
            2,
            &rules,
            2,
        )
        .unwrap();

        // 100 × 1.3 + 15 × 2
        assert_eq!(novice.price, dec("160"));
    }
}
