//! Quote orchestration.
//!
//! Runs the full pricing pipeline for one request: vehicle type
//! normalisation, rental period derivation, eligibility, then the fixed
//! sequence of price adjustments.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PricingRules;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, PricingOutcome, PricingRequest, Quote, VehicleCategory,
};

use super::adjustment::PriceAdjustment;
use super::{
    RentalPeriod, apply_inexperience_surcharge, apply_long_rental_discount, apply_novice_surcharge,
    apply_racer_surcharge, apply_seasonal_pricing, calculate_base_price, normalize_vehicle_type,
    round_to_cents, validate_eligibility,
};

/// Prices a rental request against a rule table.
///
/// Eligibility rejections are returned as [`PricingOutcome::Rejected`]
/// whatever the timestamps hold. For eligible drivers, timestamps outside
/// the calendar range or arithmetic overflow on absurd inputs produce an
/// error.
///
/// The adjustment order is fixed:
/// 1. Base price (age per day, weekend premium)
/// 2. Racer surcharge
/// 3. Inexperience surcharge
/// 4. Novice high-season surcharge
/// 5. High-season multiplier
/// 6. Long-rental discount
/// 7. Rounding to cents
///
/// # Example
///
/// ```
/// use rental_pricing::calculation::quote;
/// use rental_pricing::config::PricingRules;
/// use rental_pricing::models::PricingRequest;
/// use rust_decimal::Decimal;
///
/// // 2024-06-03 to 2024-06-04, a two-day high-season Racer rental
/// let request = PricingRequest::new(
///     "Tallinn",
///     "Tartu",
///     1_717_372_800_000,
///     1_717_459_200_000,
///     "Racer",
///     Decimal::from(25),
///     Decimal::from(5),
/// );
///
/// let outcome = quote(&request, &PricingRules::default())?;
/// assert_eq!(outcome.to_string(), "$86.25");
/// # Ok::<(), rental_pricing::error::EngineError>(())
/// ```
pub fn quote(request: &PricingRequest, rules: &PricingRules) -> EngineResult<PricingOutcome> {
    let category = normalize_vehicle_type(&request.vehicle_type);
    let mut steps = vec![vehicle_type_step(request, category, 1)];

    let eligibility = validate_eligibility(
        request.driver_age,
        request.license_years,
        category,
        &rules.eligibility,
        next_step(&steps),
    );
    if let Some(rejection) = eligibility.rejection {
        debug!(
            pickup_location = %request.pickup_location,
            dropoff_location = %request.dropoff_location,
            category = %category,
            rejection = %rejection,
            "Driver not eligible"
        );
        return Ok(PricingOutcome::Rejected(rejection));
    }
    steps.push(eligibility.audit_step);

    // Timestamps are only checked once the driver is eligible
    let period = RentalPeriod::from_timestamps(
        request.pickup_timestamp,
        request.dropoff_timestamp,
        &rules.season,
    )?;
    steps.push(rental_period_step(&period, next_step(&steps)));

    let age = request.driver_age;
    let license_years = request.license_years;
    let season = period.season;

    let base = calculate_base_price(age, &period, &rules.surcharges, next_step(&steps))?;
    let price = record(&mut steps, base);

    let racer = apply_racer_surcharge(
        price,
        category,
        age,
        season,
        &rules.surcharges,
        next_step(&steps),
    )?;
    let price = record(&mut steps, racer);

    let inexperience =
        apply_inexperience_surcharge(price, license_years, &rules.surcharges, next_step(&steps))?;
    let price = record(&mut steps, inexperience);

    let novice = apply_novice_surcharge(
        price,
        license_years,
        season,
        period.days,
        &rules.surcharges,
        next_step(&steps),
    )?;
    let price = record(&mut steps, novice);

    let seasonal = apply_seasonal_pricing(price, season, &rules.surcharges, next_step(&steps))?;
    let price = record(&mut steps, seasonal);

    let discount = apply_long_rental_discount(
        price,
        period.days,
        season,
        &rules.discounts,
        next_step(&steps),
    )?;
    let price = record(&mut steps, discount);

    let rounded = round_to_cents(price, next_step(&steps));
    let amount = record(&mut steps, rounded);

    let quote = Quote {
        amount,
        category,
        rental_days: period.days,
        weekend_days: period.weekend_days,
        season,
        audit_trace: AuditTrace {
            steps,
            warnings: collect_warnings(request, category, &period),
        },
    };

    debug!(
        pickup_location = %request.pickup_location,
        dropoff_location = %request.dropoff_location,
        category = %category,
        rental_days = period.days,
        season = %season,
        amount = %quote.amount,
        "Quote calculated"
    );

    Ok(PricingOutcome::Quoted(quote))
}

/// Prices a rental with the standard tariff and returns the result string.
///
/// The string is either one of the eligibility rejection messages or the
/// quoted amount as `$<amount>`. Rejections are `Ok` values.
///
/// # Example
///
/// ```
/// use rental_pricing::price;
/// use rust_decimal::Decimal;
///
/// // 2024-01-01 to 2024-01-03
/// let result = price(
///     "Tallinn",
///     "Tartu",
///     1_704_067_200_000,
///     1_704_240_000_000,
///     "Compact",
///     Decimal::from(50),
///     Decimal::from(10),
/// )?;
/// assert_eq!(result, "$150");
///
/// let result = price(
///     "Tallinn",
///     "Tartu",
///     1_704_067_200_000,
///     1_704_240_000_000,
///     "Compact",
///     Decimal::from(17),
///     Decimal::from(2),
/// )?;
/// assert_eq!(result, "Driver too young - cannot quote the price");
/// # Ok::<(), rental_pricing::error::EngineError>(())
/// ```
pub fn price(
    pickup_location: &str,
    dropoff_location: &str,
    pickup_timestamp: i64,
    dropoff_timestamp: i64,
    vehicle_type: impl Into<serde_json::Value>,
    driver_age: Decimal,
    license_years: Decimal,
) -> EngineResult<String> {
    let request = PricingRequest::new(
        pickup_location,
        dropoff_location,
        pickup_timestamp,
        dropoff_timestamp,
        vehicle_type,
        driver_age,
        license_years,
    );

    Ok(quote(&request, &PricingRules::default())?.to_string())
}

fn next_step(steps: &[AuditStep]) -> u32 {
    steps.len() as u32 + 1
}

fn record(steps: &mut Vec<AuditStep>, adjustment: PriceAdjustment) -> Decimal {
    steps.push(adjustment.audit_step);
    adjustment.price
}

fn vehicle_type_step(
    request: &PricingRequest,
    category: VehicleCategory,
    step_number: u32,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "vehicle_type".to_string(),
        rule_name: "Vehicle Type Normalisation".to_string(),
        input: serde_json::json!({
            "vehicle_type": request.vehicle_type,
        }),
        output: serde_json::json!({
            "category": category.to_string(),
        }),
        reasoning: format!("Vehicle type {} maps to {}", request.vehicle_type, category),
    }
}

fn rental_period_step(period: &RentalPeriod, step_number: u32) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "rental_period".to_string(),
        rule_name: "Rental Period".to_string(),
        input: serde_json::json!({
            "pickup": period.pickup.to_rfc3339(),
            "dropoff": period.dropoff.to_rfc3339(),
        }),
        output: serde_json::json!({
            "rental_days": period.days,
            "weekend_days": period.weekend_days,
            "season": period.season.to_string(),
        }),
        reasoning: format!(
            "{} rental days ({} on a weekend) in {} season",
            period.days, period.weekend_days, period.season
        ),
    }
}

fn collect_warnings(
    request: &PricingRequest,
    category: VehicleCategory,
    period: &RentalPeriod,
) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    if category.is_unknown() {
        warnings.push(AuditWarning {
            code: "unknown_vehicle_type".to_string(),
            message: format!(
                "Vehicle type {} is not in the fleet list; priced without category rules",
                request.vehicle_type
            ),
            severity: "medium".to_string(),
        });
    }

    if period.is_reversed() {
        warnings.push(AuditWarning {
            code: "reversed_rental_dates".to_string(),
            message: "Dropoff precedes pickup; day count uses the absolute span".to_string(),
            severity: "low".to_string(),
        });
    }

    warnings
}
