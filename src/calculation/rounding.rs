//! Rounding of the final price to cents.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::AuditStep;

use super::adjustment::PriceAdjustment;

/// Number of decimal places kept in a quoted amount.
pub const QUOTE_DECIMAL_PLACES: u32 = 2;

/// Rounds the running price to cents, halves away from zero.
///
/// Trailing fractional zeros are dropped from the result, so `150.00`
/// becomes `150` and `152.50` becomes `152.5`.
///
/// # Examples
///
/// ```
/// use rental_pricing::calculation::round_to_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = round_to_cents(Decimal::from_str("369.365625").unwrap(), 8);
/// assert_eq!(result.price.to_string(), "369.37");
///
/// let result = round_to_cents(Decimal::from_str("150.0000").unwrap(), 8);
/// assert_eq!(result.price.to_string(), "150");
/// ```
pub fn round_to_cents(price: Decimal, step_number: u32) -> PriceAdjustment {
    let rounded = price
        .round_dp_with_strategy(QUOTE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    let applied = rounded != price;

    let audit_step = AuditStep {
        step_number,
        rule_id: "rounding".to_string(),
        rule_name: "Round To Cents".to_string(),
        input: serde_json::json!({
            "price": price.to_string(),
        }),
        output: serde_json::json!({
            "price": rounded.to_string(),
        }),
        reasoning: format!(
            "Rounded ${} to {} decimal places: ${}",
            price.normalize(),
            QUOTE_DECIMAL_PLACES,
            rounded
        ),
    };

    PriceAdjustment {
        price: rounded,
        applied,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rounds_half_up_on_cents() {
        assert_eq!(round_to_cents(dec("1.005"), 1).price, dec("1.01"));
        assert_eq!(round_to_cents(dec("1.0049"), 1).price, dec("1"));
    }

    #[test]
    fn test_drops_trailing_zeros() {
        assert_eq!(round_to_cents(dec("152.500"), 1).price.to_string(), "152.5");
        assert_eq!(round_to_cents(dec("299.70"), 1).price.to_string(), "299.7");
        assert_eq!(round_to_cents(dec("40"), 1).price.to_string(), "40");
    }

    #[test]
    fn test_keeps_two_significant_decimals() {
        assert_eq!(round_to_cents(dec("9589.275"), 1).price.to_string(), "9589.28");
        assert_eq!(round_to_cents(dec("86.2500"), 1).price.to_string(), "86.25");
    }

    #[test]
    fn test_numerically_equal_input_is_not_applied() {
        assert!(!round_to_cents(dec("150.00"), 1).applied);
        assert!(round_to_cents(dec("369.365625"), 1).applied);
    }
}
