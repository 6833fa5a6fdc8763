//! Shared result type for price adjustment steps.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of one step in the price adjustment chain.
#[derive(Debug, Clone)]
pub struct PriceAdjustment {
    /// The running price after this step.
    pub price: Decimal,
    /// Whether the step's condition held and the price was changed.
    pub applied: bool,
    /// The audit step recording this adjustment.
    pub audit_step: AuditStep,
}

pub(crate) fn checked_mul(rule_id: &str, lhs: Decimal, rhs: Decimal) -> EngineResult<Decimal> {
    lhs.checked_mul(rhs)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("{} overflowed multiplying {} by {}", rule_id, lhs, rhs),
        })
}

pub(crate) fn checked_add(rule_id: &str, lhs: Decimal, rhs: Decimal) -> EngineResult<Decimal> {
    lhs.checked_add(rhs)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("{} overflowed adding {} to {}", rule_id, rhs, lhs),
        })
}
