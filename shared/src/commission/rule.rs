//! Resolved commission rule

use super::types::CommissionType;
use crate::models::settings::CategoryRates;
use serde::{Deserialize, Serialize};

/// A commission rule as resolved by one source tier.
///
/// Numeric inputs are already coerced (absent/malformed/negative → 0) by
/// the time a rule is built; calculators never see raw host values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CommissionRule {
    pub commission_type: CommissionType,
    /// Percentage of the line total (e.g. 10 = 10%)
    pub percentage: f64,
    /// Flat fee amount; per unit for flat/fixed, once per line for combine
    pub flat: f64,
    /// Category rate table, only populated for category-based rules
    #[serde(default)]
    pub category_rates: CategoryRates,
    /// Requested category for category-based lookup
    #[serde(default)]
    pub category_id: Option<i64>,
}

impl CommissionRule {
    /// Rule for a tier with percentage/flat parameters.
    pub fn new(commission_type: CommissionType, percentage: f64, flat: f64) -> Self {
        Self {
            commission_type,
            percentage,
            flat,
            ..Default::default()
        }
    }

    /// Category-based rule carrying the tier's rate table.
    pub fn category_based(category_rates: CategoryRates, category_id: Option<i64>) -> Self {
        Self {
            commission_type: CommissionType::CategoryBased,
            percentage: 0.0,
            flat: 0.0,
            category_rates,
            category_id,
        }
    }
}

/// The numeric parameters a resolution actually used, kept on the result
/// for auditability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct RateParameters {
    pub percentage: f64,
    pub flat: f64,
}
