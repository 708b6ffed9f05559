//! Commission context
//!
//! Walks an ordered strategy list and dispatches the winning rule to the
//! calculators. Precedence lives in the injected list, not in here, so it
//! can be tested (and reordered) independently of the calculation.

use crate::calculator;
use crate::strategies::CommissionSourceStrategy;
use shared::commission::CommissionData;

pub struct CommissionContext<'a> {
    strategies: Vec<Box<dyn CommissionSourceStrategy + 'a>>,
}

impl<'a> CommissionContext<'a> {
    /// Strategy order is resolution order; first applicable tier wins.
    pub fn new(strategies: Vec<Box<dyn CommissionSourceStrategy + 'a>>) -> Self {
        Self { strategies }
    }

    /// Resolve the commission split for a line total.
    ///
    /// No applicable tier is not an error: the vendor keeps the whole
    /// amount and the result is tagged `none`.
    pub fn calculate_commission(&self, total_amount: f64, total_quantity: i64) -> CommissionData {
        for strategy in &self.strategies {
            if !strategy.is_applicable() {
                continue;
            }

            let rule = strategy.rule();
            tracing::debug!(
                source = strategy.source().as_str(),
                commission_type = rule.commission_type.as_str(),
                "commission tier selected"
            );

            let breakdown = calculator::calculate(&rule, total_amount, total_quantity);
            return CommissionData::new(
                strategy.source(),
                rule.commission_type,
                breakdown.per_item_admin_commission,
                breakdown.admin_commission,
                breakdown.vendor_earning,
                total_quantity,
                total_amount,
                Some(breakdown.parameters),
            );
        }

        CommissionData::none(total_amount, total_quantity)
    }
}
