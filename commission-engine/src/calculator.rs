//! Commission calculators
//!
//! One calculation per commission type, each turning (amount, quantity,
//! rate parameters) into an admin/vendor split. Uses rust_decimal for
//! precise calculations, stores as f64.

use rust_decimal::prelude::*;
use shared::commission::{CommissionRule, CommissionType, RateParameters};

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub(crate) fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub(crate) fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Result of one split calculation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommissionBreakdown {
    /// Admin share attributable to a single unit
    pub per_item_admin_commission: f64,
    /// Admin share over the whole line
    pub admin_commission: f64,
    /// What the vendor keeps: total amount minus admin commission
    pub vendor_earning: f64,
    /// Rate parameters the calculation used, for auditing/persistence
    pub parameters: RateParameters,
}

/// Calculate the admin/vendor split for a rule over a line total.
///
/// Negative rate and fee inputs are treated as zero. The admin commission
/// is clamped to `[0, total_amount]` so the vendor earning is never
/// negative; `admin + vendor == total` always holds.
pub fn calculate(rule: &CommissionRule, total_amount: f64, total_quantity: i64) -> CommissionBreakdown {
    let amount = to_decimal(total_amount);
    let quantity = Decimal::from(total_quantity.max(0));

    let (per_item, total, used) = match rule.commission_type {
        CommissionType::None => (Decimal::ZERO, Decimal::ZERO, RateParameters::default()),
        CommissionType::Flat => flat(rule.flat, quantity),
        CommissionType::Percentage => percentage(rule.percentage, amount, quantity),
        CommissionType::Combine => combine(rule.percentage, rule.flat, amount, quantity),
        CommissionType::Fixed => fixed(rule.percentage, rule.flat, amount, quantity),
        CommissionType::CategoryBased => {
            // Specific entry → "all" fallback → zero rate, then fixed math
            let (cat_flat, cat_pct) = rule
                .category_rates
                .rate_for(rule.category_id)
                .map(|entry| (entry.flat.amount(), entry.percentage.amount()))
                .unwrap_or((0.0, 0.0));
            fixed(cat_pct, cat_flat, amount, quantity)
        }
    };

    // Clamp: commission never exceeds the line total, never goes negative.
    // The admin side is rounded first and the vendor earning derived from
    // it, so the two always reassemble the total exactly.
    let admin = total
        .max(Decimal::ZERO)
        .min(amount.max(Decimal::ZERO))
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    let per_item = if admin == total {
        per_item
    } else {
        guarded_div(admin, quantity)
    };
    let vendor = amount - admin;

    CommissionBreakdown {
        per_item_admin_commission: to_f64(per_item),
        admin_commission: to_f64(admin),
        vendor_earning: to_f64(vendor),
        parameters: used,
    }
}

/// Commission attributable to a partial refund, prorated against the line
/// total: `refunded / total × commission`, with the ratio capped to
/// `[0, 1]` so an over-refund never returns more than the original
/// commission. A zero or negative total yields zero rather than dividing
/// by it.
pub fn refunded_commission(refunded_amount: f64, total_amount: f64, commission: f64) -> f64 {
    let total = to_decimal(total_amount);
    if total <= Decimal::ZERO {
        return 0.0;
    }
    let ratio = (to_decimal(refunded_amount) / total).clamp(Decimal::ZERO, Decimal::ONE);
    to_f64(ratio * to_decimal(commission))
}

/// Per-unit division guarded against zero quantity (returns 0, not an error)
#[inline]
fn guarded_div(total: Decimal, quantity: Decimal) -> Decimal {
    if quantity.is_zero() {
        Decimal::ZERO
    } else {
        total / quantity
    }
}

/// Flat: a fixed fee per unit
fn flat(fee: f64, quantity: Decimal) -> (Decimal, Decimal, RateParameters) {
    let fee = fee.max(0.0);
    let fee_dec = to_decimal(fee);
    let total = fee_dec * quantity;
    (
        fee_dec,
        total,
        RateParameters {
            percentage: 0.0,
            flat: fee,
        },
    )
}

/// Percentage of the line total
fn percentage(rate: f64, amount: Decimal, quantity: Decimal) -> (Decimal, Decimal, RateParameters) {
    let rate = rate.max(0.0);
    let total = amount * to_decimal(rate) / Decimal::ONE_HUNDRED;
    (
        guarded_div(total, quantity),
        total,
        RateParameters {
            percentage: rate,
            flat: 0.0,
        },
    )
}

/// Combine: percentage of the line total plus a once-per-line fee.
///
/// The fee is deliberately not multiplied by quantity; this matches the
/// established upstream billing policy for the legacy combine type.
fn combine(rate: f64, fee: f64, amount: Decimal, quantity: Decimal) -> (Decimal, Decimal, RateParameters) {
    let rate = rate.max(0.0);
    let fee = fee.max(0.0);
    let total = amount * to_decimal(rate) / Decimal::ONE_HUNDRED + to_decimal(fee);
    (
        guarded_div(total, quantity),
        total,
        RateParameters {
            percentage: rate,
            flat: fee,
        },
    )
}

/// Fixed: flat fee per unit plus percentage of the line total
fn fixed(rate: f64, fee: f64, amount: Decimal, quantity: Decimal) -> (Decimal, Decimal, RateParameters) {
    let rate = rate.max(0.0);
    let fee = fee.max(0.0);
    let percentage_total = amount * to_decimal(rate) / Decimal::ONE_HUNDRED;
    let total = to_decimal(fee) * quantity + percentage_total;
    let per_item = to_decimal(fee) + guarded_div(percentage_total, quantity);
    (
        per_item,
        total,
        RateParameters {
            percentage: rate,
            flat: fee,
        },
    )
}
