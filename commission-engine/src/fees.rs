//! Order fee recipient resolution
//!
//! Shipping, tax and shipping-tax can each go to the admin or to the
//! seller. An order carries the recipients it was placed under; when the
//! order has no override the current global settings apply, and the
//! ultimate default is the seller.

use crate::store::OrderMetaStore;
use shared::models::settings::{FeeRecipient, FeeRecipientOverrides, GlobalSettings};

/// Resolved recipients for the three order-level fee components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeeRecipients {
    pub shipping: FeeRecipient,
    pub tax: FeeRecipient,
    pub shipping_tax: FeeRecipient,
}

impl FeeRecipients {
    /// Merge order-level overrides onto global settings, falling back to
    /// the seller for anything neither layer configures.
    pub fn resolve(overrides: &FeeRecipientOverrides, global: Option<&GlobalSettings>) -> Self {
        let pick = |order: Option<FeeRecipient>, setting: Option<FeeRecipient>| {
            order.or(setting).unwrap_or_default()
        };

        Self {
            shipping: pick(
                overrides.shipping_fee_recipient,
                global.and_then(|g| g.shipping_fee_recipient),
            ),
            tax: pick(
                overrides.tax_fee_recipient,
                global.and_then(|g| g.tax_fee_recipient),
            ),
            shipping_tax: pick(
                overrides.shipping_tax_fee_recipient,
                global.and_then(|g| g.shipping_tax_fee_recipient),
            ),
        }
    }

    /// Recipients for a stored order. A failed override read falls back
    /// to the global settings layer rather than erroring the earning
    /// calculation.
    pub fn for_order(
        store: &dyn OrderMetaStore,
        order_id: i64,
        global: Option<&GlobalSettings>,
    ) -> Self {
        let overrides = match store.fee_recipient_overrides(order_id) {
            Ok(overrides) => overrides,
            Err(err) => {
                tracing::warn!(order_id, error = %err, "failed to load fee recipient overrides");
                FeeRecipientOverrides::default()
            }
        };
        Self::resolve(&overrides, global)
    }
}
