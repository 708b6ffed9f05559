//! Order-item tier: replay of previously saved commission meta
//!
//! Applicable whenever the line item carries a saved commission cache.
//! Replaying the cache instead of the live settings guarantees that an
//! already-placed order keeps its original split even after global or
//! vendor configuration changes.

use super::CommissionSourceStrategy;
use crate::store::OrderMetaStore;
use shared::commission::{CommissionMeta, CommissionRule, CommissionSource, CommissionType};
use shared::models::settings::{CategoryRate, CategoryRates};

pub struct OrderItemCommissionSourceStrategy {
    meta: Option<CommissionMeta>,
}

impl OrderItemCommissionSourceStrategy {
    pub fn new(store: &dyn OrderMetaStore, order_item_id: i64) -> Self {
        let meta = match store.commission_meta(order_item_id) {
            Ok(meta) => meta,
            Err(error) => {
                tracing::warn!(
                    order_item_id,
                    %error,
                    "failed to read commission meta, skipping order-item tier"
                );
                None
            }
        };
        Self { meta }
    }
}

impl CommissionSourceStrategy for OrderItemCommissionSourceStrategy {
    fn source(&self) -> CommissionSource {
        CommissionSource::OrderItem
    }

    fn is_applicable(&self) -> bool {
        self.meta
            .as_ref()
            .is_some_and(|meta| meta.commission_type.is_set())
    }

    fn rule(&self) -> CommissionRule {
        let Some(meta) = &self.meta else {
            return CommissionRule::default();
        };

        let percentage = meta.commission_rate.amount();
        let flat = meta.additional_fee.amount();

        match meta.commission_type {
            // Saved rates for a category rule are already resolved; rebuild
            // them as a wildcard entry so replay matches for any category.
            CommissionType::CategoryBased => {
                let rates = CategoryRates {
                    all: CategoryRate {
                        flat: flat.into(),
                        percentage: percentage.into(),
                    },
                    ..Default::default()
                };
                CommissionRule::category_based(rates, None)
            }
            commission_type => CommissionRule::new(commission_type, percentage, flat),
        }
    }
}
