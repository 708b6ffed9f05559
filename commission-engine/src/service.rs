//! Commission service facade
//!
//! The entry point hosts call: resolves a commission split through the
//! tier precedence, caches the winning parameters on the order item, and
//! aggregates per-order earnings with fee attribution.

use std::sync::Arc;

use rust_decimal::Decimal;
use shared::commission::{CommissionData, CommissionMeta, CommissionParameters};
use shared::models::order::{OrderView, ProductView};
use shared::models::settings::{FeeRecipient, GlobalSettings};
use shared::types::RateValue;

use crate::calculator::{self, to_decimal, to_f64};
use crate::context::CommissionContext;
use crate::fees::FeeRecipients;
use crate::store::{OrderMetaStore, SettingsStore};
use crate::strategies::{
    CommissionSourceStrategy, GlobalCommissionSourceStrategy, OrderItemCommissionSourceStrategy,
    ProductCommissionSourceStrategy, VendorCommissionSourceStrategy,
};

pub struct CommissionService {
    settings: Arc<dyn SettingsStore>,
    order_meta: Arc<dyn OrderMetaStore>,
}

impl CommissionService {
    pub fn new(settings: Arc<dyn SettingsStore>, order_meta: Arc<dyn OrderMetaStore>) -> Self {
        Self {
            settings,
            order_meta,
        }
    }

    /// Resolve the commission split for one line.
    ///
    /// With an order-item id and `force_recalculate` off, previously saved
    /// parameters replay exactly, regardless of settings changes since the
    /// order was placed. Forcing skips the saved tier, resolves against
    /// the live settings tiers and writes the winning parameters back as
    /// the new per-item cache.
    pub fn get_commission(
        &self,
        params: &CommissionParameters,
        force_recalculate: bool,
    ) -> CommissionData {
        let mut strategies: Vec<Box<dyn CommissionSourceStrategy>> = Vec::with_capacity(4);

        if let Some(order_item_id) = params.order_item_id
            && !force_recalculate
        {
            strategies.push(Box::new(OrderItemCommissionSourceStrategy::new(
                self.order_meta.as_ref(),
                order_item_id,
            )));
        }
        strategies.push(Box::new(ProductCommissionSourceStrategy::new(
            self.settings.as_ref(),
            params.product_id,
        )));
        strategies.push(Box::new(VendorCommissionSourceStrategy::new(
            self.settings.as_ref(),
            params.vendor_id,
            params.category_id,
        )));
        strategies.push(Box::new(GlobalCommissionSourceStrategy::new(
            self.settings.as_ref(),
            params.category_id,
        )));

        let context = CommissionContext::new(strategies);
        let data = context.calculate_commission(params.total_amount, params.total_quantity);

        if force_recalculate
            && let Some(order_item_id) = params.order_item_id
        {
            self.save_item_meta(order_item_id, &data);
        }

        data
    }

    /// Cache the resolved parameters on the order item. A save failure is
    /// logged, not surfaced; the split itself is already computed.
    fn save_item_meta(&self, order_item_id: i64, data: &CommissionData) {
        let Some(parameters) = data.parameters() else {
            return;
        };

        let meta = CommissionMeta {
            commission_type: data.commission_type(),
            commission_rate: RateValue::new(parameters.percentage),
            additional_fee: RateValue::new(parameters.flat),
        };

        if let Err(error) = self.order_meta.save_commission_meta(order_item_id, &meta) {
            tracing::warn!(order_item_id, %error, "failed to save commission meta");
        }
    }

    /// Earning for one unit of a product at its current price, resolved
    /// against the live settings tiers.
    pub fn get_earning_by_product(&self, product: &ProductView, recipient: FeeRecipient) -> f64 {
        let params = CommissionParameters {
            order_item_id: None,
            product_id: product.id,
            vendor_id: product.vendor_id,
            category_id: product.category_id,
            total_amount: product.price,
            total_quantity: 1,
        };

        let data = self.get_commission(&params, false);
        match recipient {
            FeeRecipient::Admin => data.admin_commission(),
            FeeRecipient::Seller => data.vendor_earning(),
        }
    }

    /// Total earning over a vendor order: per-item splits on the refund-net
    /// line totals, plus shipping, non-shipping tax and shipping tax (each
    /// net of refunds) credited to whichever party the order's fee
    /// recipients name.
    ///
    /// `total_tax` and `tax_refunded` on the order include the shipping
    /// portion; the split here keeps the two recipients independent.
    pub fn get_earning_by_order(&self, order: &OrderView, recipient: FeeRecipient) -> f64 {
        let global = match self.settings.global_settings() {
            Ok(global) => global,
            Err(error) => {
                tracing::warn!(order_id = order.id, %error, "failed to read global settings");
                None
            }
        };
        let recipients = FeeRecipients::for_order(self.order_meta.as_ref(), order.id, global.as_ref());

        let mut admin = Decimal::ZERO;
        let mut seller = Decimal::ZERO;

        for item in &order.items {
            let net_total = (item.total - item.refunded_total).max(0.0);
            let params = CommissionParameters {
                order_item_id: Some(item.id),
                product_id: item.resolved_product_id(),
                vendor_id: order.vendor_id,
                category_id: item.category_id,
                total_amount: net_total,
                total_quantity: item.quantity,
            };

            let data = self.get_commission(&params, false);
            admin += to_decimal(data.admin_commission());
            seller += to_decimal(data.vendor_earning());
        }

        let credit = |bucket: FeeRecipient, amount: f64, admin: &mut Decimal, seller: &mut Decimal| {
            let amount = to_decimal(amount.max(0.0));
            match bucket {
                FeeRecipient::Admin => *admin += amount,
                FeeRecipient::Seller => *seller += amount,
            }
        };

        let shipping = order.shipping_total - order.shipping_refunded;
        let shipping_tax = order.shipping_tax - order.shipping_tax_refunded;
        let tax = (order.total_tax - order.shipping_tax) - (order.tax_refunded - order.shipping_tax_refunded);

        credit(recipients.shipping, shipping, &mut admin, &mut seller);
        credit(recipients.tax, tax, &mut admin, &mut seller);
        credit(recipients.shipping_tax, shipping_tax, &mut admin, &mut seller);

        match recipient {
            FeeRecipient::Admin => to_f64(admin),
            FeeRecipient::Seller => to_f64(seller),
        }
    }

    /// Commission already earned on the refunded portion of a line,
    /// prorated against the line total.
    pub fn get_refunded_commission(&self, params: &CommissionParameters, refunded_amount: f64) -> f64 {
        let data = self.get_commission(params, false);
        calculator::refunded_commission(refunded_amount, params.total_amount, data.admin_commission())
    }

    /// Live global settings, for embedders that render commission UI.
    pub fn global_settings(&self) -> Option<GlobalSettings> {
        match self.settings.global_settings() {
            Ok(global) => global,
            Err(error) => {
                tracing::warn!(%error, "failed to read global settings");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use shared::commission::{CommissionSource, CommissionType};
    use shared::models::order::OrderItemView;
    use shared::models::settings::{
        FeeRecipientOverrides, ProductCommissionSettings, VendorSettings,
    };

    fn service() -> (Arc<MemoryStore>, CommissionService) {
        let store = Arc::new(MemoryStore::new());
        let service = CommissionService::new(store.clone(), store.clone());
        (store, service)
    }

    fn params(product_id: i64, vendor_id: i64, amount: f64, quantity: i64) -> CommissionParameters {
        CommissionParameters {
            order_item_id: None,
            product_id,
            vendor_id,
            category_id: None,
            total_amount: amount,
            total_quantity: quantity,
        }
    }

    fn global_percentage(pct: f64) -> GlobalSettings {
        GlobalSettings {
            commission_type: Some("percentage".to_string()),
            admin_percentage: RateValue::new(pct),
            ..Default::default()
        }
    }

    #[test]
    fn test_precedence_product_over_vendor_over_global() {
        let (store, service) = service();
        store.set_global_settings(global_percentage(30.0));
        store.set_vendor_settings(
            5,
            VendorSettings {
                commission_type: Some("percentage".to_string()),
                percentage: RateValue::new(20.0),
                ..Default::default()
            },
        );
        store.set_product_settings(
            10,
            ProductCommissionSettings {
                commission_type: Some("percentage".to_string()),
                percentage: RateValue::new(10.0),
                ..Default::default()
            },
        );

        let data = service.get_commission(&params(10, 5, 100.0, 1), false);
        assert_eq!(data.source(), CommissionSource::Product);
        assert_eq!(data.admin_commission(), 10.0);

        // No product settings → vendor tier
        let data = service.get_commission(&params(11, 5, 100.0, 1), false);
        assert_eq!(data.source(), CommissionSource::Vendor);
        assert_eq!(data.admin_commission(), 20.0);

        // No vendor settings either → global tier
        let data = service.get_commission(&params(11, 6, 100.0, 1), false);
        assert_eq!(data.source(), CommissionSource::Global);
        assert_eq!(data.admin_commission(), 30.0);
    }

    #[test]
    fn test_no_settings_anywhere_pays_vendor_everything() {
        let (_store, service) = service();
        let data = service.get_commission(&params(1, 1, 80.0, 1), false);
        assert_eq!(data.source(), CommissionSource::None);
        assert_eq!(data.admin_commission(), 0.0);
        assert_eq!(data.vendor_earning(), 80.0);
    }

    #[test]
    fn test_force_recalculate_persists_and_replays() {
        let (store, service) = service();
        store.set_global_settings(global_percentage(10.0));

        let mut p = params(1, 1, 200.0, 2);
        p.order_item_id = Some(77);

        let forced = service.get_commission(&p, true);
        assert_eq!(forced.source(), CommissionSource::Global);
        assert_eq!(forced.admin_commission(), 20.0);

        // Parameters were cached on the item
        let meta = store.commission_meta(77).unwrap().unwrap();
        assert_eq!(meta.commission_type, CommissionType::Percentage);
        assert_eq!(meta.commission_rate.amount(), 10.0);

        // Settings change; the saved item replays the original rate
        store.set_global_settings(global_percentage(50.0));
        let replayed = service.get_commission(&p, false);
        assert_eq!(replayed.source(), CommissionSource::OrderItem);
        assert_eq!(replayed.admin_commission(), 20.0);
        assert_eq!(replayed.vendor_earning(), 180.0);

        // Forcing again picks up the new rate and rewrites the cache
        let reforced = service.get_commission(&p, true);
        assert_eq!(reforced.source(), CommissionSource::Global);
        assert_eq!(reforced.admin_commission(), 100.0);
        let meta = store.commission_meta(77).unwrap().unwrap();
        assert_eq!(meta.commission_rate.amount(), 50.0);
    }

    #[test]
    fn test_unresolved_commission_not_cached() {
        let (store, service) = service();
        let mut p = params(1, 1, 50.0, 1);
        p.order_item_id = Some(9);

        let data = service.get_commission(&p, true);
        assert_eq!(data.source(), CommissionSource::None);
        assert!(store.commission_meta(9).unwrap().is_none());
    }

    #[test]
    fn test_earning_by_product() {
        let (store, service) = service();
        store.set_global_settings(global_percentage(10.0));

        let product = ProductView {
            id: 3,
            vendor_id: 1,
            price: 250.0,
            category_id: None,
        };

        assert_eq!(service.get_earning_by_product(&product, FeeRecipient::Seller), 225.0);
        assert_eq!(service.get_earning_by_product(&product, FeeRecipient::Admin), 25.0);
    }

    fn order_with_fees() -> OrderView {
        OrderView {
            id: 50,
            vendor_id: 1,
            items: vec![
                OrderItemView {
                    id: 501,
                    product_id: 10,
                    total: 100.0,
                    quantity: 1,
                    ..Default::default()
                },
                OrderItemView {
                    id: 502,
                    product_id: 11,
                    total: 60.0,
                    quantity: 2,
                    refunded_total: 20.0,
                    ..Default::default()
                },
            ],
            shipping_total: 10.0,
            total_tax: 8.0,
            shipping_tax: 2.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_earning_by_order_fees_default_to_seller() {
        let (store, service) = service();
        store.set_global_settings(global_percentage(10.0));

        let order = order_with_fees();
        // Items net: 100 + 40 = 140; admin 14, seller 126.
        // Fees all default to the seller: +10 shipping +6 tax +2 shipping tax.
        assert_eq!(service.get_earning_by_order(&order, FeeRecipient::Seller), 144.0);
        assert_eq!(service.get_earning_by_order(&order, FeeRecipient::Admin), 14.0);
    }

    #[test]
    fn test_earning_by_order_fee_recipients_split() {
        let (store, service) = service();
        store.set_global_settings(GlobalSettings {
            shipping_fee_recipient: Some(FeeRecipient::Admin),
            ..global_percentage(10.0)
        });
        store.set_fee_recipient_overrides(
            50,
            FeeRecipientOverrides {
                tax_fee_recipient: Some(FeeRecipient::Admin),
                ..Default::default()
            },
        );

        let order = order_with_fees();
        // Admin: 14 commission + 10 shipping (global) + 6 tax (order
        // override); shipping tax stays with the seller.
        assert_eq!(service.get_earning_by_order(&order, FeeRecipient::Admin), 30.0);
        assert_eq!(service.get_earning_by_order(&order, FeeRecipient::Seller), 128.0);
    }

    #[test]
    fn test_earning_by_order_refunds_reduce_fee_components() {
        let (store, service) = service();
        store.set_global_settings(global_percentage(0.0));

        let mut order = order_with_fees();
        order.shipping_refunded = 10.0;
        order.tax_refunded = 8.0;
        order.shipping_tax_refunded = 2.0;

        // Fully refunded fees contribute nothing; only net item totals remain
        assert_eq!(service.get_earning_by_order(&order, FeeRecipient::Seller), 140.0);
    }

    #[test]
    fn test_refunded_commission_prorated() {
        let (store, service) = service();
        store.set_global_settings(global_percentage(10.0));

        let p = params(1, 1, 100.0, 1);
        assert_eq!(service.get_refunded_commission(&p, 50.0), 5.0);
        assert_eq!(service.get_refunded_commission(&p, 100.0), 10.0);
    }
}
