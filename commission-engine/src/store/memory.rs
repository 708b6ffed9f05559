//! In-memory store
//!
//! Host-platform stand-in backed by concurrent maps. Used by the test
//! suite and by embedders that manage settings themselves.

use super::{OrderMetaStore, SettingsStore, StoreResult};
use dashmap::DashMap;
use shared::commission::CommissionMeta;
use shared::models::settings::{
    FeeRecipientOverrides, GlobalSettings, ProductCommissionSettings, VendorSettings,
};
use parking_lot::RwLock;

#[derive(Debug, Default)]
pub struct MemoryStore {
    global: RwLock<Option<GlobalSettings>>,
    vendors: DashMap<i64, VendorSettings>,
    products: DashMap<i64, ProductCommissionSettings>,
    item_meta: DashMap<i64, CommissionMeta>,
    order_fees: DashMap<i64, FeeRecipientOverrides>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_global_settings(&self, settings: GlobalSettings) {
        *self.global.write() = Some(settings);
    }

    pub fn clear_global_settings(&self) {
        *self.global.write() = None;
    }

    pub fn set_vendor_settings(&self, vendor_id: i64, settings: VendorSettings) {
        self.vendors.insert(vendor_id, settings);
    }

    pub fn clear_vendor_settings(&self, vendor_id: i64) {
        self.vendors.remove(&vendor_id);
    }

    pub fn set_product_settings(&self, product_id: i64, settings: ProductCommissionSettings) {
        self.products.insert(product_id, settings);
    }

    pub fn clear_product_settings(&self, product_id: i64) {
        self.products.remove(&product_id);
    }

    pub fn set_fee_recipient_overrides(&self, order_id: i64, overrides: FeeRecipientOverrides) {
        self.order_fees.insert(order_id, overrides);
    }
}

impl SettingsStore for MemoryStore {
    fn global_settings(&self) -> StoreResult<Option<GlobalSettings>> {
        Ok(self.global.read().clone())
    }

    fn vendor_settings(&self, vendor_id: i64) -> StoreResult<Option<VendorSettings>> {
        Ok(self.vendors.get(&vendor_id).map(|s| s.clone()))
    }

    fn product_settings(&self, product_id: i64) -> StoreResult<Option<ProductCommissionSettings>> {
        Ok(self.products.get(&product_id).map(|s| s.clone()))
    }

    fn save_global_settings(&self, settings: &GlobalSettings) -> StoreResult<()> {
        self.set_global_settings(settings.clone());
        Ok(())
    }
}

impl OrderMetaStore for MemoryStore {
    fn commission_meta(&self, order_item_id: i64) -> StoreResult<Option<CommissionMeta>> {
        Ok(self.item_meta.get(&order_item_id).map(|m| m.clone()))
    }

    fn save_commission_meta(&self, order_item_id: i64, meta: &CommissionMeta) -> StoreResult<()> {
        self.item_meta.insert(order_item_id, meta.clone());
        Ok(())
    }

    fn fee_recipient_overrides(&self, order_id: i64) -> StoreResult<FeeRecipientOverrides> {
        Ok(self
            .order_fees
            .get(&order_id)
            .map(|o| o.clone())
            .unwrap_or_default())
    }
}
