//! Storage ports
//!
//! Narrow read/write interfaces over the host platform's settings and
//! metadata storage. The engine only ever talks to these traits; the host
//! adapter (or the in-memory store, for tests and embedding) supplies the
//! implementation.

pub mod memory;

pub use memory::MemoryStore;

use shared::commission::CommissionMeta;
use shared::models::settings::{
    FeeRecipientOverrides, GlobalSettings, ProductCommissionSettings, VendorSettings,
};
use thiserror::Error;

/// Storage port error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Malformed stored value: {0}")]
    Malformed(String),
}

/// Result type for storage port operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Read access to commission settings at every tier, plus the single
/// write the legacy upgrade routine needs.
pub trait SettingsStore: Send + Sync {
    /// Global marketplace settings bag; `None` when never saved.
    fn global_settings(&self) -> StoreResult<Option<GlobalSettings>>;

    /// Vendor-scoped commission settings.
    fn vendor_settings(&self, vendor_id: i64) -> StoreResult<Option<VendorSettings>>;

    /// Per-product commission override.
    fn product_settings(&self, product_id: i64) -> StoreResult<Option<ProductCommissionSettings>>;

    /// Overwrite the global settings bag (legacy type normalization only).
    fn save_global_settings(&self, settings: &GlobalSettings) -> StoreResult<()>;
}

/// Read/write access to per-item commission meta and per-order fee
/// recipient overrides.
///
/// Writes are single-row last-write-wins; the engine relies on no
/// stronger guarantee.
pub trait OrderMetaStore: Send + Sync {
    /// Saved commission cache for an order line item.
    fn commission_meta(&self, order_item_id: i64) -> StoreResult<Option<CommissionMeta>>;

    /// Persist the commission cache for an order line item.
    fn save_commission_meta(&self, order_item_id: i64, meta: &CommissionMeta) -> StoreResult<()>;

    /// Fee recipient overrides saved on the order at checkout time.
    fn fee_recipient_overrides(&self, order_id: i64) -> StoreResult<FeeRecipientOverrides>;
}
