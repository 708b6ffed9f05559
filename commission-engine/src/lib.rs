//! Marketplace commission resolution engine
//!
//! Resolves the admin/vendor split for order lines through a four-tier
//! precedence (saved order-item parameters, product, vendor, global),
//! dispatches to per-type calculators, and aggregates vendor earnings per
//! order with fee attribution.
//!
//! Hosts embed the engine by implementing the storage ports in
//! [`store`] (or using [`store::MemoryStore`]) and calling
//! [`service::CommissionService`].

pub mod calculator;
pub mod context;
pub mod fees;
pub mod service;
pub mod store;
pub mod strategies;
pub mod upgrade;

pub use calculator::{CommissionBreakdown, calculate, refunded_commission};
pub use context::CommissionContext;
pub use fees::FeeRecipients;
pub use service::CommissionService;
pub use store::{MemoryStore, OrderMetaStore, SettingsStore, StoreError, StoreResult};
