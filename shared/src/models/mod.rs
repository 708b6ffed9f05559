//! Host-platform data shapes read by the engine

pub mod order;
pub mod settings;

pub use order::{OrderItemView, OrderView, ProductView};
pub use settings::{
    CategoryRate, CategoryRates, FeeRecipient, FeeRecipientOverrides, GlobalSettings,
    ProductCommissionSettings, VendorSettings,
};
