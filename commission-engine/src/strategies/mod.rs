//! Commission source strategies
//!
//! One strategy per precedence tier. Each fetches its own tier's
//! configuration at construction time and reports whether it applies;
//! the context commits to the first applicable tier, highest precedence
//! first: order item → product → vendor → global.
//!
//! A store read failure is never fatal here — the tier logs a warning and
//! reports not-applicable, so resolution cascades instead of erroring.

pub mod global;
pub mod order_item;
pub mod product;
pub mod vendor;

pub use global::GlobalCommissionSourceStrategy;
pub use order_item::OrderItemCommissionSourceStrategy;
pub use product::ProductCommissionSourceStrategy;
pub use vendor::VendorCommissionSourceStrategy;

use shared::commission::{CommissionRule, CommissionSource};

/// A precedence tier that may supply commission parameters.
pub trait CommissionSourceStrategy {
    /// Tier tag reported on the resolution result.
    fn source(&self) -> CommissionSource;

    /// Whether this tier's stored configuration supplies a usable rule.
    fn is_applicable(&self) -> bool;

    /// The tier's rule; only meaningful when `is_applicable` is true.
    fn rule(&self) -> CommissionRule;
}
