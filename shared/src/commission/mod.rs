//! Commission value types
//!
//! The data contracts of the commission resolution pipeline: input
//! parameters, resolved rules, the immutable result, and the per-item
//! cache shape persisted into order-item meta.

pub mod data;
pub mod rule;
pub mod types;

pub use data::{CommissionData, CommissionMeta, CommissionParameters};
pub use rule::{CommissionRule, RateParameters};
pub use types::{CommissionSource, CommissionType};
