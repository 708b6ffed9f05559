//! Shared contracts for the marketplace commission engine
//!
//! Value types exchanged between the commission engine and the host
//! platform: commission results, rule/settings shapes, and the order
//! and product views the engine reads.

pub mod commission;
pub mod models;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use commission::{
    CommissionData, CommissionMeta, CommissionParameters, CommissionRule, CommissionSource,
    CommissionType, RateParameters,
};
pub use types::RateValue;
