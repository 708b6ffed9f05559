//! Commission resolution input and result

use super::rule::RateParameters;
use super::types::{CommissionSource, CommissionType};
use crate::types::RateValue;
use serde::{Deserialize, Serialize};

/// Input bag for one resolution call. Constructed per call, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CommissionParameters {
    /// Present when resolving a persisted order line item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_item_id: Option<i64>,
    pub product_id: i64,
    pub vendor_id: i64,
    /// Chosen product category, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    pub total_amount: f64,
    pub total_quantity: i64,
}

/// The immutable result of one commission resolution.
///
/// Invariant: `admin_commission + vendor_earning == total_amount` (within
/// 2dp rounding), including the `none` result where the vendor keeps the
/// whole amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommissionData {
    source: CommissionSource,
    commission_type: CommissionType,
    per_item_admin_commission: f64,
    admin_commission: f64,
    vendor_earning: f64,
    total_quantity: i64,
    total_amount: f64,
    /// Rate parameters the winning rule resolved to; `None` when no tier applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parameters: Option<RateParameters>,
}

impl CommissionData {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        source: CommissionSource,
        commission_type: CommissionType,
        per_item_admin_commission: f64,
        admin_commission: f64,
        vendor_earning: f64,
        total_quantity: i64,
        total_amount: f64,
        parameters: Option<RateParameters>,
    ) -> Self {
        Self {
            source,
            commission_type,
            per_item_admin_commission,
            admin_commission,
            vendor_earning,
            total_quantity,
            total_amount,
            parameters,
        }
    }

    /// Terminal result when no tier supplied a rule: the vendor keeps everything.
    pub fn none(total_amount: f64, total_quantity: i64) -> Self {
        Self {
            source: CommissionSource::None,
            commission_type: CommissionType::None,
            per_item_admin_commission: 0.0,
            admin_commission: 0.0,
            vendor_earning: total_amount,
            total_quantity,
            total_amount,
            parameters: None,
        }
    }

    pub fn source(&self) -> CommissionSource {
        self.source
    }

    pub fn commission_type(&self) -> CommissionType {
        self.commission_type
    }

    pub fn per_item_admin_commission(&self) -> f64 {
        self.per_item_admin_commission
    }

    pub fn admin_commission(&self) -> f64 {
        self.admin_commission
    }

    pub fn vendor_earning(&self) -> f64 {
        self.vendor_earning
    }

    pub fn total_quantity(&self) -> i64 {
        self.total_quantity
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn parameters(&self) -> Option<RateParameters> {
        self.parameters
    }
}

/// Per-item commission cache persisted into order-item meta.
///
/// Three explicit fields; the source tag is implicit — replayed meta always
/// reports `order_item`. Rates here are the resolved values (a category
/// rule is flattened before saving), so replay is exact even if the
/// category tables change later.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CommissionMeta {
    pub commission_type: CommissionType,
    /// Resolved percentage rate
    #[serde(default)]
    pub commission_rate: RateValue,
    /// Resolved flat fee
    #[serde(default)]
    pub additional_fee: RateValue,
}
