//! Commission settings shapes
//!
//! Mirrors the host platform's settings storage: a global settings bag, a
//! vendor-scoped bag of the same shape, and a simpler per-product shape.
//! All of these are read-only to the engine (the one exception is the
//! legacy upgrade routine, which rewrites the global type tag).

use crate::types::RateValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of a category rate table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CategoryRate {
    #[serde(default)]
    pub flat: RateValue,
    #[serde(default)]
    pub percentage: RateValue,
}

impl CategoryRate {
    /// An entry with neither field configured carries no rule.
    pub fn is_empty(&self) -> bool {
        !self.flat.is_set() && !self.percentage.is_set()
    }
}

/// Category → rate table with a wildcard "all categories" fallback.
///
/// Keys of `items` are category ids rendered as strings, the way the host
/// serializes map keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CategoryRates {
    #[serde(default)]
    pub all: CategoryRate,
    #[serde(default)]
    pub items: HashMap<String, CategoryRate>,
}

impl CategoryRates {
    /// Look up the rate for a category: specific entry first, then the
    /// non-empty "all" fallback. `None` means no rule exists for this
    /// category (callers resolve that to a zero rate, not an error).
    pub fn rate_for(&self, category_id: Option<i64>) -> Option<&CategoryRate> {
        if let Some(id) = category_id
            && let Some(entry) = self.items.get(&id.to_string())
        {
            return Some(entry);
        }
        if !self.all.is_empty() {
            return Some(&self.all);
        }
        None
    }

    /// Whether any rule would apply for the given category.
    pub fn applies_to(&self, category_id: Option<i64>) -> bool {
        if let Some(id) = category_id
            && self.items.contains_key(&id.to_string())
        {
            return true;
        }
        !self.all.is_empty()
    }
}

/// Recipient of an order-level fee component
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FeeRecipient {
    Admin,
    #[default]
    Seller,
}

/// Global marketplace settings bag (commission-relevant keys only)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GlobalSettings {
    /// Calculator type tag; empty/missing means commissions are disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission_type: Option<String>,
    /// Percentage rate (global naming kept for host compatibility)
    #[serde(default)]
    pub admin_percentage: RateValue,
    /// Flat fee (global naming kept for host compatibility)
    #[serde(default)]
    pub additional_fee: RateValue,
    #[serde(default)]
    pub commission_category_based_values: CategoryRates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_fee_recipient: Option<FeeRecipient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_fee_recipient: Option<FeeRecipient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_tax_fee_recipient: Option<FeeRecipient>,
}

/// Vendor-scoped commission settings, mirroring the global shape
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct VendorSettings {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub commission_type: Option<String>,
    #[serde(default)]
    pub percentage: RateValue,
    #[serde(default)]
    pub flat: RateValue,
    #[serde(default)]
    pub category_commissions: CategoryRates,
}

/// Per-product commission override
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductCommissionSettings {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub commission_type: Option<String>,
    #[serde(default)]
    pub percentage: RateValue,
    #[serde(default)]
    pub flat: RateValue,
}

/// Per-order fee recipient overrides saved at checkout time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FeeRecipientOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_fee_recipient: Option<FeeRecipient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_fee_recipient: Option<FeeRecipient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_tax_fee_recipient: Option<FeeRecipient>,
}
