//! Order and product views
//!
//! Read-only projections of the host commerce objects, carrying only what
//! commission resolution needs. The host adapter is responsible for
//! filling these from its own order/product model.

use serde::{Deserialize, Serialize};

/// One order line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderItemView {
    pub id: i64,
    pub product_id: i64,
    /// Variation id when the line sells a product variation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation_id: Option<i64>,
    /// Chosen category of the product at purchase time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    /// Line total after order-level discounts
    pub total: f64,
    pub quantity: i64,
    /// Amount refunded against this line so far
    #[serde(default)]
    pub refunded_total: f64,
}

impl OrderItemView {
    /// Product id commission resolution keys on (variation wins when present).
    pub fn resolved_product_id(&self) -> i64 {
        self.variation_id.unwrap_or(self.product_id)
    }
}

/// An order scoped to a single vendor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderView {
    pub id: i64,
    pub vendor_id: i64,
    pub items: Vec<OrderItemView>,
    #[serde(default)]
    pub shipping_total: f64,
    #[serde(default)]
    pub shipping_refunded: f64,
    /// Total tax including shipping tax
    #[serde(default)]
    pub total_tax: f64,
    #[serde(default)]
    pub tax_refunded: f64,
    #[serde(default)]
    pub shipping_tax: f64,
    #[serde(default)]
    pub shipping_tax_refunded: f64,
}

/// A product as commission resolution sees it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductView {
    pub id: i64,
    pub vendor_id: i64,
    pub price: f64,
    /// Chosen commission category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}
