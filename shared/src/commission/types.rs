//! Commission type and source tags

use serde::{Deserialize, Serialize};

/// Calculator type tag
///
/// Stored by the host as a plain string; the closed set below is the
/// steady-state contract. `Fixed` is the unified flat + percentage type
/// the legacy types collapse into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CommissionType {
    /// Disabled / not configured
    #[default]
    None,
    /// Fixed fee per unit (legacy)
    Flat,
    /// Percentage of the line total (legacy)
    Percentage,
    /// Percentage plus a once-per-line fee (legacy)
    Combine,
    /// Flat fee per unit plus percentage (unified type)
    Fixed,
    /// Per-category rate table with an "all" fallback
    CategoryBased,
}

impl CommissionType {
    /// Parse a host-stored type tag.
    ///
    /// Empty or missing tags mean "not configured". Unknown tags fall back
    /// to `Fixed`, the legacy default for configurations that predate
    /// explicit type storage.
    pub fn parse(tag: Option<&str>) -> Self {
        match tag.map(str::trim) {
            None | Some("") => Self::None,
            Some("none") => Self::None,
            Some("flat") => Self::Flat,
            Some("percentage") => Self::Percentage,
            Some("combine") => Self::Combine,
            Some("fixed") => Self::Fixed,
            Some("category_based") => Self::CategoryBased,
            Some(_) => Self::Fixed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Flat => "flat",
            Self::Percentage => "percentage",
            Self::Combine => "combine",
            Self::Fixed => "fixed",
            Self::CategoryBased => "category_based",
        }
    }

    /// Whether this tag carries an actual calculation rule.
    pub fn is_set(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Which configuration tier supplied the winning rule
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CommissionSource {
    #[default]
    None,
    OrderItem,
    Product,
    Vendor,
    Global,
}

impl CommissionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::OrderItem => "order_item",
            Self::Product => "product",
            Self::Vendor => "vendor",
            Self::Global => "global",
        }
    }
}
