//! Vendor tier: vendor-profile commission settings with category sub-rule

use super::CommissionSourceStrategy;
use crate::store::SettingsStore;
use shared::commission::{CommissionRule, CommissionSource, CommissionType};
use shared::models::settings::VendorSettings;

pub struct VendorCommissionSourceStrategy {
    settings: Option<VendorSettings>,
    category_id: Option<i64>,
}

impl VendorCommissionSourceStrategy {
    pub fn new(store: &dyn SettingsStore, vendor_id: i64, category_id: Option<i64>) -> Self {
        let settings = match store.vendor_settings(vendor_id) {
            Ok(settings) => settings,
            Err(error) => {
                tracing::warn!(
                    vendor_id,
                    %error,
                    "failed to read vendor commission settings, skipping vendor tier"
                );
                None
            }
        };
        Self {
            settings,
            category_id,
        }
    }

    fn parsed_type(&self) -> CommissionType {
        CommissionType::parse(
            self.settings
                .as_ref()
                .and_then(|s| s.commission_type.as_deref()),
        )
    }
}

impl CommissionSourceStrategy for VendorCommissionSourceStrategy {
    fn source(&self) -> CommissionSource {
        CommissionSource::Vendor
    }

    fn is_applicable(&self) -> bool {
        let Some(settings) = &self.settings else {
            return false;
        };
        match self.parsed_type() {
            CommissionType::None => false,
            // A category rule only applies when some entry covers this category
            CommissionType::CategoryBased => {
                settings.category_commissions.applies_to(self.category_id)
            }
            _ => true,
        }
    }

    fn rule(&self) -> CommissionRule {
        let Some(settings) = &self.settings else {
            return CommissionRule::default();
        };
        match self.parsed_type() {
            CommissionType::CategoryBased => CommissionRule::category_based(
                settings.category_commissions.clone(),
                self.category_id,
            ),
            commission_type => CommissionRule::new(
                commission_type,
                settings.percentage.amount(),
                settings.flat.amount(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use shared::models::settings::{CategoryRate, CategoryRates};
    use shared::types::RateValue;

    fn category_settings(category_key: &str) -> VendorSettings {
        let mut category_commissions = CategoryRates::default();
        category_commissions.items.insert(
            category_key.to_string(),
            CategoryRate {
                flat: RateValue::new(5.0),
                percentage: RateValue::new(10.0),
            },
        );
        VendorSettings {
            commission_type: Some("category_based".to_string()),
            category_commissions,
            ..Default::default()
        }
    }

    #[test]
    fn test_not_applicable_without_settings() {
        let store = MemoryStore::new();
        let strategy = VendorCommissionSourceStrategy::new(&store, 2, Some(1));
        assert!(!strategy.is_applicable());
    }

    #[test]
    fn test_applicable_with_percentage_type() {
        let store = MemoryStore::new();
        store.set_vendor_settings(
            2,
            VendorSettings {
                commission_type: Some("percentage".to_string()),
                percentage: RateValue::new(10.0),
                flat: RateValue::new(5.0),
                ..Default::default()
            },
        );

        let strategy = VendorCommissionSourceStrategy::new(&store, 2, None);
        assert!(strategy.is_applicable());
        assert_eq!(strategy.source(), CommissionSource::Vendor);

        let rule = strategy.rule();
        assert_eq!(rule.commission_type, CommissionType::Percentage);
        assert_eq!(rule.percentage, 10.0);
    }

    #[test]
    fn test_category_rule_needs_matching_entry() {
        let store = MemoryStore::new();
        store.set_vendor_settings(2, category_settings("3"));

        // Requested category has an entry
        let strategy = VendorCommissionSourceStrategy::new(&store, 2, Some(3));
        assert!(strategy.is_applicable());
        let rule = strategy.rule();
        assert_eq!(rule.commission_type, CommissionType::CategoryBased);
        assert_eq!(rule.category_id, Some(3));

        // Different category, no wildcard: tier does not apply
        let strategy = VendorCommissionSourceStrategy::new(&store, 2, Some(8));
        assert!(!strategy.is_applicable());
    }

    #[test]
    fn test_category_rule_wildcard_applies_everywhere() {
        let store = MemoryStore::new();
        let mut settings = category_settings("3");
        settings.category_commissions.all = CategoryRate {
            flat: RateValue::new(1.0),
            percentage: RateValue::unset(),
        };
        store.set_vendor_settings(2, settings);

        let strategy = VendorCommissionSourceStrategy::new(&store, 2, Some(8));
        assert!(strategy.is_applicable());
    }
}
