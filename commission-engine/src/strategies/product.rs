//! Product tier: per-product commission override

use super::CommissionSourceStrategy;
use crate::store::SettingsStore;
use shared::commission::{CommissionRule, CommissionSource, CommissionType};
use shared::models::settings::ProductCommissionSettings;

pub struct ProductCommissionSourceStrategy {
    settings: Option<ProductCommissionSettings>,
}

impl ProductCommissionSourceStrategy {
    pub fn new(store: &dyn SettingsStore, product_id: i64) -> Self {
        let settings = match store.product_settings(product_id) {
            Ok(settings) => settings,
            Err(error) => {
                tracing::warn!(
                    product_id,
                    %error,
                    "failed to read product commission settings, skipping product tier"
                );
                None
            }
        };
        Self { settings }
    }

    fn parsed_type(&self) -> CommissionType {
        CommissionType::parse(
            self.settings
                .as_ref()
                .and_then(|s| s.commission_type.as_deref()),
        )
    }
}

impl CommissionSourceStrategy for ProductCommissionSourceStrategy {
    fn source(&self) -> CommissionSource {
        CommissionSource::Product
    }

    fn is_applicable(&self) -> bool {
        // A product override must name a type and configure at least one rate
        let Some(settings) = &self.settings else {
            return false;
        };
        self.parsed_type().is_set() && (settings.flat.is_set() || settings.percentage.is_set())
    }

    fn rule(&self) -> CommissionRule {
        let Some(settings) = &self.settings else {
            return CommissionRule::default();
        };
        CommissionRule::new(
            self.parsed_type(),
            settings.percentage.amount(),
            settings.flat.amount(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use shared::types::RateValue;

    #[test]
    fn test_not_applicable_without_settings() {
        let store = MemoryStore::new();
        let strategy = ProductCommissionSourceStrategy::new(&store, 10);
        assert!(!strategy.is_applicable());
    }

    #[test]
    fn test_not_applicable_without_rates() {
        let store = MemoryStore::new();
        store.set_product_settings(
            10,
            ProductCommissionSettings {
                commission_type: Some("fixed".to_string()),
                ..Default::default()
            },
        );
        let strategy = ProductCommissionSourceStrategy::new(&store, 10);
        assert!(!strategy.is_applicable());
    }

    #[test]
    fn test_applicable_with_type_and_rate() {
        let store = MemoryStore::new();
        store.set_product_settings(
            10,
            ProductCommissionSettings {
                commission_type: Some("fixed".to_string()),
                percentage: RateValue::new(5.0),
                flat: RateValue::new(5.0),
            },
        );

        let strategy = ProductCommissionSourceStrategy::new(&store, 10);
        assert!(strategy.is_applicable());
        assert_eq!(strategy.source(), CommissionSource::Product);

        let rule = strategy.rule();
        assert_eq!(rule.commission_type, CommissionType::Fixed);
        assert_eq!(rule.percentage, 5.0);
        assert_eq!(rule.flat, 5.0);
    }

    #[test]
    fn test_unknown_type_tag_resolves_to_fixed() {
        let store = MemoryStore::new();
        store.set_product_settings(
            10,
            ProductCommissionSettings {
                commission_type: Some("bogus".to_string()),
                flat: RateValue::new(3.0),
                ..Default::default()
            },
        );

        let strategy = ProductCommissionSourceStrategy::new(&store, 10);
        assert!(strategy.is_applicable());
        assert_eq!(strategy.rule().commission_type, CommissionType::Fixed);
    }
}
