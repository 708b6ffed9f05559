//! Global tier: marketplace-wide default commission settings

use super::CommissionSourceStrategy;
use crate::store::SettingsStore;
use shared::commission::{CommissionRule, CommissionSource, CommissionType};
use shared::models::settings::GlobalSettings;

pub struct GlobalCommissionSourceStrategy {
    settings: Option<GlobalSettings>,
    category_id: Option<i64>,
}

impl GlobalCommissionSourceStrategy {
    pub fn new(store: &dyn SettingsStore, category_id: Option<i64>) -> Self {
        let settings = match store.global_settings() {
            Ok(settings) => settings,
            Err(error) => {
                tracing::warn!(
                    %error,
                    "failed to read global commission settings, skipping global tier"
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

impl CommissionSourceStrategy for GlobalCommissionSourceStrategy {
    fn source(&self) -> CommissionSource {
        CommissionSource::Global
    }

    fn is_applicable(&self) -> bool {
        let Some(settings) = &self.settings else {
            return false;
        };
        match self.parsed_type() {
            CommissionType::None => false,
            CommissionType::CategoryBased => settings
                .commission_category_based_values
                .applies_to(self.category_id),
            _ => true,
        }
    }

    fn rule(&self) -> CommissionRule {
        let Some(settings) = &self.settings else {
            return CommissionRule::default();
        };
        match self.parsed_type() {
            CommissionType::CategoryBased => CommissionRule::category_based(
                settings.commission_category_based_values.clone(),
                self.category_id,
            ),
            commission_type => CommissionRule::new(
                commission_type,
                settings.admin_percentage.amount(),
                settings.additional_fee.amount(),
            ),
        }
    }
}
