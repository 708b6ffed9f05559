//! Legacy commission type migration
//!
//! Earlier releases let the global commission type be `combine`,
//! `percentage` or `flat`. Those calculators still run for orders that
//! persisted them, but as a global setting they collapse into `fixed`
//! (flat per unit plus percentage). This module rewrites the stored tag
//! once, the way a schema upgrade step would.

use crate::store::{SettingsStore, StoreResult};
use shared::commission::CommissionType;

/// Retired global type tags, with display labels, in their historical
/// listing order.
pub fn legacy_commission_types() -> Vec<(CommissionType, &'static str)> {
    vec![
        (CommissionType::Combine, "Combine"),
        (CommissionType::Percentage, "Percentage"),
        (CommissionType::Flat, "Flat"),
    ]
}

/// Whether a stored type tag is one of the retired global types.
pub fn is_legacy_commission_type(tag: &str) -> bool {
    legacy_commission_types()
        .iter()
        .any(|(t, _)| t.as_str() == tag)
}

/// Rewrite a legacy global commission type to `fixed`.
///
/// Returns whether a rewrite happened. A missing tag historically read
/// as `fixed` already, so it is left unwritten.
pub fn normalize_global_commission_type(store: &dyn SettingsStore) -> StoreResult<bool> {
    let Some(mut settings) = store.global_settings()? else {
        return Ok(false);
    };

    let Some(tag) = settings.commission_type.clone() else {
        return Ok(false);
    };

    if !is_legacy_commission_type(&tag) {
        return Ok(false);
    }

    tracing::info!(from = %tag, "migrating legacy global commission type to fixed");
    settings.commission_type = Some(CommissionType::Fixed.as_str().to_string());
    store.save_global_settings(&settings)?;
    Ok(true)
}
