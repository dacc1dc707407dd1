use tracing::debug;

use super::{ensure_amount, validate_tier, Catalogs, Overrides, ShippingCatalog, TierCatalog};
use crate::errors::ConfigError;

/// A session's private copy of the tier and shipping catalogs.
///
/// Overrides are applied to this copy only. The base [`Catalogs`] value
/// it came from, and every other session's copy, stay untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeCatalog {
    pub tiers: TierCatalog,
    pub shipping: ShippingCatalog,
}

impl RuntimeCatalog {
    pub fn from_base(base: &Catalogs) -> Self {
        Self {
            tiers: base.tiers.clone(),
            shipping: base.shipping.clone(),
        }
    }

    /// Apply `overrides` all-or-nothing: every override is checked first,
    /// and on error the catalog is left as it was.
    pub fn apply(&mut self, overrides: &Overrides) -> Result<(), ConfigError> {
        let mut tiers = self.tiers.clone();
        for (name, tier_override) in &overrides.tiers {
            let tier = tiers
                .get_mut(name)
                .ok_or_else(|| ConfigError::UnknownTier(name.clone()))?;
            let updated = tier_override.applied_to(tier);
            validate_tier(&updated)?;
            *tier = updated;
        }

        let mut shipping = self.shipping.clone();
        for (name, &cost) in &overrides.shipping {
            ensure_amount(&format!("shipping.{name}"), cost)?;
            let option = shipping
                .get_mut(name)
                .ok_or_else(|| ConfigError::UnknownShipping(name.clone()))?;
            option.cost = cost;
        }

        debug!(
            tiers = overrides.tiers.len(),
            shipping = overrides.shipping.len(),
            "applied session overrides"
        );

        self.tiers = tiers;
        self.shipping = shipping;
        Ok(())
    }

    pub fn with_overrides(mut self, overrides: &Overrides) -> Result<Self, ConfigError> {
        self.apply(overrides)?;
        Ok(self)
    }
}
