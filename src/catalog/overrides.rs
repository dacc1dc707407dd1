//! Session-only adjustments to tier pricing and shipping costs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::Tier;

/// Partial replacement of a tier's economics. Absent fields keep the
/// catalog value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TierOverride {
    pub case_price: Option<f64>,
    pub cost_per_tx: Option<f64>,
    pub tx_per_case: Option<u32>,
    pub default_clinic_price_per_tx: Option<f64>,
    pub default_extra_cost_per_tx: Option<f64>,
}

impl TierOverride {
    /// Copy of `tier` with the overridden fields replaced.
    pub fn applied_to(&self, tier: &Tier) -> Tier {
        Tier {
            case_price: self.case_price.unwrap_or(tier.case_price),
            cost_per_tx: self.cost_per_tx.unwrap_or(tier.cost_per_tx),
            tx_per_case: self.tx_per_case.unwrap_or(tier.tx_per_case),
            default_clinic_price_per_tx: self
                .default_clinic_price_per_tx
                .unwrap_or(tier.default_clinic_price_per_tx),
            default_extra_cost_per_tx: self
                .default_extra_cost_per_tx
                .unwrap_or(tier.default_extra_cost_per_tx),
            ..tier.clone()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Overrides for one session, keyed by tier and shipping option name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Overrides {
    #[serde(default)]
    pub tiers: BTreeMap<String, TierOverride>,
    #[serde(default)]
    pub shipping: BTreeMap<String, f64>,
}

impl Overrides {
    pub fn is_empty(&self) -> bool {
        self.tiers.values().all(TierOverride::is_empty) && self.shipping.is_empty()
    }

    pub fn tier(mut self, name: impl Into<String>, tier_override: TierOverride) -> Self {
        self.tiers.insert(name.into(), tier_override);
        self
    }

    pub fn shipping(mut self, name: impl Into<String>, cost: f64) -> Self {
        self.shipping.insert(name.into(), cost);
        self
    }
}
