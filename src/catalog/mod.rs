//! Tier and shipping catalogs plus the global settings that back them.
//!
//! Catalogs are ordered mappings: iteration follows insertion order, and
//! inserting a name that already exists replaces the entry in place (last
//! write wins, first position kept). The base catalogs are loaded once and
//! never mutated afterwards; sessions work on a [`RuntimeCatalog`] copy.

pub mod overrides;
pub mod runtime;
pub mod settings;

use im::Vector;

use crate::core::{ShippingOption, Tier};
use crate::errors::ConfigError;

pub use overrides::{Overrides, TierOverride};
pub use runtime::RuntimeCatalog;
pub use settings::GlobalSettings;

/// Anything keyed by a display name inside a catalog.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Tier {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for ShippingOption {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Insertion-ordered, name-keyed collection.
///
/// Backed by a persistent vector so cloning a catalog for a session is
/// cheap and never shares mutation with the source catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<T: Clone> {
    entries: Vector<T>,
}

pub type TierCatalog = Catalog<Tier>;
pub type ShippingCatalog = Catalog<ShippingOption>;

impl<T: Clone> Default for Catalog<T> {
    fn default() -> Self {
        Self {
            entries: Vector::new(),
        }
    }
}

impl<T: Named + Clone> Catalog<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace by name. Returns the replaced entry, if any.
    pub fn insert(&mut self, entry: T) -> Option<T> {
        match self.position(entry.name()) {
            Some(index) => Some(self.entries.set(index, entry)),
            None => {
                self.entries.push_back(entry);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        let index = self.position(name)?;
        self.entries.get_mut(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name() == name)
    }
}

impl<T: Named + Clone> FromIterator<T> for Catalog<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for entry in iter {
            catalog.insert(entry);
        }
        catalog
    }
}

impl ShippingCatalog {
    pub fn cost_of(&self, name: &str) -> Option<f64> {
        self.get(name).map(|option| option.cost)
    }
}

/// The read-only base data every session starts from.
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub tiers: TierCatalog,
    pub shipping: ShippingCatalog,
    pub settings: GlobalSettings,
}

impl Catalogs {
    /// An owned copy of the tier and shipping catalogs for one session.
    pub fn session(&self) -> RuntimeCatalog {
        RuntimeCatalog::from_base(self)
    }
}

pub(crate) fn ensure_amount(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid_value(
            field,
            format!("expected a non-negative amount, got {value}"),
        ))
    }
}

/// Check the numeric invariants every tier in a catalog must satisfy.
pub(crate) fn validate_tier(tier: &Tier) -> Result<(), ConfigError> {
    let field = |name: &str| format!("{}.{}", tier.name, name);

    ensure_amount(&field("case_price"), tier.case_price)?;
    ensure_amount(&field("cost_per_tx"), tier.cost_per_tx)?;
    ensure_amount(
        &field("default_clinic_price_per_tx"),
        tier.default_clinic_price_per_tx,
    )?;
    ensure_amount(
        &field("default_extra_cost_per_tx"),
        tier.default_extra_cost_per_tx,
    )?;

    if tier.tx_per_case == 0 {
        return Err(ConfigError::invalid_value(
            field("tx_per_case"),
            "a case must yield at least one treatment",
        ));
    }

    if let (Some(min), Some(max)) = (tier.default_min_cases, tier.default_max_cases) {
        if min > max {
            return Err(ConfigError::invalid_value(
                field("default_min_cases"),
                format!("minimum {min} exceeds maximum {max}"),
            ));
        }
    }

    Ok(())
}
