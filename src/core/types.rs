//! Domain records shared by the engine, the catalogs and the reports.

use serde::{Deserialize, Serialize};

/// A named pricing configuration: what one case costs, how many treatments
/// it yields, and the clinic pricing pre-filled for new scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub name: String,
    pub description: String,
    pub case_price: f64,
    pub cost_per_tx: f64,
    pub savings_vs_standard_pct: f64,
    /// Treatments yielded by one case. Never zero.
    pub tx_per_case: u32,
    pub default_clinic_price_per_tx: f64,
    pub default_extra_cost_per_tx: f64,
    /// `None` falls back to the global minimum.
    pub default_min_cases: Option<u32>,
    /// `None` falls back to the global maximum.
    pub default_max_cases: Option<u32>,
}

impl Tier {
    /// Minimal tier with no description, savings or case bounds.
    pub fn new(name: impl Into<String>, case_price: f64, cost_per_tx: f64, tx_per_case: u32) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            case_price,
            cost_per_tx,
            savings_vs_standard_pct: 0.0,
            tx_per_case,
            default_clinic_price_per_tx: 0.0,
            default_extra_cost_per_tx: 0.0,
            default_min_cases: None,
            default_max_cases: None,
        }
    }

    pub fn with_defaults(mut self, clinic_price_per_tx: f64, extra_cost_per_tx: f64) -> Self {
        self.default_clinic_price_per_tx = clinic_price_per_tx;
        self.default_extra_cost_per_tx = extra_cost_per_tx;
        self
    }

    pub fn with_case_bounds(mut self, min_cases: Option<u32>, max_cases: Option<u32>) -> Self {
        self.default_min_cases = min_cases;
        self.default_max_cases = max_cases;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn has_savings(&self) -> bool {
        self.savings_vs_standard_pct != 0.0
    }
}

/// A named flat shipping charge applied once per order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingOption {
    pub name: String,
    pub cost: f64,
}

impl ShippingOption {
    pub fn new(name: impl Into<String>, cost: f64) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }
}

/// Everything about an order except the tier. Held fixed when the same
/// order is priced against several tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderScenario {
    pub num_cases: u32,
    pub price_per_tx: f64,
    pub extra_cost_per_tx: f64,
    pub shipping_cost: f64,
}

impl OrderScenario {
    pub fn new(num_cases: u32, price_per_tx: f64, extra_cost_per_tx: f64, shipping_cost: f64) -> Self {
        Self {
            num_cases,
            price_per_tx,
            extra_cost_per_tx,
            shipping_cost,
        }
    }
}

/// Inclusive order-volume bounds for a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseBounds {
    pub min: u32,
    pub max: u32,
}

impl CaseBounds {
    pub fn contains(&self, num_cases: u32) -> bool {
        (self.min..=self.max).contains(&num_cases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_defaults_and_bounds() {
        let tier = Tier::new("Standard", 500.0, 50.0, 10)
            .with_defaults(200.0, 20.0)
            .with_case_bounds(Some(2), None)
            .with_description("Base pricing");

        assert_eq!(tier.default_clinic_price_per_tx, 200.0);
        assert_eq!(tier.default_extra_cost_per_tx, 20.0);
        assert_eq!(tier.default_min_cases, Some(2));
        assert_eq!(tier.default_max_cases, None);
        assert_eq!(tier.description, "Base pricing");
        assert!(!tier.has_savings());
    }

    #[test]
    fn case_bounds_are_inclusive() {
        let bounds = CaseBounds { min: 1, max: 5 };
        assert!(bounds.contains(1));
        assert!(bounds.contains(5));
        assert!(!bounds.contains(0));
        assert!(!bounds.contains(6));
    }
}
