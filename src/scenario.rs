//! Turning user input into a validated order scenario.
//!
//! The ROI engine accepts any numbers it is given. This layer is where
//! input constraints live: tier and shipping names must exist, money values
//! must be non-negative and finite, and the case count must sit inside the
//! tier's bounds. Omitted values are pre-filled from the tier defaults.

use serde::Serialize;

use crate::catalog::{GlobalSettings, RuntimeCatalog};
use crate::core::{CaseBounds, OrderScenario, ShippingOption, Tier};
use crate::errors::ScenarioError;

/// Raw scenario choices. `None` means "use the default".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenarioInput {
    pub tier: Option<String>,
    pub num_cases: Option<u32>,
    pub price_per_tx: Option<f64>,
    pub extra_cost_per_tx: Option<f64>,
    pub shipping: Option<String>,
}

/// A scenario with every default filled in and every constraint checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedScenario {
    pub tier: Tier,
    pub shipping: ShippingOption,
    pub bounds: CaseBounds,
    pub order: OrderScenario,
}

/// Resolve `input` against a session catalog.
///
/// Defaults: the first tier, the tier's lower case bound, the tier's
/// default clinic price and extra cost, and the first shipping option.
pub fn resolve(
    input: &ScenarioInput,
    catalog: &RuntimeCatalog,
    settings: &GlobalSettings,
) -> Result<ResolvedScenario, ScenarioError> {
    let tier = match input.tier.as_deref() {
        Some(name) => catalog.tiers.get(name),
        None => catalog.tiers.first(),
    }
    .ok_or_else(|| ScenarioError::UnknownTier {
        name: input.tier.clone().unwrap_or_default(),
        available: catalog.tiers.names(),
    })?
    .clone();

    let shipping = match input.shipping.as_deref() {
        Some(name) => catalog.shipping.get(name),
        None => catalog.shipping.first(),
    }
    .ok_or_else(|| ScenarioError::UnknownShipping {
        name: input.shipping.clone().unwrap_or_default(),
        available: catalog.shipping.names(),
    })?
    .clone();

    let bounds = settings.case_bounds_for(&tier);
    let order = OrderScenario {
        num_cases: input.num_cases.unwrap_or(bounds.min),
        price_per_tx: input.price_per_tx.unwrap_or(tier.default_clinic_price_per_tx),
        extra_cost_per_tx: input
            .extra_cost_per_tx
            .unwrap_or(tier.default_extra_cost_per_tx),
        shipping_cost: shipping.cost,
    };

    validate_order(&tier.name, &order, bounds)?;

    Ok(ResolvedScenario {
        tier,
        shipping,
        bounds,
        order,
    })
}

/// Check the caller-side constraints on an order before pricing it.
pub fn validate_order(
    tier_name: &str,
    order: &OrderScenario,
    bounds: CaseBounds,
) -> Result<(), ScenarioError> {
    ensure_non_negative("price_per_tx", order.price_per_tx)?;
    ensure_non_negative("extra_cost_per_tx", order.extra_cost_per_tx)?;
    ensure_non_negative("shipping_cost", order.shipping_cost)?;

    if !bounds.contains(order.num_cases) {
        return Err(ScenarioError::CasesOutOfRange {
            tier: tier_name.to_string(),
            num_cases: order.num_cases,
            min: bounds.min,
            max: bounds.max,
        });
    }
    Ok(())
}

fn ensure_non_negative(field: &'static str, value: f64) -> Result<(), ScenarioError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ScenarioError::NegativeAmount { field, value })
    }
}
