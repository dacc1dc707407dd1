//! Structured report assembled from one resolved scenario.
//!
//! A report carries raw numbers only. The renderers in [`crate::output`]
//! decide how each value is displayed.

use serde::Serialize;

use crate::catalog::TierCatalog;
use crate::core::{CaseBounds, OrderScenario};
use crate::roi::{best_tier, compare_tiers, compute_roi_for, ComparisonRow, RoiResult};
use crate::scenario::ResolvedScenario;

/// Static facts about the chosen tier, shown above the metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierOverview {
    pub name: String,
    pub description: String,
    pub case_price: f64,
    pub cost_per_tx: f64,
    pub tx_per_case: u32,
    /// Present only when the tier advertises a saving.
    pub savings_vs_standard_pct: Option<f64>,
}

/// How a breakdown value should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Amount {
    /// Currency rounded to whole units
    Currency(f64),
    /// Currency with one decimal place
    UnitCurrency(f64),
    Percent(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownLine {
    pub label: &'static str,
    pub amount: Amount,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierComparison {
    pub rows: Vec<ComparisonRow>,
    pub best_tier: Option<String>,
}

impl TierComparison {
    pub fn build(catalog: &TierCatalog, order: &OrderScenario) -> Self {
        let rows: Vec<ComparisonRow> = compare_tiers(catalog, order).collect();
        let best_tier = best_tier(&rows).map(|row| row.tier_name.clone());
        Self { rows, best_tier }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoiReport {
    pub currency_symbol: String,
    pub tier: TierOverview,
    pub shipping_name: String,
    pub case_bounds: CaseBounds,
    pub scenario: OrderScenario,
    pub result: RoiResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<TierComparison>,
}

impl RoiReport {
    pub fn build(resolved: &ResolvedScenario, currency_symbol: &str) -> Self {
        let tier = &resolved.tier;
        Self {
            currency_symbol: currency_symbol.to_string(),
            tier: TierOverview {
                name: tier.name.clone(),
                description: tier.description.clone(),
                case_price: tier.case_price,
                cost_per_tx: tier.cost_per_tx,
                tx_per_case: tier.tx_per_case,
                savings_vs_standard_pct: tier.has_savings().then_some(tier.savings_vs_standard_pct),
            },
            shipping_name: resolved.shipping.name.clone(),
            case_bounds: resolved.bounds,
            scenario: resolved.order,
            result: compute_roi_for(tier, &resolved.order),
            comparison: None,
        }
    }

    /// Attach a comparison of the same order across `catalog`.
    pub fn with_comparison(mut self, catalog: &TierCatalog) -> Self {
        self.comparison = Some(TierComparison::build(catalog, &self.scenario));
        self
    }

    /// Ordered detail lines for the breakdown table.
    pub fn breakdown(&self) -> Vec<BreakdownLine> {
        let r = &self.result;
        let line = |label: &'static str, amount: Amount| BreakdownLine { label, amount };
        vec![
            line("Product cost per treatment", Amount::UnitCurrency(r.cost_per_tx_product)),
            line("Other cost per treatment", Amount::UnitCurrency(r.extra_cost_per_tx)),
            line("Total cost per treatment", Amount::UnitCurrency(r.total_cost_per_tx)),
            line("Price charged per treatment", Amount::UnitCurrency(r.revenue_per_tx)),
            line("Product cost", Amount::Currency(r.product_cost)),
            line("Shipping cost", Amount::Currency(r.shipping_cost)),
            line("Total cost (product + shipping)", Amount::Currency(r.total_cost)),
            line("Total revenue", Amount::Currency(r.total_revenue)),
            line("Total profit", Amount::Currency(r.total_profit)),
            line("Profit margin", Amount::Percent(r.margin_pct)),
            line("ROI on order", Amount::Percent(r.roi_pct)),
        ]
    }
}
