//! ROI engine: pure per-order financial metrics for a tier.
//!
//! The engine never validates its inputs. Negative prices or costs are a
//! caller concern (see [`crate::scenario`]); for any non-negative finite
//! input every branch below is total and no metric becomes NaN.

pub mod comparison;
pub mod models;


use tracing::trace;

use crate::core::{OrderScenario, Tier};

pub use comparison::{best_tier, compare_tiers};
pub use models::{ComparisonRow, RoiResult};

/// Compute every metric for `num_cases` cases of `tier` sold at
/// `price_per_tx` per treatment.
///
/// Margin and ROI fall back to 0 when their denominator is not positive.
/// Break-even requires strictly positive per-treatment profit; at exactly
/// zero it is reported as unreachable rather than as zero treatments.
pub fn compute_roi(
    tier: &Tier,
    num_cases: u32,
    price_per_tx: f64,
    extra_cost_per_tx: f64,
    shipping_cost: f64,
) -> RoiResult {
    let cases = f64::from(num_cases);
    let total_txs = u64::from(num_cases) * u64::from(tier.tx_per_case);

    let product_cost = cases * tier.case_price;
    let total_cost = product_cost + shipping_cost;

    let cost_per_tx_product = tier.cost_per_tx;
    let total_cost_per_tx = cost_per_tx_product + extra_cost_per_tx;
    let revenue_per_tx = price_per_tx;
    let profit_per_tx = revenue_per_tx - total_cost_per_tx;

    let total_revenue = revenue_per_tx * total_txs as f64;
    let total_profit = profit_per_tx * total_txs as f64;

    let margin_pct = percentage_of(total_profit, total_revenue);
    let roi_pct = percentage_of(total_profit, total_cost);

    let breakeven_txs = if profit_per_tx > 0.0 {
        Some(total_cost / profit_per_tx)
    } else {
        None
    };

    trace!(
        tier = %tier.name,
        num_cases,
        total_profit,
        roi_pct,
        "computed ROI"
    );

    RoiResult {
        total_cases: num_cases,
        total_txs,
        product_cost,
        shipping_cost,
        total_cost,
        revenue_per_tx,
        cost_per_tx_product,
        extra_cost_per_tx,
        total_cost_per_tx,
        profit_per_tx,
        total_revenue,
        total_profit,
        margin_pct,
        roi_pct,
        breakeven_txs,
    }
}

/// [`compute_roi`] with the order fields taken from a scenario.
pub fn compute_roi_for(tier: &Tier, scenario: &OrderScenario) -> RoiResult {
    compute_roi(
        tier,
        scenario.num_cases,
        scenario.price_per_tx,
        scenario.extra_cost_per_tx,
        scenario.shipping_cost,
    )
}

// Zero or negative denominators report 0%, not NaN.
fn percentage_of(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator * 100.0
    } else {
        0.0
    }
}
