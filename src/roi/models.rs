use serde::{Deserialize, Serialize};

/// Every metric derived from one tier priced under one order scenario.
///
/// Values are raw `f64`s with no rounding applied; formatting belongs to
/// the output layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    pub total_cases: u32,
    pub total_txs: u64,
    pub product_cost: f64,
    pub shipping_cost: f64,
    pub total_cost: f64,
    pub revenue_per_tx: f64,
    pub cost_per_tx_product: f64,
    pub extra_cost_per_tx: f64,
    pub total_cost_per_tx: f64,
    pub profit_per_tx: f64,
    pub total_revenue: f64,
    pub total_profit: f64,
    pub margin_pct: f64,
    pub roi_pct: f64,
    /// `None` when `profit_per_tx <= 0`: break-even is not reachable at
    /// this price.
    pub breakeven_txs: Option<f64>,
}

impl RoiResult {
    pub fn breakeven_reachable(&self) -> bool {
        self.breakeven_txs.is_some()
    }

    /// Per-treatment profit accumulated over `txs` treatments, minus the
    /// order's total cost. Crosses zero at `breakeven_txs`.
    pub fn net_position_at(&self, txs: f64) -> f64 {
        self.profit_per_tx * txs - self.total_cost
    }

    pub fn summary(&self) -> String {
        let breakeven = match self.breakeven_txs {
            Some(txs) => format!("{txs:.1} tx"),
            None => "unreachable".to_string(),
        };
        format!(
            "Profit: {:.2} | Margin: {:.1}% | ROI: {:.1}% | Break-even: {}",
            self.total_profit, self.margin_pct, self.roi_pct, breakeven
        )
    }
}

/// One line of a tier comparison.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub tier_name: String,
    pub cost_per_tx_product: f64,
    pub total_profit: f64,
    pub profit_per_tx: f64,
    pub margin_pct: f64,
    pub roi_pct: f64,
}

impl ComparisonRow {
    pub fn from_result(tier_name: &str, result: &RoiResult) -> Self {
        Self {
            tier_name: tier_name.to_string(),
            cost_per_tx_product: result.cost_per_tx_product,
            total_profit: result.total_profit,
            profit_per_tx: result.profit_per_tx,
            margin_pct: result.margin_pct,
            roi_pct: result.roi_pct,
        }
    }
}
