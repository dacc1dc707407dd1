//! Row shapes for the CSV sheets.

use serde::Deserialize;

use crate::core::{ShippingOption, Tier};
use crate::errors::ConfigError;

pub const REQUIRED_TIER_COLUMNS: [&str; 10] = [
    "tier_name",
    "description",
    "case_price",
    "cost_per_tx",
    "savings_vs_standard_pct",
    "tx_per_case",
    "default_clinic_price_per_tx",
    "default_extra_cost_per_tx",
    "default_min_cases",
    "default_max_cases",
];

pub const REQUIRED_SHIPPING_COLUMNS: [&str; 2] = ["shipping_name", "shipping_cost"];

pub const REQUIRED_SETTINGS_COLUMNS: [&str; 2] = ["key", "value"];

/// One row of `tiers.csv`.
///
/// Counts are read as floats because spreadsheet exports write whole
/// numbers as `10.0`; [`TierRecord::into_tier`] checks they are integral.
#[derive(Debug, Clone, Deserialize)]
pub struct TierRecord {
    pub tier_name: String,
    pub description: String,
    pub case_price: f64,
    pub cost_per_tx: f64,
    pub savings_vs_standard_pct: f64,
    pub tx_per_case: f64,
    pub default_clinic_price_per_tx: f64,
    pub default_extra_cost_per_tx: f64,
    pub default_min_cases: Option<f64>,
    pub default_max_cases: Option<f64>,
}

impl TierRecord {
    pub fn into_tier(self) -> Result<Tier, ConfigError> {
        let field = |column: &str| format!("{}.{}", self.tier_name, column);

        let tx_per_case = whole_count(&field("tx_per_case"), self.tx_per_case)?;
        let default_min_cases = self
            .default_min_cases
            .map(|value| whole_count(&field("default_min_cases"), value))
            .transpose()?;
        let default_max_cases = self
            .default_max_cases
            .map(|value| whole_count(&field("default_max_cases"), value))
            .transpose()?;

        Ok(Tier {
            name: self.tier_name,
            description: self.description,
            case_price: self.case_price,
            cost_per_tx: self.cost_per_tx,
            savings_vs_standard_pct: self.savings_vs_standard_pct,
            tx_per_case,
            default_clinic_price_per_tx: self.default_clinic_price_per_tx,
            default_extra_cost_per_tx: self.default_extra_cost_per_tx,
            default_min_cases,
            default_max_cases,
        })
    }
}

/// One row of `shipping.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct ShippingRecord {
    pub shipping_name: String,
    pub shipping_cost: f64,
}

impl From<ShippingRecord> for ShippingOption {
    fn from(record: ShippingRecord) -> Self {
        ShippingOption::new(record.shipping_name, record.shipping_cost)
    }
}

/// One row of `global_settings.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct SettingRecord {
    pub key: String,
    pub value: String,
}

fn whole_count(field: &str, value: f64) -> Result<u32, ConfigError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(ConfigError::invalid_value(
            field,
            format!("expected a whole non-negative count, got {value}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TierRecord {
        TierRecord {
            tier_name: "Standard".into(),
            description: "Base pricing".into(),
            case_price: 500.0,
            cost_per_tx: 50.0,
            savings_vs_standard_pct: 0.0,
            tx_per_case: 10.0,
            default_clinic_price_per_tx: 200.0,
            default_extra_cost_per_tx: 20.0,
            default_min_cases: Some(1.0),
            default_max_cases: None,
        }
    }

    #[test]
    fn converts_whole_float_counts() {
        let tier = record().into_tier().unwrap();
        assert_eq!(tier.tx_per_case, 10);
        assert_eq!(tier.default_min_cases, Some(1));
        assert_eq!(tier.default_max_cases, None);
    }

    #[test]
    fn rejects_fractional_yield() {
        let err = TierRecord {
            tx_per_case: 9.5,
            ..record()
        }
        .into_tier()
        .unwrap_err();
        assert!(err.to_string().contains("Standard.tx_per_case"));
    }
}
