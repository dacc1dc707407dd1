use std::collections::BTreeMap;

use crate::core::{CaseBounds, Tier};
use crate::errors::ConfigError;

pub const CURRENCY_SYMBOL_KEY: &str = "currency_symbol";
pub const MIN_CASES_KEY: &str = "default_min_cases_global";
pub const MAX_CASES_KEY: &str = "default_max_cases_global";

const DEFAULT_CURRENCY_SYMBOL: &str = "$";
const DEFAULT_MIN_CASES: u32 = 1;
const DEFAULT_MAX_CASES: u32 = 500;

/// Key/value settings that apply across all tiers.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalSettings {
    pub currency_symbol: String,
    pub default_min_cases: u32,
    pub default_max_cases: u32,
    /// Every raw pair as loaded, including keys this crate does not use.
    raw: BTreeMap<String, String>,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            default_min_cases: DEFAULT_MIN_CASES,
            default_max_cases: DEFAULT_MAX_CASES,
            raw: BTreeMap::new(),
        }
    }
}

impl GlobalSettings {
    /// Build settings from raw pairs. Later duplicates win. Missing known
    /// keys keep their defaults.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let raw: BTreeMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let mut settings = Self::default();

        if let Some(symbol) = raw.get(CURRENCY_SYMBOL_KEY) {
            settings.currency_symbol = symbol.clone();
        }
        if let Some(value) = raw.get(MIN_CASES_KEY) {
            settings.default_min_cases = parse_count(MIN_CASES_KEY, value)?;
        }
        if let Some(value) = raw.get(MAX_CASES_KEY) {
            settings.default_max_cases = parse_count(MAX_CASES_KEY, value)?;
        }

        if settings.default_min_cases > settings.default_max_cases {
            return Err(ConfigError::invalid_value(
                MIN_CASES_KEY,
                format!(
                    "global minimum {} exceeds global maximum {}",
                    settings.default_min_cases, settings.default_max_cases
                ),
            ));
        }

        settings.raw = raw;
        Ok(settings)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.raw.get(key).map(String::as_str)
    }

    /// Order-volume bounds for `tier`: the tier's own value where present,
    /// otherwise the global default.
    ///
    /// When only one bound comes from the tier and it falls outside the
    /// global range, the global bound on the other side moves to meet it.
    /// The tier's explicit value is never changed.
    pub fn case_bounds_for(&self, tier: &Tier) -> CaseBounds {
        let (min, max) = match (tier.default_min_cases, tier.default_max_cases) {
            (Some(min), Some(max)) => (min, max),
            (Some(min), None) => (min, self.default_max_cases.max(min)),
            (None, Some(max)) => (self.default_min_cases.min(max), max),
            (None, None) => (self.default_min_cases, self.default_max_cases),
        };
        CaseBounds { min, max }
    }
}

// Spreadsheet exports often write whole numbers as "500.0".
fn parse_count(key: &str, value: &str) -> Result<u32, ConfigError> {
    let trimmed = value.trim();
    if let Ok(count) = trimmed.parse::<u32>() {
        return Ok(count);
    }
    match trimmed.parse::<f64>() {
        Ok(number) if number >= 0.0 && number.fract() == 0.0 && number <= f64::from(u32::MAX) => {
            Ok(number as u32)
        }
        _ => Err(ConfigError::invalid_value(
            key,
            format!("expected a whole number of cases, got {value:?}"),
        )),
    }
}
