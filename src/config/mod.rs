//! Flat-file configuration: the three catalog sheets and session overrides.
//!
//! A config directory holds one CSV file per sheet:
//!
//! - `tiers.csv`: one row per pricing tier
//! - `shipping.csv`: `shipping_name, shipping_cost`
//! - `global_settings.csv`: `key, value`
//!
//! Overrides live in an optional TOML file passed separately.

mod loader;
pub mod records;
pub mod templates;

pub use loader::{
    load_catalogs, load_overrides, read_settings, read_shipping, read_tiers,
    DEFAULT_CONFIG_DIR, SETTINGS_FILE, SHIPPING_FILE, TIERS_FILE,
};
pub use records::{
    SettingRecord, ShippingRecord, TierRecord, REQUIRED_SHIPPING_COLUMNS, REQUIRED_TIER_COLUMNS,
};
