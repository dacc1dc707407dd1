// Export modules for library usage
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod output;
pub mod report;
pub mod roi;
pub mod scenario;

// Re-export commonly used types
pub use crate::core::{CaseBounds, OrderScenario, ShippingOption, Tier};

pub use crate::roi::{best_tier, compare_tiers, compute_roi, compute_roi_for, ComparisonRow, RoiResult};

pub use crate::catalog::{
    Catalog, Catalogs, GlobalSettings, Overrides, RuntimeCatalog, ShippingCatalog, TierCatalog,
    TierOverride,
};

pub use crate::config::{load_catalogs, load_overrides};

pub use crate::errors::{ConfigError, ScenarioError};

pub use crate::report::RoiReport;

pub use crate::scenario::{resolve, ResolvedScenario, ScenarioInput};
