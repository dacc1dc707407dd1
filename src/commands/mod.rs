//! CLI command implementations.
//!
//! Available commands:
//! - **calculate**: ROI for one tier and order, optionally with a tier comparison
//! - **compare**: every tier priced under the same order
//! - **tiers**: list the session's tier and shipping catalogs
//! - **init**: write a starter configuration directory
//!
//! Every command except `init` starts from a [`Session`]: the base catalogs
//! loaded from the config directory with any overrides applied to a private
//! copy.

pub mod calculate;
pub mod compare;
pub mod init;
pub mod tiers;

pub use calculate::{handle_calculate, CalculateConfig};
pub use compare::{handle_compare, CompareConfig};
pub use init::init_config;
pub use tiers::{handle_tiers, TiersConfig};

use anyhow::{Context, Result};
use std::path::Path;

use crate::catalog::{GlobalSettings, RuntimeCatalog};
use crate::config::{load_catalogs, load_overrides};

/// Catalog state for one command invocation.
#[derive(Debug, Clone)]
pub struct Session {
    pub settings: GlobalSettings,
    pub catalog: RuntimeCatalog,
}

pub fn load_session(config_dir: &Path, overrides: Option<&Path>) -> Result<Session> {
    let base = load_catalogs(config_dir).with_context(|| {
        format!(
            "Failed to load configuration from {} (run `roicalc init` to create one)",
            config_dir.display()
        )
    })?;

    let mut catalog = base.session();
    if let Some(path) = overrides {
        let overrides = load_overrides(path)
            .with_context(|| format!("Failed to read overrides from {}", path.display()))?;
        catalog
            .apply(&overrides)
            .with_context(|| format!("Failed to apply overrides from {}", path.display()))?;
    }

    Ok(Session {
        settings: base.settings,
        catalog,
    })
}
