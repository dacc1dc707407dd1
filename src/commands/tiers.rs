use anyhow::Result;
use std::path::PathBuf;

use super::load_session;
use crate::cli::OutputFormat;
use crate::formatting::FormattingConfig;
use crate::output;

pub struct TiersConfig {
    pub config_dir: PathBuf,
    pub overrides: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub formatting_config: FormattingConfig,
}

pub fn handle_tiers(config: TiersConfig) -> Result<()> {
    let session = load_session(&config.config_dir, config.overrides.as_deref())?;
    output::output_catalog(
        &session.catalog,
        &session.settings,
        config.format,
        config.output,
        config.formatting_config,
    )
}
