use anyhow::{Context, Result};
use std::path::PathBuf;

use super::load_session;
use crate::cli::OutputFormat;
use crate::formatting::FormattingConfig;
use crate::output::{self, ReportView};
use crate::report::RoiReport;
use crate::scenario::{self, ScenarioInput};

pub struct CompareConfig {
    pub config_dir: PathBuf,
    pub overrides: Option<PathBuf>,
    pub input: ScenarioInput,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub formatting_config: FormattingConfig,
}

/// Price the resolved order under every tier.
///
/// The order is resolved against the selected (or first) tier so that its
/// defaults and case bounds apply, then held fixed across the catalog.
pub fn handle_compare(config: CompareConfig) -> Result<()> {
    let session = load_session(&config.config_dir, config.overrides.as_deref())?;
    let resolved = scenario::resolve(&config.input, &session.catalog, &session.settings)
        .context("Invalid scenario")?;

    let report = RoiReport::build(&resolved, &session.settings.currency_symbol)
        .with_comparison(&session.catalog.tiers);

    if let Some(best) = report.comparison.as_ref().and_then(|c| c.best_tier.as_deref()) {
        tracing::info!(best_tier = best, "compared tiers");
    }

    output::output_report(
        &report,
        ReportView::Comparison,
        config.format,
        config.output,
        config.formatting_config,
    )
}
