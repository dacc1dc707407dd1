use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;

use super::load_session;
use crate::cli::OutputFormat;
use crate::formatting::FormattingConfig;
use crate::output::{self, ReportView};
use crate::report::RoiReport;
use crate::scenario::{self, ScenarioInput};

pub struct CalculateConfig {
    pub config_dir: PathBuf,
    pub overrides: Option<PathBuf>,
    pub input: ScenarioInput,
    pub compare: bool,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub formatting_config: FormattingConfig,
}

pub fn handle_calculate(config: CalculateConfig) -> Result<()> {
    let report = build_report(&config)?;
    output::output_report(
        &report,
        ReportView::Full,
        config.format,
        config.output,
        config.formatting_config,
    )
}

/// Load the session, resolve the order and price it.
pub fn build_report(config: &CalculateConfig) -> Result<RoiReport> {
    let session = load_session(&config.config_dir, config.overrides.as_deref())?;
    let resolved = scenario::resolve(&config.input, &session.catalog, &session.settings)
        .context("Invalid scenario")?;
    debug!(
        tier = %resolved.tier.name,
        cases = resolved.order.num_cases,
        shipping = %resolved.shipping.name,
        "resolved scenario"
    );

    let report = RoiReport::build(&resolved, &session.settings.currency_symbol);
    Ok(if config.compare {
        report.with_comparison(&session.catalog.tiers)
    } else {
        report
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::templates::starter_files;
    use tempfile::TempDir;

    fn config(dir: &TempDir, input: ScenarioInput) -> CalculateConfig {
        for (name, contents) in starter_files() {
            std::fs::write(dir.path().join(name), contents).unwrap();
        }
        CalculateConfig {
            config_dir: dir.path().to_path_buf(),
            overrides: None,
            input,
            compare: false,
            format: None,
            output: None,
            formatting_config: FormattingConfig::plain(),
        }
    }

    #[test]
    fn defaults_come_from_first_tier() {
        let dir = TempDir::new().unwrap();
        let report = build_report(&config(&dir, ScenarioInput::default())).unwrap();

        assert_eq!(report.tier.name, "Standard");
        assert_eq!(report.scenario.num_cases, 1);
        assert_eq!(report.scenario.price_per_tx, 200.0);
        assert_eq!(report.shipping_name, "Standard ground");
        assert!(report.comparison.is_none());
    }

    #[test]
    fn compare_flag_attaches_every_tier() {
        let dir = TempDir::new().unwrap();
        let mut config = config(
            &dir,
            ScenarioInput {
                tier: Some("Elite".into()),
                num_cases: Some(5),
                ..ScenarioInput::default()
            },
        );
        config.compare = true;

        let report = build_report(&config).unwrap();
        let comparison = report.comparison.unwrap();
        assert_eq!(comparison.rows.len(), 3);
        assert_eq!(comparison.best_tier.as_deref(), Some("Elite"));
    }

    #[test]
    fn out_of_range_cases_are_rejected() {
        let dir = TempDir::new().unwrap();
        let err = build_report(&config(
            &dir,
            ScenarioInput {
                num_cases: Some(0),
                ..ScenarioInput::default()
            },
        ))
        .unwrap_err();

        assert!(format!("{err:#}").contains("Invalid scenario"));
    }
}
