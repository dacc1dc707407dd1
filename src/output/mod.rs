pub mod json;
pub mod markdown;
pub mod terminal;

use crate::catalog::{GlobalSettings, RuntimeCatalog};
use crate::cli::OutputFormat;
use crate::formatting::currency::percent;
use crate::formatting::{CurrencyFormat, FormattingConfig};
use crate::io;
use crate::report::{Amount, RoiReport};
use crate::roi::ComparisonRow;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const BREAKEVEN_UNREACHABLE: &str = "Not reachable (price too low)";

pub const COMPARISON_HEADERS: [&str; 6] = [
    "Tier",
    "Cost per treatment (product)",
    "Total profit",
    "Profit per treatment",
    "Margin %",
    "ROI %",
];

/// Which parts of a report to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportView {
    /// Tier overview, summary metrics, breakdown and any comparison
    Full,
    /// Only the tier comparison
    Comparison,
}

pub fn output_report(
    report: &RoiReport,
    view: ReportView,
    format: Option<OutputFormat>,
    output_file: Option<PathBuf>,
    formatting_config: FormattingConfig,
) -> Result<()> {
    let format = resolve_format(format, output_file.as_deref());
    let formatting_config = file_safe_formatting(formatting_config, output_file.as_deref());
    let content = render_report(report, view, format, formatting_config)?;
    emit(&content, output_file)
}

pub fn render_report(
    report: &RoiReport,
    view: ReportView,
    format: OutputFormat,
    formatting_config: FormattingConfig,
) -> Result<String> {
    match format {
        OutputFormat::Json => json::render_report(report, view),
        OutputFormat::Markdown => Ok(markdown::render_report(report, view)),
        OutputFormat::Terminal => Ok(terminal::render_report(report, view, formatting_config)),
    }
}

pub fn output_catalog(
    catalog: &RuntimeCatalog,
    settings: &GlobalSettings,
    format: Option<OutputFormat>,
    output_file: Option<PathBuf>,
    formatting_config: FormattingConfig,
) -> Result<()> {
    let format = resolve_format(format, output_file.as_deref());
    let formatting_config = file_safe_formatting(formatting_config, output_file.as_deref());
    let content = match format {
        OutputFormat::Json => json::render_catalog(catalog, settings)?,
        OutputFormat::Markdown => markdown::render_catalog(catalog, settings),
        OutputFormat::Terminal => terminal::render_catalog(catalog, settings, formatting_config),
    };
    emit(&content, output_file)
}

/// Print to stdout, or write to `output_file` when given.
pub fn emit(content: &str, output_file: Option<PathBuf>) -> Result<()> {
    if let Some(path) = output_file {
        io::write_file(&path, content)?;
        tracing::info!(path = %path.display(), "wrote report");
    } else {
        println!("{content}");
    }
    Ok(())
}

/// An explicit format wins; otherwise the output file extension decides.
pub fn resolve_format(format: Option<OutputFormat>, output_file: Option<&Path>) -> OutputFormat {
    if let Some(format) = format {
        return format;
    }
    match output_file
        .and_then(|p| p.extension())
        .and_then(|ext| ext.to_str())
    {
        Some("md") => OutputFormat::Markdown,
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Terminal,
    }
}

// Escape codes do not belong in files.
fn file_safe_formatting(config: FormattingConfig, output_file: Option<&Path>) -> FormattingConfig {
    if output_file.is_some() {
        FormattingConfig::plain()
    } else {
        config
    }
}

pub(crate) fn format_amount(currency: &CurrencyFormat, amount: Amount) -> String {
    match amount {
        Amount::Currency(value) => currency.whole(value),
        Amount::UnitCurrency(value) => currency.tenths(value),
        Amount::Percent(value) => percent(value),
    }
}

pub(crate) fn format_breakeven(breakeven_txs: Option<f64>) -> String {
    match breakeven_txs {
        Some(txs) => format!("{txs:.0}"),
        None => BREAKEVEN_UNREACHABLE.to_string(),
    }
}

/// How a summary metric is emphasised by the terminal renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MetricKind {
    /// Counts and per-unit amounts shown as-is
    Plain,
    /// Profit, ROI and margin: good when non-negative
    Outcome,
    Breakeven,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SummaryMetric {
    pub label: &'static str,
    pub value: String,
    pub kind: MetricKind,
}

/// The headline metrics, in display order.
pub(crate) fn summary_metrics(report: &RoiReport) -> Vec<SummaryMetric> {
    let currency = CurrencyFormat::new(&report.currency_symbol);
    let r = &report.result;
    let metric = |label: &'static str, value: String, kind: MetricKind| SummaryMetric {
        label,
        value,
        kind,
    };
    vec![
        metric("Total cases", r.total_cases.to_string(), MetricKind::Plain),
        metric("Total treatments", r.total_txs.to_string(), MetricKind::Plain),
        metric("Total product cost", currency.whole(r.product_cost), MetricKind::Plain),
        metric("Total revenue", currency.whole(r.total_revenue), MetricKind::Plain),
        metric("Total profit", currency.whole(r.total_profit), MetricKind::Outcome),
        metric("ROI", percent(r.roi_pct), MetricKind::Outcome),
        metric("Profit per treatment", currency.tenths(r.profit_per_tx), MetricKind::Plain),
        metric("Margin", percent(r.margin_pct), MetricKind::Outcome),
        metric(
            "Break-even treatments",
            format_breakeven(r.breakeven_txs),
            MetricKind::Breakeven,
        ),
    ]
}

/// One line describing the order a comparison was priced under.
pub(crate) fn order_line(report: &RoiReport) -> String {
    let currency = CurrencyFormat::new(&report.currency_symbol);
    let order = &report.scenario;
    format!(
        "Order: {} cases at {} per treatment, {} other cost per treatment, {} shipping ({})",
        order.num_cases,
        currency.tenths(order.price_per_tx),
        currency.tenths(order.extra_cost_per_tx),
        report.shipping_name,
        currency.whole(order.shipping_cost)
    )
}

pub(crate) fn comparison_cells(row: &ComparisonRow, currency: &CurrencyFormat) -> [String; 6] {
    [
        row.tier_name.clone(),
        currency.tenths(row.cost_per_tx_product),
        currency.whole(row.total_profit),
        currency.tenths(row.profit_per_tx),
        percent(row.margin_pct),
        percent(row.roi_pct),
    ]
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn extension_selects_format_when_not_explicit() {
        assert_eq!(
            resolve_format(None, Some(Path::new("out/report.md"))),
            OutputFormat::Markdown
        );
        assert_eq!(
            resolve_format(None, Some(Path::new("report.json"))),
            OutputFormat::Json
        );
        assert_eq!(resolve_format(None, None), OutputFormat::Terminal);
        assert_eq!(
            resolve_format(Some(OutputFormat::Json), Some(Path::new("report.md"))),
            OutputFormat::Json
        );
    }

    #[test]
    fn summary_reports_unreachable_breakeven() {
        let metrics = summary_metrics(&fixtures::report(70.0));
        let breakeven = metrics
            .iter()
            .find(|metric| metric.kind == MetricKind::Breakeven)
            .map(|metric| metric.value.as_str());
        assert_eq!(breakeven, Some(BREAKEVEN_UNREACHABLE));
    }

    #[test]
    fn summary_rounds_breakeven_to_whole_treatments() {
        let metrics = summary_metrics(&fixtures::report(200.0));
        let value_of = |label: &str| {
            metrics
                .iter()
                .find(|metric| metric.label == label)
                .map(|metric| metric.value.clone())
        };
        assert_eq!(value_of("Break-even treatments").as_deref(), Some("8"));
        assert_eq!(value_of("ROI").as_deref(), Some("236.4%"));
        assert_eq!(value_of("Total profit").as_deref(), Some("$2,600"));
    }

    #[test]
    fn outcome_metrics_are_tagged_by_kind() {
        let outcomes: Vec<&str> = summary_metrics(&fixtures::report(200.0))
            .into_iter()
            .filter(|metric| metric.kind == MetricKind::Outcome)
            .map(|metric| metric.label)
            .collect();
        assert_eq!(outcomes, vec!["Total profit", "ROI", "Margin"]);
    }

    #[test]
    fn order_line_describes_compared_scenario() {
        assert_eq!(
            order_line(&fixtures::report(200.0)),
            "Order: 2 cases at $200.0 per treatment, $20.0 other cost per treatment, Ground shipping ($100)"
        );
    }

    #[test]
    fn output_report_writes_markdown_file_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("exports").join("roi.md");

        output_report(
            &fixtures::report(200.0),
            ReportView::Full,
            None,
            Some(path.clone()),
            FormattingConfig::default(),
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Standard Tier ROI Report"));
    }
}
