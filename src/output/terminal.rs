use super::{
    comparison_cells, format_amount, order_line, summary_metrics, MetricKind, ReportView,
    COMPARISON_HEADERS,
};
use crate::catalog::{GlobalSettings, RuntimeCatalog};
use crate::formatting::{CurrencyFormat, FormattingConfig, OutputFormatter};
use crate::report::{RoiReport, TierComparison};
use comfy_table::{presets, Cell, CellAlignment, Table};
use std::fmt::Write;

pub fn render_report(report: &RoiReport, view: ReportView, config: FormattingConfig) -> String {
    let formatter = config.formatter();
    let mut out = String::new();

    if view == ReportView::Full {
        write_overview(&mut out, report, formatter.as_ref());
        write_summary(&mut out, report, formatter.as_ref());
        write_breakdown(&mut out, report, formatter.as_ref(), config);
    }

    if let Some(comparison) = &report.comparison {
        write_comparison(&mut out, report, comparison, formatter.as_ref(), config);
    }

    out.trim_end().to_string()
}

pub fn render_catalog(
    catalog: &RuntimeCatalog,
    settings: &GlobalSettings,
    config: FormattingConfig,
) -> String {
    let formatter = config.formatter();
    let currency = CurrencyFormat::new(&settings.currency_symbol);
    let mut out = String::new();

    writeln!(out, "{}", formatter.header("Pricing tiers")).unwrap();
    let mut tiers = new_table(config);
    tiers.set_header(vec![
        "Tier",
        "Case price",
        "Cost per treatment",
        "Treatments per case",
        "Default price",
        "Default other cost",
        "Cases",
    ]);
    for tier in catalog.tiers.iter() {
        let bounds = settings.case_bounds_for(tier);
        tiers.add_row(vec![
            Cell::new(&tier.name),
            right(currency.tenths(tier.case_price)),
            right(currency.tenths(tier.cost_per_tx)),
            right(tier.tx_per_case.to_string()),
            right(currency.tenths(tier.default_clinic_price_per_tx)),
            right(currency.tenths(tier.default_extra_cost_per_tx)),
            right(format!("{}-{}", bounds.min, bounds.max)),
        ]);
    }
    writeln!(out, "{tiers}\n").unwrap();

    writeln!(out, "{}", formatter.header("Shipping options")).unwrap();
    let mut shipping = new_table(config);
    shipping.set_header(vec!["Option", "Cost"]);
    for option in catalog.shipping.iter() {
        shipping.add_row(vec![Cell::new(&option.name), right(currency.whole(option.cost))]);
    }
    write!(out, "{shipping}").unwrap();

    out
}

fn write_overview(out: &mut String, report: &RoiReport, formatter: &dyn OutputFormatter) {
    let currency = CurrencyFormat::new(&report.currency_symbol);
    let tier = &report.tier;

    writeln!(out, "{}", formatter.header(&format!("{} Tier Overview", tier.name))).unwrap();
    if !tier.description.is_empty() {
        writeln!(out, "{}", formatter.dim(&tier.description)).unwrap();
    }

    let mut facts = vec![
        ("Cost per case", currency.tenths(tier.case_price)),
        ("Cost per treatment", currency.tenths(tier.cost_per_tx)),
        ("Treatments per case", tier.tx_per_case.to_string()),
    ];
    if let Some(savings) = tier.savings_vs_standard_pct {
        facts.push(("Savings vs Standard", format!("{savings}%")));
    }
    facts.push(("Shipping", report.shipping_name.clone()));
    facts.push((
        "Allowed cases",
        format!("{}-{}", report.case_bounds.min, report.case_bounds.max),
    ));
    write_key_values(out, &facts, formatter);
    writeln!(out).unwrap();
}

fn write_summary(out: &mut String, report: &RoiReport, formatter: &dyn OutputFormatter) {
    writeln!(out, "{}", formatter.header("ROI summary")).unwrap();
    let loss = report.result.total_profit < 0.0;
    let styled: Vec<(&str, String)> = summary_metrics(report)
        .into_iter()
        .map(|metric| {
            let value = match metric.kind {
                MetricKind::Outcome if loss => formatter.error(&metric.value),
                MetricKind::Outcome => formatter.success(&metric.value),
                MetricKind::Breakeven if report.result.breakeven_txs.is_none() => {
                    formatter.warning(&metric.value)
                }
                MetricKind::Breakeven | MetricKind::Plain => formatter.bold(&metric.value),
            };
            (metric.label, value)
        })
        .collect();
    write_key_values(out, &styled, formatter);
    writeln!(out).unwrap();
}

fn write_breakdown(
    out: &mut String,
    report: &RoiReport,
    formatter: &dyn OutputFormatter,
    config: FormattingConfig,
) {
    let currency = CurrencyFormat::new(&report.currency_symbol);
    writeln!(out, "{}", formatter.header("Detailed breakdown")).unwrap();

    let mut table = new_table(config);
    table.set_header(vec!["Metric", "Value"]);
    for line in report.breakdown() {
        table.add_row(vec![Cell::new(line.label), right(format_amount(&currency, line.amount))]);
    }
    writeln!(out, "{table}\n").unwrap();
}

fn write_comparison(
    out: &mut String,
    report: &RoiReport,
    comparison: &TierComparison,
    formatter: &dyn OutputFormatter,
    config: FormattingConfig,
) {
    let currency = CurrencyFormat::new(&report.currency_symbol);
    writeln!(
        out,
        "{}",
        formatter.header("Tier comparison at the same clinic price")
    )
    .unwrap();
    writeln!(out, "{}", formatter.dim(&order_line(report))).unwrap();

    let mut table = new_table(config);
    table.set_header(COMPARISON_HEADERS.to_vec());
    for row in &comparison.rows {
        let [name, rest @ ..] = comparison_cells(row, &currency);
        let mut cells = vec![Cell::new(name)];
        cells.extend(rest.into_iter().map(right));
        table.add_row(cells);
    }
    writeln!(out, "{table}").unwrap();

    match comparison
        .best_tier
        .as_deref()
        .and_then(|name| comparison.rows.iter().find(|row| row.tier_name == name))
    {
        Some(best) => {
            writeln!(
                out,
                "{} {} has the highest ROI ({:.1}%)",
                formatter.emoji("🏆", "[BEST]"),
                formatter.bold(&best.tier_name),
                best.roi_pct
            )
            .unwrap();
        }
        None => {
            writeln!(out, "{}", formatter.dim("No tiers to compare")).unwrap();
        }
    }
}

fn write_key_values(out: &mut String, pairs: &[(&str, String)], formatter: &dyn OutputFormatter) {
    let width = pairs.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in pairs {
        writeln!(
            out,
            "  {}  {}",
            formatter.dim(&format!("{label:<width$}")),
            value
        )
        .unwrap();
    }
}

fn new_table(config: FormattingConfig) -> Table {
    let mut table = Table::new();
    if config.color.should_use_color() {
        table.load_preset(presets::UTF8_FULL);
    } else {
        table.load_preset(presets::ASCII_FULL);
    }
    table
}

fn right(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::fixtures;
    use crate::output::BREAKEVEN_UNREACHABLE;

    #[test]
    fn full_report_contains_every_section() {
        let report = fixtures::report(200.0).with_comparison(&fixtures::tiers());
        let text = render_report(&report, ReportView::Full, FormattingConfig::plain());

        assert!(text.starts_with("Standard Tier Overview"));
        assert!(text.contains("ROI summary"));
        assert!(text.contains("Detailed breakdown"));
        assert!(text.contains("Total cost (product + shipping)"));
        assert!(text.contains("$1,100"));
        assert!(text.contains("236.4%"));
        assert!(text.contains("[BEST] Elite has the highest ROI"));
    }

    #[test]
    fn comparison_view_skips_summary() {
        let report = fixtures::report(200.0).with_comparison(&fixtures::tiers());
        let text = render_report(&report, ReportView::Comparison, FormattingConfig::plain());

        assert!(text.starts_with("Tier comparison"));
        assert!(!text.contains("ROI summary"));
        assert!(text.contains("Order: 2 cases at $200.0 per treatment"));
        assert!(text.contains("Ground shipping ($100)"));
    }

    #[test]
    fn unreachable_breakeven_is_spelled_out() {
        let text = render_report(&fixtures::report(70.0), ReportView::Full, FormattingConfig::plain());
        assert!(text.contains(BREAKEVEN_UNREACHABLE));
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let report = fixtures::report(200.0).with_comparison(&fixtures::tiers());
        let text = render_report(&report, ReportView::Full, FormattingConfig::plain());
        assert!(!text.contains('\u{1b}'));
    }
}
