use super::{
    comparison_cells, format_amount, order_line, summary_metrics, ReportView, COMPARISON_HEADERS,
};
use crate::catalog::{GlobalSettings, RuntimeCatalog};
use crate::formatting::CurrencyFormat;
use crate::report::{RoiReport, TierComparison};
use std::fmt::Write;

pub fn render_report(report: &RoiReport, view: ReportView) -> String {
    let mut out = String::new();

    if view == ReportView::Full {
        write_overview(&mut out, report);
        write_table(
            &mut out,
            Some("ROI Summary"),
            &["Metric", "Value"],
            summary_metrics(report)
                .into_iter()
                .map(|metric| vec![metric.label.to_string(), metric.value]),
        );

        let currency = CurrencyFormat::new(&report.currency_symbol);
        write_table(
            &mut out,
            Some("Detailed Breakdown"),
            &["Metric", "Value"],
            report
                .breakdown()
                .into_iter()
                .map(|line| vec![line.label.to_string(), format_amount(&currency, line.amount)]),
        );
    }

    if let Some(comparison) = &report.comparison {
        write_comparison(&mut out, report, comparison);
    }

    out.trim_end().to_string()
}

pub fn render_catalog(catalog: &RuntimeCatalog, settings: &GlobalSettings) -> String {
    let currency = CurrencyFormat::new(&settings.currency_symbol);
    let mut out = String::from("# Pricing Catalog\n\n");

    write_table(
        &mut out,
        Some("Tiers"),
        &[
            "Tier",
            "Description",
            "Case price",
            "Cost per treatment",
            "Treatments per case",
            "Cases",
        ],
        catalog.tiers.iter().map(|tier| {
            let bounds = settings.case_bounds_for(tier);
            vec![
                tier.name.clone(),
                tier.description.clone(),
                currency.tenths(tier.case_price),
                currency.tenths(tier.cost_per_tx),
                tier.tx_per_case.to_string(),
                format!("{}-{}", bounds.min, bounds.max),
            ]
        }),
    );
    write_table(
        &mut out,
        Some("Shipping"),
        &["Option", "Cost"],
        catalog
            .shipping
            .iter()
            .map(|option| vec![option.name.clone(), currency.whole(option.cost)]),
    );

    out.trim_end().to_string()
}

fn write_overview(out: &mut String, report: &RoiReport) {
    let currency = CurrencyFormat::new(&report.currency_symbol);
    let tier = &report.tier;

    writeln!(out, "# {} Tier ROI Report\n", tier.name).unwrap();
    if !tier.description.is_empty() {
        writeln!(out, "{}\n", escape(&tier.description)).unwrap();
    }
    writeln!(out, "- **Cost per case:** {}", currency.tenths(tier.case_price)).unwrap();
    writeln!(
        out,
        "- **Cost per treatment:** {}",
        currency.tenths(tier.cost_per_tx)
    )
    .unwrap();
    writeln!(out, "- **Treatments per case:** {}", tier.tx_per_case).unwrap();
    if let Some(savings) = tier.savings_vs_standard_pct {
        writeln!(out, "- **Savings vs Standard:** {savings}%").unwrap();
    }
    writeln!(out, "- **Shipping:** {}", escape(&report.shipping_name)).unwrap();
    writeln!(out).unwrap();
}

fn write_comparison(out: &mut String, report: &RoiReport, comparison: &TierComparison) {
    let currency = CurrencyFormat::new(&report.currency_symbol);
    writeln!(out, "## Tier Comparison\n").unwrap();
    writeln!(out, "{}\n", escape(&order_line(report))).unwrap();
    write_table(
        out,
        None,
        &COMPARISON_HEADERS,
        comparison
            .rows
            .iter()
            .map(|row| comparison_cells(row, &currency).to_vec()),
    );

    if let Some(best) = &comparison.best_tier {
        writeln!(out, "**Highest ROI:** {}\n", escape(best)).unwrap();
    }
}

fn write_table<I>(out: &mut String, title: Option<&str>, headers: &[&str], rows: I)
where
    I: IntoIterator<Item = Vec<String>>,
{
    if let Some(title) = title {
        writeln!(out, "## {title}\n").unwrap();
    }
    writeln!(out, "| {} |", headers.join(" | ")).unwrap();
    writeln!(
        out,
        "|{}|",
        headers.iter().map(|_| "---").collect::<Vec<_>>().join("|")
    )
    .unwrap();
    for row in rows {
        let cells: Vec<String> = row.iter().map(|cell| escape(cell)).collect();
        writeln!(out, "| {} |", cells.join(" | ")).unwrap();
    }
    writeln!(out).unwrap();
}

fn escape(text: &str) -> String {
    text.replace('|', "\\|")
}
