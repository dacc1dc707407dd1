use super::ReportView;
use crate::catalog::{GlobalSettings, RuntimeCatalog};
use crate::core::{ShippingOption, Tier};
use crate::report::RoiReport;
use anyhow::Result;
use serde_json::json;

pub fn render_report(report: &RoiReport, view: ReportView) -> Result<String> {
    let json = match view {
        ReportView::Full => serde_json::to_string_pretty(report)?,
        ReportView::Comparison => serde_json::to_string_pretty(&json!({
            "currency_symbol": report.currency_symbol,
            "shipping_name": report.shipping_name,
            "scenario": report.scenario,
            "comparison": report.comparison,
        }))?,
    };
    Ok(json)
}

pub fn render_catalog(catalog: &RuntimeCatalog, settings: &GlobalSettings) -> Result<String> {
    let tiers: Vec<&Tier> = catalog.tiers.iter().collect();
    let shipping: Vec<&ShippingOption> = catalog.shipping.iter().collect();
    Ok(serde_json::to_string_pretty(&json!({
        "currency_symbol": settings.currency_symbol,
        "tiers": tiers,
        "shipping": shipping,
    }))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::fixtures;
    use serde_json::Value;

    #[test]
    fn full_report_keeps_raw_numbers() {
        let json = render_report(&fixtures::report(200.0), ReportView::Full).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["result"]["total_profit"], 2600.0);
        assert_eq!(value["result"]["total_txs"], 20);
        assert_eq!(value["tier"]["name"], "Standard");
    }

    #[test]
    fn unreachable_breakeven_is_null() {
        let json = render_report(&fixtures::report(70.0), ReportView::Full).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert!(value["result"]["breakeven_txs"].is_null());
    }

    #[test]
    fn comparison_view_lists_rows_in_catalog_order() {
        let report = fixtures::report(200.0).with_comparison(&fixtures::tiers());
        let json = render_report(&report, ReportView::Comparison).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        let names: Vec<&str> = value["comparison"]["rows"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|row| row["tier_name"].as_str())
            .collect();
        assert_eq!(names, vec!["Standard", "Elite"]);
        assert_eq!(value["comparison"]["best_tier"], "Elite");
        assert!(value.get("result").is_none());
    }
}
