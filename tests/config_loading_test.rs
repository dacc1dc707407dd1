use indoc::indoc;
use pretty_assertions::assert_eq;
use roicalc::{compare_tiers, load_catalogs, resolve, ConfigError, ScenarioInput};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const TIERS: &str = indoc! {"
    tier_name,description,case_price,cost_per_tx,savings_vs_standard_pct,tx_per_case,default_clinic_price_per_tx,default_extra_cost_per_tx,default_min_cases,default_max_cases
    Standard,Base,500,50,0,10,200,20,,
    Elite,Volume,400,40,20,10,200,20,3,
    Standard,Revised,480,48,0,10,200,20,,
"};

const SHIPPING: &str = indoc! {"
    shipping_name,shipping_cost
    Ground,100
    Overnight,150
"};

const SETTINGS: &str = indoc! {"
    key,value
    currency_symbol,€
    default_min_cases_global,2
    default_max_cases_global,40
    theme,dark
"};

fn write_config(dir: &Path, tiers: &str) {
    fs::write(dir.join("tiers.csv"), tiers).unwrap();
    fs::write(dir.join("shipping.csv"), SHIPPING).unwrap();
    fs::write(dir.join("global_settings.csv"), SETTINGS).unwrap();
}

#[test]
fn duplicate_tier_keeps_first_position_with_last_values() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), TIERS);

    let catalogs = load_catalogs(temp_dir.path()).unwrap();

    assert_eq!(catalogs.tiers.names(), vec!["Standard", "Elite"]);
    let standard = catalogs.tiers.get("Standard").unwrap();
    assert_eq!(standard.description, "Revised");
    assert_eq!(standard.case_price, 480.0);
    assert_eq!(catalogs.settings.currency_symbol, "€");
    assert_eq!(catalogs.settings.get("theme"), Some("dark"));
}

#[test]
fn case_bounds_fall_back_to_global_settings() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), TIERS);
    let catalogs = load_catalogs(temp_dir.path()).unwrap();

    let standard = catalogs.tiers.get("Standard").unwrap();
    let bounds = catalogs.settings.case_bounds_for(standard);
    assert_eq!((bounds.min, bounds.max), (2, 40));

    let elite = catalogs.tiers.get("Elite").unwrap();
    let bounds = catalogs.settings.case_bounds_for(elite);
    assert_eq!((bounds.min, bounds.max), (3, 40));
}

#[test]
fn resolved_scenario_feeds_comparator() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), TIERS);
    let catalogs = load_catalogs(temp_dir.path()).unwrap();
    let session = catalogs.session();

    let resolved = resolve(&ScenarioInput::default(), &session, &catalogs.settings).unwrap();
    assert_eq!(resolved.order.num_cases, 2);
    assert_eq!(resolved.order.shipping_cost, 100.0);

    let rows: Vec<_> = compare_tiers(&session.tiers, &resolved.order).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].tier_name, "Standard");
    assert_eq!(rows[1].tier_name, "Elite");
}

#[test]
fn missing_columns_are_named() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        temp_dir.path(),
        indoc! {"
            tier_name,description,case_price,cost_per_tx,savings_vs_standard_pct,default_clinic_price_per_tx,default_extra_cost_per_tx,default_min_cases
            Standard,Base,500,50,0,200,20,1
        "},
    );

    match load_catalogs(temp_dir.path()) {
        Err(ConfigError::MissingColumns { columns, .. }) => {
            assert_eq!(columns, vec!["tx_per_case", "default_max_cases"]);
        }
        other => panic!("expected missing columns, got {other:?}"),
    }
}

#[test]
fn missing_sheet_is_an_io_error() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), TIERS);
    fs::remove_file(temp_dir.path().join("shipping.csv")).unwrap();

    let err = load_catalogs(temp_dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("shipping.csv"));
}
