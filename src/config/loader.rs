use std::fs;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::records::{
    SettingRecord, ShippingRecord, TierRecord, REQUIRED_SETTINGS_COLUMNS,
    REQUIRED_SHIPPING_COLUMNS, REQUIRED_TIER_COLUMNS,
};
use crate::catalog::{ensure_amount, validate_tier, Catalogs, GlobalSettings, Overrides, ShippingCatalog, TierCatalog};
use crate::errors::ConfigError;

pub const DEFAULT_CONFIG_DIR: &str = "data";
pub const TIERS_FILE: &str = "tiers.csv";
pub const SHIPPING_FILE: &str = "shipping.csv";
pub const SETTINGS_FILE: &str = "global_settings.csv";

/// Load all three sheets from `dir` into the base catalogs.
pub fn load_catalogs(dir: &Path) -> Result<Catalogs, ConfigError> {
    let tiers = read_tiers(open(&dir.join(TIERS_FILE))?, &dir.join(TIERS_FILE))?;
    let shipping = read_shipping(open(&dir.join(SHIPPING_FILE))?, &dir.join(SHIPPING_FILE))?;
    let settings = read_settings(open(&dir.join(SETTINGS_FILE))?, &dir.join(SETTINGS_FILE))?;

    info!(
        dir = %dir.display(),
        tiers = tiers.len(),
        shipping = shipping.len(),
        "loaded catalogs"
    );

    Ok(Catalogs {
        tiers,
        shipping,
        settings,
    })
}

/// Parse `tiers.csv` content. `source` is only used in error messages.
pub fn read_tiers<R: Read>(reader: R, source: &Path) -> Result<TierCatalog, ConfigError> {
    let records: Vec<TierRecord> = read_sheet(reader, source, "tiers", &REQUIRED_TIER_COLUMNS)?;

    let mut catalog = TierCatalog::new();
    for record in records {
        let tier = record.into_tier()?;
        validate_tier(&tier)?;
        if let Some(previous) = catalog.insert(tier) {
            debug!(tier = %previous.name, "duplicate tier name, keeping last definition");
        }
    }

    if catalog.is_empty() {
        return Err(ConfigError::EmptyCatalog { sheet: "tiers" });
    }
    Ok(catalog)
}

/// Parse `shipping.csv` content.
pub fn read_shipping<R: Read>(reader: R, source: &Path) -> Result<ShippingCatalog, ConfigError> {
    let records: Vec<ShippingRecord> =
        read_sheet(reader, source, "shipping", &REQUIRED_SHIPPING_COLUMNS)?;

    let mut catalog = ShippingCatalog::new();
    for record in records {
        ensure_amount(&format!("shipping.{}", record.shipping_name), record.shipping_cost)?;
        catalog.insert(record.into());
    }

    if catalog.is_empty() {
        return Err(ConfigError::EmptyCatalog { sheet: "shipping" });
    }
    Ok(catalog)
}

/// Parse `global_settings.csv` content.
pub fn read_settings<R: Read>(reader: R, source: &Path) -> Result<GlobalSettings, ConfigError> {
    let records: Vec<SettingRecord> =
        read_sheet(reader, source, "global_settings", &REQUIRED_SETTINGS_COLUMNS)?;
    GlobalSettings::from_pairs(records.into_iter().map(|r| (r.key, r.value)))
}

/// Read a session overrides file.
pub fn load_overrides(path: &Path) -> Result<Overrides, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let overrides = toml::from_str::<Overrides>(&contents).map_err(|e| ConfigError::Overrides {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    debug!(path = %path.display(), "loaded overrides");
    Ok(overrides)
}

fn open(path: &Path) -> Result<fs::File, ConfigError> {
    fs::File::open(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_sheet<R, T>(
    reader: R,
    source: &Path,
    sheet: &'static str,
    required: &[&str],
) -> Result<Vec<T>, ConfigError>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| invalid_record(source, &e, 1))?
        .clone();
    let missing: Vec<String> = required
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ConfigError::MissingColumns {
            sheet,
            columns: missing,
        });
    }

    csv_reader
        .deserialize::<T>()
        .enumerate()
        .map(|(index, result)| result.map_err(|e| invalid_record(source, &e, index as u64 + 2)))
        .collect()
}

fn invalid_record(source: &Path, error: &csv::Error, fallback_line: u64) -> ConfigError {
    let line = error
        .position()
        .map(csv::Position::line)
        .unwrap_or(fallback_line);
    ConfigError::InvalidRecord {
        path: source.to_path_buf(),
        line,
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    const TIERS: &str = indoc! {"
        tier_name,description,case_price,cost_per_tx,savings_vs_standard_pct,tx_per_case,default_clinic_price_per_tx,default_extra_cost_per_tx,default_min_cases,default_max_cases
        Standard,Base pricing,500,50,0,10,200,20,1,100
        Elite, Volume pricing ,400,40,20,10.0,200,20,,
    "};

    fn source() -> PathBuf {
        PathBuf::from("tiers.csv")
    }

    #[test]
    fn reads_tiers_in_file_order() {
        let catalog = read_tiers(TIERS.as_bytes(), &source()).unwrap();

        assert_eq!(catalog.names(), vec!["Standard", "Elite"]);
        let elite = catalog.get("Elite").unwrap();
        assert_eq!(elite.description, "Volume pricing");
        assert_eq!(elite.tx_per_case, 10);
        assert_eq!(elite.default_min_cases, None);
        assert_eq!(elite.default_max_cases, None);
    }

    #[test]
    fn missing_tier_columns_are_reported_together() {
        let csv = indoc! {"
            tier_name,description,case_price
            Standard,Base,500
        "};
        let err = read_tiers(csv.as_bytes(), &source()).unwrap_err();

        match err {
            ConfigError::MissingColumns { sheet, columns } => {
                assert_eq!(sheet, "tiers");
                assert_eq!(columns.len(), 7);
                assert_eq!(columns[0], "cost_per_tx");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unparsable_number_reports_line() {
        let csv = indoc! {"
            shipping_name,shipping_cost
            Ground,50
            Air,fast
        "};
        let err = read_shipping(csv.as_bytes(), Path::new("shipping.csv")).unwrap_err();
        match err {
            ConfigError::InvalidRecord { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_tier_keeps_last_values() {
        let csv = format!("{TIERS}Standard,Updated,450,45,10,10,200,20,1,100\n");
        let catalog = read_tiers(csv.as_bytes(), &source()).unwrap();

        assert_eq!(catalog.names(), vec!["Standard", "Elite"]);
        assert_eq!(catalog.get("Standard").map(|t| t.case_price), Some(450.0));
    }

    #[test]
    fn empty_shipping_sheet_is_an_error() {
        let err = read_shipping("shipping_name,shipping_cost\n".as_bytes(), Path::new("s.csv"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyCatalog { sheet: "shipping" }));
    }

    #[test]
    fn zero_yield_tier_is_rejected() {
        let csv = indoc! {"
            tier_name,description,case_price,cost_per_tx,savings_vs_standard_pct,tx_per_case,default_clinic_price_per_tx,default_extra_cost_per_tx,default_min_cases,default_max_cases
            Broken,,500,50,0,0,200,20,,
        "};
        assert!(read_tiers(csv.as_bytes(), &source()).is_err());
    }

    #[test]
    fn settings_sheet_feeds_global_settings() {
        let csv = indoc! {"
            key,value
            currency_symbol,£
            default_max_cases_global,250
        "};
        let settings = read_settings(csv.as_bytes(), Path::new("g.csv")).unwrap();
        assert_eq!(settings.currency_symbol, "£");
        assert_eq!(settings.default_max_cases, 250);
        assert_eq!(settings.default_min_cases, 1);
    }
}
