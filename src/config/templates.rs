//! Starter configuration written by `roicalc init`.

pub const TIERS_CSV: &str = "\
tier_name,description,case_price,cost_per_tx,savings_vs_standard_pct,tx_per_case,default_clinic_price_per_tx,default_extra_cost_per_tx,default_min_cases,default_max_cases
Standard,List pricing for single-case orders,500,50,0,10,200,20,1,20
Preferred,Reduced per-treatment cost for regular accounts,450,45,10,10,200,20,2,50
Elite,Volume pricing for high-throughput clinics,400,40,20,10,200,20,5,
";

pub const SHIPPING_CSV: &str = "\
shipping_name,shipping_cost
Standard ground,50
Two-day,85
Overnight,120
Local pickup,0
";

pub const GLOBAL_SETTINGS_CSV: &str = "\
key,value
currency_symbol,$
default_min_cases_global,1
default_max_cases_global,500
";

pub const OVERRIDES_TOML: &str = r#"# Session overrides for roicalc
#
# Pass with `--overrides overrides.toml`. Every field is optional; omitted
# values keep the catalog value. Tier and shipping names must match the
# CSV sheets exactly.

# [tiers.Standard]
# case_price = 450.0
# cost_per_tx = 45.0
# tx_per_case = 10
# default_clinic_price_per_tx = 250.0
# default_extra_cost_per_tx = 30.0

# [shipping]
# "Overnight" = 100.0
"#;

/// File name and content for every starter file.
pub fn starter_files() -> [(&'static str, &'static str); 4] {
    [
        (super::TIERS_FILE, TIERS_CSV),
        (super::SHIPPING_FILE, SHIPPING_CSV),
        (super::SETTINGS_FILE, GLOBAL_SETTINGS_CSV),
        ("overrides.toml", OVERRIDES_TOML),
    ]
}
