//! Tier comparison: one order priced against every tier in a catalog.

use super::{compute_roi_for, ComparisonRow};
use crate::catalog::TierCatalog;
use crate::core::OrderScenario;

/// Price `scenario` against each tier in catalog order.
///
/// Rows are never re-sorted, so position `i` always describes the `i`th
/// catalog entry. The iterator borrows the catalog; call again to restart.
pub fn compare_tiers<'a>(
    catalog: &'a TierCatalog,
    scenario: &OrderScenario,
) -> impl Iterator<Item = ComparisonRow> + 'a {
    let scenario = *scenario;
    catalog
        .iter()
        .map(move |tier| ComparisonRow::from_result(&tier.name, &compute_roi_for(tier, &scenario)))
}

/// Row with the highest ROI. Ties go to the earliest row.
pub fn best_tier<'a, I>(rows: I) -> Option<&'a ComparisonRow>
where
    I: IntoIterator<Item = &'a ComparisonRow>,
{
    rows.into_iter().fold(None, |best, row| match best {
        Some(current) if row.roi_pct <= current.roi_pct => Some(current),
        _ => Some(row),
    })
}
