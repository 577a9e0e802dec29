//! Record-level fixes.

use std::collections::BTreeSet;

use tracing::debug;

use mdq_model::fields::{is_country_field, is_region_field, is_title_field};
use mdq_model::{Cell, Finding, Record, RegionResolver, Report, join_values, split_values};

/// A pending replacement for one cell of the row under inspection.
///
/// The fix cannot mutate the table through the read-only [`Record`] view, so
/// it returns the replacement for the caller to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionUpdate {
    pub field: String,
    pub value: Cell,
}

/// Fill in regions missing for the row's countries.
///
/// An item with country coverage "Kenya" should also carry the region
/// "Eastern Africa" of the UN M.49 classification. Regions already present
/// are kept; resolved-but-absent regions are deduplicated, reported, and
/// appended to the region cell's multi-value list. Countries the resolver
/// does not know are skipped silently.
pub fn countries_match_regions(
    record: &Record<'_>,
    resolver: &dyn RegionResolver,
    exclude: &BTreeSet<String>,
    report: &mut Report,
) -> Option<RegionUpdate> {
    let mut country_column = None;
    let mut region_column = None;
    let mut title_column = None;
    for name in record.field_names() {
        if is_country_field(name) {
            country_column = Some(name);
        }
        if is_region_field(name) {
            region_column = Some(name);
        }
        if is_title_field(name) {
            title_column = Some(name);
        }
    }

    // An exclusion of any participating field opts the whole row out.
    let involved = [country_column, region_column, title_column];
    if involved
        .iter()
        .flatten()
        .any(|name| exclude.contains(*name))
    {
        return None;
    }

    let country_column = country_column?;
    let region_column = region_column?;

    let countries = match record.get(country_column)?.as_str() {
        Some(raw) => split_values(raw),
        None => return None,
    };
    let region_cell = record.get(region_column)?;
    let regions = match region_cell.as_str() {
        Some(raw) => split_values(raw),
        None => Vec::new(),
    };

    let title = title_column
        .and_then(|name| record.get(name))
        .and_then(|cell| cell.as_str())
        .unwrap_or("<title field not present>");

    let mut missing_regions: Vec<String> = Vec::new();
    for country in &countries {
        let Some(region) = resolver.region_of(country) else {
            debug!(country, "country not resolvable to a region");
            continue;
        };
        if !regions.contains(&region.as_str()) && !missing_regions.contains(&region) {
            report.add(
                Finding::info("added-region", format!("adding missing region ({region})"))
                    .with_field(region_column)
                    .with_value(title),
            );
            missing_regions.push(region);
        }
    }

    if missing_regions.is_empty() {
        return None;
    }

    // Append to the existing value, distinguishing a present-but-empty
    // region cell from a missing one only by the separator placement.
    let joined = join_values(&missing_regions);
    let value = match region_cell.as_str() {
        Some(existing) if !existing.is_empty() => format!("{existing}||{joined}"),
        _ => joined,
    };
    Some(RegionUpdate {
        field: region_column.to_string(),
        value: Cell::Present(value),
    })
}
