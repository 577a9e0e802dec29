//! Record-level checks, operating on one row at a time.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use mdq_model::fields::{
    is_citation_field, is_country_field, is_doi_like, is_region_field, is_title_field,
};
use mdq_model::{Finding, Record, RegionResolver, Report, split_values};

static CITATION_DOI_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"doi:\s").expect("citation doi pattern"));

/// Warn when a citation mentions a DOI but the item has no DOI field.
///
/// Rows that already carry a non-missing DOI field are skipped, as is the
/// whole check when the user excluded any DOI-like field.
pub fn citation_doi(record: &Record<'_>, exclude: &BTreeSet<String>, report: &mut Report) {
    if exclude.iter().any(|field| is_doi_like(field)) {
        return;
    }
    let mut citation = None;
    for (name, cell) in record.fields() {
        let Some(value) = cell.as_str() else {
            continue;
        };
        if is_doi_like(name) {
            return;
        }
        if is_citation_field(name) && !exclude.contains(name) {
            citation = Some(value);
        }
    }
    let Some(citation) = citation else {
        return;
    };
    if CITATION_DOI_MARKER.is_match(citation) || citation.contains("doi.org") {
        report.add(
            Finding::warning(
                "doi-in-citation",
                "DOI in citation, but missing a DOI field",
            )
            .with_value(citation),
        );
    }
}

/// Warn when an item's title is not present verbatim in its citation.
///
/// Exact substring match only: a title differing from the citation in
/// whitespace, punctuation, or accents is reported even though it may be
/// the same work. That is a documented limitation, not fuzziness to add.
pub fn title_in_citation(record: &Record<'_>, exclude: &BTreeSet<String>, report: &mut Report) {
    let mut title = None;
    let mut citation = None;
    for (name, cell) in record.fields() {
        let Some(value) = cell.as_str() else {
            continue;
        };
        if is_title_field(name) && !exclude.contains(name) {
            title = Some(value);
        }
        if is_citation_field(name) && !exclude.contains(name) {
            citation = Some(value);
        }
    }
    let Some(citation) = citation else {
        return;
    };
    let title = title.unwrap_or("");
    if !citation.contains(title) {
        report.add(
            Finding::warning("title-not-in-citation", "title is not present in citation")
                .with_value(title),
        );
    }
}

/// Warn when a row's countries imply regions that are not present.
///
/// The report-only counterpart of the region fix, used when unsafe fixes are
/// disabled. Unlike the fix, every country with an absent region is reported
/// individually, even when two countries share the same region.
pub fn countries_match_regions(
    record: &Record<'_>,
    resolver: &dyn RegionResolver,
    exclude: &BTreeSet<String>,
    report: &mut Report,
) {
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

    let involved = [country_column, region_column, title_column];
    if involved
        .iter()
        .flatten()
        .any(|name| exclude.contains(*name))
    {
        return;
    }

    let (Some(country_column), Some(region_column)) = (country_column, region_column) else {
        return;
    };
    let Some(countries) = record
        .get(country_column)
        .and_then(|cell| cell.as_str())
        .map(split_values)
    else {
        return;
    };
    let regions = record
        .get(region_column)
        .and_then(|cell| cell.as_str())
        .map(split_values)
        .unwrap_or_default();

    let title = title_column
        .and_then(|name| record.get(name))
        .and_then(|cell| cell.as_str())
        .unwrap_or("<title field not present>");

    for country in countries {
        let Some(region) = resolver.region_of(country) else {
            debug!(country, "country not resolvable to a region");
            continue;
        };
        if !regions.contains(&region.as_str()) {
            report.add(
                Finding::warning(
                    "missing-region",
                    format!("missing region ({country} \u{2192} {region})"),
                )
                .with_field(region_column)
                .with_value(title),
            );
        }
    }
}
