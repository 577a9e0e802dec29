//! The rule-evaluation pipeline, two linear phases with no branching back:
//!
//! 1. **Column phase**: for each column in original order, apply the rules
//!    the field selector chose for it, in the selector's fixed order. Fixes
//!    replace cell values immediately; subsequent rules see the fixed value.
//! 2. **Row phase**: for each row, run the record rules in fixed order
//!    (DOI-in-citation, title-in-citation, country/region, then optionally
//!    the language-mismatch check).
//!
//! Duplicate-item detection runs between the phases, over the whole table.
//! There is no rollback; the cleaned table is serialized only after both
//! phases complete.

use std::time::Instant;

use tracing::{debug, info, info_span};

use mdq_model::fields::{is_country_field, is_region_field};
use mdq_model::{
    Cell, Finding, LanguageDetector, RegionResolver, Report, RunOptions, Table, VocabularyValidator,
};
use mdq_transform::field as fix;
use mdq_transform::record::countries_match_regions as fix_countries_match_regions;
use mdq_validate::record::countries_match_regions as check_countries_match_regions;
use mdq_validate::vocabulary::vocabulary;
use mdq_validate::{
    ColumnRule, citation_doi, correct_language, date, duplicate_items, field as check, identifiers,
    plan_column, title_in_citation,
};

/// The external capabilities available to this run. Any of them may be
/// absent; the affected checks degrade to an "unavailable" finding instead
/// of failing the run.
#[derive(Default, Clone, Copy)]
pub struct Capabilities<'a> {
    pub vocabulary: Option<&'a dyn VocabularyValidator>,
    pub regions: Option<&'a dyn RegionResolver>,
    pub detector: Option<&'a dyn LanguageDetector>,
}

/// Run the full pipeline over an in-memory table, mutating it in place.
pub fn run_pipeline(
    table: &mut Table,
    options: &RunOptions,
    capabilities: &Capabilities<'_>,
) -> Report {
    let mut report = Report::new();
    let start = Instant::now();

    {
        let span = info_span!("column_phase");
        let _guard = span.enter();
        let phase_start = Instant::now();
        for index in 0..table.width() {
            process_column(table, index, options, capabilities, &mut report);
        }
        debug!(
            columns = table.width(),
            duration_ms = phase_start.elapsed().as_millis() as u64,
            "column phase complete"
        );
    }

    duplicate_items(table, &mut report);

    {
        let span = info_span!("row_phase");
        let _guard = span.enter();
        let phase_start = Instant::now();
        region_capability_notice(table, capabilities, &mut report);
        for row in 0..table.height() {
            process_row(table, row, options, capabilities, &mut report);
        }
        debug!(
            rows = table.height(),
            duration_ms = phase_start.elapsed().as_millis() as u64,
            "row phase complete"
        );
    }

    info!(
        rows = table.height(),
        columns = table.width(),
        errors = report.error_count(),
        warnings = report.warning_count(),
        fixes = report.info_count(),
        duration_ms = start.elapsed().as_millis() as u64,
        "pipeline complete"
    );
    report
}

fn process_column(
    table: &mut Table,
    index: usize,
    options: &RunOptions,
    capabilities: &Capabilities<'_>,
    report: &mut Report,
) {
    let name = table.column(index).name.clone();
    let plan = plan_column(&name, options);
    if plan.skip {
        report.add(Finding::info("skipped-field", "skipping").with_field(&name));
        return;
    }
    debug!(column = %name, rules = plan.rules.len(), "processing column");
    for rule in &plan.rules {
        match rule {
            ColumnRule::Whitespace | ColumnRule::WhitespaceAgain => {
                apply_fix(table, index, &name, report, fix::whitespace);
            }
            ColumnRule::Newlines => apply_fix(table, index, &name, report, fix::newlines),
            ColumnRule::CommaSpace => apply_fix(table, index, &name, report, fix::comma_space),
            ColumnRule::NormalizeUnicode => {
                apply_fix(table, index, &name, report, fix::normalize_unicode);
            }
            ColumnRule::SuspiciousCharacters => {
                apply_check(table, index, &name, report, check::suspicious_characters);
            }
            ColumnRule::MojibakeFix => apply_fix(table, index, &name, report, fix::mojibake),
            ColumnRule::MojibakeCheck => {
                apply_check(table, index, &name, report, check::mojibake);
            }
            ColumnRule::UnnecessaryUnicode => {
                apply_fix(table, index, &name, report, fix::unnecessary_unicode);
            }
            ColumnRule::NormalizeDois => {
                apply_fix(table, index, &name, report, fix::normalize_dois);
            }
            ColumnRule::Separators => apply_fix(table, index, &name, report, fix::separators),
            ColumnRule::Duplicates => apply_fix(table, index, &name, report, fix::duplicates),
            ColumnRule::Vocabulary => match capabilities.vocabulary {
                Some(validator) => {
                    let drop = options.drop_invalid_vocabulary;
                    let column = table.column_mut(index);
                    for cell in &mut column.cells {
                        *cell = vocabulary(cell, &name, validator, drop, report);
                    }
                }
                None => {
                    report.add(
                        Finding::warning(
                            "vocabulary-unavailable",
                            "vocabulary validation unavailable",
                        )
                        .with_field(&name),
                    );
                }
            },
            ColumnRule::Language => apply_check(table, index, &name, report, check::language),
            ColumnRule::Issn => apply_check(table, index, &name, report, identifiers::issn),
            ColumnRule::Isbn => apply_check(table, index, &name, report, identifiers::isbn),
            ColumnRule::Date => apply_check(table, index, &name, report, date),
            ColumnRule::FilenameExtension => {
                apply_check(table, index, &name, report, check::filename_extension);
            }
            ColumnRule::SpdxLicense => {
                apply_check(table, index, &name, report, check::spdx_license_identifier);
            }
        }
    }
}

fn process_row(
    table: &mut Table,
    row: usize,
    options: &RunOptions,
    capabilities: &Capabilities<'_>,
    report: &mut Report,
) {
    let exclude = &options.exclude_fields;
    {
        let record = table.record(row);
        citation_doi(&record, exclude, report);
        title_in_citation(&record, exclude, report);
    }
    if let Some(resolver) = capabilities.regions {
        if options.unsafe_fixes {
            let update = {
                let record = table.record(row);
                fix_countries_match_regions(&record, resolver, exclude, report)
            };
            if let Some(update) = update {
                table.set(&update.field, row, update.value);
            }
        } else {
            let record = table.record(row);
            check_countries_match_regions(&record, resolver, exclude, report);
        }
    }
    if options.experimental_checks
        && let Some(detector) = capabilities.detector
    {
        let record = table.record(row);
        correct_language(&record, detector, exclude, report);
    }
}

/// Report once, not per row, when the region capability is missing but the
/// table actually has country/region columns to check.
fn region_capability_notice(
    table: &Table,
    capabilities: &Capabilities<'_>,
    report: &mut Report,
) {
    if capabilities.regions.is_some() {
        return;
    }
    let has_country = table
        .columns()
        .iter()
        .any(|column| is_country_field(&column.name));
    let has_region = table
        .columns()
        .iter()
        .any(|column| is_region_field(&column.name));
    if has_country && has_region {
        report.add(Finding::warning(
            "region-unavailable",
            "country/region validation unavailable",
        ));
    }
}

fn apply_fix(
    table: &mut Table,
    index: usize,
    name: &str,
    report: &mut Report,
    rule: fn(&Cell, &str, &mut Report) -> Cell,
) {
    let column = table.column_mut(index);
    for cell in &mut column.cells {
        *cell = rule(cell, name, report);
    }
}

fn apply_check(
    table: &Table,
    index: usize,
    name: &str,
    report: &mut Report,
    rule: fn(&Cell, &str, &mut Report),
) {
    for cell in &table.column(index).cells {
        rule(cell, name, report);
    }
}
