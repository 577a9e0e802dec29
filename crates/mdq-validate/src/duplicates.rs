//! Table-wide duplicate-item detection.

use std::collections::BTreeSet;

use tracing::debug;

use mdq_model::fields::{is_issued_date_field, is_main_title_field, is_type_field};
use mdq_model::{Finding, Report, Table};

/// Report rows that repeat another row's (title, type, issued date) triple.
///
/// A cheap cardinality pre-check on titles short-circuits the scan when no
/// title repeats. Otherwise each row gets a composite key of its title,
/// type, and date values concatenated verbatim with no delimiter — an
/// inherited ambiguity: a title ending in a type-like substring can collide
/// or escape collision spuriously. Missing values contribute the empty
/// string. Repeated keys are reported in first-seen order; rows are never
/// reordered.
///
/// When any of the three columns cannot be located the check skips
/// gracefully.
pub fn duplicate_items(table: &Table, report: &mut Report) {
    let title_column = table
        .columns()
        .iter()
        .find(|column| is_main_title_field(&column.name));
    let type_column = table
        .columns()
        .iter()
        .find(|column| is_type_field(&column.name));
    let date_column = table
        .columns()
        .iter()
        .find(|column| is_issued_date_field(&column.name));
    let (Some(title_column), Some(type_column), Some(date_column)) =
        (title_column, type_column, date_column)
    else {
        debug!("title/type/date columns not all present, skipping duplicate check");
        return;
    };

    let total = title_column
        .cells
        .iter()
        .filter(|cell| !cell.is_missing())
        .count();
    let distinct: BTreeSet<&str> = title_column
        .cells
        .iter()
        .filter_map(|cell| cell.as_str())
        .collect();
    if distinct.len() >= total {
        return;
    }

    let mut seen: BTreeSet<String> = BTreeSet::new();
    for row in 0..table.height() {
        let title = title_column.cells[row].as_output();
        let kind = type_column.cells[row].as_output();
        let date = date_column.cells[row].as_output();
        let key = format!("{title}{kind}{date}");
        if !seen.insert(key) {
            report.add(
                Finding::warning(
                    "possible-duplicate",
                    format!("possible duplicate ({})", title_column.name),
                )
                .with_field(&title_column.name)
                .with_value(title),
            );
        }
    }
}
