//! Issue-date check.

use chrono::{NaiveDate, NaiveDateTime};

use mdq_model::{Cell, Finding, Report, split_values};

/// Check an issue date.
///
/// Dates are single-valued by design; a multi-value cell is one "multiple
/// dates" error, not several date errors. A missing date is itself an error
/// because the issue date is required metadata. Accepted forms, tried in
/// order with strict parsing: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`,
/// `YYYY-MM-DDTHH:MM:SSZ`.
pub fn date(cell: &Cell, field_name: &str, report: &mut Report) {
    let Some(raw) = cell.as_str() else {
        report.add(Finding::error("missing-date", "missing date").with_field(field_name));
        return;
    };
    if split_values(raw).len() > 1 {
        report.add(
            Finding::error("multiple-dates", "multiple dates not allowed")
                .with_field(field_name)
                .with_value(raw),
        );
        return;
    }
    if is_valid_date(raw) {
        return;
    }
    report.add(
        Finding::error("invalid-date", "invalid date")
            .with_field(field_name)
            .with_value(raw),
    );
}

fn is_valid_date(value: &str) -> bool {
    parse_year(value)
        || parse_year_month(value)
        || NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
        || NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%SZ").is_ok()
}

fn parse_year(value: &str) -> bool {
    value.len() == 4 && value.bytes().all(|byte| byte.is_ascii_digit())
}

fn parse_year_month(value: &str) -> bool {
    let Some((year, month)) = value.split_once('-') else {
        return false;
    };
    if !parse_year(year) {
        return false;
    }
    if month.is_empty() || month.len() > 2 || !month.bytes().all(|byte| byte.is_ascii_digit()) {
        return false;
    }
    matches!(month.parse::<u32>(), Ok(1..=12))
}
