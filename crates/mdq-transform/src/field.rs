//! Per-field fix functions.
//!
//! Each fix takes one cell, returns the corrected cell, and pushes an `Info`
//! finding for every change it makes. The fixes are applied column-wise in a
//! fixed order chosen so that later rules see already-normalized values.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use mdq_model::{Cell, Finding, Report, join_values, split_values};

use crate::mojibake::{is_mojibake, repair_mojibake};

static EXCESS_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern"));
static COMMA_NO_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(\w)").expect("comma pattern"));
static SOFT_HYPHEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-*\x{00AD}").expect("soft hyphen pattern"));

/// Trim leading/trailing whitespace and collapse interior runs of two or
/// more whitespace characters to a single space, per multi-value component.
///
/// Trimming alone is silent; collapsing is reported. Idempotent.
pub fn whitespace(cell: &Cell, field_name: &str, report: &mut Report) -> Cell {
    let Some(raw) = cell.as_str() else {
        return cell.clone();
    };
    let mut values = Vec::new();
    for value in split_values(raw) {
        let mut value = value.trim().to_string();
        if EXCESS_WHITESPACE.is_match(&value) {
            report.add(
                Finding::info("excessive-whitespace", "removing excessive whitespace")
                    .with_field(field_name)
                    .with_value(&value),
            );
            value = EXCESS_WHITESPACE.replace_all(&value, " ").into_owned();
        }
        values.push(value);
    }
    Cell::Present(join_values(&values))
}

/// Repair invalid and unnecessary multi-value separators, for example:
///
/// ```text
/// value|value
/// value|||value
/// value||value||
/// ```
///
/// Empty components are dropped; a lone `|` inside a component is promoted
/// to a proper `||` separator. Promotion can itself expose new empty
/// components ("value|||value"), so the repair iterates to a fixed point:
/// afterwards no component is empty and none contains `|`. The column plan
/// re-runs the whitespace fix next because promotion can also expose
/// untrimmed components.
pub fn separators(cell: &Cell, field_name: &str, report: &mut Report) -> Cell {
    let Some(raw) = cell.as_str() else {
        return cell.clone();
    };
    let mut current = raw.to_string();
    loop {
        let mut values = Vec::new();
        let mut changed = false;
        for value in split_values(&current) {
            if value.is_empty() {
                report.add(
                    Finding::info(
                        "unnecessary-separator",
                        "fixing unnecessary multi-value separator",
                    )
                    .with_field(field_name)
                    .with_value(&current),
                );
                changed = true;
                continue;
            }
            if value.contains('|') {
                report.add(
                    Finding::info("invalid-separator", "fixing invalid multi-value separator")
                        .with_field(field_name)
                        .with_value(value),
                );
                values.push(value.replace('|', "||"));
                changed = true;
            } else {
                values.push(value.to_string());
            }
        }
        current = join_values(&values);
        if !changed || current.is_empty() {
            return Cell::Present(current);
        }
    }
}

/// Remove or replace unnecessary Unicode characters on the whole cell:
/// zero-width space and replacement character are removed; no-break space
/// and thin space become a regular space; a soft hyphen (optionally preceded
/// by normal hyphens) becomes a plain hyphen.
pub fn unnecessary_unicode(cell: &Cell, field_name: &str, report: &mut Report) -> Cell {
    let Some(raw) = cell.as_str() else {
        return cell.clone();
    };
    let mut field = raw.to_string();
    if field.contains('\u{200B}') {
        report.add(
            Finding::info("unnecessary-unicode", "removing unnecessary Unicode (U+200B)")
                .with_field(field_name)
                .with_value(&field),
        );
        field = field.replace('\u{200B}', "");
    }
    if field.contains('\u{FFFD}') {
        report.add(
            Finding::info("unnecessary-unicode", "removing unnecessary Unicode (U+FFFD)")
                .with_field(field_name)
                .with_value(&field),
        );
        field = field.replace('\u{FFFD}', "");
    }
    if field.contains('\u{00A0}') {
        report.add(
            Finding::info(
                "unnecessary-unicode",
                "replacing unnecessary Unicode (U+00A0)",
            )
            .with_field(field_name)
            .with_value(&field),
        );
        field = field.replace('\u{00A0}', " ");
    }
    if field.contains('\u{00AD}') {
        report.add(
            Finding::info(
                "unnecessary-unicode",
                "replacing unnecessary Unicode (U+00AD)",
            )
            .with_field(field_name)
            .with_value(&field),
        );
        field = SOFT_HYPHEN.replace_all(&field, "-").into_owned();
    }
    if field.contains('\u{2009}') {
        report.add(
            Finding::info(
                "unnecessary-unicode",
                "replacing unnecessary Unicode (U+2009)",
            )
            .with_field(field_name)
            .with_value(&field),
        );
        field = field.replace('\u{2009}', " ");
    }
    Cell::Present(field)
}

/// Drop exact repeated values within one cell, preserving first occurrence
/// and original order.
pub fn duplicates(cell: &Cell, field_name: &str, report: &mut Report) -> Cell {
    let Some(raw) = cell.as_str() else {
        return cell.clone();
    };
    let mut values: Vec<&str> = Vec::new();
    for value in split_values(raw) {
        if values.contains(&value) {
            report.add(
                Finding::info("duplicate-value", "removing duplicate value")
                    .with_field(field_name)
                    .with_value(value),
            );
        } else {
            values.push(value);
        }
    }
    Cell::Present(join_values(&values))
}

/// Strip embedded line feeds entirely (not replaced with a space).
///
/// Values spanning multiple lines break downstream imports; carriage
/// returns at value boundaries are already handled by the whitespace fix.
pub fn newlines(cell: &Cell, field_name: &str, report: &mut Report) -> Cell {
    let Some(raw) = cell.as_str() else {
        return cell.clone();
    };
    if !raw.contains('\n') {
        return cell.clone();
    }
    report.add(
        Finding::info("newline", "removing newline")
            .with_field(field_name)
            .with_value(raw),
    );
    Cell::Present(raw.replace('\n', ""))
}

/// Insert a space after a comma immediately followed by a word character,
/// for example "Orth,Alan S." becomes "Orth, Alan S.".
pub fn comma_space(cell: &Cell, field_name: &str, report: &mut Report) -> Cell {
    let Some(raw) = cell.as_str() else {
        return cell.clone();
    };
    if !COMMA_NO_SPACE.is_match(raw) {
        return cell.clone();
    }
    report.add(
        Finding::info("comma-space", "adding space after comma")
            .with_field(field_name)
            .with_value(raw),
    );
    Cell::Present(COMMA_NO_SPACE.replace_all(raw, ", $1").into_owned())
}

/// Canonicalize decomposed combining sequences to precomposed form (NFC).
/// Silent no-op when the value is already canonical.
pub fn normalize_unicode(cell: &Cell, field_name: &str, report: &mut Report) -> Cell {
    let Some(raw) = cell.as_str() else {
        return cell.clone();
    };
    if unicode_normalization::is_nfc(raw) {
        return cell.clone();
    }
    report.add(
        Finding::info("unicode-normalization", "normalizing Unicode")
            .with_field(field_name)
            .with_value(raw),
    );
    Cell::Present(raw.nfc().collect())
}

/// Repair text that was encoded once and decoded in a mismatched single-byte
/// encoding. Quote characters are left as-is. See [`crate::mojibake`].
pub fn mojibake(cell: &Cell, field_name: &str, report: &mut Report) -> Cell {
    let Some(raw) = cell.as_str() else {
        return cell.clone();
    };
    if !is_mojibake(raw) {
        return cell.clone();
    }
    let Some(fixed) = repair_mojibake(raw) else {
        return cell.clone();
    };
    report.add(
        Finding::info("mojibake", "fixing encoding issue")
            .with_field(field_name)
            .with_value(raw),
    );
    Cell::Present(fixed)
}

/// Normalize DOI representations to the canonical
/// `https://doi.org/10.xxxx/xxxx` URI form, per multi-value component:
/// trim, lowercase, upgrade to HTTPS, collapse resolver host variants, fix
/// stray `%2f` escapes, and expand bare or `doi:`-prefixed identifiers.
/// Idempotent.
pub fn normalize_dois(cell: &Cell, field_name: &str, report: &mut Report) -> Cell {
    let Some(raw) = cell.as_str() else {
        return cell.clone();
    };
    let mut values = Vec::new();
    for value in split_values(raw) {
        let mut fixed = value.trim().to_lowercase();
        if let Some(rest) = fixed.strip_prefix("http://") {
            fixed = format!("https://{rest}");
        }
        fixed = fixed
            .replace("dx.doi.org", "doi.org")
            .replace("www.doi.org", "doi.org")
            .replace("%2f", "/");
        if let Some(rest) = fixed.strip_prefix("doi: 10.") {
            fixed = format!("https://doi.org/10.{rest}");
        }
        if let Some(rest) = fixed.strip_prefix("10.") {
            fixed = format!("https://doi.org/10.{rest}");
        }
        if fixed != value {
            report.add(
                Finding::info("doi-normalized", "normalized DOI")
                    .with_field(field_name)
                    .with_value(value),
            );
        }
        values.push(fixed);
    }
    Cell::Present(join_values(&values))
}
