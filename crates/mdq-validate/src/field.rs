//! Per-field check functions.

use mdq_model::{Cell, Finding, Report, split_values};
use mdq_transform::is_mojibake;

/// Standalone accents and tildes that usually indicate an encoding or
/// copy/paste error, for example "foreˆt" instead of "forêt".
const SUSPICIOUS_CHARACTERS: [char; 4] = ['\u{00B4}', '\u{02C6}', '\u{007E}', '\u{0060}'];

/// Preview length for suspicious-character findings, enough context without
/// overflowing an 80-column terminal.
const SUSPICIOUS_PREVIEW_CHARS: usize = 60;

/// Warn about suspicious standalone characters, with a preview of the value
/// starting at the first occurrence.
pub fn suspicious_characters(cell: &Cell, field_name: &str, report: &mut Report) {
    let Some(raw) = cell.as_str() else {
        return;
    };
    for character in SUSPICIOUS_CHARACTERS {
        let Some(position) = raw.find(character) else {
            continue;
        };
        let preview: String = raw[position..].chars().take(SUSPICIOUS_PREVIEW_CHARS).collect();
        report.add(
            Finding::warning("suspicious-character", format!("suspicious character ({character})"))
                .with_field(field_name)
                .with_value(preview),
        );
    }
}

/// Report text that looks like an encode/decode mismatch. The report-only
/// counterpart of the mojibake fix, used when unsafe fixes are disabled.
pub fn mojibake(cell: &Cell, field_name: &str, report: &mut Report) {
    let Some(raw) = cell.as_str() else {
        return;
    };
    if is_mojibake(raw) {
        report.add(
            Finding::warning("mojibake", "possible encoding issue")
                .with_field(field_name)
                .with_value(raw),
        );
    }
}

/// Check language codes: a 2-character value must resolve as ISO 639-1, a
/// 3-character value as ISO 639-3; any other length is invalid outright.
pub fn language(cell: &Cell, field_name: &str, report: &mut Report) {
    let Some(raw) = cell.as_str() else {
        return;
    };
    for value in split_values(raw) {
        match value.chars().count() {
            2 => {
                if isolang::Language::from_639_1(&value.to_lowercase()).is_none() {
                    report.add(
                        Finding::error("invalid-language", "invalid ISO 639-1 language")
                            .with_field(field_name)
                            .with_value(value),
                    );
                }
            }
            3 => {
                if isolang::Language::from_639_3(&value.to_lowercase()).is_none() {
                    report.add(
                        Finding::error("invalid-language", "invalid ISO 639-3 language")
                            .with_field(field_name)
                            .with_value(value),
                    );
                }
            }
            _ => {
                report.add(
                    Finding::error("invalid-language", "invalid language")
                        .with_field(field_name)
                        .with_value(value),
                );
            }
        }
    }
}

/// Extensions commonly attached to repository items. Anything else is
/// worth a look before a bulk import.
const COMMON_FILENAME_EXTENSIONS: [&str; 7] =
    [".pdf", ".doc", ".docx", ".ppt", ".pptx", ".xls", ".xlsx"];

/// Warn when a filename has an uncommon extension (case-insensitive).
///
/// A `__description:` suffix on the filename is metadata for the bundle
/// builder and is stripped before matching.
pub fn filename_extension(cell: &Cell, field_name: &str, report: &mut Report) {
    let Some(raw) = cell.as_str() else {
        return;
    };
    for value in split_values(raw) {
        let filename = if value.contains("__description") {
            value.split("__").next().unwrap_or(value)
        } else {
            value
        };
        let lowered = filename.to_lowercase();
        let matched = COMMON_FILENAME_EXTENSIONS
            .iter()
            .any(|extension| lowered.ends_with(extension));
        if !matched {
            report.add(
                Finding::warning("uncommon-extension", "filename with uncommon extension")
                    .with_field(field_name)
                    .with_value(value),
            );
        }
    }
}

/// Common local license statements that are deliberately not SPDX
/// identifiers and should not be flagged.
const IGNORE_LICENSES: [&str; 6] = [
    "All rights reserved; no re-use allowed",
    "All rights reserved; self-archive copy only",
    "Copyrighted; Non-commercial educational use only",
    "Copyrighted; Non-commercial use only",
    "Copyrighted; all rights reserved",
    "Other",
];

/// Warn when a license value is not a registered SPDX identifier.
pub fn spdx_license_identifier(cell: &Cell, field_name: &str, report: &mut Report) {
    let Some(raw) = cell.as_str() else {
        return;
    };
    if IGNORE_LICENSES.contains(&raw) {
        return;
    }
    for value in split_values(raw) {
        if spdx::license_id(value).is_none() {
            report.add(
                Finding::warning("non-spdx-license", "non-SPDX license identifier")
                    .with_field(field_name)
                    .with_value(value),
            );
        }
    }
}
