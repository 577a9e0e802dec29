//! Experimental checks, enabled only on request.

use std::collections::BTreeSet;

use isolang::Language;

use mdq_model::fields::{is_abstract_field, is_citation_field, is_language_field};
use mdq_model::{Finding, LanguageDetector, Record, Report, SEPARATOR};

/// Candidate languages for detection, ISO 639-1. Restricting the detector
/// to this list keeps false positives down on short samples.
const CANDIDATE_LANGUAGES: [&str; 13] = [
    "ar", "de", "en", "es", "fr", "hi", "it", "ja", "ko", "pt", "ru", "vi", "zh",
];

/// Compare an item's declared language against the language detected from
/// its title, abstract, and citation text.
///
/// The declared language must be present, single-valued, and itself a valid
/// 2- or 3-character code; otherwise the row is skipped silently. The title
/// always contributes to the sample (excluding it would leave nothing to
/// report against); abstract and citation contribute unless excluded. A
/// mismatch is reported at the declared code's alpha-length.
pub fn correct_language(
    record: &Record<'_>,
    detector: &dyn LanguageDetector,
    exclude: &BTreeSet<String>,
    report: &mut Report,
) {
    let mut language = "";
    let mut language_column = None;
    let mut title = None;
    let mut samples: Vec<&str> = Vec::new();

    for (name, cell) in record.fields() {
        let Some(value) = cell.as_str() else {
            continue;
        };
        if is_language_field(name) {
            // Multiple declared languages are ambiguous; skip the row.
            if value.contains(SEPARATOR) {
                return;
            }
            language = value;
            language_column = Some(name);
        }
        if name.contains("title") {
            title = Some(value);
            samples.push(value);
        }
        if is_abstract_field(name) && !exclude.contains(name) {
            samples.push(value);
        }
        if is_citation_field(name) && !exclude.contains(name) {
            samples.push(value);
        }
    }

    if language.is_empty() {
        return;
    }
    let declared_len = language.chars().count();
    let declared = match declared_len {
        2 => Language::from_639_1(&language.to_lowercase()),
        3 => Language::from_639_3(&language.to_lowercase()),
        _ => return,
    };
    if declared.is_none() {
        return;
    }

    let sample = samples.join(" ");
    let allowlist: Vec<String> = CANDIDATE_LANGUAGES
        .iter()
        .filter_map(|code| Language::from_639_1(code))
        .map(|language| language.to_639_3().to_string())
        .collect();
    let Some(detected_code) = detector.detect(&sample, &allowlist) else {
        return;
    };
    let Some(detected) = Language::from_639_3(&detected_code) else {
        return;
    };

    let detected_at_length = if declared_len == 2 {
        detected.to_639_1().unwrap_or_else(|| detected.to_639_3())
    } else {
        detected.to_639_3()
    };
    if language != detected_at_length {
        report.add(
            Finding::warning(
                "language-mismatch",
                format!(
                    "possibly incorrect language {language} (detected {detected_at_length})"
                ),
            )
            .with_field(language_column.unwrap_or_default())
            .with_value(title.unwrap_or_default()),
        );
    }
}
