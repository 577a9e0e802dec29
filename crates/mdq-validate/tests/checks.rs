use mdq_model::{Cell, Report, Severity, VocabularyValidator, VocabularyVerdict};
use mdq_validate::{field, identifiers, vocabulary::vocabulary};

fn present(value: &str) -> Cell {
    Cell::present(value)
}

struct StaticVocabulary(&'static [&'static str]);

impl VocabularyValidator for StaticVocabulary {
    fn validate(&self, term: &str) -> VocabularyVerdict {
        if self.0.contains(&term) {
            VocabularyVerdict::Valid
        } else {
            VocabularyVerdict::Invalid
        }
    }
}

struct UnavailableVocabulary;

impl VocabularyValidator for UnavailableVocabulary {
    fn validate(&self, _term: &str) -> VocabularyVerdict {
        VocabularyVerdict::Unknown
    }
}

#[test]
fn issn_reports_bad_checksum_per_component() {
    let mut report = Report::new();
    identifiers::issn(&present("0024-9319||2321-2302"), "dc.identifier.issn", &mut report);
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.findings[0].value.as_deref(), Some("2321-2302"));
}

#[test]
fn isbn_reports_bad_checksum() {
    let mut report = Report::new();
    identifiers::isbn(&present("99921-58-10-7"), "dc.identifier.isbn", &mut report);
    assert!(report.is_empty());
    identifiers::isbn(&present("99921-58-10-6"), "dc.identifier.isbn", &mut report);
    assert_eq!(report.error_count(), 1);
}

#[test]
fn language_checks_by_code_length() {
    let mut report = Report::new();
    field::language(&present("en||fra"), "dc.language.iso", &mut report);
    assert!(report.is_empty());

    field::language(&present("zz"), "dc.language.iso", &mut report);
    assert_eq!(report.error_count(), 1);
    assert!(report.findings[0].message.contains("639-1"));

    let mut report = Report::new();
    field::language(&present("qqq"), "dc.language.iso", &mut report);
    assert_eq!(report.error_count(), 1);
    assert!(report.findings[0].message.contains("639-3"));

    let mut report = Report::new();
    field::language(&present("Span"), "dc.language.iso", &mut report);
    assert_eq!(report.error_count(), 1);
}

#[test]
fn suspicious_characters_previews_from_occurrence() {
    let mut report = Report::new();
    field::suspicious_characters(&present("fore\u{02C6}t"), "dcterms.title", &mut report);
    assert_eq!(report.warning_count(), 1);
    assert_eq!(report.findings[0].value.as_deref(), Some("\u{02C6}t"));
}

#[test]
fn filename_extension_warns_on_uncommon_suffix() {
    let mut report = Report::new();
    field::filename_extension(&present("report.pdf||data.RData"), "filename", &mut report);
    assert_eq!(report.warning_count(), 1);
    assert_eq!(report.findings[0].value.as_deref(), Some("data.RData"));

    // Case-insensitive match and bundle descriptions are tolerated.
    let mut report = Report::new();
    field::filename_extension(
        &present("Annual_Report_2020.PDF__description:Report"),
        "filename",
        &mut report,
    );
    assert!(report.is_empty());
}

#[test]
fn spdx_license_check() {
    let mut report = Report::new();
    field::spdx_license_identifier(&present("CC-BY-4.0"), "dcterms.license", &mut report);
    assert!(report.is_empty());

    field::spdx_license_identifier(&present("CC-BY-SA-4.0 International"), "dcterms.license", &mut report);
    assert_eq!(report.warning_count(), 1);

    // Known local license statements are ignored.
    let mut report = Report::new();
    field::spdx_license_identifier(&present("Other"), "dcterms.license", &mut report);
    assert!(report.is_empty());
}

#[test]
fn mojibake_check_reports_without_mutating() {
    let mut report = Report::new();
    field::mojibake(&present("CIAT PublicaÃ§ao"), "dcterms.isPartOf", &mut report);
    assert_eq!(report.warning_count(), 1);
}

#[test]
fn vocabulary_drop_mode_removes_invalid_terms() {
    let validator = StaticVocabulary(&["LIVESTOCK"]);
    let mut report = Report::new();
    let rewritten = vocabulary(
        &present("LIVESTOCK||FOREST"),
        "dc.subject",
        &validator,
        true,
        &mut report,
    );
    assert_eq!(rewritten, present("LIVESTOCK"));
    assert_eq!(report.info_count(), 1);
    assert_eq!(report.findings[0].code, "dropped-vocabulary");
    assert_eq!(report.findings[0].value.as_deref(), Some("FOREST"));
}

#[test]
fn vocabulary_without_drop_keeps_invalid_terms() {
    let validator = StaticVocabulary(&["LIVESTOCK"]);
    let mut report = Report::new();
    let rewritten = vocabulary(
        &present("LIVESTOCK||FOREST"),
        "dc.subject",
        &validator,
        false,
        &mut report,
    );
    assert_eq!(rewritten, present("LIVESTOCK||FOREST"));
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.findings[0].code, "invalid-vocabulary");
}

#[test]
fn vocabulary_unknown_verdict_never_drops() {
    let mut report = Report::new();
    let rewritten = vocabulary(
        &present("LIVESTOCK"),
        "dc.subject",
        &UnavailableVocabulary,
        true,
        &mut report,
    );
    assert_eq!(rewritten, present("LIVESTOCK"));
    assert_eq!(report.warning_count(), 1);
    assert_eq!(report.findings[0].severity, Severity::Warning);
    assert_eq!(report.findings[0].code, "vocabulary-unavailable");
}
