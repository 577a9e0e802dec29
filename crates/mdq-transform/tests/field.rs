use mdq_model::{Cell, Report, Severity};
use mdq_transform::field;

fn present(value: &str) -> Cell {
    Cell::present(value)
}

#[test]
fn whitespace_trims_and_collapses() {
    let mut report = Report::new();
    let fixed = field::whitespace(&present("Alan  Orth"), "dc.contributor.author", &mut report);
    assert_eq!(fixed, present("Alan Orth"));
    assert_eq!(report.info_count(), 1);
}

#[test]
fn whitespace_handles_components_independently() {
    let mut report = Report::new();
    let fixed = field::whitespace(&present(" Kenya || Uganda "), "cg.coverage.country", &mut report);
    assert_eq!(fixed, present("Kenya||Uganda"));
    // Trimming alone is silent.
    assert!(report.is_empty());
}

#[test]
fn whitespace_is_idempotent() {
    let mut report = Report::new();
    let once = field::whitespace(&present("a   b || c\t\td"), "dc.title", &mut report);
    let twice = field::whitespace(&once, "dc.title", &mut report);
    assert_eq!(once, twice);
}

#[test]
fn whitespace_skips_missing() {
    let mut report = Report::new();
    assert_eq!(
        field::whitespace(&Cell::Missing, "dc.title", &mut report),
        Cell::Missing
    );
    assert!(report.is_empty());
}

#[test]
fn separators_drops_empty_components() {
    let mut report = Report::new();
    let fixed = field::separators(&present("value||value||"), "dc.subject", &mut report);
    assert_eq!(fixed, present("value||value"));
    assert_eq!(report.info_count(), 1);
}

#[test]
fn separators_promotes_lone_pipe() {
    let mut report = Report::new();
    let fixed = field::separators(&present("value|value"), "dc.subject", &mut report);
    assert_eq!(fixed, present("value||value"));
}

#[test]
fn separators_handles_tripled_separator() {
    let mut report = Report::new();
    let fixed = field::separators(&present("value|||value"), "dc.subject", &mut report);
    assert_eq!(fixed, present("value||value"));
}

#[test]
fn duplicates_preserves_first_occurrence_order() {
    let mut report = Report::new();
    let fixed = field::duplicates(&present("Kenya||Kenya"), "cg.coverage.country", &mut report);
    assert_eq!(fixed, present("Kenya"));
    assert_eq!(report.info_count(), 1);

    let mut report = Report::new();
    let fixed = field::duplicates(
        &present("b||a||b||c||a"),
        "cg.coverage.country",
        &mut report,
    );
    assert_eq!(fixed, present("b||a||c"));
    assert_eq!(report.info_count(), 2);
}

#[test]
fn unnecessary_unicode_removes_and_replaces() {
    let mut report = Report::new();
    let fixed = field::unnecessary_unicode(&present("Alan\u{200B} Orth"), "dc.contributor.author", &mut report);
    assert_eq!(fixed, present("Alan Orth"));

    let fixed = field::unnecessary_unicode(&present("Alan\u{00A0}Orth"), "dc.contributor.author", &mut report);
    assert_eq!(fixed, present("Alan Orth"));

    let fixed = field::unnecessary_unicode(&present("Alan\u{2009}Orth"), "dc.contributor.author", &mut report);
    assert_eq!(fixed, present("Alan Orth"));

    let fixed = field::unnecessary_unicode(&present("replacement\u{FFFD}"), "dc.title", &mut report);
    assert_eq!(fixed, present("replacement"));
}

#[test]
fn unnecessary_unicode_replaces_soft_hyphen() {
    let mut report = Report::new();
    // A soft hyphen preceded by a normal hyphen collapses to one hyphen.
    let fixed = field::unnecessary_unicode(&present("multi-\u{00AD}line"), "dc.title", &mut report);
    assert_eq!(fixed, present("multi-line"));
    let fixed = field::unnecessary_unicode(&present("soft\u{00AD}hyphen"), "dc.title", &mut report);
    assert_eq!(fixed, present("soft-hyphen"));
}

#[test]
fn newlines_strips_line_feeds() {
    let mut report = Report::new();
    let fixed = field::newlines(&present("line one\nline two"), "dc.title", &mut report);
    assert_eq!(fixed, present("line oneline two"));
    assert_eq!(report.info_count(), 1);
}

#[test]
fn comma_space_inserts_space() {
    let mut report = Report::new();
    let fixed = field::comma_space(&present("Orth,Alan S."), "dc.contributor.author", &mut report);
    assert_eq!(fixed, present("Orth, Alan S."));
    // Already correct values are untouched and silent.
    let mut report = Report::new();
    let fixed = field::comma_space(&present("Orth, Alan S."), "dc.contributor.author", &mut report);
    assert_eq!(fixed, present("Orth, Alan S."));
    assert!(report.is_empty());
}

#[test]
fn normalize_unicode_composes_decomposed_sequences() {
    let mut report = Report::new();
    // "Ouédraogo" with a decomposed e + combining acute accent.
    let decomposed = "Oue\u{0301}draogo, Mathieu";
    let fixed = field::normalize_unicode(&present(decomposed), "dc.contributor.author", &mut report);
    assert_eq!(fixed, present("Ouédraogo, Mathieu"));
    assert_eq!(report.info_count(), 1);

    // Already-canonical input is a silent no-op.
    let mut report = Report::new();
    let fixed = field::normalize_unicode(&present("Ouédraogo, Mathieu"), "dc.contributor.author", &mut report);
    assert_eq!(fixed, present("Ouédraogo, Mathieu"));
    assert!(report.is_empty());
}

#[test]
fn mojibake_repairs_misdecoded_text() {
    let mut report = Report::new();
    let fixed = field::mojibake(&present("CIAT PublicaÃ§ao"), "dcterms.isPartOf", &mut report);
    assert_eq!(fixed, present("CIAT Publicaçao"));
    assert_eq!(report.info_count(), 1);
}

#[test]
fn mojibake_leaves_clean_text_alone() {
    let mut report = Report::new();
    let fixed = field::mojibake(&present("São Paulo"), "dcterms.title", &mut report);
    assert_eq!(fixed, present("São Paulo"));
    assert!(report.is_empty());
}

#[test]
fn normalize_dois_canonicalizes_variants() {
    let cases = [
        ("10.1186/1743-422X-9-218", "https://doi.org/10.1186/1743-422x-9-218"),
        ("doi: 10.11648/j.jps.20140201.14", "https://doi.org/10.11648/j.jps.20140201.14"),
        ("http://dx.doi.org/10.1016/j.worlddev.2010.06.006", "https://doi.org/10.1016/j.worlddev.2010.06.006"),
        ("https://www.doi.org/10.1016/j.worlddev.2010.06.006", "https://doi.org/10.1016/j.worlddev.2010.06.006"),
        ("https://doi.org/10.1016%2fj.worlddev.2010.06.006", "https://doi.org/10.1016/j.worlddev.2010.06.006"),
    ];
    for (input, expected) in cases {
        let mut report = Report::new();
        let fixed = field::normalize_dois(&present(input), "cg.identifier.doi", &mut report);
        assert_eq!(fixed, present(expected), "normalizing {input}");
        assert_eq!(report.info_count(), 1, "finding for {input}");
        assert_eq!(report.findings[0].severity, Severity::Info);
    }
}

#[test]
fn normalize_dois_is_idempotent() {
    let mut report = Report::new();
    let once = field::normalize_dois(
        &present("doi: 10.11648/j.jps.20140201.14"),
        "cg.identifier.doi",
        &mut report,
    );
    let mut report = Report::new();
    let twice = field::normalize_dois(&once, "cg.identifier.doi", &mut report);
    assert_eq!(once, twice);
    assert!(report.is_empty());
}
