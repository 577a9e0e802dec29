use mdq_cli::pipeline::{Capabilities, run_pipeline};
use mdq_ingest::{read_table_from_reader, serialize_table, write_table};
use mdq_model::{
    Cell, RegionResolver, RunOptions, Table, VocabularyValidator, VocabularyVerdict,
};

struct StaticRegions;

impl RegionResolver for StaticRegions {
    fn region_of(&self, country: &str) -> Option<String> {
        match country {
            "Kenya" | "Uganda" => Some("Eastern Africa".to_string()),
            "Nigeria" => Some("Western Africa".to_string()),
            _ => None,
        }
    }
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

fn load(csv: &str) -> Table {
    read_table_from_reader(csv.as_bytes()).expect("read table")
}

fn cell<'a>(table: &'a Table, name: &str, row: usize) -> &'a Cell {
    table.record(row).get(name).expect("cell")
}

#[test]
fn duplicate_rows_produce_exactly_one_finding() {
    let mut table = load(
        "dcterms.title,dcterms.type,dcterms.issued\n\
         Title,Report,2021-03-17\n\
         Title,Report,2021-03-17\n",
    );
    let report = run_pipeline(&mut table, &RunOptions::new(), &Capabilities::default());
    let duplicates: Vec<_> = report
        .findings
        .iter()
        .filter(|finding| finding.code == "possible-duplicate")
        .collect();
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].field.as_deref(), Some("dcterms.title"));
}

#[test]
fn safe_fixes_rewrite_cells_in_place() {
    let mut table = load(
        "dc.contributor.author,cg.coverage.country\n\
         \"Orth,  Alan\",Kenya||Kenya\n",
    );
    let report = run_pipeline(&mut table, &RunOptions::new(), &Capabilities::default());
    // Whitespace collapsed (safe), duplicate value dropped (safe), but the
    // comma-space fix is unsafe and must not have run.
    assert_eq!(
        cell(&table, "dc.contributor.author", 0),
        &Cell::present("Orth, Alan")
    );
    assert_eq!(
        cell(&table, "cg.coverage.country", 0),
        &Cell::present("Kenya")
    );
    assert!(report.findings.iter().any(|f| f.code == "duplicate-value"));
    assert!(!report.findings.iter().any(|f| f.code == "comma-space"));
}

#[test]
fn unsafe_region_fix_fills_empty_region() {
    let mut table = load(
        "dcterms.title,cg.coverage.country,cg.coverage.region\n\
         Kenya study,Kenya,\n",
    );
    let options = RunOptions::new().with_unsafe_fixes(true);
    let capabilities = Capabilities {
        regions: Some(&StaticRegions),
        ..Capabilities::default()
    };
    let report = run_pipeline(&mut table, &options, &capabilities);
    assert_eq!(
        cell(&table, "cg.coverage.region", 0),
        &Cell::present("Eastern Africa")
    );
    assert!(report.findings.iter().any(|f| f.code == "added-region"));
}

#[test]
fn unsafe_region_fix_appends_to_existing_regions() {
    let mut table = load(
        "dcterms.title,cg.coverage.country,cg.coverage.region\n\
         Two countries,Kenya||Nigeria,Western Africa\n",
    );
    let options = RunOptions::new().with_unsafe_fixes(true);
    let capabilities = Capabilities {
        regions: Some(&StaticRegions),
        ..Capabilities::default()
    };
    run_pipeline(&mut table, &options, &capabilities);
    assert_eq!(
        cell(&table, "cg.coverage.region", 0),
        &Cell::present("Western Africa||Eastern Africa")
    );
}

#[test]
fn safe_mode_reports_missing_regions_without_mutating() {
    let mut table = load(
        "dcterms.title,cg.coverage.country,cg.coverage.region\n\
         Kenya study,Kenya,\n",
    );
    let capabilities = Capabilities {
        regions: Some(&StaticRegions),
        ..Capabilities::default()
    };
    let report = run_pipeline(&mut table, &RunOptions::new(), &capabilities);
    assert!(cell(&table, "cg.coverage.region", 0).is_missing());
    assert!(report.findings.iter().any(|f| f.code == "missing-region"));
}

#[test]
fn vocabulary_drop_mode_end_to_end() {
    let mut table = load("dc.subject\nLIVESTOCK||FOREST\n");
    let options = RunOptions::new()
        .with_vocabulary_fields(["dc.subject"])
        .with_drop_invalid_vocabulary(true);
    let validator = StaticVocabulary(&["LIVESTOCK"]);
    let capabilities = Capabilities {
        vocabulary: Some(&validator),
        ..Capabilities::default()
    };
    let report = run_pipeline(&mut table, &options, &capabilities);
    assert_eq!(cell(&table, "dc.subject", 0), &Cell::present("LIVESTOCK"));
    assert!(report.findings.iter().any(|f| f.code == "dropped-vocabulary"));
}

#[test]
fn vocabulary_fields_without_validator_report_unavailable() {
    let mut table = load("dc.subject\nLIVESTOCK\n");
    let options = RunOptions::new().with_vocabulary_fields(["dc.subject"]);
    let report = run_pipeline(&mut table, &options, &Capabilities::default());
    assert_eq!(cell(&table, "dc.subject", 0), &Cell::present("LIVESTOCK"));
    assert!(
        report
            .findings
            .iter()
            .any(|f| f.code == "vocabulary-unavailable")
    );
}

#[test]
fn excluded_fields_are_left_untouched() {
    let mut table = load("dc.contributor.author\n\"Orth,  Alan\"\n");
    let options = RunOptions::new().with_exclude_fields(["dc.contributor.author"]);
    let report = run_pipeline(&mut table, &options, &Capabilities::default());
    assert_eq!(
        cell(&table, "dc.contributor.author", 0),
        &Cell::present("Orth,  Alan")
    );
    assert!(report.findings.iter().any(|f| f.code == "skipped-field"));
}

#[test]
fn date_checks_run_but_never_mutate() {
    let mut table = load("dcterms.issued\n1990||1991\n");
    let report = run_pipeline(&mut table, &RunOptions::new(), &Capabilities::default());
    assert_eq!(
        cell(&table, "dcterms.issued", 0),
        &Cell::present("1990||1991")
    );
    let date_findings: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.code == "multiple-dates")
        .collect();
    assert_eq!(date_findings.len(), 1);
}

#[test]
fn cleaned_table_round_trips_to_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output_path = dir.path().join("cleaned.csv");
    let mut table = load(
        "dcterms.title,cg.coverage.country\n\
         Soil study,Kenya||||Uganda\n",
    );
    run_pipeline(&mut table, &RunOptions::new(), &Capabilities::default());
    write_table(&output_path, &table).expect("write output");
    let written = std::fs::read_to_string(&output_path).expect("read output");
    assert_eq!(
        written,
        "dcterms.title,cg.coverage.country\nSoil study,Kenya||Uganda\n"
    );
    // The serialized bytes match what the in-memory table says.
    assert_eq!(
        serialize_table(&table).expect("serialize"),
        written.into_bytes()
    );
}
