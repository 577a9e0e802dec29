use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use mdq_ingest::{read_table, write_table};
use mdq_model::{Report, RunOptions};
use mdq_standards::{
    HttpVocabularyValidator, LookupCache, WhatlangDetector, cache, load_default_region_table,
};

use crate::cli::Cli;
use crate::pipeline::{Capabilities, run_pipeline};

const VOCABULARY_CACHE_FILE: &str = "vocabulary-response-cache.json";

/// Outcome of one run, for the terminal summary.
pub struct RunOutcome {
    pub rows: usize,
    pub columns: usize,
    pub report: Report,
    pub output_file: PathBuf,
}

pub fn run(cli: &Cli) -> Result<RunOutcome> {
    let options = build_options(cli);

    let mut table = read_table(&cli.input_file)
        .with_context(|| format!("read {}", cli.input_file.display()))?;
    info!(
        input = %cli.input_file.display(),
        columns = table.width(),
        rows = table.height(),
        "input loaded"
    );

    // Build the external capabilities up front; a capability that cannot be
    // constructed degrades the affected checks, never the run.
    let vocabulary = if options.vocabulary_fields.is_empty() {
        None
    } else {
        let cache_dir = cli
            .cache_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let lookup_cache =
            LookupCache::open(cache_dir.join(VOCABULARY_CACHE_FILE), cache::DEFAULT_TTL);
        match HttpVocabularyValidator::with_default_endpoint(lookup_cache) {
            Ok(validator) => Some(validator),
            Err(error) => {
                warn!(%error, "vocabulary validator unavailable");
                None
            }
        }
    };
    let regions = match load_default_region_table() {
        Ok(table) => Some(table),
        Err(error) => {
            warn!(%error, "region table unavailable");
            None
        }
    };
    let detector = options.experimental_checks.then(WhatlangDetector::new);

    let capabilities = Capabilities {
        vocabulary: vocabulary
            .as_ref()
            .map(|validator| validator as &dyn mdq_model::VocabularyValidator),
        regions: regions
            .as_ref()
            .map(|table| table as &dyn mdq_model::RegionResolver),
        detector: detector
            .as_ref()
            .map(|detector| detector as &dyn mdq_model::LanguageDetector),
    };

    let report = run_pipeline(&mut table, &options, &capabilities);

    // Output is written only after the full pipeline completed, so an
    // aborted run leaves no partial file.
    write_table(&cli.output_file, &table)
        .with_context(|| format!("write {}", cli.output_file.display()))?;

    if let Some(path) = &cli.report_file {
        let json = serde_json::to_vec_pretty(&report).context("serialize findings report")?;
        fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    }

    Ok(RunOutcome {
        rows: table.height(),
        columns: table.width(),
        report,
        output_file: cli.output_file.clone(),
    })
}

fn build_options(cli: &Cli) -> RunOptions {
    RunOptions::new()
        .with_unsafe_fixes(cli.unsafe_fixes)
        .with_vocabulary_fields(split_field_list(cli.vocabulary_fields.as_deref()))
        .with_drop_invalid_vocabulary(cli.drop_invalid_vocabulary)
        .with_exclude_fields(split_field_list(cli.exclude_fields.as_deref()))
        .with_experimental_checks(cli.experimental_checks)
}

/// Split a comma-separated field list; the user should not include spaces,
/// but stray whitespace around names is tolerated.
fn split_field_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|list| {
        list.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}
