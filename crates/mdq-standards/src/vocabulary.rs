//! HTTP-backed controlled-vocabulary validator.
//!
//! Talks to a SKOSMOS-style REST search endpoint: a term is valid when the
//! search returns at least one result. Lookups go through the injected
//! [`LookupCache`]; only definite verdicts are cached, so an outage never
//! poisons the cache. A failed lookup yields [`VocabularyVerdict::Unknown`]
//! and the pipeline carries on.

use std::cell::RefCell;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use mdq_model::{VocabularyValidator, VocabularyVerdict};

use crate::cache::LookupCache;
use crate::error::Result;

/// The AGROVOC search endpoint used by default.
pub const DEFAULT_VOCABULARY_ENDPOINT: &str =
    "https://agrovoc.uniroma2.it/agrovoc/rest/v1/agrovoc/search";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<serde_json::Value>,
}

/// Blocking vocabulary validator with a file-backed response cache.
///
/// The pipeline is single-threaded, so the cache sits behind a `RefCell`
/// rather than a lock.
pub struct HttpVocabularyValidator {
    client: reqwest::blocking::Client,
    endpoint: String,
    cache: RefCell<LookupCache>,
}

impl HttpVocabularyValidator {
    pub fn new(endpoint: impl Into<String>, cache: LookupCache) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            cache: RefCell::new(cache),
        })
    }

    pub fn with_default_endpoint(cache: LookupCache) -> Result<Self> {
        Self::new(DEFAULT_VOCABULARY_ENDPOINT, cache)
    }

    fn lookup(&self, term: &str) -> Result<bool> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("query", term)])
            .send()?
            .error_for_status()?;
        let body: SearchResponse = response.json()?;
        Ok(!body.results.is_empty())
    }
}

impl VocabularyValidator for HttpVocabularyValidator {
    fn validate(&self, term: &str) -> VocabularyVerdict {
        let key = term.trim().to_lowercase();
        if let Some(valid) = self.cache.borrow().get(&key) {
            debug!(term, valid, "vocabulary cache hit");
            return verdict(valid);
        }
        match self.lookup(term) {
            Ok(valid) => {
                let mut cache = self.cache.borrow_mut();
                cache.insert(&key, valid);
                if let Err(error) = cache.persist() {
                    warn!(%error, "failed to persist vocabulary cache");
                }
                verdict(valid)
            }
            Err(error) => {
                warn!(term, %error, "vocabulary lookup failed");
                VocabularyVerdict::Unknown
            }
        }
    }
}

fn verdict(valid: bool) -> VocabularyVerdict {
    if valid {
        VocabularyVerdict::Valid
    } else {
        VocabularyVerdict::Invalid
    }
}
