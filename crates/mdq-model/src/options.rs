//! Configuration options for a pipeline run.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Options controlling which rules run and over which fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunOptions {
    /// Apply unsafe fixes (newline stripping, comma-space repair, Unicode
    /// normalization, encoding repair, DOI normalization, region fill).
    ///
    /// Unsafe fixes can alter semantically meaningful content, so they are
    /// off by default; the affected rules degrade to report-only checks.
    pub unsafe_fixes: bool,

    /// Field names to validate against the controlled vocabulary.
    pub vocabulary_fields: Vec<String>,

    /// Drop invalid vocabulary terms instead of only reporting them.
    pub drop_invalid_vocabulary: bool,

    /// Field names excluded from all checking and fixing.
    pub exclude_fields: BTreeSet<String>,

    /// Enable experimental checks like language detection.
    pub experimental_checks: bool,
}

impl RunOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_unsafe_fixes(mut self, enable: bool) -> Self {
        self.unsafe_fixes = enable;
        self
    }

    #[must_use]
    pub fn with_vocabulary_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocabulary_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_drop_invalid_vocabulary(mut self, enable: bool) -> Self {
        self.drop_invalid_vocabulary = enable;
        self
    }

    #[must_use]
    pub fn with_exclude_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_experimental_checks(mut self, enable: bool) -> Self {
        self.experimental_checks = enable;
        self
    }

    pub fn is_excluded(&self, field: &str) -> bool {
        self.exclude_fields.contains(field)
    }
}
