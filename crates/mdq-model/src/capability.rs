//! External capability interfaces.
//!
//! The pipeline consumes three capabilities it does not implement itself: a
//! controlled-vocabulary lookup, a country-to-region resolver, and a
//! language detector. They are injected as trait objects so the core stays
//! testable and the adapters (HTTP client, bundled tables) stay replaceable.

/// Verdict of a controlled-vocabulary lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabularyVerdict {
    Valid,
    Invalid,
    /// The lookup service could not answer (unreachable, malformed reply).
    /// Checks report "validation unavailable" and never drop on this.
    Unknown,
}

pub trait VocabularyValidator {
    fn validate(&self, term: &str) -> VocabularyVerdict;
}

pub trait RegionResolver {
    /// Resolve a country name or ISO code to its macro-geographic region.
    /// Returns `None` when the country cannot be resolved; callers skip
    /// unresolved countries silently.
    fn region_of(&self, country: &str) -> Option<String>;
}

pub trait LanguageDetector {
    /// Detect the dominant language of `sample`, restricted to the given
    /// ISO 639-3 candidate codes. Returns the detected ISO 639-3 code, or
    /// `None` when no candidate fits.
    fn detect(&self, sample: &str, allowlist: &[String]) -> Option<String>;
}
