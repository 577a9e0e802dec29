//! Adapters for the external capabilities the pipeline consumes: the
//! HTTP-backed controlled-vocabulary lookup (with its response cache), the
//! bundled UN M.49 country-to-region table, and the language detector.

pub mod cache;
pub mod error;
pub mod language;
pub mod regions;
pub mod vocabulary;

pub use cache::LookupCache;
pub use error::StandardsError;
pub use language::WhatlangDetector;
pub use regions::{UnM49Table, default_standards_root, load_default_region_table};
pub use vocabulary::{DEFAULT_VOCABULARY_ENDPOINT, HttpVocabularyValidator};
