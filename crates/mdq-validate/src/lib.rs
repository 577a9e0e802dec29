//! Field and record checks.
//!
//! A check inspects a value (or a whole record) and reports findings; with
//! the single exception of vocabulary validation in drop mode, checks never
//! mutate. Missing cells pass through every check silently — only the date
//! check treats absence itself as a finding, because an issue date is
//! required metadata.

pub mod date;
pub mod duplicates;
pub mod experimental;
pub mod field;
pub mod identifiers;
pub mod record;
pub mod selector;
pub mod vocabulary;

pub use date::date;
pub use duplicates::duplicate_items;
pub use experimental::correct_language;
pub use field::{filename_extension, language, mojibake, spdx_license_identifier, suspicious_characters};
pub use identifiers::{isbn, issn};
pub use record::{citation_doi, countries_match_regions, title_in_citation};
pub use selector::{ColumnPlan, ColumnRule, plan_column};
pub use vocabulary::vocabulary;
