pub mod capability;
pub mod cell;
pub mod fields;
pub mod options;
pub mod report;
pub mod table;
pub mod value;

pub use capability::{LanguageDetector, RegionResolver, VocabularyValidator, VocabularyVerdict};
pub use cell::Cell;
pub use options::RunOptions;
pub use report::{Finding, Report, Severity};
pub use table::{Column, Record, Table};
pub use value::{SEPARATOR, join_values, split_values};
