//! Field and record fixes.
//!
//! A fix returns a replacement cell (or the original, unchanged) and reports
//! what it changed; it never fails. Missing cells pass through every fix
//! untouched and silently. Checks that only report live in `mdq-validate`;
//! this crate owns everything that rewrites values.

pub mod field;
pub mod mojibake;
pub mod record;

pub use field::{
    comma_space, duplicates, mojibake as mojibake_fix, newlines, normalize_dois,
    normalize_unicode, separators, unnecessary_unicode, whitespace,
};
pub use mojibake::{is_mojibake, repair_mojibake};
pub use record::{RegionUpdate, countries_match_regions};
