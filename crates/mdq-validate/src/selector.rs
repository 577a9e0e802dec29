//! Field selector: maps a column name to its ordered list of rules.
//!
//! The mapping is a declarative predicate table evaluated once per column at
//! setup, not re-matched per cell. Predicates are independent and
//! non-exclusive — one column can receive several rules — but the rule
//! *order* within a column is fixed, because later rules assume earlier ones
//! already normalized the value (separator repair runs on whitespace-trimmed
//! values, duplicate removal runs on repaired separators, and so on).

use mdq_model::RunOptions;
use mdq_model::fields::{
    is_abstract_or_description_field, is_author_or_citation_field, is_date_field, is_doi_column,
    is_filename_field, is_isbn_field, is_issn_field, is_language_field, is_license_field,
    is_separator_exempt_field,
};

/// One rule application within a column plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRule {
    /// Trim and collapse whitespace (safe fix).
    Whitespace,
    /// Strip embedded line feeds (unsafe fix).
    Newlines,
    /// Insert missing space after commas (unsafe fix).
    CommaSpace,
    /// NFC-normalize decomposed sequences (unsafe fix).
    NormalizeUnicode,
    /// Warn about stray accents and tildes (check).
    SuspiciousCharacters,
    /// Repair encode/decode mismatches (unsafe fix).
    MojibakeFix,
    /// Report encode/decode mismatches (check, when fixes are disabled).
    MojibakeCheck,
    /// Remove or replace unnecessary Unicode characters (safe fix).
    UnnecessaryUnicode,
    /// Canonicalize DOI representations (unsafe fix).
    NormalizeDois,
    /// Repair multi-value separators (safe fix).
    Separators,
    /// Re-run the whitespace fix after separator repair (safe fix).
    WhitespaceAgain,
    /// Drop exact duplicate values (safe fix).
    Duplicates,
    /// Validate terms against the controlled vocabulary (check, may drop).
    Vocabulary,
    /// Validate language codes (check).
    Language,
    /// Validate ISSN checksums (check).
    Issn,
    /// Validate ISBN checksums (check).
    Isbn,
    /// Validate the issue date (check).
    Date,
    /// Warn about uncommon filename extensions (check).
    FilenameExtension,
    /// Warn about non-SPDX license identifiers (check).
    SpdxLicense,
}

/// The rules selected for one column, in application order.
#[derive(Debug, Clone)]
pub struct ColumnPlan {
    pub field: String,
    /// The user excluded this column; apply nothing and say so.
    pub skip: bool,
    pub rules: Vec<ColumnRule>,
}

/// Build the plan for one column.
pub fn plan_column(name: &str, options: &RunOptions) -> ColumnPlan {
    if options.is_excluded(name) {
        return ColumnPlan {
            field: name.to_string(),
            skip: true,
            rules: Vec::new(),
        };
    }

    let mut rules = Vec::new();

    // Abstracts and descriptions legitimately span lines and carry heavier
    // formatting; leave their whitespace and newlines alone.
    if !is_abstract_or_description_field(name) {
        rules.push(ColumnRule::Whitespace);
        if options.unsafe_fixes {
            rules.push(ColumnRule::Newlines);
        }
    }
    if options.unsafe_fixes && is_author_or_citation_field(name) {
        rules.push(ColumnRule::CommaSpace);
    }
    if options.unsafe_fixes {
        rules.push(ColumnRule::NormalizeUnicode);
    }
    rules.push(ColumnRule::SuspiciousCharacters);
    rules.push(if options.unsafe_fixes {
        ColumnRule::MojibakeFix
    } else {
        ColumnRule::MojibakeCheck
    });
    rules.push(ColumnRule::UnnecessaryUnicode);
    if options.unsafe_fixes && is_doi_column(name) {
        rules.push(ColumnRule::NormalizeDois);
    }
    // A lone "|" is legitimate content in titles, abstracts, and citations
    // (subtitles), so separator repair skips those.
    if !is_separator_exempt_field(name) {
        rules.push(ColumnRule::Separators);
        rules.push(ColumnRule::WhitespaceAgain);
    }
    rules.push(ColumnRule::Duplicates);
    if options
        .vocabulary_fields
        .iter()
        .any(|field| field == name)
    {
        rules.push(ColumnRule::Vocabulary);
    }
    if is_language_field(name) {
        rules.push(ColumnRule::Language);
    }
    if is_issn_field(name) {
        rules.push(ColumnRule::Issn);
    }
    if is_isbn_field(name) {
        rules.push(ColumnRule::Isbn);
    }
    if is_date_field(name) {
        rules.push(ColumnRule::Date);
    }
    if is_filename_field(name) {
        rules.push(ColumnRule::FilenameExtension);
    }
    if is_license_field(name) {
        rules.push(ColumnRule::SpdxLicense);
    }

    ColumnPlan {
        field: name.to_string(),
        skip: false,
        rules,
    }
}
