//! Field-name classification.
//!
//! Field names are dotted, hierarchical strings (`dcterms.title`,
//! `cg.coverage.country`) used purely as pattern-matching keys. The
//! predicates here are the single source of truth for routing rules to
//! columns and for locating fields inside a record; matches are independent
//! and non-exclusive.

/// Any title field: `dc.title`, `dcterms.title`, `dcterms.title.alternative`, ...
pub fn is_title_field(name: &str) -> bool {
    name.starts_with("dc.title") || name.starts_with("dcterms.title")
}

/// The main title field, i.e. a title field that is not `*.title.alternative`.
pub fn is_main_title_field(name: &str) -> bool {
    let rest = name
        .strip_prefix("dcterms.title")
        .or_else(|| name.strip_prefix("dc.title"));
    match rest {
        Some(rest) => !rest.starts_with(".alternative"),
        None => false,
    }
}

pub fn is_type_field(name: &str) -> bool {
    name.starts_with("dcterms.type") || name.starts_with("dc.type")
}

/// The issued-date field used for duplicate detection.
pub fn is_issued_date_field(name: &str) -> bool {
    name.starts_with("dcterms.issued") || name.starts_with("dc.date.accessioned")
}

pub fn is_citation_field(name: &str) -> bool {
    name.to_ascii_lowercase().contains("citation")
}

pub fn is_abstract_field(name: &str) -> bool {
    name.contains("abstract")
}

/// Abstracts and descriptions legitimately span multiple lines, so they are
/// exempt from whitespace and newline repair.
pub fn is_abstract_or_description_field(name: &str) -> bool {
    name.contains("abstract") || name.contains("description")
}

pub fn is_author_or_citation_field(name: &str) -> bool {
    name.contains("author") || is_citation_field(name)
}

/// Title, abstract, and citation fields may contain a legitimate `|` (for
/// example subtitles), so they are exempt from separator repair.
pub fn is_separator_exempt_field(name: &str) -> bool {
    name.contains("abstract") || name.contains("title") || is_citation_field(name)
}

pub fn is_language_field(name: &str) -> bool {
    name.contains("language")
}

pub fn is_issn_field(name: &str) -> bool {
    name.contains("issn")
}

pub fn is_isbn_field(name: &str) -> bool {
    name.contains("isbn")
}

pub fn is_date_field(name: &str) -> bool {
    name.contains("date") || name.contains("dcterms.issued")
}

/// A DOI identifier column (`cg.identifier.doi`, `dc.identifier.doi`, ...).
pub fn is_doi_column(name: &str) -> bool {
    name.contains("identifier.doi")
}

/// Any field name that looks DOI-related, as used by the record rules.
pub fn is_doi_like(name: &str) -> bool {
    name.contains("doi")
}

pub fn is_license_field(name: &str) -> bool {
    name.starts_with("dcterms.license")
}

pub fn is_filename_field(name: &str) -> bool {
    name == "filename"
}

pub fn is_country_field(name: &str) -> bool {
    name.contains("country")
}

/// Region fields, explicitly excluding subregions.
pub fn is_region_field(name: &str) -> bool {
    name.contains("region") && !name.contains("sub")
}
