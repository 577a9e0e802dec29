//! Serial-number checks (ISSN, ISBN).
//!
//! Both validators ignore separator hyphens and spaces, then verify the
//! standard checksum. Invalid values are reported, never dropped.

use mdq_model::{Cell, Finding, Report, split_values};

/// Check every component of an ISSN field against the ISSN checksum.
pub fn issn(cell: &Cell, field_name: &str, report: &mut Report) {
    let Some(raw) = cell.as_str() else {
        return;
    };
    for value in split_values(raw) {
        if !is_valid_issn(value) {
            report.add(
                Finding::error("invalid-issn", "invalid ISSN")
                    .with_field(field_name)
                    .with_value(value),
            );
        }
    }
}

/// Check every component of an ISBN field against the ISBN-10/13 checksum.
pub fn isbn(cell: &Cell, field_name: &str, report: &mut Report) {
    let Some(raw) = cell.as_str() else {
        return;
    };
    for value in split_values(raw) {
        if !is_valid_isbn(value) {
            report.add(
                Finding::error("invalid-isbn", "invalid ISBN")
                    .with_field(field_name)
                    .with_value(value),
            );
        }
    }
}

fn compact(value: &str) -> String {
    value
        .chars()
        .filter(|ch| !matches!(ch, '-' | ' '))
        .collect()
}

/// ISSN: eight characters, weighted mod-11 checksum, `X` check digit for 10.
pub fn is_valid_issn(value: &str) -> bool {
    let compacted = compact(value);
    let chars: Vec<char> = compacted.chars().collect();
    if chars.len() != 8 {
        return false;
    }
    let mut sum = 0u32;
    for (index, ch) in chars[..7].iter().enumerate() {
        let Some(digit) = ch.to_digit(10) else {
            return false;
        };
        sum += digit * (8 - index as u32);
    }
    let check = (11 - sum % 11) % 11;
    match chars[7] {
        'X' | 'x' => check == 10,
        ch => ch.to_digit(10) == Some(check),
    }
}

/// ISBN-10 or ISBN-13, decided by compacted length.
pub fn is_valid_isbn(value: &str) -> bool {
    let compacted = compact(value);
    match compacted.chars().count() {
        10 => is_valid_isbn10(&compacted),
        13 => is_valid_isbn13(&compacted),
        _ => false,
    }
}

fn is_valid_isbn10(compacted: &str) -> bool {
    let chars: Vec<char> = compacted.chars().collect();
    let mut sum = 0u32;
    for (index, ch) in chars.iter().enumerate() {
        let digit = match ch {
            // The check digit (and only it) may be X for 10.
            'X' | 'x' if index == 9 => 10,
            ch => match ch.to_digit(10) {
                Some(digit) => digit,
                None => return false,
            },
        };
        sum += digit * (10 - index as u32);
    }
    sum % 11 == 0
}

fn is_valid_isbn13(compacted: &str) -> bool {
    let mut sum = 0u32;
    for (index, ch) in compacted.chars().enumerate() {
        let Some(digit) = ch.to_digit(10) else {
            return false;
        };
        let weight = if index % 2 == 0 { 1 } else { 3 };
        sum += digit * weight;
    }
    sum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issn_checksum() {
        assert!(is_valid_issn("0024-9319"));
        assert!(!is_valid_issn("2321-2302"));
        assert!(!is_valid_issn("0024-931"));
        assert!(!is_valid_issn("not-an-issn"));
    }

    #[test]
    fn isbn10_checksum() {
        assert!(is_valid_isbn("99921-58-10-7"));
        assert!(!is_valid_isbn("99921-58-10-6"));
        // X check digit.
        assert!(is_valid_isbn("0-8044-2957-X"));
    }

    #[test]
    fn isbn13_checksum() {
        assert!(is_valid_isbn("978-3-16-148410-0"));
        assert!(!is_valid_isbn("978-3-16-148410-1"));
    }
}
