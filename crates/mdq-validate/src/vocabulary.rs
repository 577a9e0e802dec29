//! Controlled-vocabulary check.

use mdq_model::{
    Cell, Finding, Report, VocabularyValidator, VocabularyVerdict, join_values, split_values,
};

/// Validate every component of a cell against the controlled vocabulary.
///
/// In drop mode invalid terms are removed from the rewritten cell with a
/// drop notice instead of an error; otherwise invalid terms are kept and
/// reported. A term the validator cannot answer for (`Unknown`) is always
/// kept and reported as unavailable — an indeterminate verdict must never
/// cause a drop. Survivors are rejoined in their original order.
pub fn vocabulary(
    cell: &Cell,
    field_name: &str,
    validator: &dyn VocabularyValidator,
    drop: bool,
    report: &mut Report,
) -> Cell {
    let Some(raw) = cell.as_str() else {
        return cell.clone();
    };
    let mut values = Vec::new();
    for value in split_values(raw) {
        match validator.validate(value) {
            VocabularyVerdict::Valid => values.push(value),
            VocabularyVerdict::Invalid => {
                if drop {
                    report.add(
                        Finding::info("dropped-vocabulary", "dropping invalid vocabulary term")
                            .with_field(field_name)
                            .with_value(value),
                    );
                } else {
                    report.add(
                        Finding::error("invalid-vocabulary", "invalid vocabulary term")
                            .with_field(field_name)
                            .with_value(value),
                    );
                    values.push(value);
                }
            }
            VocabularyVerdict::Unknown => {
                report.add(
                    Finding::warning(
                        "vocabulary-unavailable",
                        "vocabulary validation unavailable",
                    )
                    .with_field(field_name)
                    .with_value(value),
                );
                values.push(value);
            }
        }
    }
    Cell::Present(join_values(&values))
}
