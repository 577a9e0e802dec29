use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use mdq_model::{Finding, Severity};

use crate::commands::RunOutcome;

pub fn print_summary(outcome: &RunOutcome) {
    println!(
        "Processed {} rows x {} columns -> {}",
        outcome.rows,
        outcome.columns,
        outcome.output_file.display()
    );
    let report = &outcome.report;
    println!(
        "{} errors, {} warnings, {} fixes applied",
        report.error_count(),
        report.warning_count(),
        report.info_count()
    );
    if report.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Field"),
        header_cell("Check"),
        header_cell("Message"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    for finding in &report.findings {
        table.add_row(vec![
            severity_cell(finding.severity),
            Cell::new(finding.field.as_deref().unwrap_or("-")),
            Cell::new(&finding.code),
            Cell::new(&finding.message),
            value_cell(finding),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Fixed(32)),
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
        ]);
    }
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Center);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR").fg(Color::Red),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
        Severity::Info => Cell::new("FIX").fg(Color::Green),
    }
}

fn value_cell(finding: &Finding) -> Cell {
    match finding.value.as_deref() {
        Some(value) => Cell::new(value),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
