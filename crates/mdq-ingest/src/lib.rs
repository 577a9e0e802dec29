//! CSV ingestion and serialization.
//!
//! Every field is read as an uninterpreted string so numeric-looking values
//! like an issue date of "1998" are never coerced. Empty fields ingest as
//! [`Cell::Missing`]. Column order and row order are preserved exactly on
//! output.

use std::fs;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use thiserror::Error;
use tracing::debug;

use mdq_model::{Cell, Column, Table};

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("input has no header row")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, IngestError>;

/// Read a UTF-8 CSV file into a [`Table`].
pub fn read_table(path: &Path) -> Result<Table> {
    let file = fs::File::open(path)?;
    let table = read_table_from_reader(file)?;
    debug!(
        path = %path.display(),
        columns = table.width(),
        rows = table.height(),
        "table read"
    );
    Ok(table)
}

/// Read a CSV stream into a [`Table`].
pub fn read_table_from_reader<R: io::Read>(reader: R) -> Result<Table> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(IngestError::EmptyInput);
    }
    let mut columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| Column::new(normalize_header(index, header), Vec::new()))
        .collect();
    for record in reader.records() {
        let record = record?;
        for (index, column) in columns.iter_mut().enumerate() {
            let raw = record.get(index).unwrap_or("");
            column.cells.push(Cell::from_raw(raw));
        }
    }
    Ok(Table::new(columns))
}

/// Write a [`Table`] as CSV.
///
/// The table is serialized fully in memory first and written in one shot, so
/// an interrupted run never leaves a partial output file behind.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let buffer = serialize_table(table)?;
    fs::write(path, buffer)?;
    debug!(
        path = %path.display(),
        columns = table.width(),
        rows = table.height(),
        "table written"
    );
    Ok(())
}

/// Serialize a [`Table`] to CSV bytes.
pub fn serialize_table(table: &Table) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(table.columns().iter().map(|column| column.name.as_str()))?;
    for row in 0..table.height() {
        writer.write_record(
            table
                .columns()
                .iter()
                .map(|column| column.cells[row].as_output()),
        )?;
    }
    writer
        .into_inner()
        .map_err(|error| IngestError::Io(error.into_error()))
}

/// Strip a UTF-8 byte-order mark from the first header.
fn normalize_header(index: usize, header: &str) -> String {
    if index == 0 {
        header.trim_start_matches('\u{feff}').to_string()
    } else {
        header.to_string()
    }
}
