use crate::cell::Cell;

/// A named, ordered column of cells.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }
}

/// An in-memory table: ordered named columns sharing one row count.
///
/// Column order is the input's insertion order and is preserved on output.
/// Rows are exposed as lightweight [`Record`] views rather than a structural
/// transpose, so the row phase reads through the same storage the column
/// phase mutated.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> &Column {
        &self.columns[index]
    }

    pub fn column_mut(&mut self, index: usize) -> &mut Column {
        &mut self.columns[index]
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Row count, shared across all columns.
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, |column| column.cells.len())
    }

    pub fn record(&self, row: usize) -> Record<'_> {
        Record { table: self, row }
    }

    /// Replace one cell, addressed by column name and row index.
    ///
    /// Returns false when the column does not exist or the row is out of
    /// bounds.
    pub fn set(&mut self, name: &str, row: usize, cell: Cell) -> bool {
        let Some(column) = self.columns.iter_mut().find(|column| column.name == name) else {
            return false;
        };
        let Some(slot) = column.cells.get_mut(row) else {
            return false;
        };
        *slot = cell;
        true
    }
}

/// A read-only view of one row across all columns.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    table: &'a Table,
    row: usize,
}

impl<'a> Record<'a> {
    pub fn row(&self) -> usize {
        self.row
    }

    /// Iterate `(field name, cell)` pairs in column order.
    pub fn fields(self) -> impl Iterator<Item = (&'a str, &'a Cell)> {
        let row = self.row;
        self.table
            .columns
            .iter()
            .map(move |column| (column.name.as_str(), &column.cells[row]))
    }

    pub fn field_names(self) -> impl Iterator<Item = &'a str> {
        self.table.columns.iter().map(|column| column.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&'a Cell> {
        self.table
            .column_by_name(name)
            .map(|column| &column.cells[self.row])
    }
}
