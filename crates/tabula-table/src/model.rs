use crate::error::TableError;

/// One discovered header plus its ordered list of cell values down the table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Column {
    /// Header label, exactly as it appeared in the markup.
    pub name: String,
    /// Cell values, index-aligned with row position.
    pub rows: Vec<String>,
}

impl Column {
    /// Create a column with no rows.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Create a column with the given rows.
    #[must_use]
    pub fn with_rows<I, S>(name: impl Into<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            rows: rows.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of values in this column.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Ordered columns, left to right in header discovery order.
///
/// The range descriptor and value grid are derived on demand; see
/// [`Table::sheet_range`] and [`Table::to_value_grid`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Build a table from already-populated columns.
    #[must_use]
    pub const fn from_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Append a column to the right edge of the table.
    pub fn add(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// All columns, left to right.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Row count of the first column, or 0 for a table without columns.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::row_count)
    }

    /// Returns true if no columns were discovered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Append `value` to the column at `index`.
    ///
    /// Returns false, leaving the table untouched, if there is no such column.
    pub(crate) fn push_value(&mut self, index: usize, value: String) -> bool {
        match self.columns.get_mut(index) {
            Some(column) => {
                column.rows.push(value);
                true
            }
            None => false,
        }
    }

    /// Check the structural invariants the parser does not enforce.
    ///
    /// # Errors
    ///
    /// - [`TableError::NoColumns`] if the table is empty
    /// - [`TableError::RaggedColumns`] if any column's row count differs from
    ///   the first column's
    pub fn validate(&self) -> Result<(), TableError> {
        let Some(first) = self.columns.first() else {
            return Err(TableError::NoColumns);
        };
        let expected = first.row_count();
        match self.columns.iter().find(|c| c.row_count() != expected) {
            Some(column) => Err(TableError::RaggedColumns {
                column: column.name.clone(),
                expected,
                found: column.row_count(),
            }),
            None => Ok(()),
        }
    }
}
