use core::fmt;

use crate::error::TableError;
use crate::model::Table;

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Spreadsheet column letters for a 1-based column number.
///
/// Bijective base-26: 1 → `A`, 26 → `Z`, 27 → `AA`, 702 → `ZZ`, 703 → `AAA`.
/// Column 0 has no letters and yields an empty string.
#[must_use]
pub fn column_letters(column: usize) -> String {
    let mut letters = Vec::new();
    let mut remaining = column;
    while remaining > 0 {
        remaining -= 1;
        letters.push(char::from(ALPHABET[remaining % 26]));
        remaining /= 26;
    }
    letters.iter().rev().collect()
}

/// A rectangular region anchored at `A1`, written as `sheet!A1:<col><row>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRange {
    sheet: String,
    columns: usize,
    rows: usize,
}

impl SheetRange {
    /// Top-left corner of every range.
    pub const TOP_LEFT: &'static str = "A1";

    /// Range spanning `columns` × `rows` cells on `sheet`.
    #[must_use]
    pub fn new(sheet: impl Into<String>, columns: usize, rows: usize) -> Self {
        Self {
            sheet: sheet.into(),
            columns,
            rows,
        }
    }

    /// Destination sheet name.
    #[must_use]
    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    /// Width in columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Height in rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Bottom-right corner, e.g. `C6`.
    #[must_use]
    pub fn bottom_right(&self) -> String {
        format!("{}{}", column_letters(self.columns), self.rows)
    }
}

impl fmt::Display for SheetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}!{}:{}",
            self.sheet,
            Self::TOP_LEFT,
            self.bottom_right()
        )
    }
}

impl Table {
    /// Range covering this table on `sheet`.
    ///
    /// The height is the first column's row count, plus one when the header
    /// names are written as an extra leading cell.
    ///
    /// # Errors
    ///
    /// - [`TableError::NoColumns`] if the table is empty
    /// - [`TableError::NoRows`] if the first column has no values
    pub fn sheet_range(&self, sheet: &str, include_headers: bool) -> Result<SheetRange, TableError> {
        let first = self.columns().first().ok_or(TableError::NoColumns)?;
        if first.rows.is_empty() {
            return Err(TableError::NoRows {
                column: first.name.clone(),
            });
        }
        let rows = first.row_count() + usize::from(include_headers);
        Ok(SheetRange::new(sheet, self.column_count(), rows))
    }
}
