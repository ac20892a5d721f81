use thiserror::Error;

use crate::model::Table;
use crate::parser::TruncationCause;

/// Structural problems that make a [`Table`] unfit for export.
#[derive(Debug, Error)]
pub enum TableError {
    /// No header cell was seen, so the table has no columns.
    #[error("no table columns were discovered")]
    NoColumns,

    /// The first column has no values, so no range can be derived.
    #[error("column `{column}` has no rows")]
    NoRows {
        /// Name of the empty column.
        column: String,
    },

    /// Columns disagree on their number of rows.
    #[error("column `{column}` has {found} rows, expected {expected}")]
    RaggedColumns {
        /// Name of the first column whose length differs.
        column: String,
        /// Row count of the first column.
        expected: usize,
        /// Row count of the offending column.
        found: usize,
    },

    /// The input ended before the table was complete.
    #[error("table extraction was truncated: {cause}")]
    Truncated {
        /// Why the parse is considered truncated.
        cause: TruncationCause,
        /// Whatever was accumulated before the input ran out.
        partial: Box<Table>,
    },
}
