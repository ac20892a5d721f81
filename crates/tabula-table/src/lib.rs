//! Table extraction for Tabula.
//!
//! Turns the token stream produced by `tabula-html` into a column-oriented
//! [`Table`], then derives what a spreadsheet-style sink needs from it:
//!
//! - **Table State Machine** ([`TableParser`]) - tracks header vs. data cells,
//!   multi-fragment cell text and row wraparound
//! - **Data Model** ([`Table`], [`Column`]) plus post-parse validation
//! - **Range Calculator** ([`Table::sheet_range`]) - `Sheet!A1:C6` descriptors
//! - **Matrix Converter** ([`Table::to_value_grid`]) - column-major value grid
//! - **Export** ([`Exporter`], [`JsonExporter`]) - hand-off to an external sink
//!
//! # Example
//!
//! ```
//! use tabula_table::{CellMarker, extract_table};
//!
//! let html = r#"<table>
//!   <tr><th>Name</th><th>Code</th></tr>
//!   <tr><td class="confluenceTd">Alpha</td><td class="confluenceTd">1</td></tr>
//! </table>"#;
//!
//! let table = extract_table(html, &CellMarker::default()).into_table().unwrap();
//! assert_eq!(table.sheet_range("Sheet1", true).unwrap().to_string(), "Sheet1!A1:B2");
//! assert_eq!(table.to_value_grid(false), vec![vec!["Alpha "], vec!["1 "]]);
//! ```

/// Error types for table validation and extraction.
pub mod error;
/// Export payload and the exporter seam.
pub mod export;
/// Qualifying-cell marker matching.
pub mod marker;
/// Column-major value grid conversion.
pub mod matrix;
/// In-memory table model.
pub mod model;
/// The token-driven table state machine.
pub mod parser;
/// Spreadsheet range descriptors.
pub mod range;

pub use error::TableError;
pub use export::{ExportError, ExportOptions, Exporter, JsonExporter, MajorDimension, ValueRange};
pub use marker::{CellMarker, MarkerMatch};
pub use matrix::ValueGrid;
pub use model::{Column, Table};
pub use parser::{
    Extraction, ParseIssue, ParseTermination, TableParser, TruncationCause, normalize_cell_text,
};
pub use range::{SheetRange, column_letters};

use tabula_html::HTMLTokenizer;

/// Tokenize `html` and run the table state machine over the result.
///
/// Never fails: truncation and anomalies are reported on the returned
/// [`Extraction`].
#[must_use]
pub fn extract_table(html: &str, marker: &CellMarker) -> Extraction {
    let mut tokenizer = HTMLTokenizer::new(html.to_string());
    tokenizer.run();
    TableParser::new(tokenizer.into_tokens(), marker.clone()).run()
}
