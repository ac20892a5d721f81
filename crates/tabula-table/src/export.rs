//! Hand-off of a finished table to an external sink.
//!
//! The sink itself (authentication, transport, the remote store) lives
//! outside this crate. [`Exporter`] is the seam; [`JsonExporter`] writes the
//! payload to any [`Write`] so it can be piped into whatever performs the
//! upload.

use std::io::Write;

use serde::Serialize;
use thiserror::Error;

use crate::error::TableError;
use crate::matrix::ValueGrid;
use crate::model::Table;

/// Sheet name used when none is configured.
pub const DEFAULT_SHEET: &str = "test_table";

/// Errors raised while handing the payload to a sink.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The payload could not be serialized.
    #[error("failed to serialize export payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload could not be written.
    #[error("failed to write export payload: {0}")]
    Io(#[from] std::io::Error),
}

/// Orientation of [`ValueRange::values`]. Grids are always column-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MajorDimension {
    /// Each inner vector is a column.
    Columns,
}

/// Where and how the table lands in the destination sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Destination sheet name.
    pub sheet: String,
    /// Write column names as the first cell of every column.
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            sheet: DEFAULT_SHEET.to_string(),
            include_headers: true,
        }
    }
}

/// The payload handed to a sink: a range plus the values that fill it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    /// Range descriptor, e.g. `Sheet1!A1:C6`.
    pub range: String,
    /// Orientation of `values`.
    pub major_dimension: MajorDimension,
    /// Cell values.
    pub values: ValueGrid,
}

impl ValueRange {
    /// Compute the range and column-major grid for `table`.
    ///
    /// # Errors
    ///
    /// Any error from [`Table::sheet_range`].
    pub fn from_table(table: &Table, options: &ExportOptions) -> Result<Self, TableError> {
        let range = table.sheet_range(&options.sheet, options.include_headers)?;
        Ok(Self {
            range: range.to_string(),
            major_dimension: MajorDimension::Columns,
            values: table.to_value_grid(options.include_headers),
        })
    }
}

/// A destination for finished tables.
pub trait Exporter {
    /// Deliver one payload to the sink.
    ///
    /// # Errors
    ///
    /// Returns an [`ExportError`] if the payload cannot be delivered.
    fn export(&mut self, values: &ValueRange) -> Result<(), ExportError>;
}

/// Writes each payload as one JSON document followed by a newline.
pub struct JsonExporter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonExporter<W> {
    /// Compact JSON exporter over `writer`.
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
        }
    }

    /// Indent the output for humans.
    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Exporter for JsonExporter<W> {
    fn export(&mut self, values: &ValueRange) -> Result<(), ExportError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, values)?;
        } else {
            serde_json::to_writer(&mut self.writer, values)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
