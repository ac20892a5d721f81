//! The token-driven table state machine.
//!
//! The parser walks the token stream once, front to back. Header cells
//! (`th`) contribute columns, qualifying data cells (`td` carrying the
//! [`CellMarker`]) contribute values, and everything else is transparent.
//! A `th` never contributes a value, marked or not.
//!
//! Values are distributed round-robin: after the last column of a row is
//! filled, the active column wraps back to 0 and the next row begins. Row
//! boundaries in the markup (`tr`) play no part in this.

use core::fmt;

use tabula_common::warning::warn_once;
use tabula_html::{Termination, Token};

use crate::error::TableError;
use crate::marker::CellMarker;
use crate::model::{Column, Table};

/// Returns true for the tags that open and close table cells.
fn is_cell_tag(name: &str) -> bool {
    matches!(name, "td" | "th")
}

/// Normalize the accumulated text of a qualifying cell.
///
/// Every fragment was appended with one trailing space, so the buffer always
/// ends in a space. Pairs of spaces are collapsed left to right without
/// overlap (three spaces become two), and the trailing space is kept: the
/// sink receives exactly this text.
#[must_use]
pub fn normalize_cell_text(buffer: &str) -> String {
    buffer.replace("  ", " ")
}

/// A recoverable anomaly found while building the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// What went wrong.
    pub message: String,
    /// Index into the token stream where this was encountered.
    pub token_index: usize,
}

/// Why an extraction is considered incomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruncationCause {
    /// The tokenizer hit end of input in the middle of a construct.
    Tokenizer(Termination),
    /// The input ended while a header or data cell was still open.
    UnclosedCell,
    /// The token stream had no end-of-file token.
    MissingEndOfFile,
}

impl fmt::Display for TruncationCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tokenizer(termination) => write!(f, "{termination}"),
            Self::UnclosedCell => write!(f, "end of input inside an open table cell"),
            Self::MissingEndOfFile => write!(f, "token stream ended without end of input"),
        }
    }
}

/// How parsing finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseTermination {
    /// The stream ended cleanly with no cell left open.
    Clean,
    /// The table may be missing trailing values.
    Truncated(TruncationCause),
}

/// The result of running the table state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// The table as accumulated.
    pub table: Table,
    /// Whether the input was complete.
    pub termination: ParseTermination,
    /// Anomalies absorbed along the way.
    pub issues: Vec<ParseIssue>,
}

impl Extraction {
    /// Returns true if parsing reached a clean end of input.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        matches!(self.termination, ParseTermination::Clean)
    }

    /// Take the table, insisting on a clean and structurally valid result.
    ///
    /// # Errors
    ///
    /// - [`TableError::Truncated`] (carrying the partial table) if the input
    ///   was truncated
    /// - any error from [`Table::validate`]
    pub fn into_table(self) -> Result<Table, TableError> {
        if let ParseTermination::Truncated(cause) = self.termination {
            return Err(TableError::Truncated {
                cause,
                partial: Box::new(self.table),
            });
        }
        self.table.validate()?;
        Ok(self.table)
    }

    /// Take the table, accepting a truncated parse.
    ///
    /// # Errors
    ///
    /// Any error from [`Table::validate`].
    pub fn into_partial_table(self) -> Result<Table, TableError> {
        self.table.validate()?;
        Ok(self.table)
    }
}

/// Builds a [`Table`] from a token stream.
pub struct TableParser {
    marker: CellMarker,

    /// Input tokens from the tokenizer.
    tokens: Vec<Token>,

    /// Current position in token stream.
    token_index: usize,

    table: Table,

    /// True while inside a `th` cell.
    in_header_cell: bool,

    /// True while inside a qualifying cell.
    in_data_cell: bool,

    /// Column that receives the next completed cell value.
    active_column_index: usize,

    /// Column count minus one, captured when a qualifying cell opens.
    row_width: usize,

    /// Text fragments of the open qualifying cell, each followed by a space.
    cell_buffer: String,

    /// Columns created by the open header cell.
    header_fragments: usize,

    issues: Vec<ParseIssue>,
}

impl TableParser {
    /// Create a new parser from a token stream.
    #[must_use]
    pub const fn new(tokens: Vec<Token>, marker: CellMarker) -> Self {
        Self {
            marker,
            tokens,
            token_index: 0,
            table: Table::new(),
            in_header_cell: false,
            in_data_cell: false,
            active_column_index: 0,
            row_width: 0,
            cell_buffer: String::new(),
            header_fragments: 0,
            issues: Vec::new(),
        }
    }

    /// Consume tokens up to end of input and return what was built.
    #[must_use]
    pub fn run(mut self) -> Extraction {
        let tokens = std::mem::take(&mut self.tokens);
        let mut end = None;

        for (index, token) in tokens.iter().enumerate() {
            self.token_index = index;
            if let Token::EndOfFile(termination) = token {
                end = Some(*termination);
                break;
            }
            self.process_token(token);
        }

        let termination = match end {
            None => ParseTermination::Truncated(TruncationCause::MissingEndOfFile),
            Some(termination) if !termination.is_clean() => {
                ParseTermination::Truncated(TruncationCause::Tokenizer(termination))
            }
            Some(_) if self.in_header_cell || self.in_data_cell => {
                ParseTermination::Truncated(TruncationCause::UnclosedCell)
            }
            Some(_) => ParseTermination::Clean,
        };

        if let ParseTermination::Truncated(cause) = termination {
            warn_once("Table Parser", &format!("extraction truncated: {cause}"));
        }

        Extraction {
            table: self.table,
            termination,
            issues: self.issues,
        }
    }

    fn process_token(&mut self, token: &Token) {
        match token {
            // A self-closing cell never receives its end tag, so it opens nothing.
            Token::StartTag {
                name,
                self_closing: false,
                ..
            } if is_cell_tag(name) => {
                self.handle_cell_start(token, name == "th");
            }
            Token::Text { raw } => self.handle_text(raw),
            Token::EndTag { name } if is_cell_tag(name) => self.handle_cell_end(),
            _ => {}
        }
    }

    fn handle_cell_start(&mut self, token: &Token, is_header: bool) {
        if is_header {
            self.in_header_cell = true;
            self.header_fragments = 0;
        } else if self.marker.qualifies(token) {
            if self.in_data_cell {
                self.parse_warning("qualifying cell opened inside another; its pending text was discarded");
            }
            self.row_width = self.table.column_count().saturating_sub(1);
            self.in_data_cell = true;
            self.cell_buffer.clear();
        }
    }

    fn handle_text(&mut self, raw: &str) {
        // NOTE: A header is expected to carry its whole name in one text
        // fragment. Each further fragment still becomes its own column.
        if self.in_header_cell {
            self.header_fragments += 1;
            if self.header_fragments == 2 {
                self.parse_warning("header cell split across several text fragments");
            }
            self.table.add(Column::new(raw));
        }
        if self.in_data_cell {
            self.cell_buffer.push_str(raw);
            self.cell_buffer.push(' ');
        }
    }

    fn handle_cell_end(&mut self) {
        if self.in_data_cell {
            let value = normalize_cell_text(&std::mem::take(&mut self.cell_buffer));
            if self.table.push_value(self.active_column_index, value) {
                self.active_column_index += 1;
                if self.active_column_index > self.row_width {
                    self.active_column_index = 0;
                }
            } else {
                self.parse_warning("qualifying cell closed before any header cell; value dropped");
            }
        }
        self.in_header_cell = false;
        self.in_data_cell = false;
    }

    /// Record an absorbed anomaly.
    fn parse_warning(&mut self, message: &str) {
        warn_once("Table Parser", message);
        self.issues.push(ParseIssue {
            message: message.to_string(),
            token_index: self.token_index,
        });
    }
}
