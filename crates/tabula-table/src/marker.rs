//! Selection of the data cells admitted into the table.
//!
//! The table parser consults the marker for `td` start tags only; header
//! cells are never data.

use tabula_html::Token;

/// Attribute carried by qualifying data cells unless configured otherwise.
pub const DEFAULT_MARKER_ATTRIBUTE: &str = "class";

/// Attribute value carried by qualifying data cells unless configured otherwise.
pub const DEFAULT_MARKER_VALUE: &str = "confluenceTd";

/// How a cell's opening tag is checked for the marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerMatch {
    /// Compare the parsed attribute. Insensitive to attribute order, quoting
    /// style and name case. A `class` attribute matches when the marker value
    /// is one of its whitespace-separated classes.
    #[default]
    Attribute,
    /// Look for the literal text `attribute="value"` in the raw opening markup.
    RawMarkup,
}

/// Decides which data cells are admitted into the table.
///
/// Cells whose opening tag lacks the marker are ignored entirely, including
/// any text nested inside them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellMarker {
    attribute: String,
    value: String,
    mode: MarkerMatch,
}

impl Default for CellMarker {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER_ATTRIBUTE, DEFAULT_MARKER_VALUE)
    }
}

impl CellMarker {
    /// Marker matching `attribute` against `value` by parsed attribute.
    ///
    /// Attribute names are compared ASCII case-insensitively.
    #[must_use]
    pub fn new(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into().to_ascii_lowercase(),
            value: value.into(),
            mode: MarkerMatch::Attribute,
        }
    }

    /// Switch the matching strategy.
    #[must_use]
    pub fn with_mode(mut self, mode: MarkerMatch) -> Self {
        self.mode = mode;
        self
    }

    /// Marker attribute name (lowercase).
    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Marker attribute value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Matching strategy in use.
    #[must_use]
    pub const fn mode(&self) -> MarkerMatch {
        self.mode
    }

    /// The literal searched for in [`MarkerMatch::RawMarkup`] mode.
    #[must_use]
    pub fn raw_marker(&self) -> String {
        format!("{}=\"{}\"", self.attribute, self.value)
    }

    /// Returns true if `token` is a start tag carrying the marker.
    #[must_use]
    pub fn qualifies(&self, token: &Token) -> bool {
        match self.mode {
            MarkerMatch::Attribute => token
                .attribute(&self.attribute)
                .is_some_and(|value| self.value_matches(value)),
            MarkerMatch::RawMarkup => match token {
                Token::StartTag { raw, .. } => raw.contains(&self.raw_marker()),
                _ => false,
            },
        }
    }

    fn value_matches(&self, value: &str) -> bool {
        if value == self.value {
            return true;
        }
        self.attribute == "class" && value.split_ascii_whitespace().any(|class| class == self.value)
    }
}
