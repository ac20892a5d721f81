//! HTML tokenizer for Tabula.
//!
//! # Scope
//!
//! This crate implements a subset of the
//! **HTML Tokenizer** ([WHATWG § 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)):
//!   - Data and tag states, with runs of characters coalesced into text tokens
//!   - Attribute parsing (quoted, unquoted, boolean)
//!   - Comments, bogus comments and DOCTYPE names
//!   - Raw text elements (`script`, `style`, `title`, ...)
//!
//! Every start tag keeps its raw opening markup, and text tokens keep their
//! raw source text.
//!
//! # Not Implemented
//!
//! - Character reference decoding (text stays raw)
//! - Script data escape states
//! - CDATA sections
//! - Tree construction

/// HTML tokenizer for converting input into tokens.
pub mod tokenizer;

pub use tokenizer::{Attribute, HTMLTokenizer, ParseError, Termination, Token};
