//! HTML tokenizer module.
//!
//! Implements a subset of [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//! of the WHATWG HTML Living Standard.

/// HTML tokenizer state machine implementation.
pub mod machine;
/// Helper methods for tokenizer state transitions.
pub mod helpers;
/// Token types produced by the tokenizer.
pub mod token;

pub use machine::{HTMLTokenizer, ParseError, TokenizerState};
pub use token::{Attribute, Termination, Token};
