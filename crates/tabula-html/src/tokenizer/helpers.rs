//! Helper functions for the HTML tokenizer.
//!
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! This module contains utility functions used throughout the tokenizer:
//! - State transitions ("Switch to", "Reconsume in")
//! - Input/character handling ("Consume the next input character")
//! - Token emission ("Emit the current token")
//! - Raw text element helpers
//! - Current-token mutation shortcuts

use tabula_common::warning::warn_once;

use super::machine::{HTMLTokenizer, ParseError, TokenizerState};
use super::token::{Termination, Token};

/// [§ 13.2.6.2](https://html.spec.whatwg.org/multipage/parsing.html#generic-rcdata-element-parsing-algorithm)
/// [§ 13.2.6.3](https://html.spec.whatwg.org/multipage/parsing.html#generic-raw-text-element-parsing-algorithm)
///
/// Elements whose content is character data up to the matching end tag.
const RAW_TEXT_ELEMENTS: [&str; 8] = [
    "script", "style", "textarea", "title", "xmp", "iframe", "noembed", "noframes",
];

// =============================================================================
// State Transition Helpers
// =============================================================================

impl HTMLTokenizer {
    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
    ///
    /// "Switch to the X state"
    ///
    /// Transitions to a new state. The next character will be consumed on the
    /// next iteration of the main loop.
    pub(super) const fn switch_to(&mut self, new_state: TokenizerState) {
        self.state = new_state;
    }

    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
    ///
    /// "Reconsume in the X state"
    ///
    /// Transitions to a new state without consuming the current character.
    /// The same character will be processed again in the new state.
    pub(super) const fn reconsume_in(&mut self, new_state: TokenizerState) {
        self.reconsume = true;
        self.state = new_state;
    }
}

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl HTMLTokenizer {
    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
    ///
    /// "Consume the next input character"
    ///
    /// Returns the character at the current position and advances the position.
    /// Returns None if we've reached the end of input.
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.input[self.current_pos..].chars().next()?;
        self.current_pos += c.len_utf8();
        Some(c)
    }

    /// Peek at a codepoint at the given offset from the current position without
    /// consuming it.
    #[must_use]
    pub fn peek_codepoint(&self, offset: usize) -> Option<char> {
        self.input[self.current_pos..].chars().nth(offset)
    }

    /// "If the next few characters are..."
    ///
    /// Check if the next few characters match the target string exactly.
    #[must_use]
    pub fn next_few_characters_are(&self, target: &str) -> bool {
        self.input[self.current_pos..].starts_with(target)
    }

    /// [§ 13.2.5.42 Markup declaration open state](https://html.spec.whatwg.org/multipage/parsing.html#markup-declaration-open-state)
    ///
    /// "ASCII case-insensitive match for the word 'DOCTYPE'"
    #[must_use]
    pub fn next_few_characters_are_case_insensitive(&self, target: &str) -> bool {
        self.input[self.current_pos..]
            .get(..target.len())
            .is_some_and(|ahead| ahead.eq_ignore_ascii_case(target))
    }

    /// Consume the given ASCII string from the input.
    /// Caller must have already verified the characters are present.
    pub(super) const fn consume_string(&mut self, target: &str) {
        self.current_pos += target.len();
    }

    /// [§ 12.1.4 ASCII whitespace](https://infra.spec.whatwg.org/#ascii-whitespace)
    ///
    /// "U+0009 CHARACTER TABULATION (tab)"
    /// "U+000A LINE FEED (LF)"
    /// "U+000C FORM FEED (FF)"
    /// "U+0020 SPACE"
    pub(super) const fn is_whitespace_char(input_char: char) -> bool {
        matches!(input_char, ' ' | '\t' | '\n' | '\x0C')
    }
}

// =============================================================================
// Token Emission Helpers
// =============================================================================

impl HTMLTokenizer {
    /// Emit any pending character data as a single text token.
    pub(super) fn flush_text(&mut self) {
        if !self.text_buffer.is_empty() {
            let raw = std::mem::take(&mut self.text_buffer);
            self.token_stream.push(Token::Text { raw });
        }
    }

    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
    ///
    /// "Emit the current token" - adds the token to the output stream, after
    /// any character data that preceded it.
    pub(super) fn emit_token(&mut self) {
        let Some(mut token) = self.current_token.take() else {
            return;
        };
        self.flush_text();

        if token.remove_duplicate_attributes() {
            self.log_parse_error("duplicate-attribute");
        }

        if let Token::StartTag {
            name,
            self_closing,
            raw,
            ..
        } = &mut token
        {
            raw.push_str(&self.input[self.tag_start..self.current_pos]);

            // NOTE: The tree builder normally switches the tokenizer into the
            // RCDATA/RAWTEXT/script data states. There is no tree builder here,
            // so the tokenizer does it on emission.
            if !*self_closing && RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
                self.raw_text_element = Some(name.clone());
                self.switch_to(TokenizerState::RawText);
            }
        }

        self.token_stream.push(token);
    }

    /// "Emit an end-of-file token."
    pub(super) fn emit_eof_token(&mut self, termination: Termination) {
        self.flush_text();
        self.token_stream.push(Token::EndOfFile(termination));
        self.at_eof = true;
    }

    /// "This is an eof-in-tag parse error. Emit an end-of-file token."
    ///
    /// The unfinished tag is dropped.
    pub(super) fn eof_in_tag(&mut self) {
        self.log_parse_error("eof-in-tag");
        self.current_token = None;
        self.emit_eof_token(Termination::EofInTag);
    }

    /// "This is an eof-in-doctype parse error. ... Emit that DOCTYPE token.
    /// Emit an end-of-file token."
    pub(super) fn eof_in_doctype(&mut self) {
        self.log_parse_error("eof-in-doctype");
        self.emit_token();
        self.emit_eof_token(Termination::EofInDoctype);
    }
}

// =============================================================================
// Raw Text Helpers
// =============================================================================

impl HTMLTokenizer {
    /// [§ 13.2.5.11 RCDATA end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-name-state)
    ///
    /// "An appropriate end tag token is an end tag token whose tag name matches
    /// the tag name of the last start tag to have been emitted from this
    /// tokenizer, if any."
    ///
    /// Called on a `<` inside raw text: looks ahead for `/name` followed by
    /// whitespace, `/`, `>` or the end of input.
    pub(super) fn is_appropriate_end_tag_ahead(&self) -> bool {
        let Some(name) = self.raw_text_element.as_deref() else {
            return false;
        };
        let Some(after_solidus) = self.input[self.current_pos..].strip_prefix('/') else {
            return false;
        };
        let matches_name = after_solidus
            .get(..name.len())
            .is_some_and(|candidate| candidate.eq_ignore_ascii_case(name));
        if !matches_name {
            return false;
        }
        match after_solidus[name.len()..].chars().next() {
            None | Some('/' | '>') => true,
            Some(c) => Self::is_whitespace_char(c),
        }
    }
}

// =============================================================================
// Current Token Helpers
// =============================================================================

impl HTMLTokenizer {
    pub(super) fn append_to_tag_name(&mut self, c: char) {
        if let Some(token) = self.current_token.as_mut() {
            token.append_to_tag_name(c);
        }
    }

    pub(super) fn append_to_attribute_name(&mut self, c: char) {
        if let Some(token) = self.current_token.as_mut() {
            token.append_to_current_attribute_name(c);
        }
    }

    pub(super) fn append_to_attribute_value(&mut self, c: char) {
        if let Some(token) = self.current_token.as_mut() {
            token.append_to_current_attribute_value(c);
        }
    }

    pub(super) fn append_to_comment(&mut self, c: char) {
        if let Some(token) = self.current_token.as_mut() {
            token.append_to_comment(c);
        }
    }
}

// =============================================================================
// Error Handling
// =============================================================================

impl HTMLTokenizer {
    /// [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
    ///
    /// Records a parse error and reports it through the tabula-common warning
    /// system. Parse errors are not fatal - the tokenizer recovers and continues.
    pub(super) fn log_parse_error(&mut self, code: &'static str) {
        let position = self.current_pos;
        warn_once(
            "HTML Tokenizer",
            &format!("{code} parse error at position {position}"),
        );
        self.parse_errors.push(ParseError { code, position });
    }
}
