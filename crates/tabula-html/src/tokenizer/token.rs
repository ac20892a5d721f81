use core::fmt;

use strum_macros::Display;

/// An attribute on a start tag token.
///
/// Per [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization):
/// "a list of attributes, each of which has a name and a value"
///
/// Values are kept exactly as written; character references are not decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// "each of which has a name"
    pub name: String,
    /// "and a value"
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub const fn new(name: String, value: String) -> Self {
        Self { name, value }
    }
}

/// How the input ended.
///
/// A clean end means the tokenizer was in the data state (or inside raw
/// text) when the input ran out. Any other value means a construct was cut
/// off and its token was lost or left incomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Termination {
    /// Input ended between constructs.
    #[strum(to_string = "clean end of input")]
    Clean,
    /// [§ 13.2.5.8](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    /// "eof-in-tag parse error"
    #[strum(to_string = "end of input inside a tag")]
    EofInTag,
    /// [§ 13.2.5.45](https://html.spec.whatwg.org/multipage/parsing.html#comment-state)
    /// "eof-in-comment parse error"
    #[strum(to_string = "end of input inside a comment")]
    EofInComment,
    /// [§ 13.2.5.53](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
    /// "eof-in-doctype parse error"
    #[strum(to_string = "end of input inside a DOCTYPE")]
    EofInDoctype,
}

impl Termination {
    /// Returns true if the input ended cleanly.
    #[must_use]
    pub const fn is_clean(self) -> bool {
        matches!(self, Self::Clean)
    }
}

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// The tokens handed to the table parser. Character tokens are coalesced into
/// [`Token::Text`] runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// "Start and end tag tokens have a tag name, a self-closing flag, and a
    /// list of attributes, each of which has a name and a value."
    StartTag {
        /// "a tag name", ASCII-lowercased
        name: String,
        /// "a self-closing flag"
        self_closing: bool,
        /// "a list of attributes"
        attributes: Vec<Attribute>,
        /// The opening markup exactly as it appeared, from `<` to `>`.
        raw: String,
    },

    /// End tag token. Attributes on end tags are parsed and discarded.
    EndTag {
        /// "a tag name", ASCII-lowercased
        name: String,
    },

    /// A run of character data between markup constructs.
    Text {
        /// Source text, unmodified.
        raw: String,
    },

    /// "Comment and character tokens have data."
    Comment {
        /// "data"
        data: String,
    },

    /// DOCTYPE token. Only the name is retained.
    Doctype {
        /// "a name"
        name: Option<String>,
    },

    /// End-of-file token signals the end of input.
    EndOfFile(Termination),
}

impl Token {
    /// "When a start or end tag token is created, its self-closing flag must be
    /// unset (its other state is that it be set), and its attributes list must
    /// be empty."
    #[must_use]
    pub const fn new_start_tag() -> Self {
        Self::StartTag {
            name: String::new(),
            self_closing: false,
            attributes: Vec::new(),
            raw: String::new(),
        }
    }

    /// Create a new end tag token with an empty name.
    #[must_use]
    pub const fn new_end_tag() -> Self {
        Self::EndTag {
            name: String::new(),
        }
    }

    /// Create a new comment token with empty data.
    #[must_use]
    pub const fn new_comment() -> Self {
        Self::Comment {
            data: String::new(),
        }
    }

    /// "When a DOCTYPE token is created, its name ... must be marked as missing"
    #[must_use]
    pub const fn new_doctype() -> Self {
        Self::Doctype { name: None }
    }

    /// Returns true if this is an end-of-file token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::EndOfFile(_))
    }

    /// Tag name of a start or end tag token.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::StartTag { name, .. } | Self::EndTag { name } => Some(name.as_str()),
            _ => None,
        }
    }

    /// Value of the named attribute on a start tag token.
    ///
    /// `name` must be lowercase, as attribute names are lowercased during
    /// tokenization.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            Self::StartTag { attributes, .. } => attributes
                .iter()
                .find(|attr| attr.name == name)
                .map(|attr| attr.value.as_str()),
            _ => None,
        }
    }

    /// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    ///
    /// "Append the current input character to the current tag token's tag name."
    ///
    /// # Panics
    ///
    /// Panics if called on a non-tag token, indicating a tokenizer bug.
    pub fn append_to_tag_name(&mut self, c: char) {
        match self {
            Self::StartTag { name, .. } | Self::EndTag { name } => {
                name.push(c);
            }
            _ => panic!("append_to_tag_name called on non-tag token"),
        }
    }

    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    ///
    /// "Set the self-closing flag of the current tag token."
    ///
    /// End tags have no flag to set.
    ///
    /// # Panics
    ///
    /// Panics if called on a non-tag token, indicating a tokenizer bug.
    pub fn set_self_closing(&mut self) {
        match self {
            Self::StartTag { self_closing, .. } => {
                *self_closing = true;
            }
            Self::EndTag { .. } => {}
            _ => panic!("set_self_closing called on non-tag token"),
        }
    }

    /// [§ 13.2.5.32 Before attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state)
    ///
    /// "Start a new attribute in the current tag token."
    ///
    /// # Panics
    ///
    /// Panics if called on a non-tag token, indicating a tokenizer bug.
    pub fn start_new_attribute(&mut self) {
        match self {
            Self::StartTag { attributes, .. } => {
                attributes.push(Attribute::new(String::new(), String::new()));
            }
            Self::EndTag { .. } => {}
            _ => panic!("start_new_attribute called on non-tag token"),
        }
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    ///
    /// "Append the current input character to the current attribute's name."
    ///
    /// # Panics
    ///
    /// Panics if called on a non-tag token, indicating a tokenizer bug.
    pub fn append_to_current_attribute_name(&mut self, c: char) {
        match self {
            Self::StartTag { attributes, .. } => {
                if let Some(attr) = attributes.last_mut() {
                    attr.name.push(c);
                }
            }
            Self::EndTag { .. } => {}
            _ => panic!("append_to_current_attribute_name called on non-tag token"),
        }
    }

    /// [§ 13.2.5.36 Attribute value (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(double-quoted)-state)
    ///
    /// "Append the current input character to the current attribute's value."
    ///
    /// # Panics
    ///
    /// Panics if called on a non-tag token, indicating a tokenizer bug.
    pub fn append_to_current_attribute_value(&mut self, c: char) {
        match self {
            Self::StartTag { attributes, .. } => {
                if let Some(attr) = attributes.last_mut() {
                    attr.value.push(c);
                }
            }
            Self::EndTag { .. } => {}
            _ => panic!("append_to_current_attribute_value called on non-tag token"),
        }
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    ///
    /// "if there is already an attribute on the token with the exact same name,
    /// then this is a duplicate-attribute parse error and the new attribute must
    /// be removed from the token."
    ///
    /// Applied once the tag is complete. Returns true if anything was removed.
    pub fn remove_duplicate_attributes(&mut self) -> bool {
        let Self::StartTag { attributes, .. } = self else {
            return false;
        };
        let before = attributes.len();
        let mut seen: Vec<String> = Vec::with_capacity(before);
        attributes.retain(|attr| {
            if seen.contains(&attr.name) {
                false
            } else {
                seen.push(attr.name.clone());
                true
            }
        });
        attributes.len() != before
    }

    /// [§ 13.2.5.45 Comment state](https://html.spec.whatwg.org/multipage/parsing.html#comment-state)
    ///
    /// "Append the current input character to the comment token's data."
    ///
    /// # Panics
    ///
    /// Panics if called on a non-comment token, indicating a tokenizer bug.
    pub fn append_to_comment(&mut self, c: char) {
        match self {
            Self::Comment { data } => {
                data.push(c);
            }
            _ => panic!("append_to_comment called on non-comment token"),
        }
    }

    /// [§ 13.2.5.55 DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-name-state)
    ///
    /// "Append the current input character to the current DOCTYPE token's name."
    ///
    /// # Panics
    ///
    /// Panics if called on a non-DOCTYPE token, indicating a tokenizer bug.
    pub fn append_to_doctype_name(&mut self, c: char) {
        match self {
            Self::Doctype { name } => {
                name.get_or_insert_with(String::new).push(c);
            }
            _ => panic!("append_to_doctype_name called on non-DOCTYPE token"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartTag { raw, .. } => write!(f, "{raw}"),
            Self::EndTag { name } => write!(f, "</{name}>"),
            Self::Text { raw } => write!(f, "Text({raw:?})"),
            Self::Comment { data } => write!(f, "<!--{data}-->"),
            Self::Doctype { name } => match name {
                Some(n) => write!(f, "DOCTYPE {n}"),
                None => write!(f, "DOCTYPE"),
            },
            Self::EndOfFile(termination) => write!(f, "EOF ({termination})"),
        }
    }
}
