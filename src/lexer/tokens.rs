use std::fmt::Display;

use crate::{Position, Span};

/// A single token handed to the parser.
///
/// `kind` is `None` for the end-of-input token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<K> {
    pub kind: Option<K>,
    pub value: String,
    pub span: Span,
}

impl<K> Token<K> {
    pub fn new(kind: K, value: impl Into<String>, span: Span) -> Self {
        Token {
            kind: Some(kind),
            value: value.into(),
            span,
        }
    }

    /// The end-of-input token, positioned at `position`.
    pub fn eof(position: Position) -> Self {
        Token {
            kind: None,
            value: String::from("EOF"),
            span: Span::new(position, position),
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind.is_none()
    }
}

impl<K: PartialEq> Token<K> {
    pub fn is(&self, kind: &K) -> bool {
        self.kind.as_ref() == Some(kind)
    }

    pub fn is_one_of_many(&self, kinds: &[K]) -> bool {
        kinds.iter().any(|kind| self.is(kind))
    }
}

impl<K> Display for Token<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
