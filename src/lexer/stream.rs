use std::{fmt::Debug, hash::Hash};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::tokens::Token;

/// The contract between the parser and whatever produces its tokens.
///
/// The engine only ever looks one token ahead. Errors raised by the stream
/// are of the host's own type and travel through the parser untouched; the
/// engine's own [`Error`] is converted into it with `From`.
pub trait TokenStream {
    type Kind: Eq + Hash + Clone + Debug;
    type Error: From<Error>;

    /// Consumes and returns the next token.
    fn next(&mut self) -> Result<Token<Self::Kind>, Self::Error>;

    /// Returns the next token without consuming it.
    fn peek(&mut self) -> Result<Token<Self::Kind>, Self::Error>;
}

/// A token stream over an already tokenized input.
///
/// The buffer always ends with an end-of-input token; once it is reached
/// every further `next` keeps returning it.
#[derive(Debug, Clone)]
pub struct TokenBuffer<K> {
    tokens: Vec<Token<K>>,
    pos: usize,
}

impl<K> TokenBuffer<K> {
    pub fn new(mut tokens: Vec<Token<K>>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let end = tokens
                .last()
                .map(|token| token.span.end)
                .unwrap_or_else(|| Position::new(1, 1));
            tokens.push(Token::eof(end));
        }

        TokenBuffer { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token<K> {
        &self.tokens[self.pos]
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> &Token<K> {
        let token = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[token]
    }

    /// Start of the next token.
    pub fn position(&self) -> Position {
        self.current_token().span.start
    }

    /// Number of tokens left before end of input.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - 1 - self.pos
    }

    pub fn has_tokens(&self) -> bool {
        !self.current_token().is_eof()
    }
}

impl<K: Clone + PartialEq + Debug> TokenBuffer<K> {
    pub fn peek_kind(&self) -> Option<K> {
        self.current_token().kind.clone()
    }

    pub fn next_is(&self, kind: &K) -> bool {
        self.current_token().is(kind)
    }

    /// Consumes the next token if it is of `expected_kind`, fails with
    /// `ExpectedToken` otherwise.
    pub fn expect(&mut self, expected_kind: &K) -> Result<Token<K>, Error> {
        if !self.next_is(expected_kind) {
            return Err(self.expected(expected_kind));
        }

        Ok(self.advance().clone())
    }

    /// The `ExpectedToken` error for the next token, without consuming it.
    pub fn expected(&self, expected_kind: &K) -> Error {
        let token = self.current_token();
        Error::new(
            ErrorImpl::ExpectedToken {
                expected: format!("{:?}", expected_kind),
                found: token.value.clone(),
            },
            token.span.start,
        )
    }
}

impl<K> From<Vec<Token<K>>> for TokenBuffer<K> {
    fn from(tokens: Vec<Token<K>>) -> Self {
        TokenBuffer::new(tokens)
    }
}

impl<K: Eq + Hash + Clone + Debug> TokenStream for TokenBuffer<K> {
    type Kind = K;
    type Error = Error;

    fn next(&mut self) -> Result<Token<K>, Error> {
        Ok(self.advance().clone())
    }

    fn peek(&mut self) -> Result<Token<K>, Error> {
        Ok(self.current_token().clone())
    }
}
