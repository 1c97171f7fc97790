//! The Pratt parsing engine.
//!
//! This module contains the `Parser` struct, which owns a token stream and
//! three lookup tables keyed by token kind:
//! - NUD (null denotation) handlers for tokens in prefix position
//! - LED (left denotation) handlers for tokens in infix/postfix position
//! - Binding powers deciding how far an infix loop keeps folding
//!
//! Handlers receive the parser itself and recurse into
//! [`Parser::parse_with`] to read sub-expressions.

use std::{collections::HashMap, rc::Rc};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{stream::TokenStream, tokens::Token},
};

use super::{
    builder::Builder,
    lookups::{
        BPLookup, BindingPower, LEDHandler, LEDLookup, LedInfo, NUDHandler, NUDLookup, NudInfo,
        Terminal, INFINITY, NEG_INFINITY,
    },
    stop::StopHandle,
};

/// Per-call settings for [`Parser::parse_with`].
pub struct ParseOptions<K, V, C> {
    /// Host payload handed to every handler of this call.
    pub context: Option<C>,
    /// Stop scope to join. A fresh one is created when `None`.
    pub stop: Option<StopHandle<V>>,
    /// Every condition must permit continuation for the loop to go on.
    /// An empty list means `[Terminal::Power(0)]`.
    pub terminals: Vec<Terminal<K>>,
}

impl<K, V, C> ParseOptions<K, V, C> {
    pub fn new() -> Self {
        ParseOptions {
            context: None,
            stop: None,
            terminals: vec![],
        }
    }

    pub fn with_context(mut self, context: C) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_stop(mut self, stop: StopHandle<V>) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Adds one termination condition.
    pub fn terminal(mut self, terminal: impl Into<Terminal<K>>) -> Self {
        self.terminals.push(terminal.into());
        self
    }

    pub fn with_terminals(mut self, terminals: Vec<Terminal<K>>) -> Self {
        self.terminals = terminals;
        self
    }
}

impl<K, V, C> Default for ParseOptions<K, V, C> {
    fn default() -> Self {
        ParseOptions::new()
    }
}

/// A Pratt parser over the token stream `S`, producing values of type `V`
/// and threading an optional host context `C` to its handlers.
pub struct Parser<S: TokenStream, V, C = ()> {
    /// The token stream being parsed
    stream: S,
    /// Lookup table for null denotation (prefix) handlers
    nud_lookup: NUDLookup<S, V, C>,
    /// Lookup table for left denotation (infix) handlers
    led_lookup: LEDLookup<S, V, C>,
    /// Lookup table for binding powers
    binding_power_lookup: BPLookup<S::Kind>,
}

impl<S: TokenStream, V, C> Parser<S, V, C> {
    /// Creates a parser with empty lookup tables.
    pub fn new(stream: S) -> Self {
        Parser {
            stream,
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    pub fn stream(&self) -> &S {
        &self.stream
    }

    pub fn stream_mut(&mut self) -> &mut S {
        &mut self.stream
    }

    pub fn into_stream(self) -> S {
        self.stream
    }

    /// Returns a chainable handle for registering rules on this parser.
    pub fn builder(&mut self) -> Builder<'_, S, V, C> {
        Builder::new(self)
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup<S, V, C> {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup<S, V, C> {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup<S::Kind> {
        &self.binding_power_lookup
    }

    /// Registers or overrides the binding power of `kind`.
    pub fn insert_bp(&mut self, kind: S::Kind, binding_power: BindingPower) {
        self.binding_power_lookup.insert(kind, binding_power);
    }

    /// Registers or overrides the prefix handler of `kind`.
    pub fn insert_nud(&mut self, kind: S::Kind, nud_fn: NUDHandler<S, V, C>) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers or overrides the infix handler of `kind`.
    pub fn insert_led(&mut self, kind: S::Kind, led_fn: LEDHandler<S, V, C>) {
        self.led_lookup.insert(kind, led_fn);
    }

    /// Binding power of `token`: negative infinity at end of input, positive
    /// infinity for a kind that was never given one.
    pub fn bp(&self, token: &Token<S::Kind>) -> i64 {
        self.bp_kind(token.kind.as_ref())
    }

    pub fn bp_kind(&self, kind: Option<&S::Kind>) -> i64 {
        let Some(kind) = kind else {
            return NEG_INFINITY;
        };

        self.binding_power_lookup
            .get(kind)
            .map_or(INFINITY, BindingPower::resolve)
    }

    /// Dispatches `info.token` to its prefix handler.
    pub fn nud(&mut self, info: NudInfo<S::Kind, V, C>) -> Result<V, S::Error> {
        let handler = info
            .token
            .kind
            .as_ref()
            .and_then(|kind| self.nud_lookup.get(kind))
            .map(Rc::clone);

        match handler {
            Some(handler) => handler(self, info),
            None => Err(unexpected_token(&info.token).into()),
        }
    }

    /// Dispatches `info.token` to its infix handler.
    pub fn led(&mut self, info: LedInfo<S::Kind, V, C>) -> Result<V, S::Error> {
        let handler = info
            .token
            .kind
            .as_ref()
            .and_then(|kind| self.led_lookup.get(kind))
            .map(Rc::clone);

        match handler {
            Some(handler) => handler(self, info),
            None => Err(unexpected_token(&info.token).into()),
        }
    }
}

impl<S: TokenStream, V, C: Clone> Parser<S, V, C> {
    /// Parses with the default settings: stop at the first token whose
    /// binding power is not above zero.
    pub fn parse(&mut self) -> Result<V, S::Error> {
        self.parse_with(ParseOptions::new())
    }

    /// Parses until the next token does not bind tighter than `bp`.
    pub fn parse_bp(&mut self, bp: i64) -> Result<V, S::Error> {
        self.parse_with(ParseOptions::new().terminal(bp))
    }

    /// Parses one prefix value, then folds in infix operators for as long as
    /// the stop handle is untriggered and every terminal permits it.
    pub fn parse_with(&mut self, options: ParseOptions<S::Kind, V, C>) -> Result<V, S::Error> {
        let ParseOptions {
            context,
            stop,
            mut terminals,
        } = options;

        let stop = stop.unwrap_or_default();
        if terminals.is_empty() {
            terminals.push(Terminal::Power(0));
        }

        let token = self.stream.next()?;
        let info = self.info(token, &stop, &context);
        let mut left = self.nud(info)?;

        while self.can_continue(&stop, &terminals)? {
            let operator = self.stream.next()?;
            let info = self.info(operator, &stop, &context);

            left = self.led(LedInfo {
                token: info.token,
                bp: info.bp,
                stop: info.stop,
                context: info.context,
                left,
            })?;
        }

        Ok(left)
    }

    fn info(
        &self,
        token: Token<S::Kind>,
        stop: &StopHandle<V>,
        context: &Option<C>,
    ) -> NudInfo<S::Kind, V, C> {
        NudInfo {
            bp: self.bp(&token),
            token,
            stop: stop.clone(),
            context: context.clone(),
        }
    }

    fn can_continue(
        &mut self,
        stop: &StopHandle<V>,
        terminals: &[Terminal<S::Kind>],
    ) -> Result<bool, S::Error> {
        if stop.is_stopped() {
            return Ok(false);
        }

        let next = self.stream.peek()?;
        let next_bp = self.bp(&next);

        Ok(terminals
            .iter()
            .all(|terminal| terminal.permits(&next, next_bp)))
    }
}

fn unexpected_token<K>(token: &Token<K>) -> Error {
    Error::new(
        ErrorImpl::UnexpectedToken {
            token: token.value.clone(),
        },
        token.span.start,
    )
}
