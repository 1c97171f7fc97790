//! Fluent rule registration.
//!
//! `bp`, `nud` and `led` write straight into the parser's lookup tables.
//! `either`, `unary`, `binary` and `rassoc` are built on top of them; the
//! handler factories behind the last three are exposed as free functions so
//! hosts can reuse them with [`Parser::insert_nud`] / [`Parser::insert_led`].

use std::rc::Rc;

use crate::lexer::{stream::TokenStream, tokens::Token};

use super::{
    lookups::{BindingPower, EitherInfo, LedInfo, NudInfo, Terminal},
    parser::{ParseOptions, Parser},
};

/// Chainable registration handle over one parser's tables.
///
/// Every call mutates the parser in place; two builders over the same parser
/// see each other's registrations.
pub struct Builder<'a, S: TokenStream, V, C = ()> {
    parser: &'a mut Parser<S, V, C>,
}

impl<'a, S: TokenStream, V, C> Builder<'a, S, V, C> {
    pub fn new(parser: &'a mut Parser<S, V, C>) -> Self {
        Builder { parser }
    }

    /// Registers or overrides the binding power of `kind`.
    pub fn bp(self, kind: S::Kind, bp: impl Into<BindingPower>) -> Self {
        self.parser.insert_bp(kind, bp.into());
        self
    }

    /// Ends the chain, giving the parser back.
    pub fn done(self) -> &'a mut Parser<S, V, C> {
        self.parser
    }
}

impl<'a, S, V, C> Builder<'a, S, V, C>
where
    S: TokenStream + 'static,
    V: 'static,
    C: Clone + 'static,
{
    /// Registers a prefix rule for `kind` together with its binding power.
    pub fn nud<F>(self, kind: S::Kind, bp: impl Into<BindingPower>, handler: F) -> Self
    where
        F: Fn(&mut Parser<S, V, C>, NudInfo<S::Kind, V, C>) -> Result<V, S::Error> + 'static,
    {
        self.parser.insert_nud(kind.clone(), Rc::new(handler));
        self.bp(kind, bp)
    }

    /// Registers an infix or postfix rule for `kind` together with its
    /// binding power.
    pub fn led<F>(self, kind: S::Kind, bp: impl Into<BindingPower>, handler: F) -> Self
    where
        F: Fn(&mut Parser<S, V, C>, LedInfo<S::Kind, V, C>) -> Result<V, S::Error> + 'static,
    {
        self.parser.insert_led(kind.clone(), Rc::new(handler));
        self.bp(kind, bp)
    }

    /// Registers `handler` in both positions. In prefix position it sees
    /// `info.left == None`.
    pub fn either<F>(self, kind: S::Kind, bp: impl Into<BindingPower>, handler: F) -> Self
    where
        F: Fn(&mut Parser<S, V, C>, EitherInfo<S::Kind, V, C>) -> Result<V, S::Error> + 'static,
    {
        let handler = Rc::new(handler);
        let prefix = Rc::clone(&handler);
        let bp = bp.into();

        self.nud(
            kind.clone(),
            bp.clone(),
            move |parser: &mut Parser<S, V, C>, info: NudInfo<S::Kind, V, C>| {
                prefix(parser, info.into())
            },
        )
        .led(
            kind,
            bp,
            move |parser: &mut Parser<S, V, C>, info: LedInfo<S::Kind, V, C>| {
                handler(parser, info.into())
            },
        )
    }

    /// Prefix operator whose operand binds tighter than `bp`.
    pub fn unary<F>(self, kind: S::Kind, bp: impl Into<BindingPower>, combine: F) -> Self
    where
        F: Fn(Token<S::Kind>, V) -> V + 'static,
    {
        self.nud(kind, bp, unary_handler::<S, V, C, F>(combine))
    }

    /// Left-associative infix operator.
    pub fn binary<F>(self, kind: S::Kind, bp: impl Into<BindingPower>, combine: F) -> Self
    where
        F: Fn(V, Token<S::Kind>, V) -> V + 'static,
    {
        self.led(kind, bp, binary_handler::<S, V, C, F>(combine))
    }

    /// Right-associative infix operator.
    pub fn rassoc<F>(self, kind: S::Kind, bp: impl Into<BindingPower>, combine: F) -> Self
    where
        F: Fn(V, Token<S::Kind>, V) -> V + 'static,
    {
        self.led(kind, bp, rassoc_handler::<S, V, C, F>(combine))
    }
}

/// Prefix handler: parses the operand with the operator's own binding power
/// as threshold, then applies `combine(operator, operand)`.
pub fn unary_handler<S, V, C, F>(
    combine: F,
) -> impl Fn(&mut Parser<S, V, C>, NudInfo<S::Kind, V, C>) -> Result<V, S::Error>
where
    S: TokenStream,
    C: Clone,
    F: Fn(Token<S::Kind>, V) -> V,
{
    move |parser: &mut Parser<S, V, C>, info: NudInfo<S::Kind, V, C>| {
        let right = parser.parse_with(operand(info.bp, info.context))?;
        Ok(combine(info.token, right))
    }
}

/// Infix handler for a left-associative operator: an operator of the same
/// power to the right is left to the enclosing loop.
pub fn binary_handler<S, V, C, F>(
    combine: F,
) -> impl Fn(&mut Parser<S, V, C>, LedInfo<S::Kind, V, C>) -> Result<V, S::Error>
where
    S: TokenStream,
    C: Clone,
    F: Fn(V, Token<S::Kind>, V) -> V,
{
    move |parser: &mut Parser<S, V, C>, info: LedInfo<S::Kind, V, C>| {
        let right = parser.parse_with(operand(info.bp, info.context))?;
        Ok(combine(info.left, info.token, right))
    }
}

/// Infix handler for a right-associative operator: the threshold sits one
/// below the operator's power, so the recursive call captures an operator
/// of the same power to the right.
pub fn rassoc_handler<S, V, C, F>(
    combine: F,
) -> impl Fn(&mut Parser<S, V, C>, LedInfo<S::Kind, V, C>) -> Result<V, S::Error>
where
    S: TokenStream,
    C: Clone,
    F: Fn(V, Token<S::Kind>, V) -> V,
{
    move |parser: &mut Parser<S, V, C>, info: LedInfo<S::Kind, V, C>| {
        let right = parser.parse_with(operand(info.bp.saturating_sub(1), info.context))?;
        Ok(combine(info.left, info.token, right))
    }
}

// Operands get the caller's context but their own stop scope.
fn operand<K, V, C>(threshold: i64, context: Option<C>) -> ParseOptions<K, V, C> {
    ParseOptions {
        context,
        stop: None,
        terminals: vec![Terminal::Power(threshold)],
    }
}
