use std::{collections::HashMap, fmt::Debug, rc::Rc};

use crate::lexer::{stream::TokenStream, tokens::Token};

use super::{parser::Parser, stop::StopHandle};

/// Binding power of the end-of-input token: never allows continuation.
pub const NEG_INFINITY: i64 = i64::MIN;
/// Binding power of a kind with no table entry.
pub const INFINITY: i64 = i64::MAX;

/// How strongly a token kind binds its neighbours. Higher binds tighter.
///
/// A `Dynamic` power is resolved on every query and never cached, so it can
/// follow state that changes while parsing.
#[derive(Clone)]
pub enum BindingPower {
    Fixed(i64),
    Dynamic(Rc<dyn Fn() -> i64>),
}

impl BindingPower {
    pub fn dynamic(resolver: impl Fn() -> i64 + 'static) -> Self {
        BindingPower::Dynamic(Rc::new(resolver))
    }

    pub fn resolve(&self) -> i64 {
        match self {
            BindingPower::Fixed(bp) => *bp,
            BindingPower::Dynamic(resolver) => resolver(),
        }
    }
}

impl Debug for BindingPower {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindingPower::Fixed(bp) => f.debug_tuple("Fixed").field(bp).finish(),
            BindingPower::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl From<i64> for BindingPower {
    fn from(bp: i64) -> Self {
        BindingPower::Fixed(bp)
    }
}

impl From<i32> for BindingPower {
    fn from(bp: i32) -> Self {
        BindingPower::Fixed(bp.into())
    }
}

/// A condition that must hold against the next token for the parse loop to
/// keep folding in infix operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Terminal<K> {
    /// Continue while this threshold is below the next token's binding power.
    Power(i64),
    /// Continue while the next token is not of this kind.
    Kind(K),
}

impl<K: PartialEq> Terminal<K> {
    pub fn permits(&self, next: &Token<K>, next_bp: i64) -> bool {
        match self {
            Terminal::Power(threshold) => *threshold < next_bp,
            Terminal::Kind(kind) => !next.is(kind),
        }
    }
}

impl<K> From<i64> for Terminal<K> {
    fn from(bp: i64) -> Self {
        Terminal::Power(bp)
    }
}

impl<K> From<i32> for Terminal<K> {
    fn from(bp: i32) -> Self {
        Terminal::Power(bp.into())
    }
}

/// What a prefix handler is called with.
pub struct NudInfo<K, V, C> {
    pub token: Token<K>,
    /// Binding power of `token`, resolved at dispatch time.
    pub bp: i64,
    pub stop: StopHandle<V>,
    pub context: Option<C>,
}

/// What an infix handler is called with.
pub struct LedInfo<K, V, C> {
    pub token: Token<K>,
    pub bp: i64,
    pub stop: StopHandle<V>,
    pub context: Option<C>,
    /// Everything parsed so far in the current loop.
    pub left: V,
}

/// What a handler registered in both positions is called with. `left` is
/// `None` in prefix position.
pub struct EitherInfo<K, V, C> {
    pub token: Token<K>,
    pub bp: i64,
    pub stop: StopHandle<V>,
    pub context: Option<C>,
    pub left: Option<V>,
}

impl<K, V, C> From<NudInfo<K, V, C>> for EitherInfo<K, V, C> {
    fn from(info: NudInfo<K, V, C>) -> Self {
        EitherInfo {
            token: info.token,
            bp: info.bp,
            stop: info.stop,
            context: info.context,
            left: None,
        }
    }
}

impl<K, V, C> From<LedInfo<K, V, C>> for EitherInfo<K, V, C> {
    fn from(info: LedInfo<K, V, C>) -> Self {
        EitherInfo {
            token: info.token,
            bp: info.bp,
            stop: info.stop,
            context: info.context,
            left: Some(info.left),
        }
    }
}

pub type NUDHandler<S, V, C> = Rc<
    dyn Fn(
        &mut Parser<S, V, C>,
        NudInfo<<S as TokenStream>::Kind, V, C>,
    ) -> Result<V, <S as TokenStream>::Error>,
>;
pub type LEDHandler<S, V, C> = Rc<
    dyn Fn(
        &mut Parser<S, V, C>,
        LedInfo<<S as TokenStream>::Kind, V, C>,
    ) -> Result<V, <S as TokenStream>::Error>,
>;

// Lookup tables inside parser struct, one set per parser
pub type BPLookup<K> = HashMap<K, BindingPower>;
pub type NUDLookup<S, V, C> = HashMap<<S as TokenStream>::Kind, NUDHandler<S, V, C>>;
pub type LEDLookup<S, V, C> = HashMap<<S as TokenStream>::Kind, LEDHandler<S, V, C>>;
