//! Pratt parsing engine.
//!
//! The parser keeps three tables keyed by token kind and drives the classic
//! loop over them:
//!
//! - NUD (null denotation) handlers parse a token with no left operand
//! - LED (left denotation) handlers fold a token into the value parsed so far
//! - Binding powers decide how long a loop keeps folding
//!
//! Rules are registered through the chainable `Builder`. Handlers recurse
//! into the parser for their operands and may end a loop early through a
//! shared `StopHandle`. `list` parses delimited sequences on top of it.

pub mod builder;
pub mod list;
pub mod lookups;
pub mod parser;
pub mod stop;
