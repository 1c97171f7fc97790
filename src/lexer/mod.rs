//! Token-stream interface consumed by the parser.
//!
//! Tokenizing source text is left to the host. This module defines what the
//! engine needs from it:
//!
//! - `Token`, carrying a kind, its matched text and a source span
//! - `TokenStream`, the `next`/`peek` contract the parser drives
//! - `TokenBuffer`, a ready-made stream over an already tokenized input

pub mod stream;
pub mod tokens;
