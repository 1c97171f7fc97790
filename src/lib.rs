#![allow(clippy::module_inception)]

//! A reusable top-down operator precedence ("Pratt") parsing engine.
//!
//! The host registers, per token kind, a binding power plus prefix (NUD) and
//! infix (LED) handlers through a [`parser::builder::Builder`]. The
//! [`parser::parser::Parser`] then drives the classic loop over any
//! [`lexer::stream::TokenStream`].

use std::fmt::Display;

use crate::errors::errors::ErrorTip;

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

pub use errors::errors::{Error, ErrorImpl};
pub use lexer::{
    stream::{TokenBuffer, TokenStream},
    tokens::Token,
};
pub use parser::{
    builder::Builder,
    list::{parse_delimited, parse_list},
    lookups::{BindingPower, EitherInfo, LedInfo, NudInfo, Terminal, INFINITY, NEG_INFINITY},
    parser::{ParseOptions, Parser},
    stop::StopHandle,
};

/// A 1-based line/column location in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn null() -> Self {
        Position { line: 0, column: 0 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Returns the text of the 1-based `position.line` of `source`, without its
/// line terminator.
pub fn get_line_at_position(source: &str, position: Position) -> Option<&str> {
    if position.line == 0 {
        return None;
    }

    source
        .split_inclusive('\n')
        .nth((position.line - 1) as usize)
        .map(|line| line.trim_end_matches(['\n', '\r']))
}

/// Renders `error` against the source it was raised for.
///
/// ```text
/// Error: UnexpectedToken (Unexpected token: `+` (at 1:4))
///   |
/// 1 | 1+ +
///   |    ^
/// ```
///
/// When the error position does not point into `source` only the header line
/// is produced.
pub fn display_error(error: &Error, source: &str) -> String {
    let position = error.get_position();

    let mut out = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}\n", error.get_error_name())
    } else {
        format!("Error: {} ({})\n", error.get_error_name(), error.get_tip())
    };

    let Some(line_text) = get_line_at_position(source, *position) else {
        return out;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));
    out.push_str(&format!("{:>padding$} {:>arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();
    (&string[start..], start)
}
