//! Utility macros for building tokens by hand.
//!
//! - `MK_SPAN!` - Creates a Span from line/column pairs
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! Hosts that already have a tokenizer rarely need these; they mostly serve
//! token fixtures and hand-assembled inputs.

/// Creates a Span from `(line, column)` start and end pairs.
///
/// # Example
///
/// ```ignore
/// let span = MK_SPAN!(1, 1, 1, 3);
/// ```
#[macro_export]
macro_rules! MK_SPAN {
    ($start_line:expr, $start_column:expr, $end_line:expr, $end_column:expr) => {
        $crate::Span {
            start: $crate::Position {
                line: $start_line,
                column: $start_column,
            },
            end: $crate::Position {
                line: $end_line,
                column: $end_column,
            },
        }
    };
}

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The token kind
/// * `$value` - The token's matched text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(Kind::Number, "42", MK_SPAN!(1, 1, 1, 3));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: Some($kind),
            value: String::from($value),
            span: $span,
        }
    };
}
