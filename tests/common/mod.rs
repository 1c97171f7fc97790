//! Shared fixtures for the integration tests: a small regex tokenizer and
//! the grammars built on top of it.

#![allow(dead_code)]

use lazy_static::lazy_static;
use regex::Regex;

use pratt::{Parser, Position, Span, Token, TokenBuffer, MK_TOKEN};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    Identifier,
    Plus,
    Dash,
    Star,
    Slash,
    Caret,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    Comma,
    Semicolon,
}

lazy_static! {
    static ref PATTERNS: Vec<(Regex, Option<TokenKind>)> = vec![
        (Regex::new(r"^\s+").unwrap(), None),
        (Regex::new(r"^[0-9]+(\.[0-9]+)?").unwrap(), Some(TokenKind::Number)),
        (Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), Some(TokenKind::Identifier)),
        (Regex::new(r"^\+").unwrap(), Some(TokenKind::Plus)),
        (Regex::new(r"^-").unwrap(), Some(TokenKind::Dash)),
        (Regex::new(r"^\*").unwrap(), Some(TokenKind::Star)),
        (Regex::new(r"^/").unwrap(), Some(TokenKind::Slash)),
        (Regex::new(r"^\^").unwrap(), Some(TokenKind::Caret)),
        (Regex::new(r"^\(").unwrap(), Some(TokenKind::OpenParen)),
        (Regex::new(r"^\)").unwrap(), Some(TokenKind::CloseParen)),
        (Regex::new(r"^\[").unwrap(), Some(TokenKind::OpenBracket)),
        (Regex::new(r"^\]").unwrap(), Some(TokenKind::CloseBracket)),
        (Regex::new(r"^,").unwrap(), Some(TokenKind::Comma)),
        (Regex::new(r"^;").unwrap(), Some(TokenKind::Semicolon)),
    ];
}

pub fn tokenize(source: &str) -> Result<Vec<Token<TokenKind>>, String> {
    let mut tokens = vec![];
    let mut pos = 0;
    let mut line = 1;
    let mut column = 1;

    while pos < source.len() {
        let remainder = &source[pos..];
        let Some((matched, kind)) = PATTERNS
            .iter()
            .find_map(|(regex, kind)| regex.find(remainder).map(|m| (m.as_str(), *kind)))
        else {
            return Err(format!("unrecognised token at {}:{}", line, column));
        };

        let start = Position::new(line, column);
        for c in matched.chars() {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }

        if let Some(kind) = kind {
            tokens.push(MK_TOKEN!(kind, matched, Span::new(start, Position::new(line, column))));
        }
        pos += matched.len();
    }

    Ok(tokens)
}

pub fn buffer(source: &str) -> TokenBuffer<TokenKind> {
    TokenBuffer::new(tokenize(source).unwrap())
}

pub type Calculator = Parser<TokenBuffer<TokenKind>, f64>;

pub fn calculator(source: &str) -> Calculator {
    let mut parser = Parser::new(buffer(source));
    create_calculator_lookups(&mut parser);
    parser
}

pub fn create_calculator_lookups(parser: &mut Calculator) {
    parser
        .builder()
        .bp(TokenKind::CloseParen, 0)
        .nud(TokenKind::Number, 100, |_, info| {
            Ok(info.token.value.parse().unwrap_or(f64::NAN))
        })
        .nud(TokenKind::OpenParen, 100, |parser, _| {
            let expr = parser.parse()?;
            parser.stream_mut().expect(&TokenKind::CloseParen)?;
            Ok(expr)
        })
        .either(TokenKind::Dash, 10, |parser, info| match info.left {
            None => Ok(-parser.parse_bp(25)?),
            Some(left) => Ok(left - parser.parse_bp(info.bp)?),
        })
        .binary(TokenKind::Plus, 10, |left, _, right| left + right)
        .binary(TokenKind::Star, 20, |left, _, right| left * right)
        .binary(TokenKind::Slash, 20, |left, _, right| left / right)
        .rassoc(TokenKind::Caret, 30, |left, _, right| left.powf(right));
}

/// Statements separated by `;`, each `parse` call yielding one statement.
/// An empty statement yields `None`.
pub type Statements = Parser<TokenBuffer<TokenKind>, Option<f64>>;

pub fn statements(source: &str) -> Statements {
    let mut parser = Parser::new(buffer(source));
    parser
        .builder()
        .nud(TokenKind::Number, 100, |_, info| Ok(info.token.value.parse().ok()))
        .binary(TokenKind::Plus, 10, |left: Option<f64>, _, right: Option<f64>| {
            Some(left? + right?)
        })
        .binary(TokenKind::Star, 20, |left: Option<f64>, _, right: Option<f64>| {
            Some(left? * right?)
        })
        .either(TokenKind::Semicolon, 1, |_, info| {
            Ok(info.stop.stop(info.left.flatten()))
        });
    parser
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Symbol(String),
    Array(Vec<Expr>),
    Call { callee: Box<Expr>, arguments: Vec<Expr> },
    Binary { left: Box<Expr>, operator: String, right: Box<Expr> },
    Prefix { operator: String, right: Box<Expr> },
}

pub type ExprParser = Parser<TokenBuffer<TokenKind>, Expr>;

pub fn expressions(source: &str) -> ExprParser {
    let mut parser = Parser::new(buffer(source));
    create_expr_lookups(&mut parser);
    parser
}

pub fn create_expr_lookups(parser: &mut ExprParser) {
    fn binary(left: Expr, operator: Token<TokenKind>, right: Expr) -> Expr {
        Expr::Binary {
            left: Box::new(left),
            operator: operator.value,
            right: Box::new(right),
        }
    }

    parser
        .builder()
        .bp(TokenKind::Comma, 0)
        .bp(TokenKind::CloseParen, 0)
        .bp(TokenKind::CloseBracket, 0)
        .nud(TokenKind::Number, 100, |_, info| {
            Ok(Expr::Number(info.token.value.parse().unwrap_or(f64::NAN)))
        })
        .nud(TokenKind::Identifier, 100, |_, info| Ok(Expr::Symbol(info.token.value)))
        .nud(TokenKind::OpenBracket, 100, |parser, _| {
            let items = pratt::parse_delimited(
                parser,
                &TokenKind::Comma,
                &TokenKind::CloseBracket,
                |parser| parser.parse(),
            )?;
            Ok(Expr::Array(items))
        })
        .unary(TokenKind::Dash, 25, |operator, right| Expr::Prefix {
            operator: operator.value,
            right: Box::new(right),
        })
        .binary(TokenKind::Plus, 10, binary)
        .binary(TokenKind::Star, 20, binary)
        .rassoc(TokenKind::Caret, 30, binary)
        .led(TokenKind::OpenParen, 40, |parser, info| {
            let arguments = pratt::parse_delimited(
                parser,
                &TokenKind::Comma,
                &TokenKind::CloseParen,
                |parser| parser.parse(),
            )?;
            Ok(Expr::Call {
                callee: Box::new(info.left),
                arguments,
            })
        });
}
