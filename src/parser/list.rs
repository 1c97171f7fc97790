use std::{fmt::Debug, hash::Hash};

use crate::{errors::errors::Error, lexer::stream::TokenBuffer};

use super::parser::Parser;

/// Parses a delimited sequence such as array literal items or call
/// arguments. The opener is expected to be consumed already.
///
/// Items are read until `is_next_closer` holds, consuming a separator after
/// an item whenever `is_next_separator` says one follows; the closer is
/// consumed last. Whether a trailing separator is allowed, and what counts
/// as a malformed list, is up to the callbacks. Every callback receives
/// `state`, usually the parser, and any error it returns ends the list.
pub fn parse_list<St, T, E>(
    state: &mut St,
    mut is_next_closer: impl FnMut(&mut St) -> Result<bool, E>,
    mut is_next_separator: impl FnMut(&mut St) -> Result<bool, E>,
    mut consume_separator: impl FnMut(&mut St) -> Result<(), E>,
    mut consume_closer: impl FnMut(&mut St) -> Result<(), E>,
    mut parse_item: impl FnMut(&mut St) -> Result<T, E>,
) -> Result<Vec<T>, E> {
    let mut items = vec![];

    while !is_next_closer(state)? {
        items.push(parse_item(state)?);

        if is_next_separator(state)? {
            consume_separator(state)?;
        }
    }

    consume_closer(state)?;

    Ok(items)
}

/// [`parse_list`] over a [`TokenBuffer`], split by `separator` and ended by
/// `closer`.
///
/// One trailing separator is accepted. An item followed by anything other
/// than the separator or the closer fails with `ExpectedToken`.
pub fn parse_delimited<K, V, C, T>(
    parser: &mut Parser<TokenBuffer<K>, V, C>,
    separator: &K,
    closer: &K,
    parse_item: impl FnMut(&mut Parser<TokenBuffer<K>, V, C>) -> Result<T, Error>,
) -> Result<Vec<T>, Error>
where
    K: Eq + Hash + Clone + Debug,
{
    parse_list(
        parser,
        |parser| Ok(parser.stream().next_is(closer)),
        |parser| {
            let stream = parser.stream();
            if stream.next_is(separator) {
                Ok(true)
            } else if stream.next_is(closer) {
                Ok(false)
            } else {
                Err(stream.expected(separator))
            }
        },
        |parser| parser.stream_mut().expect(separator).map(|_| ()),
        |parser| parser.stream_mut().expect(closer).map(|_| ()),
        parse_item,
    )
}
