//! Grammar for a single coordinate component, such as `59°12'7.7"N`, `N 59 12.5` or `-35.282`.
//!
//! A component has the shape
//!
//! ```text
//! [hemisphere] [-] degrees [degree unit] [minutes [minute unit] [seconds [second unit]]] [hemisphere]
//! ```
//!
//! where everything after the degrees is optional. The parsers below take every optional piece
//! greedily, which gives the same result as a leftmost-first regular expression would.

use crate::{parse, units::Hemisphere};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while_m_n},
    character::complete::{char, digit1, one_of, satisfy},
    combinator::{map_opt, opt, recognize},
    error::{context, ErrorKind, ParseError, VerboseError},
    sequence::{pair, terminated, tuple},
    Offset,
};

/// One coordinate component matched within a larger string.
#[derive(Debug, Clone, PartialEq)]
pub struct Component<'a> {
    /// The full text covered by the match.
    pub matched: &'a str,
    /// Byte offset of the match within the searched string.
    pub offset: usize,
    pub hemisphere_prefix: Option<Hemisphere>,
    /// Whether the degrees were preceded by a minus sign.
    pub negative: bool,
    pub degrees: &'a str,
    pub minutes: Option<&'a str>,
    pub seconds: Option<&'a str>,
    pub hemisphere_suffix: Option<Hemisphere>,
}

/// `[0-9]+(\.[0-9]+)?`
fn number(i: parse::Input) -> parse::Result<&str> {
    recognize(pair(digit1, opt(pair(char('.'), digit1))))(i)
}

/// Seconds only allow up to two digits before the decimal point.
fn seconds_number(i: parse::Input) -> parse::Result<&str> {
    recognize(pair(
        take_while_m_n(1, 2, |c: char| c.is_ascii_digit()),
        opt(pair(char('.'), digit1)),
    ))(i)
}

fn hemisphere(i: parse::Input) -> parse::Result<Hemisphere> {
    context("Hemisphere", map_opt(one_of("NSEWnsew"), Hemisphere::from_char))(i)
}

fn whitespace(i: parse::Input) -> parse::Result<char> {
    satisfy(char::is_whitespace)(i)
}

fn degree_unit(i: parse::Input) -> parse::Result<char> {
    satisfy(|c| matches!(c, '°' | 'º' | ':' | 'd' | 'D') || c.is_whitespace())(i)
}

fn minute_unit(i: parse::Input) -> parse::Result<char> {
    one_of("'’‘′:")(i)
}

fn second_unit(i: parse::Input) -> parse::Result<&str> {
    alt((tag("\""), tag("″"), tag("’’"), tag("''")))(i)
}

/// Minutes, optionally followed by seconds.
fn minutes_and_seconds(i: parse::Input) -> parse::Result<(&str, Option<&str>)> {
    let (i, (minutes, _, _, seconds)) = tuple((
        context("Minutes", number),
        opt(minute_unit),
        opt(whitespace),
        opt(terminated(
            context("Seconds", seconds_number),
            opt(second_unit),
        )),
    ))(i)?;

    Ok((i, (minutes, seconds)))
}

/// Parse a component starting exactly at the beginning of the input.
pub fn component(i: parse::Input) -> parse::Result<Component> {
    let (rest, (hemisphere_prefix, minus, degrees, _, _, tail, _, hemisphere_suffix)) =
        tuple((
            opt(hemisphere),
            opt(char('-')),
            context("Degrees", number),
            opt(degree_unit),
            opt(whitespace),
            opt(minutes_and_seconds),
            opt(whitespace),
            opt(hemisphere),
        ))(i)?;

    let (minutes, seconds) = match tail {
        Some((minutes, seconds)) => (Some(minutes), seconds),
        None => (None, None),
    };

    let c = Component {
        matched: &i[..i.offset(rest)],
        offset: 0,
        hemisphere_prefix,
        negative: minus.is_some(),
        degrees,
        minutes,
        seconds,
        hemisphere_suffix,
    };
    Ok((rest, c))
}

/// Find the first component anywhere in the input, trying each start position from left to
/// right. If there is no match, the error from the attempt at the start of the input is returned.
pub fn find_component(i: parse::Input) -> Result<Component, parse::Error> {
    let mut first_error = None;

    for (offset, _) in i.char_indices() {
        match context("Coordinate component", component)(&i[offset..]) {
            Ok((_, c)) => {
                tracing::trace!(input = i, matched = c.matched, offset, "found component");
                return Ok(Component { offset, ..c });
            }
            Err(e) => {
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    Err(first_error
        .unwrap_or_else(|| nom::Err::Error(VerboseError::from_error_kind(i, ErrorKind::Eof))))
}
