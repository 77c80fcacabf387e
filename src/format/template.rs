//! Tokenizer for format templates such as `"DD MM ss X"`.
//!
//! | Token | Output |
//! |-------|--------|
//! | `DD`  | integer degrees with a degree sign |
//! | `dd`  | decimal degrees with a degree sign |
//! | `D`   | integer degrees |
//! | `d`   | decimal degrees |
//! | `MM`  | integer minutes with a minute sign |
//! | `mm`  | decimal minutes with a minute sign |
//! | `M`   | integer minutes |
//! | `m`   | decimal minutes |
//! | `ss`  | decimal seconds with a second sign |
//! | `s`   | decimal seconds |
//! | `-`   | `-` if the value is negative, nothing otherwise |
//! | `X`   | hemisphere letter |
//!
//! Any other character is copied to the output as-is. The template is split into tokens in a
//! single pass, so text produced by one token is never mistaken for another token.

use super::config::AxisConfig;
use crate::{
    error::{CoordResult, Error},
    parse,
    units::{Hemisphere, Unit},
};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::anychar,
    combinator::{all_consuming, map, value},
    error::context,
    multi::many0,
};
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Absolute degrees, either truncated to an integer or as a decimal.
    Degrees { decimal: bool, glyph: bool },
    /// Minutes left after the whole degrees, either truncated to an integer or as a decimal.
    Minutes { decimal: bool, glyph: bool },
    /// Decimal seconds left after the whole minutes.
    Seconds { glyph: bool },
    Sign,
    Hemisphere,
    Literal(char),
}

fn token(i: parse::Input) -> parse::Result<Token> {
    // Longer tokens have to be tried before their single-letter prefixes
    alt((
        value(Token::Degrees { decimal: false, glyph: true }, tag("DD")),
        value(Token::Degrees { decimal: true, glyph: true }, tag("dd")),
        value(Token::Degrees { decimal: false, glyph: false }, tag("D")),
        value(Token::Degrees { decimal: true, glyph: false }, tag("d")),
        value(Token::Minutes { decimal: false, glyph: true }, tag("MM")),
        value(Token::Minutes { decimal: true, glyph: true }, tag("mm")),
        value(Token::Minutes { decimal: false, glyph: false }, tag("M")),
        value(Token::Minutes { decimal: true, glyph: false }, tag("m")),
        value(Token::Seconds { glyph: true }, tag("ss")),
        value(Token::Seconds { glyph: false }, tag("s")),
        value(Token::Sign, tag("-")),
        value(Token::Hemisphere, tag("X")),
        map(anychar, Token::Literal),
    ))(i)
}

/// A parsed format template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    tokens: Vec<Token>,
}

impl Template {
    pub fn parse(format: &str) -> CoordResult<Self> {
        let mut parser = all_consuming(context("Format template", many0(token)));
        match parser(format) {
            Ok((_, tokens)) => {
                tracing::trace!(format, n_tokens = tokens.len(), "parsed format template");
                Ok(Template { tokens })
            }
            Err(e) => Err(Error::Parse(parse::pretty_error_message(format, e))),
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Render a single axis.
    pub fn render(
        &self,
        axis: &AxisConfig,
        hemisphere: Hemisphere,
        decimal_places: usize,
    ) -> String {
        let quantity = |integer: f64, value: f64, decimal: bool| {
            if decimal {
                to_fixed(value, decimal_places)
            } else {
                format!("{:.0}", integer)
            }
        };

        let mut out = String::new();
        for token in self.tokens.iter() {
            let (text, unit, glyph) = match *token {
                Token::Degrees { decimal, glyph } => (
                    quantity(axis.degrees_int, axis.degrees, decimal),
                    Unit::Degrees,
                    glyph,
                ),
                Token::Minutes { decimal, glyph } => (
                    quantity(axis.minutes_int, axis.minutes, decimal),
                    Unit::Minutes,
                    glyph,
                ),
                Token::Seconds { glyph } => {
                    (to_fixed(axis.seconds, decimal_places), Unit::Seconds, glyph)
                }
                Token::Sign => {
                    if axis.is_negative() {
                        out.push('-');
                    }
                    continue;
                }
                Token::Hemisphere => {
                    out.push(hemisphere.letter());
                    continue;
                }
                Token::Literal(c) => {
                    out.push(c);
                    continue;
                }
            };

            out.push_str(&text);
            if glyph {
                out.push(unit.glyph());
            }
        }

        out
    }
}

/// Format `x` with `places` fractional digits. Unlike `{:.N}`, which rounds an exact tie to the
/// even neighbour, an exact tie is rounded away from zero (`0.5` becomes `1`, `0.25` becomes
/// `0.3`).
pub fn to_fixed(x: f64, places: usize) -> String {
    if !is_tie(x, places) {
        return format!("{:.*}", places, x);
    }

    // A tie has exactly `places + 1` fractional digits and the last of them is a 5, so this
    // rendering is exact
    let mut digits = format!("{:.*}", places + 1, x).into_bytes();
    digits.pop();
    if digits.last() == Some(&b'.') {
        digits.pop();
    }

    // Carry the increment through the magnitude
    let mut carry = true;
    for d in digits.iter_mut().rev() {
        match *d {
            b'9' => *d = b'0',
            b'0'..=b'8' => {
                *d += 1;
                carry = false;
                break;
            }
            _ => {}
        }
    }
    if carry {
        let at = if digits.first() == Some(&b'-') { 1 } else { 0 };
        digits.insert(at, b'1');
    }

    digits.into_iter().map(char::from).collect()
}

/// Returns `true` if `x` lies exactly halfway between two multiples of `10^-places`. That is the
/// case when `x * 2^(places + 1)` is an odd integer, since `2 * 10^places * x` differs from it
/// only by the odd factor `5^places`.
fn is_tie(x: f64, places: usize) -> bool {
    if x == 0. || !x.is_finite() {
        return false;
    }

    let bits = x.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1 << 52) - 1);
    let (mantissa, exponent) = if exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1 << 52), exponent - 1075)
    };

    // Power of two in x
    let twos = mantissa.trailing_zeros() as i64 + exponent;
    twos == -(places as i64 + 1)
}
