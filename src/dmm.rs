//! Parsing for coordinate pairs in degrees/decimal-minutes (DMM) or decimal degree (DD) notation,
//! e.g. `41 24.2028, -2 10.4418` or `41.40338, -2.17403`. The latitude comes first and the two
//! halves are separated by a single comma.

use crate::{
    error::{CoordResult, Error},
    parse, units, Coordinate,
};

/// Parse one half of a DMM pair: an optional leading minus, the degrees and optionally the
/// decimal minutes, separated by whitespace.
fn parse_axis(text: &str) -> CoordResult<f64> {
    let text = text.trim();
    let (sign, text) = match text.strip_prefix('-') {
        Some(rest) => (-1., rest),
        None => (1., text),
    };

    let mut tokens = text.split_whitespace();
    let degrees = tokens
        .next()
        .and_then(parse::lenient_float)
        .ok_or_else(|| Error::Parse(format!("expected degrees in {:?}", text)))?;
    let minutes = match tokens.next() {
        Some(token) => parse::lenient_float(token)
            .ok_or_else(|| Error::Parse(format!("expected minutes, found {:?}", token)))?,
        None => 0.,
    };

    Ok(sign * (degrees.abs() + minutes / 60.))
}

/// Parse a coordinate pair in DMM or DD notation.
pub fn from_dmm(text: &str) -> CoordResult<Coordinate> {
    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() != 2 {
        return Err(Error::Parse(format!(
            "expected exactly one comma between latitude and longitude in {:?}",
            text
        )));
    }

    let latitude = parse_axis(parts[0])?;
    let longitude = parse_axis(parts[1])?;

    if !(-180. ..=180.).contains(&longitude) || !(-90. ..=90.).contains(&latitude) {
        return Err(Error::OutOfRange {
            longitude,
            latitude,
        });
    }

    Ok(Coordinate::new(longitude, latitude))
}

/// Alias of `from_dmm`.
pub fn from_gmm(text: &str) -> CoordResult<Coordinate> {
    from_dmm(text)
}

/// Returns `true` if `text` can be parsed as a DMM or DD coordinate pair and doesn't contain any
/// characters that only show up in DMS notation.
pub fn is_dmm(text: &str) -> bool {
    match from_dmm(text) {
        Ok(_) => !text.chars().any(units::is_dms_only_char),
        Err(e) => {
            tracing::debug!(text, error = %e, "not a DMM coordinate");
            false
        }
    }
}
