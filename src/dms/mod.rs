//! Parsing for coordinate pairs in degrees/minutes/seconds (DMS) notation, e.g.
//! `59°12'7.7"N 02°15'39.6"W`. Plain decimal degree pairs are accepted as well, since every part
//! of a component after the degrees is optional.

pub mod grammar;

use crate::{
    dmm,
    error::{CoordResult, Error},
    parse, Coordinate,
};
use grammar::Component;

/// Convert a matched component into signed decimal degrees.
///
/// The sign comes from a leading minus if there is one, otherwise from the leading hemisphere
/// letter, otherwise from the trailing one. Each part is range-checked before the sign is applied.
pub fn decimal_degrees(c: &Component) -> CoordResult<f64> {
    let sign = if c.negative {
        -1.
    } else {
        c.hemisphere_prefix
            .or(c.hemisphere_suffix)
            .map_or(1., |h| h.sign())
    };

    let degrees = parse_part(c.degrees)?;
    let minutes = c.minutes.map(parse_part).transpose()?.unwrap_or(0.);
    let seconds = c.seconds.map(parse_part).transpose()?.unwrap_or(0.);

    if !(0. ..=180.).contains(&degrees) {
        return Err(Error::DegreesOutOfRange(degrees));
    }
    if !(0. ..=60.).contains(&minutes) {
        return Err(Error::MinutesOutOfRange(minutes));
    }
    if !(0. ..=60.).contains(&seconds) {
        return Err(Error::SecondsOutOfRange(seconds));
    }

    Ok(sign * (degrees + minutes / 60. + seconds / 3600.))
}

fn parse_part(s: &str) -> CoordResult<f64> {
    s.parse()
        .map_err(|_| Error::Parse(format!("invalid number {:?}", s)))
}

/// Parse a coordinate pair in DMS notation. The first component is the latitude and the second
/// one the longitude, regardless of any hemisphere letters.
pub fn from_dms(text: &str) -> CoordResult<Coordinate> {
    let text = text.trim();

    let lat = grammar::find_component(text)
        .map_err(|e| Error::Parse(parse::pretty_error_message(text, e)))?;

    // The longitude is searched for after as many characters as the latitude match is long,
    // counted from the start of the input. A component that starts with a hemisphere letter can
    // swallow the letter that starts the next component, so in that case we back up by one.
    let mut cut = lat.matched.chars().count();
    if lat.hemisphere_prefix.is_some() {
        cut -= 1;
    }
    let rest = text
        .char_indices()
        .nth(cut)
        .map_or("", |(i, _)| &text[i..])
        .trim();

    let lon = grammar::find_component(rest).map_err(|_| {
        Error::Parse(format!("no longitude found after {:?} in {:?}", lat.matched, text))
    })?;

    let latitude = decimal_degrees(&lat)?;
    let longitude = decimal_degrees(&lon)?;
    Ok(Coordinate::new(longitude, latitude))
}

/// Returns `true` if `text` can be parsed as a DMS coordinate pair and isn't also a valid DMM or
/// decimal degree pair.
pub fn is_dms(text: &str) -> bool {
    match from_dms(text) {
        Ok(_) => !dmm::is_dmm(text),
        Err(e) => {
            tracing::debug!(text, error = %e, "not a DMS coordinate");
            false
        }
    }
}

#[cfg(test)]
mod test {
    use super::{decimal_degrees, from_dms, grammar, is_dms};
    use crate::{dmm::is_dmm, error::Error};
    use proptest::prelude::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    fn extract(s: &str) -> Result<f64, Error> {
        let c = grammar::find_component(s).unwrap();
        decimal_degrees(&c)
    }

    #[test]
    fn test_from_dms() {
        let c = from_dms("59°12'7.7\"N 02°15'39.6\"W").unwrap();
        assert_eq!(c.longitude, -(2. + 15. / 60. + 39.6 / 3600.));
        assert_eq!(c.latitude, 59. + 12. / 60. + 7.7 / 3600.);

        let c = from_dms("59°N 02°W").unwrap();
        assert_eq!(c.longitude, -2.);
        assert_eq!(c.latitude, 59.);
    }

    #[test]
    fn test_from_dms_formatted_output() {
        let c = from_dms("35° 16′ 55.20000″ S 149° 7′ 43.26240″ E").unwrap();
        assert_close(c.longitude, 149.128684);
        assert_close(c.latitude, -35.282);
    }

    #[test]
    fn test_from_dms_leading_hemisphere() {
        // The first match also picks up the "E" that belongs to the longitude
        let c = from_dms("N59°12'7.7\" E02°15'39.6\"").unwrap();
        assert_eq!(c.latitude, 59. + 12. / 60. + 7.7 / 3600.);
        assert_eq!(c.longitude, 2. + 15. / 60. + 39.6 / 3600.);

        let c = from_dms("S33 52 E151 12").unwrap();
        assert_eq!(c.latitude, -(33. + 52. / 60.));
        assert_eq!(c.longitude, 151. + 12. / 60.);
    }

    #[test]
    fn test_from_dms_decimal_pairs() {
        let c = from_dms("41.40338, 2.17403").unwrap();
        assert_eq!(c.longitude, 2.17403);
        assert_eq!(c.latitude, 41.40338);

        let c = from_dms("  -33.8688, 151.2093  ").unwrap();
        assert_eq!(c.longitude, 151.2093);
        assert_eq!(c.latitude, -33.8688);
    }

    #[test]
    fn test_from_dms_surrounding_text() {
        let c = from_dms("59°N, lon 02°W").unwrap();
        assert_eq!(c.longitude, -2.);
        assert_eq!(c.latitude, 59.);

        // The remainder is cut at the length of the latitude match, counted from the start of
        // the input, so leading text shifts the cut back onto the latitude
        let c = from_dms("lat 59°N, lon 02°W").unwrap();
        assert_eq!(c.longitude, 59.);
        assert_eq!(c.latitude, 59.);
    }

    #[test]
    fn test_sign_precedence() {
        // Leading minus wins over any hemisphere letter
        assert_eq!(extract("N-10").unwrap(), -10.);
        assert_eq!(extract("-10N").unwrap(), -10.);
        // Leading hemisphere wins over the trailing one
        assert_eq!(extract("S10N").unwrap(), -10.);
        assert_eq!(extract("10w").unwrap(), -10.);
        assert_eq!(extract("10").unwrap(), 10.);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(from_dms("181°N 10°E"), Err(Error::DegreesOutOfRange(181.)));
        assert_eq!(from_dms("10°75'N 10°E"), Err(Error::MinutesOutOfRange(75.)));
        assert_eq!(from_dms("10°10'61\"N 10°E"), Err(Error::SecondsOutOfRange(61.)));
        assert_eq!(from_dms("10°N 200°E"), Err(Error::DegreesOutOfRange(200.)));

        // Degrees are checked before minutes
        assert_eq!(extract("190 99").unwrap_err(), Error::DegreesOutOfRange(190.));

        // Latitudes up to 180 degrees are accepted by this path
        let c = from_dms("120°N 10°E").unwrap();
        assert_eq!(c.latitude, 120.);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(from_dms(""), Err(Error::Parse(_))));
        assert!(matches!(from_dms("hello"), Err(Error::Parse(_))));
        assert!(matches!(from_dms("59°N"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_is_dms() {
        assert!(is_dms("59°12'7.7\"N 02°15'39.6\"W"));
        assert!(is_dms("59°N 02°W"));
        assert!(!is_dms("41 24.2028, -2 10.4418"));
        assert!(!is_dms("41.40338, 2.17403"));
        assert!(!is_dms("181°N 10°E"));
        assert!(!is_dms("hello"));

        // Repeated calls give the same answer
        for _ in 0..3 {
            assert!(is_dms("59°N 02°W"));
        }
    }

    proptest! {
        #[test]
        fn extraction_in_range_succeeds(d in 0u32..=180, m in 0u32..=60, s in 0.0f64..60.0) {
            let text = format!("{}°{}'{:.3}\"S", d, m, s);
            let value = extract(&text).unwrap();
            prop_assert!(value <= 0.);
        }

        #[test]
        fn extraction_out_of_range_fails(d in 181u32..10_000, m in 61u32..10_000, s in 61u32..100) {
            prop_assert_eq!(extract(&format!("{}°", d)), Err(Error::DegreesOutOfRange(d as f64)));
            let m_text = format!("10°{}'", m);
            prop_assert_eq!(extract(&m_text), Err(Error::MinutesOutOfRange(m as f64)));
            let s_text = format!("10°10'{}\"", s);
            prop_assert_eq!(extract(&s_text), Err(Error::SecondsOutOfRange(s as f64)));
        }

        #[test]
        fn classifiers_are_exclusive(s in "[-0-9NSEWnsew°'′″\" ,.:]{0,24}") {
            prop_assert!(!(is_dms(&s) && is_dmm(&s)));
        }
    }
}
