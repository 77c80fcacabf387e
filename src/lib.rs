#![forbid(unsafe_code)]

//! Conversion of geographic coordinates between decimal degrees and sexagesimal text.
//!
//! Parsing accepts degrees/minutes/seconds (`59°12'7.7"N 02°15'39.6"W`), degrees and decimal
//! minutes (`41 24.2028, -2 10.4418`) and plain decimal degrees (`41.40338, 2.17403`), and always
//! produces a `[longitude, latitude]` pair. Formatting goes the other way, driven by a small
//! template language (see `format::Template`).
//!
//! ```
//! use libdms::{from_dms, to_dms, FormatOptions};
//!
//! let s = to_dms(&[149.128684, -35.282], None, &FormatOptions::default()).unwrap();
//! assert_eq!(s, "35° 16′ 55.20000″ S 149° 7′ 43.26240″ E");
//!
//! let c = from_dms("59°N 02°W").unwrap();
//! assert_eq!((c.longitude, c.latitude), (-2., 59.));
//! ```

mod coordinate;
pub mod dmm;
pub mod dms;
pub mod error;
pub mod format;
pub mod parse;
pub mod units;
pub mod version;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use coordinate::Coordinate;
pub use dmm::{from_dmm, from_gmm, is_dmm};
pub use dms::{from_dms, is_dms};
pub use error::{CoordResult, Error};
pub use format::{to_dms, CoordinateConfig, FormatOptions, DEFAULT_FORMAT};

/// The notations that `parse` can tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// Degrees, minutes and seconds, with unit glyphs and/or hemisphere letters.
    DMS,
    /// Degrees and decimal minutes, or plain decimal degrees, separated by a comma.
    DMM,
}

impl Notation {
    /// Work out which notation `text` is written in, if any. DMM takes priority over DMS, since
    /// most DMM strings are also accepted by the DMS grammar.
    pub fn detect(text: &str) -> Option<Self> {
        if is_dmm(text) {
            Some(Notation::DMM)
        } else if is_dms(text) {
            Some(Notation::DMS)
        } else {
            None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Notation::DMS => "dms",
            Notation::DMM => "dmm",
        }
    }
}

/// Parse a coordinate pair in any of the supported notations.
pub fn parse(text: &str) -> CoordResult<Coordinate> {
    match Notation::detect(text) {
        Some(Notation::DMM) => from_dmm(text),
        Some(Notation::DMS) => from_dms(text),
        // Neither classifier accepted the input, so the DMS parser reports why
        None => from_dms(text),
    }
}

#[cfg(test)]
mod test {
    use super::{parse, Error, Notation};

    #[test]
    fn test_detect_notation() {
        assert_eq!(Notation::detect("59°12'7.7\"N 02°15'39.6\"W"), Some(Notation::DMS));
        assert_eq!(Notation::detect("41 24.2028, -2 10.4418"), Some(Notation::DMM));
        assert_eq!(Notation::detect("41.40338, 2.17403"), Some(Notation::DMM));
        assert_eq!(Notation::detect("nothing to see"), None);
    }

    #[test]
    fn test_parse() {
        let c = parse("41 24.2028, -2 10.4418").unwrap();
        assert_eq!(c.longitude, -(2. + 10.4418 / 60.));

        let c = parse("59°N 02°W").unwrap();
        assert_eq!(c.longitude, -2.);
        assert_eq!(c.latitude, 59.);

        assert!(matches!(parse("nothing to see"), Err(Error::Parse(_))));
        assert_eq!(parse("181°N 10°E"), Err(Error::DegreesOutOfRange(181.)));

        // Out of range for DMM, but the DMS parser accepts latitudes up to 180 degrees
        assert_eq!(Notation::detect("91, 0"), Some(Notation::DMS));
        assert_eq!(parse("91, 0").unwrap().latitude, 91.);

        let c = parse("4e1, 5").unwrap();
        assert_eq!(c.latitude, 40.);
        assert_eq!(c.longitude, 5.);
    }
}
