//! The `Coordinate` value type shared by the parsers and the formatter.

use crate::{
    error::CoordResult,
    format::{self, FormatOptions},
};
use serde::{ser::SerializeTuple, Serialize, Serializer};

/// A point on the globe in decimal degrees. Longitude is positive east, latitude positive north.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Coordinate {
            longitude,
            latitude,
        }
    }

    /// Format this coordinate; see `format::to_dms`.
    pub fn to_dms(&self, format: Option<&str>, options: &FormatOptions) -> CoordResult<String> {
        format::to_dms(&[self.longitude, self.latitude], format, options)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.longitude, c.latitude]
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([longitude, latitude]: [f64; 2]) -> Self {
        Coordinate::new(longitude, latitude)
    }
}

// Coordinates are serialized as `[longitude, latitude]` arrays, the same layout used by GeoJSON.
impl Serialize for Coordinate {
    fn serialize<S>(&self, ser: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tup = ser.serialize_tuple(2)?;
        tup.serialize_element(&self.longitude)?;
        tup.serialize_element(&self.latitude)?;
        tup.end()
    }
}

#[cfg(test)]
mod test {
    use super::Coordinate;

    #[test]
    fn test_serialize_as_pair() {
        let c = Coordinate::new(149.128684, -35.282);
        assert_eq!(serde_json::to_string(&c).unwrap(), "[149.128684,-35.282]");

        let pair: [f64; 2] = c.into();
        assert_eq!(pair, [149.128684, -35.282]);
        assert_eq!(Coordinate::from(pair), c);
    }
}
