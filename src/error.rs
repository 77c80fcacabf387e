//! Error types for coordinate parsing and formatting.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The input doesn't have the structure of a coordinate pair.
    #[error("Could not parse coordinate string: {0}")]
    Parse(String),
    #[error("Degrees out of range: {0}")]
    DegreesOutOfRange(f64),
    #[error("Minutes out of range: {0}")]
    MinutesOutOfRange(f64),
    #[error("Seconds out of range: {0}")]
    SecondsOutOfRange(f64),
    /// The parsed pair lies outside of [-180, 180] x [-90, 90].
    #[error("Lon/Lat values out of range: [{longitude}, {latitude}]")]
    OutOfRange { longitude: f64, latitude: f64 },
    /// The value handed to the formatter isn't a pair of finite numbers.
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
    #[error("Invalid format options: {0}")]
    InvalidOptions(String),
}

/// Result type for coordinate operations.
pub type CoordResult<T> = Result<T, Error>;
