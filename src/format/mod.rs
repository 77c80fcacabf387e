//! Formatting of coordinate pairs as sexagesimal text.

mod config;
mod template;

pub use config::{AxisConfig, CoordinateConfig};
pub use template::{Template, Token};

use crate::error::{CoordResult, Error};
use serde::{Deserialize, Serialize};

/// Format used by `to_dms` when none is given.
pub const DEFAULT_FORMAT: &str = "DD MM ss X";

/// Largest accepted `decimal_places`.
pub const MAX_DECIMAL_PLACES: usize = 100;

/// Options for `to_dms`. Any field missing from a deserialized object takes its default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatOptions {
    /// Number of decimal places for the decimal tokens (`dd`, `d`, `mm`, `m`, `ss`, `s`).
    pub decimal_places: usize,
    /// Text inserted between the latitude and the longitude.
    pub lat_lon_separator: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            decimal_places: 5,
            lat_lon_separator: " ".to_string(),
        }
    }
}

/// Format a `[longitude, latitude]` pair using `format` (see `template` for the available
/// tokens), latitude first.
pub fn to_dms(
    coordinate: &[f64],
    format: Option<&str>,
    options: &FormatOptions,
) -> CoordResult<String> {
    let (longitude, latitude) = match *coordinate {
        [longitude, latitude] if longitude.is_finite() && latitude.is_finite() => {
            (longitude, latitude)
        }
        [_, _] => {
            return Err(Error::InvalidCoordinate(format!(
                "{:?} contains a non-finite value",
                coordinate
            )))
        }
        _ => {
            return Err(Error::InvalidCoordinate(format!(
                "expected [longitude, latitude], got {} values",
                coordinate.len()
            )))
        }
    };

    let places = options.decimal_places;
    if places > MAX_DECIMAL_PLACES {
        return Err(Error::InvalidOptions(format!(
            "decimal places must be at most {}, got {}",
            MAX_DECIMAL_PLACES, places
        )));
    }

    let template = Template::parse(format.unwrap_or(DEFAULT_FORMAT))?;
    let config = CoordinateConfig::new(longitude, latitude);

    let lat = template.render(&config.latitude, config.latitude_hemisphere(), places);
    let lon = template.render(&config.longitude, config.longitude_hemisphere(), places);
    Ok(format!("{}{}{}", lat, options.lat_lon_separator, lon))
}
