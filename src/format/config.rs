//! Decomposition of decimal degrees into the sexagesimal parts used by the formatter.

use crate::units::Hemisphere;

/// Sexagesimal breakdown of a single axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisConfig {
    /// The signed value that was decomposed.
    pub initial: f64,
    /// Absolute value in decimal degrees.
    pub degrees: f64,
    pub degrees_int: f64,
    pub degrees_frac: f64,
    /// The fractional degrees expressed in seconds.
    pub seconds_total: f64,
    /// The fractional degrees expressed in decimal minutes.
    pub minutes: f64,
    pub minutes_int: f64,
    /// Seconds left over after removing the whole minutes.
    pub seconds: f64,
}

impl AxisConfig {
    pub fn new(value: f64) -> Self {
        let degrees = value.abs();
        let degrees_int = degrees.floor();
        let degrees_frac = degrees - degrees_int;
        let seconds_total = degrees_frac * 3600.;
        let minutes = seconds_total / 60.;
        let minutes_int = minutes.floor();
        let seconds = seconds_total - minutes_int * 60.;

        AxisConfig {
            initial: value,
            degrees,
            degrees_int,
            degrees_frac,
            seconds_total,
            minutes,
            minutes_int,
            seconds,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.initial < 0.
    }
}

/// Sexagesimal breakdown of a coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateConfig {
    pub longitude: AxisConfig,
    pub latitude: AxisConfig,
    /// `true` for strictly positive latitudes. The equator counts as south.
    pub north: bool,
    /// `true` for strictly positive longitudes. The prime meridian counts as west.
    pub east: bool,
}

impl CoordinateConfig {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        CoordinateConfig {
            longitude: AxisConfig::new(longitude),
            latitude: AxisConfig::new(latitude),
            north: latitude > 0.,
            east: longitude > 0.,
        }
    }

    pub fn latitude_hemisphere(&self) -> Hemisphere {
        if self.north {
            Hemisphere::North
        } else {
            Hemisphere::South
        }
    }

    pub fn longitude_hemisphere(&self) -> Hemisphere {
        if self.east {
            Hemisphere::East
        } else {
            Hemisphere::West
        }
    }
}

#[cfg(test)]
mod test {
    use super::{AxisConfig, CoordinateConfig};
    use crate::units::Hemisphere;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-6, "{} != {}", a, b);
    }

    #[test]
    fn test_axis_decomposition() {
        let axis = AxisConfig::new(-35.282);
        assert_eq!(axis.initial, -35.282);
        assert_eq!(axis.degrees, 35.282);
        assert_eq!(axis.degrees_int, 35.);
        assert_close(axis.degrees_frac, 0.282);
        assert_close(axis.seconds_total, 1015.2);
        assert_close(axis.minutes, 16.92);
        assert_eq!(axis.minutes_int, 16.);
        assert_close(axis.seconds, 55.2);
        assert!(axis.is_negative());

        let axis = AxisConfig::new(149.128684);
        assert_eq!(axis.degrees_int, 149.);
        assert_eq!(axis.minutes_int, 7.);
        assert_close(axis.seconds, 43.2624);
        assert!(!axis.is_negative());
    }

    #[test]
    fn test_hemisphere_flags() {
        let config = CoordinateConfig::new(149.128684, -35.282);
        assert!(!config.north);
        assert!(config.east);
        assert_eq!(config.latitude_hemisphere(), Hemisphere::South);
        assert_eq!(config.longitude_hemisphere(), Hemisphere::East);

        // Zero is classified as south and west
        let config = CoordinateConfig::new(0., 0.);
        assert!(!config.north);
        assert!(!config.east);
        assert_eq!(config.latitude_hemisphere(), Hemisphere::South);
        assert_eq!(config.longitude_hemisphere(), Hemisphere::West);
    }
}
