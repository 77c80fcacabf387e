//! Lookup tables for hemisphere letters and sexagesimal unit glyphs.

use derive_try_from_primitive::TryFromPrimitive;
use std::convert::TryFrom;
use std::fmt;

/// Hemisphere letter attached to a coordinate component. The discriminants are the ASCII codes of
/// the (uppercase) letters, so that a letter can be recovered with `Hemisphere::try_from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum Hemisphere {
    North = 0x4e, // 'N'
    South = 0x53, // 'S'
    East = 0x45,  // 'E'
    West = 0x57,  // 'W'
}

impl Hemisphere {
    /// Look up a hemisphere letter, ignoring case.
    pub fn from_char(c: char) -> Option<Self> {
        if !c.is_ascii() {
            return None;
        }
        Self::try_from(c.to_ascii_uppercase() as u8).ok()
    }

    /// Sign factor applied to a magnitude in this hemisphere.
    pub fn sign(self) -> f64 {
        match self {
            Hemisphere::North | Hemisphere::East => 1.,
            Hemisphere::South | Hemisphere::West => -1.,
        }
    }

    pub fn letter(self) -> char {
        self as u8 as char
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Sexagesimal units, as used in formatted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Degrees,
    Minutes,
    Seconds,
}

impl Unit {
    pub fn glyph(self) -> char {
        match self {
            Unit::Degrees => '°',
            Unit::Minutes => '′',
            Unit::Seconds => '″',
        }
    }
}

/// Characters that only ever appear in DMS notation: hemisphere letters, unit glyphs and the
/// colon separator. A string containing any of them is never treated as DMM.
pub const DMS_ONLY_CHARS: &[char] = &[
    'N', 'S', 'E', 'W', '°', '\'', '’', '‘', '′', ':', '"', '″',
];

/// Returns `true` if `c` is one of `DMS_ONLY_CHARS`. Lowercase letters don't count, so that an
/// exponent such as the `e` in `4e1` stays valid DMM.
pub fn is_dms_only_char(c: char) -> bool {
    DMS_ONLY_CHARS.contains(&c)
}
