//! Angle units and conversions.
//!
//! Every public attitude function that accepts angles takes an explicit
//! [`AngleUnit`] and converts to radians on entry; all internal storage
//! and matrix math is radians-only.

use crate::constants::{ARCMIN_TO_RAD, ARCSEC_TO_RAD, DEG_TO_RAD};

/// Unit of an angular quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    /// Radians (the internal unit).
    #[default]
    Radians,
    /// Degrees.
    Degrees,
    /// Minutes of arc (1/60 degree).
    Arcminutes,
    /// Seconds of arc (1/3600 degree).
    Arcseconds,
}

impl AngleUnit {
    /// Multiplicative factor taking this unit to radians.
    fn to_radians_factor(self) -> f64 {
        match self {
            AngleUnit::Radians => 1.0,
            AngleUnit::Degrees => DEG_TO_RAD,
            AngleUnit::Arcminutes => ARCMIN_TO_RAD,
            AngleUnit::Arcseconds => ARCSEC_TO_RAD,
        }
    }
}

/// Convert an angle between units.
///
/// Routed through radians, so any unit pair is supported.
pub fn convert_angle(value: f64, from: AngleUnit, to: AngleUnit) -> f64 {
    value * from.to_radians_factor() / to.to_radians_factor()
}

/// Convert an angle to radians.
pub(crate) fn to_radians(value: f64, from: AngleUnit) -> f64 {
    value * from.to_radians_factor()
}
