//! Process-wide numeric constants.
//!
//! Angle-unit conversion factors plus the handful of physical constants
//! the surrounding toolkit shares. Everything here is a read-only
//! `const`; there is no runtime mutation.

/// Conversion factor degrees -> rad.
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Conversion factor rad -> deg.
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Conversion factor arcminutes -> rad (1/60 degree).
pub const ARCMIN_TO_RAD: f64 = DEG_TO_RAD / 60.0;

/// Conversion factor arcseconds -> rad (1/3600 degree).
pub const ARCSEC_TO_RAD: f64 = DEG_TO_RAD / 3600.0;

/// Universal gravitational constant G (km³ kg⁻¹ s⁻²).
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67259e-20;

/// Speed of light in vacuum (km/s).
pub const SPEED_OF_LIGHT: f64 = 2.99792458e5;
