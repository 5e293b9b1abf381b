//! Physical constants used to put a transiting system into stellar-radius units.
//!
//! All lengths are in metres and all times in seconds (SI).

use std::f64::consts::PI;

/// Astronomical unit (m), IAU 2012 exact value.
pub const AU: f64 = 1.495_978_707e11;

/// Nominal solar radius (m), IAU 2015 Resolution B3.
pub const R_SUN: f64 = 6.957e8;

/// Nominal equatorial Jupiter radius (m), IAU 2015 Resolution B3.
pub const R_JUP: f64 = 7.149_2e7;

/// Seconds per day.
pub const SECONDS_IN_DAY: f64 = 86_400.0;

/// Degrees to radians.
pub const RADIANS_IN_DEGREE: f64 = PI / 180.0;

/// Converts days to seconds.
pub fn days_to_seconds(days: f64) -> f64 {
    days * SECONDS_IN_DAY
}

/// Converts degrees to radians.
pub fn degrees_to_radians(deg: f64) -> f64 {
    deg * RADIANS_IN_DEGREE
}
