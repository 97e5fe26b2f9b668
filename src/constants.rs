//! # Constants and type definitions for Almagest
//!
//! This module centralizes the **astronomical constants**, **conversion factors**, and
//! **common type aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Epochs and time-scale offsets (J2000.0, Unix epoch as a Julian Date)
//! - Unit conversions (degrees ↔ radians, days ↔ centuries)
//! - The fixed obliquity of the ecliptic used by the chart angles
//! - Type aliases used across the crate

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// One day expressed in Julian centuries, the step used for motion sampling
pub const ONE_DAY_IN_CENTURIES: f64 = 1.0 / DAYS_PER_CENTURY;

/// Julian Date of J2000.0 (2000-01-01 12:00:00 TT)
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01 00:00:00 UTC)
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Radians → degrees
pub const DEGRAD: f64 = 180.0 / std::f64::consts::PI;

/// Obliquity of the ecliptic in degrees.
///
/// Held constant at its J2000.0 value: the secular drift (≈ −47″ per century) is
/// well below the accuracy of the low-precision body formulas.
pub const OBLIQUITY_DEG: Degree = 23.4393;

/// Obliquity of the ecliptic in radians
pub const OBLIQUITY: Radian = OBLIQUITY_DEG * RADEG;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Julian Date (days)
pub type JulianDate = f64;
/// Julian centuries elapsed since J2000.0
pub type JulianCenturies = f64;
