//! # Time and angle coordinates
//!
//! Conversions from a civil instant to the time arguments used by every formula of the
//! crate (Julian Date, Julian centuries since J2000.0), sidereal time, and the angle
//! normalization helpers that keep every longitude inside its principal range.
//!
//! All instants are carried as [`hifitime::Epoch`]. No TT/UTC reconciliation is
//! performed: the Julian Date is derived directly from Unix seconds, which is well
//! inside the accuracy budget of the low-precision body formulas.
use hifitime::Epoch;

use crate::constants::{
    Degree, JulianCenturies, JulianDate, Radian, DAYS_PER_CENTURY, DPI, J2000_JD, RADEG,
    SECONDS_PER_DAY, UNIX_EPOCH_JD,
};

/// Julian Date of an instant.
///
/// Computed as `JD = 2440587.5 + unix_seconds / 86400`.
///
/// Arguments
/// ---------
/// * `epoch`: the instant, in any time scale supported by hifitime (UTC expected).
///
/// Return
/// ------
/// * the Julian Date in days.
pub fn julian_date(epoch: Epoch) -> JulianDate {
    UNIX_EPOCH_JD + epoch.to_unix_seconds() / SECONDS_PER_DAY
}

/// Julian centuries elapsed since J2000.0: `T = (JD − 2451545.0) / 36525`.
pub fn julian_centuries(jd: JulianDate) -> JulianCenturies {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Compute the Greenwich Mean Sidereal Time (GMST) in radians for a given Julian Date.
///
/// The sidereal angle is evaluated in degrees with the polynomial
///
/// ```text
/// θ = 280.46061837 + 360.98564736629·(JD − 2451545) + 0.000387933·T² − T³/38710000
/// ```
///
/// then normalized to `[0°, 360°)` and converted to radians.
///
/// Arguments
/// ---------
/// * `jd`: Julian Date (UT).
///
/// Return
/// ------
/// * GMST angle in radians, normalized to the interval [0, 2π).
///
/// See also
/// --------
/// * [`local_sidereal_time`] – adds the observer's longitude.
pub fn gmst(jd: JulianDate) -> Radian {
    const C0: f64 = 280.460_618_37;
    const C1: f64 = 360.985_647_366_29;
    const C2: f64 = 0.000_387_933;
    const C3: f64 = 38_710_000.0;

    let t = julian_centuries(jd);
    let theta = C0 + C1 * (jd - J2000_JD) + C2 * t * t - t * t * t / C3;

    normalize_degrees(theta) * RADEG
}

/// Local sidereal time in radians for an observer at `longitude` (degrees, east-positive).
pub fn local_sidereal_time(jd: JulianDate, longitude: Degree) -> Radian {
    normalize_radians(gmst(jd) + longitude * RADEG)
}

/// Normalize an angle in degrees to `[0, 360)`.
///
/// The remainder is shifted by one turn only when negative, so an angle already in
/// range comes back unchanged. The final guard folds the `360.0` that rounding can
/// produce for tiny negative inputs back to zero.
pub fn normalize_degrees(angle: Degree) -> Degree {
    let mut wrapped = angle % 360.0;
    if wrapped < 0.0 {
        wrapped += 360.0;
    }
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Normalize an angle in radians to `[0, 2π)`.
pub fn normalize_radians(angle: Radian) -> Radian {
    let mut wrapped = angle % DPI;
    if wrapped < 0.0 {
        wrapped += DPI;
    }
    if wrapped >= DPI {
        0.0
    } else {
        wrapped
    }
}

/// Difference of two angles in degrees folded to `(-180, 180]`.
///
/// Positive when `to` lies ahead of `from` along the direction of increasing longitude.
pub fn signed_degrees(to: Degree, from: Degree) -> Degree {
    let diff = normalize_degrees(to - from);
    if diff > 180.0 {
        diff - 360.0
    } else {
        diff
    }
}

#[cfg(test)]
mod time_test {
    use super::*;
    use approx::assert_relative_eq;
    use hifitime::TimeScale;

    #[test]
    fn test_julian_date_j2000() {
        let epoch = Epoch::from_gregorian(2000, 1, 1, 12, 0, 0, 0, TimeScale::UTC);
        assert_relative_eq!(julian_date(epoch), 2451545.0, epsilon = 1e-8);
        assert_relative_eq!(julian_centuries(julian_date(epoch)), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_julian_date_unix_epoch() {
        let epoch = Epoch::from_gregorian(1970, 1, 1, 0, 0, 0, 0, TimeScale::UTC);
        assert_relative_eq!(julian_date(epoch), UNIX_EPOCH_JD, epsilon = 1e-8);
    }

    #[test]
    fn test_julian_centuries() {
        assert_relative_eq!(julian_centuries(2451545.0 + 36525.0), 1.0);
        assert_relative_eq!(julian_centuries(2451545.0 - 18262.5), -0.5);
    }

    #[test]
    fn test_gmst() {
        // At J2000.0 the polynomial reduces to its constant term.
        assert_relative_eq!(gmst(J2000_JD), 280.46061837 * RADEG, epsilon = 1e-12);

        // One day later the angle advances by 0.98564736629° modulo a full turn.
        let expected = normalize_degrees(280.46061837 + 360.98564736629) * RADEG;
        assert_relative_eq!(gmst(J2000_JD + 1.0), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_local_sidereal_time() {
        let g = gmst(J2000_JD);
        assert_relative_eq!(local_sidereal_time(J2000_JD, 0.0), g, epsilon = 1e-12);

        let east = local_sidereal_time(J2000_JD, 90.0);
        assert_relative_eq!(east, normalize_radians(g + DPI / 4.0), epsilon = 1e-12);

        let west = local_sidereal_time(J2000_JD, -179.5);
        assert!((0.0..DPI).contains(&west));
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_relative_eq!(normalize_degrees(-30.0), 330.0);
        assert_relative_eq!(normalize_degrees(725.5), 5.5);
        assert_relative_eq!(normalize_degrees(-1085.0), 355.0);
        assert_eq!(normalize_degrees(-1e-18), 0.0);

        let mut angle = -7200.25;
        while angle < 7200.0 {
            let n = normalize_degrees(angle);
            assert!((0.0..360.0).contains(&n), "{angle} -> {n}");
            assert_eq!(normalize_degrees(n), n);
            angle += 13.37;
        }
    }

    #[test]
    fn test_normalize_radians() {
        assert_relative_eq!(normalize_radians(-std::f64::consts::PI), std::f64::consts::PI);
        assert_relative_eq!(normalize_radians(5.0 * DPI + 1.0), 1.0, epsilon = 1e-12);
        assert_eq!(normalize_radians(DPI), 0.0);
        assert_eq!(normalize_radians(-1e-18), 0.0);

        let mut angle = -40.05;
        while angle < 40.0 {
            let n = normalize_radians(angle);
            assert!((0.0..DPI).contains(&n), "{angle} -> {n}");
            assert_eq!(normalize_radians(n), n);
            angle += 0.0371;
        }
    }

    #[test]
    fn test_normalize_is_idempotent_after_negative_shift() {
        // A negative input whose shifted remainder used to move on a second pass
        let angle = -7.190_000_000_049_997;
        let once = normalize_degrees(angle);
        assert_eq!(normalize_degrees(once), once);
        assert_relative_eq!(once, 352.81, epsilon = 1e-9);

        let in_range = 352.809_999_999_95;
        assert_eq!(normalize_degrees(in_range), in_range);
    }

    #[test]
    fn test_signed_degrees() {
        assert_relative_eq!(signed_degrees(10.0, 350.0), 20.0);
        assert_relative_eq!(signed_degrees(350.0, 10.0), -20.0);
        assert_relative_eq!(signed_degrees(190.0, 10.0), 180.0);
        assert_relative_eq!(signed_degrees(5.0, 5.0), 0.0);
    }
}
