//! # Chart angles
//!
//! Ascendant and Midheaven from local sidereal time and geographic latitude.
//!
//! ```text
//! MC      = atan2(sin θ, cos θ · cos ε)
//! ASC_raw = atan2(−cos θ, sin θ · cos ε + tan φ · sin ε)
//! ```
//!
//! with θ the local sidereal time, ε the obliquity and φ the latitude. The raw
//! arctangent can land on the Descendant, 180° away from the rising point. The rising
//! point always lies in the half of the ecliptic that follows the Midheaven, so the
//! raw value is flipped whenever `ASC − MC` (mod 360) exceeds 180°.
//!
//! The tangent diverges at the poles; latitudes are clamped to ±`latitude_limit`
//! before use and the clamp is reported in [`ChartAngles::latitude_clamped`].
use log::{debug, warn};
use serde::Serialize;

use crate::{
    constants::{Degree, Radian, DEGRAD, OBLIQUITY, RADEG},
    time::normalize_degrees,
};

/// Default absolute latitude bound applied before the tangent.
pub const DEFAULT_LATITUDE_LIMIT: Degree = 89.9999;

/// Ascendant and Midheaven of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartAngles {
    /// Ecliptic longitude of the Ascendant, `[0, 360)`.
    pub ascendant: Degree,
    /// Ecliptic longitude of the Midheaven, `[0, 360)`.
    pub midheaven: Degree,
    /// True when the latitude had to be pulled back inside the supported range.
    pub latitude_clamped: bool,
}

/// Compute the chart angles with the default latitude limit.
///
/// Arguments
/// ---------
/// * `lst`: local sidereal time in radians.
/// * `latitude`: geographic latitude in degrees, north positive.
///
/// Return
/// ------
/// * the Ascendant and Midheaven; the Ascendant lies strictly between 0° and 180° ahead
///   of the Midheaven for every non-degenerate input.
pub fn compute_angles(lst: Radian, latitude: Degree) -> ChartAngles {
    compute_angles_with_limit(lst, latitude, DEFAULT_LATITUDE_LIMIT)
}

/// Compute the chart angles, clamping `|latitude|` to `latitude_limit` degrees.
///
/// A limit that is not a finite value inside `(0, 90)` is replaced by
/// [`DEFAULT_LATITUDE_LIMIT`].
pub fn compute_angles_with_limit(
    lst: Radian,
    latitude: Degree,
    latitude_limit: Degree,
) -> ChartAngles {
    let limit = if latitude_limit > 0.0 && latitude_limit < 90.0 {
        latitude_limit
    } else {
        warn!("latitude limit {latitude_limit}° outside (0, 90), using {DEFAULT_LATITUDE_LIMIT}°");
        DEFAULT_LATITUDE_LIMIT
    };
    let clamped = latitude.clamp(-limit, limit);
    let latitude_clamped = clamped != latitude;
    if latitude_clamped {
        debug!("latitude {latitude}° clamped to {clamped}° for the Ascendant");
    }

    let midheaven = midheaven(lst);

    let (sin_e, cos_e) = OBLIQUITY.sin_cos();
    let (sin_t, cos_t) = lst.sin_cos();
    let raw = normalize_degrees(
        (-cos_t).atan2(sin_t * cos_e + (clamped * RADEG).tan() * sin_e) * DEGRAD,
    );

    ChartAngles {
        ascendant: disambiguate_ascendant(raw, midheaven),
        midheaven,
        latitude_clamped,
    }
}

/// Midheaven: the ecliptic point on the upper meridian.
pub fn midheaven(lst: Radian) -> Degree {
    normalize_degrees(lst.sin().atan2(lst.cos() * OBLIQUITY.cos()) * DEGRAD)
}

/// Move a raw ascendant onto the rising half of the ecliptic.
///
/// If the raw value sits more than 180° ahead of the Midheaven it is the Descendant,
/// and the opposite point is returned.
pub fn disambiguate_ascendant(raw_ascendant: Degree, midheaven: Degree) -> Degree {
    let raw = normalize_degrees(raw_ascendant);
    if normalize_degrees(raw - midheaven) > 180.0 {
        normalize_degrees(raw + 180.0)
    } else {
        raw
    }
}

#[cfg(test)]
mod ascendant_test {
    use super::*;
    use crate::constants::DPI;
    use approx::assert_relative_eq;

    #[test]
    fn test_equator_at_zero_sidereal_time() {
        let angles = compute_angles(0.0, 0.0);
        assert_relative_eq!(angles.midheaven, 0.0, epsilon = 1e-12);
        assert_relative_eq!(angles.ascendant, 90.0, epsilon = 1e-9);
        assert!(!angles.latitude_clamped);
    }

    #[test]
    fn test_midheaven_cardinal_points() {
        assert_relative_eq!(midheaven(DPI / 4.0), 90.0, epsilon = 1e-9);
        assert_relative_eq!(midheaven(DPI / 2.0), 180.0, epsilon = 1e-9);
        assert_relative_eq!(midheaven(3.0 * DPI / 4.0), 270.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ascendant_follows_midheaven() {
        let mut lst_deg = 0.37;
        while lst_deg < 360.0 {
            let mut latitude = -88.5;
            while latitude < 89.0 {
                let angles = compute_angles(lst_deg * RADEG, latitude);
                let ahead = normalize_degrees(angles.ascendant - angles.midheaven);
                assert!(
                    ahead > 0.0 && ahead < 180.0,
                    "lst={lst_deg} lat={latitude} asc={} mc={}",
                    angles.ascendant,
                    angles.midheaven
                );
                assert!((0.0..360.0).contains(&angles.ascendant));
                assert!((0.0..360.0).contains(&angles.midheaven));
                latitude += 3.7;
            }
            lst_deg += 7.3;
        }
    }

    #[test]
    fn test_known_chart() {
        // LST = 15°, latitude 51.5° N: MC in mid Aries, ASC in early Leo
        let angles = compute_angles(15f64.to_radians(), 51.5);
        assert_relative_eq!(angles.midheaven, 16.280, epsilon = 0.001);
        assert_relative_eq!(angles.ascendant, 127.364, epsilon = 0.001);
    }

    #[test]
    fn test_pole_is_clamped() {
        let north = compute_angles(1.0, 90.0);
        assert!(north.latitude_clamped);
        assert!(north.ascendant.is_finite());
        assert!((0.0..360.0).contains(&north.ascendant));

        let south = compute_angles_with_limit(1.0, -80.0, 66.0);
        let reference = compute_angles(1.0, -66.0);
        assert!(south.latitude_clamped);
        assert!(!reference.latitude_clamped);
        assert_eq!(south.ascendant, reference.ascendant);
        assert_eq!(south.midheaven, reference.midheaven);
    }

    #[test]
    fn test_invalid_limit_falls_back_to_default() {
        let reference = compute_angles(1.0, 10.0);
        for limit in [f64::NAN, -1.0, 0.0, 90.0, 120.0, f64::INFINITY] {
            let angles = compute_angles_with_limit(1.0, 10.0, limit);
            assert_eq!(angles, reference, "limit={limit}");
        }

        let pole = compute_angles_with_limit(1.0, 90.0, -1.0);
        assert!(pole.latitude_clamped);
        assert_eq!(pole, compute_angles(1.0, 90.0));
    }

    #[test]
    fn test_disambiguation() {
        assert_relative_eq!(disambiguate_ascendant(270.0, 0.0), 90.0);
        assert_relative_eq!(disambiguate_ascendant(90.0, 0.0), 90.0);
        assert_relative_eq!(disambiguate_ascendant(10.0, 300.0), 10.0);
        assert_relative_eq!(disambiguate_ascendant(200.0, 300.0), 20.0);
    }
}
