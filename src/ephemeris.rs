//! # Low-precision ephemeris
//!
//! Geocentric ecliptic longitudes of the chart bodies at chart-work accuracy (≈ 0.01° for
//! the Keplerian planets, ≈ 0.5° for the Moon, ≈ 1° for Pluto). Planet longitudes are
//! referred to the J2000.0 equinox and the lunar series to the equinox of date; no
//! precession is applied between the two.
//!
//! ## Methods
//!
//! | Body                 | Method                                                            |
//! |----------------------|-------------------------------------------------------------------|
//! | Mercury … Neptune    | mean elements → Kepler's equation → heliocentric → minus Earth    |
//! | Sun                  | Earth heliocentric longitude + 180°                               |
//! | Moon                 | 5 fundamental arguments, 13 periodic terms                        |
//! | Pluto                | mean longitude + 4 periodic terms + first-order parallax          |
//! | North Node           | mean node regression polynomial                                   |
//! | Lilith               | mean perigee polynomial + 180° (mean apogee)                      |
//!
//! Motion is sampled by differencing the longitude at `T` and `T + 1 day`; a negative
//! signed difference marks the body retrograde.
//!
//! ## References
//!
//! * E. M. Standish, *Keplerian Elements for Approximate Positions of the Major Planets*.
//! * J. Meeus, *Astronomical Algorithms* (2nd ed.), chapters 37 and 47.
use log::{trace, warn};
use nalgebra::{Rotation3, Vector3};
use serde::Serialize;

use crate::{
    bodies::Body,
    constants::{AstronomicalUnit, Degree, JulianCenturies, DEGRAD, ONE_DAY_IN_CENTURIES, RADEG},
    kepler::{solve_kepler_detailed, KeplerSettings},
    orbital_elements::{OrbitalElementSet, EARTH},
    time::{normalize_degrees, normalize_radians, signed_degrees},
};

/// Heliocentric ecliptic spherical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeliocentricPosition {
    /// Ecliptic longitude in `[0, 360)` degrees.
    pub longitude: Degree,
    /// Ecliptic latitude in degrees, within ±90° by construction.
    pub latitude: Degree,
    /// Distance from the Sun (AU).
    pub radius: AstronomicalUnit,
}

/// Apparent daily motion of a body sampled over one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Motion {
    /// Signed longitude change over one day, in `(-180, 180]` degrees.
    pub daily_motion: Degree,
    pub retrograde: bool,
}

impl Motion {
    /// Motion between two longitudes one day apart.
    pub fn between(today: Degree, tomorrow: Degree) -> Self {
        let daily_motion = signed_degrees(tomorrow, today);
        Motion {
            daily_motion,
            retrograde: daily_motion < 0.0,
        }
    }

    /// Motion of a point that is never reported retrograde.
    pub fn direct(daily_motion: Degree) -> Self {
        Motion {
            daily_motion,
            retrograde: false,
        }
    }
}

/// Ephemeris calculator for the Keplerian bodies and the closed-form lunar points.
///
/// The struct only carries the Kepler solver stopping rules; it is `Copy` and can be
/// shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ephemeris {
    kepler: KeplerSettings,
}

impl Ephemeris {
    pub fn new(kepler: KeplerSettings) -> Self {
        Ephemeris { kepler }
    }

    /// Heliocentric ecliptic rectangular coordinates (AU) of a planet.
    ///
    /// Elements are propagated linearly to `t`, the mean anomaly `M = L − ϖ` is reduced
    /// to `[0, 2π)`, Kepler's equation gives the eccentric anomaly, and the orbital-plane
    /// position `(a(cos E − e), a√(1−e²) sin E, 0)` is rotated by
    /// `R_z(Ω) · R_x(I) · R_z(ω)` into the ecliptic frame, with `ω = ϖ − Ω`.
    pub fn heliocentric_rectangular(
        &self,
        elements: &OrbitalElementSet,
        t: JulianCenturies,
    ) -> Vector3<f64> {
        let el = elements.at(t);
        let a = el.semi_major_axis;
        let e = el.eccentricity;

        let mean_anomaly = normalize_radians(el.mean_anomaly() * RADEG);
        let solution = solve_kepler_detailed(mean_anomaly, e, &self.kepler);
        if !solution.converged {
            warn!(
                "Kepler's equation did not converge after {} iterations (M = {mean_anomaly}, e = {e}); using best estimate",
                solution.iterations
            );
        }
        let ecc_anom = solution.eccentric_anomaly;

        let in_plane = Vector3::new(
            a * (ecc_anom.cos() - e),
            a * (1.0 - e * e).sqrt() * ecc_anom.sin(),
            0.0,
        );

        let rotation = Rotation3::from_axis_angle(
            &Vector3::z_axis(),
            el.ascending_node_longitude * RADEG,
        ) * Rotation3::from_axis_angle(&Vector3::x_axis(), el.inclination * RADEG)
            * Rotation3::from_axis_angle(&Vector3::z_axis(), el.perihelion_argument() * RADEG);

        rotation * in_plane
    }

    /// Heliocentric ecliptic longitude, latitude and distance of a planet.
    pub fn heliocentric_position(
        &self,
        elements: &OrbitalElementSet,
        t: JulianCenturies,
    ) -> HeliocentricPosition {
        let xyz = self.heliocentric_rectangular(elements, t);
        let radius = xyz.norm();
        HeliocentricPosition {
            longitude: normalize_degrees(xyz.y.atan2(xyz.x) * DEGRAD),
            latitude: xyz.z.atan2(xyz.x.hypot(xyz.y)) * DEGRAD,
            radius,
        }
    }

    /// Geocentric ecliptic longitude of a planet: the planet's heliocentric vector minus
    /// the Earth's, projected on the ecliptic.
    pub fn geocentric_longitude(&self, elements: &OrbitalElementSet, t: JulianCenturies) -> Degree {
        let planet = self.heliocentric_rectangular(elements, t);
        let earth = self.heliocentric_rectangular(&EARTH, t);
        let delta = planet - earth;
        normalize_degrees(delta.y.atan2(delta.x) * DEGRAD)
    }

    /// Geocentric longitude of the Sun, antipodal to the Earth's heliocentric longitude.
    pub fn sun_longitude(&self, t: JulianCenturies) -> Degree {
        normalize_degrees(self.heliocentric_position(&EARTH, t).longitude + 180.0)
    }

    /// Geocentric longitude of Pluto.
    ///
    /// The heliocentric longitude is a linear mean longitude plus four periodic terms
    /// in the Pluto argument `P` and the Saturn argument `S`; the heliocentric distance
    /// uses the three leading terms in `P`. The geocentric value applies the first-order
    /// parallax `sin(λ − L⊕) / r` with the Earth's heliocentric longitude `L⊕`.
    ///
    /// Valid from 1885 to 2099.
    pub fn pluto_longitude(&self, t: JulianCenturies) -> Degree {
        let s = (50.03 + 1_222.113_8 * t) * RADEG;
        let p = (238.96 + 144.960_0 * t) * RADEG;

        // (S multiple, P multiple, sine coefficient, cosine coefficient)
        const LONGITUDE_TERMS: [(f64, f64, f64, f64); 4] = [
            (0.0, 1.0, -19.799_805, 19.850_055),
            (0.0, 2.0, 0.897_144, -4.954_829),
            (0.0, 3.0, 0.611_149, 1.211_027),
            (1.0, -1.0, 0.020_442, -0.009_987),
        ];
        const RADIUS_TERMS: [(f64, f64, f64); 3] = [
            (1.0, 6.686_543_9, 6.895_181_2),
            (2.0, -1.182_753_5, -0.033_253_8),
            (3.0, 0.159_317_9, -0.143_889_0),
        ];

        let helio_lon = 238.958_116
            + 144.96 * t
            + LONGITUDE_TERMS
                .iter()
                .map(|&(ks, kp, a, b)| {
                    let arg = ks * s + kp * p;
                    a * arg.sin() + b * arg.cos()
                })
                .sum::<f64>();

        let radius = 40.724_134_6
            + RADIUS_TERMS
                .iter()
                .map(|&(kp, a, b)| a * (kp * p).sin() + b * (kp * p).cos())
                .sum::<f64>();

        let earth_lon = self.heliocentric_position(&EARTH, t).longitude;
        let parallax = ((helio_lon - earth_lon) * RADEG).sin() / radius * DEGRAD;

        normalize_degrees(helio_lon + parallax)
    }

    /// Geocentric longitude of any body that does not depend on the observer's location.
    ///
    /// Returns `None` for the Ascendant and the Midheaven.
    pub fn body_longitude(&self, body: Body, t: JulianCenturies) -> Option<Degree> {
        let lon = match body {
            Body::Sun => self.sun_longitude(t),
            Body::Moon => moon_longitude(t),
            Body::Pluto => self.pluto_longitude(t),
            Body::NorthNode => north_node_longitude(t),
            Body::Lilith => lilith_longitude(t),
            Body::Ascendant | Body::Midheaven => return None,
            planet => self.geocentric_longitude(planet.planet()?.elements(), t),
        };
        trace!("{body} at T = {t:.9}: {lon:.6}°");
        Some(lon)
    }

    /// Longitude at `t` together with the motion sampled over the following day.
    ///
    /// Retrograde flags are only raised for the bodies that can appear retrograde; the
    /// Sun, Moon and lunar points always report direct motion.
    pub fn body_state(&self, body: Body, t: JulianCenturies) -> Option<(Degree, Motion)> {
        let today = self.body_longitude(body, t)?;
        let tomorrow = self.body_longitude(body, t + ONE_DAY_IN_CENTURIES)?;
        let motion = Motion::between(today, tomorrow);
        if body.can_retrograde() {
            Some((today, motion))
        } else {
            Some((today, Motion::direct(motion.daily_motion)))
        }
    }
}

/// Fundamental lunar arguments of date, in degrees.
struct LunarArguments {
    /// L′, mean longitude of the Moon
    mean_longitude: Degree,
    /// D, mean elongation of the Moon from the Sun
    elongation: Degree,
    /// M, mean anomaly of the Sun
    sun_anomaly: Degree,
    /// M′, mean anomaly of the Moon
    moon_anomaly: Degree,
    /// F, argument of latitude of the Moon
    latitude_argument: Degree,
}

impl LunarArguments {
    fn at(t: JulianCenturies) -> Self {
        LunarArguments {
            mean_longitude: 218.316_447_7 + 481_267.881_234_21 * t,
            elongation: 297.850_192_1 + 445_267.111_403_4 * t,
            sun_anomaly: 357.529_109_2 + 35_999.050_290_9 * t,
            moon_anomaly: 134.963_396_4 + 477_198.867_505_5 * t,
            latitude_argument: 93.272_095_0 + 483_202.017_523_3 * t,
        }
    }
}

// Periodic terms in longitude: (coefficient °, D, M, M′, F)
const MOON_LONGITUDE_TERMS: [(f64, f64, f64, f64, f64); 13] = [
    (6.288_774, 0.0, 0.0, 1.0, 0.0),
    (1.274_027, 2.0, 0.0, -1.0, 0.0),
    (0.658_314, 2.0, 0.0, 0.0, 0.0),
    (0.213_618, 0.0, 0.0, 2.0, 0.0),
    (-0.185_116, 0.0, 1.0, 0.0, 0.0),
    (-0.114_332, 0.0, 0.0, 0.0, 2.0),
    (0.058_793, 2.0, 0.0, -2.0, 0.0),
    (0.057_066, 2.0, -1.0, -1.0, 0.0),
    (0.053_322, 2.0, 0.0, 1.0, 0.0),
    (0.045_758, 2.0, -1.0, 0.0, 0.0),
    (-0.040_923, 0.0, 1.0, -1.0, 0.0),
    (-0.034_720, 1.0, 0.0, 0.0, 0.0),
    (-0.030_383, 0.0, 1.0, 1.0, 0.0),
];

/// Geocentric ecliptic longitude of the Moon (≈ 0.5° accuracy).
pub fn moon_longitude(t: JulianCenturies) -> Degree {
    let args = LunarArguments::at(t);
    let d = args.elongation * RADEG;
    let m = args.sun_anomaly * RADEG;
    let mp = args.moon_anomaly * RADEG;
    let f = args.latitude_argument * RADEG;

    let perturbation: f64 = MOON_LONGITUDE_TERMS
        .iter()
        .map(|&(coef, kd, km, kmp, kf)| coef * (kd * d + km * m + kmp * mp + kf * f).sin())
        .sum();

    normalize_degrees(args.mean_longitude + perturbation)
}

/// Longitude of the mean ascending node of the lunar orbit.
pub fn north_node_longitude(t: JulianCenturies) -> Degree {
    normalize_degrees(125.044_52 - 1_934.136_261 * t + 0.002_070_8 * t * t + t * t * t / 450_000.0)
}

/// Black Moon Lilith: the mean lunar apogee, taken as the mean perigee plus 180°.
pub fn lilith_longitude(t: JulianCenturies) -> Degree {
    let perigee = 83.353_246_5 + 4_069.013_728_7 * t - 0.010_320_0 * t * t - t.powi(3) / 80_053.0
        + t.powi(4) / 18_999_000.0;
    normalize_degrees(perigee + 180.0)
}

#[cfg(test)]
mod ephemeris_test {
    use super::*;
    use crate::{
        bodies::ALL_BODIES,
        orbital_elements::{Planet, ALL_PLANETS},
        time::{julian_centuries, julian_date},
    };
    use approx::assert_relative_eq;
    use hifitime::{Epoch, TimeScale};

    fn centuries(year: i32, month: u8, day: u8, hour: u8) -> f64 {
        let epoch = Epoch::from_gregorian(year, month, day, hour, 0, 0, 0, TimeScale::UTC);
        julian_centuries(julian_date(epoch))
    }

    fn angular_distance(a: f64, b: f64) -> f64 {
        signed_degrees(a, b).abs()
    }

    #[test]
    fn test_heliocentric_radius_within_orbit() {
        let eph = Ephemeris::default();
        for planet in ALL_PLANETS {
            for t in [-1.5, -0.3, 0.0, 0.25, 0.5] {
                let el = planet.elements().at(t);
                let pos = eph.heliocentric_position(planet.elements(), t);
                let perihelion = el.semi_major_axis * (1.0 - el.eccentricity);
                let aphelion = el.semi_major_axis * (1.0 + el.eccentricity);
                assert!(pos.radius >= perihelion - 1e-9 && pos.radius <= aphelion + 1e-9);
                assert!(pos.latitude.abs() <= el.inclination.abs() + 1e-9, "{planet}");
                assert!((0.0..360.0).contains(&pos.longitude));
            }
        }
    }

    #[test]
    fn test_earth_at_j2000() {
        // Sun's geometric longitude at J2000.0 is close to 280.37°
        let eph = Ephemeris::default();
        let earth = eph.heliocentric_position(&EARTH, 0.0);
        assert_relative_eq!(earth.radius, 0.9833, epsilon = 1e-3);
        assert!(angular_distance(eph.sun_longitude(0.0), 280.37) < 0.05);
    }

    #[test]
    fn test_sun_longitude_equinox_and_solstice() {
        let eph = Ephemeris::default();
        // March equinox 2020-03-20 03:50 UT, June solstice 2021-06-21 03:32 UT.
        // Longitudes are J2000 ecliptic: precession since 2000 shifts them by ~0.3°.
        assert!(angular_distance(eph.sun_longitude(centuries(2020, 3, 20, 4)), 0.0) < 0.5);
        assert!(angular_distance(eph.sun_longitude(centuries(2021, 6, 21, 4)), 90.0) < 0.5);
    }

    #[test]
    fn test_moon_longitude() {
        // Meeus example 47.a: 1992-04-12 0h TD, λ = 133.162655°
        let t = julian_centuries(2448724.5);
        assert!(angular_distance(moon_longitude(t), 133.162_655) < 0.5);
    }

    #[test]
    fn test_pluto_longitude() {
        // Meeus example 37.a: 1992-10-13 0h TD, α = 15h31m43.7s, δ = −4°27′29″,
        // i.e. a geocentric ecliptic longitude close to 231.7°
        let eph = Ephemeris::default();
        let t = julian_centuries(2448908.5);
        assert!(angular_distance(eph.pluto_longitude(t), 231.7) < 1.0);
    }

    #[test]
    fn test_lunar_points() {
        // Mean node at J2000.0 and its retrograde drift
        assert_relative_eq!(north_node_longitude(0.0), 125.04452, epsilon = 1e-9);
        let node_motion = signed_degrees(north_node_longitude(ONE_DAY_IN_CENTURIES), north_node_longitude(0.0));
        assert!(node_motion < 0.0 && node_motion > -0.06);

        assert_relative_eq!(lilith_longitude(0.0), 263.3532465, epsilon = 1e-9);
        let lilith_motion = signed_degrees(lilith_longitude(ONE_DAY_IN_CENTURIES), lilith_longitude(0.0));
        assert!(lilith_motion > 0.1 && lilith_motion < 0.12);
    }

    #[test]
    fn test_geocentric_inner_planets_stay_near_sun() {
        let eph = Ephemeris::default();
        for t in [-0.6, -0.1, 0.0, 0.17, 0.4] {
            let sun = eph.sun_longitude(t);
            let mercury = eph.geocentric_longitude(Planet::Mercury.elements(), t);
            let venus = eph.geocentric_longitude(Planet::Venus.elements(), t);
            assert!(angular_distance(mercury, sun) < 28.5);
            assert!(angular_distance(venus, sun) < 48.5);
        }
    }

    fn is_retrograde(eph: &Ephemeris, body: Body, t: JulianCenturies) -> bool {
        eph.body_state(body, t).unwrap().1.retrograde
    }

    #[test]
    fn test_retrograde_detection() {
        let eph = Ephemeris::default();
        // Mars opposition 2020-10-13: retrograde from early September to mid November
        assert!(is_retrograde(&eph, Body::Mars, centuries(2020, 10, 13, 0)));
        assert!(!is_retrograde(&eph, Body::Mars, centuries(2021, 3, 1, 0)));

        // Mercury through Pluto each retrograde at least once over one Mars synodic period
        for body in ALL_BODIES.into_iter().filter(Body::can_retrograde) {
            let any_retro = (0..800)
                .map(|d| centuries(2020, 1, 1, 0) + d as f64 * ONE_DAY_IN_CENTURIES)
                .any(|t| is_retrograde(&eph, body, t));
            assert!(any_retro, "{body}");
        }
    }

    #[test]
    fn test_body_state_never_retrograde_for_luminaries_and_points() {
        let eph = Ephemeris::default();
        for t in [-0.5, 0.0, 0.2] {
            for body in [Body::Sun, Body::Moon, Body::NorthNode, Body::Lilith] {
                let (lon, motion) = eph.body_state(body, t).unwrap();
                assert!((0.0..360.0).contains(&lon));
                assert!(!motion.retrograde, "{body}");
            }
            let (_, node_motion) = eph.body_state(Body::NorthNode, t).unwrap();
            assert!(node_motion.daily_motion < 0.0);

            assert!(eph.body_state(Body::Ascendant, t).is_none());
            assert!(eph.body_state(Body::Midheaven, t).is_none());
        }
    }

    #[test]
    fn test_motion_wraps_across_aries() {
        let motion = Motion::between(359.5, 0.5);
        assert_relative_eq!(motion.daily_motion, 1.0, epsilon = 1e-12);
        assert!(!motion.retrograde);

        let motion = Motion::between(0.2, 359.9);
        assert!(motion.retrograde);
    }
}
