//! # Mean orbital elements of the major planets
//!
//! Static Keplerian element sets for Mercury through Neptune plus the Earth–Moon
//! barycenter, each element given as its J2000.0 value and a linear secular rate per
//! Julian century. The values are the JPL "approximate positions of the planets"
//! table valid from 1800 AD to 2050 AD (Standish, *Keplerian Elements for Approximate
//! Positions of the Major Planets*).
//!
//! Units
//! -----
//! * semi-major axis: AU, rate in AU per century
//! * eccentricity: unitless, rate per century
//! * angles (inclination, mean longitude, longitude of perihelion, longitude of the
//!   ascending node): degrees, rates in degrees per century
//!
//! The table is `const` data: it is built at compile time and shared read-only by
//! every chart computation.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    almagest_errors::AlmagestError,
    constants::{Degree, JulianCenturies},
};

/// A single orbital element: value at J2000.0 and linear rate per Julian century.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRate {
    pub value: f64,
    pub rate: f64,
}

impl ElementRate {
    pub const fn new(value: f64, rate: f64) -> Self {
        ElementRate { value, rate }
    }

    /// Linear propagation to `t` Julian centuries from J2000.0.
    #[inline]
    pub fn at(&self, t: JulianCenturies) -> f64 {
        self.value + self.rate * t
    }
}

/// Mean Keplerian element set of one planet, referred to the mean ecliptic and
/// equinox of J2000.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElementSet {
    /// a (AU)
    pub semi_major_axis: ElementRate,
    /// e
    pub eccentricity: ElementRate,
    /// I (degrees)
    pub inclination: ElementRate,
    /// L (degrees)
    pub mean_longitude: ElementRate,
    /// ϖ (degrees)
    pub perihelion_longitude: ElementRate,
    /// Ω (degrees)
    pub ascending_node_longitude: ElementRate,
}

/// Element set propagated to a given date, angles still in degrees and unwrapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementsAtDate {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: Degree,
    pub mean_longitude: Degree,
    pub perihelion_longitude: Degree,
    pub ascending_node_longitude: Degree,
}

impl OrbitalElementSet {
    /// Propagate every element linearly to `t` Julian centuries from J2000.0.
    pub fn at(&self, t: JulianCenturies) -> ElementsAtDate {
        ElementsAtDate {
            semi_major_axis: self.semi_major_axis.at(t),
            eccentricity: self.eccentricity.at(t),
            inclination: self.inclination.at(t),
            mean_longitude: self.mean_longitude.at(t),
            perihelion_longitude: self.perihelion_longitude.at(t),
            ascending_node_longitude: self.ascending_node_longitude.at(t),
        }
    }
}

impl ElementsAtDate {
    /// Argument of perihelion ω = ϖ − Ω (degrees, unwrapped).
    pub fn perihelion_argument(&self) -> Degree {
        self.perihelion_longitude - self.ascending_node_longitude
    }

    /// Mean anomaly M = L − ϖ (degrees, unwrapped).
    pub fn mean_anomaly(&self) -> Degree {
        self.mean_longitude - self.perihelion_longitude
    }
}

/// Bodies propagated from the Keplerian element table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Planet {
    Mercury,
    Venus,
    /// Earth–Moon barycenter, used as the geocentric origin.
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

/// Planets whose geocentric longitude enters a chart, in chart order.
pub const ORBITING_PLANETS: [Planet; 7] = [
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Uranus,
    Planet::Neptune,
];

/// Every planet of the element table, Earth included, in heliocentric order.
pub const ALL_PLANETS: [Planet; 8] = [
    Planet::Mercury,
    Planet::Venus,
    Planet::Earth,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Uranus,
    Planet::Neptune,
];

impl Planet {
    pub fn name(&self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Earth => "Earth",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
        }
    }

    /// Mean element set of this planet.
    pub fn elements(&self) -> &'static OrbitalElementSet {
        match self {
            Planet::Mercury => &MERCURY,
            Planet::Venus => &VENUS,
            Planet::Earth => &EARTH,
            Planet::Mars => &MARS,
            Planet::Jupiter => &JUPITER,
            Planet::Saturn => &SATURN,
            Planet::Uranus => &URANUS,
            Planet::Neptune => &NEPTUNE,
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = AlmagestError;

    /// Case-insensitive lookup by English name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_PLANETS
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AlmagestError::UnknownBody(s.to_string()))
    }
}

/// Lookup an element set by planet name.
pub fn elements_by_name(name: &str) -> Result<&'static OrbitalElementSet, AlmagestError> {
    Ok(name.parse::<Planet>()?.elements())
}

const fn set(elements: [(f64, f64); 6]) -> OrbitalElementSet {
    OrbitalElementSet {
        semi_major_axis: ElementRate::new(elements[0].0, elements[0].1),
        eccentricity: ElementRate::new(elements[1].0, elements[1].1),
        inclination: ElementRate::new(elements[2].0, elements[2].1),
        mean_longitude: ElementRate::new(elements[3].0, elements[3].1),
        perihelion_longitude: ElementRate::new(elements[4].0, elements[4].1),
        ascending_node_longitude: ElementRate::new(elements[5].0, elements[5].1),
    }
}

// (value at J2000.0, rate per century) for a, e, I, L, ϖ, Ω

pub static MERCURY: OrbitalElementSet = set([
    (0.387_099_27, 0.000_000_37),
    (0.205_635_93, 0.000_019_06),
    (7.004_979_02, -0.005_947_49),
    (252.250_323_50, 149_472.674_111_75),
    (77.457_796_28, 0.160_476_89),
    (48.330_765_93, -0.125_340_81),
]);

pub static VENUS: OrbitalElementSet = set([
    (0.723_335_66, 0.000_003_90),
    (0.006_776_72, -0.000_041_07),
    (3.394_676_05, -0.000_788_90),
    (181.979_099_50, 58_517.815_387_29),
    (131.602_467_18, 0.002_683_29),
    (76.679_842_55, -0.277_694_18),
]);

pub static EARTH: OrbitalElementSet = set([
    (1.000_002_61, 0.000_005_62),
    (0.016_711_23, -0.000_043_92),
    (-0.000_015_31, -0.012_946_68),
    (100.464_571_66, 35_999.372_449_81),
    (102.937_681_93, 0.323_273_64),
    (0.0, 0.0),
]);

pub static MARS: OrbitalElementSet = set([
    (1.523_710_34, 0.000_018_47),
    (0.093_394_10, 0.000_078_82),
    (1.849_691_42, -0.008_131_31),
    (-4.553_432_05, 19_140.302_684_99),
    (-23.943_629_59, 0.444_410_88),
    (49.559_538_91, -0.292_573_43),
]);

pub static JUPITER: OrbitalElementSet = set([
    (5.202_887_00, -0.000_116_07),
    (0.048_386_24, -0.000_132_53),
    (1.304_396_95, -0.001_837_14),
    (34.396_440_51, 3_034.746_127_75),
    (14.728_479_83, 0.212_526_68),
    (100.473_909_09, 0.204_691_06),
]);

pub static SATURN: OrbitalElementSet = set([
    (9.536_675_94, -0.001_250_60),
    (0.053_861_79, -0.000_509_91),
    (2.485_991_87, 0.001_936_09),
    (49.954_244_23, 1_222.493_622_01),
    (92.598_878_31, -0.418_972_16),
    (113.662_424_48, -0.288_677_94),
]);

pub static URANUS: OrbitalElementSet = set([
    (19.189_164_64, -0.001_961_76),
    (0.047_257_44, -0.000_043_97),
    (0.772_637_83, -0.002_429_39),
    (313.238_104_51, 428.482_027_85),
    (170.954_276_30, 0.408_052_81),
    (74.016_925_03, 0.042_405_89),
]);

pub static NEPTUNE: OrbitalElementSet = set([
    (30.069_922_76, 0.000_262_91),
    (0.008_590_48, 0.000_051_05),
    (1.770_043_47, 0.000_353_72),
    (-55.120_029_69, 218.459_453_25),
    (44.964_762_27, -0.322_414_64),
    (131.784_225_74, -0.005_086_64),
]);
