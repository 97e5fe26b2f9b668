//! Identifiers of the points that make up a chart.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    almagest_errors::AlmagestError,
    constants::Degree,
    ephemeris::Motion,
    orbital_elements::Planet,
    time::normalize_degrees,
    zodiac::{ZodiacPosition, ZodiacSign},
};

/// A chart point: one of the ten tracked bodies or one of the four derived points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Ascendant,
    Midheaven,
    NorthNode,
    Lilith,
}

/// The ten tracked bodies, in chart order. Aspect detection runs over this set.
pub const PLANETS: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

/// Derived points: the two chart angles and the two lunar points.
pub const DERIVED_POINTS: [Body; 4] = [
    Body::Ascendant,
    Body::Midheaven,
    Body::NorthNode,
    Body::Lilith,
];

/// Every chart point, planets first.
pub const ALL_BODIES: [Body; 14] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::Ascendant,
    Body::Midheaven,
    Body::NorthNode,
    Body::Lilith,
];

impl Body {
    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
            Body::Ascendant => "Ascendant",
            Body::Midheaven => "Midheaven",
            Body::NorthNode => "North Node",
            Body::Lilith => "Lilith",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Body::Sun => "☉",
            Body::Moon => "☽",
            Body::Mercury => "☿",
            Body::Venus => "♀",
            Body::Mars => "♂",
            Body::Jupiter => "♃",
            Body::Saturn => "♄",
            Body::Uranus => "♅",
            Body::Neptune => "♆",
            Body::Pluto => "♇",
            Body::Ascendant => "AC",
            Body::Midheaven => "MC",
            Body::NorthNode => "☊",
            Body::Lilith => "⚸",
        }
    }

    /// Element-table planet backing this body, for the Keplerian bodies only.
    pub fn planet(&self) -> Option<Planet> {
        match self {
            Body::Mercury => Some(Planet::Mercury),
            Body::Venus => Some(Planet::Venus),
            Body::Mars => Some(Planet::Mars),
            Body::Jupiter => Some(Planet::Jupiter),
            Body::Saturn => Some(Planet::Saturn),
            Body::Uranus => Some(Planet::Uranus),
            Body::Neptune => Some(Planet::Neptune),
            _ => None,
        }
    }

    /// Mercury through Pluto can show retrograde motion; the luminaries and the
    /// derived points never do.
    pub fn can_retrograde(&self) -> bool {
        matches!(
            self,
            Body::Mercury
                | Body::Venus
                | Body::Mars
                | Body::Jupiter
                | Body::Saturn
                | Body::Uranus
                | Body::Neptune
                | Body::Pluto
        )
    }

    /// True for the four derived points (chart angles and lunar points).
    pub fn is_derived_point(&self) -> bool {
        DERIVED_POINTS.contains(self)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = AlmagestError;

    /// Case-insensitive lookup; spaces, dashes and underscores are ignored so that
    /// "North Node", "north_node" and "northnode" all resolve.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();
        ALL_BODIES
            .iter()
            .copied()
            .find(|body| {
                body.name()
                    .chars()
                    .filter(|c| *c != ' ')
                    .collect::<String>()
                    .eq_ignore_ascii_case(&key)
            })
            .ok_or_else(|| AlmagestError::UnknownBody(s.to_string()))
    }
}

/// Position of one chart point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CelestialBodyPosition {
    pub body: Body,
    pub sign: ZodiacSign,
    /// Degree within the sign, `[0, 30)`.
    pub degree: Degree,
    /// Ecliptic longitude, `[0, 360)`.
    pub longitude: Degree,
    pub retrograde: bool,
    /// Signed longitude change over one day (degrees).
    pub daily_motion: Degree,
}

impl CelestialBodyPosition {
    /// Build a position from a longitude and its sampled motion.
    ///
    /// The retrograde flag is dropped for bodies that never show retrograde motion.
    pub fn new(body: Body, longitude: Degree, motion: Motion) -> Self {
        let longitude = normalize_degrees(longitude);
        let zodiac = ZodiacPosition::from_longitude(longitude);
        CelestialBodyPosition {
            body,
            sign: zodiac.sign,
            degree: zodiac.degree,
            longitude,
            retrograde: motion.retrograde && body.can_retrograde(),
            daily_motion: motion.daily_motion,
        }
    }

    /// Position without motion information, as used for the chart angles.
    pub fn stationary(body: Body, longitude: Degree) -> Self {
        Self::new(body, longitude, Motion::direct(0.0))
    }

    pub fn zodiac(&self) -> ZodiacPosition {
        ZodiacPosition {
            sign: self.sign,
            degree: self.degree,
        }
    }
}

impl fmt::Display for CelestialBodyPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<10} {}", self.body.name(), self.zodiac())?;
        if self.retrograde {
            f.write_str(" R")?;
        }
        Ok(())
    }
}
