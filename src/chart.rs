//! # Chart computation
//!
//! Orchestrates one chart: the civil request is turned into a UTC instant, every
//! body is evaluated at `T` and `T + 1 day`, the angles are derived from local
//! sidereal time, aspects are detected once, and the zodiacal points are grouped by
//! element and modality.
//!
//! The whole computation is a pure function of the request and the configuration.
use hifitime::{Epoch, Unit};
use log::debug;
use serde::Serialize;

use crate::{
    almagest_errors::AlmagestError,
    ascendant::compute_angles_with_limit,
    aspects::{detect_aspects, Aspect},
    bodies::{Body, CelestialBodyPosition, PLANETS},
    config::ChartConfig,
    constants::{Degree, JulianCenturies, JulianDate, ONE_DAY_IN_CENTURIES},
    ephemeris::{lilith_longitude, moon_longitude, north_node_longitude, Ephemeris, Motion},
    moon_phase::MoonPhaseInfo,
    time::{julian_centuries, julian_date, local_sidereal_time},
    zodiac::{Element, Modality, ELEMENTS, MODALITIES},
};

/// Largest UTC offset accepted, in hours.
const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

/// When and where a chart is cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationRequest {
    local_time: Epoch,
    latitude: Degree,
    longitude: Degree,
    utc_offset_hours: f64,
}

impl ObservationRequest {
    /// Build a request from a wall-clock instant.
    ///
    /// Arguments
    /// ---------
    /// * `local_time`: civil date-time as read on the local clock, stored as a UTC epoch.
    /// * `latitude`: degrees, `[-90, 90]`, north positive.
    /// * `longitude`: degrees, `[-180, 180]`, east positive.
    /// * `utc_offset_hours`: local time minus UTC, `[-14, 14]`.
    ///
    /// Return
    /// ------
    /// * the request, or the first out-of-range (or non-finite) argument as an error.
    pub fn new(
        local_time: Epoch,
        latitude: Degree,
        longitude: Degree,
        utc_offset_hours: f64,
    ) -> Result<Self, AlmagestError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AlmagestError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(AlmagestError::InvalidLongitude(longitude));
        }
        if !(-MAX_UTC_OFFSET_HOURS..=MAX_UTC_OFFSET_HOURS).contains(&utc_offset_hours) {
            return Err(AlmagestError::InvalidUtcOffset(utc_offset_hours));
        }
        Ok(ObservationRequest {
            local_time,
            latitude,
            longitude,
            utc_offset_hours,
        })
    }

    /// Build a request from calendar fields of the local clock.
    #[allow(clippy::too_many_arguments)]
    pub fn from_civil(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        latitude: Degree,
        longitude: Degree,
        utc_offset_hours: f64,
    ) -> Result<Self, AlmagestError> {
        let local_time = Epoch::maybe_from_gregorian_utc(year, month, day, hour, minute, second, 0)?;
        Self::new(local_time, latitude, longitude, utc_offset_hours)
    }

    pub fn local_time(&self) -> Epoch {
        self.local_time
    }

    pub fn latitude(&self) -> Degree {
        self.latitude
    }

    pub fn longitude(&self) -> Degree {
        self.longitude
    }

    pub fn utc_offset_hours(&self) -> f64 {
        self.utc_offset_hours
    }

    /// The instant in UTC: local time minus the offset.
    pub fn utc_instant(&self) -> Epoch {
        self.local_time - Unit::Hour * self.utc_offset_hours
    }
}

/// Chart points sharing an element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementGroup {
    pub element: Element,
    pub bodies: Vec<Body>,
}

/// Chart points sharing a modality.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModalityGroup {
    pub modality: Modality,
    pub bodies: Vec<Body>,
}

/// A computed chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    /// Sun, Moon, Mercury … Pluto, in that order.
    pub planets: Vec<CelestialBodyPosition>,
    pub ascendant: CelestialBodyPosition,
    pub midheaven: CelestialBodyPosition,
    pub north_node: CelestialBodyPosition,
    pub lilith: CelestialBodyPosition,
    pub moon_phase: MoonPhaseInfo,
    pub aspects: Vec<Aspect>,
    /// One group per element, Fire, Earth, Air, Water.
    pub element_groups: Vec<ElementGroup>,
    /// One group per modality, Cardinal, Fixed, Mutable.
    pub modality_groups: Vec<ModalityGroup>,
    pub dominant_element: Element,
    pub dominant_modality: Modality,
    /// Julian Date of the UTC instant.
    pub julian_date: JulianDate,
    pub latitude_clamped: bool,
}

impl ChartResult {
    /// All fourteen chart points: the planets, then Ascendant, Midheaven, North Node
    /// and Lilith.
    pub fn points(&self) -> impl Iterator<Item = &CelestialBodyPosition> {
        self.planets.iter().chain([
            &self.ascendant,
            &self.midheaven,
            &self.north_node,
            &self.lilith,
        ])
    }

    /// Position of a single chart point.
    pub fn position(&self, body: Body) -> Option<&CelestialBodyPosition> {
        self.points().find(|p| p.body == body)
    }
}

/// Compute a chart with the default configuration.
pub fn compute_chart(request: &ObservationRequest) -> ChartResult {
    compute_chart_with(request, &ChartConfig::default())
}

/// Compute a chart.
///
/// Arguments
/// ---------
/// * `request`: observation time and place.
/// * `config`: aspect orbs and points, latitude limit, Kepler solver settings.
///
/// Return
/// ------
/// * the full chart; the computation itself cannot fail.
///
/// See also
/// --------
/// * [`ChartConfig::from_toml_str`] – load a validated configuration.
pub fn compute_chart_with(request: &ObservationRequest, config: &ChartConfig) -> ChartResult {
    let utc = request.utc_instant();
    let jd = julian_date(utc);
    let t = julian_centuries(jd);
    debug!(
        "computing chart at {utc} (JD {jd:.6}) for lat {}° lon {}°",
        request.latitude, request.longitude
    );

    let ephemeris = Ephemeris::new(config.kepler);

    let planets: Vec<CelestialBodyPosition> = PLANETS
        .iter()
        .filter_map(|&body| {
            ephemeris
                .body_state(body, t)
                .map(|(longitude, motion)| CelestialBodyPosition::new(body, longitude, motion))
        })
        .collect();

    let lst = local_sidereal_time(jd, request.longitude);
    let angles = compute_angles_with_limit(lst, request.latitude, config.latitude_limit);
    let ascendant = CelestialBodyPosition::stationary(Body::Ascendant, angles.ascendant);
    let midheaven = CelestialBodyPosition::stationary(Body::Midheaven, angles.midheaven);
    let north_node = lunar_point(Body::NorthNode, north_node_longitude, t);
    let lilith = lunar_point(Body::Lilith, lilith_longitude, t);

    let moon_phase = moon_phase(&ephemeris, t);

    let mut result = ChartResult {
        planets,
        ascendant,
        midheaven,
        north_node,
        lilith,
        moon_phase,
        aspects: Vec::new(),
        element_groups: Vec::new(),
        modality_groups: Vec::new(),
        dominant_element: Element::Fire,
        dominant_modality: Modality::Cardinal,
        julian_date: jd,
        latitude_clamped: angles.latitude_clamped,
    };

    let aspect_bodies = config.aspect_points.bodies();
    let aspect_input: Vec<CelestialBodyPosition> = result
        .points()
        .filter(|p| aspect_bodies.contains(&p.body))
        .copied()
        .collect();
    result.aspects = detect_aspects(&aspect_input, &config.orbs);

    let (element_groups, dominant_element) = group_by_element(result.points());
    let (modality_groups, dominant_modality) = group_by_modality(result.points());
    result.element_groups = element_groups;
    result.dominant_element = dominant_element;
    result.modality_groups = modality_groups;
    result.dominant_modality = dominant_modality;

    debug!(
        "chart done: {} aspects, dominant {} / {}",
        result.aspects.len(),
        result.dominant_element,
        result.dominant_modality
    );
    result
}

fn lunar_point(
    body: Body,
    longitude: fn(JulianCenturies) -> Degree,
    t: JulianCenturies,
) -> CelestialBodyPosition {
    let today = longitude(t);
    let tomorrow = longitude(t + ONE_DAY_IN_CENTURIES);
    CelestialBodyPosition::new(body, today, Motion::between(today, tomorrow))
}

/// Moon phase from the Sun and Moon longitudes at `t` and one day later.
fn moon_phase(ephemeris: &Ephemeris, t: JulianCenturies) -> MoonPhaseInfo {
    let tomorrow = t + ONE_DAY_IN_CENTURIES;
    MoonPhaseInfo::from_longitudes(
        ephemeris.sun_longitude(t),
        moon_longitude(t),
        ephemeris.sun_longitude(tomorrow),
        moon_longitude(tomorrow),
    )
}

/// Index of the first maximum; ties resolve to the earliest entry.
fn first_max(counts: &[usize]) -> usize {
    counts
        .iter()
        .enumerate()
        .fold((0, 0), |(best, best_count), (i, &count)| {
            if count > best_count {
                (i, count)
            } else {
                (best, best_count)
            }
        })
        .0
}

fn group_by_element<'a>(
    points: impl Iterator<Item = &'a CelestialBodyPosition>,
) -> (Vec<ElementGroup>, Element) {
    let mut groups: Vec<ElementGroup> = ELEMENTS
        .iter()
        .map(|&element| ElementGroup {
            element,
            bodies: Vec::new(),
        })
        .collect();
    for point in points {
        let element = point.sign.element();
        if let Some(group) = groups.iter_mut().find(|g| g.element == element) {
            group.bodies.push(point.body);
        }
    }
    let counts: Vec<usize> = groups.iter().map(|g| g.bodies.len()).collect();
    let dominant = ELEMENTS[first_max(&counts)];
    (groups, dominant)
}

fn group_by_modality<'a>(
    points: impl Iterator<Item = &'a CelestialBodyPosition>,
) -> (Vec<ModalityGroup>, Modality) {
    let mut groups: Vec<ModalityGroup> = MODALITIES
        .iter()
        .map(|&modality| ModalityGroup {
            modality,
            bodies: Vec::new(),
        })
        .collect();
    for point in points {
        let modality = point.sign.modality();
        if let Some(group) = groups.iter_mut().find(|g| g.modality == modality) {
            group.bodies.push(point.body);
        }
    }
    let counts: Vec<usize> = groups.iter().map(|g| g.bodies.len()).collect();
    let dominant = MODALITIES[first_max(&counts)];
    (groups, dominant)
}
