//! # Aspect detection
//!
//! Classification of the angular separation between two chart points into one of
//! the five major (Ptolemaic) aspects.
//!
//! Every unordered pair of the input is examined once, in enumeration order (`i`
//! ascending, then `j > i` ascending). The separation is tested against the aspect
//! kinds in priority order: conjunction, sextile, square, trine, opposition. The
//! first kind within its orb wins and the pair is done, so a pair never carries two
//! aspects even when generous orbs overlap.
use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    almagest_errors::AlmagestError,
    bodies::{Body, CelestialBodyPosition},
    constants::Degree,
};

/// Look-ahead used to decide whether an aspect is applying, in days.
const APPLYING_STEP_DAYS: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

/// Aspect kinds in detection priority order.
pub const ASPECT_KINDS: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Sextile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Opposition,
];

impl AspectKind {
    /// Exact separation of the aspect in degrees.
    pub fn angle(&self) -> Degree {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Opposition => 180.0,
        }
    }

    /// Default maximum orb in degrees.
    pub fn default_orb(&self) -> Degree {
        match self {
            AspectKind::Conjunction => 8.0,
            AspectKind::Sextile => 6.0,
            AspectKind::Square => 7.0,
            AspectKind::Trine => 8.0,
            AspectKind::Opposition => 8.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AspectKind::Conjunction => "Conjunction",
            AspectKind::Sextile => "Sextile",
            AspectKind::Square => "Square",
            AspectKind::Trine => "Trine",
            AspectKind::Opposition => "Opposition",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            AspectKind::Conjunction => "☌",
            AspectKind::Sextile => "⚹",
            AspectKind::Square => "□",
            AspectKind::Trine => "△",
            AspectKind::Opposition => "☍",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maximum orb allowed for each aspect kind, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AspectOrbs {
    pub conjunction: Degree,
    pub sextile: Degree,
    pub square: Degree,
    pub trine: Degree,
    pub opposition: Degree,
}

impl Default for AspectOrbs {
    fn default() -> Self {
        AspectOrbs {
            conjunction: AspectKind::Conjunction.default_orb(),
            sextile: AspectKind::Sextile.default_orb(),
            square: AspectKind::Square.default_orb(),
            trine: AspectKind::Trine.default_orb(),
            opposition: AspectKind::Opposition.default_orb(),
        }
    }
}

impl AspectOrbs {
    pub fn orb(&self, kind: AspectKind) -> Degree {
        match kind {
            AspectKind::Conjunction => self.conjunction,
            AspectKind::Sextile => self.sextile,
            AspectKind::Square => self.square,
            AspectKind::Trine => self.trine,
            AspectKind::Opposition => self.opposition,
        }
    }

    /// Orbs must be finite, non-negative and narrower than the 30° gap between
    /// neighbouring aspects.
    pub fn validate(&self) -> Result<(), AlmagestError> {
        for kind in ASPECT_KINDS {
            let orb = self.orb(kind);
            if !orb.is_finite() || !(0.0..30.0).contains(&orb) {
                return Err(AlmagestError::InvalidConfig(format!(
                    "orb for {kind} must lie in [0, 30), got {orb}"
                )));
            }
        }
        Ok(())
    }
}

/// An aspect between two chart points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aspect {
    pub first: Body,
    pub second: Body,
    pub kind: AspectKind,
    /// Distance from exactness, `0 ≤ orb ≤` the kind's maximum orb.
    pub orb: Degree,
    /// True when the separation is moving toward the exact angle.
    pub applying: bool,
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} (orb {:.2}°, {})",
            self.first,
            self.kind.symbol(),
            self.second,
            self.orb,
            if self.applying { "applying" } else { "separating" }
        )
    }
}

/// Shortest angular distance between two longitudes, in `[0, 180]`.
pub fn angular_separation(lon1: Degree, lon2: Degree) -> Degree {
    let diff = (lon1 - lon2).rem_euclid(360.0);
    diff.min(360.0 - diff)
}

/// First aspect kind, in priority order, whose orb contains `separation`.
///
/// Return
/// ------
/// * `Some((kind, orb))` with `orb = |separation − angle|`, or `None`.
pub fn classify_separation(separation: Degree, orbs: &AspectOrbs) -> Option<(AspectKind, Degree)> {
    ASPECT_KINDS.iter().find_map(|&kind| {
        let orb = (separation - kind.angle()).abs();
        (orb <= orbs.orb(kind)).then_some((kind, orb))
    })
}

/// Detect the aspects between every unordered pair of `bodies`.
///
/// Arguments
/// ---------
/// * `bodies`: positions to compare; an empty or single-element slice yields no aspect.
/// * `orbs`: maximum orb per aspect kind.
///
/// Return
/// ------
/// * the aspects found, in pair enumeration order, at most one per pair.
pub fn detect_aspects(bodies: &[CelestialBodyPosition], orbs: &AspectOrbs) -> Vec<Aspect> {
    bodies
        .iter()
        .tuple_combinations()
        .filter_map(|(a, b)| {
            let separation = angular_separation(a.longitude, b.longitude);
            let (kind, orb) = classify_separation(separation, orbs)?;
            Some(Aspect {
                first: a.body,
                second: b.body,
                kind,
                orb,
                applying: is_applying(a, b, kind, orb),
            })
        })
        .collect()
}

/// Project both points forward by a fraction of a day with their daily motions and
/// compare the future orb with the current one.
fn is_applying(
    a: &CelestialBodyPosition,
    b: &CelestialBodyPosition,
    kind: AspectKind,
    orb: Degree,
) -> bool {
    let future = angular_separation(
        a.longitude + a.daily_motion * APPLYING_STEP_DAYS,
        b.longitude + b.daily_motion * APPLYING_STEP_DAYS,
    );
    (future - kind.angle()).abs() < orb
}
