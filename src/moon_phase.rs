//! # Moon phase
//!
//! Illuminated fraction of the lunar disc from the Sun–Moon elongation, and the
//! traditional eight-phase classification.
//!
//! The illumination only depends on the elongation, so it is identical for the
//! waxing and waning halves of the cycle; the direction comes from comparing the
//! illumination with the value one day later.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{aspects::angular_separation, constants::Degree};

/// Below this illumination (percent) the Moon is new, above `100 −` it is full.
const NEW_FULL_MARGIN: f64 = 1.0;
/// Half-width of the quarter band around 50 % illumination.
const QUARTER_MARGIN: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// Bucket an illumination percentage.
    ///
    /// | illumination | waxing          | waning          |
    /// |--------------|-----------------|-----------------|
    /// | < 1          | New Moon        | New Moon        |
    /// | 1 – 49       | Waxing Crescent | Waning Crescent |
    /// | 49 – 51      | First Quarter   | Last Quarter    |
    /// | 51 – 99      | Waxing Gibbous  | Waning Gibbous  |
    /// | > 99         | Full Moon       | Full Moon       |
    pub fn classify(illumination: f64, waxing: bool) -> Self {
        let lower_quarter = 50.0 - QUARTER_MARGIN;
        let upper_quarter = 50.0 + QUARTER_MARGIN;

        if illumination < NEW_FULL_MARGIN {
            MoonPhase::NewMoon
        } else if illumination > 100.0 - NEW_FULL_MARGIN {
            MoonPhase::FullMoon
        } else if (lower_quarter..=upper_quarter).contains(&illumination) {
            if waxing {
                MoonPhase::FirstQuarter
            } else {
                MoonPhase::LastQuarter
            }
        } else if illumination < lower_quarter {
            if waxing {
                MoonPhase::WaxingCrescent
            } else {
                MoonPhase::WaningCrescent
            }
        } else if waxing {
            MoonPhase::WaxingGibbous
        } else {
            MoonPhase::WaningGibbous
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "🌑",
            MoonPhase::WaxingCrescent => "🌒",
            MoonPhase::FirstQuarter => "🌓",
            MoonPhase::WaxingGibbous => "🌔",
            MoonPhase::FullMoon => "🌕",
            MoonPhase::WaningGibbous => "🌖",
            MoonPhase::LastQuarter => "🌗",
            MoonPhase::WaningCrescent => "🌘",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Moon phase of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonPhaseInfo {
    pub phase: MoonPhase,
    /// Illuminated fraction of the disc in percent, `[0, 100]`.
    pub illumination: f64,
    pub waxing: bool,
}

impl MoonPhaseInfo {
    /// Phase from the Sun and Moon longitudes now and one day later.
    pub fn from_longitudes(
        sun_today: Degree,
        moon_today: Degree,
        sun_tomorrow: Degree,
        moon_tomorrow: Degree,
    ) -> Self {
        let today = illumination(sun_today, moon_today);
        let tomorrow = illumination(sun_tomorrow, moon_tomorrow);
        let waxing = tomorrow > today;
        MoonPhaseInfo {
            phase: MoonPhase::classify(today, waxing),
            illumination: today,
            waxing,
        }
    }
}

/// Illuminated fraction of the Moon in percent: `(1 − cos elongation) / 2 × 100`.
pub fn illumination(sun_longitude: Degree, moon_longitude: Degree) -> f64 {
    let elongation = angular_separation(sun_longitude, moon_longitude).to_radians();
    (1.0 - elongation.cos()) / 2.0 * 100.0
}
