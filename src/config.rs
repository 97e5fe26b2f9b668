//! Tunable settings of a chart computation.
//!
//! Every field has a default, so a configuration file only needs to name what it
//! overrides:
//!
//! ```toml
//! aspect_points = "all_points"
//! latitude_limit = 66.5
//!
//! [orbs]
//! conjunction = 10.0
//!
//! [kepler]
//! max_iterations = 20
//! ```
use serde::{Deserialize, Serialize};

use crate::{
    almagest_errors::AlmagestError,
    ascendant::DEFAULT_LATITUDE_LIMIT,
    aspects::AspectOrbs,
    bodies::{Body, ALL_BODIES, PLANETS},
    constants::Degree,
    kepler::KeplerSettings,
};

/// Which chart points take part in aspect detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectPoints {
    /// The ten tracked bodies, Sun to Pluto.
    #[default]
    Planets,
    /// The ten bodies plus Ascendant, Midheaven, North Node and Lilith.
    AllPoints,
}

impl AspectPoints {
    pub fn bodies(&self) -> &'static [Body] {
        match self {
            AspectPoints::Planets => &PLANETS,
            AspectPoints::AllPoints => &ALL_BODIES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub aspect_points: AspectPoints,
    /// Absolute latitude bound, in degrees, applied before the Ascendant formula.
    pub latitude_limit: Degree,
    pub orbs: AspectOrbs,
    pub kepler: KeplerSettings,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            aspect_points: AspectPoints::default(),
            latitude_limit: DEFAULT_LATITUDE_LIMIT,
            orbs: AspectOrbs::default(),
            kepler: KeplerSettings::default(),
        }
    }
}

impl ChartConfig {
    /// Parse and validate a TOML configuration.
    ///
    /// Arguments
    /// ---------
    /// * `text`: TOML document; missing keys fall back to their defaults.
    ///
    /// Return
    /// ------
    /// * the validated configuration, or [`AlmagestError::InvalidConfig`] on a syntax
    ///   error, an unknown value, or an out-of-range setting.
    pub fn from_toml_str(text: &str) -> Result<Self, AlmagestError> {
        let config: ChartConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AlmagestError> {
        self.orbs.validate()?;

        if !(self.latitude_limit > 0.0 && self.latitude_limit < 90.0) {
            return Err(AlmagestError::InvalidConfig(format!(
                "latitude_limit must lie in (0, 90), got {}",
                self.latitude_limit
            )));
        }
        if self.kepler.max_iterations == 0 {
            return Err(AlmagestError::InvalidConfig(
                "kepler.max_iterations must be at least 1".into(),
            ));
        }
        if !(self.kepler.tolerance.is_finite() && self.kepler.tolerance > 0.0) {
            return Err(AlmagestError::InvalidConfig(format!(
                "kepler.tolerance must be positive, got {}",
                self.kepler.tolerance
            )));
        }
        Ok(())
    }
}
