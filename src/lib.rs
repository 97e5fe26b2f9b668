pub mod almagest_errors;
pub mod ascendant;
pub mod aspects;
pub mod bodies;
pub mod chart;
pub mod config;
pub mod constants;
pub mod ephemeris;
pub mod kepler;
pub mod moon_phase;
pub mod orbital_elements;
pub mod time;
pub mod zodiac;

pub use almagest_errors::AlmagestError;
pub use bodies::{Body, CelestialBodyPosition};
pub use chart::{compute_chart, compute_chart_with, ChartResult, ObservationRequest};
pub use config::{AspectPoints, ChartConfig};
