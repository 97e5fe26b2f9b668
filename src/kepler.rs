//! # Kepler's equation
//!
//! Newton–Raphson solver for the elliptic Kepler equation `M = E − e·sin(E)`.
//!
//! The iteration is bounded: it stops when the correction falls below the tolerance or
//! after a fixed number of steps. A capped run is not an error; the best available
//! estimate is returned together with a `converged` flag so callers can decide whether
//! to report degraded accuracy.
use serde::{Deserialize, Serialize};

use crate::constants::Radian;

/// Default stopping threshold on the Newton correction |ΔE| (radians).
pub const KEPLER_TOLERANCE: f64 = 1e-12;

/// Default hard cap on Newton iterations.
pub const KEPLER_MAX_ITERATIONS: usize = 50;

/// Stopping rules of the Kepler solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeplerSettings {
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for KeplerSettings {
    fn default() -> Self {
        KeplerSettings {
            tolerance: KEPLER_TOLERANCE,
            max_iterations: KEPLER_MAX_ITERATIONS,
        }
    }
}

/// Outcome of a Kepler solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly E (radians).
    pub eccentric_anomaly: Radian,
    /// Newton steps actually performed.
    pub iterations: usize,
    /// False when the iteration cap was hit before |ΔE| dropped under the tolerance.
    pub converged: bool,
}

/// Solve `M = E − e·sin(E)` for the eccentric anomaly with the default settings.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: M in radians (any range).
/// * `eccentricity`: e, with `0 ≤ e < 1`.
///
/// Return
/// ------
/// * the eccentric anomaly E in radians, on the same revolution as `mean_anomaly`.
///
/// See also
/// --------
/// * [`solve_kepler_detailed`] – same solve, with iteration count and convergence flag.
pub fn solve_kepler(mean_anomaly: Radian, eccentricity: f64) -> Radian {
    solve_kepler_detailed(mean_anomaly, eccentricity, &KeplerSettings::default()).eccentric_anomaly
}

/// Solve Kepler's equation and report how the iteration ended.
///
/// The starting point is the third-order guess
///
/// ```text
/// E₀ = M + e·sin(M)·(1 + e·cos(M))
/// ```
///
/// followed by Newton updates `E ← E − (E − e·sin E − M) / (1 − e·cos E)`. For planetary
/// eccentricities (e < 0.21) three to five steps reach the default tolerance.
pub fn solve_kepler_detailed(
    mean_anomaly: Radian,
    eccentricity: f64,
    settings: &KeplerSettings,
) -> KeplerSolution {
    let m = mean_anomaly;
    let e = eccentricity;

    let mut ecc_anom = m + e * m.sin() * (1.0 + e * m.cos());

    for iteration in 1..=settings.max_iterations {
        let delta = (ecc_anom - e * ecc_anom.sin() - m) / (1.0 - e * ecc_anom.cos());
        ecc_anom -= delta;

        if delta.abs() < settings.tolerance {
            return KeplerSolution {
                eccentric_anomaly: ecc_anom,
                iterations: iteration,
                converged: true,
            };
        }
    }

    KeplerSolution {
        eccentric_anomaly: ecc_anom,
        iterations: settings.max_iterations,
        converged: false,
    }
}
