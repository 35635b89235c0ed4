//! Concentrated point loads

use serde::{Deserialize, Serialize};

use super::{check_finite, check_position};
use crate::errors::StaticsResult;

/// A concentrated force at a single position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Load magnitude (kN), positive downward
    pub magnitude_kn: f64,
    /// Distance from the left end of the beam (m)
    pub position_m: f64,
}

impl PointLoad {
    /// Create a point load
    pub fn new(magnitude_kn: f64, position_m: f64) -> Self {
        PointLoad {
            magnitude_kn,
            position_m,
        }
    }

    /// Moment of this load about `pivot_m` (kN·m), positive when the load
    /// lies to the right of the pivot.
    pub fn moment_about(&self, pivot_m: f64) -> f64 {
        self.magnitude_kn * (self.position_m - pivot_m)
    }

    /// Check the load against a beam of length `length_m`
    pub(crate) fn validate(&self, index: usize, length_m: f64) -> StaticsResult<()> {
        check_finite(&format!("point_loads[{}].magnitude_kn", index), self.magnitude_kn)?;
        check_position(&format!("point_loads[{}].position_m", index), self.position_m, length_m)
    }
}
