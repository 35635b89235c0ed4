//! Uniformly distributed loads over a sub-span

use serde::{Deserialize, Serialize};

use super::{check_finite, check_position, PointLoad};
use crate::errors::{StaticsError, StaticsResult};

/// A uniform load intensity spread over `[start_m, end_m]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributedLoad {
    /// Uniform intensity (kN/m), positive downward
    pub intensity_kn_per_m: f64,
    /// Start of the loaded span from the left end (m)
    pub start_m: f64,
    /// End of the loaded span from the left end (m)
    pub end_m: f64,
}

impl DistributedLoad {
    /// Create a distributed load
    pub fn new(intensity_kn_per_m: f64, start_m: f64, end_m: f64) -> Self {
        DistributedLoad {
            intensity_kn_per_m,
            start_m,
            end_m,
        }
    }

    /// Loaded length (m)
    pub fn span_m(&self) -> f64 {
        self.end_m - self.start_m
    }

    /// Resultant force: intensity × loaded length (kN)
    pub fn total_load_kn(&self) -> f64 {
        self.intensity_kn_per_m * self.span_m()
    }

    /// Midpoint of the loaded span (m)
    pub fn centroid_m(&self) -> f64 {
        (self.start_m + self.end_m) / 2.0
    }

    /// Resultant as a point load at the centroid.
    ///
    /// Valid for global equilibrium only. Shear and moment inside the loaded
    /// span depend on the true extent of the load.
    pub fn equivalent_point_load(&self) -> PointLoad {
        PointLoad::new(self.total_load_kn(), self.centroid_m())
    }

    /// Length of the loaded span at or left of `x_m` (m), zero if `x_m` is
    /// before the start.
    pub fn loaded_length_to(&self, x_m: f64) -> f64 {
        (x_m.min(self.end_m) - self.start_m).max(0.0)
    }

    /// Check the load against a beam of length `length_m`
    pub(crate) fn validate(&self, index: usize, length_m: f64) -> StaticsResult<()> {
        check_finite(
            &format!("distributed_loads[{}].intensity_kn_per_m", index),
            self.intensity_kn_per_m,
        )?;
        check_position(&format!("distributed_loads[{}].start_m", index), self.start_m, length_m)?;
        check_position(&format!("distributed_loads[{}].end_m", index), self.end_m, length_m)?;
        if self.start_m > self.end_m {
            return Err(StaticsError::invalid_input(
                format!("distributed_loads[{}]", index),
                format!("[{}, {}]", self.start_m, self.end_m),
                "Start must not exceed end",
            ));
        }
        Ok(())
    }
}
