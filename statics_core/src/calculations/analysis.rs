//! Sampling / Analysis Driver
//!
//! Solves reactions once, then evaluates shear and moment at evenly spaced
//! stations along the span. The output is plain data for plotting or
//! tabulation by the caller.
//!
//! ## Example
//! ```rust
//! use statics_core::beam::{Beam, Support};
//! use statics_core::calculations::{analyze, DEFAULT_RESOLUTION};
//! use statics_core::loads::{DistributedLoad, PointLoad};
//!
//! let beam = Beam::new(12.0)?
//!     .with_support(Support::pin(0.0))?
//!     .with_support(Support::roller(12.0))?
//!     .with_point_load(PointLoad::new(10.0, 6.0))?
//!     .with_distributed_load(DistributedLoad::new(0.5, 0.0, 12.0))?;
//!
//! let diagram = analyze(&beam, DEFAULT_RESOLUTION)?;
//! let summary = diagram.summary();
//! println!("Max moment: {:.1} kN·m at {:.2} m", summary.max_moment_knm, summary.max_moment_position_m);
//! # Ok::<(), statics_core::errors::StaticsError>(())
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::beam::Beam;
use crate::errors::{StaticsError, StaticsResult};

use super::internal_forces::{moment_at, shear_at};
use super::reactions::{compute_reactions, Reactions};

/// Default number of evaluation stations
pub const DEFAULT_RESOLUTION: usize = 100;

/// Sampled shear and moment along the span.
///
/// `positions`, `shear_kn` and `moment_knm` always have the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamDiagram {
    /// Solved support reactions
    pub reactions: Reactions,
    /// Station positions (m), ascending, first = 0, last = length
    pub positions: Vec<f64>,
    /// Shear force at each station (kN)
    pub shear_kn: Vec<f64>,
    /// Bending moment at each station (kN·m)
    pub moment_knm: Vec<f64>,
}

/// Governing values picked from a sampled diagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramSummary {
    /// Left support reaction (kN) - positive upward
    pub reaction_left_kn: f64,
    /// Right support reaction (kN) - positive upward
    pub reaction_right_kn: f64,

    /// Maximum shear magnitude (kN)
    pub max_shear_kn: f64,
    /// Position of maximum shear magnitude (m)
    pub max_shear_position_m: f64,

    /// Maximum positive (sagging) moment (kN·m)
    pub max_moment_knm: f64,
    /// Position of maximum positive moment (m)
    pub max_moment_position_m: f64,

    /// Most negative (hogging) moment (kN·m)
    pub min_moment_knm: f64,
    /// Position of most negative moment (m)
    pub min_moment_position_m: f64,
}

impl BeamDiagram {
    /// Number of stations
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True if the diagram has no stations
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Rows of `(x, V, M)`
    pub fn stations(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.positions
            .iter()
            .zip(&self.shear_kn)
            .zip(&self.moment_knm)
            .map(|((&x, &v), &m)| (x, v, m))
    }

    /// Extreme shear and moment over the sampled stations.
    ///
    /// Only sampled stations are considered; a peak between stations is
    /// reported at the nearest sample.
    pub fn summary(&self) -> DiagramSummary {
        let mut summary = DiagramSummary {
            reaction_left_kn: self.reactions.left.reaction_kn,
            reaction_right_kn: self.reactions.right.reaction_kn,
            max_shear_kn: 0.0,
            max_shear_position_m: 0.0,
            max_moment_knm: 0.0,
            max_moment_position_m: 0.0,
            min_moment_knm: 0.0,
            min_moment_position_m: 0.0,
        };

        for (x, v, m) in self.stations() {
            if v.abs() > summary.max_shear_kn {
                summary.max_shear_kn = v.abs();
                summary.max_shear_position_m = x;
            }
            if m > summary.max_moment_knm {
                summary.max_moment_knm = m;
                summary.max_moment_position_m = x;
            }
            if m < summary.min_moment_knm {
                summary.min_moment_knm = m;
                summary.min_moment_position_m = x;
            }
        }

        summary
    }
}

/// Evenly spaced stations over `[0, length_m]`, both ends included.
fn station_positions(length_m: f64, resolution: usize) -> Vec<f64> {
    if resolution == 1 {
        return vec![0.0];
    }
    let last = (resolution - 1) as f64;
    (0..resolution)
        .map(|i| {
            // pin the final station so floating error never leaves the span
            if i == resolution - 1 {
                length_m
            } else {
                length_m * i as f64 / last
            }
        })
        .collect()
}

/// Solve reactions and sample shear and moment at `resolution` stations.
///
/// Pure: the same beam and resolution always give the same diagram.
///
/// # Errors
///
/// - `InvalidInput` if `resolution` is zero or the geometry is invalid
/// - `UnsupportedConfiguration` if the beam does not have exactly two supports
pub fn analyze(beam: &Beam, resolution: usize) -> StaticsResult<BeamDiagram> {
    if resolution == 0 {
        return Err(StaticsError::invalid_input(
            "resolution",
            "0",
            "At least one station is required",
        ));
    }

    let reactions = compute_reactions(beam)?;
    let positions = station_positions(beam.length_m(), resolution);

    let shear_kn: Vec<f64> = positions
        .iter()
        .map(|&x| shear_at(beam, &reactions, x))
        .collect();
    let moment_knm: Vec<f64> = positions
        .iter()
        .map(|&x| moment_at(beam, &reactions, x))
        .collect();

    debug!(
        "Sampled {} stations over {:.3} m ({} point loads, {} distributed loads)",
        positions.len(),
        beam.length_m(),
        beam.point_loads().len(),
        beam.distributed_loads().len()
    );

    Ok(BeamDiagram {
        reactions,
        positions,
        shear_kn,
        moment_knm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beam::Support;
    use crate::loads::{DistributedLoad, PointLoad};
    use approx::assert_relative_eq;

    fn loaded_beam() -> Beam {
        Beam::new(10.0)
            .unwrap()
            .with_support(Support::pin(0.0))
            .unwrap()
            .with_support(Support::roller(10.0))
            .unwrap()
            .with_distributed_load(DistributedLoad::new(2.0, 0.0, 10.0))
            .unwrap()
    }

    #[test]
    fn test_station_positions() {
        let positions = station_positions(10.0, 5);
        assert_eq!(positions, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
        assert_eq!(station_positions(3.0, 1), vec![0.0]);
        assert_eq!(*station_positions(0.3, 7).last().unwrap(), 0.3);
    }

    #[test]
    fn test_default_resolution_lengths() {
        let diagram = analyze(&loaded_beam(), DEFAULT_RESOLUTION).unwrap();
        assert_eq!(diagram.len(), DEFAULT_RESOLUTION);
        assert_eq!(diagram.shear_kn.len(), DEFAULT_RESOLUTION);
        assert_eq!(diagram.moment_knm.len(), DEFAULT_RESOLUTION);
        assert_eq!(diagram.positions[0], 0.0);
        assert_eq!(diagram.positions[DEFAULT_RESOLUTION - 1], 10.0);
    }

    #[test]
    fn test_zero_resolution_rejected() {
        let err = analyze(&loaded_beam(), 0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_summary_udl() {
        // Odd station count puts a station at midspan
        let diagram = analyze(&loaded_beam(), 101).unwrap();
        let summary = diagram.summary();

        assert_relative_eq!(summary.reaction_left_kn, 10.0, epsilon = 1e-9);
        assert_relative_eq!(summary.reaction_right_kn, 10.0, epsilon = 1e-9);
        assert_relative_eq!(summary.max_moment_knm, 25.0, epsilon = 1e-9);
        assert_relative_eq!(summary.max_moment_position_m, 5.0, epsilon = 1e-9);
        assert_relative_eq!(summary.max_shear_kn, 10.0, epsilon = 1e-9);
        assert_eq!(summary.min_moment_knm, 0.0);
    }

    #[test]
    fn test_summary_overhang_hogging() {
        // Supports at 0 and 6 m, tip load at 8 m: hogging moment -20 over the right support
        let beam = Beam::new(8.0)
            .unwrap()
            .with_support(Support::pin(0.0))
            .unwrap()
            .with_support(Support::roller(6.0))
            .unwrap()
            .with_point_load(PointLoad::new(10.0, 8.0))
            .unwrap();
        let diagram = analyze(&beam, 9).unwrap();
        let summary = diagram.summary();

        assert_relative_eq!(summary.min_moment_knm, -20.0, epsilon = 1e-9);
        assert_relative_eq!(summary.min_moment_position_m, 6.0, epsilon = 1e-9);
        assert_eq!(summary.max_moment_knm, 0.0);
    }

    #[test]
    fn test_stations_rows() {
        let diagram = analyze(&loaded_beam(), 3).unwrap();
        let rows: Vec<_> = diagram.stations().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].0, 5.0);
        assert_relative_eq!(rows[1].2, 25.0, epsilon = 1e-9);
    }

    #[test]
    fn test_diagram_serialization() {
        let diagram = analyze(&loaded_beam(), 4).unwrap();
        let json = serde_json::to_string(&diagram).unwrap();
        let roundtrip: BeamDiagram = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.len(), 4);
        assert_eq!(roundtrip.reactions, diagram.reactions);
    }
}
