//! Shear-Force and Bending-Moment Evaluators
//!
//! Internal forces at a section `x` are the superposition of everything to
//! the left of (or at) the section: support reactions, point loads, and the
//! portion of each distributed load that lies at or before `x`.
//!
//! Distributed loads are integrated over their true extent. Collapsing them
//! to their resultant here would put a false jump in the shear diagram and a
//! kink in the moment diagram inside the loaded span.
//!
//! ## Sign Convention
//! - Positive shear: left side up, right side down
//! - Positive moment: sagging (tension on bottom fiber)
//! - A section exactly at a support or point load includes that force

use crate::beam::Beam;

use super::reactions::Reactions;

/// Shear force at `x_m` (kN).
///
/// Piecewise linear: jumps by `+R` at supports and `−P` at point loads, with
/// slope `−w` across distributed spans.
///
/// # Example
///
/// ```rust
/// use statics_core::beam::{Beam, Support};
/// use statics_core::calculations::{compute_reactions, shear_at};
/// use statics_core::loads::DistributedLoad;
///
/// let beam = Beam::new(10.0)?
///     .with_support(Support::pin(0.0))?
///     .with_support(Support::roller(10.0))?
///     .with_distributed_load(DistributedLoad::new(2.0, 0.0, 10.0))?;
/// let reactions = compute_reactions(&beam)?;
///
/// assert!((shear_at(&beam, &reactions, 0.0) - 10.0).abs() < 1e-9);
/// assert!(shear_at(&beam, &reactions, 5.0).abs() < 1e-9);
/// # Ok::<(), statics_core::errors::StaticsError>(())
/// ```
pub fn shear_at(beam: &Beam, reactions: &Reactions, x_m: f64) -> f64 {
    let from_supports: f64 = reactions
        .iter()
        .filter(|r| r.position_m <= x_m)
        .map(|r| r.reaction_kn)
        .sum();

    let from_point_loads: f64 = beam
        .point_loads()
        .iter()
        .filter(|p| p.position_m <= x_m)
        .map(|p| p.magnitude_kn)
        .sum();

    let from_distributed: f64 = beam
        .distributed_loads()
        .iter()
        .filter(|w| w.start_m <= x_m)
        .map(|w| w.intensity_kn_per_m * w.loaded_length_to(x_m))
        .sum();

    from_supports - from_point_loads - from_distributed
}

/// Bending moment at `x_m` (kN·m).
///
/// Piecewise quadratic and continuous. For an equilibrated beam with
/// supports at both ends it vanishes at `0` and at the length.
///
/// # Example
///
/// ```rust
/// use statics_core::beam::{Beam, Support};
/// use statics_core::calculations::{compute_reactions, moment_at};
/// use statics_core::loads::PointLoad;
///
/// // PL/4 = 8 * 6 / 4 = 12 kN·m
/// let beam = Beam::new(6.0)?
///     .with_support(Support::pin(0.0))?
///     .with_support(Support::roller(6.0))?
///     .with_point_load(PointLoad::new(8.0, 3.0))?;
/// let reactions = compute_reactions(&beam)?;
///
/// assert!((moment_at(&beam, &reactions, 3.0) - 12.0).abs() < 1e-9);
/// # Ok::<(), statics_core::errors::StaticsError>(())
/// ```
pub fn moment_at(beam: &Beam, reactions: &Reactions, x_m: f64) -> f64 {
    let from_supports: f64 = reactions
        .iter()
        .filter(|r| r.position_m <= x_m)
        .map(|r| r.reaction_kn * (x_m - r.position_m))
        .sum();

    let from_point_loads: f64 = beam
        .point_loads()
        .iter()
        .filter(|p| p.position_m <= x_m)
        .map(|p| p.magnitude_kn * (x_m - p.position_m))
        .sum();

    // Partial resultant w·len acts at start + len/2, not at the full-span centroid
    let from_distributed: f64 = beam
        .distributed_loads()
        .iter()
        .filter(|w| w.start_m <= x_m)
        .map(|w| {
            let len = w.loaded_length_to(x_m);
            if len > 0.0 {
                w.intensity_kn_per_m * len * (x_m - w.start_m - len / 2.0)
            } else {
                0.0
            }
        })
        .sum();

    from_supports - from_point_loads - from_distributed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beam::Support;
    use crate::calculations::reactions::compute_reactions;
    use crate::loads::{DistributedLoad, PointLoad};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn simple_beam(length_m: f64) -> Beam {
        Beam::new(length_m)
            .unwrap()
            .with_support(Support::pin(0.0))
            .unwrap()
            .with_support(Support::roller(length_m))
            .unwrap()
    }

    #[test]
    fn test_midspan_point_load_diagrams() {
        let p = 30.0;
        let l = 6.0;
        let beam = simple_beam(l).with_point_load(PointLoad::new(p, l / 2.0)).unwrap();
        let r = compute_reactions(&beam).unwrap();

        assert_relative_eq!(shear_at(&beam, &r, 1.0), p / 2.0, epsilon = 1e-9);
        assert_relative_eq!(shear_at(&beam, &r, 2.999), p / 2.0, epsilon = 1e-9);
        assert_relative_eq!(shear_at(&beam, &r, 3.001), -p / 2.0, epsilon = 1e-9);
        assert_relative_eq!(shear_at(&beam, &r, 5.5), -p / 2.0, epsilon = 1e-9);

        assert_relative_eq!(moment_at(&beam, &r, l / 2.0), p * l / 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(moment_at(&beam, &r, 0.0), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(moment_at(&beam, &r, l), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_full_udl_diagrams() {
        // V = wL/2 - wx, M = wx(L-x)/2
        let w = 2.0;
        let l = 10.0;
        let beam = simple_beam(l)
            .with_distributed_load(DistributedLoad::new(w, 0.0, l))
            .unwrap();
        let r = compute_reactions(&beam).unwrap();

        for x in [0.0, 1.5, 4.0, 5.0, 7.25, 9.9] {
            assert_relative_eq!(shear_at(&beam, &r, x), w * l / 2.0 - w * x, epsilon = 1e-9);
            assert_relative_eq!(moment_at(&beam, &r, x), w * x * (l - x) / 2.0, epsilon = 1e-9);
        }
        assert_relative_eq!(moment_at(&beam, &r, 5.0), 25.0, epsilon = 1e-9);
    }

    #[test]
    fn test_partial_udl_inside_span() {
        // 4 kN/m over [2, 6] on 10 m: R_a = 16 * 6/10 = 9.6
        let beam = simple_beam(10.0)
            .with_distributed_load(DistributedLoad::new(4.0, 2.0, 6.0))
            .unwrap();
        let r = compute_reactions(&beam).unwrap();
        assert_relative_eq!(r.left.reaction_kn, 9.6, epsilon = 1e-9);

        // x = 3: V = 9.6 - 4*1, M = 9.6*3 - 4*1*0.5
        assert_relative_eq!(shear_at(&beam, &r, 3.0), 5.6, epsilon = 1e-9);
        assert_relative_eq!(moment_at(&beam, &r, 3.0), 26.8, epsilon = 1e-9);

        // x = 8: past the load, full resultant at centroid 4 m
        assert_relative_eq!(shear_at(&beam, &r, 8.0), 9.6 - 16.0, epsilon = 1e-9);
        assert_relative_eq!(moment_at(&beam, &r, 8.0), 9.6 * 8.0 - 16.0 * 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_reactions_give_load_only_values() {
        let beam = simple_beam(4.0).with_point_load(PointLoad::new(5.0, 1.0)).unwrap();
        let mut r = compute_reactions(&beam).unwrap();
        r.left.reaction_kn = 0.0;
        r.right.reaction_kn = 0.0;
        assert_relative_eq!(shear_at(&beam, &r, 2.0), -5.0, epsilon = 1e-12);
        assert_relative_eq!(moment_at(&beam, &r, 2.0), -5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_moment_continuous_across_point_load() {
        let beam = simple_beam(10.0).with_point_load(PointLoad::new(12.0, 4.0)).unwrap();
        let r = compute_reactions(&beam).unwrap();
        let before = moment_at(&beam, &r, 4.0 - 1e-9);
        let at = moment_at(&beam, &r, 4.0);
        assert_abs_diff_eq!(before, at, epsilon = 1e-6);
    }
}
