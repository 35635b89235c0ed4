//! Reaction Solver
//!
//! Solves the two vertical support reactions of a simply-supported beam from
//! static equilibrium:
//!
//! ```text
//! ΣM_b = 0  =>  R_a = Σ P·(x_P − b) / (b − a)
//! ΣF_y = 0  =>  R_b = ΣP − R_a
//! ```
//!
//! Supports are ordered by position before solving, so `a` is always the
//! left support. Distributed loads enter through their resultant only.
//!
//! ## Sign Convention
//! - Loads positive downward
//! - Reactions positive upward

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::beam::{Beam, SupportKind};
use crate::errors::{StaticsError, StaticsResult};

/// Reaction at one support
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupportReaction {
    /// Index of the support in the beam's input order
    pub support_index: usize,
    /// Support position (m)
    pub position_m: f64,
    /// Support type
    pub kind: SupportKind,
    /// Vertical reaction (kN), positive upward
    pub reaction_kn: f64,
}

/// Solved support reactions, ordered left to right.
///
/// This record is the only channel through which reactions reach the shear
/// and moment evaluators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reactions {
    /// Support with the smaller position
    pub left: SupportReaction,
    /// Support with the larger position
    pub right: SupportReaction,
}

impl Reactions {
    /// Both reactions, left to right
    pub fn iter(&self) -> impl Iterator<Item = &SupportReaction> {
        [&self.left, &self.right].into_iter()
    }

    /// Reactions (kN) in the order the supports were supplied
    pub fn in_input_order(&self) -> [f64; 2] {
        if self.left.support_index <= self.right.support_index {
            [self.left.reaction_kn, self.right.reaction_kn]
        } else {
            [self.right.reaction_kn, self.left.reaction_kn]
        }
    }

    /// Sum of both reactions (kN)
    pub fn total_kn(&self) -> f64 {
        self.left.reaction_kn + self.right.reaction_kn
    }
}

/// Solve the support reactions of a two-support beam.
///
/// # Errors
///
/// - `UnsupportedConfiguration` if the beam does not have exactly two supports
/// - `InvalidInput` if the geometry is invalid or both supports coincide
///
/// # Example
///
/// ```rust
/// use statics_core::beam::{Beam, Support};
/// use statics_core::calculations::compute_reactions;
/// use statics_core::loads::PointLoad;
///
/// // 10 kN at 3 m on a 10 m span
/// let beam = Beam::new(10.0)?
///     .with_support(Support::pin(0.0))?
///     .with_support(Support::roller(10.0))?
///     .with_point_load(PointLoad::new(10.0, 3.0))?;
///
/// let reactions = compute_reactions(&beam)?;
/// assert!((reactions.left.reaction_kn - 7.0).abs() < 1e-9);
/// assert!((reactions.right.reaction_kn - 3.0).abs() < 1e-9);
/// # Ok::<(), statics_core::errors::StaticsError>(())
/// ```
pub fn compute_reactions(beam: &Beam) -> StaticsResult<Reactions> {
    beam.validate()?;

    let supports = beam.supports();
    if supports.len() != 2 {
        return Err(StaticsError::unsupported_configuration(
            supports.len(),
            "Only two-support simply-supported beams are analyzable",
        ));
    }

    let (a_index, b_index) = if supports[0].position_m <= supports[1].position_m {
        (0, 1)
    } else {
        (1, 0)
    };
    let a = supports[a_index];
    let b = supports[b_index];

    let lever_m = b.position_m - a.position_m;
    if lever_m <= 0.0 {
        return Err(StaticsError::invalid_input(
            "supports",
            format!("[{}, {}]", a.position_m, b.position_m),
            "Supports must be at distinct positions",
        ));
    }

    if beam.is_unloaded() {
        warn!("Solving reactions for a beam with no applied loads");
    }
    for (i, load) in beam.distributed_loads().iter().enumerate() {
        if load.span_m() == 0.0 {
            warn!("distributed_loads[{}] has zero length at {} m and carries no load", i, load.start_m);
        }
    }

    // ΣM about b
    let moment_about_b: f64 = beam
        .resultant_loads()
        .map(|load| load.moment_about(b.position_m))
        .sum();
    let reaction_a = -moment_about_b / lever_m;
    let reaction_b = beam.total_load_kn() - reaction_a;

    debug!(
        "Solved reactions: R@{:.3} m = {:.4} kN, R@{:.3} m = {:.4} kN",
        a.position_m, reaction_a, b.position_m, reaction_b
    );

    Ok(Reactions {
        left: SupportReaction {
            support_index: a_index,
            position_m: a.position_m,
            kind: a.kind,
            reaction_kn: reaction_a,
        },
        right: SupportReaction {
            support_index: b_index,
            position_m: b.position_m,
            kind: b.kind,
            reaction_kn: reaction_b,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beam::Support;
    use crate::loads::{DistributedLoad, PointLoad};
    use approx::assert_relative_eq;

    fn simple_beam(length_m: f64) -> Beam {
        Beam::new(length_m)
            .unwrap()
            .with_support(Support::pin(0.0))
            .unwrap()
            .with_support(Support::roller(length_m))
            .unwrap()
    }

    #[test]
    fn test_midspan_point_load() {
        let beam = simple_beam(10.0).with_point_load(PointLoad::new(20.0, 5.0)).unwrap();
        let r = compute_reactions(&beam).unwrap();
        assert_relative_eq!(r.left.reaction_kn, 10.0, epsilon = 1e-12);
        assert_relative_eq!(r.right.reaction_kn, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_asymmetric_point_load() {
        // R_a = P(L-a)/L = 1000 * 7/10, R_b = Pa/L = 1000 * 3/10
        let beam = simple_beam(10.0).with_point_load(PointLoad::new(1000.0, 3.0)).unwrap();
        let r = compute_reactions(&beam).unwrap();
        assert_relative_eq!(r.left.reaction_kn, 700.0, epsilon = 1e-9);
        assert_relative_eq!(r.right.reaction_kn, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_partial_udl() {
        // 100 kN/m from 2 to 8 m: 600 kN centered at 5 m
        let beam = simple_beam(10.0)
            .with_distributed_load(DistributedLoad::new(100.0, 2.0, 8.0))
            .unwrap();
        let r = compute_reactions(&beam).unwrap();
        assert_relative_eq!(r.left.reaction_kn, 300.0, epsilon = 1e-9);
        assert_relative_eq!(r.right.reaction_kn, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_overhang_load_lifts_far_support() {
        // Supports at 0 and 6 m, 10 kN at the tip of an 8 m beam
        let beam = Beam::new(8.0)
            .unwrap()
            .with_support(Support::pin(0.0))
            .unwrap()
            .with_support(Support::roller(6.0))
            .unwrap()
            .with_point_load(PointLoad::new(10.0, 8.0))
            .unwrap();
        let r = compute_reactions(&beam).unwrap();
        assert_relative_eq!(r.left.reaction_kn, -10.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(r.right.reaction_kn, 40.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_supports_given_right_to_left() {
        let beam = Beam::new(10.0)
            .unwrap()
            .with_support(Support::roller(10.0))
            .unwrap()
            .with_support(Support::pin(0.0))
            .unwrap()
            .with_point_load(PointLoad::new(10.0, 2.0))
            .unwrap();
        let r = compute_reactions(&beam).unwrap();

        assert_eq!(r.left.position_m, 0.0);
        assert_eq!(r.left.support_index, 1);
        assert_relative_eq!(r.left.reaction_kn, 8.0, epsilon = 1e-9);
        assert_relative_eq!(r.right.reaction_kn, 2.0, epsilon = 1e-9);

        let [first, second] = r.in_input_order();
        assert_relative_eq!(first, 2.0, epsilon = 1e-9);
        assert_relative_eq!(second, 8.0, epsilon = 1e-9);
    }

    #[test]
    fn test_wrong_support_count() {
        let one = Beam::new(5.0).unwrap().with_support(Support::pin(0.0)).unwrap();
        let three = simple_beam(5.0).with_support(Support::roller(2.5)).unwrap();

        for beam in [one, three] {
            match compute_reactions(&beam) {
                Err(StaticsError::UnsupportedConfiguration { support_count, .. }) => {
                    assert_eq!(support_count, beam.supports().len());
                }
                other => panic!("expected UnsupportedConfiguration, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_coincident_supports_rejected() {
        let beam = Beam::new(5.0)
            .unwrap()
            .with_support(Support::pin(2.0))
            .unwrap()
            .with_support(Support::roller(2.0))
            .unwrap();
        let err = compute_reactions(&beam).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_fixed_kind_does_not_change_reactions() {
        let pinned = simple_beam(6.0).with_point_load(PointLoad::new(9.0, 2.0)).unwrap();
        let fixed = Beam::new(6.0)
            .unwrap()
            .with_support(Support::new(0.0, SupportKind::Fixed))
            .unwrap()
            .with_support(Support::new(6.0, SupportKind::Fixed))
            .unwrap()
            .with_point_load(PointLoad::new(9.0, 2.0))
            .unwrap();

        let a = compute_reactions(&pinned).unwrap();
        let b = compute_reactions(&fixed).unwrap();
        assert_eq!(a.in_input_order(), b.in_input_order());
    }
}
