//! Beam loads
//!
//! Concentrated and uniformly distributed loads applied to a beam.
//!
//! # Sign Convention
//!
//! - Load magnitudes are positive downward (gravity)
//! - Positions are measured in meters from the left end of the beam
//!
//! # Example
//!
//! ```
//! use statics_core::loads::{DistributedLoad, PointLoad};
//!
//! let udl = DistributedLoad::new(2.0, 0.0, 10.0);
//! assert_eq!(udl.total_load_kn(), 20.0);
//!
//! // Only the reaction solver collapses a distributed load to a point
//! let resultant: PointLoad = udl.equivalent_point_load();
//! assert_eq!(resultant.position_m, 5.0);
//! ```

pub mod distributed;
pub mod point;

pub use distributed::DistributedLoad;
pub use point::PointLoad;

use crate::errors::{StaticsError, StaticsResult};

/// Reject non-finite values.
pub(crate) fn check_finite(field: &str, value: f64) -> StaticsResult<()> {
    if !value.is_finite() {
        return Err(StaticsError::invalid_input(field, value.to_string(), "Value must be finite"));
    }
    Ok(())
}

/// Reject positions outside `[0, length_m]`.
pub(crate) fn check_position(field: &str, position_m: f64, length_m: f64) -> StaticsResult<()> {
    check_finite(field, position_m)?;
    if position_m < 0.0 || position_m > length_m {
        return Err(StaticsError::invalid_input(
            field,
            position_m.to_string(),
            format!("Position must lie within [0, {}] m", length_m),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_position_bounds() {
        assert!(check_position("x", 0.0, 10.0).is_ok());
        assert!(check_position("x", 10.0, 10.0).is_ok());
        assert!(check_position("x", -0.1, 10.0).is_err());
        assert!(check_position("x", 10.1, 10.0).is_err());
    }

    #[test]
    fn test_check_finite_rejects_nan() {
        let err = check_finite("magnitude_kn", f64::NAN).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(check_position("x", f64::INFINITY, 10.0).is_err());
    }
}
