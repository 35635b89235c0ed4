//! # Beam Model
//!
//! A `Beam` is the unit of work for one analysis: a span length plus the
//! supports and loads applied to it. Beams are built, analyzed, and dropped;
//! nothing about them is persisted by this crate.
//!
//! The constructors validate geometry eagerly. Beams deserialized from JSON
//! bypass the constructors, so the reaction solver validates again.
//!
//! ## Example
//!
//! ```rust
//! use statics_core::beam::{Beam, Support, SupportKind};
//! use statics_core::loads::{DistributedLoad, PointLoad};
//!
//! let beam = Beam::new(8.0)?
//!     .with_support(Support::new(0.0, SupportKind::Pin))?
//!     .with_support(Support::new(8.0, SupportKind::Roller))?
//!     .with_point_load(PointLoad::new(12.0, 3.0))?
//!     .with_distributed_load(DistributedLoad::new(1.5, 2.0, 6.0))?;
//!
//! assert_eq!(beam.supports().len(), 2);
//! # Ok::<(), statics_core::errors::StaticsError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{StaticsError, StaticsResult};
use crate::loads::{check_finite, check_position, DistributedLoad, PointLoad};

/// Support type.
///
/// Every kind contributes a single vertical reaction. A `Fixed` support does
/// not develop a moment reaction here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SupportKind {
    /// Pinned support
    #[default]
    Pin,
    /// Roller support
    Roller,
    /// Fixed support (treated as a vertical reaction only)
    Fixed,
}

impl SupportKind {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportKind::Pin => "Pin",
            SupportKind::Roller => "Roller",
            SupportKind::Fixed => "Fixed",
        }
    }
}

impl std::fmt::Display for SupportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.display_name())
    }
}

/// A point support on the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Support {
    /// Distance from the left end of the beam (m)
    pub position_m: f64,
    /// Support type
    #[serde(default)]
    pub kind: SupportKind,
}

impl Support {
    /// Create a support
    pub fn new(position_m: f64, kind: SupportKind) -> Self {
        Support { position_m, kind }
    }

    /// Create a pinned support
    pub fn pin(position_m: f64) -> Self {
        Support::new(position_m, SupportKind::Pin)
    }

    /// Create a roller support
    pub fn roller(position_m: f64) -> Self {
        Support::new(position_m, SupportKind::Roller)
    }

    fn validate(&self, index: usize, length_m: f64) -> StaticsResult<()> {
        check_position(&format!("supports[{}].position_m", index), self.position_m, length_m)
    }
}

/// A straight beam with its supports and loads.
///
/// Collections are append-only and unordered; supports keep their input
/// order so reactions can be reported against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    length_m: f64,
    #[serde(default)]
    supports: Vec<Support>,
    #[serde(default)]
    point_loads: Vec<PointLoad>,
    #[serde(default)]
    distributed_loads: Vec<DistributedLoad>,
}

impl Beam {
    /// Create an unloaded, unsupported beam.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `length_m` is not a positive finite number.
    pub fn new(length_m: f64) -> StaticsResult<Self> {
        validate_length(length_m)?;
        Ok(Beam {
            length_m,
            supports: Vec::new(),
            point_loads: Vec::new(),
            distributed_loads: Vec::new(),
        })
    }

    /// Span length (m)
    pub fn length_m(&self) -> f64 {
        self.length_m
    }

    /// Supports in input order
    pub fn supports(&self) -> &[Support] {
        &self.supports
    }

    /// Concentrated loads
    pub fn point_loads(&self) -> &[PointLoad] {
        &self.point_loads
    }

    /// Distributed loads
    pub fn distributed_loads(&self) -> &[DistributedLoad] {
        &self.distributed_loads
    }

    /// Add a support after checking its position
    pub fn add_support(&mut self, support: Support) -> StaticsResult<()> {
        support.validate(self.supports.len(), self.length_m)?;
        self.supports.push(support);
        Ok(())
    }

    /// Add a point load after checking it against the span
    pub fn add_point_load(&mut self, load: PointLoad) -> StaticsResult<()> {
        load.validate(self.point_loads.len(), self.length_m)?;
        self.point_loads.push(load);
        Ok(())
    }

    /// Add a distributed load after checking it against the span
    pub fn add_distributed_load(&mut self, load: DistributedLoad) -> StaticsResult<()> {
        load.validate(self.distributed_loads.len(), self.length_m)?;
        self.distributed_loads.push(load);
        Ok(())
    }

    /// Add a support and return self (builder pattern)
    pub fn with_support(mut self, support: Support) -> StaticsResult<Self> {
        self.add_support(support)?;
        Ok(self)
    }

    /// Add a point load and return self (builder pattern)
    pub fn with_point_load(mut self, load: PointLoad) -> StaticsResult<Self> {
        self.add_point_load(load)?;
        Ok(self)
    }

    /// Add a distributed load and return self (builder pattern)
    pub fn with_distributed_load(mut self, load: DistributedLoad) -> StaticsResult<Self> {
        self.add_distributed_load(load)?;
        Ok(self)
    }

    /// Check every invariant of the geometry.
    ///
    /// Support count is not checked here; that is the solver's concern.
    pub fn validate(&self) -> StaticsResult<()> {
        validate_length(self.length_m)?;
        for (i, support) in self.supports.iter().enumerate() {
            support.validate(i, self.length_m)?;
        }
        for (i, load) in self.point_loads.iter().enumerate() {
            load.validate(i, self.length_m)?;
        }
        for (i, load) in self.distributed_loads.iter().enumerate() {
            load.validate(i, self.length_m)?;
        }
        Ok(())
    }

    /// True when no loads of any kind are applied
    pub fn is_unloaded(&self) -> bool {
        self.point_loads.is_empty() && self.distributed_loads.is_empty()
    }

    /// Point loads plus the resultant of every distributed load.
    ///
    /// This is the load set used for global equilibrium.
    pub fn resultant_loads(&self) -> impl Iterator<Item = PointLoad> + '_ {
        self.point_loads
            .iter()
            .copied()
            .chain(self.distributed_loads.iter().map(DistributedLoad::equivalent_point_load))
    }

    /// Sum of all applied load magnitudes (kN)
    pub fn total_load_kn(&self) -> f64 {
        self.resultant_loads().map(|load| load.magnitude_kn).sum()
    }
}

fn validate_length(length_m: f64) -> StaticsResult<()> {
    check_finite("length_m", length_m)?;
    if length_m <= 0.0 {
        return Err(StaticsError::invalid_input(
            "length_m",
            length_m.to_string(),
            "Beam length must be positive",
        ));
    }
    Ok(())
}
