//! # Beam Statics Calculations
//!
//! The analysis is a two-phase contract:
//!
//! 1. [`compute_reactions`] solves equilibrium and returns an immutable
//!    [`Reactions`] record.
//! 2. [`shear_at`] / [`moment_at`] take that record explicitly, so an
//!    evaluation can never run against unsolved reactions.
//!
//! [`analyze`] runs both phases and samples the span.
//!
//! ## Available Calculations
//!
//! - [`reactions`] - Two-support reaction solver
//! - [`internal_forces`] - Shear and moment at a section
//! - [`analysis`] - Sampled diagrams and governing values

pub mod analysis;
pub mod internal_forces;
pub mod reactions;

pub use analysis::{analyze, BeamDiagram, DiagramSummary, DEFAULT_RESOLUTION};
pub use internal_forces::{moment_at, shear_at};
pub use reactions::{compute_reactions, Reactions, SupportReaction};
