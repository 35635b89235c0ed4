//! # statics_core - Beam Statics Engine
//!
//! `statics_core` analyzes simply-supported beams: it solves the two support
//! reactions from equilibrium, then evaluates shear force and bending moment
//! anywhere along the span. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Two-phase**: Reactions are an explicit value passed to the evaluators
//! - **Validated**: Bad geometry is a typed error, not a silent wrong answer
//! - **JSON-First**: All types implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use statics_core::beam::{Beam, Support};
//! use statics_core::calculations::{analyze, compute_reactions, moment_at};
//! use statics_core::loads::DistributedLoad;
//!
//! // 2 kN/m over a 10 m simple span
//! let beam = Beam::new(10.0)?
//!     .with_support(Support::pin(0.0))?
//!     .with_support(Support::roller(10.0))?
//!     .with_distributed_load(DistributedLoad::new(2.0, 0.0, 10.0))?;
//!
//! let reactions = compute_reactions(&beam)?;
//! assert!((moment_at(&beam, &reactions, 5.0) - 25.0).abs() < 1e-9);
//!
//! let diagram = analyze(&beam, 100)?;
//! assert_eq!(diagram.positions.len(), 100);
//! # Ok::<(), statics_core::errors::StaticsError>(())
//! ```
//!
//! ## Modules
//!
//! - [`beam`] - Beam, supports, and geometry validation
//! - [`loads`] - Point and distributed loads
//! - [`calculations`] - Reaction solver, shear/moment evaluators, sampling
//! - [`request`] - Analysis request and report documents
//! - [`file_io`] - Request loading, atomic report saves, CSV export
//! - [`errors`] - Structured error types

pub mod beam;
pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod loads;
pub mod request;

// Re-export commonly used types at crate root for convenience
pub use beam::{Beam, Support, SupportKind};
pub use calculations::{analyze, compute_reactions, moment_at, shear_at, BeamDiagram, Reactions};
pub use errors::{StaticsError, StaticsResult};
pub use loads::{DistributedLoad, PointLoad};
pub use request::{AnalysisReport, AnalysisRequest};
