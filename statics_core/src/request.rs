//! # Analysis Request and Report Documents
//!
//! `AnalysisRequest` is the JSON document a caller hands the engine: a label,
//! the beam, and the sampling resolution. Running it produces an
//! `AnalysisReport` holding the reactions, governing values and diagram.
//!
//! ## Structure
//!
//! ```text
//! AnalysisRequest
//! ├── version: schema version
//! ├── label
//! ├── beam: Beam (length, supports, point loads, distributed loads)
//! └── resolution: stations (default 100)
//!
//! AnalysisReport
//! ├── version, label, generated_at
//! ├── reactions_kn: [f64; 2] in support input order
//! ├── summary: DiagramSummary
//! └── diagram: BeamDiagram
//! ```
//!
//! ## Example
//!
//! ```rust
//! use statics_core::request::AnalysisRequest;
//!
//! let json = r#"{
//!     "label": "B-1",
//!     "resolution": 101,
//!     "beam": {
//!         "length_m": 10.0,
//!         "supports": [{"position_m": 0.0}, {"position_m": 10.0, "kind": "Roller"}],
//!         "point_loads": [{"magnitude_kn": 20.0, "position_m": 5.0}]
//!     }
//! }"#;
//!
//! let request: AnalysisRequest = serde_json::from_str(json).unwrap();
//! let report = request.run().unwrap();
//! assert!((report.summary.max_moment_knm - 50.0).abs() < 1e-9);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::beam::Beam;
use crate::calculations::{analyze, BeamDiagram, DiagramSummary, DEFAULT_RESOLUTION};
use crate::errors::StaticsResult;

/// Current schema version for request and report files
pub const SCHEMA_VERSION: &str = "0.1.0";

fn default_version() -> String {
    SCHEMA_VERSION.to_string()
}

fn default_resolution() -> usize {
    DEFAULT_RESOLUTION
}

/// One beam analysis to run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Schema version of the document
    #[serde(default = "default_version")]
    pub version: String,

    /// User label (e.g., "B-1", "Level 2 transfer beam")
    #[serde(default)]
    pub label: String,

    /// The beam to analyze
    pub beam: Beam,

    /// Number of evenly spaced stations
    #[serde(default = "default_resolution")]
    pub resolution: usize,
}

impl AnalysisRequest {
    /// Create a request at the default resolution
    pub fn new(label: impl Into<String>, beam: Beam) -> Self {
        AnalysisRequest {
            version: default_version(),
            label: label.into(),
            beam,
            resolution: DEFAULT_RESOLUTION,
        }
    }

    /// Set the resolution and return self (builder pattern)
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Analyze the beam and build a report.
    ///
    /// Any error aborts the whole request; no partial report is produced.
    pub fn run(&self) -> StaticsResult<AnalysisReport> {
        let diagram = analyze(&self.beam, self.resolution)?;
        Ok(AnalysisReport {
            version: SCHEMA_VERSION.to_string(),
            label: self.label.clone(),
            generated_at: Utc::now(),
            reactions_kn: diagram.reactions.in_input_order(),
            summary: diagram.summary(),
            diagram,
        })
    }
}

/// Result of running an `AnalysisRequest`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Schema version of the document
    pub version: String,
    /// Label copied from the request
    pub label: String,
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// Support reactions (kN) in the order supports were supplied
    pub reactions_kn: [f64; 2],
    /// Governing shear and moment
    pub summary: DiagramSummary,
    /// Sampled diagrams
    pub diagram: BeamDiagram,
}
