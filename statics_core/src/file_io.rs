//! # File I/O Module
//!
//! Reads analysis requests and writes reports and diagram tables:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent partial files
//! - **Version validation**: Ensure schema compatibility on load
//! - **CSV export**: `position_m,shear_kn,moment_knm` rows for spreadsheets
//!   and the tabular stores of the surrounding application
//!
//! ## Example
//!
//! ```rust,no_run
//! use statics_core::file_io::{load_request, save_report, export_diagram_csv};
//! use std::path::Path;
//!
//! let request = load_request(Path::new("b1.json"))?;
//! let report = request.run()?;
//! save_report(&report, Path::new("b1.report.json"))?;
//! export_diagram_csv(&report.diagram, Path::new("b1.csv"))?;
//! # Ok::<(), statics_core::errors::StaticsError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::calculations::BeamDiagram;
use crate::errors::{StaticsError, StaticsResult};
use crate::request::{AnalysisReport, AnalysisRequest, SCHEMA_VERSION};

/// Header row of exported diagram tables
pub const CSV_HEADER: &str = "position_m,shear_kn,moment_knm";

/// Load an analysis request from a JSON file.
///
/// # Returns
///
/// * `Ok(AnalysisRequest)` - Successfully loaded request
/// * `Err(StaticsError::VersionMismatch)` - File version is incompatible
/// * `Err(StaticsError::SerializationError)` - Invalid JSON
/// * `Err(StaticsError::FileError)` - I/O error
pub fn load_request(path: &Path) -> StaticsResult<AnalysisRequest> {
    let mut file = File::open(path).map_err(|e| {
        StaticsError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        StaticsError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let request: AnalysisRequest = serde_json::from_str(&contents).map_err(|e| {
        StaticsError::serialization(format!("Invalid JSON in {}: {}", path.display(), e))
    })?;

    validate_version(&request.version)?;

    debug!("Loaded request '{}' from {}", request.label, path.display());
    Ok(request)
}

/// Save a report as pretty JSON with atomic write semantics.
pub fn save_report(report: &AnalysisReport, path: &Path) -> StaticsResult<()> {
    let json = serde_json::to_string_pretty(report)?;
    write_atomic(path, json.as_bytes())
}

/// One CSV row; field names form the header
#[derive(Serialize)]
struct StationRow {
    position_m: f64,
    shear_kn: f64,
    moment_knm: f64,
}

/// Render a diagram as CSV bytes, one row per station after the header.
fn diagram_to_csv_bytes(diagram: &BeamDiagram) -> StaticsResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::with_capacity(32 * (diagram.len() + 1)));

    if diagram.is_empty() {
        // serialize() only emits the header alongside the first row
        writer
            .write_record(CSV_HEADER.split(','))
            .map_err(|e| StaticsError::serialization(e.to_string()))?;
    }
    for (position_m, shear_kn, moment_knm) in diagram.stations() {
        writer
            .serialize(StationRow {
                position_m,
                shear_kn,
                moment_knm,
            })
            .map_err(|e| StaticsError::serialization(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| StaticsError::serialization(e.to_string()))
}

/// Render a diagram as CSV text, one row per station.
pub fn diagram_to_csv(diagram: &BeamDiagram) -> StaticsResult<String> {
    String::from_utf8(diagram_to_csv_bytes(diagram)?)
        .map_err(|e| StaticsError::serialization(e.to_string()))
}

/// Write a diagram as CSV with atomic write semantics.
pub fn export_diagram_csv(diagram: &BeamDiagram, path: &Path) -> StaticsResult<()> {
    write_atomic(path, &diagram_to_csv_bytes(diagram)?)
}

/// Temp file path next to the target: `name.ext` -> `name.ext.tmp`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp_path = path.to_path_buf();
    let extension = path
        .extension()
        .map(|e| format!("{}.tmp", e.to_string_lossy()))
        .unwrap_or_else(|| "tmp".to_string());
    tmp_path.set_extension(extension);
    tmp_path
}

/// Write to a temp file, sync, then rename over the target.
fn write_atomic(path: &Path, bytes: &[u8]) -> StaticsResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        StaticsError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(bytes).map_err(|e| {
        StaticsError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        StaticsError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        StaticsError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Parse `major.minor[.patch]`; every component must be a number.
fn parse_version(version: &str) -> Option<(u32, u32)> {
    let parts = version
        .split('.')
        .map(|part| part.parse::<u32>().ok())
        .collect::<Option<Vec<u32>>>()?;
    match parts.as_slice() {
        [major, minor] | [major, minor, _] => Some((*major, *minor)),
        _ => None,
    }
}

/// Accept a file version with our major; in 0.x the file's minor must not be newer.
fn validate_version(file_version: &str) -> StaticsResult<()> {
    let mismatch = || StaticsError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let (ours_major, ours_minor) = parse_version(SCHEMA_VERSION).ok_or_else(mismatch)?;
    let (file_major, file_minor) = parse_version(file_version).ok_or_else(mismatch)?;

    let compatible = file_major == ours_major && (ours_major != 0 || file_minor <= ours_minor);
    if !compatible {
        return Err(mismatch());
    }
    Ok(())
}
