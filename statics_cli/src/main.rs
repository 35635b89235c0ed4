//! # Beam Statics CLI
//!
//! Terminal front end for `statics_core`. Reads a JSON analysis request,
//! prints the reactions and governing values, and optionally writes the full
//! report and the sampled diagram.
//!
//! # Usage
//!
//! ```bash
//! # Print a sample request to start from
//! statics_cli example > b1.json
//!
//! # Analyze it, writing the report and a CSV table
//! statics_cli analyze b1.json --json b1.report.json --csv b1.csv
//!
//! # More stations, debug logging
//! statics_cli analyze b1.json --resolution 400 --verbose
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;

use statics_core::beam::{Beam, Support};
use statics_core::errors::StaticsResult;
use statics_core::file_io::{export_diagram_csv, load_request, save_report};
use statics_core::loads::{DistributedLoad, PointLoad};
use statics_core::request::{AnalysisReport, AnalysisRequest};

/// Simply-supported beam reactions, shear and moment.
#[derive(Debug, Parser)]
#[command(name = "statics_cli", version, about)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze a beam described by a JSON request file
    Analyze {
        /// Path to the request file
        request: PathBuf,

        /// Override the number of evaluation stations
        #[arg(short, long)]
        resolution: Option<usize>,

        /// Write the full report as JSON
        #[arg(long, value_name = "PATH")]
        json: Option<PathBuf>,

        /// Write the sampled diagram as CSV
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,
    },

    /// Print a sample request file
    Example,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let outcome = match cli.command {
        Command::Analyze {
            request,
            resolution,
            json,
            csv,
        } => run_analyze(request, resolution, json, csv),
        Command::Example => print_example(),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn run_analyze(
    request_path: PathBuf,
    resolution: Option<usize>,
    json_path: Option<PathBuf>,
    csv_path: Option<PathBuf>,
) -> StaticsResult<()> {
    let mut request = load_request(&request_path)?;
    if let Some(resolution) = resolution {
        request.resolution = resolution;
    }

    let report = request.run()?;
    print_report(&request, &report);

    if let Some(path) = json_path {
        save_report(&report, &path)?;
        info!("Report written to {}", path.display());
    }
    if let Some(path) = csv_path {
        export_diagram_csv(&report.diagram, &path)?;
        info!("Diagram written to {}", path.display());
    }

    Ok(())
}

fn print_report(request: &AnalysisRequest, report: &AnalysisReport) {
    let beam = &request.beam;
    let summary = &report.summary;

    println!("═══════════════════════════════════════");
    println!("  BEAM ANALYSIS: {}", display_label(&report.label));
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Span:        {:.3} m", beam.length_m());
    println!("  Point loads: {}", beam.point_loads().len());
    println!("  UDLs:        {}", beam.distributed_loads().len());
    println!("  Stations:    {}", report.diagram.len());
    println!();
    println!("Reactions (input order):");
    for (support, reaction) in beam.supports().iter().zip(report.reactions_kn) {
        println!(
            "  {:<6} @ {:>7.3} m   R = {:>10.3} kN",
            support.kind, support.position_m, reaction
        );
    }
    println!();
    println!("Governing values:");
    println!(
        "  |V|max = {:.3} kN at {:.3} m",
        summary.max_shear_kn, summary.max_shear_position_m
    );
    println!(
        "  M+max  = {:.3} kN·m at {:.3} m",
        summary.max_moment_knm, summary.max_moment_position_m
    );
    println!(
        "  M-max  = {:.3} kN·m at {:.3} m",
        summary.min_moment_knm, summary.min_moment_position_m
    );
    println!("═══════════════════════════════════════");
}

fn display_label(label: &str) -> &str {
    if label.is_empty() {
        "(unlabeled)"
    } else {
        label
    }
}

fn example_request() -> StaticsResult<AnalysisRequest> {
    let beam = Beam::new(10.0)?
        .with_support(Support::pin(0.0))?
        .with_support(Support::roller(10.0))?
        .with_point_load(PointLoad::new(20.0, 5.0))?
        .with_distributed_load(DistributedLoad::new(2.0, 2.0, 8.0))?;
    Ok(AnalysisRequest::new("B-1", beam))
}

fn print_example() -> StaticsResult<()> {
    let json = serde_json::to_string_pretty(&example_request()?)?;
    println!("{}", json);
    Ok(())
}
