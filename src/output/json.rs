//! JSON output formatting
//!
//! Serializes a finished simulation into a single document:
//! - Generation timestamp (RFC 3339)
//! - Simulation parameters and drive geometry
//! - Seed and initial head position, enough to reproduce the run
//! - One report per executed policy

use crate::disk::{GeometryConfig, HeadState};
use crate::simulation::{Simulation, SimulationResult};
use crate::stats::Report;
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Run parameters as given on the command line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonParameters {
    pub rpm: u32,
    pub sector_size: u32,
    pub average_seek_ms: u32,
    pub drive: GeometryConfig,
    pub rotation_time_per_sector_ms: f64,
    pub seek_time_per_track_ms: f64,
}

/// Report of one policy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonPolicyReport {
    pub algorithm: String,
    pub selector: u8,
    #[serde(flatten)]
    pub report: Report,
}

/// Complete JSON document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonRunOutput {
    pub generated_at: String,
    pub version: String,
    pub seed: u64,
    pub initial_head: HeadState,
    pub parameters: JsonParameters,
    pub results: Vec<JsonPolicyReport>,
}

/// Build the JSON document for a finished run
pub fn build_run_output(sim: &Simulation, result: &SimulationResult) -> JsonRunOutput {
    let config = sim.config();
    let geometry = sim.geometry();

    JsonRunOutput {
        generated_at: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        seed: result.seed,
        initial_head: result.initial_head,
        parameters: JsonParameters {
            rpm: config.run.rpm,
            sector_size: config.run.sector_size,
            average_seek_ms: config.run.average_seek_ms,
            drive: *geometry.config(),
            rotation_time_per_sector_ms: geometry.rotation_time_per_sector(),
            seek_time_per_track_ms: geometry.seek_time_per_track(),
        },
        results: result
            .runs
            .iter()
            .map(|run| JsonPolicyReport {
                algorithm: run.algorithm.name().to_string(),
                selector: run.algorithm.selector(),
                report: run.report.clone(),
            })
            .collect(),
    }
}

/// Write JSON output to file
pub fn write_json_output(output_path: &Path, output: &JsonRunOutput, pretty: bool) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create JSON output: {}", output_path.display()))?;
    let writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(writer, output)?;
    } else {
        serde_json::to_writer(writer, output)?;
    }

    Ok(())
}
