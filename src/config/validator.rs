//! Configuration validation

use super::*;
use crate::disk::DriveGeometry;
use anyhow::{Context, Result};

/// Workload size above which SSTF's quadratic rescan becomes slow
const LARGE_WORKLOAD: usize = 100_000;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_drive(&config.drive)?;
    validate_run(&config.run)?;
    validate_output(&config.output, &config.run.mode)?;

    // Timings must be derivable from the combination
    DriveGeometry::new(config.drive, config.run.rpm, config.run.average_seek_ms)
        .context("Invalid drive geometry")?;

    Ok(())
}

/// Validate drive geometry configuration
pub fn validate_drive(drive: &GeometryConfig) -> Result<()> {
    if drive.requests == 0 {
        anyhow::bail!("drive.requests must be at least 1");
    }

    if drive.platters == 0 {
        anyhow::bail!("drive.platters must be at least 1");
    }

    if drive.cylinders < 2 {
        anyhow::bail!("drive.cylinders must be at least 2, got {}", drive.cylinders);
    }

    if drive.sectors_per_track == 0 {
        anyhow::bail!("drive.sectors_per_track must be at least 1");
    }

    if drive.requests > LARGE_WORKLOAD {
        log::warn!(
            "Very large workload ({} requests); SSTF rescans every pending request per step",
            drive.requests
        );
    }

    Ok(())
}

/// Validate run parameters
pub fn validate_run(run: &RunConfig) -> Result<()> {
    if run.rpm == 0 {
        anyhow::bail!("rpm must be greater than 0");
    }

    if run.sector_size == 0 {
        anyhow::bail!("sector_size must be greater than 0");
    }

    if run.average_seek_ms == 0 {
        log::warn!("Average seek time is 0 ms; head movement will be free");
    }

    Ok(())
}

/// Validate output configuration
pub fn validate_output(output: &OutputConfig, mode: &RunMode) -> Result<()> {
    if output.trace_csv.is_some() && *mode == RunMode::Compare {
        anyhow::bail!("trace_csv is only available when running a single algorithm");
    }

    if output.json_output.is_some() && output.json_output == output.trace_csv {
        anyhow::bail!("json_output and trace_csv must be different files");
    }

    Ok(())
}
