//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

const ALGORITHM_HELP: &str = "\
Disk scheduling algorithms (ALGO):
  1. Random
  2. FIFO
  3. SSTF
  4. SCAN
  5. C-SCAN";

/// disksim - Disk scheduling simulator
#[derive(Parser, Debug)]
#[command(name = "disksim")]
#[command(version, about, long_about = None, after_help = ALGORITHM_HELP)]
pub struct Cli {
    /// Rotational speed of the disk in revolutions per minute
    #[arg(value_name = "RPM")]
    pub rpm: u32,

    /// Sector size in bytes
    #[arg(value_name = "SECTOR_SIZE")]
    pub sector_size: u32,

    /// Average seek time in milliseconds
    #[arg(value_name = "SEEK_MS")]
    pub seek_time: u32,

    /// Scheduling algorithm, a number from 1 to 5 (see below)
    #[arg(
        value_name = "ALGO",
        value_parser = clap::value_parser!(u8).range(1..=5),
        required_unless_present = "compare"
    )]
    pub algorithm: Option<u8>,

    /// Run all five algorithms on the same workload and compare them
    #[arg(long)]
    pub compare: bool,

    /// TOML configuration file (drive geometry, seed, output)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Seed for the random source (workload, head position, Random policy)
    #[arg(short = 's', long, env = "DISKSIM_SEED")]
    pub seed: Option<u64>,

    // === Drive Geometry ===
    /// Number of requests in the workload
    #[arg(short = 'r', long)]
    pub requests: Option<usize>,

    /// Number of platters
    #[arg(long)]
    pub platters: Option<u32>,

    /// Number of cylinders
    #[arg(long)]
    pub cylinders: Option<u32>,

    /// Number of sectors per track
    #[arg(long)]
    pub sectors: Option<u32>,

    // === Output Options ===
    /// JSON report output file
    #[arg(long)]
    pub json_output: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pub pretty: bool,

    /// CSV file receiving the per-request service trace
    #[arg(long, conflicts_with = "compare")]
    pub trace_csv: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Validate and print the configuration without simulating
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.rpm == 0 {
            anyhow::bail!("RPM must be at least 1");
        }

        if self.sector_size == 0 {
            anyhow::bail!("SECTOR_SIZE must be at least 1 byte");
        }

        if self.compare && self.algorithm.is_some() {
            log::warn!("--compare runs every algorithm; ALGO is ignored");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positionals() {
        let cli = Cli::try_parse_from(["disksim", "7200", "512", "8", "3"]).unwrap();
        assert_eq!(cli.rpm, 7200);
        assert_eq!(cli.sector_size, 512);
        assert_eq!(cli.seek_time, 8);
        assert_eq!(cli.algorithm, Some(3));
        assert!(!cli.compare);
        cli.validate().unwrap();
    }

    #[test]
    fn test_missing_algorithm_rejected() {
        assert!(Cli::try_parse_from(["disksim", "7200", "512", "8"]).is_err());
    }

    #[test]
    fn test_too_many_arguments_rejected() {
        assert!(Cli::try_parse_from(["disksim", "7200", "512", "8", "3", "9"]).is_err());
    }

    #[test]
    fn test_algorithm_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["disksim", "7200", "512", "8", "0"]).is_err());
        assert!(Cli::try_parse_from(["disksim", "7200", "512", "8", "6"]).is_err());
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert!(Cli::try_parse_from(["disksim", "fast", "512", "8", "1"]).is_err());
    }

    #[test]
    fn test_compare_without_algorithm() {
        let cli = Cli::try_parse_from(["disksim", "7200", "512", "8", "--compare"]).unwrap();
        assert!(cli.compare);
        assert_eq!(cli.algorithm, None);
    }

    #[test]
    fn test_trace_conflicts_with_compare() {
        let result = Cli::try_parse_from([
            "disksim", "7200", "512", "8", "--compare", "--trace-csv", "trace.csv",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_rpm_fails_validation() {
        let cli = Cli::try_parse_from(["disksim", "0", "512", "8", "1"]).unwrap();
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_geometry_overrides() {
        let cli = Cli::try_parse_from([
            "disksim", "5400", "4096", "12", "5", "--cylinders", "100", "--sectors", "63", "-r", "50",
        ])
        .unwrap();
        assert_eq!(cli.cylinders, Some(100));
        assert_eq!(cli.sectors, Some(63));
        assert_eq!(cli.requests, Some(50));
        assert_eq!(cli.platters, None);
    }
}
