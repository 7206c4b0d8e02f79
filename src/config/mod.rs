//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.
//!
//! The four run parameters (rotational speed, sector size, average seek time
//! and algorithm) always come from the command line. Drive geometry, seed and
//! output settings can come from a TOML file and be overridden on the command
//! line.

pub mod cli;
pub mod toml;
pub mod validator;

use crate::disk::GeometryConfig;
use crate::scheduler::Algorithm;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Complete simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub drive: GeometryConfig,
    pub run: RunConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Run parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Rotational speed in revolutions per minute
    pub rpm: u32,
    /// Sector size in bytes (reported only)
    pub sector_size: u32,
    /// Average seek time in milliseconds
    pub average_seek_ms: u32,
    /// Which policies to run
    pub mode: RunMode,
    /// Seed for every random draw of the run; drawn from entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Single policy or all five side by side
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    Single(Algorithm),
    Compare,
}

impl RunMode {
    /// Policies executed in this mode, in selector order
    pub fn algorithms(&self) -> Vec<Algorithm> {
        match self {
            RunMode::Single(algorithm) => vec![*algorithm],
            RunMode::Compare => Algorithm::ALL.to_vec(),
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Single(algorithm) => write!(f, "{}", algorithm),
            RunMode::Compare => f.write_str("all (comparison)"),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// JSON report path
    pub json_output: Option<PathBuf>,
    /// Pretty-print JSON
    #[serde(default)]
    pub pretty: bool,
    /// Per-request service trace (CSV) path
    pub trace_csv: Option<PathBuf>,
}

impl Config {
    /// Build the configuration from CLI arguments, loading `--config` if given
    pub fn from_cli(cli: &cli::Cli) -> Result<Self> {
        let file = match cli.config {
            Some(ref path) => toml::parse_toml_file(path)?,
            None => toml::FileConfig::default(),
        };
        toml::merge_cli_with_config(cli, file)
    }
}
