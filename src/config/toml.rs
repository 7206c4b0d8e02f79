//! TOML configuration file parsing
//!
//! A configuration file describes the drive and the output; run parameters
//! stay on the command line:
//!
//! ```toml
//! [drive]
//! requests = 1000
//! platters = 4
//! cylinders = 25
//! sectors_per_track = 20
//!
//! [simulation]
//! seed = 42
//!
//! [output]
//! json_output = "report.json"
//! pretty = true
//! ```

use super::*;
use crate::config::cli::Cli;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Contents of a configuration file; every section is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub drive: GeometryConfig,
    #[serde(default)]
    pub simulation: SimulationSection,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[simulation]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationSection {
    pub seed: Option<u64>,
}

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<FileConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<FileConfig> {
    let config: FileConfig = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with file configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, file: FileConfig) -> Result<Config> {
    let mut drive = file.drive;
    if let Some(requests) = cli.requests {
        drive.requests = requests;
    }
    if let Some(platters) = cli.platters {
        drive.platters = platters;
    }
    if let Some(cylinders) = cli.cylinders {
        drive.cylinders = cylinders;
    }
    if let Some(sectors) = cli.sectors {
        drive.sectors_per_track = sectors;
    }

    let mode = if cli.compare {
        RunMode::Compare
    } else {
        let selector = cli
            .algorithm
            .context("ALGO is required unless --compare is given")?;
        RunMode::Single(Algorithm::try_from(selector)?)
    };

    let mut output = file.output;
    if cli.json_output.is_some() {
        output.json_output = cli.json_output.clone();
    }
    if cli.trace_csv.is_some() {
        output.trace_csv = cli.trace_csv.clone();
    }
    if cli.pretty {
        output.pretty = true;
    }

    Ok(Config {
        drive,
        run: RunConfig {
            rpm: cli.rpm,
            sector_size: cli.sector_size,
            average_seek_ms: cli.seek_time,
            mode,
            seed: cli.seed.or(file.simulation.seed),
        },
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_parse_empty_toml() {
        let config = parse_toml_string("").unwrap();
        assert_eq!(config.drive, GeometryConfig::default());
        assert!(config.simulation.seed.is_none());
        assert!(config.output.json_output.is_none());
    }

    #[test]
    fn test_parse_partial_drive() {
        let toml = r#"
[drive]
cylinders = 200
"#;

        let config = parse_toml_string(toml).unwrap();
        assert_eq!(config.drive.cylinders, 200);
        assert_eq!(config.drive.requests, 1000);
        assert_eq!(config.drive.sectors_per_track, 20);
    }

    #[test]
    fn test_parse_full_toml() {
        let toml = r#"
[drive]
requests = 500
platters = 8
cylinders = 100
sectors_per_track = 63

[simulation]
seed = 42

[output]
json_output = "report.json"
pretty = true
"#;

        let config = parse_toml_string(toml).unwrap();
        assert_eq!(config.drive.requests, 500);
        assert_eq!(config.drive.platters, 8);
        assert_eq!(config.simulation.seed, Some(42));
        assert_eq!(config.output.json_output, Some(PathBuf::from("report.json")));
        assert!(config.output.pretty);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let toml = r#"
[drive]
heads = 4
"#;
        assert!(parse_toml_string(toml).is_err());
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = parse_toml_string(
            r#"
[drive]
cylinders = 100
requests = 10

[simulation]
seed = 1
"#,
        )
        .unwrap();
        let cli = Cli::try_parse_from([
            "disksim", "7200", "512", "8", "4", "--cylinders", "50", "--seed", "9",
        ])
        .unwrap();

        let config = merge_cli_with_config(&cli, file).unwrap();
        assert_eq!(config.drive.cylinders, 50);
        assert_eq!(config.drive.requests, 10);
        assert_eq!(config.run.seed, Some(9));
        assert_eq!(config.run.mode, RunMode::Single(Algorithm::Scan));
    }

    #[test]
    fn test_seed_from_file() {
        let file = parse_toml_string("[simulation]\nseed = 77\n").unwrap();
        let cli = Cli::try_parse_from(["disksim", "7200", "512", "8", "--compare"]).unwrap();

        let config = merge_cli_with_config(&cli, file).unwrap();
        assert_eq!(config.run.seed, Some(77));
        assert_eq!(config.run.mode, RunMode::Compare);
    }

    #[test]
    fn test_parse_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[drive]\nplatters = 2").unwrap();

        let config = parse_toml_file(file.path()).unwrap();
        assert_eq!(config.drive.platters, 2);
    }
}
