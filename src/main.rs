//! disksim CLI entry point

use anyhow::{Context, Result};
use disksim::config::{cli::Cli, validator, Config};
use disksim::output::{csv, json, text};
use disksim::Simulation;
use env_logger::{Builder, Env};
use std::time::Instant;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.debug);
    cli.validate()?;

    let config = Config::from_cli(&cli).context("Failed to build configuration")?;

    validator::validate_config(&config)
        .context("Configuration validation failed")?;

    if cli.dry_run {
        text::print_configuration(&config, config.run.seed);
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    let sim = Simulation::new(config).context("Failed to set up simulation")?;
    text::print_configuration(sim.config(), Some(sim.seed()));

    let start = Instant::now();
    let result = sim.run()?;
    log::debug!("Simulation took {:.3}s", start.elapsed().as_secs_f64());

    text::print_results(&result);

    let output = &sim.config().output;

    if let Some(ref path) = output.json_output {
        let document = json::build_run_output(&sim, &result);
        json::write_json_output(path, &document, output.pretty)?;
        log::info!("JSON report written to {}", path.display());
    }

    if let Some(ref path) = output.trace_csv {
        // Validation guarantees a single policy here
        if let Some(run) = result.runs.first() {
            csv::write_trace(path, &result.workload, &run.outcome.trace)?;
            log::info!("Service trace written to {}", path.display());
        }
    }

    Ok(())
}

/// Initialize the logger; `RUST_LOG` overrides the default level
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
