//! Human-readable text output

use crate::config::Config;
use crate::simulation::{PolicyRun, SimulationResult};

const RULE: &str = "-------------------------------------";

/// Echo the simulation parameters
pub fn print_configuration(config: &Config, seed: Option<u64>) {
    println!("{}", RULE);
    println!("Parameters for simulation :: ");
    println!("Rotational Speed: {} revolutions per minute", config.run.rpm);
    println!("Sector Size: {} bytes", config.run.sector_size);
    println!("Average seek time: {} ms", config.run.average_seek_ms);
    println!("Number of requests: {}", config.drive.requests);
    println!(
        "Drive geometry: {} platters, {} cylinders, {} sectors per track",
        config.drive.platters, config.drive.cylinders, config.drive.sectors_per_track
    );
    if let Some(seed) = seed {
        println!("Seed: {}", seed);
    }
    println!("Disk Scheduling Algorithm: {}", config.run.mode);
    println!("{}", RULE);
    println!();
}

/// Print the statistics of a single policy
pub fn print_report(run: &PolicyRun) {
    let report = &run.report;
    println!("Throughput = {:.6} requests/s", report.throughput);
    println!("Average Response Time = {:.6} s", report.mean_response_s);
    println!("Minimum Response Time = {:.6} s", report.min_response_s);
    println!("Maximum Response Time = {:.6} s", report.max_response_s);
    println!("Standard Deviation of Response Times = {:.6} s", report.stddev_response_s);
    println!(
        "Response Time Percentiles: p50 = {:.6} s, p90 = {:.6} s, p99 = {:.6} s",
        report.p50_response_s, report.p90_response_s, report.p99_response_s
    );
    println!("Total Busy Time = {:.6} s", report.elapsed_s);
}

/// Print every policy of a run, as a table when there is more than one
pub fn print_results(result: &SimulationResult) {
    match result.runs.as_slice() {
        [single] => print_report(single),
        runs => print_comparison(runs),
    }
}

/// Side-by-side table of several policies
pub fn print_comparison(runs: &[PolicyRun]) {
    println!(
        "{:<8} {:>14} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Policy", "Throughput/s", "Mean (s)", "Min (s)", "Max (s)", "StdDev (s)", "p99 (s)"
    );
    for run in runs {
        let r = &run.report;
        println!(
            "{:<8} {:>14.3} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
            run.algorithm.name(),
            r.throughput,
            r.mean_response_s,
            r.min_response_s,
            r.max_response_s,
            r.stddev_response_s,
            r.p99_response_s
        );
    }

    if let Some(best) = best_throughput(runs) {
        println!();
        println!("Highest throughput: {}", best.algorithm);
    }
}

fn best_throughput(runs: &[PolicyRun]) -> Option<&PolicyRun> {
    runs.iter()
        .max_by(|a, b| a.report.throughput.total_cmp(&b.report.throughput))
}
