//! Parallel sum over an all-ones buffer with 1 and 2 worker threads.
//!
//! Run with: cargo run --release --bin sum_bench

use parallel_benchmarks::{config, logging, report, run_sum, warn_if_oversubscribed, BenchSettings, Result};
use tracing::warn;

fn run() -> Result<()> {
    let settings = BenchSettings::from_env()?;
    let runs = config::sum_runs();
    warn_if_oversubscribed(runs.iter().copied().max().unwrap_or(1));

    println!("{}", report::header(settings.len));
    let expected = settings.len as i64;
    for threads in runs {
        let report = run_sum(settings.len, threads)?;
        println!("{report}");
        if report.sum != expected {
            warn!(threads, sum = report.sum, expected, "sum differs from buffer length");
        }
    }
    Ok(())
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
