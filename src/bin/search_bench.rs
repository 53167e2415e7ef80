//! Lowest-index pattern search under a sequential baseline, a coarse static
//! split and a fine dynamic split.
//!
//! Run with: cargo run --release --bin search_bench

use parallel_benchmarks::{config, logging, report, run_search, warn_if_oversubscribed, BenchSettings, Result};
use tracing::warn;

fn run() -> Result<()> {
    let settings = BenchSettings::from_env()?;
    settings.validate()?;
    let runs = config::search_runs(settings.len)?;
    warn_if_oversubscribed(runs.iter().map(|run| run.threads()).max().unwrap_or(1));

    println!("{}", report::header(settings.len));
    let mut baseline = None;
    for run in &runs {
        let report = run_search(&settings, run)?;
        println!("{report}");
        match baseline {
            None => baseline = Some(report.position),
            Some(expected) if expected != report.position => {
                warn!(
                    threads = run.threads(),
                    schedule = %run.schedule(),
                    chunk = run.chunk(),
                    position = report.position_or_sentinel(),
                    "position differs from sequential baseline"
                );
            }
            Some(_) => {}
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
