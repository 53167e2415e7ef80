//! Micro-benchmarks of thread count and scheduling policy on two
//! data-parallel kernels: an integer reduction and a lowest-index pattern
//! search with a shared, lock-guarded best match.

pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod pool;
pub mod reduce;
pub mod report;
pub mod search;

pub use config::{BenchSettings, Schedule, SearchConfig};
pub use error::{BenchError, Result};
pub use reduce::{parallel_sum, run_sum};
pub use report::{SearchReport, SumReport};
pub use search::{parallel_search, run_search, search_buffer, BestMatch, ChunkPlan};

/// Logs a warning when the machine has fewer cores than the largest run asks for.
pub fn warn_if_oversubscribed(max_threads: usize) {
    let cores = num_cpus::get();
    if cores < max_threads {
        tracing::warn!(cores, max_threads, "fewer cores than worker threads; timings will not scale");
    }
}
