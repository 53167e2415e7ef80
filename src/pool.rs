use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

use crate::config::validate_threads;
use crate::error::Result;

/// Dedicated pool with exactly `threads` workers, so one run's thread count
/// never leaks into the next.
pub fn build(threads: usize, name: &'static str) -> Result<ThreadPool> {
    validate_threads(threads)?;
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(move |i| format!("{name}-{i}"))
        .build()?;
    debug!(threads, name, "worker pool ready");
    Ok(pool)
}
