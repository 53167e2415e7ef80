//! Reduction kernel: exact sum of an integer buffer.

use rayon::prelude::*;
use tracing::debug;

use crate::data;
use crate::error::Result;
use crate::pool;
use crate::report::{timed, SumReport};

/// Sums `data` on the pool's workers. Each worker folds its own ranges into a
/// private `i64`; partials are combined once at the end.
pub fn parallel_sum(pool: &rayon::ThreadPool, data: &[i32]) -> i64 {
    pool.install(|| data.par_iter().map(|&x| i64::from(x)).sum())
}

/// Builds an all-ones buffer of `len`, sums it with `threads` workers and
/// times only the parallel region.
pub fn run_sum(len: usize, threads: usize) -> Result<SumReport> {
    let data = data::ones(len)?;
    let pool = pool::build(threads, "sum")?;

    let (sum, elapsed) = timed(|| parallel_sum(&pool, &data));
    debug!(threads, sum, ?elapsed, "sum finished");

    Ok(SumReport {
        threads,
        elapsed,
        sum,
    })
}
