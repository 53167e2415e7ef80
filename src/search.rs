//! Pattern-search kernel: lowest start index of a fixed pattern.
//!
//! The candidate range is cut into chunks of `chunk` indices. With
//! [`Schedule::Static`] worker `w` of `T` owns chunks `w, w + T, w + 2T, ...`;
//! with [`Schedule::Dynamic`] workers claim the next unclaimed chunk from a
//! shared cursor whenever they finish one.
//!
//! Workers publish matches through [`BestMatch`]. Writes are serialized by a
//! mutex and only ever lower the recorded index. Reads on the hot path go to a
//! relaxed atomic copy of the best index and are only used to skip candidates
//! that can no longer win.

use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crossbeam::utils::CachePadded;
use rayon::ThreadPool;
use tracing::debug;

use crate::config::{BenchSettings, Schedule, SearchConfig};
use crate::data;
use crate::error::Result;
use crate::pool;
use crate::report::{timed, SearchReport};

const NOT_FOUND: usize = usize::MAX;

/// Shared "lowest match so far" cell.
#[derive(Debug)]
pub struct BestMatch {
    bound: CachePadded<AtomicUsize>,
    best: Mutex<Option<usize>>,
}

impl Default for BestMatch {
    fn default() -> Self {
        Self::new()
    }
}

impl BestMatch {
    pub fn new() -> Self {
        Self {
            bound: CachePadded::new(AtomicUsize::new(NOT_FOUND)),
            best: Mutex::new(None),
        }
    }

    /// Best index seen so far, or `usize::MAX`. May lag behind `offer`.
    #[inline]
    pub fn bound(&self) -> usize {
        self.bound.load(Ordering::Relaxed)
    }

    /// Records `index` if it beats the current best. Returns whether it did.
    pub fn offer(&self, index: usize) -> bool {
        let mut best = self.lock();
        if best.map_or(true, |current| index < current) {
            *best = Some(index);
            self.bound.store(index, Ordering::Relaxed);
            true
        } else {
            false
        }
    }

    pub fn get(&self) -> Option<usize> {
        *self.lock()
    }

    pub fn into_inner(self) -> Option<usize> {
        self.best.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, Option<usize>> {
        self.best.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Chunking of the candidate start indices `0..=len - pattern_len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPlan {
    candidates: usize,
    chunk: usize,
}

impl ChunkPlan {
    pub fn new(len: usize, pattern_len: usize, chunk: usize) -> Self {
        let candidates = if pattern_len <= len {
            len - pattern_len + 1
        } else {
            0
        };
        Self {
            candidates,
            chunk: chunk.max(1),
        }
    }

    pub fn candidates(&self) -> usize {
        self.candidates
    }

    pub fn count(&self) -> usize {
        self.candidates.div_ceil(self.chunk)
    }

    pub fn range(&self, k: usize) -> Range<usize> {
        let start = k.saturating_mul(self.chunk).min(self.candidates);
        let end = start.saturating_add(self.chunk).min(self.candidates);
        start..end
    }

    /// Chunks owned by `worker` under round-robin assignment.
    pub fn owned_by(&self, worker: usize, workers: usize) -> impl Iterator<Item = Range<usize>> + '_ {
        (worker..self.count())
            .step_by(workers.max(1))
            .map(move |k| self.range(k))
    }
}

#[inline]
fn matches_at(haystack: &[u8], pattern: &[u8], start: usize) -> bool {
    haystack[start..start + pattern.len()]
        .iter()
        .zip(pattern)
        .all(|(a, b)| a == b)
}

/// Scans one chunk in ascending order. Stops at the first local match or as
/// soon as the shared best makes the rest of the chunk irrelevant. Returns the
/// index offered to `best`, if any.
fn scan_chunk(
    haystack: &[u8],
    pattern: &[u8],
    range: Range<usize>,
    best: &BestMatch,
) -> Option<usize> {
    for i in range {
        if i >= best.bound() {
            return None;
        }
        if matches_at(haystack, pattern, i) {
            best.offer(i);
            return Some(i);
        }
    }
    None
}

/// Lowest index where `pattern` starts in `haystack`, searched on every
/// worker of `pool` with the schedule and chunk size of `config`.
///
/// The pool's size, not `config.threads()`, decides how many workers scan.
pub fn parallel_search(
    pool: &ThreadPool,
    haystack: &[u8],
    pattern: &[u8],
    config: &SearchConfig,
) -> Option<usize> {
    let plan = ChunkPlan::new(haystack.len(), pattern.len(), config.chunk());
    let best = BestMatch::new();
    debug!(
        candidates = plan.candidates(),
        chunks = plan.count(),
        schedule = %config.schedule(),
        "search plan"
    );

    match config.schedule() {
        Schedule::Static => {
            pool.broadcast(|ctx| {
                for range in plan.owned_by(ctx.index(), ctx.num_threads()) {
                    scan_chunk(haystack, pattern, range, &best);
                }
            });
        }
        Schedule::Dynamic => {
            let cursor = CachePadded::new(AtomicUsize::new(0));
            let count = plan.count();
            pool.broadcast(|_| loop {
                let k = cursor.fetch_add(1, Ordering::Relaxed);
                if k >= count {
                    break;
                }
                scan_chunk(haystack, pattern, plan.range(k), &best);
            });
        }
    }

    best.into_inner()
}

/// Generates the symbol buffer for `settings`, searches it with `config` and
/// times only the parallel region.
pub fn run_search(settings: &BenchSettings, config: &SearchConfig) -> Result<SearchReport> {
    let haystack = data::symbols(settings)?;
    search_buffer(&haystack, &settings.pattern, config)
}

/// Same as [`run_search`] over a caller-provided buffer.
pub fn search_buffer(
    haystack: &[u8],
    pattern: &[u8],
    config: &SearchConfig,
) -> Result<SearchReport> {
    let pool = pool::build(config.threads(), "search")?;
    let (position, elapsed) = timed(|| parallel_search(&pool, haystack, pattern, config));
    debug!(threads = config.threads(), ?position, ?elapsed, "search finished");

    Ok(SearchReport {
        config: *config,
        elapsed,
        position,
    })
}
