//! Run configurations for both benchmarks.
//!
//! There are no config files and no command-line flags. The fixed benchmark
//! constants live in [`BenchSettings::default`]; the only override is the
//! `BENCH_LEN` environment variable, which shortens the buffer for local runs.

use std::env;
use std::fmt;

use crate::error::{BenchError, Result};

/// Elements per workload buffer (100 million).
pub const DEFAULT_LEN: usize = 100_000_000;

/// Symbols the search buffer is filled with.
pub const DEFAULT_ALPHABET: [u8; 4] = *b"ACGT";

/// Pattern looked up in the search buffer. `N` is outside the alphabet, so the
/// planted copy is the only occurrence.
pub const DEFAULT_PATTERN: &[u8] = b"NNNN";

pub const DEFAULT_SEED: u64 = 42;

/// Environment variable overriding [`DEFAULT_LEN`].
pub const LEN_ENV: &str = "BENCH_LEN";

/// How chunks of the index range are handed to workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Chunks assigned round-robin once, before any work starts.
    Static,
    /// Idle workers pull the next chunk from a shared cursor.
    Dynamic,
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schedule::Static => write!(f, "static"),
            Schedule::Dynamic => write!(f, "dynamic"),
        }
    }
}

/// One (threads, schedule, chunk) tuple for the search kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    threads: usize,
    schedule: Schedule,
    chunk: usize,
}

impl SearchConfig {
    pub fn new(threads: usize, schedule: Schedule, chunk: usize) -> Result<Self> {
        validate_threads(threads)?;
        if chunk == 0 {
            return Err(BenchError::invalid("chunk", "must be at least 1"));
        }
        Ok(Self {
            threads,
            schedule,
            chunk,
        })
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn schedule(&self) -> Schedule {
        self.schedule
    }

    pub fn chunk(&self) -> usize {
        self.chunk
    }
}

pub(crate) fn validate_threads(threads: usize) -> Result<()> {
    if threads == 0 {
        return Err(BenchError::invalid("threads", "must be at least 1"));
    }
    Ok(())
}

/// Buffer shape shared by both programs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchSettings {
    pub len: usize,
    pub seed: u64,
    pub alphabet: [u8; 4],
    pub pattern: Vec<u8>,
}

impl Default for BenchSettings {
    fn default() -> Self {
        Self {
            len: DEFAULT_LEN,
            seed: DEFAULT_SEED,
            alphabet: DEFAULT_ALPHABET,
            pattern: DEFAULT_PATTERN.to_vec(),
        }
    }
}

impl BenchSettings {
    /// Defaults, with `BENCH_LEN` applied when it is set. Only the length is
    /// checked here; the search path calls [`BenchSettings::validate`].
    pub fn from_env() -> Result<Self> {
        Self::with_len_override(env::var(LEN_ENV).ok().as_deref())
    }

    fn with_len_override(raw: Option<&str>) -> Result<Self> {
        let mut settings = Self::default();
        if let Some(raw) = raw {
            settings.len = parse_len(raw)?;
        }
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.pattern.is_empty() {
            return Err(BenchError::invalid("pattern", "must not be empty"));
        }
        if self.pattern.len() > self.len {
            return Err(BenchError::invalid(
                "pattern",
                format!(
                    "length {} exceeds buffer length {}",
                    self.pattern.len(),
                    self.len
                ),
            ));
        }
        Ok(())
    }
}

fn parse_len(raw: &str) -> Result<usize> {
    let len: usize = raw
        .trim()
        .replace('_', "")
        .parse()
        .map_err(|err| BenchError::invalid("BENCH_LEN", format!("{raw:?}: {err}")))?;
    if len == 0 {
        return Err(BenchError::invalid("BENCH_LEN", "must be at least 1"));
    }
    Ok(len)
}

/// Thread counts for the sum program: sequential, then two workers.
pub fn sum_runs() -> [usize; 2] {
    [1, 2]
}

/// Sequential baseline, coarse static split, fine dynamic split.
pub fn search_runs(len: usize) -> Result<[SearchConfig; 3]> {
    Ok([
        SearchConfig::new(1, Schedule::Static, len.max(1))?,
        SearchConfig::new(2, Schedule::Static, len.div_ceil(2).max(1))?,
        SearchConfig::new(2, Schedule::Dynamic, 1)?,
    ])
}
