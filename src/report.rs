//! Wall-clock timing and the one-line summaries printed per run.

use std::fmt;
use std::time::{Duration, Instant};

use crate::config::SearchConfig;

/// Runs `f` and returns its value with the elapsed wall-clock time.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// First line printed by each program.
pub fn header(len: usize) -> String {
    format!("--- Evaluación de Paralelismo (N={len}) ---")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SumReport {
    pub threads: usize,
    pub elapsed: Duration,
    pub sum: i64,
}

impl fmt::Display for SumReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hilos: {}, Tiempo: {:.6} s, Suma: {}",
            self.threads,
            self.elapsed.as_secs_f64(),
            self.sum
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchReport {
    pub config: SearchConfig,
    pub elapsed: Duration,
    pub position: Option<usize>,
}

impl SearchReport {
    /// Match index, or -1 when the pattern was not found.
    pub fn position_or_sentinel(&self) -> i64 {
        self.position.map_or(-1, |p| p as i64)
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hilos: {}, Schedule: {} ({}), Tiempo: {:.6} s, Posición: {}",
            self.config.threads(),
            self.config.schedule(),
            self.config.chunk(),
            self.elapsed.as_secs_f64(),
            self.position_or_sentinel()
        )
    }
}
