//! Workload buffers. Both are built before the clock starts.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::BenchSettings;
use crate::error::{BenchError, Result};

fn reserve<T>(what: &'static str, len: usize) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| BenchError::Allocation { what, len })?;
    Ok(buf)
}

/// `len` integers, all equal to 1.
pub fn ones(len: usize) -> Result<Vec<i32>> {
    let mut data = reserve("integer", len)?;
    data.resize(len, 1);
    Ok(data)
}

/// Seeded random symbols from the alphabet with one copy of the pattern
/// planted at [`plant_offset`].
pub fn symbols(settings: &BenchSettings) -> Result<Vec<u8>> {
    settings.validate()?;
    let mut data = reserve("symbol", settings.len)?;
    let mut rng = StdRng::seed_from_u64(settings.seed);
    let alphabet = settings.alphabet;
    data.extend((0..settings.len).map(|_| alphabet[rng.gen_range(0..alphabet.len())]));

    let at = plant_offset(settings.len, settings.pattern.len());
    plant(&mut data, &settings.pattern, at);
    Ok(data)
}

/// Start of the forced occurrence: the last percent of the buffer.
pub fn plant_offset(len: usize, pattern_len: usize) -> usize {
    let last_start = len.saturating_sub(pattern_len);
    last_start - last_start / 100
}

/// Overwrites `data[at..at + pattern.len()]`, clipped to the buffer.
pub fn plant(data: &mut [u8], pattern: &[u8], at: usize) {
    let end = (at + pattern.len()).min(data.len());
    if at < end {
        data[at..end].copy_from_slice(&pattern[..end - at]);
    }
}
