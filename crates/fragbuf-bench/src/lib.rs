//! Benchmark profiles and workloads for the fragbuf chunk pool.
//!
//! Provides pre-built [`PoolConfig`] profiles and a deterministic
//! allocate/free churn driver used by the criterion benches and the
//! `churn` example:
//!
//! - [`embedded_profile`]: 32 chunks of 128 bytes (4 KiB)
//! - [`wide_profile`]: 1024 chunks of 64 bytes (64 KiB)
//! - [`churn_sizes`]: seeded request sizes
//! - [`run_churn`]: FIFO allocate/free loop with a live-slot cap

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::VecDeque;

use fragbuf_core::GenericBufferMut;
use fragbuf_pool::{ChunkPool, PoolConfig, PoolError, PoolStats};

/// Small pool matching a typical microcontroller message buffer.
pub fn embedded_profile() -> PoolConfig {
    PoolConfig::new(128, 32)
}

/// Many small chunks, to make the linear chunk-map scans visible.
pub fn wide_profile() -> PoolConfig {
    PoolConfig::new(64, 1024)
}

/// Generate `n` deterministic request sizes in `[1, max]`.
///
/// Uses a 64-bit LCG seeded from `seed` so runs are reproducible without
/// pulling in an RNG crate.
pub fn churn_sizes(n: usize, max: usize, seed: u64) -> Vec<usize> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) as usize % max.max(1)) + 1
        })
        .collect()
}

/// Outcome of a [`run_churn`] pass.
#[derive(Clone, Debug, Default)]
pub struct ChurnReport {
    /// Requests that succeeded.
    pub allocations: usize,
    /// Requests that failed on the first attempt for lack of capacity.
    pub rejections: usize,
    /// Most slots live at any one time.
    pub peak_live: usize,
    /// Pool occupancy after the last request.
    pub final_stats: PoolStats,
}

/// Allocate every size in `sizes`, keeping at most `live_cap` slots alive.
///
/// Slots are freed oldest-first. When a request does not fit, the oldest
/// slot is freed and the request retried until it fits or nothing is
/// left to free. Each new slot is filled so the write path is exercised.
pub fn run_churn(pool: &mut ChunkPool<u8>, sizes: &[usize], live_cap: usize) -> ChurnReport {
    let mut live = VecDeque::with_capacity(live_cap.max(1));
    let mut report = ChurnReport::default();

    for (i, &size) in sizes.iter().enumerate() {
        let mut rejected = false;
        let slot = loop {
            match pool.allocate(size) {
                Ok(slot) => break Some(slot),
                Err(PoolError::CapacityExceeded { .. }) => {
                    rejected = true;
                    match live.pop_front() {
                        Some(oldest) => pool.free(oldest),
                        None => break None,
                    }
                }
                Err(_) => break None,
            }
        };
        if rejected {
            report.rejections += 1;
        }
        let Some(slot) = slot else {
            continue;
        };
        report.allocations += 1;
        pool.buffer_mut(slot).fill(i as u8);
        live.push_back(slot);
        if live.len() > live_cap {
            if let Some(oldest) = live.pop_front() {
                pool.free(oldest);
            }
        }
        report.peak_live = report.peak_live.max(live.len());
    }

    report.final_stats = pool.stats();
    report
}

/// Write `i % 255` at every index of `slot` through per-element access.
pub fn fill_indexed(pool: &mut ChunkPool<u8>, slot: fragbuf_core::SlotId) {
    let mut view = pool.buffer_mut(slot);
    for i in 0..fragbuf_core::GenericBuffer::size(&view) {
        if let Some(v) = view.at_mut(i) {
            *v = (i % 255) as u8;
        }
    }
}
