//! Allocate/free churn on the embedded profile.
//!
//! Runs a seeded stream of requests, frees oldest-first, and prints the
//! pool's occupancy along the way. Fragmentation shows up as slots whose
//! chunks are not contiguous; every request that fits by count still
//! succeeds.

use fragbuf_bench::{churn_sizes, embedded_profile, run_churn};
use fragbuf_core::SlotId;
use fragbuf_pool::ChunkPool;

fn main() {
    println!("=== fragbuf churn example ===\n");

    let config = embedded_profile();
    let mut pool: ChunkPool<u8> = match ChunkPool::new(config.clone()) {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("cannot build pool: {e}");
            std::process::exit(1);
        }
    };
    println!(
        "pool: {} chunks x {} bytes = {} bytes\n",
        config.num_chunks,
        config.chunk_size,
        pool.capacity()
    );

    for round in 0..5u64 {
        let sizes = churn_sizes(200, 700, round);
        let report = run_churn(&mut pool, &sizes, 6);
        let stats = report.final_stats;
        println!(
            "round {round}: {} allocated, {} needed eviction, peak {} live",
            report.allocations, report.rejections, report.peak_live
        );
        println!(
            "  live={} free_chunks={} largest_run={} fragmented={}",
            stats.live_slots, stats.free_chunks, stats.largest_free_run, stats.fragmented_slots
        );
    }

    println!("\nlive slots after churn:");
    for slot in (0..pool.num_chunks()).map(SlotId) {
        if !pool.is_slot_used(slot) {
            continue;
        }
        println!("  {slot}: chunks {:?}", pool.owned_chunks(slot).as_slice());
    }
}
