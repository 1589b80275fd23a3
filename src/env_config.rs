//! Shared environment configuration for the simulation binaries.

/// Read `MONTY_NUM_THREADS` (fallback `RAYON_NUM_THREADS`, default 8) and
/// build the rayon global pool, tolerating an already-initialized pool.
/// Returns the thread count.
pub fn init_rayon_threads_lenient() -> usize {
    let num_threads = std::env::var("MONTY_NUM_THREADS")
        .or_else(|_| std::env::var("RAYON_NUM_THREADS"))
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .ok(); // May fail if already initialized
    num_threads
}
