//! Shared environment configuration for the gridmeet binaries.

/// Read `RAYON_NUM_THREADS` (fallback `OMP_NUM_THREADS`, default 8).
/// Builds the rayon global thread pool. Returns the thread count.
pub fn init_rayon_threads() -> usize {
    let num_threads = std::env::var("RAYON_NUM_THREADS")
        .or_else(|_| std::env::var("OMP_NUM_THREADS"))
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .unwrap();
    println!("Rayon threads: {}", num_threads);
    num_threads
}

/// Read `GRIDMEET_PORT` (default 9000).
pub fn server_port() -> u16 {
    std::env::var("GRIDMEET_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(9000)
}
