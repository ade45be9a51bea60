//! Rayon thread pool configuration for parallel HTTP fetching.
//!
//! Use [WorkerPool::install] to run the bulk fetchers with a bounded number
//! of concurrent requests. The default of 10 workers matches what the public
//! API tolerates together with the per-request sleep.

use rayon::ThreadPoolBuilder;

/// Configures how many worker threads run parallel fetch batches.
#[derive(Debug, Clone, Copy)]
pub struct WorkerPool {
    /// Number of worker threads. If 0, use Rayon's default (all CPU cores).
    pub workers: usize,
}

pub const DEFAULT_FETCH_WORKERS: usize = 10;

impl Default for WorkerPool {
    fn default() -> Self {
        Self { workers: DEFAULT_FETCH_WORKERS }
    }
}

impl WorkerPool {
    /// Use exactly `n` worker threads (0 means Rayon default).
    pub fn with_workers(n: usize) -> Self {
        Self { workers: n }
    }

    /// Run a closure on a pool with this worker count. With 0 workers the
    /// global Rayon pool is used; otherwise a temporary pool is built.
    pub fn install<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        if self.workers == 0 {
            f()
        } else {
            let pool = ThreadPoolBuilder::new()
                .num_threads(self.workers)
                .build()
                .expect("Rayon thread pool");
            pool.install(f)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn install_runs_closure_with_bounded_threads() {
        let pool = WorkerPool::with_workers(2);
        let sum: u32 = pool.install(|| (0..10u32).into_par_iter().sum());
        assert_eq!(sum, 45);
    }

    #[test]
    fn default_uses_fetch_worker_count() {
        assert_eq!(WorkerPool::default().workers, DEFAULT_FETCH_WORKERS);
    }
}
