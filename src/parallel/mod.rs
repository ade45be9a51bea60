//! Fixed-size worker pool and chunking helpers for the fetch and batch
//! passes.

pub mod pool;

pub use pool::WorkerPool;

/// Split `total` items into consecutive `[start, end)` chunks of at most
/// `chunk_size`; the last chunk may be smaller.
pub fn batch_chunks(total: usize, chunk_size: usize) -> Vec<(usize, usize)> {
    if total == 0 || chunk_size == 0 {
        return Vec::new();
    }
    let mut chunks = Vec::with_capacity((total + chunk_size - 1) / chunk_size);
    let mut start = 0;
    while start < total {
        let end = (start + chunk_size).min(total);
        chunks.push((start, end));
        start = end;
    }
    chunks
}
