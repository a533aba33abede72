//! Static work partitioning
//!
//! Splits the work-item list into contiguous chunks, one per worker, with
//! chunk size ceil(L / W). The chunk list preserves original item order;
//! the last chunk may be shorter. An empty work list yields zero chunks.

use crate::domain::WorkItem;

/// Partition `items` into at most `workers` contiguous chunks.
///
/// `workers` must be at least 1.
pub fn chunk_work_items(items: Vec<WorkItem>, workers: usize) -> Vec<Vec<WorkItem>> {
    debug_assert!(workers >= 1, "worker count must be at least 1");
    if items.is_empty() {
        return Vec::new();
    }

    let workers = workers.max(1);
    let chunk_size = items.len().div_ceil(workers);

    items
        .chunks(chunk_size)
        .map(|chunk| chunk.to_vec())
        .collect()
}
