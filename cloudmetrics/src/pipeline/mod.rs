//! Types for shaping records into write requests

use std::num::NonZeroUsize;

/// Split records into batches of `max_size`, keeping their order.
///
/// Every batch is full except possibly the last. No records, no batches.
pub fn partition<T>(records: Vec<T>, max_size: NonZeroUsize) -> Vec<Vec<T>> {
    let max_size = max_size.get();
    let mut batches = Vec::with_capacity(records.len().div_ceil(max_size));
    let mut records = records.into_iter().peekable();
    while records.peek().is_some() {
        batches.push(records.by_ref().take(max_size).collect());
    }
    batches
}
