//! Capacity rules for the index.

/// Smallest node capacity the tree accepts.
///
/// With fewer than 3 entries per node, a split cannot leave both halves at
/// the minimum occupancy that merge/redistribute later relies on, so the
/// structure would violate its own balance rules on the very first overflow.
/// Construction rejects anything smaller (see `Error::InvalidCapacity`).
pub const MIN_CAPACITY: usize = 3;

/// Default node capacity used by `BPlusTree::new`.
///
/// 64 entries per node keeps descents shallow (hundreds of thousands of keys
/// fit within three levels) while leaving node-local shifts cheap. Callers
/// with specific workloads can pick their own via `with_capacity`.
pub const DEFAULT_CAPACITY: usize = 64;

/// Minimum number of entries a non-root leaf must hold.
///
/// For capacity `C` this is `(C + 1) / 2` in integer arithmetic, so a split
/// of an overfull leaf (`C + 1` entries) always leaves both halves at or
/// above the minimum.
#[inline]
pub fn min_leaf_entries(capacity: usize) -> usize {
    (capacity + 1) / 2
}

/// Minimum number of children a non-root internal node must hold.
///
/// Internal nodes hold up to `C + 1` children; the minimum is
/// `⌈(C + 1) / 2⌉`, i.e. `C / 2 + 1`. The root is exempt and may hold as
/// few as 2 children.
#[inline]
pub fn min_children(capacity: usize) -> usize {
    capacity / 2 + 1
}
