//! Splits an ordered file list into bounded-size batches.

/// Partitions `items` into contiguous groups of at most `max` elements.
///
/// All groups except possibly the last contain exactly `max` elements; the
/// final group holds the remainder and is never padded or merged into its
/// predecessor. Concatenating the groups in order reproduces `items`
/// exactly. An empty input yields no groups.
///
/// # Panics
///
/// Panics if `max` is zero.
pub fn partition<T: Clone>(items: &[T], max: usize) -> Vec<Vec<T>> {
    assert!(max >= 1, "batch size must be at least 1");
    items.chunks(max).map(<[T]>::to_vec).collect()
}
