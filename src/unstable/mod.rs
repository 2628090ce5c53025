// Classic selection sort plus a bidirectional min/max variant.
pub mod selection;

// Lomuto quicksort, median-of-three pivot, loop on the larger partition.
pub mod quicksort;

// In-place max-heap sort with guaranteed O(n log n).
pub mod heapsort;

// Range-partitioned bucket sort for the floating point types.
pub mod bucket;
