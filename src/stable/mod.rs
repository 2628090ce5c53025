// Adjacent-exchange sort with a mandatory early exit on a swap-free pass.
pub mod bubble;

// Sorted-prefix insertion sort, the strict comparison keeps it stable.
pub mod insertion;

// Top-down merge sort with a single reusable scratch buffer.
pub mod merge;

// LSD radix sort over the primitive signed integers.
pub mod radix;
