// Repeated adjacent compare and swap, stops after the first pass without a swap.
pub mod rust_bubble_sort;

// Grows a sorted prefix by shifting larger elements right and dropping the key into the gap.
pub mod rust_insertion_sort;

// Call the standard library slice::sort, used as reference and baseline.
pub mod rust_std;
