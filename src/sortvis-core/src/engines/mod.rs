//! The instrumented sort engines.
//!
//! Every engine sorts a `&mut [u32]` in place and reports each comparison or
//! move through a [`StepContext`](crate::StepContext). Inputs shorter than two
//! elements return immediately without emitting a frame.

mod bubble;
mod insertion;
mod quicksort;
mod shellsort;

pub use bubble::{bubble_sort, unoptimized_bubble_sort};
pub use insertion::insertion_sort;
pub use quicksort::quicksort;
pub use shellsort::{gap_sequence, shellsort};
