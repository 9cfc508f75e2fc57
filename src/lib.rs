//! A persistent priority queue built on a leftist heap.
//!
//! [`Heap`] never changes once built: [`insert`](Heap::insert) and
//! [`pop_top`](Heap::pop_top) return new heaps and keep the old one valid, sharing all
//! the untouched structure between them. Both run in `O(log n)`, as does
//! [`merge`](Heap::merge) of two heaps. By default the smallest element (by [`Ord`]) is on
//! top. It's `no_std`, but requires `alloc`.
//!
//! # Quick start
//!
//! ```
//! use leftist_heap::Heap;
//!
//! let heap = Heap::from([10, 9, 8]);
//! assert_eq!(heap.top(), &8);
//!
//! let (top, rest) = heap.pop_top();
//! assert_eq!(top, 8);
//! assert!(rest.iter().eq([9, 10]));
//!
//! // Nothing happened to `heap`
//! assert!(heap.iter().eq([8, 9, 10]));
//! ```
//!
//! # Custom priority
//!
//! A priority function `f(a, b)` returns `true` when `a` should come out no later than
//! `b`:
//!
//! ```
//! use leftist_heap::Heap;
//!
//! let heap = Heap::with_priority(|a: &i32, b: &i32| a >= b)
//!     .insert(8)
//!     .insert(10)
//!     .insert(9);
//! assert_eq!(heap.top(), &10);
//! ```
//!
//! Implement a custom [`comparator`](crate::comparators::Comparator) for more control, or
//! use the ones in [`comparators`].
//!
//! # Empty heaps
//!
//! [`try_top`](Heap::try_top) and [`try_pop_top`](Heap::try_pop_top) return
//! [`EmptyHeapError`] on an empty heap, while [`top`](Heap::top) and
//! [`pop_top`](Heap::pop_top) panic.
//!
//! ```
//! use leftist_heap::{EmptyHeapError, Heap};
//!
//! let heap = Heap::<u8>::new();
//! assert_eq!(heap.try_top(), Err(EmptyHeapError));
//! ```
//!
//! # Building and draining
//!
//! A heap can be collected from any iterator, in any order, and iterated in priority
//! order without consuming it:
//!
//! ```
//! use leftist_heap::Heap;
//!
//! let heap: Heap<_> = [3, 1, 2].into_iter().collect();
//! assert_eq!(heap.iter().len(), 3);
//! assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3]);
//! ```
//!
//! # Threads
//!
//! Heaps are shared through atomic reference counts, so one heap can be read and
//! extended from several threads at once.
//!
//! # Crate Features
//! - `log`: Emits [`log`](https://docs.rs/log) records from the builder, from heap melds
//!   and from extracts on empty heaps.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

/// Forwards to `log::trace!` when the `log` feature is enabled
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::trace!($($arg)*);
    };
}

/// Forwards to `log::debug!` when the `log` feature is enabled
macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::debug!($($arg)*);
    };
}

mod builder;
pub mod comparators;
mod error;
mod heap;
pub mod iter;
mod node;

pub use builder::Builder;
pub use error::EmptyHeapError;
pub use heap::Heap;
pub use iter::Iter;


#[doc(hidden)]
#[allow(dead_code)]
#[doc = include_str!("../README.md")]
struct _ReadmeTest;
