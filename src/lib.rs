//! Generic, comparison-based sorting engine driven entirely by two caller-supplied
//! operations over logical positions: a comparator and a swap. The engine never
//! touches element storage itself, so any indexable collection — or several
//! collections kept in lockstep — can be sorted through the callbacks alone.
//!
//! [`sequential_sort`] is a recursive quicksort falling back to insertion sort for
//! small ranges. [`parallel_sort`] builds on the `rayon` fork-join runtime:
//! ranges are partitioned cooperatively by a worker budget derived proportionally
//! from each sub-range's share of the remaining elements, sub-ranges are sorted as
//! independent migratable tasks, and any sub-range whose budget drops below two
//! workers is handed to the sequential engine. [`sort`] picks the parallel engine
//! whenever it is compiled in and at least two workers are available.
//!
//! # Example
//!
//! ```
//! use core::cell::RefCell;
//!
//! let data = RefCell::new(vec![-5, 4, 1, -3, 2]);
//!
//! indirect_sort::sequential_sort(
//! 	5,
//! 	|i, j| data.borrow()[i] < data.borrow()[j],
//! 	|i, j| data.borrow_mut().swap(i, j),
//! );
//!
//! assert_eq!(data.into_inner(), vec![-5, -3, 1, 2, 4]);
//! ```
//!
//! # Contracts
//!
//! The comparator `(i, j) -> bool` must define a strict weak ordering over the
//! positions `0..n`, returning whether the element at `i` strictly precedes the
//! element at `j`. If the ordering is not a strict weak ordering, the result is an
//! unspecified permutation of the input: the engine still only ever invokes the
//! callbacks with positions inside `0..n`, but the final order is meaningless.
//!
//! The swap `(i, j)` must exchange the contents of the two positions, touch no
//! position outside `{i, j}` and be its own inverse. It may be invoked with
//! `i == j`.
//!
//! This sort is unstable: elements comparing equal may be reordered.
//!
//! # Configuration
//!
//! All tuning is fixed per build, not a runtime surface:
//!
//!   * [`INSERTION_SORT_THRESHOLD`] — range length at or below which insertion
//!     sort takes over.
//!   * [`PARALLEL_PARTITION_BLOCK_LEN`] — block granularity of the cooperative
//!     partition.
//!   * `random-pivot` feature — uniformly random pivot indices instead of the
//!     default median-of-three.
//!   * `rayon` feature (default) — the parallel engine; without it every entry
//!     point degrades to the sequential engine.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod insertion_sort;
mod partition;
mod pivot;
mod quick_sort;
mod random;

#[cfg(feature = "rayon")]
mod par;

/// Ranges at or below this length are sorted by insertion sort instead of
/// recursing further. Must be greater than 1.
pub const INSERTION_SORT_THRESHOLD: usize = 16;

/// Block length the parallel partition chunks a range into. Each worker
/// partitions whole blocks locally before the cross-worker compaction rounds.
pub const PARALLEL_PARTITION_BLOCK_LEN: usize = 1024;

const _: () = assert!(INSERTION_SORT_THRESHOLD > 1);
const _: () = assert!(PARALLEL_PARTITION_BLOCK_LEN > 0);

/// Sorts the `n` logical positions `0..n` through `compare` and `swap`.
///
/// Uses the parallel engine when the `rayon` feature is enabled and at least two
/// workers are available, the sequential engine otherwise. Since the engine
/// choice is transparent, the callbacks must be thread-safe either way.
///
/// See the [crate-level documentation](crate) for the callback contracts.
pub fn sort<C, S>(n: usize, compare: C, swap: S)
where
	C: Fn(usize, usize) -> bool + Sync,
	S: Fn(usize, usize) + Sync,
{
	#[cfg(feature = "rayon")]
	par::quick_sort::parallel_sort(n, &compare, &swap);
	#[cfg(not(feature = "rayon"))]
	quick_sort::sequential_sort(0, n, &compare, &swap);
}

/// Sorts the `n` logical positions `0..n` through `compare` and `swap` on the
/// calling thread only.
///
/// No-op for `n <= 1` without invoking either callback.
///
/// See the [crate-level documentation](crate) for the callback contracts.
pub fn sequential_sort<C, S>(n: usize, compare: C, swap: S)
where
	C: Fn(usize, usize) -> bool,
	S: Fn(usize, usize),
{
	quick_sort::sequential_sort(0, n, &compare, &swap);
}

/// Sorts the `n` logical positions `0..n` through `compare` and `swap`,
/// cooperatively across the current `rayon` thread pool.
///
/// Blocks until every spawned sub-range task has completed. Degrades silently to
/// [`sequential_sort`] when fewer than two workers are available.
///
/// See the [crate-level documentation](crate) for the callback contracts.
#[cfg(feature = "rayon")]
pub fn parallel_sort<C, S>(n: usize, compare: C, swap: S)
where
	C: Fn(usize, usize) -> bool + Sync,
	S: Fn(usize, usize) + Sync,
{
	par::quick_sort::parallel_sort(n, &compare, &swap);
}

/// Sorts the `n` logical positions `0..n` through `compare` and `swap`.
///
/// Without the `rayon` feature there is no fork-join runtime to consume, so this
/// behaves identically to [`sequential_sort`].
#[cfg(not(feature = "rayon"))]
pub fn parallel_sort<C, S>(n: usize, compare: C, swap: S)
where
	C: Fn(usize, usize) -> bool + Sync,
	S: Fn(usize, usize) + Sync,
{
	quick_sort::sequential_sort(0, n, &compare, &swap);
}
