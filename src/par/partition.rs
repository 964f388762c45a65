//! Block-chunked cooperative partition with the same postcondition as the
//! sequential two-cursor partition.

use crate::{PARALLEL_PARTITION_BLOCK_LEN, partition::sequential_partition};

/// Partitions `[start, start + n)` around the pivot parked at `start + n - 1`
/// using up to `thread_budget` workers, returning the number of positions
/// holding elements strictly less than the pivot.
///
/// Synchronous: returns only once every participating worker has finished its
/// share. With a budget of 1 the outcome is produced by [`sequential_partition`]
/// itself and therefore identical to it.
pub(crate) fn parallel_partition<C, S>(
	start: usize,
	n: usize,
	pivot: usize,
	compare: &C,
	swap: &S,
	thread_budget: usize,
) -> usize
where
	C: Fn(usize, usize) -> bool + Sync,
	S: Fn(usize, usize) + Sync,
{
	debug_assert!(n > 0);
	debug_assert!(thread_budget >= 1);

	if thread_budget < 2 {
		return sequential_partition(start, n, pivot, compare, swap);
	}
	debug_assert_eq!(pivot, start + n - 1);

	// The pivot's own slot is excluded from the cooperative scan.
	partition_blocks(start, n - 1, pivot, compare, swap, thread_budget)
}

/// Splits `[start, start + len)` into block-aligned halves with a proportional
/// worker share, partitions both halves concurrently and compacts them into a
/// single `[less | rest]` layout. Returns the less-than count of the whole span.
///
/// The recursion depth bounds the cross-worker compaction rounds any position
/// takes part in by `ceil(log2(workers))`.
fn partition_blocks<C, S>(
	start: usize,
	len: usize,
	pivot: usize,
	compare: &C,
	swap: &S,
	workers: usize,
) -> usize
where
	C: Fn(usize, usize) -> bool + Sync,
	S: Fn(usize, usize) + Sync,
{
	let blocks = len.div_ceil(PARALLEL_PARTITION_BLOCK_LEN);
	if workers < 2 || blocks < 2 {
		return if len == 0 {
			0
		} else {
			sequential_partition(start, len, pivot, compare, swap)
		};
	}

	let left_workers = workers / 2;
	let left_blocks = (blocks * left_workers / workers).clamp(1, blocks - 1);
	let left_len = left_blocks * PARALLEL_PARTITION_BLOCK_LEN;

	let (left_less, right_less) = rayon::join(
		|| partition_blocks(start, left_len, pivot, compare, swap, left_workers),
		|| {
			partition_blocks(
				start + left_len,
				len - left_len,
				pivot,
				compare,
				swap,
				workers - left_workers,
			)
		},
	);

	compact_halves(start, left_len, left_less, right_less, swap);
	left_less + right_less
}

/// Merges two adjacent `[less | rest]` halves into one by swapping the not-less
/// positions stranded at the end of the left half with less-than elements of the
/// right half. Costs `min(left_len - left_less, right_less)` swaps.
fn compact_halves<S>(start: usize, left_len: usize, left_less: usize, right_less: usize, swap: &S)
where
	S: Fn(usize, usize),
{
	let stranded = left_len - left_less;
	let moved = stranded.min(right_less);
	// Take the right half's leading less-than elements when they all fit before
	// the joint boundary, otherwise its trailing ones so whatever remains of the
	// right half's less-than prefix stays contiguous with the boundary.
	let from = if right_less <= stranded {
		start + left_len
	} else {
		start + left_len + right_less - stranded
	};
	for i in 0..moved {
		swap(start + left_less + i, from + i);
	}
}
