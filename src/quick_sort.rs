//! Recursive quicksort over logical positions with insertion sort below a fixed
//! threshold.

use crate::{
	INSERTION_SORT_THRESHOLD, insertion_sort::insertion_sort,
	partition::sequential_partition, pivot::PivotSelector,
};

/// Sorts `[start, start + n)`; no-op for `n <= 1` without invoking a callback.
pub(crate) fn sequential_sort<C, S>(start: usize, n: usize, compare: &C, swap: &S)
where
	C: Fn(usize, usize) -> bool,
	S: Fn(usize, usize),
{
	if n <= 1 {
		return;
	}
	let pivots = PivotSelector::from_build_config();
	quick_sort(start, n, compare, swap, &pivots);
}

/// Recursive quicksort; requires `n > 0`.
fn quick_sort<C, S>(start: usize, n: usize, compare: &C, swap: &S, pivots: &PivotSelector)
where
	C: Fn(usize, usize) -> bool,
	S: Fn(usize, usize),
{
	debug_assert!(n > 0);

	if n <= INSERTION_SORT_THRESHOLD {
		insertion_sort(start, n, compare, swap);
		return;
	}

	// Choose a pivot and park it in the last slot for the partition scan.
	let pivot = pivots.select(start, n, compare);
	swap(pivot, start + n - 1);
	let pivot = start + n - 1;

	let less_than = sequential_partition(start, n, pivot, compare, swap);
	debug_assert!(less_than <= n);

	// Only a comparator violating irreflexivity can count the pivot's own slot;
	// the clamp keeps the boundary swap in range and the recursion shrinking.
	let less_than = less_than.min(n - 1);

	// Pivot to its final slot at the partition boundary.
	swap(start + less_than, pivot);

	let greater_than = equal_run_tail(start, n, less_than, compare);

	if less_than > 1 {
		quick_sort(start, less_than, compare, swap, pivots);
	}
	if greater_than > 1 {
		quick_sort(start + n - greater_than, greater_than, compare, swap, pivots);
	}
}

/// Length of the suffix still to sort once the run of pivot-equal elements
/// following the pivot's final slot at `start + less_than` is skipped.
///
/// The run is contiguous and adjacent to the boundary for a strict weak
/// ordering, which bounds the recursion on inputs with many duplicate keys.
/// `saturating_sub` keeps a misbehaving comparator from driving the scan out of
/// range.
pub(crate) fn equal_run_tail<C>(start: usize, n: usize, less_than: usize, compare: &C) -> usize
where
	C: Fn(usize, usize) -> bool,
{
	let pivot = start + less_than;
	let mut greater_than = (n - less_than).saturating_sub(1);
	while greater_than > 0
		&& !compare(pivot, start + n - greater_than)
		&& !compare(start + n - greater_than, pivot)
	{
		greater_than -= 1;
	}
	greater_than
}

#[cfg(test)]
mod test {
	use super::{equal_run_tail, sequential_sort};
	use crate::INSERTION_SORT_THRESHOLD;
	use core::cell::{Cell, RefCell};
	use quickcheck_macros::quickcheck;

	fn sort_vec(xs: Vec<u32>) -> Vec<u32> {
		let n = xs.len();
		let data = RefCell::new(xs);
		sequential_sort(
			0,
			n,
			&|i, j| data.borrow()[i] < data.borrow()[j],
			&|i, j| data.borrow_mut().swap(i, j),
		);
		data.into_inner()
	}

	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut expected = xs.clone();
		expected.sort_unstable();
		assert_eq!(sort_vec(xs), expected);
	}

	#[quickcheck]
	fn sorted_subrange(prefix: Vec<u32>, xs: Vec<u32>, suffix: Vec<u32>) {
		let start = prefix.len();
		let n = xs.len();
		let mut expected = xs.clone();
		expected.sort_unstable();
		let data = RefCell::new(
			prefix
				.iter()
				.chain(&xs)
				.chain(&suffix)
				.copied()
				.collect::<Vec<_>>(),
		);
		sequential_sort(
			start,
			n,
			&|i, j| data.borrow()[i] < data.borrow()[j],
			&|i, j| data.borrow_mut().swap(i, j),
		);
		let data = data.into_inner();
		assert_eq!(data[..start], prefix);
		assert_eq!(data[start..start + n], expected);
		assert_eq!(data[start + n..], suffix);
	}

	#[test]
	fn threshold_boundary() {
		for n in [INSERTION_SORT_THRESHOLD, INSERTION_SORT_THRESHOLD + 1] {
			let xs = (0..n as u32).rev().collect::<Vec<_>>();
			let expected = (0..n as u32).collect::<Vec<_>>();
			assert_eq!(sort_vec(xs), expected);
		}
	}

	#[test]
	fn no_callbacks_for_trivial_ranges() {
		for n in [0, 1] {
			let calls = Cell::new(0usize);
			sequential_sort(
				0,
				n,
				&|_, _| {
					calls.set(calls.get() + 1);
					false
				},
				&|_, _| calls.set(calls.get() + 1),
			);
			assert_eq!(calls.get(), 0);
		}
	}

	#[test]
	fn duplicate_keys_stay_subquadratic() {
		// All-equal input: the backward scan past the pivot-equal run must keep
		// the comparison count linear instead of quadratic.
		let n = 1024;
		let comparisons = Cell::new(0usize);
		let data = RefCell::new(vec![7u32; n]);
		sequential_sort(
			0,
			n,
			&|i, j| {
				comparisons.set(comparisons.get() + 1);
				data.borrow()[i] < data.borrow()[j]
			},
			&|i, j| data.borrow_mut().swap(i, j),
		);
		assert!(data.into_inner().iter().all(|&x| x == 7));
		assert!(comparisons.get() < 16 * n, "{} comparisons", comparisons.get());
	}

	#[test]
	fn equal_run_tail_skips_adjacent_ties() {
		// Partitioned layout `[1, 2, 3, 3, 3, 9, 8]` with the pivot 3 at its
		// boundary slot 2: both trailing ties are skipped.
		let data = [1, 2, 3, 3, 3, 9, 8];
		let tail = equal_run_tail(0, data.len(), 2, &|i, j| data[i] < data[j]);
		assert_eq!(tail, 2);
	}

	#[test]
	fn equal_run_tail_without_ties() {
		let data = [1, 2, 3, 9, 8];
		let tail = equal_run_tail(0, data.len(), 2, &|i, j| data[i] < data[j]);
		assert_eq!(tail, 2);
	}

	#[quickcheck]
	fn broken_comparator_still_permutes(xs: Vec<u32>) {
		// Not a strict weak ordering; the order is unspecified but the result
		// must remain a permutation reached through in-range callbacks only.
		let n = xs.len();
		let data = RefCell::new(xs.clone());
		sequential_sort(
			0,
			n,
			&|i, j| {
				assert!(i < n && j < n);
				(i + j) % 3 == 0
			},
			&|i, j| {
				assert!(i < n && j < n);
				data.borrow_mut().swap(i, j)
			},
		);
		let mut permuted = data.into_inner();
		permuted.sort_unstable();
		let mut original = xs;
		original.sort_unstable();
		assert_eq!(permuted, original);
	}
}
