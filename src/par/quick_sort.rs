//! Fork-join quicksort orchestration: proportional worker budgets, task
//! spawning and the sequential fallback.

use crate::{
	par::partition::parallel_partition,
	pivot::PivotSelector,
	quick_sort::{equal_run_tail, sequential_sort},
};
use rayon::Scope;

/// Sorts positions `0..n` cooperatively; no-op for `n <= 1`, delegating to the
/// sequential engine when fewer than two workers are available.
pub(crate) fn parallel_sort<C, S>(n: usize, compare: &C, swap: &S)
where
	C: Fn(usize, usize) -> bool + Sync,
	S: Fn(usize, usize) + Sync,
{
	if n <= 1 {
		return;
	}

	let total_workers = rayon::current_num_threads();
	if total_workers < 2 {
		sequential_sort(0, n, compare, swap);
		return;
	}

	// One shared pivot selector for the whole recursion tree; the scope is the
	// join barrier every spawned task must pass before the sort returns.
	let pivots = PivotSelector::from_build_config();
	rayon::scope(|scope| {
		parallel_quick_sort(scope, n, total_workers, 0, n, compare, swap, &pivots);
	});
}

/// Worker budget for a sub-range of `n` out of `total_n` elements, derived
/// proportionally from `total_workers` and clamped to at least 1.
///
/// Children's budgets may sum below the parent's due to flooring; the shortfall
/// is accepted since every under-budgeted range terminates through the
/// sequential fallback.
pub(crate) fn chunk_workers(total_workers: usize, total_n: usize, n: usize) -> usize {
	(total_workers * n / total_n).max(1)
}

/// Recursive fork-join quicksort over `[start, start + n)`; requires `n > 1`.
///
/// Tasks are migratable, so no state beyond the explicit arguments survives
/// across a spawn; `total_n` and `total_workers` stay fixed for the whole tree.
#[allow(clippy::too_many_arguments)]
fn parallel_quick_sort<'scope, C, S>(
	scope: &Scope<'scope>,
	total_n: usize,
	total_workers: usize,
	start: usize,
	n: usize,
	compare: &'scope C,
	swap: &'scope S,
	pivots: &'scope PivotSelector,
) where
	C: Fn(usize, usize) -> bool + Sync,
	S: Fn(usize, usize) + Sync,
{
	debug_assert!(n > 1);

	let workers = chunk_workers(total_workers, total_n, n);
	if workers < 2 {
		// Not worth splitting further; sort the whole range as one task.
		// Spawning does not wait, only the top-level scope does.
		scope.spawn(move |_| sequential_sort(start, n, compare, swap));
		return;
	}

	// Choose a pivot and park it in the last slot for the partition scan.
	let pivot = pivots.select(start, n, compare);
	swap(pivot, start + n - 1);
	let pivot = start + n - 1;

	let less_than = parallel_partition(start, n, pivot, compare, swap, workers);
	debug_assert!(less_than <= n);

	// Only a comparator violating irreflexivity can count the pivot's own slot;
	// the clamp keeps the boundary swap in range and the recursion shrinking.
	let less_than = less_than.min(n - 1);

	// Pivot to its final slot at the partition boundary.
	swap(start + less_than, pivot);

	let greater_than = equal_run_tail(start, n, less_than, compare);

	if less_than > 1 {
		scope.spawn(move |scope| {
			parallel_quick_sort(
				scope,
				total_n,
				total_workers,
				start,
				less_than,
				compare,
				swap,
				pivots,
			);
		});
	}
	if greater_than > 1 {
		// Continue into the right sub-range within the current task; siblings
		// are disjoint and unordered.
		parallel_quick_sort(
			scope,
			total_n,
			total_workers,
			start + n - greater_than,
			greater_than,
			compare,
			swap,
			pivots,
		);
	}
}

#[cfg(test)]
mod test {
	use super::{chunk_workers, parallel_sort};
	use core::sync::atomic::{AtomicU32, AtomicUsize, Ordering::Relaxed};
	use quickcheck_macros::quickcheck;
	use rand::Rng;

	// Concurrent tasks own disjoint position ranges and rayon's fork-join edges
	// order their effects, so relaxed loads and stores suffice.
	fn sort_vec(xs: Vec<u32>) -> Vec<u32> {
		let n = xs.len();
		let data = xs.into_iter().map(AtomicU32::new).collect::<Vec<_>>();
		parallel_sort(
			n,
			&|i, j| data[i].load(Relaxed) < data[j].load(Relaxed),
			&|i, j| {
				let (a, b) = (data[i].load(Relaxed), data[j].load(Relaxed));
				data[i].store(b, Relaxed);
				data[j].store(a, Relaxed);
			},
		);
		data.into_iter().map(AtomicU32::into_inner).collect()
	}

	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut expected = xs.clone();
		expected.sort_unstable();
		assert_eq!(sort_vec(xs), expected);
	}

	#[test]
	fn sorted_large() {
		let mut rng = rand::rng();
		let xs = (0..100_000).map(|_| rng.random::<u32>()).collect::<Vec<_>>();
		let mut expected = xs.clone();
		expected.sort_unstable();
		assert_eq!(sort_vec(xs), expected);
	}

	#[test]
	fn sorted_duplicate_heavy() {
		let mut rng = rand::rng();
		let xs = (0..50_000).map(|_| rng.random_range(0..4u32)).collect::<Vec<_>>();
		let mut expected = xs.clone();
		expected.sort_unstable();
		assert_eq!(sort_vec(xs), expected);
	}

	#[test]
	fn all_equal() {
		assert_eq!(sort_vec(vec![3; 10_000]), vec![3; 10_000]);
	}

	#[test]
	fn no_callbacks_for_trivial_ranges() {
		for n in [0, 1] {
			let calls = AtomicUsize::new(0);
			parallel_sort(
				n,
				&|_, _| {
					calls.fetch_add(1, Relaxed);
					false
				},
				&|_, _| {
					calls.fetch_add(1, Relaxed);
				},
			);
			assert_eq!(calls.load(Relaxed), 0);
		}
	}

	#[test]
	fn budgets_divide_proportionally() {
		// 4 workers over 10 elements: sub-ranges of 3 and 1 both floor below 2
		// and must take the sequential fallback.
		assert_eq!(chunk_workers(4, 10, 3), 1);
		assert_eq!(chunk_workers(4, 10, 1), 1);
		assert_eq!(chunk_workers(4, 10, 10), 4);
		assert_eq!(chunk_workers(4, 10, 5), 2);
		assert_eq!(chunk_workers(8, 100, 99), 7);
	}
}
