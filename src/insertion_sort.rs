//! Insertion sort over logical positions, driven entirely by the caller's
//! comparator and swap.

/// Sorts `[start, start + n)` using insertion sort, which is *O*(*n*^2)
/// worst-case.
///
/// A minimal element is first located by a linear scan and swapped to the front,
/// so the exchange loop stops at the sentinel instead of running to the left end
/// of the range for every element.
pub(crate) fn insertion_sort<C, S>(start: usize, n: usize, compare: &C, swap: &S)
where
	C: Fn(usize, usize) -> bool,
	S: Fn(usize, usize),
{
	debug_assert!(n > 1);

	let mut min = 0;
	for i in 1..n {
		if compare(start + i, start + min) {
			min = i;
		}
	}
	swap(start, start + min);

	for i in 1..n {
		let mut j = i;
		// `j > 0` keeps a misbehaving comparator in range; under a strict weak
		// ordering the front sentinel already stops the loop at `j == 1`.
		while j > 0 && compare(start + j, start + j - 1) {
			swap(start + j - 1, start + j);
			j -= 1;
		}
	}
}
