//! Two-cursor in-place partition around a pivot position.

/// Partitions `[start, start + n)` around the element at position `pivot`,
/// returning the number of positions holding elements strictly less than it.
///
/// On return, `[start, start + less_than)` holds exactly the elements comparing
/// less than the pivot, in no particular order, and `start + less_than` is the
/// slot where the pivot belongs once relocated there. The cursors never read or
/// write outside `[start, start + n)` even for a comparator that is not a strict
/// weak ordering; `pivot` itself may lie inside or outside the range.
pub(crate) fn sequential_partition<C, S>(
	start: usize,
	n: usize,
	pivot: usize,
	compare: &C,
	swap: &S,
) -> usize
where
	C: Fn(usize, usize) -> bool,
	S: Fn(usize, usize),
{
	debug_assert!(n > 0);

	let mut left = start;
	let mut right = start + n - 1;

	while left < right {
		while left < right && compare(left, pivot) {
			left += 1;
		}
		while left < right && !compare(right, pivot) {
			right -= 1;
		}
		if left < right {
			swap(left, right);
			left += 1;
			// Cannot underflow since `right > left >= start` held before the swap.
			right -= 1;
		}
	}
	if compare(left, pivot) {
		left += 1;
	}

	left - start
}
