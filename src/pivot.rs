//! Pivot selection strategies, fixed per build.

use crate::random::RandomSource;

/// Pivot selection strategy: median-of-three unless the `random-pivot` feature
/// selects uniformly random indices.
///
/// The sequential engine creates one selector per sort call; the parallel engine
/// creates one at the top level and threads it through the whole recursion tree,
/// so the randomized strategy draws from a single synchronized generator instead
/// of reseeding per call.
pub(crate) enum PivotSelector {
	MedianOfThree,
	UniformRandom(RandomSource),
}

impl PivotSelector {
	/// Strategy selected by the build configuration.
	pub(crate) fn from_build_config() -> Self {
		if cfg!(feature = "random-pivot") {
			Self::UniformRandom(RandomSource::new())
		} else {
			Self::MedianOfThree
		}
	}

	/// Chooses a pivot index in `[start, start + n)`; requires `n >= 1`.
	pub(crate) fn select<C>(&self, start: usize, n: usize, compare: &C) -> usize
	where
		C: Fn(usize, usize) -> bool,
	{
		match self {
			Self::MedianOfThree => median_of_three(start, n, compare),
			Self::UniformRandom(rng) => uniform_random(start, n, rng),
		}
	}
}

/// Returns whichever of `start`, `start + n / 2` and `start + n - 1` holds the
/// median element. Deterministic, *O*(1), no extra state; returns `start` for
/// `n == 1`.
pub(crate) fn median_of_three<C>(start: usize, n: usize, compare: &C) -> usize
where
	C: Fn(usize, usize) -> bool,
{
	debug_assert!(n > 0);

	let left = start;
	let middle = start + (n >> 1);
	let right = start + n - 1;

	if compare(left, right) {
		if compare(middle, left) {
			left
		} else if compare(middle, right) {
			middle
		} else {
			right
		}
	} else if compare(left, middle) {
		left
	} else if compare(right, middle) {
		middle
	} else {
		right
	}
}

/// Draws a uniform index in `[start, start + n)`; requires `n >= 1`.
pub(crate) fn uniform_random(start: usize, n: usize, rng: &RandomSource) -> usize {
	debug_assert!(n > 0);

	start + (rng.next() % n as u64) as usize
}
