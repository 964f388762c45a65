//! Seeded pseudo-random generator shared across sort tasks.

use rand::{RngCore, SeedableRng, rngs::SmallRng};
use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

/// Uniform `u64` source for randomized pivot selection.
///
/// Seeded once per instance from wall-clock time perturbed by the identity of
/// the creating worker, so instances created concurrently diverge. A single
/// instance may be shared across tasks; each draw locks an internal mutex.
pub(crate) struct RandomSource {
	rng: Mutex<SmallRng>,
}

impl RandomSource {
	/// Creates a generator seeded from the current time and worker identity.
	pub(crate) fn new() -> Self {
		let seconds = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.map_or(0, |since| since.as_secs()) as i64;
		let worker = worker_identity() as i64;
		// Mixing constants spread seeds of generators created within the same
		// second on different workers; the modulus is prime.
		let mixed = seconds
			.wrapping_mul(181)
			.wrapping_mul((worker - 83).wrapping_mul(359));
		let seed = mixed.unsigned_abs() % 104_729;
		Self {
			rng: Mutex::new(SmallRng::seed_from_u64(seed)),
		}
	}

	/// Next uniform value over the full `u64` range.
	///
	/// Callers reduce the draw modulo their target range; the resulting modulo
	/// bias is a documented trade-off for a single draw per pivot.
	pub(crate) fn next(&self) -> u64 {
		self.rng
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.next_u64()
	}
}

#[cfg(feature = "rayon")]
fn worker_identity() -> usize {
	rayon::current_thread_index().map_or(0, |index| index + 1)
}

#[cfg(not(feature = "rayon"))]
fn worker_identity() -> usize {
	0
}
