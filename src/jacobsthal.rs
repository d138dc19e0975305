//! Insertion group sizes.

/// Seed for which [`Jacobsthal`] yields the Ford–Johnson insertion group sizes.
///
/// Group sizes listed as `1, 1, 3, 5, 11, …` count pairs rather than pending elements. That
/// listing is the sequence for seed 1, and seed 2 doubles every term.
pub const GROUP_SIZE_SEED: usize = 2;

/// Stateful generator of the Jacobsthal recurrence used to schedule insertions.
///
/// Every call to [`next`](Jacobsthal::next) sets `previous = power_of_two - previous`, doubles
/// `power_of_two` and returns the new `previous`. Seeded with 1 this yields the Jacobsthal numbers
/// `1, 1, 3, 5, 11, 21, 43, …`. Seeded with [`GROUP_SIZE_SEED`] (the default) it yields twice
/// those, `2, 2, 6, 10, 22, 42, 86, …`, which are the numbers of pending elements inserted per
/// group: each group's largest element then needs exactly one more comparison than the previous
/// group's.
///
/// The sequence is unbounded; callers cap it against the remaining work. Arithmetic saturates.
///
/// ```
/// use merge_insertion::Jacobsthal;
///
/// let numbers = Jacobsthal::new(1).take(7).collect::<Vec<_>>();
/// assert_eq!(numbers, [1, 1, 3, 5, 11, 21, 43]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jacobsthal {
	seed: usize,
	power_of_two: usize,
	previous: usize,
}

impl Jacobsthal {
	/// Creates a generator whose first term is `seed`.
	#[must_use]
	pub const fn new(seed: usize) -> Self {
		Self {
			seed,
			power_of_two: seed,
			previous: 0,
		}
	}
	/// Restarts the sequence from its seed.
	pub fn reset(&mut self) {
		*self = Self::new(self.seed);
	}
}

impl Default for Jacobsthal {
	fn default() -> Self {
		Self::new(GROUP_SIZE_SEED)
	}
}

impl Iterator for Jacobsthal {
	type Item = usize;

	#[inline]
	fn next(&mut self) -> Option<usize> {
		self.previous = self.power_of_two - self.previous;
		self.power_of_two = self.power_of_two.saturating_mul(2);
		Some(self.previous)
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		(usize::MAX, None)
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{GROUP_SIZE_SEED, Jacobsthal};

	#[test]
	fn jacobsthal_numbers() {
		let mut numbers = Jacobsthal::new(1);
		let terms = (0..7).filter_map(|_| numbers.next()).collect::<Vec<_>>();
		assert_eq!(terms, [1, 1, 3, 5, 11, 21, 43]);
	}

	#[test]
	fn group_sizes() {
		let terms = Jacobsthal::default().take(7).collect::<Vec<_>>();
		assert_eq!(terms, [2, 2, 6, 10, 22, 42, 86]);
	}

	#[test]
	fn satisfies_recurrence() {
		let terms = Jacobsthal::new(1).take(20).collect::<Vec<_>>();
		for k in 2..terms.len() {
			assert_eq!(terms[k], terms[k - 1] + 2 * terms[k - 2]);
		}
	}

	#[test]
	fn default_seed_doubles_seed_one() {
		let pairs = Jacobsthal::new(1).take(10);
		let elements = Jacobsthal::new(GROUP_SIZE_SEED).take(10);
		assert!(elements.eq(pairs.map(|size| 2 * size)));
	}

	#[test]
	fn reset_restarts_from_seed() {
		let mut sizes = Jacobsthal::default();
		sizes.by_ref().take(5).for_each(drop);
		sizes.reset();
		assert_eq!(sizes, Jacobsthal::default());
		assert_eq!(sizes.next(), Some(2));
	}

	#[test]
	fn saturates_instead_of_overflowing() {
		let mut sizes = Jacobsthal::default();
		for _ in 0..200 {
			assert!(sizes.next().is_some());
		}
	}
}
