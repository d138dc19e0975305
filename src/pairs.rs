//! Pair membership of one recursion level.

use alloc::vec::Vec;

/// Absolute positions of the two elements of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
	/// Position of the element compared first, the loser once the pair is ordered.
	pub left: usize,
	/// Position of the element compared second, the winner once the pair is ordered.
	pub right: usize,
}

impl Pair {
	/// Whether `position` is one of the pair's elements.
	#[must_use]
	#[inline]
	pub const fn contains(&self, position: usize) -> bool {
		self.left == position || self.right == position
	}
}

/// Pairs of one recursion level, following their elements through moves and swaps.
///
/// Positions are absolute positions in the backing array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairTable {
	pairs: Vec<Pair>,
}

impl PairTable {
	/// Pairs of a level at `offset`, where local `i` is paired with `i + pair_gap` for every
	/// `i < pair_num`.
	#[must_use]
	pub fn aligned(offset: usize, pair_num: usize, pair_gap: usize) -> Self {
		Self {
			pairs: (0..pair_num)
				.map(|i| Pair {
					left: offset + i,
					right: offset + i + pair_gap,
				})
				.collect(),
		}
	}

	/// Number of pairs still alive.
	#[must_use]
	pub fn len(&self) -> usize {
		self.pairs.len()
	}
	/// Whether every pair has been dissolved.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}
	/// Iterates the pairs still alive.
	pub fn iter(&self) -> impl Iterator<Item = &Pair> {
		self.pairs.iter()
	}

	/// Returns the pair that the element at `position` belongs to.
	#[must_use]
	pub fn pair_of(&self, position: usize) -> Option<Pair> {
		self.pairs.iter().copied().find(|pair| pair.contains(position))
	}

	/// Removes and returns the pair that the element at `position` belongs to.
	pub fn dissolve(&mut self, position: usize) -> Option<Pair> {
		let index = self.pairs.iter().position(|pair| pair.contains(position))?;
		Some(self.pairs.swap_remove(index))
	}

	/// Follows the element moved from `from` to `to`, and the elements shifted in between.
	pub fn apply_move(&mut self, from: usize, to: usize) {
		let shift = |position: usize| {
			if position == from {
				to
			} else if from < position && position <= to {
				position - 1
			} else if to <= position && position < from {
				position + 1
			} else {
				position
			}
		};
		for pair in &mut self.pairs {
			pair.left = shift(pair.left);
			pair.right = shift(pair.right);
		}
	}

	/// Follows the elements swapped between `a` and `b`.
	///
	/// A swap within a pair orders it instead: its positions stay, so `left` keeps naming the
	/// smaller element.
	pub fn apply_swap(&mut self, a: usize, b: usize) {
		let exchange = |position: usize| match position {
			p if p == a => b,
			p if p == b => a,
			p => p,
		};
		for pair in &mut self.pairs {
			if pair.contains(a) && pair.contains(b) {
				continue;
			}
			pair.left = exchange(pair.left);
			pair.right = exchange(pair.right);
		}
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{Pair, PairTable};

	#[test]
	fn aligned_pairs_with_loner() {
		let pairs = PairTable::aligned(4, 2, 3);
		assert_eq!(pairs.len(), 2);
		assert_eq!(pairs.pair_of(4), Some(Pair { left: 4, right: 7 }));
		assert_eq!(pairs.pair_of(8), Some(Pair { left: 5, right: 8 }));
		assert_eq!(pairs.pair_of(6), None);
	}

	#[test]
	fn follows_moves() {
		let mut pairs = PairTable::aligned(0, 2, 2);
		pairs.apply_move(0, 2);
		assert_eq!(pairs.pair_of(2), Some(Pair { left: 2, right: 1 }));
		assert_eq!(pairs.pair_of(0), Some(Pair { left: 0, right: 3 }));
		pairs.apply_move(3, 0);
		assert_eq!(pairs.pair_of(0), Some(Pair { left: 1, right: 0 }));
		assert_eq!(pairs.pair_of(3), Some(Pair { left: 3, right: 2 }));
	}

	#[test]
	fn follows_swaps() {
		let mut pairs = PairTable::aligned(0, 3, 3);
		pairs.apply_swap(1, 5);
		pairs.apply_swap(0, 4);
		assert_eq!(pairs.pair_of(1), Some(Pair { left: 2, right: 1 }));
		assert_eq!(pairs.pair_of(3), Some(Pair { left: 4, right: 3 }));
		assert_eq!(pairs.pair_of(0), Some(Pair { left: 5, right: 0 }));
	}

	#[test]
	fn swap_within_pair_keeps_positions() {
		let mut pairs = PairTable::aligned(2, 2, 2);
		pairs.apply_swap(3, 5);
		assert_eq!(pairs.pair_of(3), Some(Pair { left: 3, right: 5 }));
		assert_eq!(pairs.pair_of(2), Some(Pair { left: 2, right: 4 }));
		pairs.apply_swap(2, 3);
		assert_eq!(pairs.pair_of(2), Some(Pair { left: 2, right: 5 }));
		assert_eq!(pairs.pair_of(3), Some(Pair { left: 3, right: 4 }));
	}

	#[test]
	fn dissolves_pairs() {
		let mut pairs = PairTable::aligned(0, 2, 2);
		assert_eq!(pairs.dissolve(3), Some(Pair { left: 1, right: 3 }));
		assert_eq!(pairs.dissolve(3), None);
		assert_eq!(pairs.iter().count(), 1);
		assert_eq!(pairs.dissolve(0), Some(Pair { left: 0, right: 2 }));
		assert!(pairs.is_empty());
	}
}
