//! Bookkeeping for insertions within one scheduled group.

use alloc::vec::Vec;

/// Positions claimed by earlier insertions of the current group, kept ascending.
///
/// Within a group, pending elements are inserted in descending order and each one's search range
/// ends right before its own winner. When an earlier insertion of the same group landed exactly at
/// that boundary, the boundary has to move down past it, or the search would compare against an
/// element that is known to be greater. Positions are level-local and must shift exactly like the
/// elements do under [`View::move_to`](crate::View::move_to).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertionTracker {
	positions: Vec<usize>,
}

impl InsertionTracker {
	/// Creates an empty tracker.
	#[must_use]
	pub const fn new() -> Self {
		Self {
			positions: Vec::new(),
		}
	}

	/// Tracked positions in ascending order.
	#[must_use]
	pub fn positions(&self) -> &[usize] {
		&self.positions
	}

	/// Records an insertion at `position`.
	///
	/// The inserted element was taken from below every tracked position, so the tracked elements
	/// at or before `position` have slid down by one slot.
	pub fn record(&mut self, position: usize) {
		let index = self.positions.partition_point(|&tracked| tracked <= position);
		for tracked in &mut self.positions[..index] {
			*tracked -= 1;
		}
		self.positions.insert(index, position);
	}

	/// Shrinks `search_end` past claimed positions sitting right at it and returns the new end.
	///
	/// Consumed positions are forgotten, since later searches in the group end before them.
	pub fn consume_boundary(&mut self, mut search_end: usize) -> usize {
		while self.positions.last() == Some(&search_end) {
			self.positions.pop();
			search_end -= 1;
		}
		search_end
	}

	/// Forgets every position, as at the start of a new group.
	pub fn clear(&mut self) {
		self.positions.clear();
	}
}
