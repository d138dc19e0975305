//! Notifications for a rendering layer or a test harness.

use crate::{
	pairs::{Pair, PairTable},
	view::View,
};
use alloc::vec::Vec;
use core::cmp::Ordering;
use ndarray::ArrayViewMut1;

/// Receiver of every physically meaningful step of a sort.
///
/// Positions are absolute positions in the sorted array, including for moves and swaps that a
/// recursion level forwards to its ancestors. Notifications are fire-and-forget: they cannot fail
/// and the sort never depends on them. Every method defaults to doing nothing.
pub trait Observer<T> {
	/// The elements at `a` and `b` were swapped.
	fn on_swap(&mut self, a: usize, b: usize) {
		let _ = (a, b);
	}
	/// The element at `from` was moved to `to`, shifting the elements in between.
	fn on_move(&mut self, from: usize, to: usize) {
		let _ = (from, to);
	}
	/// `a` was compared with `b`.
	fn on_compare(&mut self, a: &T, b: &T, ordering: Ordering) {
		let _ = (a, b, ordering);
	}
	/// A recursion level over `len` elements starting at `offset` began.
	fn on_layer_enter(&mut self, offset: usize, len: usize, depth: usize) {
		let _ = (offset, len, depth);
	}
	/// Two elements were paired.
	fn on_pair_formed(&mut self, pair: Pair) {
		let _ = pair;
	}
	/// A pair was compared individually and put in order, `swapped` if it was not.
	fn on_pair_ordered(&mut self, pair: Pair, swapped: bool) {
		let _ = (pair, swapped);
	}
	/// The remaining `count` pairs of a level were put in order as one step.
	fn on_bulk_pairs(&mut self, count: usize) {
		let _ = count;
	}
	/// A group of `group_size` pending elements is about to be inserted.
	fn on_group_start(&mut self, group_size: usize) {
		let _ = group_size;
	}
	/// The loser of `pair` is about to be inserted into the main chain.
	fn on_pair_dissolved(&mut self, pair: Pair) {
		let _ = pair;
	}
	/// A move or swap of the level at `depth` was applied, possibly forwarded from a deeper level.
	///
	/// `pairs` holds the level's live pairs at their current positions. It answers
	/// [`pair_of`](PairTable::pair_of) queries for as long as the level runs.
	fn on_pairs(&mut self, depth: usize, pairs: &PairTable) {
		let _ = (depth, pairs);
	}
}

impl<T> Observer<T> for () {}

impl<T, O> Observer<T> for &mut O
where
	O: Observer<T> + ?Sized,
{
	fn on_swap(&mut self, a: usize, b: usize) {
		(**self).on_swap(a, b);
	}
	fn on_move(&mut self, from: usize, to: usize) {
		(**self).on_move(from, to);
	}
	fn on_compare(&mut self, a: &T, b: &T, ordering: Ordering) {
		(**self).on_compare(a, b, ordering);
	}
	fn on_layer_enter(&mut self, offset: usize, len: usize, depth: usize) {
		(**self).on_layer_enter(offset, len, depth);
	}
	fn on_pair_formed(&mut self, pair: Pair) {
		(**self).on_pair_formed(pair);
	}
	fn on_pair_ordered(&mut self, pair: Pair, swapped: bool) {
		(**self).on_pair_ordered(pair, swapped);
	}
	fn on_bulk_pairs(&mut self, count: usize) {
		(**self).on_bulk_pairs(count);
	}
	fn on_group_start(&mut self, group_size: usize) {
		(**self).on_group_start(group_size);
	}
	fn on_pair_dissolved(&mut self, pair: Pair) {
		(**self).on_pair_dissolved(pair);
	}
	fn on_pairs(&mut self, depth: usize, pairs: &PairTable) {
		(**self).on_pairs(depth, pairs);
	}
}

/// A recorded notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
	/// See [`Observer::on_swap`].
	Swap(usize, usize),
	/// See [`Observer::on_move`].
	Move(usize, usize),
	/// See [`Observer::on_compare`].
	Compare(Ordering),
	/// See [`Observer::on_layer_enter`].
	LayerEnter {
		/// First position of the level.
		offset: usize,
		/// Number of elements of the level.
		len: usize,
		/// Recursion depth, zero for the whole array.
		depth: usize,
	},
	/// See [`Observer::on_pair_formed`].
	PairFormed(Pair),
	/// See [`Observer::on_pair_ordered`].
	PairOrdered(Pair, bool),
	/// See [`Observer::on_bulk_pairs`].
	BulkPairs(usize),
	/// See [`Observer::on_group_start`].
	GroupStart(usize),
	/// See [`Observer::on_pair_dissolved`].
	PairDissolved(Pair),
}

/// Observer recording every notification in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
	events: Vec<Event>,
}

impl EventLog {
	/// Creates an empty log.
	#[must_use]
	pub const fn new() -> Self {
		Self { events: Vec::new() }
	}
	/// Recorded events in order.
	#[must_use]
	pub fn events(&self) -> &[Event] {
		&self.events
	}
	/// Consumes the log, returning its events.
	#[must_use]
	pub fn into_events(self) -> Vec<Event> {
		self.events
	}
	/// Reapplies the recorded moves and swaps to `data`.
	///
	/// Replaying a sort's log on a copy of its input reproduces its output.
	///
	/// # Panics
	///
	/// Panics if a recorded position is out of range for `data`.
	pub fn replay<T>(&self, data: ArrayViewMut1<'_, T>) {
		let mut view = View::new(data);
		for event in &self.events {
			match *event {
				Event::Swap(a, b) => view.swap(a, b),
				Event::Move(from, to) => view.move_to(from, to),
				_ => {}
			}
		}
	}
}

impl<T> Observer<T> for EventLog {
	fn on_swap(&mut self, a: usize, b: usize) {
		self.events.push(Event::Swap(a, b));
	}
	fn on_move(&mut self, from: usize, to: usize) {
		self.events.push(Event::Move(from, to));
	}
	fn on_compare(&mut self, _a: &T, _b: &T, ordering: Ordering) {
		self.events.push(Event::Compare(ordering));
	}
	fn on_layer_enter(&mut self, offset: usize, len: usize, depth: usize) {
		self.events.push(Event::LayerEnter { offset, len, depth });
	}
	fn on_pair_formed(&mut self, pair: Pair) {
		self.events.push(Event::PairFormed(pair));
	}
	fn on_pair_ordered(&mut self, pair: Pair, swapped: bool) {
		self.events.push(Event::PairOrdered(pair, swapped));
	}
	fn on_bulk_pairs(&mut self, count: usize) {
		self.events.push(Event::BulkPairs(count));
	}
	fn on_group_start(&mut self, group_size: usize) {
		self.events.push(Event::GroupStart(group_size));
	}
	fn on_pair_dissolved(&mut self, pair: Pair) {
		self.events.push(Event::PairDissolved(pair));
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{Event, EventLog, Observer};
	use core::cmp::Ordering::Less;
	use ndarray::arr1;

	#[test]
	fn records_through_mutable_reference() {
		let mut log = EventLog::new();
		{
			let mut observer = &mut log;
			Observer::<u8>::on_move(&mut observer, 3, 1);
			Observer::<u8>::on_compare(&mut observer, &1, &2, Less);
			Observer::<u8>::on_group_start(&mut observer, 2);
		}
		assert_eq!(
			log.events(),
			[Event::Move(3, 1), Event::Compare(Less), Event::GroupStart(2)]
		);
	}

	#[test]
	fn replays_moves_and_swaps() {
		let mut log = EventLog::new();
		Observer::<char>::on_swap(&mut log, 0, 2);
		Observer::<char>::on_bulk_pairs(&mut log, 1);
		Observer::<char>::on_move(&mut log, 0, 3);
		let mut array = arr1(&['a', 'b', 'c', 'd']);
		log.replay(array.view_mut());
		assert_eq!(array, arr1(&['b', 'a', 'd', 'c']));
	}
}
