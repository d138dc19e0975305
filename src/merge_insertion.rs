//! Ford–Johnson merge-insertion sort.
//!
//! Every recursion level pairs its elements, sorts the larger element of each pair (the winners)
//! by recursing into them, and then inserts the smaller ones (the losers) into that sorted main
//! chain by binary search. Losers are inserted in groups whose sizes follow the Jacobsthal
//! numbers, so that each binary search runs over a range of just under a power of two elements.
//!
//! Elements are never copied out of the array. A level only knows its own window, its pairing
//! and its parent. Whenever it moves or swaps two of its elements, it forwards the operation to
//! its parent, which applies it to the partners of those elements and forwards it further up.
//! Every pair therefore stays aligned at `(j, pair_gap + j)` while the winners get sorted.

use crate::{
	compare::Counted,
	jacobsthal::Jacobsthal,
	observer::Observer,
	pairs::{Pair, PairTable},
	tracker::InsertionTracker,
	view::View,
};
use alloc::vec::Vec;
use core::cmp::Ordering::{self, Greater};
use ndarray::{ArrayView1, ArrayViewMut1};

/// Number of pairs per level reported individually through
/// [`Observer::on_pair_ordered`] before the remaining ones are reported as one bulk step.
pub const PAIRS_BEFORE_BULK: usize = 5;

// Stack to keep free before entering a level, and to allocate when less is left.
#[cfg(feature = "stacker")]
const RED_ZONE: usize = 64 * 1024;
#[cfg(feature = "stacker")]
const STACK_SIZE: usize = 1024 * 1024;

/// Work done by one sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SortStats {
	/// Comparator invocations.
	pub comparisons: usize,
	/// Swaps, including the ones forwarded to ancestor levels.
	pub swaps: usize,
	/// Moves changing the order, including the ones forwarded to ancestor levels.
	pub moves: usize,
}

/// Sorts `v` with merge-insertion sort, notifying `observer` of every step.
///
/// The comparator must define a total order. Otherwise the result is an unspecified permutation
/// of `v`.
pub fn merge_insertion_sort<T, F, O>(v: ArrayViewMut1<'_, T>, compare: F, observer: O) -> SortStats
where
	F: FnMut(&T, &T) -> Ordering,
	O: Observer<T>,
{
	let len = v.len();
	let mut engine = Engine {
		view: View::new(v),
		compare: Counted::new(compare),
		observer,
		jacobsthal: Jacobsthal::default(),
		tracker: InsertionTracker::new(),
		pair_tables: Vec::new(),
		swaps: 0,
		moves: 0,
	};
	engine.sort(&Layer::new(0, len, 0, None));
	let stats = SortStats {
		comparisons: engine.compare.count(),
		swaps: engine.swaps,
		moves: engine.moves,
	};
	#[cfg(feature = "tracing")]
	tracing::debug!(
		len,
		comparisons = stats.comparisons,
		swaps = stats.swaps,
		moves = stats.moves,
		"merge-insertion sort finished"
	);
	stats
}

/// Returns where a value belongs in the sorted `range`, after every element equal to it.
///
/// `compare` orders a probed element of `range` relative to the value, like
/// [`binary_search_by`](slice::binary_search_by) expects. Unlike a binary search, equal elements
/// do not end the search, so ties always resolve to the upper bound.
pub fn insertion_point<T, F>(range: ArrayView1<'_, T>, mut compare: F) -> usize
where
	F: FnMut(&T) -> Ordering,
{
	// INVARIANTS:
	// - 0 <= start <= end <= range.len()
	// - compare returns Less or Equal for everything in range[..start]
	// - compare returns Greater for everything in range[end..]
	let mut start = 0;
	let mut end = range.len();
	while start != end {
		let mid = start + (end - start) / 2;
		if compare(&range[mid]) == Greater {
			end = mid;
		} else {
			start = mid + 1;
		}
	}
	end
}

/// One recursion level: the window `[offset, offset + len)` of the array and its pairing.
#[derive(Debug, Clone, Copy)]
struct Layer<'p> {
	offset: usize,
	len: usize,
	pair_num: usize,
	pair_gap: usize,
	has_loner: bool,
	depth: usize,
	parent: Option<&'p Layer<'p>>,
}

impl<'p> Layer<'p> {
	fn new(offset: usize, len: usize, depth: usize, parent: Option<&'p Layer<'p>>) -> Self {
		Self {
			offset,
			len,
			pair_num: len / 2,
			pair_gap: len.div_ceil(2),
			has_loner: len % 2 == 1,
			depth,
			parent,
		}
	}
	/// The level sorting this level's winners.
	fn winners(&self) -> Layer<'_> {
		Layer::new(
			self.offset + self.pair_gap,
			self.pair_num,
			self.depth + 1,
			Some(self),
		)
	}
	fn end(&self) -> usize {
		self.offset + self.len
	}
}

struct Engine<'a, T, F, O> {
	view: View<'a, T>,
	compare: Counted<F>,
	observer: O,
	jacobsthal: Jacobsthal,
	tracker: InsertionTracker,
	// One table per level being sorted, indexed by depth.
	pair_tables: Vec<PairTable>,
	swaps: usize,
	moves: usize,
}

impl<T, F, O> Engine<'_, T, F, O>
where
	F: FnMut(&T, &T) -> Ordering,
	O: Observer<T>,
{
	fn sort(&mut self, layer: &Layer<'_>) {
		#[cfg(feature = "stacker")]
		stacker::maybe_grow(RED_ZONE, STACK_SIZE, || self.sort_layer(layer));
		#[cfg(not(feature = "stacker"))]
		self.sort_layer(layer);
	}

	fn sort_layer(&mut self, layer: &Layer<'_>) {
		if layer.len < 2 {
			return;
		}
		self.observer
			.on_layer_enter(layer.offset, layer.len, layer.depth);
		#[cfg(feature = "tracing")]
		tracing::trace!(
			offset = layer.offset,
			len = layer.len,
			depth = layer.depth,
			"sorting layer"
		);

		self.pair_tables.push(PairTable::aligned(
			layer.offset,
			layer.pair_num,
			layer.pair_gap,
		));
		self.order_pairs(layer);
		// A single winner is sorted already.
		if layer.pair_num >= 2 {
			self.sort(&layer.winners());
		}
		self.insert_losers(layer);
		self.pair_tables.pop();
	}

	/// Puts the loser of every pair at `i` and its winner at `i + pair_gap`.
	fn order_pairs(&mut self, layer: &Layer<'_>) {
		for &pair in self.pair_tables[layer.depth].iter() {
			self.observer.on_pair_formed(pair);
		}
		for i in 0..layer.pair_num {
			let pair = Pair {
				left: layer.offset + i,
				right: layer.offset + i + layer.pair_gap,
			};
			let swapped = self.compare_at(layer, i, i + layer.pair_gap) == Greater;
			if swapped {
				self.swap(layer, i, i + layer.pair_gap);
			}
			if i < PAIRS_BEFORE_BULK {
				self.observer.on_pair_ordered(pair, swapped);
			}
		}
		if layer.pair_num > PAIRS_BEFORE_BULK {
			self.observer
				.on_bulk_pairs(layer.pair_num - PAIRS_BEFORE_BULK);
		}
	}

	/// Inserts the losers and the loner into the sorted winners at `[pair_gap, len)`.
	fn insert_losers(&mut self, layer: &Layer<'_>) {
		let Layer {
			len,
			pair_gap,
			has_loner,
			..
		} = *layer;

		// The smallest loser precedes its winner, which precedes every other winner.
		self.insert(layer, 0, pair_gap - 1);
		// Pending elements occupy `[0, to_sort)`, the loner (if any) being the highest one.
		let mut to_sort = pair_gap - 1;

		self.jacobsthal.reset();
		while to_sort > 0 {
			let group_size = self
				.jacobsthal
				.next()
				.map_or(to_sort, |size| size.min(to_sort));
			let unsorted_after_group = to_sort - group_size;
			// The loner has no winner, so it is searched against the whole chain and its absence
			// does not shorten the chain either.
			let loner_in_group = has_loner && unsorted_after_group == 0;
			let winners_after_group =
				unsorted_after_group - usize::from(has_loner && !loner_in_group);
			let mut search_size =
				len - to_sort - winners_after_group - usize::from(!loner_in_group);

			self.observer.on_group_start(group_size);
			#[cfg(feature = "tracing")]
			tracing::trace!(
				depth = layer.depth,
				group_size,
				to_sort,
				search_size,
				"inserting group"
			);

			self.tracker.clear();
			for i in (0..group_size).rev() {
				let search_end = self.tracker.consume_boundary(to_sort + search_size);
				search_size = search_end - to_sort;
				let index = self.search(layer, i, to_sort, search_end);
				// Taking out `i` shifts the chain down by one.
				let target = to_sort - 1 + index;
				self.tracker.record(target);
				self.insert(layer, i, target);
				to_sort -= 1;
			}
		}
	}

	/// Moves the pending element at `from` into the chain at `to`, dissolving its pair.
	fn insert(&mut self, layer: &Layer<'_>, from: usize, to: usize) {
		if let Some(pair) = self.pair_tables[layer.depth].dissolve(layer.offset + from) {
			self.observer.on_pair_dissolved(pair);
		}
		self.move_to(layer, from, to);
	}

	/// Binary-searches the chain range `[from, to)` of `layer` for the element at `index`.
	fn search(&mut self, layer: &Layer<'_>, index: usize, from: usize, to: usize) -> usize {
		let Self {
			view,
			compare,
			observer,
			..
		} = self;
		let bars = view.sub(layer.offset, layer.end());
		let value = bars.get(index);
		insertion_point(bars.window(from, to), |probe| {
			let ordering = compare.compare(value, probe);
			observer.on_compare(value, probe, ordering);
			ordering.reverse()
		})
	}

	fn compare_at(&mut self, layer: &Layer<'_>, a: usize, b: usize) -> Ordering {
		let Self {
			view,
			compare,
			observer,
			..
		} = self;
		let bars = view.sub(layer.offset, layer.end());
		let (a, b) = (bars.get(a), bars.get(b));
		let ordering = compare.compare(a, b);
		observer.on_compare(a, b, ordering);
		ordering
	}

	/// Swaps `a` and `b` of `layer` and forwards the swap to its ancestors.
	fn swap(&mut self, layer: &Layer<'_>, a: usize, b: usize) {
		self.view.sub(layer.offset, layer.end()).swap(a, b);
		self.swaps += 1;
		let (a_at, b_at) = (layer.offset + a, layer.offset + b);
		self.observer.on_swap(a_at, b_at);
		// Every enclosing level's window contains both positions.
		for pairs in &mut self.pair_tables[..=layer.depth] {
			pairs.apply_swap(a_at, b_at);
		}
		self.observer
			.on_pairs(layer.depth, &self.pair_tables[layer.depth]);
		if let Some(parent) = layer.parent {
			self.swapped(parent, a, b);
		}
	}
	/// Follows a swap of the winners `a` and `b` of a child level by swapping their partners.
	fn swapped(&mut self, layer: &Layer<'_>, a: usize, b: usize) {
		self.swap(layer, a, b);
		if let Some(parent) = layer.parent {
			self.swapped(parent, a + layer.pair_gap, b + layer.pair_gap);
		}
	}

	/// Moves `from` to `to` of `layer` and forwards the move to its ancestors.
	fn move_to(&mut self, layer: &Layer<'_>, from: usize, to: usize) {
		if from == to {
			return;
		}
		self.view.sub(layer.offset, layer.end()).move_to(from, to);
		self.moves += 1;
		let (from_at, to_at) = (layer.offset + from, layer.offset + to);
		self.observer.on_move(from_at, to_at);
		for pairs in &mut self.pair_tables[..=layer.depth] {
			pairs.apply_move(from_at, to_at);
		}
		self.observer
			.on_pairs(layer.depth, &self.pair_tables[layer.depth]);
		if let Some(parent) = layer.parent {
			self.moved(parent, from, to);
		}
	}
	/// Follows a move of the winner `from` to `to` of a child level by moving its partner.
	fn moved(&mut self, layer: &Layer<'_>, from: usize, to: usize) {
		self.move_to(layer, from, to);
		if let Some(parent) = layer.parent {
			self.moved(parent, from + layer.pair_gap, to + layer.pair_gap);
		}
	}
}
