//! Ford–Johnson [merge-insertion sort] for non-contiguous (sub)views into 1-dimensional arrays,
//! built to be watched.
//!
//! Merge-insertion sort needs close to the information-theoretic minimum of comparisons. It
//! pairs up elements, recursively sorts the larger element of each pair and then inserts the
//! smaller ones by binary search, in groups sized by the [Jacobsthal numbers](Jacobsthal). This
//! crate implements it purely as index permutation on [`ndarray`] views with arbitrary memory
//! layout: elements are never copied out of the array, and every move, swap and comparison is
//! reported to an [`Observer`], so a rendering layer can animate the sort step by step.
//!
//! # Example
//!
//! ```
//! use merge_insertion::{MergeInsertionExt, ndarray::arr2};
//!
//! // 2-dimensional array of 5 rows and 2 columns.
//! let mut v = arr2(&[[0, 5],
//!                    [1, 3],
//!                    [2, 1],
//!                    [3, 4],
//!                    [4, 2]]);
//!
//! // Mutable subview into the last column, which is non-contiguous in row-major layout.
//! let mut column = v.column_mut(1);
//! assert_eq!(column.as_slice_mut(), None);
//!
//! let stats = column.merge_insertion_sort();
//! assert!(stats.comparisons <= 7);
//!
//! assert!(v == arr2(&[[0, 1],
//!                     [1, 2],
//!                     [2, 3],
//!                     [3, 4],
//!                     [4, 5]]));
//! ```
//!
//! # Current Implementation
//!
//! Complexities where *n* is the length of the (sub)view.
//!
//! | Resource    | Complexity                                          |
//! |-------------|-----------------------------------------------------|
//! | Comparisons | at most ∑<sub>*i*=1..*n*</sub> ⌈log<sub>2</sub>(3*i*/4)⌉ |
//! | Time        | *O*(*n*<sup>2</sup>) element moves                  |
//! | Space       | *O*(*n*) bookkeeping, *O*(log *n*) recursion depth  |
//!
//! Elements are moved by rotation, which is what a visualization wants to show but makes the
//! sort quadratic in element moves. It is the tool for expensive comparisons and for watching,
//! not for throughput.
//!
//! # Features
//!
//!   * `std` for `std::error::Error` on [`OrderError`]. Enabled by `default`. Without it the crate
//!     is `no_std` and needs `alloc`.
//!   * `stacker` for growing the stack on demand while recursing. Enabled by `default`.
//!   * `tracing` for `trace`/`debug` events per recursion level, insertion group and sort.
//!
//! [merge-insertion sort]: https://en.wikipedia.org/wiki/Merge-insertion_sort

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

mod compare;
mod error;
mod jacobsthal;
mod merge_insertion;
mod observer;
mod order;
mod pairs;
mod tracker;
mod view;

pub use crate::{
	compare::Counted,
	error::OrderError,
	jacobsthal::{GROUP_SIZE_SEED, Jacobsthal},
	merge_insertion::{PAIRS_BEFORE_BULK, SortStats, insertion_point, merge_insertion_sort},
	observer::{Event, EventLog, Observer},
	pairs::{Pair, PairTable},
	tracker::InsertionTracker,
	view::View,
};

use core::cmp::Ordering;
use ndarray::{ArrayBase, Data, DataMut, Ix1};

pub use ndarray;

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) providing merge-insertion sorting and the
/// reordering hooks used to set up a sort.
pub trait MergeInsertionExt<A, S>
where
	S: Data<Elem = A>,
{
	/// Sorts the array with merge-insertion sort.
	///
	/// This sort is unstable (i.e., may reorder equal elements) and uses at most
	/// ∑<sub>*i*=1..*n*</sub> ⌈log<sub>2</sub>(3*i*/4)⌉ comparisons.
	///
	/// # Examples
	///
	/// ```
	/// use merge_insertion::{MergeInsertionExt, ndarray::arr1};
	///
	/// let mut v = arr1(&[5, 3, 1, 4, 2]);
	///
	/// let stats = v.merge_insertion_sort();
	/// assert!(v == arr1(&[1, 2, 3, 4, 5]));
	/// assert!(stats.comparisons <= 7);
	/// ```
	fn merge_insertion_sort(&mut self) -> SortStats
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array with a comparator function.
	///
	/// The comparator function must define a total ordering for the elements in the array. If
	/// the ordering is not total, the order of the elements is unspecified. An order is a
	/// total order if it is (for all `a`, `b` and `c`):
	///
	/// * total and antisymmetric: exactly one of `a < b`, `a == b` or `a > b` is true, and
	/// * transitive, `a < b` and `b < c` implies `a < c`. The same must hold for both `==` and `>`.
	///
	/// # Examples
	///
	/// ```
	/// use merge_insertion::{MergeInsertionExt, ndarray::arr1};
	///
	/// let mut v = arr1(&[5, 4, 1, 3, 2]);
	/// v.merge_insertion_sort_by(|a, b| a.cmp(b));
	/// assert!(v == arr1(&[1, 2, 3, 4, 5]));
	///
	/// // reverse sorting
	/// v.merge_insertion_sort_by(|a, b| b.cmp(a));
	/// assert!(v == arr1(&[5, 4, 3, 2, 1]));
	/// ```
	fn merge_insertion_sort_by<F>(&mut self, compare: F) -> SortStats
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;
	/// Sorts the array with a key extraction function.
	///
	/// The key function is called twice per comparison.
	///
	/// # Examples
	///
	/// ```
	/// use merge_insertion::{MergeInsertionExt, ndarray::arr1};
	///
	/// let mut v = arr1(&[-5i32, 4, 1, -3, 2]);
	///
	/// v.merge_insertion_sort_by_key(|k| k.abs());
	/// assert!(v == arr1(&[1, 2, -3, 4, -5]));
	/// ```
	fn merge_insertion_sort_by_key<K, F>(&mut self, f: F) -> SortStats
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut;
	/// Sorts the array with a comparator function, notifying `observer` of every move, swap,
	/// comparison, pairing and insertion group.
	///
	/// Positions reported to the observer are positions in `self`.
	///
	/// # Examples
	///
	/// ```
	/// use merge_insertion::{Event, EventLog, MergeInsertionExt, ndarray::arr1};
	///
	/// let input = arr1(&[3, 1, 2]);
	/// let mut v = input.clone();
	/// let mut log = EventLog::new();
	/// v.merge_insertion_sort_observed(|a, b| a.cmp(b), &mut log);
	/// assert!(v == arr1(&[1, 2, 3]));
	///
	/// // Replaying the recorded moves and swaps reproduces the sort.
	/// let mut replayed = input.clone();
	/// log.replay(replayed.view_mut());
	/// assert_eq!(replayed, v);
	/// assert!(log.events().contains(&Event::GroupStart(1)));
	/// ```
	fn merge_insertion_sort_observed<F, O>(&mut self, compare: F, observer: O) -> SortStats
	where
		F: FnMut(&A, &A) -> Ordering,
		O: Observer<A>,
		S: DataMut;

	/// Returns the index at which `x` has to be inserted to keep the sorted array sorted, after
	/// every element equal to `x`.
	///
	/// # Examples
	///
	/// ```
	/// use merge_insertion::{MergeInsertionExt, ndarray::arr1};
	///
	/// let s = arr1(&[0, 0, 0, 0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4]);
	///
	/// assert_eq!(s.insertion_point(&2), 13);
	/// assert_eq!(s.insertion_point(&3), 13);
	/// assert_eq!(s.insertion_point(&9), 15);
	/// ```
	fn insertion_point(&self, x: &A) -> usize
	where
		A: Ord;
	/// Returns the index at which a value has to be inserted to keep the sorted array sorted,
	/// after every element equal to it.
	///
	/// The comparator function returns how a probed element compares to the value, like for
	/// [`slice::binary_search_by`].
	fn insertion_point_by<F>(&self, f: F) -> usize
	where
		F: FnMut(&A) -> Ordering;

	/// Rearranges the array so that position `i` holds the element previously at `order[i]`.
	///
	/// This is the deterministic alternative to [`shuffle_by`](MergeInsertionExt::shuffle_by)
	/// for reproducing a particular input.
	///
	/// # Errors
	///
	/// Returns an [`OrderError`] without touching the array if `order` is not a permutation of
	/// `0..self.len()`.
	///
	/// # Examples
	///
	/// ```
	/// use merge_insertion::{MergeInsertionExt, OrderError, ndarray::arr1};
	///
	/// let mut v = arr1(&[0, 1, 2, 3]);
	/// v.reorder(&[3, 1, 0, 2])?;
	/// assert!(v == arr1(&[3, 1, 0, 2]));
	///
	/// assert!(v.reorder(&[0, 1, 1, 2]).is_err());
	/// # Ok::<(), OrderError>(())
	/// ```
	fn reorder(&mut self, order: &[usize]) -> Result<(), OrderError>
	where
		S: DataMut;
	/// Shuffles the array by moving the element at `pick(len)` to the end, for `len` from
	/// `self.len()` down to one.
	///
	/// A uniformly random `pick` in `0..len` yields a uniformly random permutation.
	///
	/// # Panics
	///
	/// Panics if `pick(len)` is not below `len`.
	fn shuffle_by<P>(&mut self, pick: P)
	where
		P: FnMut(usize) -> usize,
		S: DataMut;
}

impl<A, S> MergeInsertionExt<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[inline]
	fn merge_insertion_sort(&mut self) -> SortStats
	where
		A: Ord,
		S: DataMut,
	{
		merge_insertion_sort(self.view_mut(), A::cmp, ())
	}
	#[inline]
	fn merge_insertion_sort_by<F>(&mut self, compare: F) -> SortStats
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		merge_insertion_sort(self.view_mut(), compare, ())
	}
	#[inline]
	fn merge_insertion_sort_by_key<K, F>(&mut self, mut f: F) -> SortStats
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut,
	{
		merge_insertion_sort(self.view_mut(), |a: &A, b: &A| f(a).cmp(&f(b)), ())
	}
	#[inline]
	fn merge_insertion_sort_observed<F, O>(&mut self, compare: F, observer: O) -> SortStats
	where
		F: FnMut(&A, &A) -> Ordering,
		O: Observer<A>,
		S: DataMut,
	{
		merge_insertion_sort(self.view_mut(), compare, observer)
	}

	#[inline]
	fn insertion_point(&self, x: &A) -> usize
	where
		A: Ord,
	{
		self.insertion_point_by(|p| p.cmp(x))
	}
	#[inline]
	fn insertion_point_by<F>(&self, f: F) -> usize
	where
		F: FnMut(&A) -> Ordering,
	{
		insertion_point(self.view(), f)
	}

	#[inline]
	fn reorder(&mut self, order: &[usize]) -> Result<(), OrderError>
	where
		S: DataMut,
	{
		crate::order::reorder(self.view_mut(), order)
	}
	#[inline]
	fn shuffle_by<P>(&mut self, pick: P)
	where
		P: FnMut(usize) -> usize,
		S: DataMut,
	{
		crate::order::shuffle_by(self.view_mut(), pick);
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::MergeInsertionExt;
	use ndarray::Array1;
	use quickcheck_macros::quickcheck;
	use rand::{Rng, SeedableRng, rngs::StdRng};

	#[quickcheck]
	fn reorder_and_shuffle_sort_alike(xs: Vec<i32>, seed: u64) {
		let mut rng = StdRng::seed_from_u64(seed);

		let mut shuffled = Array1::from_vec(xs.clone());
		shuffled.shuffle_by(|len| rng.random_range(0..len));
		shuffled.merge_insertion_sort();

		let mut order = (0..xs.len()).collect::<Vec<_>>();
		order.reverse();
		let mut reordered = Array1::from_vec(xs);
		reordered.reorder(&order).unwrap();
		reordered.merge_insertion_sort();

		assert_eq!(shuffled, reordered);
		for i in 1..reordered.len() {
			assert!(reordered[i - 1] <= reordered[i]);
		}
	}

	#[test]
	fn sorts_by_key_within_bound() {
		let mut v = Array1::from_iter((0..20i64).map(|i| (i * 7919) % 20 - 10));
		let stats = v.merge_insertion_sort_by_key(|k| k.abs());
		for i in 1..v.len() {
			assert!(v[i - 1].abs() <= v[i].abs());
		}
		assert!(stats.comparisons <= 62);
	}

	#[test]
	fn sorts_subviews_in_place() {
		let mut v = Array1::from_vec(vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
		v.slice_mut(ndarray::s![2..8]).merge_insertion_sort();
		assert_eq!(v.to_vec(), [9, 8, 2, 3, 4, 5, 6, 7, 1, 0]);
		v.slice_mut(ndarray::s![..;3]).merge_insertion_sort();
		assert_eq!(v.to_vec(), [0, 8, 2, 3, 4, 5, 6, 7, 1, 9]);
	}
}
