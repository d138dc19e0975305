//! Zero-copy windows into a 1-dimensional backing array.

use ndarray::{ArrayView1, ArrayViewMut1, s};

/// Mutable window `[offset, offset + len)` into a backing array or (sub)view with arbitrary
/// memory layout.
///
/// All indices passed to a view are relative to the window. The window's position in the backing
/// array is kept as [`absolute_offset`](View::absolute_offset), so positions can be reported in a
/// single coordinate space no matter how deeply views are nested.
///
/// Out-of-range indices are programming errors and panic, like indexing a slice does.
#[derive(Debug)]
pub struct View<'a, T> {
	data: ArrayViewMut1<'a, T>,
	offset: usize,
}

impl<'a, T> View<'a, T> {
	/// Creates a view over the whole of `data`, at absolute offset zero.
	pub fn new(data: ArrayViewMut1<'a, T>) -> Self {
		Self { data, offset: 0 }
	}

	/// Length of the window.
	#[must_use]
	#[inline]
	pub fn len(&self) -> usize {
		self.data.len()
	}
	/// Whether the window is empty.
	#[must_use]
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}
	/// Position of the window's first element in the backing array.
	#[must_use]
	#[inline]
	pub fn absolute_offset(&self) -> usize {
		self.offset
	}

	/// Returns the sub-view `[from, to)` of this view.
	///
	/// # Panics
	///
	/// Panics if `from > to` or `to > self.len()`.
	pub fn sub(&mut self, from: usize, to: usize) -> View<'_, T> {
		self.check_range(from, to);
		View {
			data: self.data.slice_mut(s![from..to]),
			offset: self.offset + from,
		}
	}
	/// Returns a read-only window over `[from, to)` of this view.
	///
	/// # Panics
	///
	/// Panics if `from > to` or `to > self.len()`.
	pub fn window(&self, from: usize, to: usize) -> ArrayView1<'_, T> {
		self.check_range(from, to);
		self.data.slice(s![from..to])
	}

	/// Returns a reference to the element at `index`.
	///
	/// # Panics
	///
	/// Panics if `index >= self.len()`.
	#[inline]
	pub fn get(&self, index: usize) -> &T {
		self.check_index(index);
		&self.data[index]
	}
	/// Returns a mutable reference to the element at `index`.
	///
	/// # Panics
	///
	/// Panics if `index >= self.len()`.
	#[inline]
	pub fn get_mut(&mut self, index: usize) -> &mut T {
		self.check_index(index);
		&mut self.data[index]
	}
	/// Overwrites the element at `index` with `value`, dropping the previous one.
	///
	/// # Panics
	///
	/// Panics if `index >= self.len()`.
	#[inline]
	pub fn set(&mut self, index: usize, value: T) {
		*self.get_mut(index) = value;
	}

	/// Swaps the elements at `a` and `b`.
	///
	/// # Panics
	///
	/// Panics if `a` or `b` is out of range.
	#[inline]
	pub fn swap(&mut self, a: usize, b: usize) {
		self.check_index(a);
		self.check_index(b);
		self.data.swap(a, b);
	}

	/// Removes the element at `from` and reinserts it at `to`, shifting the elements in between by
	/// one position towards `from`.
	///
	/// Does nothing if `from == to`. Contiguous windows are rotated in place, non-contiguous ones
	/// by adjacent swaps. Nothing is allocated either way.
	///
	/// # Panics
	///
	/// Panics if `from` or `to` is out of range.
	pub fn move_to(&mut self, from: usize, to: usize) {
		self.check_index(from);
		self.check_index(to);
		if from < to {
			rotate_left(self.data.slice_mut(s![from..to + 1]));
		} else if to < from {
			rotate_right(self.data.slice_mut(s![to..from + 1]));
		}
	}

	#[inline]
	fn check_index(&self, index: usize) {
		let len = self.len();
		assert!(
			index < len,
			"index {index} out of range for view of length {len}"
		);
	}
	#[inline]
	fn check_range(&self, from: usize, to: usize) {
		let len = self.len();
		assert!(from <= to, "view start {from} exceeds view end {to}");
		assert!(
			to <= len,
			"view end {to} out of range for view of length {len}"
		);
	}
}

/// Moves the first element of `v` to its end.
fn rotate_left<T>(mut v: ArrayViewMut1<'_, T>) {
	if let Some(slice) = v.as_slice_mut() {
		slice.rotate_left(1);
		return;
	}
	for i in 1..v.len() {
		v.swap(i - 1, i);
	}
}

/// Moves the last element of `v` to its front.
fn rotate_right<T>(mut v: ArrayViewMut1<'_, T>) {
	if let Some(slice) = v.as_slice_mut() {
		slice.rotate_right(1);
		return;
	}
	for i in (1..v.len()).rev() {
		v.swap(i - 1, i);
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::View;
	use ndarray::{Array1, arr1, arr2};
	use quickcheck_macros::quickcheck;

	#[test]
	fn moves_forward_and_backward() {
		let mut array = arr1(&[0, 1, 2, 3, 4, 5]);
		let mut view = View::new(array.view_mut());
		view.move_to(1, 4);
		assert_eq!(view.window(0, 6), arr1(&[0, 2, 3, 4, 1, 5]));
		view.move_to(4, 0);
		assert_eq!(view.window(0, 6), arr1(&[1, 0, 2, 3, 4, 5]));
		view.move_to(3, 3);
		assert_eq!(array, arr1(&[1, 0, 2, 3, 4, 5]));
	}

	#[test]
	fn sub_views_translate_indices() {
		let mut array = arr1(&[10, 11, 12, 13, 14, 15, 16]);
		let mut view = View::new(array.view_mut());
		let mut outer = view.sub(2, 7);
		assert_eq!(outer.absolute_offset(), 2);
		let mut inner = outer.sub(1, 4);
		assert_eq!(inner.absolute_offset(), 3);
		assert_eq!(inner.len(), 3);
		assert_eq!(*inner.get(0), 13);
		inner.swap(0, 2);
		inner.set(1, 99);
		assert_eq!(array, arr1(&[10, 11, 12, 15, 99, 13, 16]));
	}

	#[test]
	fn empty_sub_view_at_end() {
		let mut array = arr1(&[1, 2, 3]);
		let mut view = View::new(array.view_mut());
		let sub = view.sub(3, 3);
		assert!(sub.is_empty());
		assert_eq!(sub.absolute_offset(), 3);
	}

	#[test]
	fn moves_within_non_contiguous_column() {
		let mut matrix = arr2(&[[0, 5], [1, 6], [2, 7], [3, 8]]);
		let mut view = View::new(matrix.column_mut(1));
		view.move_to(0, 3);
		view.move_to(2, 1);
		assert_eq!(matrix, arr2(&[[0, 6], [1, 8], [2, 7], [3, 5]]));
	}

	#[test]
	#[should_panic(expected = "view end 4 out of range for view of length 3")]
	fn sub_past_end_panics() {
		let mut array = arr1(&[1, 2, 3]);
		let mut view = View::new(array.view_mut());
		view.sub(1, 4);
	}

	#[test]
	#[should_panic(expected = "view start 2 exceeds view end 1")]
	fn reversed_sub_panics() {
		let mut array = arr1(&[1, 2, 3]);
		let mut view = View::new(array.view_mut());
		view.sub(2, 1);
	}

	#[test]
	#[should_panic(expected = "index 3 out of range for view of length 3")]
	fn move_out_of_range_panics() {
		let mut array = arr1(&[1, 2, 3]);
		let mut view = View::new(array.view_mut());
		view.move_to(0, 3);
	}

	#[quickcheck]
	fn move_matches_remove_insert(xs: Vec<u8>, from: usize, to: usize) {
		if xs.is_empty() {
			return;
		}
		let (from, to) = (from % xs.len(), to % xs.len());
		let mut expected = xs.clone();
		let x = expected.remove(from);
		expected.insert(to, x);
		let mut array = Array1::from_vec(xs);
		View::new(array.view_mut()).move_to(from, to);
		assert_eq!(array.to_vec(), expected);
	}
}
