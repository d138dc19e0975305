//! Comparator instrumentation.

use core::cmp::Ordering;

/// Comparator decorator counting its invocations.
///
/// The count is owned by the wrapper, only [`compare`](Counted::compare) increments it and callers
/// read it through [`count`](Counted::count). This is the quantity that Ford–Johnson sort
/// minimizes.
///
/// ```
/// use merge_insertion::Counted;
///
/// let mut compare = Counted::new(|a: &i32, b: &i32| a.cmp(b));
/// assert!(compare.compare(&1, &2).is_lt());
/// assert!(compare.compare(&2, &2).is_eq());
/// assert_eq!(compare.count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Counted<F> {
	compare: F,
	count: usize,
}

impl<F> Counted<F> {
	/// Wraps `compare` with a zero count.
	pub const fn new(compare: F) -> Self {
		Self { compare, count: 0 }
	}
	/// Number of comparisons performed so far.
	#[must_use]
	#[inline]
	pub const fn count(&self) -> usize {
		self.count
	}
	/// Returns the wrapped comparator, discarding the count.
	pub fn into_inner(self) -> F {
		self.compare
	}
	/// Compares `a` with `b`, counting the invocation and forwarding the result unchanged.
	#[inline]
	pub fn compare<T>(&mut self, a: &T, b: &T) -> Ordering
	where
		F: FnMut(&T, &T) -> Ordering,
	{
		self.count += 1;
		(self.compare)(a, b)
	}
}

#[cfg(test)]
mod test {
	use super::Counted;
	use core::cmp::Ordering::{Equal, Greater, Less};

	#[test]
	fn forwards_and_counts() {
		let mut compare = Counted::new(|a: &u8, b: &u8| b.cmp(a));
		assert_eq!(compare.count(), 0);
		assert_eq!(compare.compare(&1, &2), Greater);
		assert_eq!(compare.compare(&2, &1), Less);
		assert_eq!(compare.compare(&7, &7), Equal);
		assert_eq!(compare.count(), 3);
	}
}
