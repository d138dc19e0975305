//! Deterministic and random reordering before a sort.
//!
//! Both work by repeatedly moving one element to the end of the array, so a visualization sees
//! the same kind of steps as during the sort itself.

use crate::{error::OrderError, view::View};
use alloc::vec;
use ndarray::ArrayViewMut1;

/// Checks that `order` is a permutation of `0..len`.
pub fn validate(order: &[usize], len: usize) -> Result<(), OrderError> {
	if order.len() != len {
		return Err(OrderError::LengthMismatch {
			expected: len,
			found: order.len(),
		});
	}
	let mut seen = vec![false; len];
	for (index, &position) in order.iter().enumerate() {
		let slot = seen.get_mut(position).ok_or(OrderError::OutOfRange {
			index,
			position,
			len,
		})?;
		if *slot {
			return Err(OrderError::Duplicate { index, position });
		}
		*slot = true;
	}
	Ok(())
}

/// Rearranges `v` so that position `i` holds the element previously at `order[i]`.
///
/// Nothing is moved unless `order` is a permutation of `0..v.len()`.
pub fn reorder<T>(v: ArrayViewMut1<'_, T>, order: &[usize]) -> Result<(), OrderError> {
	validate(order, v.len())?;
	let mut view = View::new(v);
	let last = view.len().saturating_sub(1);
	for (i, &position) in order.iter().enumerate() {
		// Elements already taken out of the front were below `position` or not.
		let taken = order[..i].iter().filter(|&&p| p < position).count();
		view.move_to(position - taken, last);
	}
	Ok(())
}

/// Shuffles `v` by moving the element at `pick(len)` to the end, for `len` from `v.len()` down to
/// one.
///
/// `pick(len)` must return a position below `len`. A uniformly random `pick` yields a uniformly
/// random permutation.
///
/// # Panics
///
/// Panics if `pick(len)` is not below `len`.
pub fn shuffle_by<T, P>(v: ArrayViewMut1<'_, T>, mut pick: P)
where
	P: FnMut(usize) -> usize,
{
	let mut view = View::new(v);
	let last = view.len().saturating_sub(1);
	for len in (1..=view.len()).rev() {
		let position = pick(len);
		assert!(
			position < len,
			"picked position {position} out of range for length {len}"
		);
		view.move_to(position, last);
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{reorder, shuffle_by, validate};
	use crate::error::OrderError;
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;
	use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

	#[test]
	fn reorders_to_target() {
		let mut array = arr1(&['a', 'b', 'c', 'd', 'e']);
		reorder(array.view_mut(), &[3, 2, 4, 0, 1]).unwrap();
		assert_eq!(array, arr1(&['d', 'c', 'e', 'a', 'b']));
	}

	#[quickcheck]
	fn reorder_takes_from_order(len: u8, seed: u64) {
		let len = usize::from(len % 32);
		let mut order = (0..len).collect::<Vec<_>>();
		order.shuffle(&mut StdRng::seed_from_u64(seed));
		let mut array = Array1::from_iter(0..len);
		reorder(array.view_mut(), &order).unwrap();
		assert_eq!(array.to_vec(), order);
	}

	#[test]
	fn rejects_non_permutations_untouched() {
		let mut array = arr1(&[10, 20, 30]);
		assert_eq!(
			reorder(array.view_mut(), &[0, 1]),
			Err(OrderError::LengthMismatch {
				expected: 3,
				found: 2
			})
		);
		assert_eq!(
			reorder(array.view_mut(), &[2, 3, 0]),
			Err(OrderError::OutOfRange {
				index: 1,
				position: 3,
				len: 3
			})
		);
		assert_eq!(
			reorder(array.view_mut(), &[2, 0, 2]),
			Err(OrderError::Duplicate {
				index: 2,
				position: 2
			})
		);
		assert_eq!(array, arr1(&[10, 20, 30]));
	}

	#[test]
	fn error_messages() {
		let error = validate(&[0, 0], 2).unwrap_err();
		assert_eq!(error.to_string(), "order entry 1 repeats position 0");
		let error = validate(&[], 1).unwrap_err();
		assert_eq!(error.to_string(), "order has 0 entries, expected 1");
	}

	#[test]
	fn empty_order() {
		let mut array = Array1::<u8>::zeros(0);
		assert_eq!(reorder(array.view_mut(), &[]), Ok(()));
	}

	#[quickcheck]
	fn shuffle_is_permutation(xs: Vec<u16>, seed: u64) {
		let mut rng = StdRng::seed_from_u64(seed);
		let mut array = Array1::from_vec(xs.clone());
		shuffle_by(array.view_mut(), |len| rng.random_range(0..len));
		let (mut expected, mut shuffled) = (xs, array.to_vec());
		expected.sort_unstable();
		shuffled.sort_unstable();
		assert_eq!(shuffled, expected);
	}

	#[test]
	fn shuffle_picking_front_keeps_order() {
		let mut array = arr1(&[1, 2, 3, 4]);
		shuffle_by(array.view_mut(), |_| 0);
		assert_eq!(array, arr1(&[1, 2, 3, 4]));
	}

	#[test]
	#[should_panic(expected = "picked position 3 out of range for length 3")]
	fn shuffle_rejects_bad_pick() {
		let mut array = arr1(&[1, 2, 3]);
		shuffle_by(array.view_mut(), |len| len);
	}
}
