//! Recoverable errors.

use thiserror::Error;

/// Rejection of a target order that is not a permutation of the array's positions.
///
/// Returned before the array is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrderError {
	/// The order does not have one entry per element.
	#[error("order has {found} entries, expected {expected}")]
	LengthMismatch {
		/// Length of the array.
		expected: usize,
		/// Length of the order.
		found: usize,
	},
	/// An entry does not name a position of the array.
	#[error("order entry {index} is {position}, out of range for length {len}")]
	OutOfRange {
		/// Index of the entry in the order.
		index: usize,
		/// The offending position.
		position: usize,
		/// Length of the array.
		len: usize,
	},
	/// A position is named twice.
	#[error("order entry {index} repeats position {position}")]
	Duplicate {
		/// Index of the second entry naming `position`.
		index: usize,
		/// The repeated position.
		position: usize,
	},
}
