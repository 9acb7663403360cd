//! One-dimensional broadcasting between a pair of parameter arrays.
//!
//! The rule is NumPy's restricted to 1-D: two lengths are compatible when they
//! are equal or when one of them is 1, and a length-1 operand is repeated
//! across the other. A scalar span is treated as a length-1 array. Nothing is
//! copied; a [`Broadcast`] only maps an output position to the source position
//! on each side.

use crate::windowing::errors::{WindowError, WindowResult};

/// Index mapping for two broadcast-compatible 1-D operands.
///
/// A side whose source length is 1 has stride 0, so every output position
/// reads element 0 of that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Broadcast {
    len: usize,
    left_stride: usize,
    right_stride: usize,
}

impl Broadcast {
    /// Common length of the broadcast pair.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Source position on the left operand for output position `i`.
    #[inline]
    pub fn left(&self, i: usize) -> usize {
        i * self.left_stride
    }

    /// Source position on the right operand for output position `i`.
    #[inline]
    pub fn right(&self, i: usize) -> usize {
        i * self.right_stride
    }

    /// Materialize the left operand at the broadcast length.
    pub fn expand_left<T: Copy>(&self, values: &[T]) -> Vec<T> {
        (0..self.len).map(|i| values[self.left(i)]).collect()
    }

    /// Materialize the right operand at the broadcast length.
    pub fn expand_right<T: Copy>(&self, values: &[T]) -> Vec<T> {
        (0..self.len).map(|i| values[self.right(i)]).collect()
    }
}

/// Reconcile two operand lengths.
///
/// # Errors
/// - [`WindowError::BroadcastMismatch`] when both lengths differ from 1 and
///   from each other. A length of 0 only pairs with 0 or 1.
pub fn broadcast_pair(left: usize, right: usize) -> WindowResult<Broadcast> {
    let stride = |len: usize| usize::from(len != 1);
    if left == right || left == 1 || right == 1 {
        let len = if left == 1 { right } else { left };
        Ok(Broadcast { len, left_stride: stride(left), right_stride: stride(right) })
    } else {
        Err(WindowError::BroadcastMismatch { left, right })
    }
}
