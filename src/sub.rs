//! Subtraction with Borrow Propagation
//!
//! Right-to-left digit-wise subtraction over operands padded to a common
//! length. Underflow (minuend smaller than subtrahend) is a checked error,
//! not an unchecked caller contract: natural numbers have no value to
//! represent the difference.

use crate::compare::NaturalCompare;
use crate::digits::{pad_to, strip_leading_zeros, Natural};
use crate::error::NaturalError;
use crate::RADIX;

/// Subtraction operations over [`Natural`] values
pub struct NaturalSub;

impl NaturalSub {
    /// Subtract `b` from `a`, returning a fresh normalized result
    ///
    /// Fails with [`NaturalError::Underflow`] when `a < b`.
    pub fn sub(a: &Natural, b: &Natural) -> Result<Natural, NaturalError> {
        if NaturalCompare::lt(a, b) {
            return Err(NaturalError::Underflow);
        }

        let max_length = a.digit_count().max(b.digit_count());
        let lhs = pad_to(a.digits(), max_length);
        let rhs = pad_to(b.digits(), max_length);

        let mut result = vec![0u8; max_length];
        let mut borrow = 0i8;
        for i in (0..max_length).rev() {
            let diff = lhs[i] as i8 - borrow - rhs[i] as i8;
            if diff < 0 {
                result[i] = (diff + RADIX as i8) as u8;
                borrow = 1;
            } else {
                result[i] = diff as u8;
                borrow = 0;
            }
        }
        // a >= b guarantees the final borrow is clear

        Ok(Natural::from_digits(&strip_leading_zeros(&result)))
    }

    /// Subtract a native integer from a value
    pub fn sub_u64(a: &Natural, b: u64) -> Result<Natural, NaturalError> {
        Self::sub(a, &Natural::from_u64(b))
    }
}
