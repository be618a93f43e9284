//! Division by Repeated Subtraction
//!
//! Computes the integer quotient `floor(a / b)` by subtracting the divisor
//! from a running remainder and counting the rounds. This is O(quotient
//! value) work, not O(digit count); correctness over speed. A zero divisor
//! is rejected up front because the remainder loop would otherwise never
//! terminate.

use crate::compare::NaturalCompare;
use crate::digits::Natural;
use crate::error::NaturalError;
use crate::sub::NaturalSub;

/// Division operations over [`Natural`] values
pub struct NaturalDiv;

impl NaturalDiv {
    /// Divide `a` by `b`, returning the integer quotient
    ///
    /// Fails with [`NaturalError::DivisionByZero`] when `b` is zero. The
    /// remainder is not exposed. The quotient must fit a u64 round counter;
    /// with repeated subtraction, counts anywhere near that bound are
    /// unreachable in practice anyway.
    pub fn div(a: &Natural, b: &Natural) -> Result<Natural, NaturalError> {
        if b.is_zero() {
            return Err(NaturalError::DivisionByZero);
        }

        let mut remainder = a.clone();
        let mut rounds = 0u64;
        // >= keeps exact multiples exact: the last round takes the
        // remainder to zero instead of stopping one short of it
        while NaturalCompare::gte(&remainder, b) {
            remainder = NaturalSub::sub(&remainder, b)?;
            rounds += 1;
        }

        Ok(Natural::from_u64(rounds))
    }

    /// Divide a value by a native integer
    pub fn div_u64(a: &Natural, b: u64) -> Result<Natural, NaturalError> {
        Self::div(a, &Natural::from_u64(b))
    }
}
