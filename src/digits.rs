//! Decimal Digit Buffer Representation
//!
//! Represents a non-negative integer as a sequence of base-10 digits in
//! most-significant-first order.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NaturalError;
use crate::RADIX;

/// Arbitrary-precision non-negative integer backed by a decimal digit buffer
///
/// Every digit is in `[0, 9]` and the buffer is never empty. Values produced
/// by the arithmetic operations are normalized: no leading zero unless the
/// value is zero, which is canonically the single digit `[0]`. The trusted
/// constructors ([`Natural::from_digits`] and string parsing) pass their
/// input through verbatim and do not re-normalize; callers of those paths
/// own the normalized-form invariant, which the comparator relies on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Natural {
    /// Digits in most-significant-first order, each in [0, 9]
    digits: Vec<u8>,
}

impl Default for Natural {
    fn default() -> Self {
        Self::zero()
    }
}

impl Natural {
    /// Zero
    pub fn zero() -> Self {
        Natural { digits: vec![0] }
    }

    /// One
    pub fn one() -> Self {
        Natural { digits: vec![1] }
    }

    /// Create from a native integer
    ///
    /// Fails with [`NaturalError::NegativeInput`] for negative values. Zero
    /// yields the canonical `[0]`.
    pub fn from_integer(n: i64) -> Result<Self, NaturalError> {
        if n < 0 {
            return Err(NaturalError::NegativeInput(n));
        }
        Ok(Self::from_u64(n as u64))
    }

    /// Create from an unsigned native integer
    pub fn from_u64(n: u64) -> Self {
        if n == 0 {
            return Self::zero();
        }
        let mut digits = Vec::new();
        let mut rest = n;
        while rest > 0 {
            digits.push((rest % RADIX as u64) as u8);
            rest /= RADIX as u64;
        }
        digits.reverse();
        Natural { digits }
    }

    /// Create from a string of decimal digit characters
    ///
    /// Fails with [`NaturalError::EmptyInput`] on the empty string and
    /// [`NaturalError::InvalidDigit`] on any character outside `0`..=`9`
    /// (no sign, no whitespace). Leading zeros are accepted verbatim and
    /// NOT stripped; the resulting value compares correctly only after the
    /// caller normalizes it, or once it has passed through an arithmetic
    /// operation.
    pub fn from_digit_str(s: &str) -> Result<Self, NaturalError> {
        s.parse()
    }

    /// Create from a raw digit sequence
    ///
    /// The slice is copied and trusted as-is: no range check, no
    /// normalization. This is the internal path the arithmetic operations
    /// use to build results whose digits are correct by construction.
    pub fn from_digits(digits: &[u8]) -> Self {
        Natural {
            digits: digits.to_vec(),
        }
    }

    /// Read-only view of the digit buffer, most significant digit first
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of stored digits
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// Check if one
    pub fn is_one(&self) -> bool {
        self.digits == [1]
    }
}

impl From<u64> for Natural {
    fn from(n: u64) -> Self {
        Natural::from_u64(n)
    }
}

impl FromStr for Natural {
    type Err = NaturalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(NaturalError::EmptyInput);
        }
        let mut digits = Vec::with_capacity(s.len());
        for c in s.chars() {
            match c.to_digit(RADIX as u32) {
                Some(d) => digits.push(d as u8),
                None => return Err(NaturalError::InvalidDigit(c)),
            }
        }
        Ok(Natural { digits })
    }
}

impl std::fmt::Display for Natural {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for digit in &self.digits {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

/// Left-pad a digit buffer with zeros to `length`
///
/// Returns a fresh buffer; inputs already at or beyond `length` are copied
/// unchanged.
pub(crate) fn pad_to(digits: &[u8], length: usize) -> Vec<u8> {
    if digits.len() >= length {
        return digits.to_vec();
    }
    let mut padded = vec![0u8; length];
    padded[length - digits.len()..].copy_from_slice(digits);
    padded
}

/// Strip leading zeros down to the first non-zero digit
///
/// An all-zero buffer collapses to the canonical `[0]`, never to an empty
/// sequence.
pub(crate) fn strip_leading_zeros(digits: &[u8]) -> Vec<u8> {
    match digits.iter().position(|&d| d != 0) {
        Some(first) => digits[first..].to_vec(),
        None => vec![0],
    }
}
