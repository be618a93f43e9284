//! Schoolbook Multiplication
//!
//! Classic O(m·n) digit-pair accumulation into an m+n result buffer.

use crate::digits::{strip_leading_zeros, Natural};
use crate::RADIX;

/// Multiplication operations over [`Natural`] values
pub struct NaturalMul;

impl NaturalMul {
    /// Multiply two values, returning a fresh normalized result
    ///
    /// For operands of m and n digits the working buffer has m+n slots,
    /// enough for any product. Each digit pair accumulates into position
    /// `i + j + 1` with its carry folded into `i + j` immediately, so
    /// carries compound correctly across the nested iteration.
    pub fn mul(a: &Natural, b: &Natural) -> Natural {
        let lhs = a.digits();
        let rhs = b.digits();
        let m = lhs.len();
        let n = rhs.len();

        // u32 slots: cells hold accumulated carries above 9 mid-run
        let mut result = vec![0u32; m + n];
        for i in (0..m).rev() {
            for j in (0..n).rev() {
                let product = lhs[i] as u32 * rhs[j] as u32;
                let sum = product + result[i + j + 1];
                result[i + j + 1] = sum % RADIX as u32;
                result[i + j] += sum / RADIX as u32;
            }
        }

        let digits: Vec<u8> = result.iter().map(|&d| d as u8).collect();
        Natural::from_digits(&strip_leading_zeros(&digits))
    }

    /// Multiply a value by a native integer
    pub fn mul_u64(a: &Natural, b: u64) -> Natural {
        Self::mul(a, &Natural::from_u64(b))
    }
}

impl std::ops::Mul for Natural {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        NaturalMul::mul(&self, &rhs)
    }
}

impl std::ops::Mul<&Natural> for &Natural {
    type Output = Natural;

    fn mul(self, rhs: &Natural) -> Natural {
        NaturalMul::mul(self, rhs)
    }
}

impl std::ops::MulAssign for Natural {
    fn mul_assign(&mut self, rhs: Self) {
        *self = NaturalMul::mul(self, &rhs);
    }
}
