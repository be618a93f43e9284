//! Addition with Carry Propagation
//!
//! Right-to-left digit-wise addition over operands padded to a common length.

use crate::digits::{pad_to, Natural};
use crate::RADIX;

/// Addition operations over [`Natural`] values
pub struct NaturalAdd;

impl NaturalAdd {
    /// Add two values, returning a fresh normalized result
    ///
    /// Both operands are padded to `max(len(a), len(b))`; the result buffer
    /// carries one extra slot for a final carry, dropped when unused.
    pub fn add(a: &Natural, b: &Natural) -> Natural {
        let max_length = a.digit_count().max(b.digit_count());
        let lhs = pad_to(a.digits(), max_length);
        let rhs = pad_to(b.digits(), max_length);

        let mut result = vec![0u8; max_length + 1];
        let mut carry = 0u8;
        for i in (0..max_length).rev() {
            let sum = lhs[i] + rhs[i] + carry;
            result[i + 1] = sum % RADIX;
            carry = sum / RADIX;
        }
        result[0] = carry;

        if result[0] == 0 {
            Natural::from_digits(&result[1..])
        } else {
            Natural::from_digits(&result)
        }
    }

    /// Add a native integer to a value
    pub fn add_u64(a: &Natural, b: u64) -> Natural {
        Self::add(a, &Natural::from_u64(b))
    }

    /// Increment by 1
    pub fn inc(a: &Natural) -> Natural {
        Self::add_u64(a, 1)
    }
}

impl std::ops::Add for Natural {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        NaturalAdd::add(&self, &rhs)
    }
}

impl std::ops::Add<&Natural> for &Natural {
    type Output = Natural;

    fn add(self, rhs: &Natural) -> Natural {
        NaturalAdd::add(self, rhs)
    }
}

impl std::ops::AddAssign for Natural {
    fn add_assign(&mut self, rhs: Self) {
        *self = NaturalAdd::add(self, &rhs);
    }
}
