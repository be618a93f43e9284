//! Magnitude Comparison
//!
//! Comparison over normalized digit buffers: a longer buffer is the larger
//! value, equal lengths fall back to a most-significant-first digit scan.

use std::cmp::Ordering;

use crate::digits::Natural;

/// Comparison operations over [`Natural`] values
///
/// All comparisons assume both operands are normalized (no leading zeros for
/// non-zero values). For unnormalized buffers length is not a magnitude proxy
/// and the result is meaningless.
pub struct NaturalCompare;

impl NaturalCompare {
    /// Compare two values, returning ordering
    pub fn cmp(a: &Natural, b: &Natural) -> Ordering {
        // Length decides first; digit scan only on equal lengths
        match a.digit_count().cmp(&b.digit_count()) {
            Ordering::Equal => {}
            other => return other,
        }
        for (da, db) in a.digits().iter().zip(b.digits()) {
            match da.cmp(db) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        Ordering::Equal
    }

    /// a > b (strict; equal values return false)
    pub fn gt(a: &Natural, b: &Natural) -> bool {
        Self::cmp(a, b) == Ordering::Greater
    }

    /// a >= b
    pub fn gte(a: &Natural, b: &Natural) -> bool {
        Self::cmp(a, b) != Ordering::Less
    }

    /// a < b
    pub fn lt(a: &Natural, b: &Natural) -> bool {
        Self::cmp(a, b) == Ordering::Less
    }

    /// a <= b
    pub fn le(a: &Natural, b: &Natural) -> bool {
        Self::cmp(a, b) != Ordering::Greater
    }

    /// a == b
    pub fn eq(a: &Natural, b: &Natural) -> bool {
        Self::cmp(a, b) == Ordering::Equal
    }

    /// Compute min(a, b)
    pub fn min<'a>(a: &'a Natural, b: &'a Natural) -> &'a Natural {
        if Self::le(a, b) { a } else { b }
    }

    /// Compute max(a, b)
    pub fn max<'a>(a: &'a Natural, b: &'a Natural) -> &'a Natural {
        if Self::gte(a, b) { a } else { b }
    }
}

impl PartialOrd for Natural {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(NaturalCompare::cmp(self, other))
    }
}

impl Ord for Natural {
    fn cmp(&self, other: &Self) -> Ordering {
        NaturalCompare::cmp(self, other)
    }
}
