//! decnum: Arbitrary-Precision Decimal Natural Numbers
//!
//! This library implements non-negative integer arithmetic over a decimal
//! digit buffer, for contexts where native fixed-width integers overflow and
//! an ecosystem bignum type is unavailable or undesired.
//!
//! ## Architecture
//!
//! A value X is represented as a sequence of base-10 digits, most significant
//! first:
//!
//! ```text
//! X = Σ d_i × 10^(n-1-i) for i = 0..n
//! ```
//!
//! where each d_i ∈ [0, 9]. The canonical zero is the single digit `[0]`.
//!
//! ## Supported Operations
//!
//! - Addition with carry propagation
//! - Subtraction with borrow (checked; underflow is an error)
//! - Multiplication (schoolbook)
//! - Division by repeated subtraction (checked; zero divisor is an error)
//! - Comparison (length first, then most-significant-digit scan)
//!
//! ## Usage
//!
//! ```
//! use decnum::Natural;
//!
//! let a: Natural = "999".parse().unwrap();
//! let b = Natural::from_integer(1).unwrap();
//! assert_eq!((a + b).to_string(), "1000");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod digits;
pub mod error;
pub mod add;
pub mod sub;
pub mod mul;
pub mod div;
pub mod compare;

pub use digits::Natural;
pub use error::NaturalError;
pub use add::NaturalAdd;
pub use sub::NaturalSub;
pub use mul::NaturalMul;
pub use div::NaturalDiv;
pub use compare::NaturalCompare;

// Algebraic property tests
#[cfg(test)]
mod property_tests;

/// Numeric base of the digit representation
pub const RADIX: u8 = 10;
