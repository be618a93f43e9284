//! Error Taxonomy
//!
//! Every failure in this crate is reported synchronously as a `Result` at the
//! violating call; there is no recovery machinery beyond the caller matching
//! on the variant.

/// Errors during construction or arithmetic on [`Natural`](crate::Natural) values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NaturalError {
    /// A negative native integer was supplied to construction
    NegativeInput(i64),
    /// An empty string was supplied to construction
    EmptyInput,
    /// A non-digit character was found in a string input
    InvalidDigit(char),
    /// Subtraction where the minuend is smaller than the subtrahend
    Underflow,
    /// Division by the zero value
    DivisionByZero,
}

impl std::fmt::Display for NaturalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NaturalError::NegativeInput(n) => {
                write!(f, "Cannot construct a natural number from negative value {}", n)
            }
            NaturalError::EmptyInput => write!(f, "Cannot construct a natural number from an empty string"),
            NaturalError::InvalidDigit(c) => {
                write!(f, "Invalid character in digit string: {:?}", c)
            }
            NaturalError::Underflow => {
                write!(f, "Subtraction underflow: minuend is smaller than subtrahend")
            }
            NaturalError::DivisionByZero => write!(f, "Division by zero"),
        }
    }
}

impl std::error::Error for NaturalError {}
