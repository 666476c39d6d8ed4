//! Evaluation errors.
//!
//! These are ordinary results, not faults: an erroring operand becomes the
//! value of every enclosing expression, and the caller prints it like any
//! other result.

use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// `/` or `%` with a zero divisor.
    #[error("Division By Zero")]
    DivisionByZero,

    /// Operator token outside the fixed operator set.
    #[error("Invalid Operator")]
    InvalidOperator,

    /// Literal that cannot be represented in the numeric type.
    #[error("Invalid Number")]
    InvalidNumber,

    /// Tree nested deeper than the configured limit.
    #[error("Maximum Depth Exceeded")]
    DepthExceeded,
}
