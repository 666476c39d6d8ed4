use core::fmt::{Debug, Display};

use crate::{
    evaluator::{
        EvalError,
        operators::{eval_binary_float, eval_binary_int},
    },
    parser::Operator,
};

/// A numeric representation the evaluator can compute with.
pub trait Numeric: Copy + PartialOrd + Debug + Display {
    /// Parse a literal matched by the grammar's `number` rule.
    ///
    /// Returns `None` if the literal cannot be represented.
    fn parse_literal(text: &str) -> Option<Self>;

    /// Apply a binary operator.
    fn binary(op: Operator, lhs: Self, rhs: Self) -> Result<Self, EvalError>;
}

impl Numeric for f64 {
    fn parse_literal(text: &str) -> Option<Self> {
        // Out-of-range literals parse to infinity, zero or a subnormal rather
        // than failing.
        let n = text.parse::<f64>().ok()?;
        let nonzero = text.bytes().any(|b| matches!(b, b'1'..=b'9'));
        if !n.is_finite() || (nonzero && !n.is_normal()) {
            return None;
        }
        Some(n)
    }

    fn binary(op: Operator, lhs: Self, rhs: Self) -> Result<Self, EvalError> {
        eval_binary_float(op, lhs, rhs)
    }
}

impl Numeric for i64 {
    fn parse_literal(text: &str) -> Option<Self> {
        // The fractional part is truncated, like an integer conversion of the
        // decimal value; only the integral digits need to fit.
        let integral = match text.split_once('.') {
            Some((integral, fraction)) if fraction.bytes().all(|b| b.is_ascii_digit()) => integral,
            Some(_) => return None,
            None => text,
        };
        integral.parse::<i64>().ok()
    }

    fn binary(op: Operator, lhs: Self, rhs: Self) -> Result<Self, EvalError> {
        eval_binary_int(op, lhs, rhs)
    }
}
