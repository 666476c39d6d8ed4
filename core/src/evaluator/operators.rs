//! Binary operator implementations.

use crate::{evaluator::EvalError, parser::Operator, values::Value, values::Numeric};

/// Apply a binary operator to two values.
///
/// An error on the left is returned unchanged without looking at the right;
/// otherwise an error on the right is returned. Only two numbers reach the
/// arithmetic.
pub fn apply<N: Numeric>(op: Operator, x: Value<N>, y: Value<N>) -> Value<N> {
    let lhs = match x {
        Value::Number(n) => n,
        err @ Value::Error(_) => return err,
    };
    let rhs = match y {
        Value::Number(n) => n,
        err @ Value::Error(_) => return err,
    };
    N::binary(op, lhs, rhs).into()
}

/// Evaluate a binary operation on two floats.
///
/// Follows IEEE 754 semantics except for a zero divisor, which is reported
/// instead of producing inf/nan.
pub(crate) fn eval_binary_float(op: Operator, left: f64, right: f64) -> Result<f64, EvalError> {
    match op {
        Operator::Add => Ok(left + right),
        Operator::Sub => Ok(left - right),
        Operator::Mul => Ok(left * right),
        Operator::Div => {
            if right == 0.0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(left / right)
            }
        }
        Operator::Mod => {
            if right == 0.0 {
                Err(EvalError::DivisionByZero)
            } else {
                // Truncated remainder: sign follows the dividend.
                Ok(left % right)
            }
        }
        Operator::Pow => Ok(left.powf(right)),
        Operator::Min => Ok(left.min(right)),
        Operator::Max => Ok(left.max(right)),
    }
}

/// Evaluate a binary operation on two integers.
///
/// Uses wrapping arithmetic to prevent panics on overflow.
/// Division by zero returns an error.
pub(crate) fn eval_binary_int(op: Operator, left: i64, right: i64) -> Result<i64, EvalError> {
    match op {
        Operator::Add => Ok(left.wrapping_add(right)),
        Operator::Sub => Ok(left.wrapping_sub(right)),
        Operator::Mul => Ok(left.wrapping_mul(right)),
        Operator::Div => {
            if right == 0 {
                Err(EvalError::DivisionByZero)
            } else {
                // Use wrapping_div to handle i64::MIN / -1 case
                Ok(left.wrapping_div(right))
            }
        }
        Operator::Mod => {
            if right == 0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(left.wrapping_rem(right))
            }
        }
        Operator::Pow => Ok(int_pow(left, right)),
        Operator::Min => Ok(left.min(right)),
        Operator::Max => Ok(left.max(right)),
    }
}

/// Integer power, truncating like a floating-point power cast back to an integer.
fn int_pow(base: i64, exp: i64) -> i64 {
    if exp < 0 {
        return match base {
            1 => 1,
            -1 if exp % 2 == 0 => 1,
            -1 => -1,
            _ => 0,
        };
    }
    match u32::try_from(exp) {
        Ok(exp) => base.wrapping_pow(exp),
        // Exponent too large; only 0 and ±1 stay finite.
        Err(_) => match base {
            0 | 1 => base,
            -1 if exp % 2 == 0 => 1,
            -1 => -1,
            _ => 0,
        },
    }
}
