use core::fmt;

use crate::evaluator::EvalError;

/// Result of evaluating a syntax tree: a number, or the error that stopped it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Value<N = f64> {
    Number(N),
    Error(EvalError),
}

impl<N: Copy> Value<N> {
    pub fn as_number(&self) -> Option<N> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Error(_) => None,
        }
    }

    pub fn as_error(&self) -> Option<EvalError> {
        match self {
            Value::Number(_) => None,
            Value::Error(e) => Some(*e),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn into_result(self) -> Result<N, EvalError> {
        match self {
            Value::Number(n) => Ok(n),
            Value::Error(e) => Err(e),
        }
    }
}

impl<N> From<Result<N, EvalError>> for Value<N> {
    fn from(result: Result<N, EvalError>) -> Self {
        match result {
            Ok(n) => Value::Number(n),
            Err(e) => Value::Error(e),
        }
    }
}

impl<N> From<EvalError> for Value<N> {
    fn from(error: EvalError) -> Self {
        Value::Error(error)
    }
}

/// Numbers print in their shortest decimal form; errors print as
/// `Error: <message>`.
impl<N: fmt::Display> fmt::Display for Value<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Error(e) => write!(f, "Error: {}", e),
        }
    }
}
