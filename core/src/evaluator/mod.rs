//! Tree-walking evaluator for Styx syntax trees.
//!
//! The evaluator walks a [`Node`] produced by the parser and produces a
//! [`Value`]: a number, or the first error met in left-to-right order.
//!
//! ## Design Principles
//!
//! - **Never panic**: malformed trees and unknown operators become error values
//! - **Stack-safe**: depth tracking prevents stack overflow from deeply nested trees
//! - **Generic**: one evaluator for every [`Numeric`] representation
//!
//! ## Example
//!
//! ```
//! use styx_core::{evaluator, parser};
//!
//! let tree = parser::parse("* (+ 1 2) (- 10 4)").unwrap();
//! let result = evaluator::eval::<f64>(&tree);
//! assert_eq!(result.as_number(), Some(18.0));
//! ```

mod error;
mod eval;
pub(crate) mod operators;

#[cfg(test)]
mod eval_test;

pub use error::EvalError;
pub use eval::Evaluator;
pub use operators::apply;

use crate::{
    parser::{DEFAULT_MAX_DEPTH, Node},
    values::{Numeric, Value},
};

/// Configuration options for evaluation.
#[derive(Debug, Clone)]
pub struct EvaluatorOptions {
    /// Maximum number of nested compound nodes.
    ///
    /// Default: the parser's default depth limit, so anything the parser
    /// accepts can be evaluated.
    pub max_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Evaluate a syntax tree with default limits.
pub fn eval<N: Numeric>(node: &Node) -> Value<N> {
    Evaluator::new(EvaluatorOptions::default()).eval(node)
}

/// Evaluate a syntax tree with a custom depth limit.
pub fn eval_with_limits<N: Numeric>(node: &Node, max_depth: usize) -> Value<N> {
    Evaluator::new(EvaluatorOptions { max_depth }).eval(node)
}
