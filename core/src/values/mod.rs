//! Evaluation results.
//!
//! [`Value`] is generic over the numeric representation so that a single
//! evaluator serves both the floating-point calculator and the integer one.

mod numeric;
mod value;

#[cfg(test)]
mod display_test;

pub use numeric::Numeric;
pub use value::Value;
