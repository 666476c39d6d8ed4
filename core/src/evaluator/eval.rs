//! Core evaluation logic.

use core::marker::PhantomData;

use tracing::{debug, trace};

use crate::{
    evaluator::{EvalError, EvaluatorOptions, operators::apply},
    parser::{Node, NodeKind, Operator},
    values::{Numeric, Value},
};

/// Evaluator for syntax trees.
pub struct Evaluator<N> {
    options: EvaluatorOptions,
    depth: usize,
    _number: PhantomData<N>,
}

impl<N: Numeric> Evaluator<N> {
    /// Create a new evaluator with the given options.
    pub fn new(options: EvaluatorOptions) -> Self {
        Self {
            options,
            depth: 0,
            _number: PhantomData,
        }
    }

    /// Evaluate a syntax tree.
    pub fn eval(&mut self, node: &Node) -> Value<N> {
        self.depth = 0;
        self.eval_node(node)
    }

    fn eval_node(&mut self, node: &Node) -> Value<N> {
        match node.kind() {
            NodeKind::Number => self.eval_number(node),
            NodeKind::Program | NodeKind::Expr => {
                // Check depth before recursing
                if self.depth >= self.options.max_depth {
                    debug!(
                        depth = self.depth,
                        max_depth = self.options.max_depth,
                        "evaluation depth exceeded"
                    );
                    return EvalError::DepthExceeded.into();
                }

                self.depth += 1;
                let result = self.eval_compound(node);
                self.depth -= 1;

                result
            }
            // Tokens never stand in operand position in a well-formed tree.
            NodeKind::Operator | NodeKind::Delimiter => EvalError::InvalidNumber.into(),
        }
    }

    fn eval_number(&self, node: &Node) -> Value<N> {
        match N::parse_literal(node.contents()) {
            Some(n) => Value::Number(n),
            None => {
                debug!(literal = node.contents(), "literal out of range");
                EvalError::InvalidNumber.into()
            }
        }
    }

    fn eval_compound(&mut self, node: &Node) -> Value<N> {
        let Some(token) = node.operator_token() else {
            return EvalError::InvalidOperator.into();
        };
        // An unknown token only matters once two operands are combined.
        let op = Operator::from_token(token.contents());

        let mut operands = node.operands();
        let Some(first) = operands.next() else {
            return EvalError::InvalidOperator.into();
        };
        let acc = self.eval_node(first);
        trace!(token = token.contents(), "evaluating compound node");

        match op {
            Some(op) if op.is_extremum() => self.reduce_extremum(op, acc, operands),
            _ => self.fold(op, token.contents(), acc, operands),
        }
    }

    /// Left fold: `acc = apply(op, acc, next)` until the operands run out or
    /// the accumulator turns into an error.
    fn fold<'n>(
        &mut self,
        op: Option<Operator>,
        token: &str,
        mut acc: Value<N>,
        operands: impl Iterator<Item = &'n Node>,
    ) -> Value<N> {
        for operand in operands {
            if acc.is_error() {
                break;
            }
            let next = self.eval_node(operand);
            acc = match op {
                Some(op) => apply(op, acc, next),
                // Same order as `apply`: operand errors win over the operator.
                None if next.is_error() => next,
                None => {
                    debug!(token, "unknown operator");
                    EvalError::InvalidOperator.into()
                }
            };
        }
        acc
    }

    /// Running minimum or maximum over every operand.
    fn reduce_extremum<'n>(
        &mut self,
        op: Operator,
        first: Value<N>,
        operands: impl Iterator<Item = &'n Node>,
    ) -> Value<N> {
        let mut best = match first {
            Value::Number(n) => n,
            err @ Value::Error(_) => return err,
        };
        for operand in operands {
            let candidate = match self.eval_node(operand) {
                Value::Number(n) => n,
                err @ Value::Error(_) => return err,
            };
            let better = match op {
                Operator::Min => candidate < best,
                _ => candidate > best,
            };
            if better {
                best = candidate;
            }
        }
        Value::Number(best)
    }
}
