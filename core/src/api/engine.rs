//! The Styx calculation engine.

use tracing::debug;

use super::{EngineOptions, Error, NumberMode};
use crate::evaluator::{Evaluator, EvaluatorOptions};
use crate::parser::{self, Node};
use crate::values::{Numeric, Value};

/// Parses and evaluates calculator lines under one set of options.
///
/// The engine holds no state between lines; every call parses and evaluates
/// independently.
///
/// # Example
///
/// ```
/// use styx_core::api::{Engine, EngineOptions, NumberMode};
///
/// let engine = Engine::new(EngineOptions {
///     number_mode: NumberMode::Integer,
///     ..Default::default()
/// });
///
/// assert_eq!(engine.run("/ 7 2").unwrap(), "3");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    /// Access the engine options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Parse one line of input.
    ///
    /// Accepts a full `operator expr+` line or a single expression such as a
    /// bare number.
    pub fn parse(&self, source: &str) -> Result<Node, Error> {
        Ok(parser::parse_line(source, self.options.max_depth)?)
    }

    /// Evaluate an already parsed tree.
    pub fn evaluate<N: Numeric>(&self, tree: &Node) -> Value<N> {
        let options = EvaluatorOptions {
            max_depth: self.options.max_depth,
        };
        Evaluator::new(options).eval(tree)
    }

    /// Parse and evaluate one line.
    ///
    /// Only parse failures are returned as `Err`; evaluation failures such as
    /// division by zero come back as [`Value::Error`].
    pub fn evaluate_line<N: Numeric>(&self, source: &str) -> Result<Value<N>, Error> {
        let tree = self.parse(source)?;
        let value = self.evaluate(&tree);
        debug!(source, %value, "evaluated line");
        Ok(value)
    }

    /// Parse, evaluate and render one line using the configured
    /// [`NumberMode`].
    pub fn run(&self, source: &str) -> Result<String, Error> {
        let rendered = match self.options.number_mode {
            NumberMode::Float => self.evaluate_line::<f64>(source)?.to_string(),
            NumberMode::Integer => self.evaluate_line::<i64>(source)?.to_string(),
        };
        Ok(rendered)
    }
}
