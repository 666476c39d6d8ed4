//! Styx - a prefix-notation calculator
//!
//! # Overview
//!
//! Styx reads one line of prefix arithmetic such as `* (+ 1 2) (- 10 4)`,
//! parses it into a syntax tree and evaluates the tree to a number. Every
//! operator takes one or more operands and reduces them left to right:
//!
//! - `+`/`add`, `-`/`sub`, `*`/`mul`, `/`/`div`, `%`/`mod`, `^`
//! - `min` and `max` scan all of their operands
//!
//! Evaluation never fails with a Rust error: division by zero, unknown
//! operators and unrepresentable literals become error values that
//! propagate to the result of the whole line. Only lines that do not parse
//! are reported as [`Error`].
//!
//! # Quick Start
//!
//! ```
//! use styx::{Engine, EngineOptions, Value};
//!
//! let engine = Engine::new(EngineOptions::default());
//!
//! let result = engine.evaluate_line::<f64>("* (+ 1 2) (- 10 4)").unwrap();
//! assert_eq!(result, Value::Number(18.0));
//! assert_eq!(result.to_string(), "18");
//! ```
//!
//! # Error Rendering
//!
//! Parse errors carry spans into the source line and can be rendered with
//! [`render_error`] and friends:
//!
//! ```
//! use styx::{Engine, EngineOptions, render_error_to_string_no_color};
//!
//! let engine = Engine::new(EngineOptions::default());
//! let err = engine.evaluate_line::<f64>("(+ 1").unwrap_err();
//! let report = render_error_to_string_no_color(&err);
//! assert!(report.contains("Unclosed delimiter"));
//! ```

mod error_renderer;

// Re-export public API from styx_core
pub use styx_core::api::{Diagnostic, Engine, EngineOptions, Error, NumberMode, Severity};

// Re-export the pieces needed to work with trees and results directly
pub use styx_core::evaluator::{self, EvalError};
pub use styx_core::parser::{self, Node, NodeKind, Operator};
pub use styx_core::values::{self, Numeric, Value};

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
