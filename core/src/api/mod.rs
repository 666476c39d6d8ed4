//! Public API for the Styx calculator.
//!
//! [`Engine`] bundles the parser and the evaluator behind one set of
//! [`EngineOptions`]. Parse failures cross this boundary as [`Error`], carrying
//! [`Diagnostic`]s that the facade crate renders for humans. Evaluation
//! failures are not errors here: they are ordinary [`Value`](crate::values::Value)s.
//!
//! # Example
//!
//! ```
//! use styx_core::api::{Engine, EngineOptions};
//!
//! let engine = Engine::new(EngineOptions::default());
//!
//! let value = engine.evaluate_line::<f64>("max 5 3 9 -1 4").unwrap();
//! assert_eq!(value.to_string(), "9");
//!
//! let value = engine.evaluate_line::<f64>("/ 5 0").unwrap();
//! assert_eq!(value.to_string(), "Error: Division By Zero");
//!
//! assert!(engine.evaluate_line::<f64>("(+ 1").is_err());
//! ```

pub mod engine;
pub mod error;
pub mod options;

pub use engine::Engine;
pub use error::{Diagnostic, Error, Severity};
pub use options::{EngineOptions, NumberMode};
