//! Core of the Styx prefix calculator: grammar, syntax tree and evaluator.

pub mod api;
pub mod evaluator;
pub mod parser;
pub mod values;
