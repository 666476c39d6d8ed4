pub mod error;
#[allow(clippy::module_inception)]
pub mod parser;
mod syntax;

// Re-export the parser and rule enum for external use
pub use parser::StyxParser;
pub use parser::Rule;
pub use parser::{DEFAULT_MAX_DEPTH, parse, parse_with_max_depth};
pub use parser::{parse_expr, parse_expr_with_max_depth, parse_line};

pub use error::{ParseError, ParseErrorKind};
pub use syntax::{Node, NodeKind, Operator, Span, TreeError};
