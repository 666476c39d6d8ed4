//! Configuration options for the Styx engine.

use crate::parser::DEFAULT_MAX_DEPTH;

/// Numeric representation used for evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumberMode {
    /// 64-bit floating point.
    #[default]
    Float,
    /// 64-bit signed integers. Fractional literals are truncated.
    Integer,
}

/// Configuration options for the Styx engine.
///
/// # Example
///
/// ```
/// use styx_core::api::{EngineOptions, NumberMode};
///
/// let options = EngineOptions {
///     max_depth: 64,
///     number_mode: NumberMode::Integer,
/// };
/// ```
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Maximum nesting of compound expressions, the top-level line included.
    ///
    /// Applies to both parsing and evaluation.
    ///
    /// Default: 256
    pub max_depth: usize,

    /// Representation used by [`Engine::run`](super::Engine::run).
    ///
    /// Default: [`NumberMode::Float`]
    pub number_mode: NumberMode,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            number_mode: NumberMode::default(),
        }
    }
}
