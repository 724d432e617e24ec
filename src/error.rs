//! Shape preconditions are checked before any numeric loop runs, so a
//! returned error always means the call performed no mutation.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum NnError {
    /// A constructor was given a zero dimension.
    #[error("invalid shape {rows}x{cols}: dimensions must be positive")]
    InvalidShape { rows: usize, cols: usize },

    /// A binary operation was given operands whose shapes do not satisfy
    /// its precondition. Shapes are reported as (rows, cols).
    #[error("dimension mismatch: {left:?} vs {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// The learning rate must be a positive finite number.
    #[error("invalid learning rate: {0}")]
    InvalidLearningRate(f64),
}
