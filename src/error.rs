//! Error types for the rules engine.

use crate::board::Point;

/// Errors signalled when a caller violates an operation's precondition.
///
/// None of these are recoverable game situations; they indicate the caller
/// asked for something the board cannot answer. Operations that return one
/// never leave the board partially modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("position ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl EngineError {
    pub(crate) fn out_of_bounds((row, col): Point, size: usize) -> Self {
        EngineError::OutOfBounds { row, col, size }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let err = EngineError::out_of_bounds((7, 2), 7);
        assert_eq!(err.to_string(), "position (7, 2) is outside a 7x7 board");
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = EngineError::InvalidArgument("cell (3, 3) is empty".into());
        assert_eq!(err.to_string(), "invalid argument: cell (3, 3) is empty");
    }
}
