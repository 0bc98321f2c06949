use thiserror::Error;

use super::cube::CubeId;

/// Contract violations inside the board model.
///
/// Invalid moves are never errors; they are ordinary turn transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("cube {0} is not placed on the grid")]
    NotFound(CubeId),
}
