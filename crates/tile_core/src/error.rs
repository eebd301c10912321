use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("position {position} is outside the {rows}x{cols} board")]
    IndexOutOfRange {
        position: Position,
        rows: usize,
        cols: usize,
    },

    #[error("board must be at least 1x1, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("spawn value must be positive, got {0}")]
    InvalidSpawnValue(u32),
}

pub type Result<T> = std::result::Result<T, BoardError>;
