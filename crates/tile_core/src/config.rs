use crate::error::{BoardError, Result};
use crate::tile::DEFAULT_SPAWN_VALUE;

pub const DEFAULT_ROWS: usize = 4;
pub const DEFAULT_COLS: usize = 4;

/// Construction parameters for a [`Board`](crate::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    /// Value of every newly spawned tile.
    pub spawn_value: u32,
    /// Fixes the spawn RNG; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            spawn_value: DEFAULT_SPAWN_VALUE,
            seed: None,
        }
    }
}

impl BoardConfig {
    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_spawn_value(mut self, value: u32) -> Self {
        self.spawn_value = value;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(BoardError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.spawn_value == 0 {
            return Err(BoardError::InvalidSpawnValue(self.spawn_value));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic_board() {
        let config = BoardConfig::default();
        assert_eq!((config.rows, config.cols), (4, 4));
        assert_eq!(config.spawn_value, 2);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_dimensions() {
        let config = BoardConfig::default().with_dimensions(0, 4);
        assert_eq!(
            config.validate(),
            Err(BoardError::InvalidDimensions { rows: 0, cols: 4 })
        );
    }

    #[test]
    fn test_validate_rejects_zero_spawn_value() {
        let config = BoardConfig::default().with_spawn_value(0);
        assert_eq!(config.validate(), Err(BoardError::InvalidSpawnValue(0)));
    }
}
