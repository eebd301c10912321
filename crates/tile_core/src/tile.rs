use crate::palette::{self, Rgb};
use crate::Position;

/// Value given to freshly spawned tiles unless configured otherwise.
pub const DEFAULT_SPAWN_VALUE: u32 = 2;

/// Tiles whose merge would exceed this value never merge.
pub const MAX_TILE_VALUE: u32 = u32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileStatus {
    #[default]
    Unchanged,
    /// Survivor of a merge during the current sweep.
    Merged,
    /// Absorbed by a merge; only ever seen in the scratch buffer.
    Disappeared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub value: u32,
    pub position: Position,
    pub status: TileStatus,
}

impl Tile {
    pub fn new(value: u32, position: Position) -> Self {
        Self {
            value,
            position,
            status: TileStatus::Unchanged,
        }
    }

    pub fn is_merged(&self) -> bool {
        self.status == TileStatus::Merged
    }

    /// Absorbs `other` into this tile and marks it merged.
    ///
    /// Returns `false` and leaves the tile untouched when the combined value
    /// would not fit; [`can_merge`] rules that case out during a sweep.
    pub fn merge(&mut self, other: &Tile) -> bool {
        let Some(value) = merged_value(self.value, other.value) else {
            return false;
        };
        self.value = value;
        self.status = TileStatus::Merged;
        true
    }

    pub fn foreground_color(&self) -> Rgb {
        palette::foreground_color(self.value)
    }

    pub fn background_color(&self) -> Rgb {
        palette::background_color(self.value)
    }
}

/// The value produced by combining two tiles, or `None` past [`MAX_TILE_VALUE`].
pub fn merged_value(a: u32, b: u32) -> Option<u32> {
    a.checked_add(b)
}

/// Whether `moving` may merge into `target` during the current sweep.
pub fn can_merge(moving: &Tile, target: &Tile) -> bool {
    moving.status != TileStatus::Merged
        && target.status == TileStatus::Unchanged
        && moving.value == target.value
        && merged_value(moving.value, target.value).is_some()
}
