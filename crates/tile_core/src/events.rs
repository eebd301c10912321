use crate::moves::Direction;
use crate::{Position, Tile};

/// Notifications a presentation layer consumes, in the order the board emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    BeginSweep {
        direction: Direction,
    },
    EndSweep {
        direction: Direction,
    },
    TileCreated {
        tile: Tile,
        position: Position,
    },
    /// Emitted once per tile after it finished sliding. `tile` is its final state.
    TileMoved {
        tile: Tile,
        from: Position,
        to: Position,
    },
    /// Emitted by `finish_sweep` for every tile left merged.
    TileMerged {
        tile: Tile,
        position: Position,
    },
}
