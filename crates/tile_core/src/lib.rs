// Core sliding-tile engine modules
pub mod board;
pub mod config;
pub mod error;
pub mod events;
pub mod moves;
pub mod palette;
pub mod position;
pub mod tile;

// Re-export main types for convenience
pub use board::Board;
pub use config::BoardConfig;
pub use error::{BoardError, Result};
pub use events::BoardEvent;
pub use moves::{Direction, Step, SweepSummary};
pub use palette::Rgb;
pub use position::{Axis, Position};
pub use tile::{Tile, TileStatus};
