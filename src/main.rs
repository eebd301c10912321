use bevy::prelude::*;
use tile_core::{Board, BoardConfig, BoardError};
use tile_ui::TileUiPlugin;

fn main() -> Result<(), BoardError> {
    let board = Board::from_config(&BoardConfig::default())?;

    App::new()
        .add_plugins(TileUiPlugin::new(board))
        .run();

    Ok(())
}
