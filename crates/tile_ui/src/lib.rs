use bevy::{
    log::{Level, LogPlugin},
    prelude::*,
    window::{PresentMode, WindowResolution},
};
use std::collections::HashMap;
use tile_core::{
    palette::{self, Rgb},
    Board, BoardEvent, Direction, Position, Tile,
};

const TILE_SIZE: f32 = 100.0;
const TILE_SPACING: f32 = 10.0;
const SLIDE_SECONDS: f32 = 0.3;
const SLIDE_SPEED: f32 = 1500.0;
const POP_SECONDS: f32 = 0.2;
const SPAWN_SCALE: f32 = 0.1;
const MERGE_SCALE: f32 = 1.2;

const ARROW_KEYS: [(KeyCode, Direction); 4] = [
    (KeyCode::Up, Direction::Up),
    (KeyCode::Down, Direction::Down),
    (KeyCode::Left, Direction::Left),
    (KeyCode::Right, Direction::Right),
];

/// Draws a [`Board`] and plays it with the arrow keys. `N` starts over.
pub struct TileUiPlugin {
    board: Board,
}

impl TileUiPlugin {
    pub fn new(board: Board) -> Self {
        Self { board }
    }
}

#[derive(Resource)]
struct GameState {
    board: Board,
    // Running while moved tiles are still sliding into place.
    sweep_timer: Option<Timer>,
}

#[derive(Resource, Default)]
struct TileViews {
    by_position: HashMap<Position, Entity>,
    absorbed: Vec<Entity>,
}

#[derive(Component)]
struct TileView {
    label: Entity,
}

#[derive(Component)]
struct EmptyCell;

#[derive(Component)]
struct SlidingTile {
    target: Vec3,
}

#[derive(Component)]
struct Pulse {
    from: f32,
    timer: Timer,
}

impl Pulse {
    fn new(from: f32) -> Self {
        Self {
            from,
            timer: Timer::from_seconds(POP_SECONDS, TimerMode::Once),
        }
    }
}

impl Plugin for TileUiPlugin {
    fn build(&self, app: &mut App) {
        let rows = self.board.rows() as f32;
        let cols = self.board.cols() as f32;

        app.add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "2048".into(),
                        resolution: WindowResolution::new(
                            cols * (TILE_SIZE + TILE_SPACING) + TILE_SPACING,
                            rows * (TILE_SIZE + TILE_SPACING) + TILE_SPACING,
                        ),
                        present_mode: PresentMode::AutoVsync,
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: "wgpu=error,naga=warn,tile_core=debug".into(),
                    level: Level::INFO,
                }),
        )
        .insert_resource(ClearColor(to_color(palette::BOARD_BACKGROUND)))
        .insert_resource(GameState {
            board: self.board.clone(),
            sweep_timer: None,
        })
        .init_resource::<TileViews>()
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                handle_input,
                apply_board_events,
                update_tile_slides,
                update_pulses,
                finish_sweep_animation,
            )
                .chain(),
        );
    }
}

fn setup(mut commands: Commands, mut game: ResMut<GameState>) {
    commands.spawn(Camera2dBundle::default());

    let (rows, cols) = (game.board.rows(), game.board.cols());
    for x in 0..rows as i32 {
        for y in 0..cols as i32 {
            let mut translation = cell_to_world(Position::new(x, y), rows, cols);
            translation.z = 1.0;

            commands.spawn((
                SpriteBundle {
                    sprite: Sprite {
                        color: to_color(palette::EMPTY_BACKGROUND),
                        custom_size: Some(Vec2::splat(TILE_SIZE)),
                        ..default()
                    },
                    transform: Transform::from_translation(translation),
                    ..default()
                },
                EmptyCell,
            ));
        }
    }

    game.board.new_game();
}

fn handle_input(
    mut commands: Commands,
    keys: Res<Input<KeyCode>>,
    mut game: ResMut<GameState>,
    mut views: ResMut<TileViews>,
) {
    if game.sweep_timer.is_some() {
        return;
    }

    if keys.just_pressed(KeyCode::N) {
        for (_, entity) in views.by_position.drain() {
            commands.entity(entity).despawn_recursive();
        }
        for entity in views.absorbed.drain(..) {
            commands.entity(entity).despawn_recursive();
        }
        game.board.new_game();
        info!("new game");
        return;
    }

    let Some(direction) = ARROW_KEYS
        .iter()
        .find(|(key, _)| keys.just_pressed(*key))
        .map(|(_, direction)| *direction)
    else {
        return;
    };

    let summary = game.board.sweep(direction);
    debug!(
        "swiped {:?}: {} moved, {} merged",
        direction, summary.moved, summary.merged
    );
    game.sweep_timer = Some(Timer::from_seconds(SLIDE_SECONDS, TimerMode::Once));
}

fn apply_board_events(
    mut commands: Commands,
    mut game: ResMut<GameState>,
    mut views: ResMut<TileViews>,
    tile_views: Query<&TileView>,
    mut sprites: Query<&mut Sprite, With<TileView>>,
    mut texts: Query<&mut Text>,
) {
    let (rows, cols) = (game.board.rows(), game.board.cols());

    for event in game.board.take_events() {
        match event {
            BoardEvent::TileCreated { tile, position } => {
                let entity = spawn_tile_view(
                    &mut commands,
                    &tile,
                    cell_to_world(position, rows, cols),
                );
                views.by_position.insert(position, entity);
            }
            BoardEvent::TileMoved { tile, from, to } => {
                let Some(entity) = views.by_position.remove(&from) else {
                    warn!("no tile view at {from}");
                    continue;
                };
                // The view already at `to` is the tile this one swallowed
                if tile.is_merged() {
                    if let Some(absorbed) = views.by_position.remove(&to) {
                        views.absorbed.push(absorbed);
                    }
                }
                commands.entity(entity).insert(SlidingTile {
                    target: cell_to_world(to, rows, cols),
                });
                views.by_position.insert(to, entity);
            }
            BoardEvent::TileMerged { tile, position } => {
                let Some(&entity) = views.by_position.get(&position) else {
                    continue;
                };
                if let Ok(mut sprite) = sprites.get_mut(entity) {
                    sprite.color = to_color(tile.background_color());
                }
                if let Ok(view) = tile_views.get(entity) {
                    if let Ok(mut text) = texts.get_mut(view.label) {
                        text.sections[0].value = tile.value.to_string();
                        text.sections[0].style.color = to_color(tile.foreground_color());
                    }
                }
                commands.entity(entity).insert(Pulse::new(MERGE_SCALE));
            }
            BoardEvent::BeginSweep { direction } | BoardEvent::EndSweep { direction } => {
                trace!("{:?} sweep event", direction);
            }
        }
    }
}

fn update_tile_slides(time: Res<Time>, mut query: Query<(&mut Transform, &SlidingTile)>) {
    for (mut transform, sliding) in query.iter_mut() {
        let offset = sliding.target - transform.translation;
        let step = SLIDE_SPEED * time.delta_seconds();

        if offset.length() <= step {
            transform.translation = sliding.target;
        } else {
            transform.translation += offset.normalize() * step;
        }
    }
}

fn update_pulses(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Transform, &mut Pulse)>,
) {
    for (entity, mut transform, mut pulse) in query.iter_mut() {
        pulse.timer.tick(time.delta());
        let scale = pulse.from + (1.0 - pulse.from) * pulse.timer.percent();
        transform.scale = Vec3::splat(scale);

        if pulse.timer.finished() {
            transform.scale = Vec3::ONE;
            commands.entity(entity).remove::<Pulse>();
        }
    }
}

fn finish_sweep_animation(
    mut commands: Commands,
    time: Res<Time>,
    mut game: ResMut<GameState>,
    mut views: ResMut<TileViews>,
    mut sliding: Query<(Entity, &mut Transform, &SlidingTile)>,
) {
    let finished = match game.sweep_timer.as_mut() {
        Some(timer) => timer.tick(time.delta()).finished(),
        None => return,
    };
    if !finished {
        return;
    }
    game.sweep_timer = None;

    for (entity, mut transform, sliding) in sliding.iter_mut() {
        transform.translation = sliding.target;
        commands.entity(entity).remove::<SlidingTile>();
    }
    for entity in views.absorbed.drain(..) {
        commands.entity(entity).despawn_recursive();
    }

    game.board.finish_sweep();
    if !game.board.try_spawn_random_tile() {
        info!("board is full");
    }
}

fn spawn_tile_view(commands: &mut Commands, tile: &Tile, translation: Vec3) -> Entity {
    let label = commands
        .spawn(Text2dBundle {
            text: Text::from_section(
                tile.value.to_string(),
                TextStyle {
                    font_size: TILE_SIZE * 0.5,
                    color: to_color(tile.foreground_color()),
                    ..default()
                },
            ),
            transform: Transform::from_xyz(0.0, 0.0, 1.0),
            ..default()
        })
        .id();

    commands
        .spawn((
            SpriteBundle {
                sprite: Sprite {
                    color: to_color(tile.background_color()),
                    custom_size: Some(Vec2::splat(TILE_SIZE)),
                    ..default()
                },
                transform: Transform::from_translation(translation)
                    .with_scale(Vec3::splat(SPAWN_SCALE)),
                ..default()
            },
            TileView { label },
            Pulse::new(SPAWN_SCALE),
        ))
        .add_child(label)
        .id()
}

/// Row 0 is the top of the window; tiles sit above the empty cells.
fn cell_to_world(pos: Position, rows: usize, cols: usize) -> Vec3 {
    let pitch = TILE_SIZE + TILE_SPACING;
    Vec3::new(
        (pos.y as f32 - (cols as f32 - 1.0) / 2.0) * pitch,
        ((rows as f32 - 1.0) / 2.0 - pos.x as f32) * pitch,
        2.0,
    )
}

fn to_color(rgb: Rgb) -> Color {
    Color::rgb_u8(rgb.r, rgb.g, rgb.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_to_world_centres_the_grid() {
        let pitch = TILE_SIZE + TILE_SPACING;
        let top_left = cell_to_world(Position::new(0, 0), 4, 4);
        assert_eq!(top_left.truncate(), Vec2::new(-1.5 * pitch, 1.5 * pitch));

        let bottom_right = cell_to_world(Position::new(3, 3), 4, 4);
        assert_eq!(bottom_right.truncate(), Vec2::new(1.5 * pitch, -1.5 * pitch));

        let single = cell_to_world(Position::new(0, 0), 1, 1);
        assert_eq!(single.truncate(), Vec2::ZERO);
    }

    #[test]
    fn test_to_color_matches_palette() {
        let color = to_color(palette::EMPTY_BACKGROUND);
        assert_eq!(color, Color::rgb_u8(204, 192, 178));
    }
}
