use std::collections::HashMap;

use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::BoardConfig;
use crate::error::{BoardError, Result};
use crate::events::BoardEvent;
use crate::moves::{next_step, Direction, Step, SweepSummary};
use crate::palette::{self, Rgb};
use crate::tile::{Tile, TileStatus};
use crate::Position;

#[derive(Debug, Clone)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Tile>>,
    // Tiles absorbed during the current sweep, keyed by the cell they vanished in.
    absorbed: HashMap<Position, Tile>,
    spawn_value: u32,
    rng: SmallRng,
    events: Vec<BoardEvent>,
}

impl Board {
    /// Creates an empty `rows` x `cols` board with default spawn settings.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::from_config(&BoardConfig::default().with_dimensions(rows, cols))
    }

    pub fn from_config(config: &BoardConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        Ok(Self {
            rows: config.rows,
            cols: config.cols,
            cells: vec![None; config.rows * config.cols],
            absorbed: HashMap::new(),
            spawn_value: config.spawn_value,
            rng,
            events: Vec::new(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.index_of(pos).is_some()
    }

    pub fn get(&self, pos: Position) -> Result<Option<Tile>> {
        let index = self.checked_index(pos)?;
        Ok(self.cells[index])
    }

    /// Places `tile` at `pos`, or empties the cell when `None`.
    ///
    /// The stored tile is stamped with `pos` so its position always matches the grid.
    pub fn set(&mut self, pos: Position, tile: Option<Tile>) -> Result<()> {
        let index = self.checked_index(pos)?;
        self.cells[index] = tile.map(|mut tile| {
            tile.position = pos;
            tile
        });
        Ok(())
    }

    /// Occupied cells in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().flatten()
    }

    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| self.position_of(index))
            .collect()
    }

    pub fn value_at(&self, pos: Position) -> Result<Option<u32>> {
        Ok(self.get(pos)?.map(|tile| tile.value))
    }

    pub fn foreground_at(&self, pos: Position) -> Result<Rgb> {
        Ok(self
            .get(pos)?
            .map_or(palette::EMPTY_FOREGROUND, |tile| tile.foreground_color()))
    }

    pub fn background_at(&self, pos: Position) -> Result<Rgb> {
        Ok(self
            .get(pos)?
            .map_or(palette::EMPTY_BACKGROUND, |tile| tile.background_color()))
    }

    /// The tile absorbed at `pos` during the current sweep, if any.
    pub fn absorbed_at(&self, pos: Position) -> Option<&Tile> {
        self.absorbed.get(&pos)
    }

    /// Drains the events emitted since the last call, oldest first.
    pub fn take_events(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }

    /// Empties every cell, the merge scratch buffer and any undrained events.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
        self.absorbed.clear();
        self.events.clear();
        debug!("cleared {}x{} board", self.rows, self.cols);
    }

    /// Clears the board and places the opening tile.
    pub fn new_game(&mut self) {
        self.clear();
        self.try_spawn_random_tile();
    }

    /// Places a new tile on a uniformly chosen empty cell.
    ///
    /// Returns `false` without touching the board when every cell is occupied.
    pub fn try_spawn_random_tile(&mut self) -> bool {
        let empty = self.empty_positions();
        if empty.is_empty() {
            debug!("board full, no tile spawned");
            return false;
        }

        let pos = empty[self.rng.gen_range(0..empty.len())];
        let tile = Tile::new(self.spawn_value, pos);
        let index = self.index_unchecked(pos);
        self.cells[index] = Some(tile);

        debug!("spawned {} at {}", tile.value, pos);
        self.events.push(BoardEvent::TileCreated { tile, position: pos });
        true
    }

    /// Slides every tile toward `direction`, merging equal neighbours at most once each.
    pub fn sweep(&mut self, direction: Direction) -> SweepSummary {
        self.prepare_for_sweep();
        self.events.push(BoardEvent::BeginSweep { direction });

        let mut summary = SweepSummary::default();
        for from in direction.scan_order(self.rows, self.cols) {
            let Some((tile, merged)) = self.slide_tile(from, direction) else {
                continue;
            };
            if merged {
                summary.merged += 1;
            }
            if tile.position != from {
                summary.moved += 1;
                trace!("{} -> {} ({})", from, tile.position, tile.value);
                self.events.push(BoardEvent::TileMoved {
                    tile,
                    from,
                    to: tile.position,
                });
            }
        }

        debug!(
            "sweep {:?}: {} moved, {} merged",
            direction, summary.moved, summary.merged
        );
        self.events.push(BoardEvent::EndSweep { direction });
        summary
    }

    /// Reports every tile that merged during the last sweep.
    pub fn finish_sweep(&mut self) {
        let merged: Vec<Tile> = self.tiles().filter(|tile| tile.is_merged()).copied().collect();
        for tile in merged {
            self.events.push(BoardEvent::TileMerged {
                tile,
                position: tile.position,
            });
        }
    }

    // Moves the tile at `from` as far as it can go. Returns the settled tile
    // and whether it merged on the way, or `None` for an empty cell.
    fn slide_tile(&mut self, from: Position, direction: Direction) -> Option<(Tile, bool)> {
        let from_index = self.index_unchecked(from);
        let mut tile = self.cells[from_index].take()?;

        let mut at = from;
        let mut merged = false;
        while let Some(to_index) = self.index_of(at.forward(direction.axis(), direction.step())) {
            let to = self.position_of(to_index);
            match next_step(&tile, self.cells[to_index].as_ref()) {
                Step::Blocked => break,
                Step::Slide => {}
                Step::Merge => {
                    let Some(mut absorbed) = self.cells[to_index] else {
                        break;
                    };
                    if !tile.merge(&absorbed) {
                        break;
                    }
                    self.cells[to_index] = None;
                    absorbed.status = TileStatus::Disappeared;
                    absorbed.position = to;
                    trace!("merged {} into {} at {}", absorbed.value, tile.value, to);
                    self.absorbed.insert(to, absorbed);
                    merged = true;
                }
            }
            at = to;
        }

        tile.position = at;
        let at_index = self.index_unchecked(at);
        self.cells[at_index] = Some(tile);
        Some((tile, merged))
    }

    fn prepare_for_sweep(&mut self) {
        for index in 0..self.cells.len() {
            let pos = self.position_of(index);
            if let Some(tile) = self.cells[index].as_mut() {
                tile.position = pos;
                tile.status = TileStatus::Unchanged;
            }
        }
        self.absorbed.clear();
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (row, col) = (pos.x as usize, pos.y as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    fn checked_index(&self, pos: Position) -> Result<usize> {
        self.index_of(pos).ok_or(BoardError::IndexOutOfRange {
            position: pos,
            rows: self.rows,
            cols: self.cols,
        })
    }

    // For positions produced by the board itself.
    fn index_unchecked(&self, pos: Position) -> usize {
        pos.x as usize * self.cols + pos.y as usize
    }

    fn position_of(&self, index: usize) -> Position {
        Position::new((index / self.cols) as i32, (index % self.cols) as i32)
    }
}
