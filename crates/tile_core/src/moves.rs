use crate::position::Axis;
use crate::tile::{can_merge, Tile};
use crate::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Row,
            Direction::Left | Direction::Right => Axis::Col,
        }
    }

    pub fn step(self) -> i32 {
        match self {
            Direction::Up | Direction::Left => -1,
            Direction::Down | Direction::Right => 1,
        }
    }

    /// Every position of a `rows` x `cols` grid, lane by lane, with the cells
    /// nearest the destination edge first in each lane.
    ///
    /// Processing tiles in this order lets each one slide as far as it can in
    /// a single pass: whatever sits between it and the edge has already settled.
    pub fn scan_order(self, rows: usize, cols: usize) -> Vec<Position> {
        let (rows, cols) = (rows as i32, cols as i32);
        let (lanes, lane_len) = match self.axis() {
            Axis::Row => (cols, rows),
            Axis::Col => (rows, cols),
        };

        let mut order = Vec::with_capacity((rows * cols).max(0) as usize);
        for lane in 0..lanes {
            for i in 0..lane_len {
                let offset = if self.step() < 0 { i } else { lane_len - 1 - i };
                order.push(match self.axis() {
                    Axis::Row => Position::new(offset, lane),
                    Axis::Col => Position::new(lane, offset),
                });
            }
        }
        order
    }
}

/// What happens when a tile tries to advance one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The next cell is empty.
    Slide,
    /// The next cell holds an equal, untouched tile.
    Merge,
    Blocked,
}

/// Decides a single step for `moving` into a cell holding `target`.
///
/// Bounds are the board's concern; callers only ask about in-grid cells.
pub fn next_step(moving: &Tile, target: Option<&Tile>) -> Step {
    match target {
        None => Step::Slide,
        Some(target) if can_merge(moving, target) => Step::Merge,
        Some(_) => Step::Blocked,
    }
}

/// Counts of what one sweep did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepSummary {
    /// Tiles whose position changed.
    pub moved: usize,
    pub merged: usize,
}

impl SweepSummary {
    pub fn changed(&self) -> bool {
        self.moved > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileStatus;

    #[test]
    fn test_axis_and_step() {
        assert_eq!(Direction::Up.axis(), Axis::Row);
        assert_eq!(Direction::Down.axis(), Axis::Row);
        assert_eq!(Direction::Left.axis(), Axis::Col);
        assert_eq!(Direction::Right.axis(), Axis::Col);
        assert_eq!(Direction::Up.step(), -1);
        assert_eq!(Direction::Right.step(), 1);
    }

    #[test]
    fn test_scan_order_starts_at_destination_edge() {
        let right = Direction::Right.scan_order(2, 3);
        assert_eq!(
            right,
            vec![
                Position::new(0, 2),
                Position::new(0, 1),
                Position::new(0, 0),
                Position::new(1, 2),
                Position::new(1, 1),
                Position::new(1, 0),
            ]
        );

        let up = Direction::Up.scan_order(3, 2);
        assert_eq!(up[0], Position::new(0, 0));
        assert_eq!(up[2], Position::new(2, 0));
        assert_eq!(up[3], Position::new(0, 1));

        let down = Direction::Down.scan_order(3, 1);
        assert_eq!(
            down,
            vec![Position::new(2, 0), Position::new(1, 0), Position::new(0, 0)]
        );
    }

    #[test]
    fn test_scan_order_covers_every_cell() {
        for direction in Direction::ALL {
            let mut order = direction.scan_order(3, 5);
            order.sort_by_key(|p| (p.x, p.y));
            order.dedup();
            assert_eq!(order.len(), 15, "{direction:?}");
        }
    }

    #[test]
    fn test_next_step() {
        let moving = Tile::new(2, Position::new(0, 1));
        assert_eq!(next_step(&moving, None), Step::Slide);

        let equal = Tile::new(2, Position::new(0, 0));
        assert_eq!(next_step(&moving, Some(&equal)), Step::Merge);

        let other = Tile::new(4, Position::new(0, 0));
        assert_eq!(next_step(&moving, Some(&other)), Step::Blocked);

        let mut already = moving;
        already.status = TileStatus::Merged;
        assert_eq!(next_step(&already, None), Step::Slide);
        assert_eq!(next_step(&already, Some(&equal)), Step::Blocked);
    }
}
