use std::fmt;

/// Which coordinate a step advances. `Row` moves along `x`, `Col` along `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Col,
}

/// A grid coordinate: `x` is the row, `y` the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Sentinel meaning "no position".
    pub const OUT_OF_RANGE: Position = Position { x: -1, y: -1 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns a new position offset by `step` along `axis`. `step` may be negative.
    ///
    /// Coordinates saturate at the `i32` limits instead of overflowing.
    pub fn forward(self, axis: Axis, step: i32) -> Self {
        match axis {
            Axis::Row => Self::new(self.x.saturating_add(step), self.y),
            Axis::Col => Self::new(self.x, self.y.saturating_add(step)),
        }
    }

    pub fn is_out_of_range(self) -> bool {
        self == Self::OUT_OF_RANGE
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::OUT_OF_RANGE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_forward_moves_along_axis() {
        let pos = Position::new(2, 3);
        assert_eq!(pos.forward(Axis::Row, 1), Position::new(3, 3));
        assert_eq!(pos.forward(Axis::Row, -2), Position::new(0, 3));
        assert_eq!(pos.forward(Axis::Col, 1), Position::new(2, 4));
        assert_eq!(pos.forward(Axis::Col, -3), Position::new(2, 0));
    }

    #[test]
    fn test_forward_saturates_at_limits() {
        let max = Position::new(i32::MAX, i32::MAX);
        assert_eq!(max.forward(Axis::Row, 1), max);
        assert_eq!(max.forward(Axis::Col, 5), max);

        let min = Position::new(i32::MIN, 0);
        assert_eq!(min.forward(Axis::Row, -1), min);
        assert_eq!(min.forward(Axis::Row, 1), Position::new(i32::MIN + 1, 0));
    }

    #[test]
    fn test_equality_compares_both_coordinates() {
        // (1,2) and (2,2) share y but must not compare equal
        assert_ne!(Position::new(1, 2), Position::new(2, 2));
        assert_ne!(Position::new(2, 1), Position::new(2, 2));
        assert_eq!(Position::new(2, 2), Position::new(2, 2));
    }

    #[test]
    fn test_hash_is_structural() {
        let mut seen = HashSet::new();
        seen.insert(Position::new(0, 1));
        seen.insert(Position::new(1, 0));
        seen.insert(Position::new(0, 1));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_out_of_range_sentinel() {
        assert!(Position::OUT_OF_RANGE.is_out_of_range());
        assert!(Position::default().is_out_of_range());
        assert!(!Position::new(0, 0).is_out_of_range());
        assert_eq!(Position::OUT_OF_RANGE.to_string(), "(-1,-1)");
    }
}
