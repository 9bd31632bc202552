//! Square board geometry with 0-based (row, col) coordinates

use serde::{Deserialize, Serialize};

/// Board side length
pub const BOARD_SIZE: i8 = 6;

/// Number of cells on the board
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Board coordinates
///
/// Out-of-range values are representable so callers can hand us raw input;
/// `is_valid` decides whether a position is on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Check if this position is on the board
    pub fn is_valid(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// Row-major cell index; only meaningful for valid positions
    pub fn index(&self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// Straight-line distance to `other` along a single axis.
    ///
    /// `None` when both coordinates differ (diagonal or knight-like jumps).
    /// Equal positions give `Some(0)`.
    pub fn straight_distance(&self, other: Position) -> Option<u16> {
        let dr = (i16::from(other.row) - i16::from(self.row)).unsigned_abs();
        let dc = (i16::from(other.col) - i16::from(self.col)).unsigned_abs();
        match (dr, dc) {
            (0, d) | (d, 0) => Some(d),
            _ => None,
        }
    }

    /// Step `distance` cells in `direction`.
    ///
    /// `None` when the result does not fit the coordinate type; the result
    /// may still be off the board.
    pub fn offset(&self, direction: (i8, i8), distance: usize) -> Option<Position> {
        let distance = i8::try_from(distance).ok()?;
        let row = direction.0.checked_mul(distance)?.checked_add(self.row)?;
        let col = direction.1.checked_mul(distance)?.checked_add(self.col)?;
        Some(Position::new(row, col))
    }
}

impl From<(i8, i8)> for Position {
    fn from((row, col): (i8, i8)) -> Self {
        Position::new(row, col)
    }
}

impl TryFrom<&[i64]> for Position {
    type Error = ();

    /// Accepts exactly two coordinates that fit the board's integer type.
    /// Range is checked separately by `is_valid`.
    fn try_from(coords: &[i64]) -> Result<Self, Self::Error> {
        match coords {
            [row, col] => {
                let row = i8::try_from(*row).map_err(|_| ())?;
                let col = i8::try_from(*col).map_err(|_| ())?;
                Ok(Position::new(row, col))
            }
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orthogonal direction vectors (drow, dcol)
/// Index: 0=up, 1=right, 2=down, 3=left
pub const DIRECTIONS: [(i8, i8); 4] = [
    (-1, 0),
    (0, 1),
    (1, 0),
    (0, -1),
];

/// Iterate every board position in row-major order
pub fn all_positions() -> impl Iterator<Item = Position> {
    (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_validity() {
        assert!(Position::new(0, 0).is_valid());
        assert!(Position::new(5, 5).is_valid());
        assert!(Position::new(2, 4).is_valid());
        assert!(!Position::new(6, 0).is_valid());
        assert!(!Position::new(0, -1).is_valid());
    }

    #[test]
    fn test_straight_distance() {
        let p = Position::new(2, 1);
        assert_eq!(p.straight_distance(Position::new(2, 4)), Some(3));
        assert_eq!(p.straight_distance(Position::new(0, 1)), Some(2));
        assert_eq!(p.straight_distance(p), Some(0));
        assert_eq!(p.straight_distance(Position::new(3, 2)), None);
    }

    #[test]
    fn test_extreme_coordinates() {
        let low = Position::new(-100, 0);
        let high = Position::new(100, 0);
        assert_eq!(low.straight_distance(high), Some(200));
        assert_eq!(
            Position::new(i8::MIN, 3).straight_distance(Position::new(i8::MAX, 3)),
            Some(255)
        );

        assert_eq!(Position::new(2, 2).offset((0, 1), 3), Some(Position::new(2, 5)));
        assert_eq!(Position::new(2, 2).offset((-1, 0), 3), Some(Position::new(-1, 2)));
        assert_eq!(Position::new(120, 0).offset((1, 0), 10), None);
        assert_eq!(Position::new(0, 0).offset((0, 1), 300), None);
    }

    #[test]
    fn test_try_from_slice() {
        assert_eq!(Position::try_from(&[1i64, 2][..]), Ok(Position::new(1, 2)));
        // Range is not checked here
        assert_eq!(Position::try_from(&[9i64, -3][..]), Ok(Position::new(9, -3)));
        assert!(Position::try_from(&[1i64][..]).is_err());
        assert!(Position::try_from(&[1i64, 2, 3][..]).is_err());
        assert!(Position::try_from(&[1000i64, 0][..]).is_err());
    }

    #[test]
    fn test_all_positions() {
        let positions: Vec<_> = all_positions().collect();
        assert_eq!(positions.len(), CELL_COUNT);
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[7], Position::new(1, 1));
        assert!(positions.iter().enumerate().all(|(i, p)| p.index() == i));
    }
}
