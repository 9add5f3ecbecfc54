use smallvec::SmallVec;

use crate::units::{ColumnIndex, RowIndex};

/// What occupies a single cell of the grid.
///
/// Wall, intersection and island cells are fixed when the grid is built. The only
/// transition is to `Deleted` when a cell is carved open, and a deleted cell stays deleted.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellKind {
    VerticalWall,
    HorizontalWall,
    Intersection,
    Island,
    Deleted,
}

impl CellKind {
    /// The character used for this kind of cell in the text rendering.
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            CellKind::VerticalWall => '|',
            CellKind::HorizontalWall => '-',
            CellKind::Intersection => '+',
            CellKind::Island => 'o',
            CellKind::Deleted => ' ',
        }
    }

}

/// A (row, column) location in the grid, walls included.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Position {
        Position { row, column }
    }

    /// The grid position of the island in logical cell (`row_index`, `column_index`).
    pub fn of_island(row_index: RowIndex, column_index: ColumnIndex) -> Position {
        Position::new(row_index.island_row(), column_index.island_column())
    }

    /// Islands sit on odd rows and odd columns.
    #[inline]
    pub fn is_island_position(&self) -> bool {
        self.row % 2 == 1 && self.column % 2 == 1
    }

    /// The cell half way to `other`, when both are on the same row or column an even distance apart.
    pub fn midpoint(&self, other: Position) -> Option<Position> {
        let same_line = self.row == other.row || self.column == other.column;
        let even_apart = (self.row + other.row) % 2 == 0 && (self.column + other.column) % 2 == 0;
        if same_line && even_apart && *self != other {
            Some(Position::new((self.row + other.row) / 2, (self.column + other.column) / 2))
        } else {
            None
        }
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

pub type DirectionSmallVec = SmallVec<[Direction; 4]>;
pub type PositionSmallVec = SmallVec<[Position; 4]>;

/// The order candidate directions are examined in.
pub const ALL_DIRECTIONS: [Direction; 4] =
    [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

impl Direction {
    /// Move `steps` cells from `from`.
    /// Returns None when the move would leave the non-negative quadrant; the upper
    /// bounds are the grid's business.
    pub fn offset(self, from: Position, steps: usize) -> Option<Position> {
        let Position { row, column } = from;
        match self {
            Direction::Up => row.checked_sub(steps).map(|r| Position::new(r, column)),
            Direction::Down => row.checked_add(steps).map(|r| Position::new(r, column)),
            Direction::Left => column.checked_sub(steps).map(|c| Position::new(row, c)),
            Direction::Right => column.checked_add(steps).map(|c| Position::new(row, c)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs() {
        let rendered: String = [CellKind::Intersection,
                                CellKind::HorizontalWall,
                                CellKind::VerticalWall,
                                CellKind::Island,
                                CellKind::Deleted]
            .iter()
            .map(|kind| kind.glyph())
            .collect();
        assert_eq!(rendered, "+-|o ");
    }

    #[test]
    fn offsets() {
        let p = Position::new(3, 3);
        assert_eq!(Direction::Up.offset(p, 2), Some(Position::new(1, 3)));
        assert_eq!(Direction::Down.offset(p, 2), Some(Position::new(5, 3)));
        assert_eq!(Direction::Left.offset(p, 2), Some(Position::new(3, 1)));
        assert_eq!(Direction::Right.offset(p, 1), Some(Position::new(3, 4)));

        let corner = Position::new(1, 1);
        assert_eq!(Direction::Up.offset(corner, 2), None);
        assert_eq!(Direction::Left.offset(corner, 2), None);
        assert_eq!(Direction::Up.offset(corner, 1), Some(Position::new(0, 1)));
    }

    #[test]
    fn island_positions() {
        assert!(Position::new(1, 1).is_island_position());
        assert!(Position::new(3, 5).is_island_position());
        assert!(!Position::new(0, 1).is_island_position());
        assert!(!Position::new(2, 2).is_island_position());
        assert_eq!(Position::of_island(RowIndex(1), ColumnIndex(2)), Position::new(3, 5));
    }

    #[test]
    fn midpoints() {
        let a = Position::new(1, 1);
        assert_eq!(a.midpoint(Position::new(1, 3)), Some(Position::new(1, 2)));
        assert_eq!(a.midpoint(Position::new(3, 1)), Some(Position::new(2, 1)));
        assert_eq!(a.midpoint(Position::new(3, 3)), None);
        assert_eq!(a.midpoint(Position::new(1, 2)), None);
        assert_eq!(a.midpoint(a), None);
    }
}
