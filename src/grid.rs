use std::fmt;

use tracing::debug;

use crate::cells::{CellKind, Direction, Position, PositionSmallVec, ALL_DIRECTIONS};
use crate::errors::*;
use crate::grid_iterators::{IslandIter, PassagesIter, RowsIter};
use crate::units::{ColumnLength, ColumnsCount, RowLength, RowsCount};

/// The maze as a rectangle of cells: islands for the logical maze cells with walls and
/// intersections packed around and between them.
///
/// A maze of `m` rows and `n` columns is stored as `(2m + 1) x (2n + 1)` cells, row major.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellKind>,
    logical_rows: RowsCount,
    logical_columns: ColumnsCount,
    row_length: RowLength,
    column_length: ColumnLength,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CarveError {
    InvalidPosition,
    Intersection,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "Grid :: logical rows: {:?}, logical columns: {:?}, row length: {:?}, column length: {:?}",
               self.logical_rows,
               self.logical_columns,
               self.row_length,
               self.column_length)
    }
}

impl Grid {
    /// Build the fully walled grid for a maze of `rows` x `columns` logical cells.
    ///
    /// Fails with `ErrorKind::InvalidDimension` when either count is below 2 and with
    /// `ErrorKind::DimensionsTooLarge` when the walled grid would exceed `MAX_GRID_CELLS`;
    /// nothing is allocated in either case.
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<Grid> {
        validate_dimensions(rows.0, columns.0)?;

        let too_large = || Error::from(ErrorKind::DimensionsTooLarge(rows.0, columns.0));
        let RowLength(row_length) = columns.grid_length().ok_or_else(too_large)?;
        let ColumnLength(column_length) = rows.grid_length().ok_or_else(too_large)?;
        let cells_count = row_length.checked_mul(column_length).ok_or_else(too_large)?;

        let mut cells = Vec::with_capacity(cells_count);
        for row in 0..column_length {
            let (even_kind, odd_kind) = if row % 2 == 0 {
                (CellKind::Intersection, CellKind::HorizontalWall)
            } else {
                (CellKind::VerticalWall, CellKind::Island)
            };
            cells.extend((0..row_length).map(|column| if column % 2 == 0 { even_kind } else { odd_kind }));
        }

        debug!("Allocated {}x{} grid for a {}x{} maze",
               column_length,
               row_length,
               rows.0,
               columns.0);

        Ok(Grid {
            cells,
            logical_rows: rows,
            logical_columns: columns,
            row_length: RowLength(row_length),
            column_length: ColumnLength(column_length),
        })
    }

    #[inline]
    pub fn logical_rows(&self) -> RowsCount {
        self.logical_rows
    }

    #[inline]
    pub fn logical_columns(&self) -> ColumnsCount {
        self.logical_columns
    }

    /// Cells in one grid row, walls included.
    #[inline]
    pub fn row_length(&self) -> RowLength {
        self.row_length
    }

    /// Cells in one grid column, walls included.
    #[inline]
    pub fn column_length(&self) -> ColumnLength {
        self.column_length
    }

    /// Total number of cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Number of islands, one per logical maze cell.
    #[inline]
    pub fn islands_count(&self) -> usize {
        self.logical_rows.0 * self.logical_columns.0
    }

    #[inline]
    pub fn is_valid_position(&self, pos: Position) -> bool {
        pos.row < self.column_length.0 && pos.column < self.row_length.0
    }

    #[inline]
    pub fn is_boundary_position(&self, pos: Position) -> bool {
        self.is_valid_position(pos) &&
        (pos.row == 0 || pos.column == 0 || pos.row == self.column_length.0 - 1 ||
         pos.column == self.row_length.0 - 1)
    }

    /// Convert a grid position to its row major index, None if the position is off the grid.
    #[inline]
    pub fn position_to_index(&self, pos: Position) -> Option<usize> {
        if self.is_valid_position(pos) {
            Some(pos.row * self.row_length.0 + pos.column)
        } else {
            None
        }
    }

    #[inline]
    pub fn index_to_position(&self, index: usize) -> Position {
        Position::new(index / self.row_length.0, index % self.row_length.0)
    }

    pub fn kind_at(&self, pos: Position) -> Option<CellKind> {
        self.position_to_index(pos).map(|index| self.cells[index])
    }

    #[inline]
    pub fn is_unvisited_island(&self, pos: Position) -> bool {
        self.kind_at(pos) == Some(CellKind::Island)
    }

    /// Carve a cell open. Deleting an already deleted cell is a no-op.
    ///
    /// Intersections are never opened: every passage runs through a wall cell.
    pub fn delete(&mut self, pos: Position) -> ::std::result::Result<(), CarveError> {
        let index = self.position_to_index(pos).ok_or(CarveError::InvalidPosition)?;
        match self.cells[index] {
            CellKind::Intersection => Err(CarveError::Intersection),
            _ => {
                self.cells[index] = CellKind::Deleted;
                Ok(())
            }
        }
    }

    /// Carve a cell the caller knows to be an on-grid island or wall.
    pub(crate) fn open(&mut self, pos: Position) {
        let carved = self.delete(pos);
        debug_assert!(carved.is_ok(), "cannot open {:?}: {:?}", pos, carved);
    }

    /// The position `steps` cells away in `direction`, if it is still on the grid.
    pub fn neighbour_at_direction(&self,
                                  pos: Position,
                                  direction: Direction,
                                  steps: usize)
                                  -> Option<Position> {
        direction.offset(pos, steps).filter(|neighbour| self.is_valid_position(*neighbour))
    }

    /// Islands adjacent to the island at `pos`, whether or not the wall between them is open.
    pub fn neighbours(&self, pos: Position) -> PositionSmallVec {
        ALL_DIRECTIONS.iter()
            .filter_map(|dir| self.neighbour_at_direction(pos, *dir, 2))
            .collect()
    }

    /// Islands joined to the island at `pos` by an opened wall.
    /// None if `pos` is not an island position on this grid.
    pub fn links(&self, pos: Position) -> Option<PositionSmallVec> {
        if !self.is_valid_position(pos) || !pos.is_island_position() {
            return None;
        }

        let linked = ALL_DIRECTIONS.iter()
            .filter_map(|dir| {
                let wall = self.neighbour_at_direction(pos, *dir, 1)?;
                let island = self.neighbour_at_direction(pos, *dir, 2)?;
                if self.kind_at(wall) == Some(CellKind::Deleted) {
                    Some(island)
                } else {
                    None
                }
            })
            .collect();
        Some(linked)
    }

    /// Are two adjacent islands joined by an opened wall?
    pub fn is_linked(&self, a: Position, b: Position) -> bool {
        if !a.is_island_position() || !b.is_island_position() {
            return false;
        }
        let distance = a.row.max(b.row) - a.row.min(b.row) + a.column.max(b.column) -
                       a.column.min(b.column);
        if distance != 2 {
            return false;
        }
        a.midpoint(b).map_or(false, |wall| self.kind_at(wall) == Some(CellKind::Deleted))
    }

    pub fn count_kind(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// Opened cells on the outer ring of the grid, row major.
    pub fn boundary_openings(&self) -> Vec<Position> {
        (0..self.size())
            .map(|index| self.index_to_position(index))
            .filter(|pos| self.is_boundary_position(*pos))
            .filter(|pos| self.kind_at(*pos) == Some(CellKind::Deleted))
            .collect()
    }

    /// Number of opened walls joining two islands.
    pub fn passages_count(&self) -> usize {
        self.iter_passages().count()
    }

    #[inline]
    pub fn iter_islands(&self) -> IslandIter {
        IslandIter::new(self.logical_rows, self.logical_columns)
    }

    #[inline]
    pub fn iter_rows(&self) -> RowsIter {
        self.cells.chunks(self.row_length.0)
    }

    #[inline]
    pub fn iter_passages(&self) -> PassagesIter {
        PassagesIter::new(self)
    }
}
