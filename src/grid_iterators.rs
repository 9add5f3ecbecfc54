use std::fmt;
use std::slice;

use crate::cells::{CellKind, Position};
use crate::grid::Grid;
use crate::units::{ColumnIndex, ColumnsCount, RowIndex, RowsCount};

/// Grid rows, walls included, as slices of cells.
pub type RowsIter<'a> = slice::Chunks<'a, CellKind>;

/// Island positions in row major order, whether visited or not.
#[derive(Clone)]
pub struct IslandIter {
    columns: ColumnsCount,
    current_island_number: usize,
    islands_count: usize,
}

impl IslandIter {
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> IslandIter {
        IslandIter {
            columns,
            current_island_number: 0,
            islands_count: rows.0 * columns.0,
        }
    }
}

impl fmt::Debug for IslandIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "IslandIter :: current_island_number: {:?}, islands_count: {:?}",
               self.current_island_number,
               self.islands_count)
    }
}

impl ExactSizeIterator for IslandIter {} // default impl using size_hint()
impl Iterator for IslandIter {
    type Item = Position;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_island_number < self.islands_count {
            let ColumnsCount(width) = self.columns;
            let pos = Position::of_island(RowIndex(self.current_island_number / width),
                                          ColumnIndex(self.current_island_number % width));
            self.current_island_number += 1;
            Some(pos)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.islands_count - self.current_island_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

/// Every opened wall between two islands, given as the pair of islands it joins.
/// The upper or left island comes first.
///
/// Openings on the outer boundary join an island to the outside and are skipped.
pub struct PassagesIter<'a> {
    grid: &'a Grid,
    next_index: usize,
}

impl<'a> PassagesIter<'a> {
    pub fn new(grid: &'a Grid) -> PassagesIter<'a> {
        PassagesIter {
            grid,
            next_index: 0,
        }
    }
}

impl<'a> fmt::Debug for PassagesIter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PassagesIter :: next_index: {:?}", self.next_index)
    }
}

impl<'a> Iterator for PassagesIter<'a> {
    type Item = (Position, Position);

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_index < self.grid.size() {
            let pos = self.grid.index_to_position(self.next_index);
            self.next_index += 1;

            // wall cells have exactly one odd coordinate
            let is_wall_position = (pos.row + pos.column) % 2 == 1;
            if !is_wall_position || self.grid.is_boundary_position(pos) ||
               self.grid.kind_at(pos) != Some(CellKind::Deleted) {
                continue;
            }

            let joined = if pos.row % 2 == 1 {
                (Position::new(pos.row, pos.column - 1), Position::new(pos.row, pos.column + 1))
            } else {
                (Position::new(pos.row - 1, pos.column), Position::new(pos.row + 1, pos.column))
            };
            return Some(joined);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.grid.size() - self.next_index))
    }
}
