use std::fmt;

use rand::Rng;

use crate::cells::Position;
use crate::entrances::{place_entrances, Entrances};
use crate::errors::*;
use crate::generators::{recursive_backtracker, CarveSummary};
use crate::grid::Grid;
use crate::renderers;
use crate::units::{ColumnsCount, RowsCount};

/// A generated perfect maze: its finished grid and where it opens to the outside.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    entrances: Entrances,
    summary: CarveSummary,
}

impl Maze {
    /// Generate a maze of `rows` x `columns` logical cells.
    ///
    /// Draws the entrance column, then the exit column, then every carving choice from
    /// `rng`, so the same random sequence always yields the same maze.
    pub fn new<R: Rng + ?Sized>(rows: RowsCount, columns: ColumnsCount, rng: &mut R) -> Result<Maze> {
        let mut grid = Grid::new(rows, columns)?;
        let entrances = place_entrances(&mut grid, rng);
        let summary = recursive_backtracker(&mut grid, entrances.start, rng);

        Ok(Maze {
            grid,
            entrances,
            summary,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Position {
        self.entrances.start
    }

    #[inline]
    pub fn end(&self) -> Position {
        self.entrances.end
    }

    #[inline]
    pub fn entrances(&self) -> Entrances {
        self.entrances
    }

    #[inline]
    pub fn summary(&self) -> CarveSummary {
        self.summary
    }

    pub fn render(&self) -> Vec<String> {
        renderers::render_lines(&self.grid)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}
