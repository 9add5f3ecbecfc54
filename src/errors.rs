// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules `use crate::errors::*;` to get access to everything `error_chain!` creates.
use error_chain::*;

use crate::units::{self, ColumnsCount, RowsCount};

/// Smallest accepted logical row or column count.
pub const MIN_DIMENSION: usize = 2;

/// Largest accepted grid, walls and intersections included. One byte per cell.
pub const MAX_GRID_CELLS: usize = 1 << 30;

error_chain! {
    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        InvalidDimension(rows: usize, columns: usize) {
            description("maze dimensions below the 2x2 minimum")
            display("invalid maze dimensions {}x{}: rows and columns must both be at least 2",
                    rows, columns)
        }
        DimensionsTooLarge(rows: usize, columns: usize) {
            description("maze dimensions above the supported grid size")
            display("maze dimensions {}x{} are too large: the walled grid may hold at most {} cells",
                    rows, columns, MAX_GRID_CELLS)
        }
        MalformedDimensions(input: String) {
            description("maze dimensions could not be parsed")
            display("expected two comma separated integers such as `5, 7`, got `{}`", input)
        }
        IncompleteDimensions(given: &'static str, missing: &'static str) {
            description("only one of the maze dimensions was given")
            display("{} was given without {}: pass both or neither", given, missing)
        }
        EndOfInput {
            description("input ended before maze dimensions were given")
            display("input ended before maze dimensions were given")
        }
    }
}

/// Reject logical dimensions below the minimum maze size, or whose walled grid would not
/// fit in `MAX_GRID_CELLS`.
pub fn validate_dimensions(rows: usize, columns: usize) -> Result<()> {
    if rows < MIN_DIMENSION || columns < MIN_DIMENSION {
        bail!(ErrorKind::InvalidDimension(rows, columns));
    }
    match units::grid_cells_count(RowsCount(rows), ColumnsCount(columns)) {
        Some(cells) if cells <= MAX_GRID_CELLS => Ok(()),
        _ => bail!(ErrorKind::DimensionsTooLarge(rows, columns)),
    }
}
