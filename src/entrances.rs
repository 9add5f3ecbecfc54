use rand::Rng;
use tracing::debug;

use crate::cells::Position;
use crate::grid::Grid;
use crate::units::{ColumnIndex, RowIndex};

/// Where the maze is entered and left.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Entrances {
    /// An island on the bottom island row, open to the outside through the wall below it.
    pub start: Position,
    /// An island on the top island row, open to the outside through the wall above it.
    pub end: Position,
}

/// Open the maze to the outside on its bottom and top edges.
///
/// The start column is drawn first and the end column second, each uniformly over the
/// island columns; the two may coincide. The start island and the boundary wall below it
/// are carved, as is the boundary wall above the end island. The end island itself is left
/// for the path carver to reach.
pub fn place_entrances<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Entrances {
    let columns = grid.logical_columns().0;
    let last_row = RowIndex(grid.logical_rows().0 - 1);

    let start = Position::of_island(last_row, ColumnIndex(rng.gen_range(0..columns)));
    let end = Position::of_island(RowIndex(0), ColumnIndex(rng.gen_range(0..columns)));

    // Island rows are odd, so the boundary walls one cell out are always on the grid.
    grid.open(start);
    grid.open(Position::new(start.row + 1, start.column));
    grid.open(Position::new(end.row - 1, end.column));

    debug!("Placed maze entrance at {:?} and exit at {:?}", start, end);

    Entrances { start, end }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use super::*;
    use crate::cells::CellKind;
    use crate::units::{ColumnsCount, RowsCount};

    fn small_grid(rows: usize, columns: usize) -> Grid {
        Grid::new(RowsCount(rows), ColumnsCount(columns)).expect("valid grid dimensions")
    }

    #[test]
    fn always_zero_source_picks_the_first_columns() {
        let mut g = small_grid(3, 4);
        let mut rng = StepRng::new(0, 0);
        let entrances = place_entrances(&mut g, &mut rng);
        assert_eq!(entrances.start, Position::new(5, 1));
        assert_eq!(entrances.end, Position::new(1, 1));
    }

    #[test]
    fn only_three_cells_change() {
        let fresh = small_grid(4, 5);
        let mut g = fresh.clone();
        let mut rng = XorShiftRng::seed_from_u64(7);
        let Entrances { start, end } = place_entrances(&mut g, &mut rng);

        let below_start = Position::new(start.row + 1, start.column);
        let above_end = Position::new(end.row - 1, end.column);
        for index in 0..g.size() {
            let pos = g.index_to_position(index);
            if pos == start || pos == below_start || pos == above_end {
                assert_eq!(g.kind_at(pos), Some(CellKind::Deleted));
            } else {
                assert_eq!(g.kind_at(pos), fresh.kind_at(pos), "{:?} changed", pos);
            }
        }
        assert_eq!(g.kind_at(end), Some(CellKind::Island));
    }

    #[test]
    fn entrances_sit_on_opposite_edges() {
        let mut rng = XorShiftRng::seed_from_u64(1234);
        for _ in 0..200 {
            let mut g = small_grid(5, 6);
            let Entrances { start, end } = place_entrances(&mut g, &mut rng);
            assert_eq!(start.row, g.column_length().0 - 2);
            assert_eq!(end.row, 1);
            assert!(start.is_island_position() && end.is_island_position());
            assert!(start.column <= g.row_length().0 - 2);
            assert!(end.column <= g.row_length().0 - 2);

            let openings = g.boundary_openings();
            assert_eq!(openings,
                       vec![Position::new(0, end.column),
                            Position::new(g.column_length().0 - 1, start.column)]);
        }
    }

    #[test]
    fn every_column_gets_chosen() {
        let mut rng = XorShiftRng::seed_from_u64(99);
        let mut start_columns_seen = [false; 4];
        let mut end_columns_seen = [false; 4];
        for _ in 0..400 {
            let mut g = small_grid(2, 4);
            let Entrances { start, end } = place_entrances(&mut g, &mut rng);
            start_columns_seen[start.column / 2] = true;
            end_columns_seen[end.column / 2] = true;
        }
        assert!(start_columns_seen.iter().all(|&seen| seen));
        assert!(end_columns_seen.iter().all(|&seen| seen));
    }
}
