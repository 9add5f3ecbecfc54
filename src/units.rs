/// Number of logical maze rows (`m`).
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowsCount(pub usize);
/// Number of logical maze columns (`n`).
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnsCount(pub usize);

/// Length of one grid row, walls included (`2n + 1`).
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowLength(pub usize);
/// Length of one grid column, walls included (`2m + 1`).
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnLength(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowIndex(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnIndex(pub usize);

impl RowsCount {
    /// Grid rows needed to hold this many logical rows plus their walls, `None` when that
    /// does not fit in a `usize`.
    #[inline]
    pub fn grid_length(self) -> Option<ColumnLength> {
        walled_length(self.0).map(ColumnLength)
    }
}

impl ColumnsCount {
    /// Grid columns needed to hold this many logical columns plus their walls, `None` when
    /// that does not fit in a `usize`.
    #[inline]
    pub fn grid_length(self) -> Option<RowLength> {
        walled_length(self.0).map(RowLength)
    }
}

/// Total cells of the walled grid for `rows` x `columns` logical cells.
pub fn grid_cells_count(rows: RowsCount, columns: ColumnsCount) -> Option<usize> {
    let ColumnLength(column_length) = rows.grid_length()?;
    let RowLength(row_length) = columns.grid_length()?;
    row_length.checked_mul(column_length)
}

#[inline]
fn walled_length(count: usize) -> Option<usize> {
    count.checked_mul(2)?.checked_add(1)
}

impl RowIndex {
    /// The grid row of the island in logical row `self`.
    #[inline]
    pub fn island_row(self) -> usize {
        2 * self.0 + 1
    }
}

impl ColumnIndex {
    /// The grid column of the island in logical column `self`.
    #[inline]
    pub fn island_column(self) -> usize {
        2 * self.0 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_lengths_include_walls() {
        assert_eq!(RowsCount(2).grid_length(), Some(ColumnLength(5)));
        assert_eq!(ColumnsCount(7).grid_length(), Some(RowLength(15)));
        assert_eq!(grid_cells_count(RowsCount(2), ColumnsCount(7)), Some(75));
    }

    #[test]
    fn oversized_counts_do_not_overflow() {
        assert_eq!(RowsCount(usize::MAX / 2).grid_length(), Some(ColumnLength(usize::MAX)));
        assert_eq!(RowsCount(usize::MAX / 2 + 1).grid_length(), None);
        assert_eq!(ColumnsCount(usize::MAX).grid_length(), None);
        assert_eq!(grid_cells_count(RowsCount(usize::MAX / 4), ColumnsCount(usize::MAX / 4)), None);
        assert_eq!(grid_cells_count(RowsCount(2), ColumnsCount(usize::MAX)), None);
    }

    #[test]
    fn island_indices_are_odd() {
        assert_eq!(RowIndex(0).island_row(), 1);
        assert_eq!(RowIndex(3).island_row(), 7);
        assert_eq!(ColumnIndex(4).island_column(), 9);
    }
}
