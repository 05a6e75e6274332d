//! Heap-backed two-dimensional storage.
//!
//! A [`Table`] is a row-major `rows × columns` array whose every cell is
//! populated at construction. Both the grid of cell kinds and the solver's
//! optimal-value table are built on it.

use std::ops::{Index, IndexMut};

/// Dense row-major 2-D array indexed by `(row, column)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table<T> {
    rows: usize,
    columns: usize,
    cells: Vec<T>,
}

impl<T: Clone> Table<T> {
    /// Create a table with every cell set to `fill`.
    pub fn filled(rows: usize, columns: usize, fill: T) -> Self {
        Self {
            rows,
            columns,
            cells: vec![fill; rows * columns],
        }
    }
}

impl<T> Table<T> {
    /// Build a table from cells already laid out in row-major order.
    ///
    /// # Panics
    /// Panics if `cells.len() != rows * columns`.
    pub fn from_row_major(rows: usize, columns: usize, cells: Vec<T>) -> Self {
        assert_eq!(
            cells.len(),
            rows * columns,
            "row-major storage must hold rows * columns cells"
        );
        Self {
            rows,
            columns,
            cells,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn contains(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns
    }

    /// Borrow the cell at `(row, column)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        if self.contains(row, column) {
            Some(&self.cells[row * self.columns + column])
        } else {
            None
        }
    }

    /// Iterate over rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // `chunks_exact(0)` panics, so zero-width tables yield nothing.
        let width = self.columns.max(1);
        self.cells.chunks_exact(width).take(self.rows)
    }

    #[inline]
    fn offset(&self, row: usize, column: usize) -> usize {
        assert!(
            self.contains(row, column),
            "({row}, {column}) out of bounds for {}x{} table",
            self.rows,
            self.columns
        );
        row * self.columns + column
    }
}

impl<T> Index<(usize, usize)> for Table<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, column): (usize, usize)) -> &T {
        &self.cells[self.offset(row, column)]
    }
}

impl<T> IndexMut<(usize, usize)> for Table<T> {
    #[inline]
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        let offset = self.offset(row, column);
        &mut self.cells[offset]
    }
}

#[cfg(test)]
mod tests {
    use super::Table;

    #[test]
    fn filled_table_has_every_cell() {
        let t = Table::filled(2, 3, 7u8);
        assert_eq!(t.rows(), 2);
        assert_eq!(t.columns(), 3);
        for r in 0..2 {
            for c in 0..3 {
                assert_eq!(t[(r, c)], 7);
            }
        }
    }

    #[test]
    fn row_major_layout() {
        let t = Table::from_row_major(2, 2, vec!['a', 'b', 'c', 'd']);
        assert_eq!(t[(0, 1)], 'b');
        assert_eq!(t[(1, 0)], 'c');
        let rows: Vec<&[char]> = t.iter_rows().collect();
        assert_eq!(rows, vec![&['a', 'b'][..], &['c', 'd'][..]]);
    }

    #[test]
    fn get_is_bounds_checked() {
        let t = Table::filled(1, 2, ());
        assert!(t.get(0, 1).is_some());
        assert!(t.get(1, 0).is_none());
        assert!(t.get(0, 2).is_none());
    }

    #[test]
    fn index_mut_writes_in_place() {
        let mut t = Table::filled(2, 2, 0i32);
        t[(1, 1)] = 5;
        assert_eq!(t.get(1, 1), Some(&5));
        assert_eq!(t.get(0, 0), Some(&0));
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds_panics() {
        let t = Table::filled(2, 2, 0i32);
        let _ = t[(2, 0)];
    }

    #[test]
    #[should_panic]
    fn mismatched_storage_panics() {
        let _ = Table::from_row_major(2, 2, vec![0; 3]);
    }
}
