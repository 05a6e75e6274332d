//! The crane unloading board.
//!
//! A [`Grid`] is an immutable rectangle of [`CellKind`]s. It is parsed from
//! or printed to a small text format, one line per row:
//!
//! ```text
//! .c.X
//! ..c.
//! X...
//! ```
//!
//! where `.` is empty, `c` is a crane and `X` is a building.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{CranesError, Result};
use crate::table::Table;

/// Classification of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    #[default]
    Empty,
    Crane,
    Building,
}

impl CellKind {
    #[inline]
    pub fn is_crane(self) -> bool {
        matches!(self, CellKind::Crane)
    }

    #[inline]
    pub fn is_building(self) -> bool {
        matches!(self, CellKind::Building)
    }

    /// Canonical text symbol for this kind.
    pub fn symbol(self) -> char {
        match self {
            CellKind::Empty => '.',
            CellKind::Crane => 'c',
            CellKind::Building => 'X',
        }
    }

    /// Parse a text symbol; cranes and buildings are case-insensitive.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(CellKind::Empty),
            'c' | 'C' => Some(CellKind::Crane),
            'x' | 'X' => Some(CellKind::Building),
            _ => None,
        }
    }
}

/// Immutable rectangular array of cell kinds, at least 1×1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Table<CellKind>,
}

impl Grid {
    /// Create an all-empty grid.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!(
            rows > 0 && columns > 0,
            "grid dimensions must be positive, got {rows}x{columns}"
        );
        Self {
            cells: Table::filled(rows, columns, CellKind::Empty),
        }
    }

    /// Build a grid from explicit rows.
    pub fn from_rows(rows: Vec<Vec<CellKind>>) -> Result<Self> {
        let expected = rows.first().map_or(0, Vec::len);
        if rows.is_empty() || expected == 0 {
            return Err(CranesError::EmptyGrid);
        }
        let height = rows.len();
        let mut cells = Vec::with_capacity(height * expected);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != expected {
                return Err(CranesError::RaggedRow {
                    row,
                    expected,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }
        Ok(Self {
            cells: Table::from_row_major(height, expected, cells),
        })
    }

    /// Generate a random grid with `cranes` cranes and `buildings`
    /// buildings on distinct cells.
    ///
    /// The start and finish cells are always left empty. The finish is not
    /// guaranteed to be reachable.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        columns: usize,
        cranes: usize,
        buildings: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(CranesError::EmptyGrid);
        }
        let cells = rows
            .checked_mul(columns)
            .ok_or(CranesError::GridTooLarge { rows, columns })?;
        // start and finish stay empty; they coincide on a 1x1 grid
        let available = cells - if cells == 1 { 1 } else { 2 };
        let requested = match cranes.checked_add(buildings) {
            Some(n) if n <= available => n,
            _ => {
                return Err(CranesError::TooManyFeatures {
                    requested: cranes.saturating_add(buildings),
                    available,
                })
            }
        };

        let mut grid = Self::new(rows, columns);
        let finish = cells - 1;
        let mut free: Vec<usize> = (1..finish).collect();
        free.shuffle(rng);
        for (n, &cell) in free[..requested].iter().enumerate() {
            let kind = if n < cranes {
                CellKind::Crane
            } else {
                CellKind::Building
            };
            grid.set(cell / columns, cell % columns, kind);
        }
        Ok(grid)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.cells.columns()
    }

    /// Cell kind at `(row, column)`.
    ///
    /// # Panics
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> CellKind {
        self.cells[(row, column)]
    }

    /// Cell kind at `(row, column)`, or `None` when out of bounds.
    #[inline]
    pub fn try_get(&self, row: usize, column: usize) -> Option<CellKind> {
        self.cells.get(row, column).copied()
    }

    /// Overwrite one cell. Only meant for building a grid before solving.
    ///
    /// # Panics
    /// Panics if the coordinate is out of bounds.
    pub fn set(&mut self, row: usize, column: usize, kind: CellKind) {
        self.cells[(row, column)] = kind;
    }

    /// Coordinates of the finish cell, `(rows - 1, columns - 1)`.
    #[inline]
    pub fn finish(&self) -> (usize, usize) {
        (self.rows() - 1, self.columns() - 1)
    }

    /// Number of crane cells anywhere on the board.
    pub fn crane_count(&self) -> usize {
        self.cells
            .iter_rows()
            .flatten()
            .filter(|k| k.is_crane())
            .count()
    }

    /// Iterate over rows of cell kinds.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellKind]> + '_ {
        self.cells.iter_rows()
    }
}

impl FromStr for Grid {
    type Err = CranesError;

    fn from_str(s: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let row = rows.len();
            let cells = line
                .chars()
                .enumerate()
                .map(|(column, symbol)| {
                    CellKind::from_symbol(symbol).ok_or(CranesError::InvalidCell {
                        row,
                        column,
                        symbol,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            rows.push(cells);
        }
        Self::from_rows(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for kind in row {
                write!(f, "{}", kind.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn parses_symbols_and_ignores_blank_lines() {
        let grid: Grid = "\n  .cX\n\n C.x \n".parse().unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.get(0, 0), CellKind::Empty);
        assert_eq!(grid.get(0, 1), CellKind::Crane);
        assert_eq!(grid.get(0, 2), CellKind::Building);
        assert_eq!(grid.get(1, 0), CellKind::Crane);
        assert_eq!(grid.get(1, 2), CellKind::Building);
        assert_eq!(grid.crane_count(), 2);
    }

    #[test]
    fn display_round_trips() {
        let text = ".c.X\n..c.\nX...\n";
        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn rejects_empty_and_ragged_input() {
        assert_eq!("".parse::<Grid>(), Err(CranesError::EmptyGrid));
        assert_eq!("\n \n".parse::<Grid>(), Err(CranesError::EmptyGrid));
        assert_eq!(
            "..\n...".parse::<Grid>(),
            Err(CranesError::RaggedRow {
                row: 1,
                expected: 2,
                found: 3
            })
        );
        assert_eq!(Grid::from_rows(vec![vec![]]), Err(CranesError::EmptyGrid));
    }

    #[test]
    fn rejects_unknown_symbols() {
        assert_eq!(
            "..\n.#".parse::<Grid>(),
            Err(CranesError::InvalidCell {
                row: 1,
                column: 1,
                symbol: '#'
            })
        );
    }

    #[test]
    fn try_get_is_bounds_checked() {
        let grid = Grid::new(2, 3);
        assert_eq!(grid.try_get(1, 2), Some(CellKind::Empty));
        assert_eq!(grid.try_get(2, 0), None);
        assert_eq!(grid.finish(), (1, 2));
    }

    #[test]
    #[should_panic]
    fn zero_sized_grid_panics() {
        let _ = Grid::new(0, 3);
    }

    #[test]
    fn random_grid_places_requested_features() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::random(5, 6, 8, 4, &mut rng).unwrap();
        let buildings = grid
            .iter_rows()
            .flatten()
            .filter(|k| k.is_building())
            .count();
        assert_eq!(grid.crane_count(), 8);
        assert_eq!(buildings, 4);
        assert_eq!(grid.get(0, 0), CellKind::Empty);
        assert_eq!(grid.get(4, 5), CellKind::Empty);
    }

    #[test]
    fn random_grid_is_seed_deterministic() {
        let a = Grid::random(6, 6, 5, 5, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = Grid::random(6, 6, 5, 5, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn random_grid_rejects_overfull_requests() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Grid::random(2, 2, 2, 1, &mut rng),
            Err(CranesError::TooManyFeatures {
                requested: 3,
                available: 2
            })
        );
        let single = Grid::random(1, 1, 0, 0, &mut rng).unwrap();
        assert_eq!(single.get(0, 0), CellKind::Empty);
    }

    #[test]
    fn random_grid_rejects_counts_that_overflow() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Grid::random(3, 3, usize::MAX, 1, &mut rng),
            Err(CranesError::TooManyFeatures {
                requested: usize::MAX,
                available: 7
            })
        );
        assert_eq!(
            Grid::random(usize::MAX, 2, 0, 0, &mut rng),
            Err(CranesError::GridTooLarge {
                rows: usize::MAX,
                columns: 2
            })
        );
    }
}
