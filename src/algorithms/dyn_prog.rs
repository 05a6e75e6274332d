//! Dynamic-programming crane unloading solver.
//!
//! We fill an optimal-value table `V` row by row, where `V(r, c)` is the most
//! cranes any legal path from (0, 0) can collect on its way to `(r, c)`:
//!
//! ```text
//! V(r, c) = unreachable                          if (r, c) is a building
//! V(0, 0) = crane(0, 0)
//! V(r, c) = max(V(r-1, c), V(r, c-1)) + crane(r, c)
//! ```
//!
//! with unreachable ordered below every count, so it only wins when both
//! predecessors are unreachable. The path is then recovered by walking back
//! from the finish cell to the predecessor holding the larger value,
//! preferring the cell above on ties, and replaying the reversed steps onto
//! a fresh [`Path`]. Time and space are O(rows × columns).

use crate::error::{CranesError, Result};
use crate::grid::Grid;
use crate::path::{Path, StepDirection};
use crate::table::Table;
use crate::traits::CraneSolver;

/// Best crane count of a path ending at a cell.
///
/// `Unreachable` is declared first so the derived ordering places it below
/// every `Cranes` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Reach {
    #[default]
    Unreachable,
    Cranes(u32),
}

impl Reach {
    #[inline]
    pub fn is_reachable(self) -> bool {
        matches!(self, Reach::Cranes(_))
    }

    /// Crane count, or `None` when unreachable.
    #[inline]
    pub fn cranes(self) -> Option<u32> {
        match self {
            Reach::Cranes(n) => Some(n),
            Reach::Unreachable => None,
        }
    }

    /// Step onto a cell, collecting its crane if it has one.
    #[inline]
    fn enter(self, crane: bool) -> Self {
        match self {
            Reach::Cranes(n) => Reach::Cranes(n + u32::from(crane)),
            Reach::Unreachable => Reach::Unreachable,
        }
    }
}

/// The optimal-value table `V` for one grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueTable {
    values: Table<Reach>,
}

impl ValueTable {
    /// Fill the table for `grid` in row-major order.
    pub fn compute(grid: &Grid) -> Self {
        #[cfg(feature = "tracing")]
        let _span =
            tracing::trace_span!("value_table", rows = grid.rows(), columns = grid.columns())
                .entered();

        let mut values = Table::filled(grid.rows(), grid.columns(), Reach::Unreachable);
        for r in 0..grid.rows() {
            for c in 0..grid.columns() {
                let kind = grid.get(r, c);
                if kind.is_building() {
                    continue;
                }
                let before = if r == 0 && c == 0 {
                    Reach::Cranes(0)
                } else {
                    let above = if r > 0 { values[(r - 1, c)] } else { Reach::Unreachable };
                    let left = if c > 0 { values[(r, c - 1)] } else { Reach::Unreachable };
                    above.max(left)
                };
                values[(r, c)] = before.enter(kind.is_crane());
            }
        }
        Self { values }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.values.rows()
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.values.columns()
    }

    /// `V(row, column)`.
    ///
    /// # Panics
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Reach {
        self.values[(row, column)]
    }

    /// Value at the finish cell.
    pub fn optimum(&self) -> Reach {
        self.get(self.rows() - 1, self.columns() - 1)
    }

    /// Walk back from the finish cell and return the forward step sequence
    /// of one optimal path.
    pub fn reconstruct(&self) -> Result<Vec<StepDirection>> {
        let (mut r, mut c) = (self.rows() - 1, self.columns() - 1);
        if !self.optimum().is_reachable() {
            return Err(CranesError::NoLegalPath {
                rows: self.rows(),
                columns: self.columns(),
            });
        }

        let mut steps = Vec::with_capacity(r + c);
        while r > 0 || c > 0 {
            let above = if r > 0 { self.get(r - 1, c) } else { Reach::Unreachable };
            let left = if c > 0 { self.get(r, c - 1) } else { Reach::Unreachable };
            match (above, left) {
                (Reach::Unreachable, Reach::Unreachable) => {
                    unreachable!("reachable cell ({r}, {c}) has no reachable predecessor")
                }
                (above, left) if above >= left => {
                    steps.push(StepDirection::South);
                    r -= 1;
                }
                _ => {
                    steps.push(StepDirection::East);
                    c -= 1;
                }
            }
        }
        steps.reverse();
        Ok(steps)
    }
}

/// Linear-time solver driven by a [`ValueTable`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DynProgSolver;

impl CraneSolver for DynProgSolver {
    fn name(&self) -> &'static str {
        "dyn-prog"
    }

    fn solve<'g>(&self, grid: &'g Grid) -> Result<Path<'g>> {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("dyn_prog", rows = grid.rows(), columns = grid.columns());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let table = ValueTable::compute(grid);
        let steps = {
            #[cfg(feature = "tracing")]
            let _span = tracing::trace_span!("reconstruct").entered();
            table.reconstruct()?
        };
        let path = Path::from_steps(grid, steps)?;
        debug_assert_eq!(table.optimum().cranes(), Some(path.total_cranes()));

        #[cfg(feature = "tracing")]
        tracing::debug!(cranes = path.total_cranes(), steps = path.len(), "dyn-prog optimum");
        Ok(path)
    }
}

/// Solve the crane unloading problem by dynamic programming.
pub fn crane_unloading_dyn_prog(grid: &Grid) -> Result<Path<'_>> {
    DynProgSolver.solve(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use StepDirection::{East, South};

    fn grid(text: &str) -> Grid {
        text.parse().unwrap()
    }

    #[test]
    fn reach_orders_unreachable_lowest() {
        assert!(Reach::Unreachable < Reach::Cranes(0));
        assert!(Reach::Cranes(0) < Reach::Cranes(1));
        assert_eq!(Reach::Unreachable.max(Reach::Cranes(0)), Reach::Cranes(0));
        assert_eq!(Reach::Cranes(3).cranes(), Some(3));
        assert_eq!(Reach::Unreachable.cranes(), None);
    }

    #[test]
    fn table_distinguishes_zero_from_unreachable() {
        let g = grid("..X\n.X.\n...");
        let t = ValueTable::compute(&g);
        assert_eq!(t.get(0, 0), Reach::Cranes(0));
        assert_eq!(t.get(0, 2), Reach::Unreachable);
        assert_eq!(t.get(1, 1), Reach::Unreachable);
        // (1, 2) only has unreachable predecessors.
        assert_eq!(t.get(1, 2), Reach::Unreachable);
        assert_eq!(t.get(2, 2), Reach::Cranes(0));
    }

    #[test]
    fn table_values_follow_recurrence() {
        let g = grid("c.c\n.cc\nc.c");
        let t = ValueTable::compute(&g);
        let expected = [[1, 1, 2], [1, 2, 3], [2, 2, 4]];
        for (r, row) in expected.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                assert_eq!(t.get(r, c), Reach::Cranes(v), "V({r}, {c})");
            }
        }
        assert_eq!(t.optimum(), Reach::Cranes(4));
    }

    #[test]
    fn single_cells() {
        let crane = grid("c");
        let p = crane_unloading_dyn_prog(&crane).unwrap();
        assert!(p.is_empty());
        assert_eq!(p.total_cranes(), 1);

        let empty = grid(".");
        assert_eq!(crane_unloading_dyn_prog(&empty).unwrap().total_cranes(), 0);

        let building = grid("X");
        assert_eq!(
            crane_unloading_dyn_prog(&building),
            Err(CranesError::NoLegalPath {
                rows: 1,
                columns: 1
            })
        );
    }

    #[test]
    fn ties_prefer_the_cell_above() {
        let g = grid(".c\nc.");
        let p = crane_unloading_dyn_prog(&g).unwrap();
        assert_eq!(p.total_cranes(), 1);
        assert_eq!(p.steps(), &[East, South]);

        let flat = grid("...\n...");
        assert_eq!(
            crane_unloading_dyn_prog(&flat).unwrap().steps(),
            &[East, East, South]
        );
    }

    #[test]
    fn routes_around_buildings() {
        let g = grid(".X.\n.X.\nc.c");
        let p = crane_unloading_dyn_prog(&g).unwrap();
        assert_eq!(p.steps(), &[South, South, East, East]);
        assert_eq!(p.total_cranes(), 2);
    }

    #[test]
    fn picks_the_richer_branch() {
        let g = grid(".cc\n...\nc..");
        let p = crane_unloading_dyn_prog(&g).unwrap();
        assert_eq!(p.total_cranes(), 2);
        assert_eq!(p.steps(), &[East, East, South, South]);
    }

    #[test]
    fn unreachable_finish_is_no_path() {
        for text in ["..\n.X", ".X\nX.", "X.\n.."] {
            let g = grid(text);
            assert!(
                matches!(
                    crane_unloading_dyn_prog(&g),
                    Err(CranesError::NoLegalPath { .. })
                ),
                "{text:?}"
            );
        }
    }

    #[test]
    fn single_row_and_column() {
        let row = grid(".c.c");
        let p = crane_unloading_dyn_prog(&row).unwrap();
        assert_eq!(p.steps(), &[East, East, East]);
        assert_eq!(p.total_cranes(), 2);

        let column = grid("c\n.\nc");
        let p = crane_unloading_dyn_prog(&column).unwrap();
        assert_eq!(p.steps(), &[South, South]);
        assert_eq!(p.total_cranes(), 2);
    }
}
