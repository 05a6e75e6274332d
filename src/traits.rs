//! Core trait definition shared by the crane unloading solvers.
//!
//! Both algorithms in [`crate::algorithms`] implement [`CraneSolver`], so the
//! engine, the binaries and the tests can treat them interchangeably:
//! - the exhaustive search is the correctness oracle for small grids,
//! - the dynamic program is the practical solver for real-size grids.
//!
//! Implementations must be pure: they read the grid, allocate their own
//! working state for the duration of the call, and keep nothing between
//! calls. This is what makes a solver safe to share across threads.

use crate::error::Result;
use crate::grid::Grid;
use crate::path::Path;

/// A crane unloading algorithm.
///
/// Semantics:
/// - The returned [`Path`] starts at (0, 0) and ends at the finish cell
///   `(rows - 1, columns - 1)`.
/// - Every cell it visits is in bounds and not a building.
/// - Its [`total_cranes`](Path::total_cranes) is the maximum over all legal
///   monotone paths.
/// - When several paths are optimal, the choice is deterministic: solving the
///   same grid twice yields equal paths.
///
/// A grid whose finish cell cannot be reached yields
/// [`CranesError::NoLegalPath`](crate::error::CranesError::NoLegalPath).
pub trait CraneSolver {
    /// Short, stable name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Find one optimal path through `grid`.
    fn solve<'g>(&self, grid: &'g Grid) -> Result<Path<'g>>;
}

impl<S: CraneSolver + ?Sized> CraneSolver for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn solve<'g>(&self, grid: &'g Grid) -> Result<Path<'g>> {
        (**self).solve(grid)
    }
}
