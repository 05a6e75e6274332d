//! Monotone paths through a [`Grid`].
//!
//! A [`Path`] is a sequence of east/south steps anchored at the top-left
//! cell. It enforces step legality itself: every visited cell is in bounds
//! and never a building. Paths are plain values; solvers clone them freely
//! when branching.

use std::fmt;

use crate::error::{CranesError, Result};
use crate::grid::{CellKind, Grid};

/// Direction of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StepDirection {
    East,
    South,
}

impl fmt::Display for StepDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StepDirection::East => "east",
            StepDirection::South => "south",
        })
    }
}

/// A legal monotone path starting at (0, 0).
#[derive(Debug, Clone)]
pub struct Path<'g> {
    grid: &'g Grid,
    steps: Vec<StepDirection>,
    row: usize,
    column: usize,
    cranes: u32,
}

impl<'g> Path<'g> {
    /// Zero-step path sitting on the start cell.
    ///
    /// # Panics
    /// Panics if the start cell is a building.
    pub fn new(grid: &'g Grid) -> Self {
        let start = grid.get(0, 0);
        assert!(!start.is_building(), "start cell (0, 0) is a building");
        Self {
            grid,
            steps: Vec::with_capacity(grid.rows() + grid.columns() - 2),
            row: 0,
            column: 0,
            cranes: u32::from(start.is_crane()),
        }
    }

    /// Zero-step path sitting on the start cell, or
    /// [`CranesError::NoLegalPath`] if the start cell is a building.
    pub fn try_new(grid: &'g Grid) -> Result<Self> {
        if grid.get(0, 0).is_building() {
            return Err(CranesError::NoLegalPath {
                rows: grid.rows(),
                columns: grid.columns(),
            });
        }
        Ok(Self::new(grid))
    }

    /// Replay `steps` from the start cell, checking each one.
    pub fn from_steps<I>(grid: &'g Grid, steps: I) -> Result<Self>
    where
        I: IntoIterator<Item = StepDirection>,
    {
        let mut path = Self::try_new(grid)?;
        for step in steps {
            path.try_add_step(step)?;
        }
        Ok(path)
    }

    #[inline]
    pub fn final_row(&self) -> usize {
        self.row
    }

    #[inline]
    pub fn final_column(&self) -> usize {
        self.column
    }

    /// Number of crane cells visited, including the start cell.
    #[inline]
    pub fn total_cranes(&self) -> u32 {
        self.cranes
    }

    pub fn steps(&self) -> &[StepDirection] {
        &self.steps
    }

    /// Number of steps taken.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns `true` once the path ends on the finish cell.
    #[inline]
    pub fn is_complete(&self) -> bool {
        (self.row, self.column) == self.grid.finish()
    }

    fn target(&self, direction: StepDirection) -> (usize, usize) {
        match direction {
            StepDirection::East => (self.row, self.column + 1),
            StepDirection::South => (self.row + 1, self.column),
        }
    }

    /// Whether one more step in `direction` stays in bounds and off buildings.
    pub fn is_step_valid(&self, direction: StepDirection) -> bool {
        let (row, column) = self.target(direction);
        self.grid
            .try_get(row, column)
            .is_some_and(|kind| !kind.is_building())
    }

    /// Extend the path by one step.
    ///
    /// # Panics
    /// Panics if the step is not valid; check [`is_step_valid`](Self::is_step_valid)
    /// first or use [`try_add_step`](Self::try_add_step).
    pub fn add_step(&mut self, direction: StepDirection) {
        assert!(
            self.is_step_valid(direction),
            "illegal step {direction} from ({}, {})",
            self.row,
            self.column
        );
        let (row, column) = self.target(direction);
        self.row = row;
        self.column = column;
        self.cranes += u32::from(self.grid.get(row, column).is_crane());
        self.steps.push(direction);
    }

    /// Extend the path by one step, reporting an illegal step as an error.
    pub fn try_add_step(&mut self, direction: StepDirection) -> Result<()> {
        if !self.is_step_valid(direction) {
            return Err(CranesError::IllegalStep {
                row: self.row,
                column: self.column,
                direction,
            });
        }
        self.add_step(direction);
        Ok(())
    }

    /// Every cell visited, from (0, 0) to the final position.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let mut current = (0usize, 0usize);
        std::iter::once(current).chain(self.steps.iter().map(move |step| {
            match step {
                StepDirection::East => current.1 += 1,
                StepDirection::South => current.0 += 1,
            }
            current
        }))
    }

    /// The grid text with visited cells overlaid: `*` on empty cells,
    /// `@` on crane cells.
    pub fn render(&self) -> String {
        let mut visited = vec![false; self.grid.rows() * self.grid.columns()];
        for (row, column) in self.positions() {
            visited[row * self.grid.columns() + column] = true;
        }
        let mut out = String::with_capacity(visited.len() + self.grid.rows());
        for (row, cells) in self.grid.iter_rows().enumerate() {
            for (column, &kind) in cells.iter().enumerate() {
                let on_path = visited[row * self.grid.columns() + column];
                out.push(match (on_path, kind) {
                    (true, CellKind::Crane) => '@',
                    (true, _) => '*',
                    (false, kind) => kind.symbol(),
                });
            }
            out.push('\n');
        }
        out
    }
}

impl PartialEq for Path<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.steps == other.steps
    }
}

impl Eq for Path<'_> {}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[start")?;
        for step in &self.steps {
            write!(f, ", {step}")?;
        }
        f.write_str("]")
    }
}
