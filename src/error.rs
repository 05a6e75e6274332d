//! Error type shared by grid construction and both solvers.

use crate::path::StepDirection;
use thiserror::Error;

/// Precondition violations reachable from caller-supplied input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CranesError {
    /// The grid has no rows or no columns.
    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    /// A row's width differs from the first row's width.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A grid text contained a symbol that is not a cell kind.
    #[error("invalid cell symbol {symbol:?} at row {row}, column {column}")]
    InvalidCell {
        row: usize,
        column: usize,
        symbol: char,
    },

    /// The grid is too large for exhaustive enumeration.
    #[error("exhaustive search needs {steps} steps, limit is {limit}")]
    TooManySteps { steps: usize, limit: usize },

    /// No legal path joins the start cell to the finish cell.
    #[error("no legal path from (0, 0) to ({}, {})", .rows.saturating_sub(1), .columns.saturating_sub(1))]
    NoLegalPath { rows: usize, columns: usize },

    /// A step would leave the grid or enter a building.
    #[error("cannot step {direction} from ({row}, {column})")]
    IllegalStep {
        row: usize,
        column: usize,
        direction: StepDirection,
    },

    /// A random grid asked for more cranes and buildings than free cells.
    #[error("requested {requested} cranes and buildings but only {available} cells are free")]
    TooManyFeatures { requested: usize, available: usize },

    /// A random grid's cell count does not fit in `usize`.
    #[error("a {rows}x{columns} grid is too large")]
    GridTooLarge { rows: usize, columns: usize },

    /// An algorithm name was not recognised.
    #[error("unknown algorithm {0:?} (expected \"exhaustive\" or \"dyn-prog\")")]
    UnknownAlgorithm(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CranesError>;
