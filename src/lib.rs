//! Crane unloading
//!
//! A grid holds empty cells, cranes and buildings. Starting in the top-left
//! cell and moving only east or south, find a path to the bottom-right cell
//! that passes through as many crane cells as possible without ever entering
//! a building.
//!
//! ## Solvers
//! - [`crane_unloading_exhaustive`]: enumerates every monotone path level by
//!   level. Exponential; a correctness oracle for small grids (at most
//!   [`utils::MAX_EXHAUSTIVE_STEPS`] steps).
//! - [`crane_unloading_dyn_prog`]: fills an optimal-value table and walks it
//!   back from the finish. O(rows × columns); the practical solver.
//!
//! Both return a [`Path`] whose [`total_cranes`](Path::total_cranes) is the
//! score. Grids with no legal start-to-finish path are reported as
//! [`CranesError::NoLegalPath`] by either solver.
//!
//! ## Quick start
//! ```
//! use cranes::{crane_unloading_dyn_prog, crane_unloading_exhaustive, Grid};
//!
//! let grid: Grid = "\
//! .c..
//! .X.c
//! c..c
//! ".parse().unwrap();
//!
//! let best = crane_unloading_dyn_prog(&grid).unwrap();
//! assert_eq!(best.total_cranes(), 3);
//! assert!(best.is_complete());
//!
//! let oracle = crane_unloading_exhaustive(&grid).unwrap();
//! assert_eq!(oracle.total_cranes(), best.total_cranes());
//! ```
//!
//! ## Features
//! - `tracing`: spans and events around each solve.
//! - `parallel`: [`CranesEngine::run_batch`] uses rayon.
//! - `cli` (default): the `cranes` and `cranes_probe` binaries.

pub mod algorithms;
pub mod builder;
pub mod engine;
pub mod error;
pub mod grid;
pub mod path;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::algorithms::{crane_unloading_dyn_prog, crane_unloading_exhaustive};
pub use crate::builder::CranesEngineBuilder;
pub use crate::engine::{Algorithm, CranesEngine};
pub use crate::error::{CranesError, Result};
pub use crate::grid::{CellKind, Grid};
pub use crate::path::{Path, StepDirection};
pub use crate::traits::CraneSolver;
