//! Crane unloading algorithms.
//!
//! - [`exhaustive`] : breadth-first enumeration of every legal monotone path.
//! - [`dyn_prog`]   : optimal-value table plus backward reconstruction.

pub mod dyn_prog;
pub mod exhaustive;

pub use dyn_prog::{crane_unloading_dyn_prog, DynProgSolver, Reach, ValueTable};
pub use exhaustive::{crane_unloading_exhaustive, ExhaustiveSolver};
