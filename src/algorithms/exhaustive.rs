//! Exhaustive crane unloading search.
//!
//! Paths are grown level by level: level `k` holds every legal partial path
//! of `k` steps. Since every complete path takes exactly
//! `rows + columns - 2` steps, all candidates appear on the last level and
//! the search stops there. The cost is exponential in the step count, so the
//! grid size is bounded by [`MAX_EXHAUSTIVE_STEPS`].
//!
//! Ties: within a level, paths keep the order they were created in and each
//! one is extended east before south; a candidate replaces the incumbent only
//! when strictly better. The result is the lexicographically smallest optimal
//! step sequence with east ordered before south.

use crate::error::{CranesError, Result};
use crate::grid::Grid;
use crate::path::{Path, StepDirection};
use crate::traits::CraneSolver;
use crate::utils::{total_steps, MAX_EXHAUSTIVE_STEPS};

/// Enumerates every monotone path. Use only on small grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExhaustiveSolver {
    step_limit: usize,
}

impl Default for ExhaustiveSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ExhaustiveSolver {
    /// Solver accepting grids up to [`MAX_EXHAUSTIVE_STEPS`] steps.
    pub fn new() -> Self {
        Self {
            step_limit: MAX_EXHAUSTIVE_STEPS,
        }
    }

    /// Solver refusing grids whose paths need more than `step_limit` steps.
    ///
    /// # Panics
    /// Panics if `step_limit > MAX_EXHAUSTIVE_STEPS`.
    pub fn with_step_limit(step_limit: usize) -> Self {
        assert!(
            step_limit <= MAX_EXHAUSTIVE_STEPS,
            "exhaustive step limit must be at most {MAX_EXHAUSTIVE_STEPS}"
        );
        Self { step_limit }
    }

    pub fn step_limit(&self) -> usize {
        self.step_limit
    }
}

impl CraneSolver for ExhaustiveSolver {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn solve<'g>(&self, grid: &'g Grid) -> Result<Path<'g>> {
        let max_steps = total_steps(grid.rows(), grid.columns());
        if max_steps > self.step_limit {
            return Err(CranesError::TooManySteps {
                steps: max_steps,
                limit: self.step_limit,
            });
        }
        let start = Path::try_new(grid)?;

        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!(
            "exhaustive",
            rows = grid.rows(),
            columns = grid.columns(),
            max_steps
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut best: Option<Path<'g>> = None;
        let mut level = vec![start];

        for _depth in 0..=max_steps {
            if level.is_empty() || best.is_some() {
                break;
            }
            #[cfg(feature = "tracing")]
            tracing::debug!(depth = _depth, partial_paths = level.len(), "expand level");

            let mut next = Vec::with_capacity(level.len().saturating_mul(2));
            for path in level {
                if path.is_complete() {
                    let improves = best
                        .as_ref()
                        .map_or(true, |b| path.total_cranes() > b.total_cranes());
                    if improves {
                        best = Some(path);
                    }
                    continue;
                }
                for direction in [StepDirection::East, StepDirection::South] {
                    if path.is_step_valid(direction) {
                        let mut extended = path.clone();
                        extended.add_step(direction);
                        next.push(extended);
                    }
                }
            }
            level = next;
        }

        #[cfg(feature = "tracing")]
        {
            if let Some(b) = &best {
                tracing::debug!(cranes = b.total_cranes(), "exhaustive optimum");
            }
        }
        best.ok_or(CranesError::NoLegalPath {
            rows: grid.rows(),
            columns: grid.columns(),
        })
    }
}

/// Solve the crane unloading problem by exhaustive search.
///
/// The grid's step count `rows + columns - 2` must not exceed
/// [`MAX_EXHAUSTIVE_STEPS`]; larger grids fail with
/// [`CranesError::TooManySteps`].
pub fn crane_unloading_exhaustive(grid: &Grid) -> Result<Path<'_>> {
    ExhaustiveSolver::new().solve(grid)
}
