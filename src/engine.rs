//! Configured entry point over both solvers.
//!
//! [`CranesEngine`] picks an [`Algorithm`], runs it, and reports
//! `(score, path)`. With the `parallel` feature, [`CranesEngine::run_batch`]
//! spreads independent grids over the rayon thread pool; results are identical
//! to solving them one by one.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::algorithms::{DynProgSolver, ExhaustiveSolver};
use crate::error::{CranesError, Result};
use crate::grid::Grid;
use crate::path::Path;
use crate::traits::CraneSolver;

/// Which solver the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    Exhaustive,
    #[default]
    DynamicProgramming,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Exhaustive, Algorithm::DynamicProgramming];

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Exhaustive => "exhaustive",
            Algorithm::DynamicProgramming => "dyn-prog",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = CranesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "exhaustive" => Ok(Algorithm::Exhaustive),
            "dyn-prog" | "dyn_prog" | "dp" => Ok(Algorithm::DynamicProgramming),
            _ => Err(CranesError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Crane unloading engine for a fixed configuration.
///
/// Typical usage:
/// ```
/// use cranes::{CranesEngine, Grid};
///
/// let grid: Grid = ".c.\n..c\nc..".parse().unwrap();
/// let (score, path) = CranesEngine::default().run(&grid).unwrap();
/// assert_eq!(score, 2);
/// assert!(path.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CranesEngine {
    algorithm: Algorithm,
    exhaustive: ExhaustiveSolver,
}

impl CranesEngine {
    /// Engine running `algorithm` with the default exhaustive step limit.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            exhaustive: ExhaustiveSolver::new(),
        }
    }

    /// Engine with an explicit exhaustive step limit.
    ///
    /// # Panics
    /// Panics if `step_limit` exceeds
    /// [`MAX_EXHAUSTIVE_STEPS`](crate::utils::MAX_EXHAUSTIVE_STEPS).
    pub fn with_exhaustive_step_limit(algorithm: Algorithm, step_limit: usize) -> Self {
        Self {
            algorithm,
            exhaustive: ExhaustiveSolver::with_step_limit(step_limit),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn exhaustive_step_limit(&self) -> usize {
        self.exhaustive.step_limit()
    }

    fn solver(&self) -> &dyn CraneSolver {
        match self.algorithm {
            Algorithm::Exhaustive => &self.exhaustive as &dyn CraneSolver,
            Algorithm::DynamicProgramming => &DynProgSolver as &dyn CraneSolver,
        }
    }

    /// Solve `grid`, returning `(score, path)` where `score` is the path's
    /// crane count.
    pub fn run<'g>(&self, grid: &'g Grid) -> Result<(u32, Path<'g>)> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "cranes_run",
            algorithm = self.algorithm.as_str(),
            rows = grid.rows(),
            columns = grid.columns()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let result = self.solver().solve(grid);

        #[cfg(feature = "tracing")]
        {
            match &result {
                Ok(path) => tracing::info!(score = path.total_cranes(), steps = path.len(), "solved"),
                Err(err) => tracing::warn!(%err, "no solution"),
            }
        }

        result.map(|path| (path.total_cranes(), path))
    }

    /// Solve many independent grids, in parallel.
    #[cfg(feature = "parallel")]
    pub fn run_batch<'g>(&self, grids: &'g [Grid]) -> Vec<Result<(u32, Path<'g>)>> {
        grids.par_iter().map(|grid| self.run(grid)).collect()
    }

    /// Solve many independent grids, one after another.
    #[cfg(not(feature = "parallel"))]
    pub fn run_batch<'g>(&self, grids: &'g [Grid]) -> Vec<Result<(u32, Path<'g>)>> {
        grids.iter().map(|grid| self.run(grid)).collect()
    }
}

impl CraneSolver for CranesEngine {
    fn name(&self) -> &'static str {
        self.solver().name()
    }

    fn solve<'g>(&self, grid: &'g Grid) -> Result<Path<'g>> {
        self.run(grid).map(|(_, path)| path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MAX_EXHAUSTIVE_STEPS;

    #[test]
    fn algorithm_names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!("DP".parse::<Algorithm>(), Ok(Algorithm::DynamicProgramming));
        assert_eq!(
            "greedy".parse::<Algorithm>(),
            Err(CranesError::UnknownAlgorithm("greedy".to_string()))
        );
    }

    #[test]
    fn default_engine_is_dynamic_programming() {
        let engine = CranesEngine::default();
        assert_eq!(engine.algorithm(), Algorithm::DynamicProgramming);
        assert_eq!(engine.exhaustive_step_limit(), MAX_EXHAUSTIVE_STEPS);
        assert_eq!(engine.name(), "dyn-prog");
    }

    #[test]
    fn run_reports_score_of_returned_path() {
        let grid: Grid = "c.c\n.cc\nc.c".parse().unwrap();
        for algorithm in Algorithm::ALL {
            let (score, path) = CranesEngine::new(algorithm).run(&grid).unwrap();
            assert_eq!(score, 4, "{algorithm}");
            assert_eq!(score, path.total_cranes());
        }
    }

    #[test]
    fn exhaustive_limit_applies_only_to_exhaustive() {
        let grid = Grid::new(5, 5);
        let exhaustive = CranesEngine::with_exhaustive_step_limit(Algorithm::Exhaustive, 4);
        assert_eq!(
            exhaustive.run(&grid).map(|(score, _)| score),
            Err(CranesError::TooManySteps { steps: 8, limit: 4 })
        );
        let dp = CranesEngine::with_exhaustive_step_limit(Algorithm::DynamicProgramming, 4);
        assert!(dp.run(&grid).is_ok());
    }

    #[test]
    fn batch_keeps_input_order() {
        let grids: Vec<Grid> = ["c", ".", "cc\ncc", "..\n.X"]
            .iter()
            .map(|t| t.parse().unwrap())
            .collect();
        let scores: Vec<_> = CranesEngine::default()
            .run_batch(&grids)
            .into_iter()
            .map(|r| r.map(|(score, _)| score))
            .collect();
        assert_eq!(
            scores,
            vec![
                Ok(1),
                Ok(0),
                Ok(3),
                Err(CranesError::NoLegalPath {
                    rows: 2,
                    columns: 2
                })
            ]
        );
    }
}
