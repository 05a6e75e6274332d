use crate::engine::{Algorithm, CranesEngine};
use crate::utils::MAX_EXHAUSTIVE_STEPS;

/// Step-by-step configuration of a [`CranesEngine`].
#[derive(Debug, Clone, Default)]
pub struct CranesEngineBuilder {
    algorithm: Algorithm,
    exhaustive_step_limit: Option<usize>,
}

impl CranesEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
    pub fn exhaustive_step_limit(mut self, step_limit: usize) -> Self {
        self.exhaustive_step_limit = Some(step_limit);
        self
    }
    /// # Panics
    /// Panics if the step limit exceeds [`MAX_EXHAUSTIVE_STEPS`].
    pub fn build(self) -> CranesEngine {
        match self.exhaustive_step_limit {
            Some(limit) => CranesEngine::with_exhaustive_step_limit(self.algorithm, limit),
            None => CranesEngine::with_exhaustive_step_limit(self.algorithm, MAX_EXHAUSTIVE_STEPS),
        }
    }
}
