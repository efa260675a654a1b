use crate::error::{GeneticError, Result};
use crate::strategy::ProblemStrategy;

use super::optimization::GeneticOptimization;
use super::params::GeneticOptimizationParams;

/// Fluent construction of a [`GeneticOptimization`].
///
/// `build` fails with `GeneticError::Configuration` when the strategy or the
/// parameters were never supplied, so a run can never start half-configured.
pub struct GeneticOptimizationBuilder<S>
where
    S: ProblemStrategy,
{
    strategy: Option<S>,
    params: Option<GeneticOptimizationParams>,
}

impl<S> GeneticOptimizationBuilder<S>
where
    S: ProblemStrategy,
{
    pub fn new() -> Self {
        Self {
            strategy: None,
            params: None,
        }
    }

    pub fn with_strategy(mut self, strategy: S) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn with_params(mut self, params: GeneticOptimizationParams) -> Self {
        self.params = Some(params);
        self
    }

    pub fn build(self) -> Result<GeneticOptimization<S>> {
        let strategy = self.strategy.ok_or_else(|| {
            GeneticError::Configuration("Problem strategy not specified".to_string())
        })?;

        let params = self.params.ok_or_else(|| {
            GeneticError::Configuration("Optimization parameters not specified".to_string())
        })?;

        Ok(GeneticOptimization::new(strategy, params))
    }
}

impl<S> Default for GeneticOptimizationBuilder<S>
where
    S: ProblemStrategy,
{
    fn default() -> Self {
        Self::new()
    }
}
