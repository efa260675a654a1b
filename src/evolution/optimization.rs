//! # GeneticOptimization
//!
//! Drives a [`ProblemStrategy`] through the generational loop:
//!
//! ```text
//! Init -> Evaluating -> { Selecting -> Crossing -> Mutating -> Evaluating }* -> Terminated
//! ```
//!
//! Generation 0 is generated and scored once. Each further generation selects
//! parents from the previous one, breeds exactly `population_size` children,
//! mutates and scores them, and records their best individual. The run stops
//! after `max_generations` bred generations, or earlier as soon as a recorded
//! best reaches the target value.
//!
//! Any error returned by a strategy callback aborts the run. It is returned as
//! `GeneticError::Strategy` carrying the phase and generation it came from.
//!
//! ## Example
//!
//! ```rust
//! use genopt::evolution::{GeneticOptimization, GeneticOptimizationParams};
//! use genopt::rng::RandomNumberGenerator;
//! use genopt::strategy::NQueensStrategy;
//!
//! let strategy = NQueensStrategy::new(6, RandomNumberGenerator::from_seed(42)).unwrap();
//! let mut params = GeneticOptimizationParams::new(200, 500, 0.1, 0.01).unwrap();
//! params.set_target_value(0.0).unwrap();
//!
//! let mut optimizer = GeneticOptimization::new(strategy, params);
//! let history = optimizer.optimize().unwrap();
//!
//! assert!(history.len() >= 1 && history.len() <= 501);
//! ```

use tracing::instrument;

use super::builder::GeneticOptimizationBuilder;
use super::history::GenerationHistory;
use super::params::GeneticOptimizationParams;
use crate::error::{GeneticError, Phase, Result};
use crate::individual::Individual;
use crate::strategy::ProblemStrategy;

/// Runs a strategy under a fixed set of parameters.
#[derive(Debug, Clone)]
pub struct GeneticOptimization<S> {
    strategy: S,
    params: GeneticOptimizationParams,
}

impl<S: ProblemStrategy> GeneticOptimization<S> {
    pub fn new(strategy: S, params: GeneticOptimizationParams) -> Self {
        Self { strategy, params }
    }

    /// Returns a builder that reports a missing strategy or missing parameters as errors.
    pub fn builder() -> GeneticOptimizationBuilder<S> {
        GeneticOptimizationBuilder::new()
    }

    pub fn get_strategy(&self) -> &S {
        &self.strategy
    }

    pub fn get_strategy_mut(&mut self) -> &mut S {
        &mut self.strategy
    }

    pub fn get_params(&self) -> &GeneticOptimizationParams {
        &self.params
    }

    pub fn into_strategy(self) -> S {
        self.strategy
    }

    /// Runs the generational loop and returns the best individual of every generation.
    ///
    /// The returned history holds between `1` and `max_generations + 1` entries.
    /// Calling `optimize` again starts a fresh run with the strategy's current
    /// random state.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Strategy` as soon as a strategy callback fails, or
    /// returns a population of the wrong size.
    #[instrument(
        level = "info",
        skip(self),
        fields(
            population_size = self.params.get_population_size(),
            max_generations = self.params.get_max_generations(),
            selection_percent = self.params.get_selection_percent(),
            mutation_prob = self.params.get_mutation_prob(),
        )
    )]
    pub fn optimize(&mut self) -> Result<GenerationHistory<S::Genes>> {
        let population_size = self.params.get_population_size();
        let max_generations = self.params.get_max_generations();
        let selection_percent = self.params.get_selection_percent();
        let mutation_prob = self.params.get_mutation_prob();

        tracing::info!(
            target_value = self.params.get_target_value(),
            target_tolerance = self.params.get_target_tolerance(),
            "Starting optimization"
        );

        tracing::trace!(generation = 0, "Generating initial population");
        let mut population = self
            .strategy
            .generate_initial_population(population_size)
            .and_then(|population| check_size(population, population_size))
            .map_err(abort(Phase::Init, 0))?;

        tracing::trace!(generation = 0, "Evaluating");
        self.strategy
            .calculate_fitness(&mut population)
            .map_err(abort(Phase::Evaluating, 0))?;

        let initial = self
            .strategy
            .best_individual(&population)
            .and_then(scored_clone)
            .map_err(abort(Phase::Evaluating, 0))?;
        tracing::debug!(
            generation = 0,
            best_fitness = ?initial.fitness(),
            "Initial population scored"
        );

        let mut history = GenerationHistory::start(self.strategy.objective(), initial);

        while history.generations() < max_generations {
            let generation = history.len();

            tracing::trace!(generation, "Selecting");
            let selected = self
                .strategy
                .selection(&population, selection_percent)
                .map_err(abort(Phase::Selecting, generation))?;
            if selected.is_empty() {
                return Err(abort(Phase::Selecting, generation)(
                    GeneticError::EmptyPopulation,
                ));
            }

            tracing::trace!(generation, parents = selected.len(), "Crossing");
            let mut children = self
                .strategy
                .crossover(&selected, population_size)
                .and_then(|children| check_size(children, population_size))
                .map_err(abort(Phase::Crossing, generation))?;

            tracing::trace!(generation, "Mutating");
            self.strategy
                .mutate(&mut children, mutation_prob)
                .map_err(abort(Phase::Mutating, generation))?;

            tracing::trace!(generation, "Evaluating");
            self.strategy
                .calculate_fitness(&mut children)
                .map_err(abort(Phase::Evaluating, generation))?;

            let best = self
                .strategy
                .best_individual(&children)
                .and_then(scored_clone)
                .map_err(abort(Phase::Evaluating, generation))?;
            let best_fitness = best.scored_fitness()?;
            tracing::debug!(generation, best_fitness, "Generation finished");

            history.push(best);
            population = children;

            if self.params.is_target_reached(best_fitness) {
                tracing::info!(
                    generations = history.generations(),
                    best_fitness,
                    "Target value reached"
                );
                return Ok(history);
            }
        }

        let best_fitness = history.last()?.scored_fitness()?;
        tracing::info!(
            generations = history.generations(),
            best_fitness,
            "Generation budget exhausted"
        );
        Ok(history)
    }
}

/// Logs a failed callback and tags its error with where the run stopped.
fn abort(phase: Phase, generation: usize) -> impl FnOnce(GeneticError) -> GeneticError {
    move |error| {
        tracing::error!(%phase, generation, %error, "Strategy callback failed");
        error.in_strategy(phase, generation)
    }
}

fn check_size<G>(
    population: Vec<Individual<G>>,
    expected: usize,
) -> Result<Vec<Individual<G>>> {
    if population.len() != expected {
        return Err(GeneticError::DomainValue(format!(
            "Strategy returned {} individuals, expected {}",
            population.len(),
            expected
        )));
    }
    Ok(population)
}

fn scored_clone<G: Clone>(best: &Individual<G>) -> Result<Individual<G>> {
    best.scored_fitness()?;
    Ok(best.clone())
}
