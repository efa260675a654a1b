//! # ProblemStrategy
//!
//! The `ProblemStrategy` trait is the contract between the optimization engine and
//! a concrete problem. The engine never interprets genes; it drives the six
//! operations below in a fixed generational order.
//!
//! ## Contract
//!
//! - `generate_initial_population(size)` returns exactly `size` unscored
//!   individuals whose genes lie in the problem's valid domain.
//! - `calculate_fitness(population)` scores every individual in place **and
//!   leaves the population sorted ascending by fitness** with a stable sort.
//!   `best_individual` and `selection` may rely on this ordering.
//! - `best_individual(population)` returns the single best individual under the
//!   strategy's objective, without mutating the population.
//! - `selection(population, p)` returns a new vector with the best
//!   `floor(p * population.len())` individuals.
//! - `crossover(sub_population, n)` returns exactly `n` new individuals, each
//!   built from the genes of one or two parents drawn with replacement.
//! - `mutate(population, p)` replaces, in place, every mutable locus of every
//!   individual independently with probability `p`.
//!
//! `objective()` has a default of `Objective::Minimize`; maximizing strategies
//! override it.
//!
//! A strategy owns its random source and must not share one generator between
//! concurrently running work units. The helpers in [`crate::parallel`],
//! [`crate::breeding`] and [`crate::selection`] implement these rules so that
//! concrete strategies only describe their genes.

pub mod nqueens;
pub mod one_var;
pub mod string_match;

use crate::error::Result;
use crate::individual::{Genome, Individual, Population};
use crate::selection::Objective;

pub trait ProblemStrategy {
    /// Gene payload of the individuals this strategy breeds.
    type Genes: Genome;

    /// Creates `size` random individuals. Fitness is left unset.
    fn generate_initial_population(&mut self, size: usize) -> Result<Population<Self::Genes>>;

    /// Scores every individual, then sorts the population ascending by fitness.
    fn calculate_fitness(&mut self, population: &mut [Individual<Self::Genes>]) -> Result<()>;

    /// Returns the best individual of a ranked population.
    fn best_individual<'a>(
        &self,
        population: &'a [Individual<Self::Genes>],
    ) -> Result<&'a Individual<Self::Genes>>;

    /// Returns the best `floor(selection_percent * n)` individuals of a ranked population.
    fn selection(
        &self,
        population: &[Individual<Self::Genes>],
        selection_percent: f64,
    ) -> Result<Population<Self::Genes>>;

    /// Breeds exactly `target_size` children from `sub_population`.
    fn crossover(
        &mut self,
        sub_population: &[Individual<Self::Genes>],
        target_size: usize,
    ) -> Result<Population<Self::Genes>>;

    /// Mutates each locus of each individual with probability `mutation_prob`.
    fn mutate(
        &mut self,
        population: &mut [Individual<Self::Genes>],
        mutation_prob: f64,
    ) -> Result<()>;

    /// Optimization sense, used to report improvements in the run history.
    fn objective(&self) -> Objective {
        Objective::Minimize
    }
}

pub use nqueens::NQueensStrategy;
pub use one_var::{Domain, OneVarStrategy};
pub use string_match::{Alphabet, StringMatchStrategy, DEFAULT_ALPHABET};
