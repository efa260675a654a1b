//! # Objective
//!
//! The optimization sense of a problem. Strategies hold an `Objective` and hand
//! their two sense-dependent operations, picking the best individual and picking
//! the breeding sub-population, over to it.
//!
//! Both operations rely on the population being ranked ascending by fitness,
//! which every strategy's `calculate_fitness` guarantees. An unranked population
//! is rejected with `GeneticError::DomainValue`.
//!
//! ## Example
//!
//! ```rust
//! use genopt::individual::Individual;
//! use genopt::selection::Objective;
//!
//! let population = vec![
//!     Individual::with_fitness(0.5, 1.0).unwrap(),
//!     Individual::with_fitness(1.5, 4.0).unwrap(),
//! ];
//!
//! assert_eq!(Objective::Minimize.best(&population).unwrap().fitness(), Some(1.0));
//! assert_eq!(Objective::Maximize.best(&population).unwrap().fitness(), Some(4.0));
//! ```

use crate::error::{GeneticError, OptionExt, Result};
use crate::individual::Individual;
use crate::parallel::is_ranked;

use super::truncation::{select_highest, select_lowest};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Objective {
    /// Lower fitness is better.
    #[default]
    Minimize,
    /// Higher fitness is better.
    Maximize,
}

impl Objective {
    /// Returns the best individual of a ranked population.
    ///
    /// With ties, `Minimize` returns the earliest of the lowest individuals and
    /// `Maximize` the latest of the highest ones.
    pub fn best<'a, G>(&self, population: &'a [Individual<G>]) -> Result<&'a Individual<G>> {
        check_ranked(population)?;

        let best = match self {
            Objective::Minimize => population.first(),
            Objective::Maximize => population.last(),
        }
        .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

        best.scored_fitness()?;
        Ok(best)
    }

    /// Copies the best `floor(selection_percent * n)` individuals of a ranked population.
    pub fn select<G: Clone>(
        &self,
        population: &[Individual<G>],
        selection_percent: f64,
    ) -> Result<Vec<Individual<G>>> {
        check_ranked(population)?;

        match self {
            Objective::Minimize => select_lowest(population, selection_percent),
            Objective::Maximize => select_highest(population, selection_percent),
        }
    }

    /// Returns whether `candidate` is strictly better than `incumbent` under this sense.
    pub fn improves(&self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Objective::Minimize => candidate < incumbent,
            Objective::Maximize => candidate > incumbent,
        }
    }
}

fn check_ranked<G>(population: &[Individual<G>]) -> Result<()> {
    if !is_ranked(population) {
        return Err(GeneticError::DomainValue(
            "Population is not ranked ascending by fitness".to_string(),
        ));
    }
    Ok(())
}
