//! # One-variable functions
//!
//! Search a closed interval for the input that minimizes or maximizes a real
//! function `f(x)`. Each individual carries a single `f64` gene and its fitness
//! is `f(x)`.
//!
//! Crossover takes the arithmetic mean of two parents, so children never leave
//! the interval spanned by the sub-population. Mutation replaces the gene with a
//! fresh uniform draw from the domain.
//!
//! ## Example
//!
//! ```rust
//! use genopt::rng::RandomNumberGenerator;
//! use genopt::strategy::{Domain, OneVarStrategy};
//!
//! let domain = Domain::new(-10.0, 10.0).unwrap();
//! let rng = RandomNumberGenerator::from_seed(7);
//! let strategy = OneVarStrategy::minimize(domain, |x: f64| x * x, rng);
//!
//! assert_eq!(strategy.value(3.0).unwrap(), 9.0);
//! assert!(strategy.value(f64::NAN).is_err());
//! ```

use std::fmt;

use rand::Rng;

use crate::breeding::{
    arithmetic_mean, crossover_population, mutate_loci, mutate_population, redraw_scalar,
};
use crate::error::{GeneticError, Result};
use crate::individual::{Individual, Population};
use crate::parallel::{self, Execution};
use crate::rng::RandomNumberGenerator;
use crate::selection::Objective;
use crate::strategy::ProblemStrategy;

/// The closed interval `[min, max]` a gene may take.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawDomain")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    min: f64,
    max: f64,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDomain {
    min: f64,
    max: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDomain> for Domain {
    type Error = GeneticError;

    fn try_from(raw: RawDomain) -> Result<Self> {
        Self::new(raw.min, raw.max)
    }
}

impl Domain {
    /// Both bounds must be finite with `min < max`, and `max - min` must not overflow.
    ///
    /// The span must also hold a representable midpoint strictly inside it, so
    /// that mutation can always draw a value different from the current one.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(GeneticError::DomainValue(format!(
                "Domain bounds must be finite, found [{}, {}]",
                min, max
            )));
        }
        if min >= max {
            return Err(GeneticError::DomainValue(format!(
                "Domain minimum must be below its maximum, found [{}, {}]",
                min, max
            )));
        }
        if !(max - min).is_finite() {
            return Err(GeneticError::DomainValue(format!(
                "Domain span overflows, found [{}, {}]",
                min, max
            )));
        }
        let midpoint = min + (max - min) / 2.0;
        if !(min < midpoint && midpoint < max) {
            return Err(GeneticError::DomainValue(format!(
                "Domain [{}, {}] is too narrow to draw distinct values",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    pub fn get_min(&self) -> f64 {
        self.min
    }

    pub fn get_max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, x: f64) -> bool {
        (self.min..=self.max).contains(&x)
    }
}

#[derive(Clone)]
pub struct OneVarStrategy<F> {
    domain: Domain,
    function: F,
    objective: Objective,
    rng: RandomNumberGenerator,
    execution: Execution,
}

impl<F> OneVarStrategy<F>
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    pub fn new(
        domain: Domain,
        function: F,
        objective: Objective,
        rng: RandomNumberGenerator,
    ) -> Self {
        Self {
            domain,
            function,
            objective,
            rng,
            execution: Execution::Sequential,
        }
    }

    /// Searches for the input with the lowest `function` value.
    pub fn minimize(domain: Domain, function: F, rng: RandomNumberGenerator) -> Self {
        Self::new(domain, function, Objective::Minimize, rng)
    }

    /// Searches for the input with the highest `function` value.
    pub fn maximize(domain: Domain, function: F, rng: RandomNumberGenerator) -> Self {
        Self::new(domain, function, Objective::Maximize, rng)
    }

    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Evaluates the function at `x`. A NaN or infinite result is an error.
    pub fn value(&self, x: f64) -> Result<f64> {
        let y = (self.function)(x);
        if !y.is_finite() {
            return Err(GeneticError::DomainValue(format!(
                "Function value at {} is not finite: {}",
                x, y
            )));
        }
        Ok(y)
    }
}

impl<F> fmt::Debug for OneVarStrategy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OneVarStrategy")
            .field("domain", &self.domain)
            .field("objective", &self.objective)
            .field("execution", &self.execution)
            .finish_non_exhaustive()
    }
}

impl<F> ProblemStrategy for OneVarStrategy<F>
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    type Genes = f64;

    fn generate_initial_population(&mut self, size: usize) -> Result<Population<f64>> {
        let Domain { min, max } = self.domain;
        parallel::generate(self.execution, size, self.rng.split(), |_, rng| {
            Individual::new(rng.gen_range(min..max))
        })
    }

    fn calculate_fitness(&mut self, population: &mut [Individual<f64>]) -> Result<()> {
        if let Some(outside) = population
            .iter()
            .map(|individual| *individual.genes())
            .find(|&x| !self.domain.contains(x))
        {
            return Err(GeneticError::DomainValue(format!(
                "Gene {} lies outside [{}, {}]",
                outside, self.domain.min, self.domain.max
            )));
        }

        let function = &self.function;
        parallel::evaluate(self.execution, population, |&x| function(x))
    }

    fn best_individual<'a>(
        &self,
        population: &'a [Individual<f64>],
    ) -> Result<&'a Individual<f64>> {
        self.objective.best(population)
    }

    fn selection(
        &self,
        population: &[Individual<f64>],
        selection_percent: f64,
    ) -> Result<Population<f64>> {
        self.objective.select(population, selection_percent)
    }

    fn crossover(
        &mut self,
        sub_population: &[Individual<f64>],
        target_size: usize,
    ) -> Result<Population<f64>> {
        crossover_population(
            self.execution,
            sub_population,
            target_size,
            self.rng.split(),
            |&first, &second, _| Ok(arithmetic_mean(first, second)),
        )
    }

    fn mutate(&mut self, population: &mut [Individual<f64>], mutation_prob: f64) -> Result<()> {
        let Domain { min, max } = self.domain;
        mutate_population(
            self.execution,
            population,
            mutation_prob,
            self.rng.split(),
            |x, prob, rng| {
                mutate_loci(std::slice::from_mut(x), prob, rng, |&current, r| {
                    redraw_scalar(current, min, max, r)
                });
            },
        )
    }

    fn objective(&self) -> Objective {
        self.objective
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64) -> f64 {
        x * x
    }

    fn domain() -> Domain {
        Domain::new(-10.0, 10.0).unwrap()
    }

    #[test]
    fn test_domain_validation() {
        assert!(Domain::new(-1.0, 1.0).is_ok());
        assert!(Domain::new(1.0, 1.0).is_err());
        assert!(Domain::new(2.0, 1.0).is_err());
        assert!(Domain::new(f64::NAN, 1.0).is_err());
        assert!(Domain::new(0.0, f64::INFINITY).is_err());
        assert!(Domain::new(f64::MIN, f64::MAX).is_err());
    }

    #[test]
    fn test_narrow_domain() {
        let one_ulp_up = f64::from_bits(1.0f64.to_bits() + 1);
        let two_ulps_up = f64::from_bits(1.0f64.to_bits() + 2);
        assert!(matches!(
            Domain::new(1.0, one_ulp_up),
            Err(GeneticError::DomainValue(_))
        ));

        let narrow = Domain::new(1.0, two_ulps_up).unwrap();
        let mut strategy =
            OneVarStrategy::minimize(narrow, square, RandomNumberGenerator::from_seed(6));
        let original = strategy.generate_initial_population(50).unwrap();

        let mut mutated = original.clone();
        strategy.mutate(&mut mutated, 1.0).unwrap();
        for (before, after) in original.iter().zip(&mutated) {
            assert_ne!(before.genes(), after.genes());
            assert!(narrow.contains(*after.genes()));
        }
    }

    #[test]
    fn test_initial_population_within_domain() {
        let mut strategy =
            OneVarStrategy::minimize(domain(), square, RandomNumberGenerator::from_seed(1));
        let population = strategy.generate_initial_population(500).unwrap();

        assert_eq!(population.len(), 500);
        assert!(population.iter().all(|i| domain().contains(*i.genes())));
        assert!(population.iter().all(|i| !i.is_scored()));
    }

    #[test]
    fn test_best_follows_objective() {
        let mut population = vec![
            Individual::new(3.0).unwrap(),
            Individual::new(-1.0).unwrap(),
            Individual::new(0.5).unwrap(),
        ];

        let mut minimize =
            OneVarStrategy::minimize(domain(), square, RandomNumberGenerator::from_seed(1));
        minimize.calculate_fitness(&mut population).unwrap();
        assert_eq!(*minimize.best_individual(&population).unwrap().genes(), 0.5);

        let mut maximize =
            OneVarStrategy::maximize(domain(), square, RandomNumberGenerator::from_seed(1));
        maximize.calculate_fitness(&mut population).unwrap();
        assert_eq!(*maximize.best_individual(&population).unwrap().genes(), 3.0);

        let selected = maximize.selection(&population, 0.34).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(*selected[0].genes(), 3.0);
    }

    #[test]
    fn test_non_finite_fitness_is_rejected() {
        let mut strategy = OneVarStrategy::minimize(
            domain(),
            |x: f64| 1.0 / x,
            RandomNumberGenerator::from_seed(1),
        );
        assert!(strategy.value(0.0).is_err());

        let mut population = vec![Individual::new(0.0).unwrap()];
        assert!(matches!(
            strategy.calculate_fitness(&mut population),
            Err(GeneticError::DomainValue(_))
        ));
    }

    #[test]
    fn test_gene_outside_domain_is_rejected() {
        let mut strategy =
            OneVarStrategy::minimize(domain(), square, RandomNumberGenerator::from_seed(1));
        let mut population = vec![Individual::new(11.0).unwrap()];
        assert!(strategy.calculate_fitness(&mut population).is_err());
    }

    #[test]
    fn test_crossover_takes_parent_means() {
        let mut strategy =
            OneVarStrategy::minimize(domain(), square, RandomNumberGenerator::from_seed(2));
        let sub_population = vec![
            Individual::with_fitness(-2.0, 4.0).unwrap(),
            Individual::with_fitness(4.0, 16.0).unwrap(),
        ];

        let children = strategy.crossover(&sub_population, 100).unwrap();

        assert_eq!(children.len(), 100);
        for child in &children {
            let x = *child.genes();
            assert!(x == -2.0 || x == 1.0 || x == 4.0, "unexpected child {}", x);
        }
    }

    #[test]
    fn test_mutate_extremes() {
        let mut strategy =
            OneVarStrategy::minimize(domain(), square, RandomNumberGenerator::from_seed(3));
        let original = strategy.generate_initial_population(100).unwrap();

        let mut untouched = original.clone();
        strategy.mutate(&mut untouched, 0.0).unwrap();
        assert_eq!(untouched, original);

        let mut changed = original.clone();
        strategy.mutate(&mut changed, 1.0).unwrap();
        for (before, after) in original.iter().zip(&changed) {
            assert_ne!(before.genes(), after.genes());
            assert!(domain().contains(*after.genes()));
        }
    }
}
