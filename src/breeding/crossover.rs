//! Recombination operators shared by all strategies.
//!
//! `crossover_population` does the part every strategy has in common: it builds
//! exactly `target_size` children, each from two parents drawn with replacement
//! from the sub-population. Strategies supply only the recombination rule.

use rand::{rngs::StdRng, Rng};

use crate::error::{GeneticError, Result};
use crate::individual::{Genome, Individual, Population};
use crate::parallel::{self, Execution};
use crate::rng::SeedStream;

/// Draws one parent uniformly, with replacement.
pub fn pick_parent<'a, G>(
    sub_population: &'a [Individual<G>],
    rng: &mut StdRng,
) -> &'a Individual<G> {
    &sub_population[rng.gen_range(0..sub_population.len())]
}

/// Builds `target_size` children from parents drawn out of `sub_population`.
///
/// `recombine` receives the genes of two parents and returns the child's genes.
/// Children are unscored. The sub-population is only read.
pub fn crossover_population<G, F>(
    execution: Execution,
    sub_population: &[Individual<G>],
    target_size: usize,
    streams: SeedStream,
    recombine: F,
) -> Result<Population<G>>
where
    G: Genome,
    F: Fn(&G, &G, &mut StdRng) -> Result<G> + Sync + Send,
{
    if sub_population.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }

    parallel::generate(execution, target_size, streams, |_, rng| {
        let first = pick_parent(sub_population, rng);
        let second = pick_parent(sub_population, rng);
        let genes = recombine(first.genes(), second.genes(), rng)?;
        Individual::new(genes)
    })
}

/// Splices two equal-length sequences at `locus`.
///
/// The child takes positions `0..locus` from `first` and `locus..` from `second`.
pub fn single_point_splice<T: Clone>(first: &[T], second: &[T], locus: usize) -> Result<Vec<T>> {
    if first.len() != second.len() {
        return Err(GeneticError::DomainValue(format!(
            "Cannot splice sequences of different lengths ({} and {})",
            first.len(),
            second.len()
        )));
    }
    if locus > first.len() {
        return Err(GeneticError::DomainValue(format!(
            "Crossover locus {} is outside a sequence of length {}",
            locus,
            first.len()
        )));
    }

    let mut child = Vec::with_capacity(first.len());
    child.extend_from_slice(&first[..locus]);
    child.extend_from_slice(&second[locus..]);
    Ok(child)
}

/// Splices two equal-length sequences at a locus drawn uniformly from `0..len`.
pub fn random_splice<T: Clone>(first: &[T], second: &[T], rng: &mut StdRng) -> Result<Vec<T>> {
    if first.is_empty() {
        return Err(GeneticError::DomainValue(
            "Cannot splice empty sequences".to_string(),
        ));
    }
    let locus = rng.gen_range(0..first.len());
    single_point_splice(first, second, locus)
}

pub fn arithmetic_mean(first: f64, second: f64) -> f64 {
    (first + second) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RandomNumberGenerator;

    #[test]
    fn test_single_point_splice() {
        let first = [1, 0, 0, 0];
        let second = [1, 3, 0, 2];

        assert_eq!(single_point_splice(&first, &second, 0).unwrap(), vec![1, 3, 0, 2]);
        assert_eq!(single_point_splice(&first, &second, 2).unwrap(), vec![1, 0, 0, 2]);
        assert_eq!(single_point_splice(&first, &second, 4).unwrap(), vec![1, 0, 0, 0]);
        assert!(single_point_splice(&first, &second, 5).is_err());
        assert!(single_point_splice(&first, &second[..3], 1).is_err());
    }

    #[test]
    fn test_arithmetic_mean() {
        assert_eq!(arithmetic_mean(1.0, 2.0), 1.5);
        assert_eq!(arithmetic_mean(-4.0, 4.0), 0.0);
    }

    #[test]
    fn test_crossover_population_size_and_attribution() {
        let sub_population: Vec<Individual<Vec<usize>>> = vec![
            Individual::with_fitness(vec![0, 0, 0, 0], 0.0).unwrap(),
            Individual::with_fitness(vec![1, 1, 1, 1], 1.0).unwrap(),
        ];
        let mut master = RandomNumberGenerator::from_seed(3);

        for execution in [Execution::Sequential, Execution::Parallel] {
            let children = crossover_population(
                execution,
                &sub_population,
                150,
                master.split(),
                |a, b, rng| random_splice(a, b, rng),
            )
            .unwrap();

            assert_eq!(children.len(), 150);
            for child in &children {
                assert!(!child.is_scored());
                // every locus comes from a parent, and a prefix/suffix split at most once
                let genes = child.genes();
                assert!(genes.iter().all(|&g| g <= 1));
                assert!(genes.windows(2).filter(|w| w[0] != w[1]).count() <= 1);
            }
        }
    }

    #[test]
    fn test_crossover_empty_sub_population() {
        let sub_population: Vec<Individual<f64>> = Vec::new();
        let result = crossover_population(
            Execution::Sequential,
            &sub_population,
            10,
            SeedStream::new(1),
            |a, b, _| Ok(arithmetic_mean(*a, *b)),
        );
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }
}
