//! # Individual
//!
//! An `Individual` is one candidate solution: a gene payload plus the fitness
//! assigned to it by a strategy. The engine never looks inside the genes; it only
//! needs them to be valid, which the `Genome` trait checks eagerly.
//!
//! ## Example
//!
//! ```rust
//! use genopt::individual::Individual;
//!
//! let mut individual = Individual::new(vec![1usize, 3, 0, 2]).unwrap();
//! assert_eq!(individual.fitness(), None);
//!
//! individual.set_fitness(0.0).unwrap();
//! assert_eq!(individual.fitness(), Some(0.0));
//!
//! // Non-finite fitness values are rejected.
//! assert!(individual.set_fitness(f64::NAN).is_err());
//! ```

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::error::{GeneticError, Result};

/// A gene payload that can be carried by an `Individual`.
///
/// Implementations reject payloads that could never describe a candidate,
/// such as empty sequences or non-finite scalars.
pub trait Genome: Clone + Debug + Send + Sync {
    /// Returns an error describing why the payload is invalid.
    fn validate(&self) -> Result<()>;
}

impl Genome for f64 {
    fn validate(&self) -> Result<()> {
        if !self.is_finite() {
            return Err(GeneticError::DomainValue(format!(
                "Scalar genes must be finite, found {}",
                self
            )));
        }
        Ok(())
    }
}

impl Genome for String {
    fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(GeneticError::DomainValue(
                "String genes cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Genome for Vec<usize> {
    fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(GeneticError::DomainValue(
                "Array genes cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// One candidate solution and its scored fitness.
///
/// Fitness is `None` until a strategy scores the individual. Equality compares
/// both genes and fitness. Deserialized individuals are validated like [`Individual::new`].
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "RawIndividual<G>",
        bound(deserialize = "G: Genome + serde::Deserialize<'de>")
    )
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Individual<G> {
    fitness: Option<f64>,
    genes: G,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawIndividual<G> {
    fitness: Option<f64>,
    genes: G,
}

#[cfg(feature = "serde")]
impl<G: Genome> TryFrom<RawIndividual<G>> for Individual<G> {
    type Error = GeneticError;

    fn try_from(raw: RawIndividual<G>) -> Result<Self> {
        let mut individual = Self::new(raw.genes)?;
        if let Some(fitness) = raw.fitness {
            individual.set_fitness(fitness)?;
        }
        Ok(individual)
    }
}

/// An ordered collection of individuals.
///
/// After a strategy's `calculate_fitness` returns, a population is sorted
/// ascending by fitness.
pub type Population<G> = Vec<Individual<G>>;

impl<G: Genome> Individual<G> {
    /// Creates an unscored individual, validating the genes.
    pub fn new(genes: G) -> Result<Self> {
        genes.validate()?;
        Ok(Self {
            fitness: None,
            genes,
        })
    }

    /// Creates an individual with genes and fitness already known.
    pub fn with_fitness(genes: G, fitness: f64) -> Result<Self> {
        let mut individual = Self::new(genes)?;
        individual.set_fitness(fitness)?;
        Ok(individual)
    }

    /// Replaces the genes. The fitness is left untouched until the next scoring pass.
    pub fn set_genes(&mut self, genes: G) -> Result<()> {
        genes.validate()?;
        self.genes = genes;
        Ok(())
    }

    /// In-place access for crate operators that only write values from the valid domain.
    pub(crate) fn genes_mut(&mut self) -> &mut G {
        &mut self.genes
    }
}

impl<G> Individual<G> {
    pub fn genes(&self) -> &G {
        &self.genes
    }

    pub fn into_genes(self) -> G {
        self.genes
    }

    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    pub fn is_scored(&self) -> bool {
        self.fitness.is_some()
    }

    /// Returns the fitness, failing if the individual has not been scored yet.
    pub fn scored_fitness(&self) -> Result<f64> {
        self.fitness.ok_or_else(|| {
            GeneticError::DomainValue("Individual has not been scored yet".to_string())
        })
    }

    /// Sets the fitness. NaN and infinite values are rejected.
    pub fn set_fitness(&mut self, fitness: f64) -> Result<()> {
        if !fitness.is_finite() {
            return Err(GeneticError::DomainValue(format!(
                "Fitness must be finite, found {}",
                fitness
            )));
        }
        self.fitness = Some(fitness);
        Ok(())
    }

    /// Orders individuals ascending by fitness.
    ///
    /// Equal fitness values compare `Equal`; no secondary key is used. Unscored
    /// individuals order after every scored one.
    pub fn cmp_fitness(&self, other: &Self) -> Ordering {
        match (self.fitness, other.fitness) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_genes() {
        assert!(matches!(
            Individual::new(f64::NAN),
            Err(GeneticError::DomainValue(_))
        ));
        assert!(matches!(
            Individual::new(f64::INFINITY),
            Err(GeneticError::DomainValue(_))
        ));
        assert!(matches!(
            Individual::new(String::new()),
            Err(GeneticError::DomainValue(_))
        ));
        assert!(matches!(
            Individual::<Vec<usize>>::new(vec![]),
            Err(GeneticError::DomainValue(_))
        ));
    }

    #[test]
    fn test_set_genes_keeps_old_genes_on_error() {
        let mut individual = Individual::new("abc".to_string()).unwrap();
        assert!(individual.set_genes(String::new()).is_err());
        assert_eq!(individual.genes(), "abc");
    }

    #[test]
    fn test_set_fitness_rejects_non_finite() {
        let mut individual = Individual::new(1.0).unwrap();
        assert!(individual.set_fitness(f64::NAN).is_err());
        assert!(individual.set_fitness(f64::NEG_INFINITY).is_err());
        assert_eq!(individual.fitness(), None);
        assert!(individual.scored_fitness().is_err());

        individual.set_fitness(-3.5).unwrap();
        assert_eq!(individual.scored_fitness().unwrap(), -3.5);
    }

    #[test]
    fn test_cmp_fitness() {
        let low = Individual::with_fitness(1.0, 1.0).unwrap();
        let high = Individual::with_fitness(2.0, 5.0).unwrap();
        let same = Individual::with_fitness(3.0, 5.0).unwrap();
        let unscored = Individual::new(4.0).unwrap();

        assert_eq!(low.cmp_fitness(&high), Ordering::Less);
        assert_eq!(high.cmp_fitness(&low), Ordering::Greater);
        assert_eq!(high.cmp_fitness(&same), Ordering::Equal);
        assert_eq!(high.cmp_fitness(&unscored), Ordering::Less);
    }

    #[test]
    fn test_stable_sort_keeps_order_of_ties() {
        let mut population = vec![
            Individual::with_fitness(1.0, 2.0).unwrap(),
            Individual::with_fitness(2.0, 1.0).unwrap(),
            Individual::with_fitness(3.0, 2.0).unwrap(),
        ];
        population.sort_by(Individual::cmp_fitness);

        let genes: Vec<f64> = population.iter().map(|i| *i.genes()).collect();
        assert_eq!(genes, vec![2.0, 1.0, 3.0]);
    }
}
