//! # GenerationHistory
//!
//! The result of a run: the best individual of every generation, in order.
//! Index `0` holds the best of the random initial population, index `i` the
//! best of the `i`-th bred generation.

use std::ops::Index;

use crate::error::{GeneticError, OptionExt, Result};
use crate::individual::Individual;
use crate::selection::Objective;

#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "RawHistory<G>",
        bound(deserialize = "G: crate::individual::Genome + serde::Deserialize<'de>")
    )
)]
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationHistory<G> {
    objective: Objective,
    best: Vec<Individual<G>>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(bound(deserialize = "G: crate::individual::Genome + serde::Deserialize<'de>"))]
struct RawHistory<G> {
    objective: Objective,
    best: Vec<Individual<G>>,
}

#[cfg(feature = "serde")]
impl<G> TryFrom<RawHistory<G>> for GenerationHistory<G> {
    type Error = GeneticError;

    fn try_from(raw: RawHistory<G>) -> Result<Self> {
        if raw.best.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        Ok(Self {
            objective: raw.objective,
            best: raw.best,
        })
    }
}

impl<G> GenerationHistory<G> {
    /// Starts a history from the best individual of generation 0.
    pub(crate) fn start(objective: Objective, initial: Individual<G>) -> Self {
        Self {
            objective,
            best: vec![initial],
        }
    }

    pub(crate) fn push(&mut self, best: Individual<G>) {
        self.best.push(best);
    }

    /// Number of recorded generations, including generation 0. Never zero.
    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Number of generations bred after the initial one.
    pub fn generations(&self) -> usize {
        self.best.len().saturating_sub(1)
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Best individual of the initial population.
    pub fn initial(&self) -> Result<&Individual<G>> {
        self.best
            .first()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
    }

    /// Best individual of the final generation.
    pub fn last(&self) -> Result<&Individual<G>> {
        self.best
            .last()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
    }

    pub fn get(&self, generation: usize) -> Option<&Individual<G>> {
        self.best.get(generation)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual<G>> {
        self.best.iter()
    }

    pub fn as_slice(&self) -> &[Individual<G>] {
        &self.best
    }

    pub fn into_vec(self) -> Vec<Individual<G>> {
        self.best
    }

    /// Generations whose best individual strictly beat the previous generation's best.
    ///
    /// Generation 0 is never included.
    pub fn improvements(&self) -> Vec<(usize, &Individual<G>)> {
        self.best
            .windows(2)
            .enumerate()
            .filter_map(|(i, pair)| match (pair[0].fitness(), pair[1].fitness()) {
                (Some(previous), Some(current)) if self.objective.improves(current, previous) => {
                    Some((i + 1, &pair[1]))
                }
                _ => None,
            })
            .collect()
    }
}

impl<G> Index<usize> for GenerationHistory<G> {
    type Output = Individual<G>;

    fn index(&self, generation: usize) -> &Self::Output {
        &self.best[generation]
    }
}

impl<'a, G> IntoIterator for &'a GenerationHistory<G> {
    type Item = &'a Individual<G>;
    type IntoIter = std::slice::Iter<'a, Individual<G>>;

    fn into_iter(self) -> Self::IntoIter {
        self.best.iter()
    }
}
