//! Per-locus mutation operators shared by all strategies.
//!
//! Each locus of each individual gets its own Bernoulli trial with probability
//! `mutation_prob`. A locus that mutates always receives a value different from
//! its current one, drawn uniformly from the rest of its domain.

use rand::{rngs::StdRng, Rng};

use crate::error::{GeneticError, Result};
use crate::individual::{Genome, Individual};
use crate::parallel::{self, Execution};
use crate::rng::SeedStream;

/// Fails unless `mutation_prob` lies in `[0, 1]`.
pub fn check_probability(mutation_prob: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&mutation_prob) {
        return Err(GeneticError::Configuration(format!(
            "Mutation probability must be in [0, 1], found {}",
            mutation_prob
        )));
    }
    Ok(())
}

/// Runs one Bernoulli trial per locus and replaces the loci that fire.
///
/// Returns the number of mutated loci.
pub fn mutate_loci<T, F>(
    loci: &mut [T],
    mutation_prob: f64,
    rng: &mut StdRng,
    mut redraw: F,
) -> usize
where
    F: FnMut(&T, &mut StdRng) -> T,
{
    let mut mutated = 0;
    for locus in loci.iter_mut() {
        if rng.gen_bool(mutation_prob) {
            *locus = redraw(locus, rng);
            mutated += 1;
        }
    }
    mutated
}

/// Draws an index from `0..domain_size` uniformly among those different from `current`.
pub fn redraw_index(current: usize, domain_size: usize, rng: &mut StdRng) -> usize {
    debug_assert!(domain_size >= 2);
    let drawn = rng.gen_range(0..domain_size - 1);
    if drawn >= current {
        drawn + 1
    } else {
        drawn
    }
}

/// Uniform draws tried by [`redraw_scalar`] before it settles on a fixed value.
const MAX_REDRAWS: usize = 16;

/// Draws a value from `[min, max)` different from `current`.
///
/// Spans only a few ulps wide can keep drawing `current`. After
/// `MAX_REDRAWS` misses the midpoint of the span is returned, or `min` when
/// `current` already lies at or above it. A span with no representable value
/// strictly inside it returns `min`.
pub fn redraw_scalar(current: f64, min: f64, max: f64, rng: &mut StdRng) -> f64 {
    for _ in 0..MAX_REDRAWS {
        let drawn = rng.gen_range(min..max);
        if drawn != current {
            return drawn;
        }
    }

    let midpoint = min + (max - min) / 2.0;
    if current < midpoint && midpoint < max {
        midpoint
    } else {
        min
    }
}

/// Applies `mutate` to the genes of every individual in place.
///
/// `mutate` must only write values from the strategy's valid domain.
pub fn mutate_population<G, F>(
    execution: Execution,
    population: &mut [Individual<G>],
    mutation_prob: f64,
    streams: SeedStream,
    mutate: F,
) -> Result<()>
where
    G: Genome,
    F: Fn(&mut G, f64, &mut StdRng) + Sync + Send,
{
    check_probability(mutation_prob)?;

    parallel::for_each_mut(execution, population, streams, |individual, rng| {
        mutate(individual.genes_mut(), mutation_prob, rng);
        Ok(())
    })
}
