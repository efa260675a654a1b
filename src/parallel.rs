//! # Parallel evaluation
//!
//! Helpers that fan per-individual work out over Rayon's thread pool, or run it
//! in order on the calling thread, depending on an [`Execution`] mode.
//!
//! Every helper returns only after all of its work units finished, so a call
//! acts as the barrier between two phases of a generation.
//!
//! Randomised helpers cut the index space into chunks of [`STREAM_CHUNK_SIZE`]
//! items, and chunk `c` draws only from `streams.stream(c)`. The chunking is the
//! same in both modes, so for one phase seed a sequential and a parallel call
//! produce the same values.

use std::cmp::min;

use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::error::Result;
use crate::individual::Individual;
use crate::rng::SeedStream;

/// Number of consecutive work units that share one derived generator.
pub const STREAM_CHUNK_SIZE: usize = 64;

/// How the per-individual phases of a strategy are executed.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    /// One thread, strict order.
    #[default]
    Sequential,
    /// Work units spread over the Rayon thread pool.
    Parallel,
}

fn chunk_count(len: usize) -> usize {
    len.div_ceil(STREAM_CHUNK_SIZE)
}

/// Builds `count` items, giving item `i` the generator of its chunk.
pub fn generate<T, F>(
    execution: Execution,
    count: usize,
    streams: SeedStream,
    f: F,
) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(usize, &mut StdRng) -> Result<T> + Sync + Send,
{
    let build_chunk = |chunk: usize| -> Result<Vec<T>> {
        let mut rng = streams.stream(chunk);
        let start = chunk * STREAM_CHUNK_SIZE;
        let end = min(start + STREAM_CHUNK_SIZE, count);
        (start..end).map(|index| f(index, &mut rng)).collect()
    };

    let chunks: Vec<Vec<T>> = match execution {
        Execution::Sequential => (0..chunk_count(count))
            .map(build_chunk)
            .collect::<Result<_>>()?,
        Execution::Parallel => (0..chunk_count(count))
            .into_par_iter()
            .map(build_chunk)
            .collect::<Result<_>>()?,
    };

    Ok(chunks.into_iter().flatten().collect())
}

/// Applies `f` to every item in place, giving each item the generator of its chunk.
pub fn for_each_mut<T, F>(
    execution: Execution,
    items: &mut [T],
    streams: SeedStream,
    f: F,
) -> Result<()>
where
    T: Send,
    F: Fn(&mut T, &mut StdRng) -> Result<()> + Sync + Send,
{
    let apply_chunk = |(chunk, slice): (usize, &mut [T])| -> Result<()> {
        let mut rng = streams.stream(chunk);
        slice.iter_mut().try_for_each(|item| f(item, &mut rng))
    };

    match execution {
        Execution::Sequential => items
            .chunks_mut(STREAM_CHUNK_SIZE)
            .enumerate()
            .try_for_each(apply_chunk),
        Execution::Parallel => items
            .par_chunks_mut(STREAM_CHUNK_SIZE)
            .enumerate()
            .try_for_each(apply_chunk),
    }
}

/// Scores every individual with `score`, then sorts the population ascending by fitness.
///
/// The sort is stable: individuals with equal fitness keep their relative order.
/// A non-finite score fails the whole pass before any sorting happens.
pub fn evaluate<G, F>(
    execution: Execution,
    population: &mut [Individual<G>],
    score: F,
) -> Result<()>
where
    G: Send,
    F: Fn(&G) -> f64 + Sync + Send,
{
    let assign = |individual: &mut Individual<G>| -> Result<()> {
        let fitness = score(individual.genes());
        individual.set_fitness(fitness)
    };

    match execution {
        Execution::Sequential => population.iter_mut().try_for_each(assign)?,
        Execution::Parallel => population.par_iter_mut().try_for_each(assign)?,
    }

    rank(execution, population);
    Ok(())
}

/// Sorts a population ascending by fitness with a stable sort.
pub fn rank<G: Send>(execution: Execution, population: &mut [Individual<G>]) {
    match execution {
        Execution::Sequential => population.sort_by(Individual::cmp_fitness),
        Execution::Parallel => population.par_sort_by(Individual::cmp_fitness),
    }
}

/// Returns whether the population is sorted ascending by fitness.
pub fn is_ranked<G>(population: &[Individual<G>]) -> bool {
    population
        .windows(2)
        .all(|pair| pair[0].cmp_fitness(&pair[1]).is_le())
}
