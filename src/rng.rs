//! # RandomNumberGenerator
//!
//! Every strategy owns one `RandomNumberGenerator`, the master source of
//! randomness for a run. Work that may run concurrently never draws from the
//! master directly. Instead each random phase calls [`RandomNumberGenerator::split`]
//! once, and the returned [`SeedStream`] hands out an independent generator per
//! chunk of work, addressed by chunk index.
//!
//! ## Example
//!
//! ```rust
//! use genopt::rng::RandomNumberGenerator;
//! use rand::Rng;
//!
//! let mut master = RandomNumberGenerator::from_seed(42);
//! let streams = master.split();
//!
//! let mut first = streams.stream(0);
//! let mut again = streams.stream(0);
//! assert_eq!(first.gen::<u64>(), again.gen::<u64>());
//! ```

use rand::{rngs::StdRng, RngCore, SeedableRng};

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// SplitMix64 finalizer.
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// A wrapper around the `rand` crate's `StdRng` used as the master generator of a strategy.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a fresh phase seed and returns the stream family derived from it.
    pub fn split(&mut self) -> SeedStream {
        SeedStream {
            seed: self.rng.next_u64(),
        }
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// An index-addressable family of independent generators derived from one phase seed.
///
/// `stream(i)` always returns a generator in the same state for the same seed
/// and index, regardless of the thread that asks for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedStream {
    seed: u64,
}

impl SeedStream {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the generator for the work unit at `index`.
    pub fn stream(&self, index: usize) -> StdRng {
        StdRng::seed_from_u64(mix(self.seed ^ mix(index as u64)))
    }
}
