//! # Breeding operators
//!
//! Sense-independent crossover and mutation building blocks. Concrete strategies
//! compose these instead of inheriting shared behavior.

pub mod crossover;
pub mod mutation;

pub use crossover::{
    arithmetic_mean, crossover_population, pick_parent, random_splice, single_point_splice,
};
pub use mutation::{
    check_probability, mutate_loci, mutate_population, redraw_index, redraw_scalar,
};
