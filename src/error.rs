//! # Error Types
//!
//! This module defines the error type shared by the whole optimization engine.
//! Errors fall into three families:
//!
//! - configuration errors, raised when parameters or the optimizer itself are
//!   built with invalid values;
//! - domain value errors, raised when a gene payload or a fitness value is invalid;
//! - strategy errors, raised when a strategy callback fails while a run is in progress.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use genopt::error::{GeneticError, Result};
//!
//! fn check_size(size: usize) -> Result<usize> {
//!     if size == 0 {
//!         return Err(GeneticError::Configuration("size cannot be zero".to_string()));
//!     }
//!     Ok(size)
//! }
//!
//! assert!(check_size(0).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use genopt::error::{GeneticError, OptionExt};
//!
//! fn first_score(scores: &[f64]) -> genopt::error::Result<f64> {
//!     scores.first().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert!(first_score(&[]).is_err());
//! ```

use std::fmt;

use thiserror::Error;

/// The phase of a generation in which a strategy callback was running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Building the random generation-0 population.
    Init,
    /// Scoring and ranking a population.
    Evaluating,
    /// Picking the breeding sub-population.
    Selecting,
    /// Recombining parents into a new population.
    Crossing,
    /// Mutating the new population in place.
    Mutating,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Init => "generating",
            Phase::Evaluating => "evaluating",
            Phase::Selecting => "selecting",
            Phase::Crossing => "crossing",
            Phase::Mutating => "mutating",
        };
        f.write_str(name)
    }
}

/// Represents errors that can occur in the optimization engine.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Invalid run parameters, or an optimizer built without a strategy or parameters.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An invalid gene payload or fitness value.
    #[error("Domain value error: {0}")]
    DomainValue(String),

    /// An operation received an empty population.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// A strategy callback failed during a run. The run is aborted.
    #[error("Strategy failed while {phase} generation {generation}: {source}")]
    Strategy {
        phase: Phase,
        generation: usize,
        #[source]
        source: Box<GeneticError>,
    },
}

impl GeneticError {
    /// Wraps an error raised by a strategy callback with the phase and generation it came from.
    pub fn in_strategy(self, phase: Phase, generation: usize) -> Self {
        GeneticError::Strategy {
            phase,
            generation,
            source: Box::new(self),
        }
    }
}

/// A specialized Result type for optimization operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
