pub mod breeding;
pub mod error;
pub mod evolution;
pub mod individual;
pub mod parallel;
pub mod rng;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Phase, Result};
pub use evolution::{GenerationHistory, GeneticOptimization, GeneticOptimizationParams};
pub use individual::{Genome, Individual, Population};
pub use parallel::Execution;
pub use rng::RandomNumberGenerator;
pub use selection::Objective;
pub use strategy::ProblemStrategy;
