pub mod builder;
pub mod history;
pub mod optimization;
pub mod params;

pub use crate::error::Phase;
pub use builder::GeneticOptimizationBuilder;
pub use history::GenerationHistory;
pub use optimization::GeneticOptimization;
pub use params::{GeneticOptimizationParams, GeneticOptimizationParamsBuilder};
