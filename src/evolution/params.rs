//! # GeneticOptimizationParams
//!
//! The validated configuration of one optimization run.
//!
//! ## Example
//!
//! ```rust
//! use genopt::evolution::params::GeneticOptimizationParams;
//!
//! // population size, generation budget, selection percent, mutation probability
//! let mut params = GeneticOptimizationParams::new(1000, 5000, 0.05, 0.01).unwrap();
//! params.set_target_value(0.0).unwrap();
//!
//! assert_eq!(params.get_selection_size(), 50);
//! assert!(params.is_target_reached(0.0));
//!
//! // Invalid values are rejected immediately.
//! assert!(GeneticOptimizationParams::new(0, 5000, 0.05, 0.01).is_err());
//! assert!(GeneticOptimizationParams::new(1000, 5000, 1.5, 0.01).is_err());
//! ```
//!
//! ## Fields
//!
//! - `population_size`: number of individuals in every generation, `> 0`.
//! - `max_generations`: number of generations bred after the initial one, `> 0`.
//! - `selection_percent`: fraction of a generation kept as parents, in `(0, 1]`.
//! - `mutation_prob`: per-locus mutation probability, in `[0, 1]`.
//! - `target_value`: fitness that ends the run early. Defaults to `f64::INFINITY`,
//!   which no finite fitness can reach.
//! - `target_tolerance`: how far from `target_value` a fitness may be and still
//!   count as reaching it. Defaults to `0.0`, i.e. exact equality.
//!
//! With the `serde` feature, deserialization goes through the same checks as
//! [`GeneticOptimizationParams::new`]. A missing or `null` target value means no
//! target, which is also how JSON writes the infinite default.

use crate::breeding::check_probability;
use crate::error::{GeneticError, Result};
use crate::selection::{kept_count, selection_size};

#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawParams")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct GeneticOptimizationParams {
    population_size: usize,
    max_generations: usize,
    selection_percent: f64,
    mutation_prob: f64,
    target_value: f64,
    target_tolerance: f64,
}

impl GeneticOptimizationParams {
    /// Creates validated parameters with no target value.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if:
    /// - `population_size` or `max_generations` is zero
    /// - `selection_percent` is outside `(0, 1]`
    /// - `mutation_prob` is outside `[0, 1]`
    /// - `selection_percent` of `population_size` rounds down to zero parents
    pub fn new(
        population_size: usize,
        max_generations: usize,
        selection_percent: f64,
        mutation_prob: f64,
    ) -> Result<Self> {
        if population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size must be greater than zero".to_string(),
            ));
        }
        if max_generations == 0 {
            return Err(GeneticError::Configuration(
                "Max generations must be greater than zero".to_string(),
            ));
        }
        let selected = selection_size(population_size, selection_percent)?;
        check_probability(mutation_prob)?;
        if selected == 0 {
            return Err(GeneticError::Configuration(format!(
                "Selecting {} of {} individuals leaves no parents",
                selection_percent, population_size
            )));
        }

        Ok(Self {
            population_size,
            max_generations,
            selection_percent,
            mutation_prob,
            target_value: f64::INFINITY,
            target_tolerance: 0.0,
        })
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_max_generations(&self) -> usize {
        self.max_generations
    }

    pub fn get_selection_percent(&self) -> f64 {
        self.selection_percent
    }

    pub fn get_mutation_prob(&self) -> f64 {
        self.mutation_prob
    }

    pub fn get_target_value(&self) -> f64 {
        self.target_value
    }

    pub fn get_target_tolerance(&self) -> f64 {
        self.target_tolerance
    }

    /// Number of parents kept by each selection: `floor(selection_percent * population_size)`.
    pub fn get_selection_size(&self) -> usize {
        kept_count(self.population_size, self.selection_percent)
    }

    /// Returns whether a target value has been set.
    pub fn has_target(&self) -> bool {
        self.target_value.is_finite()
    }

    /// Sets the fitness that ends the run early. NaN and infinite values are rejected.
    pub fn set_target_value(&mut self, target_value: f64) -> Result<()> {
        if !target_value.is_finite() {
            return Err(GeneticError::Configuration(format!(
                "Target value must be finite, found {}",
                target_value
            )));
        }
        self.target_value = target_value;
        Ok(())
    }

    /// Sets the tolerance used by [`is_target_reached`](Self::is_target_reached).
    pub fn set_target_tolerance(&mut self, target_tolerance: f64) -> Result<()> {
        if !target_tolerance.is_finite() || target_tolerance < 0.0 {
            return Err(GeneticError::Configuration(format!(
                "Target tolerance must be finite and non-negative, found {}",
                target_tolerance
            )));
        }
        self.target_tolerance = target_tolerance;
        Ok(())
    }

    /// Returns whether `fitness` reaches the target value.
    ///
    /// With a zero tolerance this is exact equality. Without a target it is always false.
    pub fn is_target_reached(&self, fitness: f64) -> bool {
        if !self.has_target() {
            return false;
        }
        if self.target_tolerance == 0.0 {
            return fitness == self.target_value;
        }
        (fitness - self.target_value).abs() <= self.target_tolerance
    }

    /// Returns a builder for creating a `GeneticOptimizationParams` instance.
    ///
    /// Unset fields take the values of [`Default`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use genopt::evolution::params::GeneticOptimizationParams;
    ///
    /// let params = GeneticOptimizationParams::builder()
    ///     .population_size(1000)
    ///     .max_generations(2000)
    ///     .selection_percent(0.2)
    ///     .mutation_prob(0.01)
    ///     .target_value(0.0)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(params.get_target_value(), 0.0);
    /// ```
    pub fn builder() -> GeneticOptimizationParamsBuilder {
        GeneticOptimizationParamsBuilder::default()
    }
}

impl Default for GeneticOptimizationParams {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 100,
            selection_percent: 0.2,
            mutation_prob: 0.01,
            target_value: f64::INFINITY,
            target_tolerance: 0.0,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawParams {
    population_size: usize,
    max_generations: usize,
    selection_percent: f64,
    mutation_prob: f64,
    #[serde(default)]
    target_value: Option<f64>,
    #[serde(default)]
    target_tolerance: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawParams> for GeneticOptimizationParams {
    type Error = GeneticError;

    fn try_from(raw: RawParams) -> Result<Self> {
        let mut params = Self::new(
            raw.population_size,
            raw.max_generations,
            raw.selection_percent,
            raw.mutation_prob,
        )?;
        if let Some(target_value) = raw.target_value {
            params.set_target_value(target_value)?;
        }
        params.set_target_tolerance(raw.target_tolerance)?;
        Ok(params)
    }
}

/// Builder for `GeneticOptimizationParams`.
///
/// Validation happens once, in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct GeneticOptimizationParamsBuilder {
    population_size: Option<usize>,
    max_generations: Option<usize>,
    selection_percent: Option<f64>,
    mutation_prob: Option<f64>,
    target_value: Option<f64>,
    target_tolerance: Option<f64>,
}

impl GeneticOptimizationParamsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    pub fn selection_percent(mut self, value: f64) -> Self {
        self.selection_percent = Some(value);
        self
    }

    pub fn mutation_prob(mut self, value: f64) -> Self {
        self.mutation_prob = Some(value);
        self
    }

    pub fn target_value(mut self, value: f64) -> Self {
        self.target_value = Some(value);
        self
    }

    pub fn target_tolerance(mut self, value: f64) -> Self {
        self.target_tolerance = Some(value);
        self
    }

    /// Validates the collected values and builds the parameters.
    pub fn build(self) -> Result<GeneticOptimizationParams> {
        let defaults = GeneticOptimizationParams::default();
        let mut params = GeneticOptimizationParams::new(
            self.population_size.unwrap_or(defaults.population_size),
            self.max_generations.unwrap_or(defaults.max_generations),
            self.selection_percent.unwrap_or(defaults.selection_percent),
            self.mutation_prob.unwrap_or(defaults.mutation_prob),
        )?;
        if let Some(target_value) = self.target_value {
            params.set_target_value(target_value)?;
        }
        if let Some(target_tolerance) = self.target_tolerance {
            params.set_target_tolerance(target_tolerance)?;
        }
        Ok(params)
    }
}
